//! Catalog artist domain model.

use serde::{Deserialize, Serialize};

/// An artist listed in the browsable catalog.
///
/// Catalog entries are static and read-only. `price_range` is the bucket label the
/// price filter compares against (e.g. `15k-25k`); `price` is the human-readable
/// label shown on the artist card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistCatalogEntry {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub rating: f32,
    pub reviews: u32,
    pub location: String,
    pub price_range: String,
    pub price: String,
    pub specialties: Vec<String>,
    pub bio: String,
    pub image: String,
}
