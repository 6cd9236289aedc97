//! Static artist catalog and its query engine.
//!
//! The catalog is read-only for the lifetime of the state that owns it. Queries go
//! through [`ArtistFilter`], which is recomputed from scratch on every input change.
//!
//! # Example
//!
//! ```
//! use artistly::catalog::{ArtistFilter, Catalog};
//!
//! let catalog = Catalog::seeded()?;
//! let jazz = catalog.filter(&ArtistFilter::new("jazz", "all", "all", "all"));
//! assert_eq!(jazz.len(), 1);
//! assert_eq!(jazz[0].name, "Sarah Johnson");
//! # Ok::<(), artistly::ArtistlyError>(())
//! ```

pub mod filter;

pub use filter::{ArtistFilter, Selection, ALL};

use crate::domain::{ArtistCatalogEntry, Result};

/// Category options of the browse page, `"all"` first.
pub const CATEGORY_OPTIONS: [&str; 5] = [ALL, "Singer", "Dancer", "DJ", "Speaker"];

/// Location options of the browse page, `"all"` first.
pub const LOCATION_OPTIONS: [&str; 6] = [ALL, "Mumbai", "Delhi", "Bangalore", "Chennai", "Pune"];

/// Price bucket options of the browse page, `"all"` first.
///
/// Artists whose bucket is not listed are only reachable with `"all"`.
pub const PRICE_RANGE_OPTIONS: [&str; 5] = [ALL, "10k-20k", "15k-25k", "20k-35k", "25k-40k"];

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    artists: Vec<ArtistCatalogEntry>,
}

impl Catalog {
    #[must_use]
    pub const fn new(artists: Vec<ArtistCatalogEntry>) -> Self {
        Self { artists }
    }

    /// The catalog shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded catalog cannot be decoded.
    pub fn seeded() -> Result<Self> {
        crate::seed::catalog_entries().map(Self::new)
    }

    #[must_use]
    pub fn artists(&self) -> &[ArtistCatalogEntry] {
        &self.artists
    }

    #[must_use]
    pub fn filter(&self, filter: &ArtistFilter) -> Vec<&ArtistCatalogEntry> {
        filter.apply(&self.artists)
    }

    /// The first `count` artists, as shown on the homepage.
    #[must_use]
    pub fn featured(&self, count: usize) -> &[ArtistCatalogEntry] {
        &self.artists[..count.min(self.artists.len())]
    }
}
