//! Artist filter inputs and matching.
//!
//! A filter combines a free-text search term with three categorical selections
//! (category, location, price range). An entry matches when all four agree:
//!
//! ```text
//! matches = text && category && location && price
//! ```
//!
//! - **text**: the lowercase search term is a substring of the lowercase name or of
//!   any lowercase specialty. An empty term matches everything.
//! - **category / location / price**: the selection is [`Selection::All`] or equals
//!   the entry's field exactly (case-sensitive).

use crate::domain::ArtistCatalogEntry;
use std::fmt;

/// Sentinel option value meaning "do not filter on this field".
pub const ALL: &str = "all";

/// One categorical filter input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Reads a select-box value, mapping the `"all"` sentinel to [`Selection::All`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    #[must_use]
    pub fn matches(&self, field: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(value) => value == field,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(value) => value,
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current inputs of the artist browsing page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArtistFilter {
    pub search_term: String,
    pub category: Selection,
    pub location: Selection,
    pub price_range: Selection,
}

impl ArtistFilter {
    /// Builds a filter from raw input values, treating `"all"` as no filter.
    #[must_use]
    pub fn new(search_term: &str, category: &str, location: &str, price_range: &str) -> Self {
        Self {
            search_term: search_term.to_string(),
            category: Selection::parse(category),
            location: Selection::parse(location),
            price_range: Selection::parse(price_range),
        }
    }

    /// Resets every input, the "Clear Filters" action.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// `true` when no input narrows the catalog.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.search_term.is_empty()
            && self.category == Selection::All
            && self.location == Selection::All
            && self.price_range == Selection::All
    }

    /// Tests one catalog entry against all four inputs.
    #[must_use]
    pub fn matches(&self, artist: &ArtistCatalogEntry) -> bool {
        let term = self.search_term.to_lowercase();
        self.matches_with_term(artist, &term)
    }

    /// Returns matching entries in their original order.
    ///
    /// A full linear scan runs on every call; the catalog is small and static.
    #[must_use]
    pub fn apply<'a>(&self, artists: &'a [ArtistCatalogEntry]) -> Vec<&'a ArtistCatalogEntry> {
        let _span = tracing::debug_span!("apply_artist_filter",
            total_artists = artists.len(),
            term_len = self.search_term.len(),
            category = %self.category,
            location = %self.location,
            price_range = %self.price_range
        ).entered();

        let term = self.search_term.to_lowercase();
        let filtered: Vec<&ArtistCatalogEntry> = artists
            .iter()
            .filter(|artist| self.matches_with_term(artist, &term))
            .collect();

        tracing::debug!(filtered_count = filtered.len(), "artist filter applied");
        filtered
    }

    fn matches_with_term(&self, artist: &ArtistCatalogEntry, term: &str) -> bool {
        let text_match = artist.name.to_lowercase().contains(term)
            || artist
                .specialties
                .iter()
                .any(|specialty| specialty.to_lowercase().contains(term));

        text_match
            && self.category.matches(&artist.category)
            && self.location.matches(&artist.location)
            && self.price_range.matches(&artist.price_range)
    }
}
