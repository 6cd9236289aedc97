//! Embedded seed data.
//!
//! The initial applications, the artist catalog and the dashboard booking requests
//! ship inside the crate as JSON documents under `data/`. They are decoded once when
//! an [`AppState`](crate::AppState) is built.

use crate::domain::{ArtistApplication, ArtistCatalogEntry, ArtistlyError, BookingRequest, Result};
use serde::de::DeserializeOwned;

const APPLICATIONS_JSON: &str = include_str!("../data/applications.json");
const ARTISTS_JSON: &str = include_str!("../data/artists.json");
const BOOKINGS_JSON: &str = include_str!("../data/bookings.json");

fn decode<T: DeserializeOwned>(name: &str, json: &str) -> Result<Vec<T>> {
    let records: Vec<T> = serde_json::from_str(json)
        .map_err(|e| ArtistlyError::Seed(format!("failed to parse {name}: {e}")))?;

    tracing::trace!(seed = name, count = records.len(), "decoded seed data");
    Ok(records)
}

/// Applications present when the site starts, most recent first.
///
/// # Errors
///
/// Returns [`ArtistlyError::Seed`] if the embedded document is malformed.
pub fn initial_applications() -> Result<Vec<ArtistApplication>> {
    decode("applications.json", APPLICATIONS_JSON)
}

/// The static artist catalog, in display order.
///
/// # Errors
///
/// Returns [`ArtistlyError::Seed`] if the embedded document is malformed.
pub fn catalog_entries() -> Result<Vec<ArtistCatalogEntry>> {
    decode("artists.json", ARTISTS_JSON)
}

/// Booking requests shown on the manager dashboard.
///
/// # Errors
///
/// Returns [`ArtistlyError::Seed`] if the embedded document is malformed.
pub fn booking_requests() -> Result<Vec<BookingRequest>> {
    decode("bookings.json", BOOKINGS_JSON)
}
