//! Booking request domain model.
//!
//! Booking requests are shown read-only on the manager dashboard.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
}

/// A client's request to hire an artist for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub id: u32,
    pub event_type: String,
    pub client_name: String,
    pub artist_requested: String,
    pub date: chrono::NaiveDate,
    pub location: String,
    pub budget: String,
    pub status: BookingStatus,
}
