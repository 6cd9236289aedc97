//! Domain layer for the Artistly core.
//!
//! This module contains the core domain types, independent of any state container
//! or UI concern.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`application`]: Artist applications and their review status
//! - [`artist`]: Read-only catalog entries
//! - [`booking`]: Booking requests shown on the dashboard
//! - [`user`]: Authenticated identities
//!
//! # Examples
//!
//! ```
//! use artistly::domain::{ApplicationStatus, Decision};
//!
//! assert_eq!(Decision::Approve.status(), ApplicationStatus::Approved);
//! assert!(!ApplicationStatus::Pending.is_terminal());
//! ```

pub mod application;
pub mod artist;
pub mod booking;
pub mod error;
pub mod user;

pub use application::{ApplicationStatus, ArtistApplication, Decision, NewApplication};
pub use artist::ArtistCatalogEntry;
pub use booking::{BookingRequest, BookingStatus};
pub use error::{ArtistlyError, FieldError, Result, ValidationErrors};
pub use user::{Role, User};
