//! Error types for the Artistly core.
//!
//! This module defines the centralized error type [`ArtistlyError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.
//!
//! Every failure in this crate is immediate and terminal for the call that raised
//! it: nothing here performs I/O that could succeed on retry, apart from loading a
//! configuration file.

use super::application::ApplicationStatus;
use thiserror::Error;

/// The main error type for Artistly operations.
///
/// # Examples
///
/// ```
/// use artistly::ArtistlyError;
///
/// let err = ArtistlyError::ApplicationNotFound(42);
/// assert_eq!(err.to_string(), "No application with id 42");
/// ```
#[derive(Debug, Error)]
pub enum ArtistlyError {
    /// Login was attempted with an email/password pair that is not allow-listed.
    ///
    /// Surfaced directly to the user; there is no retry or lockout.
    #[error("Invalid credentials. Please use the manager account credentials.")]
    InvalidCredentials,

    /// A status update referenced an application id the registry does not hold.
    #[error("No application with id {0}")]
    ApplicationNotFound(u32),

    /// A status update tried to move an application out of a terminal status.
    ///
    /// Applications move from `pending` to `approved` or `rejected` exactly once.
    #[error("Application {id} cannot move from {from} to {to}")]
    InvalidTransition {
        /// Id of the application that was targeted.
        id: u32,
        /// Status the application currently holds.
        from: ApplicationStatus,
        /// Status the caller asked for.
        to: ApplicationStatus,
    },

    /// The onboarding form failed validation.
    ///
    /// Carries every failing field, not just the first one.
    #[error("Invalid application: {0}")]
    Validation(ValidationErrors),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Embedded seed data could not be decoded.
    #[error("Seed data error: {0}")]
    Seed(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single failing form field and the message shown next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// All field errors produced by one validation pass, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn push(&mut self, field: &'static str, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the message for `field`, if that field failed.
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

/// A specialized `Result` type for Artistly operations.
pub type Result<T> = std::result::Result<T, ArtistlyError>;
