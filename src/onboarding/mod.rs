//! Artist onboarding form.
//!
//! The "Join as Artist" form collects more than the registry stores. Validation
//! checks every field and reports all failures at once; a valid form is reduced to
//! a [`NewApplication`] ready for [`ApplicationRegistry::add`].
//!
//! [`ApplicationRegistry::add`]: crate::registry::ApplicationRegistry::add
//!
//! # Rules
//!
//! | field          | rule                                   |
//! |----------------|----------------------------------------|
//! | `name`         | required                               |
//! | `email`        | must look like `local@domain.tld`      |
//! | `category`     | required                               |
//! | `location`     | required                               |
//! | `bio`          | at least 10 characters                 |
//! | `experience`   | required                               |
//! | `availability` | at least one option                    |

use crate::domain::{ArtistlyError, NewApplication, Result, ValidationErrors};
use serde::{Deserialize, Serialize};

/// Minimum number of characters in a bio.
const MIN_BIO_CHARS: usize = 10;

/// Image used when the applicant does not upload one.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Fee recorded for applications coming through the form; managers set it later.
const UNSET_FEE: &str = "0";

/// When the performer is available for bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Weekends,
    Weekdays,
    Evenings,
}

/// Raw values submitted by the onboarding form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingForm {
    pub name: String,
    pub email: String,
    pub category: String,
    pub location: String,
    pub bio: String,
    pub experience: String,
    #[serde(default)]
    pub availability: Vec<Availability>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl OnboardingForm {
    /// Collects every field error without converting.
    #[must_use]
    pub fn errors(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if self.name.is_empty() {
            errors.push("name", "Name is required");
        }
        if !is_email(&self.email) {
            errors.push("email", "Invalid email address");
        }
        if self.category.is_empty() {
            errors.push("category", "Category is required");
        }
        if self.location.is_empty() {
            errors.push("location", "Location is required");
        }
        if self.bio.chars().count() < MIN_BIO_CHARS {
            errors.push("bio", "Bio must be at least 10 characters");
        }
        if self.experience.is_empty() {
            errors.push("experience", "Experience is required");
        }
        if self.availability.is_empty() {
            errors.push("availability", "Select at least one availability option");
        }

        errors
    }

    /// Validates the form and converts it into registry input.
    ///
    /// The location becomes the application's city; the fee is recorded as `"0"`
    /// and languages start empty.
    ///
    /// # Errors
    ///
    /// Returns [`ArtistlyError::Validation`] listing every failing field.
    pub fn validate(self) -> Result<NewApplication> {
        let errors = self.errors();
        if !errors.is_empty() {
            tracing::debug!(error_count = errors.len(), %errors, "onboarding form rejected");
            return Err(ArtistlyError::Validation(errors));
        }

        Ok(NewApplication {
            name: self.name,
            category: self.category,
            city: self.location,
            fee: UNSET_FEE.to_string(),
            languages: Vec::new(),
            email: Some(self.email),
            bio: Some(self.bio),
            profile_image: Some(
                self.profile_image
                    .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            ),
        })
    }
}

// Same shape check as a browser `type=email` field: one `@`, non-empty local
// part, dotted domain, no whitespace.
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .split_once('.')
        .is_some_and(|(host, rest)| !host.is_empty() && !rest.is_empty() && !rest.ends_with('.'))
}
