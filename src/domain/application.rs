//! Artist application domain model.
//!
//! An application is a performer's request to join the marketplace. It is created
//! once by the onboarding flow and decided once by a manager; it is never deleted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Review status of an application.
///
/// The only legal transitions are `Pending -> Approved` and `Pending -> Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    /// Returns `true` once a manager has decided the application.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A manager's verdict on a pending application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    /// The status an application ends up in after this decision.
    #[must_use]
    pub const fn status(self) -> ApplicationStatus {
        match self {
            Self::Approve => ApplicationStatus::Approved,
            Self::Reject => ApplicationStatus::Rejected,
        }
    }
}

/// A submitted artist application as held by the registry.
///
/// `id` and `submitted_date` are assigned by the registry and never change.
/// `rating` is only present on approved applications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistApplication {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub city: String,
    pub fee: String,
    pub submitted_date: NaiveDate,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub languages: Vec<String>,
    pub rating: Option<f32>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// The caller-supplied part of an application.
///
/// Everything except the registry-owned fields (`id`, `submitted_date`, `status`,
/// `rating`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApplication {
    pub name: String,
    pub category: String,
    pub city: String,
    pub fee: String,
    pub languages: Vec<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
}

impl NewApplication {
    /// Turns the input into a stored record with registry-assigned fields.
    #[must_use]
    pub fn into_application(self, id: u32, submitted_date: NaiveDate) -> ArtistApplication {
        ArtistApplication {
            id,
            name: self.name,
            category: self.category,
            city: self.city,
            fee: self.fee,
            submitted_date,
            status: ApplicationStatus::Pending,
            languages: self.languages,
            rating: None,
            email: self.email,
            bio: self.bio,
            profile_image: self.profile_image,
        }
    }
}
