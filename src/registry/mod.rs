//! In-memory registry of artist applications.
//!
//! The registry owns the ordered list of applications (most recent first), assigns
//! identifiers and submission dates, and applies manager decisions.
//!
//! # Identifiers
//!
//! A new application receives `max(existing ids) + 1`, or `1` for an empty
//! registry. Ids are never reused because records are never removed.
//!
//! # Example
//!
//! ```
//! use artistly::registry::ApplicationRegistry;
//! use artistly::domain::{ApplicationStatus, Decision, NewApplication};
//!
//! let mut registry = ApplicationRegistry::new(vec![], 4.5);
//! let id = registry.add(NewApplication {
//!     name: "Asha Rao".into(),
//!     category: "Singer".into(),
//!     city: "Pune".into(),
//!     fee: "0".into(),
//!     ..Default::default()
//! }).id;
//!
//! let decided = registry.update_status(id, Decision::Approve)?;
//! assert_eq!(decided.status, ApplicationStatus::Approved);
//! assert_eq!(decided.rating, Some(4.5));
//! # Ok::<(), artistly::ArtistlyError>(())
//! ```

use crate::domain::{
    ApplicationStatus, ArtistApplication, ArtistlyError, Decision, NewApplication, Result,
};
use chrono::NaiveDate;

/// Rating given to an application when it is approved, unless configured otherwise.
pub const DEFAULT_APPROVAL_RATING: f32 = 4.5;

/// Ordered, mutable collection of applications.
#[derive(Debug, Clone)]
pub struct ApplicationRegistry {
    /// Most recently submitted first.
    applications: Vec<ArtistApplication>,
    approval_rating: f32,
}

impl Default for ApplicationRegistry {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_APPROVAL_RATING)
    }
}

impl ApplicationRegistry {
    /// Creates a registry holding `applications` in the given order.
    #[must_use]
    pub fn new(applications: Vec<ArtistApplication>, approval_rating: f32) -> Self {
        Self {
            applications,
            approval_rating,
        }
    }

    /// All applications, most recent first.
    #[must_use]
    pub fn applications(&self) -> &[ArtistApplication] {
        &self.applications
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.applications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    #[must_use]
    pub fn count_by_status(&self, status: ApplicationStatus) -> usize {
        self.applications
            .iter()
            .filter(|app| app.status == status)
            .count()
    }

    /// Adds a new application submitted today.
    ///
    /// See [`add_on`](Self::add_on).
    pub fn add(&mut self, input: NewApplication) -> &ArtistApplication {
        let today = chrono::Local::now().date_naive();
        self.add_on(input, today)
    }

    /// Adds a new application with an explicit submission date.
    ///
    /// The record is prepended, gets the next free id, starts `pending` and has no
    /// rating. Returns the stored record.
    pub fn add_on(&mut self, input: NewApplication, submitted_date: NaiveDate) -> &ArtistApplication {
        let id = self.next_id();
        let _span = tracing::debug_span!("registry_add",
            id = id,
            name = %input.name,
            category = %input.category
        ).entered();

        self.applications
            .insert(0, input.into_application(id, submitted_date));

        tracing::debug!(total = self.applications.len(), "application added");
        &self.applications[0]
    }

    /// Applies a manager decision to a pending application.
    ///
    /// Approval sets the configured approval rating; rejection clears the rating.
    /// No other field and no other record changes.
    ///
    /// # Errors
    ///
    /// - [`ArtistlyError::ApplicationNotFound`] if no record has `id`
    /// - [`ArtistlyError::InvalidTransition`] if the record was already decided
    ///
    /// The registry is left untouched in both cases.
    pub fn update_status(&mut self, id: u32, decision: Decision) -> Result<&ArtistApplication> {
        let _span = tracing::debug_span!("registry_update_status",
            id = id,
            decision = ?decision
        ).entered();

        let rating = self.approval_rating;
        let Some(application) = self.applications.iter_mut().find(|app| app.id == id) else {
            tracing::debug!("application not found");
            return Err(ArtistlyError::ApplicationNotFound(id));
        };

        let to = decision.status();
        if application.status.is_terminal() {
            tracing::debug!(from = %application.status, to = %to, "rejected status transition");
            return Err(ArtistlyError::InvalidTransition {
                id,
                from: application.status,
                to,
            });
        }

        application.status = to;
        application.rating = match decision {
            Decision::Approve => Some(rating),
            Decision::Reject => None,
        };

        tracing::debug!(status = %application.status, "application decided");
        Ok(&*application)
    }

    /// Looks up an application by id.
    #[must_use]
    pub fn get_by_id(&self, id: u32) -> Option<&ArtistApplication> {
        self.applications.iter().find(|app| app.id == id)
    }

    fn next_id(&self) -> u32 {
        self.applications
            .iter()
            .map(|app| app.id)
            .max()
            .unwrap_or(0)
            .saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> NewApplication {
        NewApplication {
            name: name.to_string(),
            category: "Singer".to_string(),
            city: "Mumbai".to_string(),
            fee: "0".to_string(),
            ..Default::default()
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_registry_starts_ids_at_one() {
        let mut registry = ApplicationRegistry::default();
        let added = registry.add_on(input("First"), date(2024, 6, 21));
        assert_eq!(added.id, 1);
        assert_eq!(added.submitted_date, date(2024, 6, 21));
    }

    #[test]
    fn ids_follow_the_maximum_not_the_length() {
        let mut registry = ApplicationRegistry::default();
        registry.add_on(input("a"), date(2024, 1, 1));
        let mut seeded = registry.applications().to_vec();
        seeded[0].id = 40;
        let mut registry = ApplicationRegistry::new(seeded, DEFAULT_APPROVAL_RATING);

        assert_eq!(registry.add(input("b")).id, 41);
    }

    #[test]
    fn newest_application_comes_first() {
        let mut registry = ApplicationRegistry::default();
        registry.add(input("older"));
        registry.add(input("newer"));

        let names: Vec<&str> = registry.applications().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["newer", "older"]);
    }

    #[test]
    fn rejection_clears_rating() {
        let mut registry = ApplicationRegistry::default();
        let id = registry.add(input("x")).id;

        let decided = registry.update_status(id, Decision::Reject).unwrap();
        assert_eq!(decided.status, ApplicationStatus::Rejected);
        assert_eq!(decided.rating, None);
    }

    #[test]
    fn configured_approval_rating_is_used() {
        let mut registry = ApplicationRegistry::new(vec![], 3.0);
        let id = registry.add(input("x")).id;
        assert_eq!(registry.update_status(id, Decision::Approve).unwrap().rating, Some(3.0));
    }

    #[test]
    fn decided_application_cannot_be_decided_again() {
        let mut registry = ApplicationRegistry::default();
        let id = registry.add(input("x")).id;
        registry.update_status(id, Decision::Approve).unwrap();

        let err = registry.update_status(id, Decision::Reject).unwrap_err();
        assert!(matches!(
            err,
            ArtistlyError::InvalidTransition {
                from: ApplicationStatus::Approved,
                to: ApplicationStatus::Rejected,
                ..
            }
        ));
        assert_eq!(registry.get_by_id(id).unwrap().rating, Some(DEFAULT_APPROVAL_RATING));
    }

    #[test]
    fn counts_by_status() {
        let mut registry = ApplicationRegistry::default();
        let a = registry.add(input("a")).id;
        registry.add(input("b"));
        registry.update_status(a, Decision::Approve).unwrap();

        assert_eq!(registry.count_by_status(ApplicationStatus::Approved), 1);
        assert_eq!(registry.count_by_status(ApplicationStatus::Pending), 1);
        assert_eq!(registry.count_by_status(ApplicationStatus::Rejected), 0);
    }
}
