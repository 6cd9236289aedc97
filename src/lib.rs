//! Artistly: the state core of a performer-hiring marketplace site.
//!
//! The site lets visitors browse and filter a catalog of artists, lets performers
//! apply to join through an onboarding form, and gives a single manager account a
//! dashboard to approve or reject applications. This crate holds everything that
//! site keeps in memory, without any rendering:
//!
//! - An application registry with id assignment and one-shot approve/reject
//! - A manager session store behind a pluggable credential check
//! - A deterministic filter engine over the static artist catalog
//! - Onboarding form validation
//! - An event handler that returns navigation and toast actions for the view layer
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  View layer (pages, router, toasts)                 │  ← External
//! └─────────────────────────────────────────────────────┘
//!                        │ Event        ▲ Action
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, route guard                      │
//! │  - AppState, dashboard numbers                      │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ registry/     │   │ auth/         │   │ catalog/      │
//! │ Applications  │   │ Session store │   │ Filter engine │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/), onboarding validation, seeds     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: State container, events, actions and routes
//! - [`auth`]: Session store and credential verification
//! - [`catalog`]: Artist catalog and filter engine
//! - [`domain`]: Core domain types and errors
//! - [`infrastructure`]: Data directory resolution
//! - [`onboarding`]: Join-as-artist form validation
//! - [`registry`]: Artist application registry
//! - [`seed`]: Embedded seed data
//! - [`observability`]: Tracing subscriber with file-based span export
//!
//! # Configuration
//!
//! ```toml
//! manager_email = "manager@artistly.com"
//! manager_password = "manager123"
//! approval_rating = 4.5
//! trace_level = "debug"
//! data_dir = "/var/lib/artistly"
//! ```
//!
//! # Example
//!
//! ```rust
//! use artistly::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default())?;
//!
//! handle_event(&mut state, &Event::Login {
//!     email: "manager@artistly.com".into(),
//!     password: "manager123".into(),
//! })?;
//! handle_event(&mut state, &Event::ApproveApplication(1))?;
//!
//! assert_eq!(state.registry.get_by_id(1).and_then(|a| a.rating), Some(4.5));
//! # Ok::<(), artistly::ArtistlyError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod auth;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod onboarding;
pub mod registry;
pub mod seed;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Route};
pub use domain::{ArtistlyError, Result};

use auth::{SessionStore, StaticCredentials, DEFAULT_MANAGER_EMAIL, DEFAULT_MANAGER_PASSWORD};
use catalog::Catalog;
use registry::{ApplicationRegistry, DEFAULT_APPROVAL_RATING};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Runtime configuration.
///
/// Every field has a default, so an empty map or an empty TOML document yields
/// [`Config::default`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Email of the single manager account.
    pub manager_email: String,

    /// Password of the single manager account.
    pub manager_password: String,

    /// Rating given to applications when they are approved. Must lie in `0.0..=5.0`.
    pub approval_rating: f32,

    /// Tracing filter directive (`trace`, `debug`, `info`, `warn`, `error`, or a
    /// full `EnvFilter` string). Default: `"info"`
    pub trace_level: Option<String>,

    /// Directory for the trace file. Defaults to
    /// [`infrastructure::get_data_dir`].
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manager_email: DEFAULT_MANAGER_EMAIL.to_string(),
            manager_password: DEFAULT_MANAGER_PASSWORD.to_string(),
            approval_rating: DEFAULT_APPROVAL_RATING,
            trace_level: None,
            data_dir: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map, such as environment-style settings.
    ///
    /// Parsing is lenient: missing, empty or unparsable values fall back to their
    /// defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use artistly::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("approval_rating".to_string(), "4.0".to_string());
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.approval_rating, 4.0);
    /// assert_eq!(config.manager_email, "manager@artistly.com");
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let approval_rating = non_empty("approval_rating")
            .and_then(|s| s.parse::<f32>().ok())
            .filter(|r| valid_rating(*r))
            .unwrap_or(defaults.approval_rating);

        Self {
            manager_email: non_empty("manager_email").unwrap_or(defaults.manager_email),
            manager_password: non_empty("manager_password").unwrap_or(defaults.manager_password),
            approval_rating,
            trace_level: non_empty("trace_level"),
            data_dir: non_empty("data_dir").map(PathBuf::from),
        }
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ArtistlyError::Config`] if the document is not valid TOML, has a
    /// field of the wrong type, or sets an approval rating outside `0.0..=5.0`.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| ArtistlyError::Config(format!("failed to parse TOML: {e}")))?;

        if !valid_rating(config.approval_rating) {
            return Err(ArtistlyError::Config(format!(
                "approval_rating must be between 0 and 5, got {}",
                config.approval_rating
            )));
        }
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ArtistlyError::Io`] if the file cannot be read, or the errors of
    /// [`Config::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading configuration file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

fn valid_rating(rating: f32) -> bool {
    (0.0..=5.0).contains(&rating)
}

/// Builds the initial state from configuration and the embedded seed data.
///
/// The state starts on the home page, with nobody logged in and no filter applied.
/// Tracing is not installed here; call [`observability::init_tracing`] first if
/// spans should be exported.
///
/// # Errors
///
/// Returns [`ArtistlyError::Seed`] if the embedded seed data cannot be decoded.
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!("initializing artistly state");

    let registry = ApplicationRegistry::new(seed::initial_applications()?, config.approval_rating);
    let session = SessionStore::new(StaticCredentials::new(
        config.manager_email.clone(),
        config.manager_password.clone(),
    ));
    let catalog = Catalog::seeded()?;
    let bookings = seed::booking_requests()?;

    tracing::debug!(
        applications = registry.len(),
        artists = catalog.artists().len(),
        bookings = bookings.len(),
        "state initialized"
    );

    Ok(AppState::new(registry, session, catalog, bookings))
}
