//! Application state container.
//!
//! [`AppState`] is the single owner of everything the site mutates or queries: the
//! application registry, the manager session, the artist catalog with its current
//! filter inputs, the dashboard booking requests and the current route. It is an
//! explicit value passed to [`handle_event`](super::handle_event), so independent
//! instances never share state.
//!
//! # Derived State
//!
//! Nothing derived is cached. [`AppState::filtered_artists`] and
//! [`AppState::dashboard_stats`] recompute from the current inputs on every call.
//!
//! # Example
//!
//! ```rust
//! use artistly::{initialize, Config};
//!
//! let mut state = initialize(&Config::default())?;
//! state.filter.category = "DJ".into();
//! assert!(state.filtered_artists().iter().all(|a| a.category == "DJ"));
//! # Ok::<(), artistly::ArtistlyError>(())
//! ```

use super::routes::Route;
use crate::auth::{CredentialVerifier, SessionStore, StaticCredentials};
use crate::catalog::{ArtistFilter, Catalog};
use crate::domain::{ApplicationStatus, ArtistCatalogEntry, BookingRequest};
use crate::registry::ApplicationRegistry;

/// Headline numbers shown at the top of the manager dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    /// Applications that were approved.
    pub approved_artists: usize,
    /// Applications still waiting for a decision.
    pub pending_applications: usize,
    pub total_applications: usize,
    pub booking_requests: usize,
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState<V = StaticCredentials> {
    /// Artist applications, most recent first.
    pub registry: ApplicationRegistry,

    /// The manager session, if any.
    pub session: SessionStore<V>,

    /// Read-only artist catalog.
    pub catalog: Catalog,

    /// Current inputs of the artist browsing page.
    pub filter: ArtistFilter,

    /// Booking requests listed on the dashboard.
    pub bookings: Vec<BookingRequest>,

    /// Page the user is currently on.
    pub route: Route,
}

impl<V: CredentialVerifier> AppState<V> {
    /// Creates a state on the home page with default filter inputs.
    #[must_use]
    pub fn new(
        registry: ApplicationRegistry,
        session: SessionStore<V>,
        catalog: Catalog,
        bookings: Vec<BookingRequest>,
    ) -> Self {
        Self {
            registry,
            session,
            catalog,
            filter: ArtistFilter::default(),
            bookings,
            route: Route::Home,
        }
    }

    /// Catalog entries matching the current filter, in catalog order.
    #[must_use]
    pub fn filtered_artists(&self) -> Vec<&ArtistCatalogEntry> {
        self.catalog.filter(&self.filter)
    }

    #[must_use]
    pub fn dashboard_stats(&self) -> DashboardStats {
        DashboardStats {
            approved_artists: self.registry.count_by_status(ApplicationStatus::Approved),
            pending_applications: self.registry.count_by_status(ApplicationStatus::Pending),
            total_applications: self.registry.len(),
            booking_requests: self.bookings.len(),
        }
    }

    /// Resolves where a request for `route` actually lands.
    ///
    /// Manager-only routes send anonymous users to the login page, remembering the
    /// requested path.
    #[must_use]
    pub fn guard(&self, route: Route) -> Route {
        if route.requires_manager() && !self.session.is_manager() {
            tracing::debug!(requested = %route, "redirecting to login");
            Route::login_from(&route)
        } else {
            route
        }
    }

    /// Where to go after a successful login.
    ///
    /// Returns to the path remembered by the login route when it names a real page,
    /// otherwise the dashboard.
    #[must_use]
    pub fn post_login_route(&self) -> Route {
        let remembered = match &self.route {
            Route::Login { from: Some(from) } => Some(Route::parse(from)),
            _ => None,
        };

        match remembered {
            Some(route @ (Route::Home | Route::Artists | Route::Onboard | Route::Dashboard)) => route,
            _ => Route::Dashboard,
        }
    }
}
