//! Event handling and state transition logic.
//!
//! This module implements the event handler that turns user actions coming from the
//! view layer into state changes and side-effect [`Action`]s.
//!
//! # Event Types
//!
//! - **Navigation**: `Navigate`
//! - **Browsing**: `SearchChanged`, `CategorySelected`, `LocationSelected`,
//!   `PriceRangeSelected`, `ClearFilters`
//! - **Session**: `Login`, `Logout`
//! - **Onboarding**: `SubmitApplication`
//! - **Dashboard** (manager only): `ApproveApplication`, `RejectApplication`,
//!   `ViewApplication`, `SendMessage`
//!
//! Dashboard events from an anonymous user do not fail; they redirect to the login
//! page the same way navigating to the dashboard does.
//!
//! # Example
//!
//! ```rust
//! use artistly::app::{handle_event, Action, Event, Route};
//! use artistly::{initialize, Config};
//!
//! let mut state = initialize(&Config::default())?;
//! let (_, actions) = handle_event(&mut state, &Event::Navigate(Route::Dashboard))?;
//! assert_eq!(actions, vec![Action::Navigate(Route::login_from(&Route::Dashboard))]);
//! # Ok::<(), artistly::ArtistlyError>(())
//! ```

use super::actions::{Action, Toast};
use super::routes::Route;
use super::state::AppState;
use crate::auth::CredentialVerifier;
use crate::catalog::Selection;
use crate::domain::{Decision, Result};
use crate::onboarding::OnboardingForm;

/// Events triggered by user input on one of the pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Requests a page change.
    Navigate(Route),

    /// The artist search box changed.
    SearchChanged(String),
    /// A category was picked; `"all"` clears the category filter.
    CategorySelected(String),
    /// A location was picked; `"all"` clears the location filter.
    LocationSelected(String),
    /// A price bucket was picked; `"all"` clears the price filter.
    PriceRangeSelected(String),
    /// Resets search and all selections.
    ClearFilters,

    /// Manager login form submitted.
    Login {
        email: String,
        password: String,
    },
    Logout,

    /// Onboarding form submitted.
    SubmitApplication(OnboardingForm),

    ApproveApplication(u32),
    RejectApplication(u32),
    ViewApplication(u32),
    /// Opens a message thread with the named artist.
    SendMessage(String),
}

/// Processes an event, mutates state, and returns actions to execute.
///
/// The returned flag is `true` when observable state changed and the view should
/// re-render.
///
/// # Errors
///
/// - `InvalidCredentials` from a failed `Login`
/// - `Validation` from an invalid `SubmitApplication`
/// - `ApplicationNotFound` / `InvalidTransition` from a dashboard decision
///
/// State is unchanged whenever an error is returned.
pub fn handle_event<V: CredentialVerifier>(
    state: &mut AppState<V>,
    event: &Event,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_kind(event)).entered();

    match event {
        Event::Navigate(route) => {
            let target = state.guard(route.clone());
            let changed = state.route != target;
            state.route = target.clone();
            Ok((changed, vec![Action::Navigate(target)]))
        }

        Event::SearchChanged(term) => {
            if state.filter.search_term == *term {
                return Ok((false, vec![]));
            }
            state.filter.search_term.clone_from(term);
            tracing::trace!(term = %term, "search term updated");
            Ok((true, vec![]))
        }
        Event::CategorySelected(value) => Ok((replace(&mut state.filter.category, value), vec![])),
        Event::LocationSelected(value) => Ok((replace(&mut state.filter.location, value), vec![])),
        Event::PriceRangeSelected(value) => {
            Ok((replace(&mut state.filter.price_range, value), vec![]))
        }
        Event::ClearFilters => {
            let changed = !state.filter.is_default();
            state.filter.clear();
            Ok((changed, vec![]))
        }

        Event::Login { email, password } => {
            state.session.login(email, password)?;
            let target = state.post_login_route();
            tracing::debug!(target = %target, "manager logged in");
            state.route = target.clone();
            Ok((true, vec![Action::Navigate(target)]))
        }
        Event::Logout => {
            state.session.logout();
            state.route = Route::Home;
            Ok((
                true,
                vec![
                    Action::Navigate(Route::Home),
                    Action::Toast(Toast::message("Logged out successfully")),
                ],
            ))
        }

        Event::SubmitApplication(form) => {
            let input = form.clone().validate()?;
            let added = state.registry.add(input);
            tracing::debug!(id = added.id, name = %added.name, "application submitted");
            state.route = Route::Home;
            Ok((
                true,
                vec![
                    Action::Toast(
                        Toast::message("Application Submitted")
                            .with_description("Your application has been successfully submitted for review."),
                    ),
                    Action::Navigate(Route::Home),
                ],
            ))
        }

        Event::ApproveApplication(id) => decide(state, *id, Decision::Approve),
        Event::RejectApplication(id) => decide(state, *id, Decision::Reject),
        Event::ViewApplication(id) => {
            if let Some(redirect) = require_manager(state) {
                return Ok(redirect);
            }
            Ok((
                false,
                vec![Action::Toast(Toast::message(format!(
                    "Viewing application details for ID: {id}"
                )))],
            ))
        }
        Event::SendMessage(name) => {
            if let Some(redirect) = require_manager(state) {
                return Ok(redirect);
            }
            Ok((
                false,
                vec![Action::Toast(Toast::message(format!(
                    "Opening message thread with {name}"
                )))],
            ))
        }
    }
}

fn decide<V: CredentialVerifier>(
    state: &mut AppState<V>,
    id: u32,
    decision: Decision,
) -> Result<(bool, Vec<Action>)> {
    if let Some(redirect) = require_manager(state) {
        return Ok(redirect);
    }

    let decided = state.registry.update_status(id, decision)?;
    let message = format!("{}'s application has been {}", decided.name, decided.status);
    Ok((true, vec![Action::Toast(Toast::message(message))]))
}

// Sends anonymous users to the login page, coming back to the dashboard.
fn require_manager<V: CredentialVerifier>(state: &mut AppState<V>) -> Option<(bool, Vec<Action>)> {
    if state.session.is_manager() {
        return None;
    }
    tracing::debug!("dashboard event without manager session");
    let target = Route::login_from(&Route::Dashboard);
    state.route = target.clone();
    Some((true, vec![Action::Navigate(target)]))
}

fn replace(selection: &mut Selection, value: &str) -> bool {
    let next = Selection::parse(value);
    if *selection == next {
        return false;
    }
    *selection = next;
    true
}

// Keeps passwords and form contents out of span fields.
const fn event_kind(event: &Event) -> &'static str {
    match event {
        Event::Navigate(_) => "navigate",
        Event::SearchChanged(_) => "search_changed",
        Event::CategorySelected(_) => "category_selected",
        Event::LocationSelected(_) => "location_selected",
        Event::PriceRangeSelected(_) => "price_range_selected",
        Event::ClearFilters => "clear_filters",
        Event::Login { .. } => "login",
        Event::Logout => "logout",
        Event::SubmitApplication(_) => "submit_application",
        Event::ApproveApplication(_) => "approve_application",
        Event::RejectApplication(_) => "reject_application",
        Event::ViewApplication(_) => "view_application",
        Event::SendMessage(_) => "send_message",
    }
}
