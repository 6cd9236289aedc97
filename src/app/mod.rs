//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the view layer (pages, forms, toasts, router) and the
//! domain stores. The view layer turns user input into [`Event`]s, hands them to
//! [`handle_event`], re-renders when told to and executes the returned
//! [`Action`]s.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → View Layer
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`routes`]: Pages and the manager-only guard
//! - [`state`]: Central state container and derived dashboard numbers

pub mod actions;
pub mod handler;
pub mod routes;
pub mod state;

pub use actions::{Action, Toast};
pub use handler::{handle_event, Event};
pub use routes::Route;
pub use state::{AppState, DashboardStats};
