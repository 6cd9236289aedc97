//! Actions representing side effects to be executed by the view layer.
//!
//! The event handler returns a `Vec<Action>` after processing each event. Actions
//! describe what should happen outside the core (changing page, showing a toast);
//! the view layer executes them in order.
//!
//! # Example
//!
//! ```rust
//! use artistly::app::{Action, Route, Toast};
//!
//! let actions = vec![
//!     Action::Navigate(Route::Home),
//!     Action::Toast(Toast::message("Logged out successfully")),
//! ];
//! ```

use super::routes::Route;

/// Commands representing side effects to be executed by the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Moves the browser to another page.
    Navigate(Route),

    /// Shows a transient notification.
    Toast(Toast),
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: Option<String>,
}

impl Toast {
    /// A plain toast with a title only.
    #[must_use]
    pub fn message(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
