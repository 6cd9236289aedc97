//! Manager session store.
//!
//! Holds at most one authenticated [`User`]. A session only comes into existence
//! through a successful [`SessionStore::login`] and disappears on
//! [`SessionStore::logout`]; nothing is persisted.
//!
//! # Example
//!
//! ```
//! use artistly::auth::{SessionStore, StaticCredentials};
//! use artistly::ArtistlyError;
//!
//! let mut session = SessionStore::new(StaticCredentials::default());
//!
//! let err = session.login("manager@artistly.com", "wrong").unwrap_err();
//! assert!(matches!(err, ArtistlyError::InvalidCredentials));
//! assert!(session.current_user().is_none());
//!
//! session.login("manager@artistly.com", "manager123")?;
//! assert!(session.is_manager());
//!
//! session.logout();
//! assert!(session.current_user().is_none());
//! # Ok::<(), ArtistlyError>(())
//! ```

pub mod credentials;

pub use credentials::{
    CredentialVerifier, StaticCredentials, DEFAULT_MANAGER_EMAIL, DEFAULT_MANAGER_PASSWORD,
};

use crate::domain::{Result, User};

/// The single process-wide session, owned by whoever owns the store.
#[derive(Debug, Clone)]
pub struct SessionStore<V = StaticCredentials> {
    verifier: V,
    user: Option<User>,
}

impl<V: CredentialVerifier> SessionStore<V> {
    #[must_use]
    pub const fn new(verifier: V) -> Self {
        Self {
            verifier,
            user: None,
        }
    }

    /// Logs in with an email/password pair.
    ///
    /// On failure the current session, if any, is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`ArtistlyError::InvalidCredentials`](crate::ArtistlyError::InvalidCredentials)
    /// when the verifier rejects the pair.
    pub fn login(&mut self, email: &str, password: &str) -> Result<&User> {
        let _span = tracing::debug_span!("session_login", email = %email).entered();

        match self.verifier.verify(email, password) {
            Ok(user) => {
                tracing::debug!(user_id = %user.id, "login succeeded");
                Ok(&*self.user.insert(user))
            }
            Err(e) => {
                tracing::debug!(error = %e, "login rejected");
                Err(e)
            }
        }
    }

    /// Clears the session. Returns `true` if someone was logged in.
    pub fn logout(&mut self) -> bool {
        let cleared = self.user.take().is_some();
        tracing::debug!(cleared, "logout");
        cleared
    }

    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// `true` when the active session belongs to a manager.
    #[must_use]
    pub fn is_manager(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_manager)
    }
}
