//! Credential verification seam for the session store.
//!
//! [`SessionStore`](super::SessionStore) never compares passwords itself; it asks a
//! [`CredentialVerifier`] to turn an email/password pair into a [`User`]. The only
//! implementation shipped here is [`StaticCredentials`], a single allow-listed
//! manager account taken from configuration.

use crate::domain::{ArtistlyError, Result, User};

/// Email of the demo manager account when none is configured.
pub const DEFAULT_MANAGER_EMAIL: &str = "manager@artistly.com";

/// Password of the demo manager account when none is configured.
pub const DEFAULT_MANAGER_PASSWORD: &str = "manager123";

/// Turns a credential pair into an authenticated identity.
pub trait CredentialVerifier {
    /// Verifies `email` and `password`.
    ///
    /// # Errors
    ///
    /// Returns [`ArtistlyError::InvalidCredentials`] if the pair is not accepted.
    fn verify(&self, email: &str, password: &str) -> Result<User>;
}

/// One manager account with a fixed password.
///
/// Not a credential system: there is no hashing, lockout or second account.
#[derive(Clone)]
pub struct StaticCredentials {
    user: User,
    password: String,
}

impl StaticCredentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: User::manager("1", email),
            password: password.into(),
        }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_MANAGER_EMAIL, DEFAULT_MANAGER_PASSWORD)
    }
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, email: &str, password: &str) -> Result<User> {
        if email == self.user.email && self.user.is_manager() && password == self.password {
            Ok(self.user.clone())
        } else {
            Err(ArtistlyError::InvalidCredentials)
        }
    }
}
