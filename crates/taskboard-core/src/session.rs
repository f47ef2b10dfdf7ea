//! Auth session and token persistence interfaces.
//!
//! The API authenticates with a bearer token. The token lives in persistent
//! storage between runs; at client construction it is wrapped in an explicit
//! [`Session`] so no request path ever reads global state.

use crate::error::Result;
use std::fmt;

/// The bearer token handed to the REST client at construction.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    /// Creates a session from a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Returns the raw token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the value for the `Authorization` header.
    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

// The token must not leak into logs or error messages.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("token", &"***").finish()
    }
}

/// Persistence for the single auth token.
///
/// The token is one persisted string keyed by the name `token`: read when a
/// session is opened, written on login, removed on logout.
///
/// # Security Note
///
/// Implementations should ensure that:
/// - Token files have appropriate permissions (e.g., 600 on Unix)
/// - The token is never logged or exposed in error messages
pub trait TokenStore: Send + Sync {
    /// Loads the stored token.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(String))`: A token is stored
    /// - `Ok(None)`: No token has been stored (not logged in)
    /// - `Err(_)`: Storage could not be read
    fn load(&self) -> Result<Option<String>>;

    /// Persists the token, replacing any previous one.
    fn save(&self, token: &str) -> Result<()>;

    /// Removes the stored token. Removing an absent token is not an error.
    fn clear(&self) -> Result<()>;
}
