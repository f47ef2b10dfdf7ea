//! Error types for the TaskBoard application.

use thiserror::Error;

/// A shared error type for the entire TaskBoard application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone)]
pub enum BoardError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A required form field is missing. Raised locally, before any request.
    #[error("Validation error: {field} is required")]
    Validation { field: &'static str },

    /// Authentication/authorization failure (missing token, 401, 403)
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Connection-level request failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-success response from the API, with the server-provided message
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BoardError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Validation error for a missing form field
    pub fn validation(field: &'static str) -> Self {
        Self::Validation { field }
    }

    /// Creates an Auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates an Api error
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is an Auth error
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a Transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// The text shown to the user when this error lands in the board's
    /// error banner.
    ///
    /// Request failures surface the server-provided message or the transport
    /// error text directly, without the variant prefix. Other variants fall
    /// back to the full display string.
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth(message) | Self::Transport(message) => message.clone(),
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for BoardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for BoardError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, BoardError>`.
pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_strips_variant_prefix() {
        let err = BoardError::api(500, "boom");
        assert_eq!(err.user_message(), "boom");

        let err = BoardError::transport("connection refused");
        assert_eq!(err.user_message(), "connection refused");
    }

    #[test]
    fn test_user_message_keeps_display_for_local_errors() {
        let err = BoardError::not_found("task", "42");
        assert_eq!(err.user_message(), "Entity not found: task '42'");
    }

    #[test]
    fn test_predicates() {
        assert!(BoardError::validation("title").is_validation());
        assert!(BoardError::auth("no token").is_auth());
        assert!(BoardError::not_found("task", "1").is_not_found());
        assert!(!BoardError::api(500, "boom").is_auth());
    }
}
