use thiserror::Error;

/// Errors from data service operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// No blueprint with the given identity exists.
    #[error("blueprint not found: {author}/{name}")]
    NotFound { author: String, name: String },

    /// A blueprint with the given identity already exists.
    #[error("blueprint already exists: {author}/{name}")]
    AlreadyExists { author: String, name: String },

    /// The request never reached the backend (connection, timeout, bad URL).
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("server error: {0}")]
    Server(String),

    /// The response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl ServiceError {
    /// Convenience constructor for identity lookup misses.
    pub fn not_found(author: &str, name: &str) -> Self {
        Self::NotFound {
            author: author.to_string(),
            name: name.to_string(),
        }
    }

    /// Convenience constructor for duplicate creates.
    pub fn already_exists(author: &str, name: &str) -> Self {
        Self::AlreadyExists {
            author: author.to_string(),
            name: name.to_string(),
        }
    }
}

/// Result alias for data service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
