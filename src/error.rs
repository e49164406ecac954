//! Error types for folio
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Nothing in this crate retries or swallows an error internally: every
//! failure is surfaced verbatim to the immediate caller, which decides
//! whether to start a fresh pagination sequence.

use thiserror::Error;

/// The main error type for folio
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Request Validation Errors
    // ============================================================================
    /// The request object itself is missing
    #[error("Request cannot be nil")]
    NilRequest,

    /// A request field failed validation
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    /// Token unknown, already consumed, or malformed
    #[error("Invalid pagination token: {token}")]
    InvalidToken { token: String },

    /// A fresh continuation token could not be issued
    #[error("Token generation failed: {message}")]
    TokenGeneration { message: String },

    // ============================================================================
    // Folder Source Errors
    // ============================================================================
    /// The underlying folder source failed
    #[error("Folder source fetch failed: {message}")]
    SourceFetch { message: String },

    // ============================================================================
    // Data Errors
    // ============================================================================
    /// JSON could not be parsed
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Anything without a dedicated variant
    #[error("{0}")]
    Other(String),

    /// Escape hatch for custom folder sources
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an invalid token error
    pub fn invalid_token(token: impl Into<String>) -> Self {
        Self::InvalidToken {
            token: token.into(),
        }
    }

    /// Create a token generation error
    pub fn token_generation(message: impl Into<String>) -> Self {
        Self::TokenGeneration {
            message: message.into(),
        }
    }

    /// Create a source fetch error
    pub fn source_fetch(message: impl Into<String>) -> Self {
        Self::SourceFetch {
            message: message.into(),
        }
    }

    /// Check if this error was caused by the caller's own input.
    ///
    /// Caller errors (a missing request, a non-positive chunk size, a token
    /// that is unknown or already consumed) are not transient: retrying the
    /// identical call cannot succeed. After `InvalidToken` in particular the
    /// cursor is unrecoverable and the caller must start a fresh sequence.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Error::NilRequest | Error::InvalidArgument { .. } | Error::InvalidToken { .. }
        )
    }
}

/// Result type alias for folio
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
