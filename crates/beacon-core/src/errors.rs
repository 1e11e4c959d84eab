//! Error taxonomy for the directory client.
//!
//! Every failure is classified into one of four kinds. Errors are handled in
//! the component that raised them (turned into a notification and a local
//! state transition); none of them is fatal to the process.

use thiserror::Error;

/// Errors raised by the gateway and the directory sessions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// Bad or missing local input, caught before any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Transport failure; no response was received.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Response body or reason phrase.
        message: String,
    },

    /// A response arrived but its shape does not match the contract.
    #[error("Protocol error: {0}")]
    Protocol(String),
}

impl DirectoryError {
    /// Stable lowercase label for logs and structured output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Network(_) => "network",
            Self::Server { .. } => "server",
            Self::Protocol(_) => "protocol",
        }
    }

    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
