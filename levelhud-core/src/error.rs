//! Error types for the levelhud core library.

use thiserror::Error;

/// Top-level error type for all levelhud operations.
///
/// None of these ever reach a caller of
/// [`NameDecorator::decorate`](crate::decorator::NameDecorator::decorate);
/// the decorator logs them and falls back to the undecorated name.
#[derive(Error, Debug)]
pub enum HudError {
    /// A lookup capability could not be reached or returned unusable data.
    #[error("Lookup unavailable: {service}: {reason}")]
    LookupUnavailable {
        /// Which capability failed (`monsters`, `observer`, ...).
        service: &'static str,
        /// What went wrong.
        reason: String,
    },

    /// Banding or template configuration is missing or invalid.
    #[error("Malformed configuration: {0}")]
    MalformedConfig(String),

    /// The logging subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HudError {
    /// Shorthand for a [`HudError::LookupUnavailable`].
    pub fn lookup(service: &'static str, reason: impl Into<String>) -> Self {
        Self::LookupUnavailable {
            service,
            reason: reason.into(),
        }
    }
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, HudError>;
