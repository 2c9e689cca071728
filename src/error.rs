//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while
//! CLI/main uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level application error enum
//! - Module-specific errors ([`ApiError`], [`ConfigError`], [`RouteError`])
//!   for detailed handling
//!
//! Note that [`ApiError`] rarely reaches this level: the HTTP client
//! collapses ordinary failures into a failed envelope and only logs them.

use crate::config::ConfigError;
use crate::lastfm::ApiError;
use crate::nav::RouteError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration load/save error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// HTTP client construction or request error
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Navigation route could not be parsed
    #[error("Route error: {0}")]
    Route(#[from] RouteError),

    /// A screen could not be loaded after all retry attempts
    #[error("Failed to load {screen}: {message}")]
    Load { screen: String, message: String },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a load error for a named screen.
    pub fn load(screen: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Load {
            screen: screen.into(),
            message: message.into(),
        }
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, ConfigError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Config(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, ApiError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Api(e).context(ctx))
    }
}
