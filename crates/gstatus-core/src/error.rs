//! Error types for gstatus-core.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gstatus-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Git query error.
    #[error(transparent)]
    Git(#[from] gstatus_git::Error),

    /// The highlighter could not render a diff body.
    #[error("highlight error: {0}")]
    Highlight(String),

    /// A configuration value is out of range.
    #[error("invalid config value for {key}: {reason}")]
    InvalidConfig {
        /// Dotted key, e.g. `general.page_size`.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Text shown to a user when a request fails.
    ///
    /// A failed git invocation yields git's own stderr.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        match self {
            Self::Git(err) => err.diagnostic(),
            other => other.to_string(),
        }
    }
}
