//! Error taxonomy for a single character lookup.
//!
//! Every variant is terminal for the command that produced it. None of them
//! is fatal to the process; startup failures go through `anyhow` instead.

/// Failure of a character lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// The command input was rejected before any network call.
    #[error("{message}")]
    Validation { message: String },

    /// The stats page could not be obtained (network, timeout, HTTP status).
    #[error("fetch error: {message}")]
    Fetch {
        message: String,
        url: Option<String>,
    },

    /// The page was fetched but holds no recognizable data.
    #[error("{message}")]
    Extraction { message: String, url: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn fetch(message: impl Into<String>, url: Option<String>) -> Self {
        Self::Fetch {
            message: message.into(),
            url,
        }
    }

    pub fn extraction(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Extraction {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Source page the user can open to verify the data by hand, if known.
    pub fn source_url(&self) -> Option<&str> {
        match self {
            AppError::Validation { .. } => None,
            AppError::Fetch { url, .. } => url.as_deref(),
            AppError::Extraction { url, .. } => Some(url),
        }
    }

    /// Short machine-friendly tag used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::Fetch { .. } => "fetch_error",
            AppError::Extraction { .. } => "extraction_error",
        }
    }
}
