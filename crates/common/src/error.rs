//! Error types shared across swipe crates.
//!
//! Telemetry computation itself never fails; these errors only come from
//! the edges (reading touch input, writing telemetry, loading config).

use std::path::PathBuf;

/// Top-level error type for swipe operations.
#[derive(Debug, thiserror::Error)]
pub enum SwipeError {
    #[error("Touch input error: {message}")]
    Input { message: String },

    #[error("Telemetry output error: {message}")]
    Output { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using SwipeError.
pub type SwipeResult<T> = Result<T, SwipeError>;

impl SwipeError {
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input {
            message: msg.into(),
        }
    }

    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
