//! CLI operation mode handlers.
//!
//! - [`review_tui`]: interactive TUI for browsing and editing reviews
//! - [`print`]: non-interactive page and search output

use reviewdesk::{ConfigError, GatewayError, LoggingError};
use thiserror::Error;

pub mod print;
pub mod review_tui;

/// Errors that end the process with a failure exit code.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is inconsistent.
    #[error(transparent)]
    Configuration(#[from] ConfigError),
    /// The log subscriber could not be installed.
    #[error(transparent)]
    Logging(#[from] LoggingError),
    /// A review API request failed in a print mode.
    #[error("review API request failed: {0}")]
    Gateway(#[from] GatewayError),
    /// The terminal program failed to start or crashed.
    #[error("terminal UI error: {message}")]
    Terminal {
        /// Error text from bubbletea-rs.
        message: String,
    },
    /// Writing output failed.
    #[error("failed to write output: {message}")]
    Io {
        /// I/O error text.
        message: String,
    },
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
