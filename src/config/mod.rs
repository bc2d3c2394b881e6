//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.reviewdesk.toml` in the current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `REVIEWDESK_API_URL`, `REVIEWDESK_LOG_LEVEL`
//!    and so on
//! 4. **Command-line arguments** – `--api-url`/`-a`, `--page`/`-p`,
//!    `--search`/`-s`
//!
//! # Configuration File
//!
//! ```toml
//! api_url = "http://127.0.0.1:5000/api"
//! timeout_seconds = 10
//! log_file = "reviewdesk.log"
//! log_level = "reviewdesk=debug"
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::api::{DEFAULT_API_URL, DEFAULT_TIMEOUT};

const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors raised while loading or validating configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// ortho-config could not parse arguments or files.
    #[error("failed to load configuration: {message}")]
    Load {
        /// Loader error text.
        message: String,
    },
    /// Values were loaded but are inconsistent or out of range.
    #[error("invalid configuration: {message}")]
    Invalid {
        /// What is wrong and how to fix it.
        message: String,
    },
}

/// What the binary does once configuration is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationMode {
    /// Run the interactive TUI.
    Interactive,
    /// Print one page of reviews and exit.
    PrintPage(u32),
    /// Print search results for a term and exit.
    PrintSearch(String),
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use reviewdesk::ReviewdeskConfig;
///
/// let config = ReviewdeskConfig::load().expect("failed to load configuration");
/// config.validate().expect("configuration should be consistent");
/// println!("{:?}", config.operation_mode());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REVIEWDESK",
    discovery(
        dotfile_name = ".reviewdesk.toml",
        config_file_name = "reviewdesk.toml",
        app_name = "reviewdesk"
    )
)]
pub struct ReviewdeskConfig {
    /// Base URL of the review API, e.g. `http://127.0.0.1:5000/api`.
    ///
    /// Can be provided via:
    /// - CLI: `--api-url <URL>` or `-a <URL>`
    /// - Environment: `REVIEWDESK_API_URL`
    /// - Config file: `api_url = "..."`
    #[ortho_config(cli_short = 'a')]
    pub api_url: String,

    /// HTTP request timeout in seconds.
    #[ortho_config()]
    pub timeout_seconds: u64,

    /// File receiving log output.
    ///
    /// Used in every mode when set. Without it the interactive TUI discards
    /// its logs, since it owns the terminal, and print modes log to stderr.
    #[ortho_config()]
    pub log_file: Option<String>,

    /// `tracing` filter directive, e.g. `info` or `reviewdesk=debug`.
    ///
    /// `RUST_LOG` takes precedence when set.
    #[ortho_config()]
    pub log_level: String,

    /// Prints this page of reviews instead of starting the TUI.
    ///
    /// Can be provided via:
    /// - CLI: `--page <N>` or `-p <N>`
    /// - Environment: `REVIEWDESK_PAGE`
    #[ortho_config(cli_short = 'p')]
    pub page: Option<u32>,

    /// Prints search results for this term instead of starting the TUI.
    ///
    /// Can be provided via:
    /// - CLI: `--search <TERM>` or `-s <TERM>`
    /// - Environment: `REVIEWDESK_SEARCH`
    #[ortho_config(cli_short = 's')]
    pub search: Option<String>,
}

impl Default for ReviewdeskConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
            log_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            page: None,
            search: None,
        }
    }
}

impl ReviewdeskConfig {
    /// Loads configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when ortho-config fails to parse
    /// arguments or configuration files.
    pub fn load_layered() -> Result<Self, ConfigError> {
        Self::load().map_err(|error| ConfigError::Load {
            message: error.to_string(),
        })
    }

    /// Checks that the loaded values are usable together.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `page` is zero, `search` is
    /// blank, both are set, the timeout is zero, or `api_url` is not an
    /// absolute URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page.is_some() && self.search.is_some() {
            return Err(invalid("use either --page or --search, not both"));
        }
        if self.page == Some(0) {
            return Err(invalid("--page must be 1 or greater"));
        }
        if self
            .search
            .as_deref()
            .is_some_and(|term| term.trim().is_empty())
        {
            return Err(invalid("--search needs a non-empty term"));
        }
        if self.timeout_seconds == 0 {
            return Err(invalid("timeout_seconds must be greater than zero"));
        }
        Url::parse(&self.api_url)
            .map_err(|error| invalid(&format!("api_url {:?} is not a URL: {error}", self.api_url)))?;
        Ok(())
    }

    /// Determines the operation mode from `page` and `search`.
    ///
    /// Call [`Self::validate`] first; when both are set, `page` wins.
    #[must_use]
    pub fn operation_mode(&self) -> OperationMode {
        match (self.page, self.search.as_deref()) {
            (Some(page), _) => OperationMode::PrintPage(page),
            (None, Some(term)) => OperationMode::PrintSearch(term.trim().to_owned()),
            (None, None) => OperationMode::Interactive,
        }
    }

    /// Returns the HTTP request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::Invalid {
        message: message.to_owned(),
    }
}

#[cfg(test)]
mod tests;
