//! Tracing subscriber setup.
//!
//! A configured log file receives the logs in every mode. Without one, the
//! interactive TUI discards them because it owns the terminal, and print
//! modes log to stderr, leaving stdout for results.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::OperationMode;

const FALLBACK_DIRECTIVE: &str = "info";

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The configured log file could not be opened for appending.
    #[error("failed to open log file {path}: {source}")]
    OpenLogFile {
        /// Path from configuration.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A global subscriber was already installed.
    #[error("failed to install tracing subscriber: {message}")]
    Install {
        /// Error text from `tracing-subscriber`.
        message: String,
    },
}

/// Where formatted log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Write to stderr.
    Stderr,
    /// Append to a file.
    File(PathBuf),
    /// Drop everything.
    Discard,
}

impl LogTarget {
    /// Chooses the target for an operation mode.
    ///
    /// A configured `log_file` takes precedence over the mode's default.
    #[must_use]
    pub fn for_mode(mode: &OperationMode, log_file: Option<&str>) -> Self {
        match (mode, log_file) {
            (_, Some(path)) => Self::File(PathBuf::from(path)),
            (OperationMode::Interactive, None) => Self::Discard,
            (OperationMode::PrintPage(_) | OperationMode::PrintSearch(_), None) => Self::Stderr,
        }
    }
}

/// Builds the event filter.
///
/// `env_directive` (normally `RUST_LOG`) wins over the configured level.
/// Directives that fail to parse fall back to the next source and finally
/// to `info`.
#[must_use]
pub fn build_filter(env_directive: Option<&str>, configured: &str) -> EnvFilter {
    env_directive
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_new(configured).ok())
        .unwrap_or_else(|| EnvFilter::new(FALLBACK_DIRECTIVE))
}

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// Returns [`LoggingError::OpenLogFile`] when the log file cannot be opened
/// and [`LoggingError::Install`] when a subscriber is already installed.
pub fn init_logging(target: &LogTarget, level: &str) -> Result<(), LoggingError> {
    let env_directive = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(env_directive.as_deref(), level);
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match target {
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
        LogTarget::Discard => builder.with_writer(io::sink).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::OpenLogFile {
                    path: path.clone(),
                    source,
                })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    result.map_err(|error| LoggingError::Install {
        message: error.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[rstest]
    #[case::interactive_without_file(OperationMode::Interactive, None, LogTarget::Discard)]
    #[case::print_without_file(OperationMode::PrintPage(2), None, LogTarget::Stderr)]
    #[case::search_without_file(
        OperationMode::PrintSearch("lago".to_owned()),
        None,
        LogTarget::Stderr
    )]
    #[case::interactive_with_file(
        OperationMode::Interactive,
        Some("reviewdesk.log"),
        LogTarget::File(PathBuf::from("reviewdesk.log"))
    )]
    #[case::print_with_file(
        OperationMode::PrintPage(1),
        Some("reviewdesk.log"),
        LogTarget::File(PathBuf::from("reviewdesk.log"))
    )]
    #[case::search_with_file(
        OperationMode::PrintSearch("lago".to_owned()),
        Some("print.log"),
        LogTarget::File(PathBuf::from("print.log"))
    )]
    fn target_depends_on_mode_and_file(
        #[case] mode: OperationMode,
        #[case] log_file: Option<&str>,
        #[case] expected: LogTarget,
    ) {
        assert_eq!(LogTarget::for_mode(&mode, log_file), expected);
    }

    #[rstest]
    #[case::configured_level(None, "debug", Some(LevelFilter::DEBUG))]
    #[case::environment_wins(Some("trace"), "warn", Some(LevelFilter::TRACE))]
    #[case::bad_environment_falls_back(Some("reviewdesk=loud"), "warn", Some(LevelFilter::WARN))]
    #[case::bad_level_falls_back(None, "reviewdesk=loud", Some(LevelFilter::INFO))]
    fn filter_follows_directive_precedence(
        #[case] env_directive: Option<&str>,
        #[case] configured: &str,
        #[case] expected: Option<LevelFilter>,
    ) {
        let filter = build_filter(env_directive, configured);

        assert_eq!(filter.max_level_hint(), expected);
    }
}
