//! Reviewdesk CLI entrypoint.
//!
//! Starts the interactive review TUI, or prints a single page or search
//! result when `--page` or `--search` is given.

use std::io::{self, Write};
use std::process::ExitCode;

use reviewdesk::{LogTarget, OperationMode, ReviewdeskConfig, init_logging};

mod cli;

use cli::AppError;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = ReviewdeskConfig::load_layered()?;
    config.validate()?;

    let mode = config.operation_mode();
    let target = LogTarget::for_mode(&mode, config.log_file.as_deref());
    init_logging(&target, &config.log_level)?;
    tracing::debug!(?mode, api_url = %config.api_url, "configuration loaded");

    match mode {
        OperationMode::Interactive => cli::review_tui::run(&config).await,
        OperationMode::PrintPage(page) => cli::print::run_page(&config, page).await,
        OperationMode::PrintSearch(term) => cli::print::run_search(&config, &term).await,
    }
}
