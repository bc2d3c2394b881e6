//! TUI mode for browsing and editing reviews.
//!
//! This module provides the entry point for the interactive terminal user
//! interface. The gateway is built here and handed to the model through
//! module-level storage before the program starts.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use reviewdesk::tui::{ReviewApp, set_gateway, set_initial_terminal_size, set_telemetry_sink};
use reviewdesk::{HttpReviewGateway, ReviewdeskConfig, TelemetrySink, TracingTelemetrySink};

use super::AppError;

/// Runs the TUI mode.
///
/// # Errors
///
/// Returns an error if the API URL is unusable or the TUI fails to start.
/// Request failures while running are shown inside the TUI instead.
pub async fn run(config: &ReviewdeskConfig) -> Result<(), AppError> {
    let telemetry: Arc<dyn TelemetrySink> = Arc::new(TracingTelemetrySink);
    let gateway = HttpReviewGateway::new(&config.api_url, config.timeout())?
        .with_telemetry(Arc::clone(&telemetry));
    tracing::info!(api_url = %gateway.base_url(), "starting review TUI");

    // A second call in the same process keeps the first context.
    let _gateway_set = set_gateway(Arc::new(gateway));
    let _telemetry_set = set_telemetry_sink(telemetry);
    if let Ok((width, height)) = crossterm::terminal::size() {
        let _size_set = set_initial_terminal_size(width, height);
    }

    run_tui().await.map_err(|error| AppError::Terminal {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `ReviewApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // ReviewApp::init() retrieves its context from module-level storage.
    let program = Program::<ReviewApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
