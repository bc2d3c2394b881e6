//! Startup context storage for the review desk TUI.
//!
//! bubbletea-rs creates the model through the static `Model::init()`, so the
//! gateway and telemetry sink are stored in `OnceLock` values before the
//! program starts and read back during initialisation.

use std::sync::{Arc, OnceLock};

use crossterm::terminal;

use crate::api::ReviewGateway;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

/// Gateway used by `ReviewApp::init()`.
static GATEWAY: OnceLock<Arc<dyn ReviewGateway>> = OnceLock::new();

/// Initial terminal dimensions, so the first frame uses the real size.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Sink for view-level telemetry events.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Sets the review gateway for the TUI application.
///
/// Must be called before starting the bubbletea-rs program; without it every
/// request fails with a configuration error.
///
/// # Returns
///
/// `true` if the gateway was set, `false` if it was already set.
pub fn set_gateway(gateway: Arc<dyn ReviewGateway>) -> bool {
    GATEWAY.set(gateway).is_ok()
}

/// Sets the initial terminal dimensions for the TUI application.
///
/// # Returns
///
/// `true` if the dimensions were set, `false` if they were already set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Sets the telemetry sink for the TUI application.
///
/// Without this, a no-op sink is used.
///
/// # Returns
///
/// `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Returns the configured gateway, if any.
pub(crate) fn get_gateway() -> Option<Arc<dyn ReviewGateway>> {
    GATEWAY.get().cloned()
}

/// Returns the telemetry sink, or a no-op sink if none was configured.
pub(crate) fn get_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK
        .get()
        .cloned()
        .unwrap_or_else(|| Arc::new(NoopTelemetrySink))
}

/// Returns the initial terminal dimensions.
///
/// Falls back to querying the terminal, then to 80x24.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const FALLBACK_SIZE: (u16, u16) = (80, 24);

    INITIAL_TERMINAL_SIZE
        .get()
        .copied()
        .filter(is_usable_size)
        .or_else(|| terminal::size().ok().filter(is_usable_size))
        .unwrap_or(FALLBACK_SIZE)
}

const fn is_usable_size(&(width, height): &(u16, u16)) -> bool {
    width > 0 && height > 0
}
