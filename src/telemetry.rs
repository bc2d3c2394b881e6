//! Application telemetry events and sinks.
//!
//! Telemetry stays local: events are either dropped or written to stderr as
//! JSON lines for debugging request latency and view synchronisation.

use std::io;

use serde::{Deserialize, Serialize};

use crate::api::ApiOperation;

/// A structured telemetry event emitted by reviewdesk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// One review API request finished.
    RequestCompleted {
        /// Which API operation was called.
        operation: ApiOperation,
        /// Wall-clock latency in milliseconds.
        latency_ms: u64,
        /// Whether the request produced a usable response.
        success: bool,
    },
    /// A list response arrived after a newer request had been dispatched.
    StaleResponseDiscarded {
        /// Token carried by the discarded response.
        token: u64,
        /// Latest token dispatched for the list region.
        latest: u64,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Forwards telemetry events to `tracing` at debug level.
///
/// Used while the terminal is owned by the TUI, where writing to stderr
/// would corrupt the display.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetrySink;

impl TelemetrySink for TracingTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        match event {
            TelemetryEvent::RequestCompleted {
                operation,
                latency_ms,
                success,
            } => tracing::debug!(
                operation = operation.as_str(),
                latency_ms,
                success,
                "request completed"
            ),
            TelemetryEvent::StaleResponseDiscarded { token, latest } => {
                tracing::debug!(token, latest, "stale list response discarded");
            }
        }
    }
}

/// Test helpers for capturing telemetry.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::Mutex;

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every recorded event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Returns a copy of the events recorded so far.
        #[must_use]
        pub fn events(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .map(|events| events.clone())
                .unwrap_or_default()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event);
            }
        }
    }
}
