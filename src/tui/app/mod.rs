//! Main TUI application model implementing the MVU pattern.
//!
//! [`ReviewApp`] owns the [`UiState`] controller and the review gateway. Key
//! presses and gateway responses arrive as [`AppMsg`] values; the controller
//! decides what changes, and any [`crate::tui::state::Effect`] it returns is
//! turned into an async command that calls the gateway and reports back.
//!
//! # Module Structure
//!
//! - `effects`: Effect-to-command translation
//! - `view_sync_handlers`: User action and gateway response handlers
//! - `lifecycle_handlers`: Startup, resize, help and quit
//! - `layout`: Height calculations for the card list
//! - `rendering`: View rendering methods for terminal output
//! - `model_impl`: The `bubbletea_rs::Model` implementation

use std::sync::Arc;

use bubbletea_rs::Cmd;

use crate::api::ReviewGateway;
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

use super::messages::AppMsg;
use super::state::{RequestToken, UiState};

mod effects;
mod layout;
mod lifecycle_handlers;
mod model_impl;
mod rendering;
mod view_sync_handlers;

/// Rows around the card list: header, search bar, spacer, pager and a
/// three-line notice.
pub(crate) const CHROME_HEIGHT: usize = 7;

/// Rows used by the form panel.
pub(crate) const FORM_HEIGHT: usize = 4;

/// Main application model for the review desk TUI.
pub struct ReviewApp {
    /// View-sync controller state.
    pub(crate) state: UiState,
    /// Gateway used by effect commands; `None` when not configured.
    gateway: Option<Arc<dyn ReviewGateway>>,
    /// Sink for stale-response events.
    telemetry: Arc<dyn TelemetrySink>,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether the help overlay is visible.
    pub(crate) show_help: bool,
    /// Whether the startup load has been issued.
    has_initialized: bool,
}

impl std::fmt::Debug for ReviewApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewApp")
            .field("state", &self.state)
            .field("has_gateway", &self.gateway.is_some())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("show_help", &self.show_help)
            .finish_non_exhaustive()
    }
}

impl ReviewApp {
    /// Creates an application that talks to `gateway`.
    #[must_use]
    pub fn new(gateway: Arc<dyn ReviewGateway>) -> Self {
        Self::with_optional_gateway(Some(gateway))
    }

    /// Creates an application without a gateway; every request fails with a
    /// configuration error.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self::with_optional_gateway(None)
    }

    fn with_optional_gateway(gateway: Option<Arc<dyn ReviewGateway>>) -> Self {
        let (width, height) = super::get_initial_terminal_size();
        Self {
            state: UiState::new(),
            gateway,
            telemetry: Arc::new(NoopTelemetrySink),
            width,
            height,
            show_help: false,
            has_initialized: false,
        }
    }

    /// Sets the sink receiving stale-response events.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Returns the controller state.
    #[must_use]
    pub const fn state(&self) -> &UiState {
        &self.state
    }

    /// Handles a message and updates state accordingly.
    ///
    /// Delegates to a handler per message category and returns the command
    /// for any request the controller asked for.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_response() {
            return self.handle_response_msg(msg);
        }
        if msg.is_text_editing() {
            return self.handle_editing_msg(msg);
        }
        match msg {
            AppMsg::CursorUp
            | AppMsg::CursorDown
            | AppMsg::NextPage
            | AppMsg::PreviousPage
            | AppMsg::RefreshRequested => self.handle_navigation_msg(msg),
            AppMsg::FocusForm
            | AppMsg::FocusSearch
            | AppMsg::FocusList
            | AppMsg::EditSelected
            | AppMsg::DeleteSelected => self.handle_selection_msg(msg),
            AppMsg::AcceptNotice | AppMsg::DeclineNotice => self.handle_notice_msg(msg),
            _ => self.handle_lifecycle_msg(msg),
        }
    }

    /// Records that a list response for `token` arrived too late.
    fn report_stale(&self, token: RequestToken) {
        let latest = self
            .state
            .latest_list_token()
            .map_or(0, RequestToken::value);
        tracing::debug!(token = token.value(), latest, "discarding stale list response");
        self.telemetry.record(TelemetryEvent::StaleResponseDiscarded {
            token: token.value(),
            latest,
        });
    }
}
