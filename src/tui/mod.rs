//! Terminal user interface for browsing and editing reviews.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: [`app::ReviewApp`], wrapping the [`state::UiState`]
//!   view-sync controller
//! - **View**: stateless renderers in [`components`]
//! - **Update**: [`messages::AppMsg`] values handled by `update()`; requests
//!   the controller asks for run as async commands against the
//!   [`crate::api::ReviewGateway`]
//!
//! # Startup Context
//!
//! bubbletea-rs's `Model::init()` is a static function, so the gateway is
//! handed over through module-level storage: call [`set_gateway`] before
//! starting the program.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;
mod storage;

pub use app::ReviewApp;
pub(crate) use storage::{get_gateway, get_initial_terminal_size, get_telemetry_sink};
pub use storage::{set_gateway, set_initial_terminal_size, set_telemetry_sink};
