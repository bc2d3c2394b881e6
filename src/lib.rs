//! Reviewdesk library crate: a terminal front end for a review CRUD API.
//!
//! The library keeps a paginated, searchable list of review cards in sync
//! with the server while the user creates, edits, and deletes reviews. The
//! [`api`] module talks to the REST API, [`tui`] holds the view-sync
//! controller and its bubbletea-rs front end, and [`config`] loads layered
//! settings through ortho-config.

pub mod api;
pub mod config;
pub mod logging;
pub mod telemetry;
pub mod tui;

pub use api::{
    ApiOperation, DEFAULT_API_URL, DEFAULT_TIMEOUT, FailureKind, GatewayError,
    HttpReviewGateway, PAGE_SIZE, PageInfo, PageResult, Review, ReviewDraft, ReviewGateway,
};
pub use config::{ConfigError, OperationMode, ReviewdeskConfig};
pub use logging::{LogTarget, LoggingError, init_logging};
pub use telemetry::{
    NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink,
    TracingTelemetrySink,
};
