//! State management for the review desk TUI.
//!
//! [`UiState`] is the view-sync controller; the other types are the pieces
//! it is composed of: pagination and search ([`BrowseState`]), the
//! create/edit form ([`FormState`]) and request bookkeeping
//! ([`RequestTracker`]).

mod browse;
mod form;
mod requests;
mod ui_state;

pub use browse::{BrowseState, DisplayMode, PagerControls};
pub use form::{CREATE_LABEL, EDIT_LABEL, FormField, FormMode, FormState, Submission};
pub use requests::{MutationKey, RequestToken, RequestTracker};
pub use ui_state::{
    CONFIRM_DELETE_PROMPT, DELETE_FAILED_ALERT, Effect, Focus, INCOMPLETE_FORM_ALERT, LOAD_FAILED_ALERT,
    ListKind, Notice, SAVE_FAILED_ALERT, SEARCH_FAILED_ALERT, UiState,
};
