//! Message types for the TUI update loop.
//!
//! Messages represent user actions, responses to gateway requests issued by
//! async commands, and terminal events.

use crate::api::{GatewayError, PageResult, Review};

use super::state::{ListKind, RequestToken};

/// Messages for the review desk TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move the cursor up one card.
    CursorUp,
    /// Move the cursor down one card.
    CursorDown,
    /// Load the next page.
    NextPage,
    /// Load the previous page.
    PreviousPage,

    // Focus
    /// Focus the form.
    FocusForm,
    /// Focus the search input.
    FocusSearch,
    /// Return focus to the card list.
    FocusList,

    // Text editing
    /// Type a character into the focused input.
    InsertChar(char),
    /// Delete the last character of the focused input.
    Backspace,
    /// Switch between title and content.
    ToggleField,
    /// Submit the form.
    SubmitForm,
    /// Leave edit mode and clear the form.
    CancelEdit,
    /// Submit the search input.
    SubmitSearch,
    /// Clear the search and return to page 1.
    ClearSearch,

    // Card actions
    /// Load the selected card into the form.
    EditSelected,
    /// Ask to delete the selected card.
    DeleteSelected,

    // Notices
    /// Accept the current notice (confirm a deletion or dismiss an alert).
    AcceptNotice,
    /// Decline the current notice.
    DeclineNotice,

    // Data loading
    /// Re-issue the request behind the current view.
    RefreshRequested,
    /// A page of reviews arrived.
    PageLoaded {
        /// Token of the request that produced the page.
        token: RequestToken,
        /// The page.
        result: PageResult,
    },
    /// Search results arrived.
    SearchLoaded {
        /// Token of the request that produced the results.
        token: RequestToken,
        /// Matching reviews.
        reviews: Vec<Review>,
    },
    /// A page load or search failed.
    ListFailed {
        /// Token of the failed request.
        token: RequestToken,
        /// Whether it was a page load or a search.
        kind: ListKind,
        /// The failure.
        error: GatewayError,
    },
    /// A review was created.
    Created(Review),
    /// A review was updated.
    Updated(Review),
    /// Creating or updating failed.
    SaveFailed(GatewayError),
    /// A review was deleted.
    Deleted(u64),
    /// Deleting a review failed.
    DeleteFailed {
        /// Review that could not be deleted.
        id: u64,
        /// The failure.
        error: GatewayError,
    },

    // Application lifecycle
    /// Startup tick that triggers the first load.
    Initialized,
    /// Quit the application.
    Quit,
    /// Toggle the help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for responses to gateway requests.
    #[must_use]
    pub const fn is_response(&self) -> bool {
        matches!(
            self,
            Self::PageLoaded { .. }
                | Self::SearchLoaded { .. }
                | Self::ListFailed { .. }
                | Self::Created(_)
                | Self::Updated(_)
                | Self::SaveFailed(_)
                | Self::Deleted(_)
                | Self::DeleteFailed { .. }
        )
    }

    /// Returns true for messages that edit form or search text.
    #[must_use]
    pub const fn is_text_editing(&self) -> bool {
        matches!(
            self,
            Self::InsertChar(_)
                | Self::Backspace
                | Self::ToggleField
                | Self::SubmitForm
                | Self::CancelEdit
                | Self::SubmitSearch
                | Self::ClearSearch
        )
    }
}
