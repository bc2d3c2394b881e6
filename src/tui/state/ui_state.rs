//! View-sync controller.
//!
//! [`UiState`] is the single client-side state value. User actions and
//! server responses are applied through transition methods; a transition
//! that needs the network returns an [`Effect`] describing the request
//! instead of performing it. The application turns effects into async
//! commands and feeds the responses back into the matching transition.

use std::collections::VecDeque;

use crate::api::{PageResult, Review, ReviewDraft};
use crate::tui::components::{Card, CardList};

use super::browse::BrowseState;
use super::form::{FormState, Submission};
use super::requests::{MutationKey, RequestToken, RequestTracker};

/// Alert shown when a page of reviews cannot be loaded.
pub const LOAD_FAILED_ALERT: &str =
    "Não foi possível carregar os reviews. Verifique se o back-end está rodando.";

/// Alert shown when a search fails.
pub const SEARCH_FAILED_ALERT: &str = "Não foi possível realizar a busca.";

/// Alert shown when creating or updating a review fails.
pub const SAVE_FAILED_ALERT: &str = "Não foi possível salvar o review.";

/// Alert shown when deleting a review fails.
pub const DELETE_FAILED_ALERT: &str = "Não foi possível deletar o review.";

/// Alert shown when the form is submitted with an empty field.
pub const INCOMPLETE_FORM_ALERT: &str = "Preencha o título e o conteúdo do review.";

/// Question asked before a review is deleted.
pub const CONFIRM_DELETE_PROMPT: &str = "Tem certeza de que deseja deletar este review?";

/// A network request requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Load one page of the listing.
    LoadPage {
        /// Page to load (1-based).
        page: u32,
        /// Token the response must carry to be applied.
        token: RequestToken,
    },
    /// Run a search.
    Search {
        /// Trimmed, non-empty search term.
        term: String,
        /// Token the response must carry to be applied.
        token: RequestToken,
    },
    /// Create a review.
    Create(ReviewDraft),
    /// Update an existing review.
    Update {
        /// Review to update.
        id: u64,
        /// New title and content.
        draft: ReviewDraft,
    },
    /// Delete a review.
    Delete(u64),
}

/// Region receiving keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The card list.
    #[default]
    List,
    /// The create/edit form.
    Form,
    /// The search input.
    Search,
}

/// Blocking notification awaiting the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Informational alert dismissed with a single key.
    Alert(String),
    /// Confirmation required before deleting the review with this id.
    ConfirmDelete(u64),
}

impl Notice {
    /// Returns the text to display.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Alert(message) => message.as_str(),
            Self::ConfirmDelete(_) => CONFIRM_DELETE_PROMPT,
        }
    }
}

/// Kind of list-region request that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// A page load.
    Page,
    /// A search.
    Search,
}

/// Client-side view state.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    browse: BrowseState,
    form: FormState,
    cards: CardList,
    cursor_position: usize,
    selected_id: Option<u64>,
    requests: RequestTracker,
    notices: VecDeque<Notice>,
    focus: Focus,
}

impl UiState {
    /// Creates state for an empty view in paged mode at page 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns pagination and search state.
    #[must_use]
    pub const fn browse(&self) -> &BrowseState {
        &self.browse
    }

    /// Returns the form state.
    #[must_use]
    pub const fn form(&self) -> &FormState {
        &self.form
    }

    /// Returns the rendered cards.
    #[must_use]
    pub const fn cards(&self) -> &CardList {
        &self.cards
    }

    /// Returns the cursor position within the cards.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Returns the card under the cursor.
    #[must_use]
    pub fn selected_card(&self) -> Option<&Card> {
        self.cards.get(self.cursor_position)
    }

    /// Returns the focused region.
    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns the notice awaiting the user, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    /// Returns true while the latest list request is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.requests.is_list_pending()
    }

    /// Returns true while a save is in flight.
    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.requests.is_in_flight(MutationKey::Save)
    }

    /// Returns ids of reviews being deleted.
    #[must_use]
    pub fn deleting_ids(&self) -> Vec<u64> {
        self.requests.deleting_ids()
    }

    /// Returns the latest list token, used when reporting stale responses.
    #[must_use]
    pub const fn latest_list_token(&self) -> Option<RequestToken> {
        self.requests.latest_list_token()
    }

    /// Loads the current page; used at start-up.
    pub fn initial_load(&mut self) -> Effect {
        self.load_page(self.browse.current_page())
    }

    /// Requests the next page. Does nothing in search mode.
    pub fn navigate_next(&mut self) -> Option<Effect> {
        let page = self.browse.next_page_target()?;
        Some(self.load_page(page))
    }

    /// Requests the previous page. Does nothing on page 1 or in search
    /// mode.
    pub fn navigate_prev(&mut self) -> Option<Effect> {
        let page = self.browse.prev_page_target()?;
        Some(self.load_page(page))
    }

    /// Submits the search input.
    ///
    /// A blank term leaves search mode and loads page 1 instead of
    /// searching.
    pub fn submit_search(&mut self) -> Effect {
        self.focus = Focus::List;
        let term = self.browse.search_input().trim().to_owned();
        if term.is_empty() {
            self.browse.exit_search();
            return self.load_page(1);
        }
        self.browse.enter_search(term.clone());
        self.run_search(term)
    }

    /// Clears the search input and returns to paged mode at page 1.
    pub fn clear_search(&mut self) -> Effect {
        self.focus = Focus::List;
        self.browse.clear_search_input();
        self.browse.exit_search();
        self.load_page(1)
    }

    /// Re-issues the request behind the current view: the active search or
    /// the current page.
    pub fn reload_current_view(&mut self) -> Effect {
        match self.browse.search_term().map(str::to_owned) {
            Some(term) => self.run_search(term),
            None => self.load_page(self.browse.current_page()),
        }
    }

    /// Loads `review` into the form and focuses it.
    ///
    /// Returns `false` while a save is in flight; the form is locked until
    /// the save completes.
    pub fn begin_edit(&mut self, review: &Review) -> bool {
        if self.is_saving() {
            return false;
        }
        self.form.begin_edit(review);
        self.focus = Focus::Form;
        true
    }

    /// Abandons the edit and returns the form to create mode.
    pub fn cancel_edit(&mut self) {
        if self.is_saving() {
            return;
        }
        self.form.reset();
        self.focus = Focus::List;
    }

    /// Submits the form.
    ///
    /// Returns `None` when a save is already in flight or a field is empty
    /// (in which case an alert is queued).
    pub fn submit_form(&mut self) -> Option<Effect> {
        if self.is_saving() {
            return None;
        }
        if !self.form.is_complete() {
            self.push_alert(INCOMPLETE_FORM_ALERT);
            return None;
        }
        if !self.requests.try_begin(MutationKey::Save) {
            return None;
        }
        Some(match self.form.submission() {
            Submission::Create(draft) => Effect::Create(draft),
            Submission::Update { id, draft } => Effect::Update { id, draft },
        })
    }

    /// Asks for confirmation before deleting review `id`.
    ///
    /// Returns `false` when a deletion of `id` is already in flight.
    pub fn request_delete(&mut self, id: u64) -> bool {
        if self.requests.is_in_flight(MutationKey::Delete(id)) {
            return false;
        }
        self.notices.push_back(Notice::ConfirmDelete(id));
        true
    }

    /// Confirms the pending deletion.
    ///
    /// Returns `None` when no confirmation is pending or the deletion is
    /// already in flight.
    pub fn confirm_delete(&mut self) -> Option<Effect> {
        let Some(Notice::ConfirmDelete(id)) = self.notices.front().cloned() else {
            return None;
        };
        self.notices.pop_front();
        self.requests
            .try_begin(MutationKey::Delete(id))
            .then_some(Effect::Delete(id))
    }

    /// Dismisses the current notice (an alert, or a declined confirmation).
    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }

    /// Applies a loaded page if `token` is the latest list token.
    ///
    /// Returns `false` for stale responses, which leave the view untouched.
    pub fn apply_page(&mut self, token: RequestToken, result: &PageResult) -> bool {
        if !self.requests.accept_list_response(token) {
            return false;
        }
        self.browse.apply_page(result.info);
        self.render(&result.items);
        true
    }

    /// Applies search results if `token` is the latest list token.
    ///
    /// Returns `false` for stale responses, which leave the view untouched.
    pub fn apply_search(&mut self, token: RequestToken, reviews: &[Review]) -> bool {
        if !self.requests.accept_list_response(token) {
            return false;
        }
        self.render(reviews);
        true
    }

    /// Reports a failed list request.
    ///
    /// Returns `false` for stale failures, which are ignored.
    pub fn list_failed(&mut self, token: RequestToken, kind: ListKind) -> bool {
        if !self.requests.accept_list_response(token) {
            return false;
        }
        self.push_alert(match kind {
            ListKind::Page => LOAD_FAILED_ALERT,
            ListKind::Search => SEARCH_FAILED_ALERT,
        });
        true
    }

    /// Handles a successful create: resets the form, leaves search mode and
    /// reloads page 1.
    pub fn created(&mut self) -> Effect {
        self.requests.finish(MutationKey::Save);
        self.form.reset();
        self.focus = Focus::List;
        self.clear_search()
    }

    /// Handles a successful update: resets the form and reloads the current
    /// view without changing page.
    pub fn updated(&mut self) -> Effect {
        self.requests.finish(MutationKey::Save);
        self.form.reset();
        self.focus = Focus::List;
        self.reload_current_view()
    }

    /// Handles a failed save; the form keeps the entered data.
    pub fn save_failed(&mut self) {
        self.requests.finish(MutationKey::Save);
        self.push_alert(SAVE_FAILED_ALERT);
    }

    /// Handles a successful delete and reloads the current view.
    ///
    /// If the deleted review was loaded in the form, the form is reset.
    pub fn deleted(&mut self, id: u64) -> Effect {
        self.requests.finish(MutationKey::Delete(id));
        if self.form.editing_id() == Some(id) {
            self.form.reset();
            if self.focus == Focus::Form {
                self.focus = Focus::List;
            }
        }
        self.reload_current_view()
    }

    /// Handles a failed delete.
    pub fn delete_failed(&mut self, id: u64) {
        self.requests.finish(MutationKey::Delete(id));
        self.push_alert(DELETE_FAILED_ALERT);
    }

    /// Moves focus to `focus`.
    pub const fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    /// Moves the cursor up one card.
    pub fn cursor_up(&mut self) {
        self.set_cursor(self.cursor_position.saturating_sub(1));
    }

    /// Moves the cursor down one card.
    pub fn cursor_down(&mut self) {
        let last = self.cards.len().saturating_sub(1);
        self.set_cursor(self.cursor_position.saturating_add(1).min(last));
    }

    /// Types a character into the focused input.
    pub fn insert_char(&mut self, character: char) {
        match self.focus {
            Focus::Form if !self.is_saving() => self.form.push_char(character),
            Focus::Search => self.browse.push_search_char(character),
            Focus::Form | Focus::List => {}
        }
    }

    /// Deletes the last character of the focused input.
    pub fn backspace(&mut self) {
        match self.focus {
            Focus::Form if !self.is_saving() => self.form.backspace(),
            Focus::Search => self.browse.search_backspace(),
            Focus::Form | Focus::List => {}
        }
    }

    /// Switches between the title and content fields.
    pub const fn toggle_form_field(&mut self) {
        self.form.toggle_field();
    }

    fn load_page(&mut self, page: u32) -> Effect {
        let token = self.requests.issue_list_token();
        Effect::LoadPage { page, token }
    }

    fn run_search(&mut self, term: String) -> Effect {
        let token = self.requests.issue_list_token();
        Effect::Search { term, token }
    }

    fn push_alert(&mut self, message: &str) {
        self.notices.push_back(Notice::Alert(message.to_owned()));
    }

    /// Replaces the cards, keeping the selection on the same review when it
    /// is still displayed.
    fn render(&mut self, reviews: &[Review]) {
        self.cards = CardList::render(reviews);
        let restored = self
            .selected_id
            .and_then(|id| self.cards.position_of(id));
        let position = restored.unwrap_or_else(|| {
            self.cursor_position
                .min(self.cards.len().saturating_sub(1))
        });
        self.set_cursor(position);
    }

    fn set_cursor(&mut self, position: usize) {
        self.cursor_position = position;
        self.selected_id = self.cards.get(position).map(Card::id);
    }
}

#[cfg(test)]
#[path = "ui_state_tests.rs"]
mod tests;
