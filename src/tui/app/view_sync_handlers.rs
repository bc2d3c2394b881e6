//! User action and gateway response handlers.
//!
//! Handlers forward to the [`crate::tui::state::UiState`] transitions and
//! dispatch whatever effect they return. Failures are logged here, where
//! the error value is still available; the controller only sees that the
//! request failed.

use bubbletea_rs::Cmd;

use super::ReviewApp;
use crate::tui::components::CardAction;
use crate::tui::messages::AppMsg;
use crate::tui::state::{Focus, Notice};

impl ReviewApp {
    /// Dispatches cursor, paging and refresh messages.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => {
                self.state.cursor_up();
                None
            }
            AppMsg::CursorDown => {
                self.state.cursor_down();
                None
            }
            AppMsg::NextPage => self.handle_next_page(),
            AppMsg::PreviousPage => {
                let effect = self.state.navigate_prev();
                self.dispatch(effect)
            }
            AppMsg::RefreshRequested => {
                let effect = self.state.reload_current_view();
                Some(self.effect_cmd(effect))
            }
            _ => {
                // Unreachable: caller filters to navigation messages.
                None
            }
        }
    }

    /// Loads the next page unless the pager shows "next" as disabled.
    fn handle_next_page(&mut self) -> Option<Cmd> {
        let next_enabled = self
            .state
            .browse()
            .pager()
            .is_some_and(|pager| pager.next_enabled);
        if !next_enabled {
            return None;
        }
        let effect = self.state.navigate_next();
        self.dispatch(effect)
    }

    /// Dispatches focus changes and card actions.
    pub(super) fn handle_selection_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::FocusForm => self.state.set_focus(Focus::Form),
            AppMsg::FocusSearch => self.state.set_focus(Focus::Search),
            AppMsg::FocusList => self.state.set_focus(Focus::List),
            AppMsg::EditSelected => {
                let action = self.state.selected_card().map(|card| card.edit_action());
                self.apply_card_action(action);
            }
            AppMsg::DeleteSelected => {
                let action = self.state.selected_card().map(|card| card.delete_action());
                self.apply_card_action(action);
            }
            _ => {
                // Unreachable: caller filters to selection messages.
            }
        }
        None
    }

    fn apply_card_action(&mut self, action: Option<CardAction>) {
        match action {
            Some(CardAction::Edit(review)) => {
                if !self.state.begin_edit(&review) {
                    tracing::debug!(id = review.id, "edit ignored while saving");
                }
            }
            Some(CardAction::Delete(id)) => {
                if !self.state.request_delete(id) {
                    tracing::debug!(id, "delete already in flight");
                }
            }
            None => {}
        }
    }

    /// Dispatches form and search editing messages.
    pub(super) fn handle_editing_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::InsertChar(character) => self.state.insert_char(*character),
            AppMsg::Backspace => self.state.backspace(),
            AppMsg::ToggleField => self.state.toggle_form_field(),
            AppMsg::CancelEdit => {
                if self.state.form().shows_cancel() {
                    self.state.cancel_edit();
                } else {
                    self.state.set_focus(Focus::List);
                }
            }
            AppMsg::SubmitForm => {
                let effect = self.state.submit_form();
                return self.dispatch(effect);
            }
            AppMsg::SubmitSearch => {
                let effect = self.state.submit_search();
                return Some(self.effect_cmd(effect));
            }
            AppMsg::ClearSearch => {
                let effect = self.state.clear_search();
                return Some(self.effect_cmd(effect));
            }
            _ => {
                // Unreachable: caller filters to editing messages.
            }
        }
        None
    }

    /// Resolves the current notice.
    pub(super) fn handle_notice_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let accepting = matches!(msg, AppMsg::AcceptNotice);
        match self.state.notice() {
            Some(Notice::ConfirmDelete(_)) if accepting => {
                let effect = self.state.confirm_delete();
                self.dispatch(effect)
            }
            Some(_) => {
                self.state.dismiss_notice();
                None
            }
            None => None,
        }
    }

    /// Dispatches gateway responses.
    pub(super) fn handle_response_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::PageLoaded { token, result } => {
                if !self.state.apply_page(*token, result) {
                    self.report_stale(*token);
                }
                None
            }
            AppMsg::SearchLoaded { token, reviews } => {
                if !self.state.apply_search(*token, reviews) {
                    self.report_stale(*token);
                }
                None
            }
            AppMsg::ListFailed { token, kind, error } => {
                if self.state.list_failed(*token, *kind) {
                    tracing::warn!(
                        ?kind,
                        failure = ?error.kind(),
                        %error,
                        "failed to load reviews"
                    );
                } else {
                    self.report_stale(*token);
                }
                None
            }
            AppMsg::Created(review) => {
                tracing::info!(id = review.id, "review created");
                let effect = self.state.created();
                Some(self.effect_cmd(effect))
            }
            AppMsg::Updated(review) => {
                tracing::info!(id = review.id, "review updated");
                let effect = self.state.updated();
                Some(self.effect_cmd(effect))
            }
            AppMsg::SaveFailed(error) => {
                tracing::warn!(failure = ?error.kind(), %error, "failed to save review");
                self.state.save_failed();
                None
            }
            AppMsg::Deleted(id) => {
                tracing::info!(id, "review deleted");
                let effect = self.state.deleted(*id);
                Some(self.effect_cmd(effect))
            }
            AppMsg::DeleteFailed { id, error } => {
                tracing::warn!(id, failure = ?error.kind(), %error, "failed to delete review");
                self.state.delete_failed(*id);
                None
            }
            _ => {
                // Unreachable: caller filters to response messages.
                None
            }
        }
    }
}
