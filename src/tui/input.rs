//! Input handling for the TUI application.
//!
//! Key events are mapped to messages according to the region that owns the
//! keyboard: the card list, the form, the search input, or a blocking
//! notice.

use bubbletea_rs::event::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;

/// Which keymap applies to the next key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Browsing cards.
    List,
    /// Typing into the form.
    Form,
    /// Typing into the search input.
    Search,
    /// An alert is waiting to be dismissed.
    Alert,
    /// A delete confirmation is waiting for an answer.
    Confirm,
}

/// Maps a key event to a message for `context`.
///
/// Returns `None` for keys with no binding, which are ignored.
#[must_use]
pub fn map_key_to_message(key: &KeyMsg, context: InputContext) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return map_control_key(key.key, context);
    }
    match context {
        InputContext::List => map_list_key(key.key),
        InputContext::Form => map_form_key(key.key),
        InputContext::Search => map_search_key(key.key),
        InputContext::Alert => map_alert_key(key.key),
        InputContext::Confirm => map_confirm_key(key.key),
    }
}

const fn map_control_key(code: KeyCode, context: InputContext) -> Option<AppMsg> {
    match (code, context) {
        (KeyCode::Char('c'), _) => Some(AppMsg::Quit),
        (KeyCode::Char('s'), InputContext::Form) => Some(AppMsg::SubmitForm),
        _ => None,
    }
}

const fn map_list_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => Some(AppMsg::NextPage),
        KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => Some(AppMsg::PreviousPage),
        KeyCode::Char('e') | KeyCode::Enter => Some(AppMsg::EditSelected),
        KeyCode::Char('d') | KeyCode::Delete => Some(AppMsg::DeleteSelected),
        KeyCode::Char('f') | KeyCode::Tab => Some(AppMsg::FocusForm),
        KeyCode::Char('/') => Some(AppMsg::FocusSearch),
        KeyCode::Char('x') => Some(AppMsg::ClearSearch),
        KeyCode::Char('r') => Some(AppMsg::RefreshRequested),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

const fn map_form_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char(character) => Some(AppMsg::InsertChar(character)),
        KeyCode::Backspace => Some(AppMsg::Backspace),
        KeyCode::Tab | KeyCode::BackTab => Some(AppMsg::ToggleField),
        KeyCode::Esc => Some(AppMsg::CancelEdit),
        KeyCode::Up | KeyCode::Down => Some(AppMsg::FocusList),
        _ => None,
    }
}

const fn map_search_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char(character) => Some(AppMsg::InsertChar(character)),
        KeyCode::Backspace => Some(AppMsg::Backspace),
        KeyCode::Enter => Some(AppMsg::SubmitSearch),
        KeyCode::Esc => Some(AppMsg::FocusList),
        _ => None,
    }
}

const fn map_alert_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(AppMsg::AcceptNotice),
        _ => None,
    }
}

const fn map_confirm_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('y' | 's') | KeyCode::Enter => Some(AppMsg::AcceptNotice),
        KeyCode::Char('n') | KeyCode::Esc => Some(AppMsg::DeclineNotice),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use bubbletea_rs::event::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};
    use rstest::rstest;

    use super::{InputContext, map_key_to_message};
    use crate::tui::messages::AppMsg;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn ctrl(character: char) -> KeyMsg {
        KeyMsg {
            key: KeyCode::Char(character),
            modifiers: KeyModifiers::CONTROL,
        }
    }

    #[rstest]
    #[case(KeyCode::Char('n'), "NextPage")]
    #[case(KeyCode::Char('p'), "PreviousPage")]
    #[case(KeyCode::Char('e'), "EditSelected")]
    #[case(KeyCode::Char('d'), "DeleteSelected")]
    #[case(KeyCode::Char('/'), "FocusSearch")]
    #[case(KeyCode::Char('r'), "RefreshRequested")]
    fn list_keys_map_to_actions(#[case] code: KeyCode, #[case] expected: &str) {
        let msg = map_key_to_message(&key(code), InputContext::List).expect("bound key");

        assert_eq!(format!("{msg:?}"), expected);
    }

    #[test]
    fn letters_are_typed_in_form() {
        let msg = map_key_to_message(&key(KeyCode::Char('q')), InputContext::Form);

        assert!(matches!(msg, Some(AppMsg::InsertChar('q'))));
    }

    #[test]
    fn ctrl_s_saves_only_from_form() {
        assert!(matches!(
            map_key_to_message(&ctrl('s'), InputContext::Form),
            Some(AppMsg::SubmitForm)
        ));
        assert!(map_key_to_message(&ctrl('s'), InputContext::List).is_none());
    }

    #[rstest]
    #[case(InputContext::List)]
    #[case(InputContext::Form)]
    #[case(InputContext::Confirm)]
    fn ctrl_c_always_quits(#[case] context: InputContext) {
        assert!(matches!(
            map_key_to_message(&ctrl('c'), context),
            Some(AppMsg::Quit)
        ));
    }

    #[rstest]
    #[case(KeyCode::Char('y'), true)]
    #[case(KeyCode::Char('n'), false)]
    fn confirm_keys(#[case] code: KeyCode, #[case] accepts: bool) {
        let msg = map_key_to_message(&key(code), InputContext::Confirm);

        if accepts {
            assert!(matches!(msg, Some(AppMsg::AcceptNotice)));
        } else {
            assert!(matches!(msg, Some(AppMsg::DeclineNotice)));
        }
    }

    #[test]
    fn enter_submits_search() {
        assert!(matches!(
            map_key_to_message(&key(KeyCode::Enter), InputContext::Search),
            Some(AppMsg::SubmitSearch)
        ));
    }
}
