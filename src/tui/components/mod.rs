//! UI components for the review desk TUI.
//!
//! Components are stateless renderers: each takes a view context borrowed
//! from [`crate::tui::state::UiState`] and returns the text to display.

mod card_list;
mod date_format;
mod form_panel;
mod notice;
mod pager;
mod text_truncate;
mod text_wrap;

pub use card_list::{CARD_HEIGHT, Card, CardAction, CardList, CardListViewContext, EMPTY_PLACEHOLDER};
pub use date_format::{INVALID_DATE_LABEL, format_long_pt_br, format_posted_on};
pub use form_panel::{FormPanelViewContext, form_panel_view};
pub use notice::notice_view;
pub use pager::pager_view;
pub(crate) use text_truncate::fit_to_columns;
