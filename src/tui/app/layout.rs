//! Layout helpers for the review desk TUI model.

use super::{CHROME_HEIGHT, FORM_HEIGHT, ReviewApp};
use crate::tui::components::CARD_HEIGHT;

impl ReviewApp {
    /// Returns the rows available to the card list.
    ///
    /// At least one card is always shown, even on very small terminals.
    pub(super) const fn calculate_list_height(&self) -> usize {
        let body = (self.height as usize)
            .saturating_sub(CHROME_HEIGHT)
            .saturating_sub(FORM_HEIGHT);
        if body < CARD_HEIGHT { CARD_HEIGHT } else { body }
    }

    /// Returns the usable line width, one column short of the terminal to
    /// avoid autowrap.
    pub(super) const fn content_width(&self) -> usize {
        let width = self.width as usize;
        if width > 1 { width - 1 } else { 1 }
    }
}
