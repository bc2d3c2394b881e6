//! Blocking notice box for alerts and delete confirmations.

use crate::tui::state::Notice;

/// Renders `notice` with the keys that resolve it.
#[must_use]
pub fn notice_view(notice: &Notice) -> String {
    let keys = match notice {
        Notice::Alert(_) => "[Enter] OK",
        Notice::ConfirmDelete(_) => "[y] Sim  [n] Não",
    };
    format!("\n  {}\n  {keys}\n", notice.message())
}

#[cfg(test)]
mod tests {
    use super::notice_view;
    use crate::tui::state::{CONFIRM_DELETE_PROMPT, Notice};

    #[test]
    fn confirmation_offers_yes_and_no() {
        let output = notice_view(&Notice::ConfirmDelete(3));

        assert!(output.contains(CONFIRM_DELETE_PROMPT));
        assert!(output.contains("[y] Sim  [n] Não"));
    }

    #[test]
    fn alert_offers_ok() {
        let output = notice_view(&Notice::Alert("Falhou".to_owned()));

        assert!(output.contains("Falhou"));
        assert!(output.contains("[Enter] OK"));
    }
}
