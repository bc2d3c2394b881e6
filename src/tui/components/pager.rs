//! Pagination controls.

use crate::tui::state::PagerControls;

/// Renders the pager line, or nothing when the pager is hidden.
///
/// Disabled controls are shown in parentheses without their key.
#[must_use]
pub fn pager_view(controls: Option<&PagerControls>) -> String {
    let Some(pager) = controls else {
        return String::new();
    };
    let prev = if pager.prev_enabled {
        "[p] Anterior"
    } else {
        "(Anterior)"
    };
    let next = if pager.next_enabled {
        "[n] Próxima"
    } else {
        "(Próxima)"
    };
    format!("{prev}  {}  {next}\n", pager.label)
}

#[cfg(test)]
mod tests {
    use super::pager_view;
    use crate::tui::state::PagerControls;

    #[test]
    fn hidden_pager_renders_nothing() {
        assert_eq!(pager_view(None), "");
    }

    #[test]
    fn first_page_disables_previous() {
        let controls = PagerControls {
            label: "Página 1 de 3".to_owned(),
            prev_enabled: false,
            next_enabled: true,
        };

        assert_eq!(
            pager_view(Some(&controls)),
            "(Anterior)  Página 1 de 3  [n] Próxima\n"
        );
    }
}
