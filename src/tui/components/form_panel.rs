//! Create/edit form panel.

use crate::tui::state::{FormField, FormState};

use super::text_truncate::{first_line_preview, tail_with_ellipsis};

/// Context for rendering the form panel.
#[derive(Debug, Clone)]
pub struct FormPanelViewContext<'a> {
    /// Form mode and field buffers.
    pub form: &'a FormState,
    /// Whether the form has keyboard focus.
    pub focused: bool,
    /// Whether a save is in flight (the submit control is disabled).
    pub saving: bool,
    /// Maximum line width in columns.
    pub max_width: usize,
}

/// Renders the form heading, both fields and the available actions.
#[must_use]
pub fn form_panel_view(ctx: &FormPanelViewContext<'_>) -> String {
    let field_width = ctx.max_width.saturating_sub(14).max(1);
    let marker = |field: FormField| {
        if ctx.focused && ctx.form.active_field() == field {
            ">"
        } else {
            " "
        }
    };
    let cursor = |field: FormField| {
        if ctx.focused && ctx.form.active_field() == field {
            "_"
        } else {
            ""
        }
    };

    let shown = |field: FormField, text: &str| {
        if ctx.focused && ctx.form.active_field() == field {
            editing_tail(text, field_width)
        } else {
            first_line_preview(text, field_width)
        }
    };

    let mut output = format!("── {} ──\n", ctx.form.label());
    output.push_str(&format!(
        "{} Título:   {}{}\n",
        marker(FormField::Title),
        shown(FormField::Title, ctx.form.title()),
        cursor(FormField::Title),
    ));
    output.push_str(&format!(
        "{} Conteúdo: {}{}\n",
        marker(FormField::Content),
        shown(FormField::Content, ctx.form.content()),
        cursor(FormField::Content),
    ));

    let submit = if ctx.saving {
        "Salvando..."
    } else {
        "[Ctrl+S] Salvar"
    };
    if ctx.form.shows_cancel() {
        output.push_str(&format!("  {submit}  [Esc] Cancelar edição\n"));
    } else {
        output.push_str(&format!("  {submit}\n"));
    }
    output
}

/// Shows the end of the field's last line, where typed text appears.
fn editing_tail(text: &str, max_width: usize) -> String {
    tail_with_ellipsis(text.lines().last().unwrap_or_default(), max_width)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{FormPanelViewContext, form_panel_view};
    use crate::api::Review;
    use crate::tui::state::{CREATE_LABEL, EDIT_LABEL, FormState};

    fn ctx(form: &FormState, saving: bool) -> FormPanelViewContext<'_> {
        FormPanelViewContext {
            form,
            focused: true,
            saving,
            max_width: 80,
        }
    }

    #[test]
    fn create_mode_has_no_cancel_action() {
        let form = FormState::new();

        let output = form_panel_view(&ctx(&form, false));

        assert!(output.contains(CREATE_LABEL));
        assert!(!output.contains("Cancelar"));
        assert!(output.contains("> Título:   _"));
    }

    #[test]
    fn edit_mode_shows_label_fields_and_cancel() {
        let mut form = FormState::new();
        form.begin_edit(&Review {
            id: 4,
            title: "Serra".to_owned(),
            content: "Frio".to_owned(),
            date_posted: String::new(),
        });

        let output = form_panel_view(&ctx(&form, false));

        assert!(output.contains(EDIT_LABEL));
        assert!(output.contains("Serra"));
        assert!(output.contains("Conteúdo: Frio"));
        assert!(output.contains("[Esc] Cancelar edição"));
    }

    #[rstest]
    #[case(false, "[Ctrl+S] Salvar")]
    #[case(true, "Salvando...")]
    fn submit_control_reflects_saving(#[case] saving: bool, #[case] expected: &str) {
        let form = FormState::new();

        assert!(form_panel_view(&ctx(&form, saving)).contains(expected));
    }

    fn typed(text: &str) -> FormState {
        let mut form = FormState::new();
        text.chars().for_each(|character| form.push_char(character));
        form
    }

    #[test]
    fn focused_field_shows_latest_typed_text() {
        let form = typed("uma avaliação muito longa sobre a serra da mantiqueira");
        let context = FormPanelViewContext {
            max_width: 30,
            ..ctx(&form, false)
        };

        let output = form_panel_view(&context);

        assert!(output.contains("> Título:   ...a mantiqueira_"));
    }

    #[test]
    fn unfocused_field_shows_its_beginning() {
        let form = typed("uma avaliação muito longa sobre a serra da mantiqueira");
        let context = FormPanelViewContext {
            max_width: 30,
            focused: false,
            ..ctx(&form, false)
        };

        let output = form_panel_view(&context);

        assert!(output.contains("  Título:   uma avaliação...\n"));
    }
}
