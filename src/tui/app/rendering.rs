//! Rendering logic for the review desk TUI.
//!
//! These are pure query methods that read state without modification.

use super::ReviewApp;
use crate::tui::components::{
    CardListViewContext, FormPanelViewContext, form_panel_view, notice_view, pager_view,
};
use crate::tui::state::Focus;

const HELP_TEXT: &str = r"
=== Atalhos ===

Lista:
  j, Down    Próximo card
  k, Up      Card anterior
  n, Right   Próxima página
  p, Left    Página anterior
  e, Enter   Editar o card selecionado
  d, Del     Deletar o card selecionado
  r          Recarregar
  ?          Mostrar/ocultar esta ajuda
  q          Sair

Busca:
  /          Digitar termo de busca
  Enter      Buscar (termo vazio volta à página 1)
  x          Limpar busca
  Esc        Voltar à lista

Formulário:
  f, Tab     Ir para o formulário
  Tab        Alternar título/conteúdo
  Ctrl+S     Salvar
  Esc        Cancelar edição

Pressione qualquer tecla para fechar.
";

impl ReviewApp {
    /// Renders the main screen.
    pub(super) fn render_main_view(&self) -> String {
        let width = self.content_width();
        let mut output = String::new();

        output.push_str(&self.render_header());
        output.push_str(&self.render_search_bar());
        output.push('\n');

        let deleting = self.state.deleting_ids();
        let list_ctx = CardListViewContext {
            cursor_position: self.state.cursor_position(),
            visible_height: self.calculate_list_height(),
            max_width: width,
            deleting: &deleting,
        };
        output.push_str(&self.state.cards().view(&list_ctx));
        output.push_str(&pager_view(self.state.browse().pager().as_ref()));

        let form_ctx = FormPanelViewContext {
            form: self.state.form(),
            focused: self.state.focus() == Focus::Form,
            saving: self.state.is_saving(),
            max_width: width,
        };
        output.push_str(&form_panel_view(&form_ctx));
        output.push_str(&self.render_status_bar());
        output
    }

    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let loading_indicator = if self.state.is_loading() {
            " [Carregando...]"
        } else {
            ""
        };
        format!("Reviews{loading_indicator}\n")
    }

    /// Renders the search input and the active search, if any.
    pub(super) fn render_search_bar(&self) -> String {
        let browse = self.state.browse();
        let cursor = if self.state.focus() == Focus::Search {
            "_"
        } else {
            ""
        };
        let active = browse
            .search_term()
            .map(|term| format!("  (resultados para \"{term}\", [x] limpar)"))
            .unwrap_or_default();
        format!("Buscar: {}{cursor}{active}\n", browse.search_input())
    }

    /// Renders the notice, or key hints for the focused region.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(notice) = self.state.notice() {
            return notice_view(notice);
        }
        let hints = match self.state.focus() {
            Focus::List => "e:editar  d:deletar  n/p:páginas  /:buscar  f:formulário  ?:ajuda  q:sair",
            Focus::Form => "Tab:campo  Ctrl+S:salvar  Esc:voltar",
            Focus::Search => "Enter:buscar  Esc:voltar",
        };
        format!("{hints}\n")
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }
        HELP_TEXT.to_owned()
    }
}
