//! `Model` trait implementation for the review desk application.
//!
//! Raw bubbletea-rs events are translated into [`AppMsg`] values here; key
//! presses go through the keymap for the current input context.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use super::ReviewApp;
use crate::tui::components::fit_to_columns;
use crate::tui::input::{InputContext, map_key_to_message};
use crate::tui::messages::AppMsg;
use crate::tui::state::{Focus, Notice};

impl Model for ReviewApp {
    fn init() -> (Self, Option<Cmd>) {
        let model = crate::tui::get_gateway().map_or_else(Self::unconfigured, Self::new);
        let configured = model.with_telemetry(crate::tui::get_telemetry_sink());

        // The first page is requested when `Initialized` is handled.
        (configured, Some(Self::immediate_init_cmd()))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let mapped = map_key_to_message(key_msg, self.input_context())?;
            return self.handle_message(&mapped);
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }
        self.normalise_viewport(&self.render_main_view())
    }
}

impl ReviewApp {
    /// Returns the keymap for the next key event.
    ///
    /// A pending notice takes the keyboard until it is resolved.
    pub(super) fn input_context(&self) -> InputContext {
        match self.state.notice() {
            Some(Notice::ConfirmDelete(_)) => return InputContext::Confirm,
            Some(Notice::Alert(_)) => return InputContext::Alert,
            None => {}
        }
        match self.state.focus() {
            Focus::List => InputContext::List,
            Focus::Form => InputContext::Form,
            Focus::Search => InputContext::Search,
        }
    }

    /// Fits the frame to the terminal so shorter frames overwrite every
    /// cell of the previous one.
    fn normalise_viewport(&self, output: &str) -> String {
        let width = self.content_width();
        let rows = usize::from(self.height).max(1);

        let mut frame = String::new();
        let mut source = output.lines();
        for _ in 0..rows {
            frame.push_str(&fit_to_columns(source.next().unwrap_or(""), width));
            frame.push('\n');
        }
        frame
    }
}
