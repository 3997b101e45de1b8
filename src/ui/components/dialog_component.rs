//! Modal dialog component: help, logs, info and error messages.

use crate::logger::Logger;
use crate::ui::components::dialogs::{system_dialogs, DialogScroll};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, style::Color, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    scroll: DialogScroll,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            scroll: DialogScroll::default(),
            logger: None,
        }
    }

    /// Source for the logs dialog
    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.scroll.reset();
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = &self.dialog_type else {
            return Action::None;
        };

        let closes = match dialog_type {
            // Any non-scrolling key dismisses a message
            DialogType::Info(_) | DialogType::Error(_) => None,
            DialogType::Help => Some(matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('h'))),
            DialogType::Logs => Some(matches!(key.code, KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q'))),
        };

        match closes {
            None => self.scroll_or(key.code, Action::HideDialog),
            Some(true) => Action::HideDialog,
            Some(false) => self.scroll_or(key.code, Action::None),
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.scroll.reset();
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        match dialog_type {
            DialogType::Info(message) => {
                system_dialogs::render_message_dialog(f, rect, "ℹ️ Info", Color::Blue, &message, &mut self.scroll);
            }
            DialogType::Error(message) => {
                system_dialogs::render_message_dialog(f, rect, "⚠️ Error", Color::Red, &message, &mut self.scroll);
            }
            DialogType::Help => system_dialogs::render_help_dialog(f, rect, &mut self.scroll),
            DialogType::Logs => {
                let logs = self.logger.as_ref().map(Logger::get_logs).unwrap_or_default();
                system_dialogs::render_logs_dialog(f, rect, &logs, &mut self.scroll);
            }
        }
    }
}

impl DialogComponent {
    fn scroll_or(&mut self, code: KeyCode, fallback: Action) -> Action {
        if self.scroll.handle_key(code) {
            Action::None
        } else {
            fallback
        }
    }
}
