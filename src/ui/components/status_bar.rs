//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui::core::Tab;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Shortcut hints for the active view
    #[must_use]
    pub fn status_text(tab: Tab, active_tasks: usize) -> String {
        let hints = match tab {
            Tab::Home => "Enter: live feed • t: tester • Tab: switch view • ?: help • q: quit",
            Tab::Headlines => "l: language • r: refresh • s: status • j/k: scroll • ?: help • q: quit",
            Tab::Tester => "Enter: analyze • Ctrl+U: clear • Tab: switch view • Ctrl+C: quit",
        };

        if active_tasks > 0 {
            format!("⟳ {} request(s) in flight • {}", active_tasks, hints)
        } else {
            hints.to_string()
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, tab: Tab, active_tasks: usize) {
        let status_color = if active_tasks > 0 { Color::Yellow } else { Color::Gray };

        let status_bar = Paragraph::new(Self::status_text(tab, active_tasks))
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
