//! Top navigation bar: brand, view tabs and the backend health badge.

use crate::constants::APP_TITLE;
use crate::state::{HealthMonitor, HealthStatus};
use crate::ui::components::badge::create_health_badge;
use crate::ui::core::{Action, Component, Tab};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph, Tabs},
    Frame,
};

#[derive(Debug, Default)]
pub struct NavbarComponent {
    pub active_tab: Tab,
    health: HealthMonitor,
}

impl NavbarComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn health_status(&self) -> HealthStatus {
        self.health.status()
    }
}

impl Component for NavbarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab | KeyCode::Right => Action::NextTab,
            KeyCode::BackTab | KeyCode::Left => Action::PrevTab,
            KeyCode::Char('1') => Action::SwitchTab(Tab::Home),
            KeyCode::Char('2') => Action::SwitchTab(Tab::Headlines),
            KeyCode::Char('3') => Action::SwitchTab(Tab::Tester),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::SwitchTab(tab) => {
                self.active_tab = tab;
                Action::None
            }
            Action::NextTab => {
                self.active_tab = self.active_tab.next();
                Action::None
            }
            Action::PrevTab => {
                self.active_tab = self.active_tab.previous();
                Action::None
            }
            Action::HealthChecked(healthy) => {
                self.health.record(healthy);
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let brand_width = APP_TITLE.chars().count() as u16 + 4;
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(brand_width),
                Constraint::Min(0),
                Constraint::Length(20),
            ])
            .split(inner);

        let brand = Paragraph::new(Line::from(vec![
            Span::styled("📈 ", Style::default()),
            Span::styled(
                APP_TITLE,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]));
        f.render_widget(brand, chunks[0]);

        let tabs = Tabs::new(Tab::ALL.iter().map(|tab| tab.title()))
            .select(self.active_tab.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD))
            .divider("│");
        f.render_widget(tabs, chunks[1]);

        if let Some(badge) = create_health_badge(self.health.status()) {
            f.render_widget(Paragraph::new(Line::from(badge).right_aligned()), chunks[2]);
        }
    }
}
