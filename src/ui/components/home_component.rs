//! Landing view with entry points into the live feed and the tester.

use crate::ui::core::{Action, Component, Tab};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph, Wrap},
    Frame,
};

const FEATURES: [(&str, Color, &str); 3] = [
    (
        "Global Ingestion",
        Color::Cyan,
        "Parses Google News RSS feeds across multiple regions and vernaculars.",
    ),
    (
        "Real-time Analytics",
        Color::Magenta,
        "Live sentiment scoring (POS/NEG/NEU) from the backend model.",
    ),
    (
        "22 Languages",
        Color::Green,
        "English and 21 Indian languages, each with its own headline feed.",
    ),
];

#[derive(Debug, Default)]
pub struct HomeComponent;

impl HomeComponent {
    pub fn new() -> Self {
        Self
    }

    fn render_hero(f: &mut Frame, area: Rect) {
        let hero = vec![
            Line::from(Span::styled(
                "Sentiment Intelligence for",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Modern Finance",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "NLP models decoding MSME market trends from diverse news sources in real time.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(" Enter ", Style::default().fg(Color::White).bg(Color::Blue)),
                Span::styled(" Live Dashboard   ", Style::default().fg(Color::Gray)),
                Span::styled(" t ", Style::default().fg(Color::White).bg(Color::DarkGray)),
                Span::styled(" Try Model", Style::default().fg(Color::Gray)),
            ]),
        ];

        f.render_widget(
            Paragraph::new(hero).alignment(Alignment::Center).wrap(Wrap { trim: true }),
            area,
        );
    }

    fn render_features(f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(area);

        for ((title, color, desc), column) in FEATURES.iter().zip(columns.iter()) {
            let card = Paragraph::new(*desc)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::DarkGray))
                        .title(Span::styled(
                            format!(" {} ", title),
                            Style::default().fg(*color).add_modifier(Modifier::BOLD),
                        )),
                )
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true });
            f.render_widget(card, *column);
        }
    }
}

impl Component for HomeComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::SwitchTab(Tab::Headlines),
            KeyCode::Char('t') => Action::SwitchTab(Tab::Tester),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(7),
                Constraint::Length(1),
                Constraint::Min(5),
            ])
            .split(rect);

        Self::render_hero(f, chunks[1]);
        Self::render_features(f, chunks[3]);
    }
}
