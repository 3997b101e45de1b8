//! Free-text sentiment tester.

use crate::api::SentimentLabel;
use crate::constants::{TESTER_ANALYZING, TESTER_PLACEHOLDER, TESTER_SUBTITLE, TESTER_TITLE};
use crate::state::{AnalysisTicket, TesterState};
use crate::ui::components::badge::sentiment_color;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Default)]
pub struct TesterComponent {
    pub state: TesterState,
}

impl TesterComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the current input; `None` when there is nothing to analyze
    pub fn submit(&mut self) -> Option<AnalysisTicket> {
        self.state.submit()
    }

    fn render_input(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Headline Text ");

        let text = if self.state.input().is_empty() {
            Line::from(vec![
                Span::styled("█", Style::default().fg(Color::White)),
                Span::styled(TESTER_PLACEHOLDER, Style::default().fg(Color::DarkGray)),
            ])
        } else {
            Line::from(vec![
                Span::styled(self.state.input().to_string(), Style::default().fg(Color::White)),
                Span::styled("█", Style::default().fg(Color::White)),
            ])
        };

        f.render_widget(Paragraph::new(text).block(block).wrap(Wrap { trim: false }), area);
    }

    fn render_button(&self, f: &mut Frame, area: Rect) {
        let (label, style) = if self.state.is_loading() {
            (
                format!("⟳ {}", TESTER_ANALYZING),
                Style::default().fg(Color::Gray).bg(Color::DarkGray),
            )
        } else if self.state.can_submit() {
            (
                "Enter  Analyze Sentiment".to_string(),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                "Analyze Sentiment".to_string(),
                Style::default().fg(Color::DarkGray),
            )
        };

        f.render_widget(
            Paragraph::new(Span::styled(format!(" {} ", label), style)).alignment(Alignment::Center),
            area,
        );
    }

    fn render_outcome(&self, f: &mut Frame, area: Rect) {
        if let Some(error) = self.state.error() {
            let panel = Paragraph::new(vec![
                Line::from(Span::styled(
                    "Error",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(error.to_string(), Style::default().fg(Color::Red))),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Red)),
            )
            .wrap(Wrap { trim: true });
            f.render_widget(panel, area);
            return;
        }

        let Some(result) = self.state.result() else {
            return;
        };

        // Anything but a clear positive or negative call renders neutral gray
        let color = match result.label {
            SentimentLabel::Positive | SentimentLabel::Negative => sentiment_color(result.label),
            SentimentLabel::Neutral | SentimentLabel::Unknown => Color::Gray,
        };

        let panel = Paragraph::new(vec![
            Line::from(Span::styled("PREDICTION", Style::default().fg(color))),
            Line::from(""),
            Line::from(Span::styled(
                result.label.as_str(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("Confidence: {:.2}%", result.score * 100.0),
                Style::default().fg(color),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
        f.render_widget(panel, area);
    }
}

impl Component for TesterComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::AnalyzeText,
            KeyCode::Backspace => {
                self.state.backspace();
                Action::None
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.clear_input();
                Action::None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.push_char(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::AnalysisCompleted { generation, result } => {
                self.state.apply(generation, result);
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let width = rect.width.min(90);
        let column = Rect::new(rect.x + (rect.width - width) / 2, rect.y, width, rect.height);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(6),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(7),
                Constraint::Min(0),
            ])
            .split(column);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                TESTER_TITLE,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(TESTER_SUBTITLE, Style::default().fg(Color::Gray))),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        f.render_widget(header, chunks[1]);

        self.render_input(f, chunks[2]);
        self.render_button(f, chunks[3]);
        self.render_outcome(f, chunks[5]);
    }
}
