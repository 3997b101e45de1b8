//! Live feed view: language selection, metrics, summary, chart and the
//! scrollable headline cards.

use crate::analytics::SentimentMetrics;
use crate::constants::{
    HEADLINES_SUBTITLE, HEADLINES_TITLE, LOADING_HEADLINES, NO_HEADLINES, REFRESHING_HEADLINES,
};
use crate::languages::{self, LANGUAGES};
use crate::state::{FetchTicket, HeadlinesState};
use crate::ui::components::badge::{create_confidence_badge, create_sentiment_badge};
use crate::ui::components::dialogs::common::{create_dialog_block, create_instructions_paragraph, shortcuts};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::components::sentiment_chart::SentimentChart;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime::format_published_date;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// What the in-flight load was started by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadKind {
    Fetch,
    Refresh,
}

pub struct HeadlinesComponent {
    pub state: HeadlinesState,
    selected_index: usize,
    list_state: ListState,
    scrollbar_helper: ScrollbarHelper,
    /// Highlighted row of the language picker while it is open
    picker: Option<usize>,
    load_kind: LoadKind,
}

impl HeadlinesComponent {
    pub fn new(default_language: &str) -> Self {
        Self {
            state: HeadlinesState::new(default_language),
            selected_index: 0,
            list_state: ListState::default(),
            scrollbar_helper: ScrollbarHelper::new(),
            picker: None,
            load_kind: LoadKind::Fetch,
        }
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker.is_some()
    }

    /// Start loading the current language
    pub fn begin_load(&mut self) -> FetchTicket {
        self.load_kind = LoadKind::Fetch;
        self.state.begin_fetch(false)
    }

    /// Start an ingestion refresh followed by a randomized reload
    pub fn begin_refresh(&mut self) -> FetchTicket {
        self.load_kind = LoadKind::Refresh;
        self.state.begin_fetch(true)
    }

    /// Switch language; `None` when it is already selected
    pub fn select_language(&mut self, code: &str) -> Option<FetchTicket> {
        let ticket = self.state.select_language(code)?;
        self.load_kind = LoadKind::Fetch;
        Some(ticket)
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    fn next_headline(&mut self) {
        let len = self.state.articles().len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1).min(len - 1);
        }
    }

    fn previous_headline(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    fn handle_picker_keys(&mut self, index: usize, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('l') => {
                self.picker = None;
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.picker = Some((index + 1).min(LANGUAGES.len() - 1));
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.picker = Some(index.saturating_sub(1));
                Action::None
            }
            KeyCode::Enter => {
                self.picker = None;
                Action::SelectLanguage(LANGUAGES[index].code.to_string())
            }
            _ => Action::None,
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let status = if self.state.is_loading() {
            let text = match self.load_kind {
                LoadKind::Fetch => LOADING_HEADLINES,
                LoadKind::Refresh => REFRESHING_HEADLINES,
            };
            Span::styled(text, Style::default().fg(Color::Yellow))
        } else {
            Span::styled("r refresh • s ingestion status", Style::default().fg(Color::DarkGray))
        };

        let lines = vec![
            Line::from(Span::styled(
                HEADLINES_TITLE,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(HEADLINES_SUBTITLE, Style::default().fg(Color::Gray))),
            Line::from(vec![
                Span::styled("Language: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    self.state.language_name(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" [l]   ", Style::default().fg(Color::DarkGray)),
                status,
            ]),
        ];
        f.render_widget(Paragraph::new(lines), area);
    }

    fn render_metrics(metrics: &SentimentMetrics, f: &mut Frame, area: Rect) {
        let cards = [
            ("Positive Signals", metrics.positive.to_string(), Color::Green),
            ("Negative Signals", metrics.negative.to_string(), Color::Red),
            ("Momentum", metrics.momentum().to_string(), Color::Cyan),
            (
                "Risk Level",
                metrics.risk_level().to_string(),
                if metrics.risk_level() == "High" {
                    Color::Red
                } else {
                    Color::Green
                },
            ),
        ];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        for ((title, value, color), column) in cards.into_iter().zip(columns.iter()) {
            let card = Paragraph::new(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(Span::styled(format!(" {} ", title), Style::default().fg(Color::Gray))),
            );
            f.render_widget(card, *column);
        }
    }

    fn render_summary(&self, f: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(self.state.summary(), Style::default().fg(Color::White))),
            Line::from(Span::styled(
                format!(
                    "Total: {} headlines • Analyzed: {}",
                    self.state.articles().len(),
                    self.state.analyzed_count()
                ),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let summary = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Market Summary "),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(summary, area);
    }

    fn create_card_items(&self, width: u16) -> Vec<ListItem<'static>> {
        let max_title = width.saturating_sub(4) as usize;

        self.state
            .articles()
            .iter()
            .map(|enriched| {
                let article = &enriched.article;

                let mut meta = vec![Span::styled(
                    article.display_source().to_string(),
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                )];
                if !article.published_date.is_empty() {
                    meta.push(Span::styled(
                        format!(" • {}", format_published_date(&article.published_date)),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                if let Some(sentiment) = &enriched.sentiment {
                    meta.push(Span::raw("  "));
                    meta.push(create_sentiment_badge(sentiment.label));
                    meta.push(Span::raw(" "));
                    meta.push(create_confidence_badge(sentiment));
                }

                let title: String = if article.title.chars().count() > max_title && max_title > 1 {
                    let mut truncated: String = article.title.chars().take(max_title - 1).collect();
                    truncated.push('…');
                    truncated
                } else {
                    article.title.clone()
                };

                ListItem::new(vec![
                    Line::from(meta),
                    Line::from(Span::styled(title, Style::default().fg(Color::White))),
                    Line::from(Span::styled(article.link.clone(), Style::default().fg(Color::DarkGray))),
                    Line::from(""),
                ])
            })
            .collect()
    }

    fn render_cards(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Headlines ");

        if self.state.articles().is_empty() {
            let message = if self.state.is_loading() {
                LOADING_HEADLINES
            } else {
                NO_HEADLINES
            };
            let empty = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .wrap(Wrap { trim: true });
            f.render_widget(empty, area);
            return;
        }

        // Each card is four rows tall
        let total_rows = self.state.articles().len() * 4;
        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(area, total_rows);
        let items = self.create_card_items(list_area.width);

        self.list_state.select(Some(self.selected_index));
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::Rgb(30, 41, 59)))
            .highlight_symbol("▌");
        f.render_stateful_widget(list, list_area, &mut self.list_state);

        self.scrollbar_helper.update_state(
            self.state.articles().len(),
            self.selected_index,
            Some((list_area.height.saturating_sub(2) / 4) as usize),
        );
        self.scrollbar_helper.render(f, scrollbar_area);
    }

    fn render_language_picker(&self, f: &mut Frame, area: Rect, highlighted: usize) {
        let height = (LANGUAGES.len() as u16 + 4).min(area.height);
        let picker_area = LayoutManager::centered_rect_lines(40, height, area);
        f.render_widget(Clear, picker_area);

        let block = create_dialog_block(" Select Language ", Color::Cyan);
        let inner = block.inner(picker_area);
        f.render_widget(block, picker_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let items: Vec<ListItem> = LANGUAGES
            .iter()
            .map(|lang| {
                let marker = if lang.code == self.state.language() { "● " } else { "  " };
                ListItem::new(format!("{}{}", marker, lang.name))
            })
            .collect();

        let mut list_state = ListState::default();
        list_state.select(Some(highlighted));
        let list = List::new(items).highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );
        f.render_stateful_widget(list, chunks[0], &mut list_state);

        let instructions = create_instructions_paragraph(&[
            shortcuts::JK_MOVE,
            shortcuts::SEPARATOR,
            shortcuts::ENTER_SELECT,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]);
        f.render_widget(instructions, chunks[1]);
    }
}

impl Component for HeadlinesComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if let Some(index) = self.picker {
            return self.handle_picker_keys(index, key);
        }

        match key.code {
            KeyCode::Char('l') => {
                self.picker = Some(languages::position(self.state.language()).unwrap_or(0));
                Action::None
            }
            KeyCode::Char('r') => Action::RefreshHeadlines,
            KeyCode::Char('s') => Action::ShowIngestionStatus,
            KeyCode::Down | KeyCode::Char('j') => {
                self.next_headline();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous_headline();
                Action::None
            }
            KeyCode::Home => {
                self.selected_index = 0;
                Action::None
            }
            KeyCode::End => {
                self.selected_index = self.state.articles().len().saturating_sub(1);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::HeadlinesLoaded { generation, snapshot } => {
                if self.state.apply(generation, snapshot) {
                    self.selected_index = 0;
                    self.list_state = ListState::default();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Min(4),
            ])
            .split(rect);

        self.render_header(f, chunks[0]);
        Self::render_metrics(&self.state.metrics(), f, chunks[1]);
        self.render_summary(f, chunks[2]);

        let (cards_area, chart_area) = LayoutManager::headlines_layout(chunks[3]);
        self.render_cards(f, cards_area);
        if let Some(chart_area) = chart_area {
            SentimentChart::render(f, chart_area, &self.state.metrics());
        }

        if let Some(highlighted) = self.picker {
            self.render_language_picker(f, rect, highlighted);
        }
    }
}
