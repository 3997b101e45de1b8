mod common;

use common::article;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use finvani::analytics::{EnrichedArticle, HeadlinesSnapshot, SentimentMetrics};
use finvani::api::{SentimentLabel, SentimentResult};
use finvani::constants::{HEALTH_ONLINE, NO_CHART_DATA};
use finvani::state::HealthStatus;
use finvani::ui::components::badge::{
    create_confidence_badge, create_health_badge, create_sentiment_badge, sentiment_color,
};
use finvani::ui::components::dialogs::DialogScroll;
use finvani::ui::components::sentiment_chart::SentimentChart;
use finvani::ui::components::status_bar::StatusBar;
use finvani::ui::components::{HeadlinesComponent, NavbarComponent, TesterComponent};
use finvani::ui::core::{Action, Component, Tab};
use finvani::ui::LayoutManager;
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, style::Color, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn buffer_text(buffer: &Buffer) -> String {
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn render_with<F>(width: u16, height: u16, draw: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    let mut draw = Some(draw);
    terminal
        .draw(|f| {
            if let Some(draw) = draw.take() {
                draw(f, f.area());
            }
        })
        .expect("draw succeeds");
    buffer_text(terminal.backend().buffer())
}

#[test]
fn test_tab_cycle_wraps() {
    assert_eq!(Tab::default(), Tab::Home);
    assert_eq!(Tab::Home.next(), Tab::Headlines);
    assert_eq!(Tab::Tester.next(), Tab::Home);
    assert_eq!(Tab::Home.previous(), Tab::Tester);
    assert_eq!(Tab::Headlines.title(), "Live Feed");
}

#[test]
fn test_status_text() {
    let idle = StatusBar::status_text(Tab::Headlines, 0);
    assert!(idle.starts_with("l: language"));

    let busy = StatusBar::status_text(Tab::Tester, 2);
    assert!(busy.starts_with("⟳ 2 request(s) in flight"));
    assert!(busy.contains("Enter: analyze"));
}

#[test]
fn test_badges() {
    assert_eq!(sentiment_color(SentimentLabel::Positive), Color::Green);
    assert_eq!(sentiment_color(SentimentLabel::Negative), Color::Red);
    assert_eq!(sentiment_color(SentimentLabel::Neutral), Color::Cyan);

    assert_eq!(create_sentiment_badge(SentimentLabel::Negative).content, " NEGATIVE ");
    let confidence = create_confidence_badge(&SentimentResult::new(SentimentLabel::Positive, 0.934));
    assert_eq!(confidence.content, "(93%)");

    assert!(create_health_badge(HealthStatus::Unknown).is_none());
    let online = create_health_badge(HealthStatus::Online).expect("online badge");
    assert_eq!(online.content, HEALTH_ONLINE);
}

#[test]
fn test_headlines_layout_drops_chart_when_narrow() {
    let (list, chart) = LayoutManager::headlines_layout(Rect::new(0, 0, 60, 30));
    assert_eq!(list.width, 60);
    assert!(chart.is_none());

    let (list, chart) = LayoutManager::headlines_layout(Rect::new(0, 0, 200, 30));
    let chart = chart.expect("chart shown");
    assert_eq!(chart.width, 48);
    assert_eq!(list.width + chart.width, 200);
}

#[test]
fn test_dialog_scroll_clamps() {
    let lines = ["a", "b", "c", "d", "e"];
    let mut scroll = DialogScroll::default();

    assert!(scroll.handle_key(KeyCode::End));
    assert_eq!(scroll.window(&lines, 2), vec!["d", "e"]);
    assert_eq!(scroll.offset, 3);

    assert!(scroll.handle_key(KeyCode::Char('k')));
    assert_eq!(scroll.window(&lines, 2), vec!["c", "d"]);

    assert!(!scroll.handle_key(KeyCode::Enter));
    scroll.reset();
    assert_eq!(scroll.window(&lines, 10).len(), 5);
}

#[test]
fn test_chart_without_data() {
    let text = render_with(50, 20, |f, area| {
        SentimentChart::render(f, area, &SentimentMetrics::default())
    });
    assert!(text.contains(NO_CHART_DATA));
}

#[test]
fn test_chart_legend_lists_counts() {
    let metrics = SentimentMetrics {
        positive: 4,
        negative: 1,
        neutral: 0,
    };
    let text = render_with(50, 20, |f, area| SentimentChart::render(f, area, &metrics));
    assert!(text.contains("Positive (4)"));
    assert!(text.contains("Neutral (0)"));
    assert!(text.contains("Negative (1)"));
}

#[test]
fn test_navbar_switches_tabs_and_shows_health() {
    let mut navbar = NavbarComponent::new();
    assert!(matches!(navbar.handle_key_events(key(KeyCode::Char('3'))), Action::SwitchTab(Tab::Tester)));
    assert!(matches!(navbar.handle_key_events(key(KeyCode::Tab)), Action::NextTab));

    navbar.update(Action::NextTab);
    assert_eq!(navbar.active_tab, Tab::Headlines);
    navbar.update(Action::HealthChecked(true));
    assert_eq!(navbar.health_status(), HealthStatus::Online);

    let text = render_with(120, 3, |f, area| navbar.render(f, area));
    assert!(text.contains("FinVani"));
    assert!(text.contains("Live Feed"));
    assert!(text.contains("System Online"));
}

#[test]
fn test_headlines_render_cards_and_metrics() {
    let mut headlines = HeadlinesComponent::new("en");
    let ticket = headlines.begin_load();
    let snapshot = HeadlinesSnapshot::new(
        "en",
        vec![
            EnrichedArticle {
                article: article("MSME exports boost"),
                sentiment: Some(SentimentResult::new(SentimentLabel::Positive, 0.91)),
            },
            EnrichedArticle {
                article: article("Credit costs hike"),
                sentiment: Some(SentimentResult::new(SentimentLabel::Negative, 0.77)),
            },
            EnrichedArticle::unannotated(article("Budget preview")),
        ],
    );
    headlines.update(Action::HeadlinesLoaded {
        generation: ticket.generation,
        snapshot,
    });

    let text = render_with(140, 45, |f, area| headlines.render(f, area));
    assert!(text.contains("Positive Signals"));
    assert!(text.contains("Market Summary"));
    assert!(text.contains("Total: 3 headlines"));
    assert!(text.contains("MSME exports boost"));
    assert!(text.contains("POSITIVE"));
    assert!(text.contains("(91%)"));
    assert!(text.contains("Economic Times"));
}

#[test]
fn test_headlines_picker_selects_language() {
    let mut headlines = HeadlinesComponent::new("en");
    assert!(matches!(headlines.handle_key_events(key(KeyCode::Char('l'))), Action::None));
    assert!(headlines.is_picker_open());

    headlines.handle_key_events(key(KeyCode::Char('j')));
    match headlines.handle_key_events(key(KeyCode::Enter)) {
        Action::SelectLanguage(code) => assert_eq!(code, "hi"),
        other => panic!("expected language selection, got {:?}", other),
    }
    assert!(!headlines.is_picker_open());

    headlines.handle_key_events(key(KeyCode::Char('l')));
    headlines.handle_key_events(key(KeyCode::Esc));
    assert!(!headlines.is_picker_open());
}

#[test]
fn test_headlines_shortcuts() {
    let mut headlines = HeadlinesComponent::new("en");
    assert!(matches!(headlines.handle_key_events(key(KeyCode::Char('r'))), Action::RefreshHeadlines));
    assert!(matches!(
        headlines.handle_key_events(key(KeyCode::Char('s'))),
        Action::ShowIngestionStatus
    ));
    headlines.handle_key_events(key(KeyCode::Char('j')));
    assert_eq!(headlines.selected_index(), 0);
}

#[test]
fn test_tester_typing_and_render() {
    let mut tester = TesterComponent::new();
    for c in "GST relief".chars() {
        tester.handle_key_events(key(KeyCode::Char(c)));
    }
    assert_eq!(tester.state.input(), "GST relief");
    assert!(matches!(tester.handle_key_events(key(KeyCode::Enter)), Action::AnalyzeText));

    let ticket = tester.submit().expect("submitted");
    tester.update(Action::AnalysisCompleted {
        generation: ticket.generation,
        result: Ok(SentimentResult::new(SentimentLabel::Positive, 0.875)),
    });

    let text = render_with(100, 30, |f, area| tester.render(f, area));
    assert!(text.contains("Sentiment Analyzer Tester"));
    assert!(text.contains("POSITIVE"));
    assert!(text.contains("Confidence: 87.50%"));

    tester.handle_key_events(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
    assert!(tester.state.input().is_empty());
}
