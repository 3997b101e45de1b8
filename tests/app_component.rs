mod common;

use common::{article, StubApi};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use finvani::api::{IngestionStatus, SentimentLabel};
use finvani::constants::{ERROR_BACKEND_UNREACHABLE, ERROR_INGESTION_STATUS_UNAVAILABLE};
use finvani::logger::Logger;
use finvani::state::HealthStatus;
use finvani::ui::core::{Component, DialogType, EventType, Tab};
use finvani::ui::{AppComponent, AppSettings};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

fn settings() -> AppSettings {
    AppSettings {
        default_language: "en".to_string(),
        health_poll_interval: Duration::from_secs(30),
        refresh_settle_delay: Duration::from_millis(10),
    }
}

fn feed() -> Vec<finvani::api::NewsArticle> {
    vec![
        article("MSME exports boost"),
        article("Input costs hike squeezes margins"),
        article("Cabinet meets on Friday"),
    ]
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Let background tasks run and feed their results back until `done` holds
async fn pump_until<F>(app: &mut AppComponent, done: F)
where
    F: Fn(&AppComponent) -> bool,
{
    for _ in 0..200 {
        for action in app.process_background_actions() {
            app.dispatch(action);
        }
        if done(&*app) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("background work did not settle");
}

fn started(api: Arc<StubApi>) -> AppComponent {
    let mut app = AppComponent::new(api, settings(), Logger::new());
    app.start();
    app
}

#[tokio::test]
async fn test_start_loads_headlines_and_health() {
    let api = Arc::new(StubApi::new(feed()));
    let mut app = started(api.clone());

    assert!(app.headlines().state.is_loading());
    assert!(app.active_task_count() >= 2);

    pump_until(&mut app, |app| {
        !app.headlines().state.is_loading() && app.navbar().health_status() == HealthStatus::Online
    })
    .await;

    let state = &app.headlines().state;
    assert_eq!(state.articles().len(), 3);
    assert_eq!(state.metrics().positive, 1);
    assert_eq!(state.metrics().negative, 1);
    assert_eq!(state.metrics().neutral, 1);
    assert_eq!(api.fetched(), vec![("en".to_string(), false)]);
    assert_eq!(api.analyze_calls.load(Ordering::SeqCst), 3);

    pump_until(&mut app, |app| app.pending_request_count() == 0).await;
    // The poller keeps running
    assert_eq!(app.active_task_count(), 1);
}

#[tokio::test]
async fn test_offline_backend_shows_offline_badge() {
    let mut stub = StubApi::new(Vec::new());
    stub.healthy = false;
    let mut app = started(Arc::new(stub));

    pump_until(&mut app, |app| app.navbar().health_status() == HealthStatus::Offline).await;
}

#[tokio::test]
async fn test_tab_navigation() {
    let mut app = AppComponent::new(Arc::new(StubApi::new(Vec::new())), settings(), Logger::new());
    assert_eq!(app.active_tab(), Tab::Home);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.active_tab(), Tab::Headlines);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.active_tab(), Tab::Tester);

    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.active_tab(), Tab::Headlines);

    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.active_tab(), Tab::Home);

    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.active_tab(), Tab::Tester);
}

#[tokio::test]
async fn test_tester_owns_typing_keys() {
    let mut app = AppComponent::new(Arc::new(StubApi::new(Vec::new())), settings(), Logger::new());
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.active_tab(), Tab::Tester);

    type_text(&mut app, "q?1h");
    assert!(!app.should_quit());
    assert!(app.dialog_type().is_none());
    assert_eq!(app.active_tab(), Tab::Tester);
    assert_eq!(app.tester().state.input(), "q?1h");

    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_tester_analysis_round_trip() {
    let api = Arc::new(StubApi::new(Vec::new()));
    let mut app = AppComponent::new(api.clone(), settings(), Logger::new());
    press(&mut app, KeyCode::Char('3'));

    // Blank input is not submitted
    press(&mut app, KeyCode::Enter);
    assert!(!app.tester().state.is_loading());

    type_text(&mut app, "Exports growth");
    press(&mut app, KeyCode::Enter);
    assert!(app.tester().state.is_loading());
    assert_eq!(app.pending_request_count(), 1);

    pump_until(&mut app, |app| !app.tester().state.is_loading()).await;
    assert_eq!(
        app.tester().state.result().map(|r| r.label),
        Some(SentimentLabel::Positive)
    );
    assert_eq!(api.analyze_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_tester_backend_failure() {
    let mut stub = StubApi::new(Vec::new());
    stub.fail_analysis = true;
    let mut app = AppComponent::new(Arc::new(stub), settings(), Logger::new());
    press(&mut app, KeyCode::Char('3'));

    type_text(&mut app, "anything");
    press(&mut app, KeyCode::Enter);
    pump_until(&mut app, |app| !app.tester().state.is_loading()).await;

    assert_eq!(app.tester().state.error(), Some(ERROR_BACKEND_UNREACHABLE));
    assert!(app.tester().state.result().is_none());
}

#[tokio::test]
async fn test_language_switch_reloads() {
    let api = Arc::new(StubApi::new(feed()));
    let mut app = started(api.clone());
    pump_until(&mut app, |app| !app.headlines().state.is_loading()).await;

    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('l'));
    // 'q' belongs to the picker while it is open
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.headlines().state.language(), "hi");
    pump_until(&mut app, |app| !app.headlines().state.is_loading()).await;
    assert_eq!(
        api.fetched(),
        vec![("en".to_string(), false), ("hi".to_string(), false)]
    );
}

#[tokio::test]
async fn test_refresh_triggers_ingestion() {
    let api = Arc::new(StubApi::new(feed()));
    let mut app = started(api.clone());
    pump_until(&mut app, |app| !app.headlines().state.is_loading()).await;

    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('r'));
    assert!(app.headlines().state.is_loading());

    pump_until(&mut app, |app| !app.headlines().state.is_loading()).await;
    assert_eq!(api.refresh_calls.load(Ordering::SeqCst), 1);
    assert_eq!(api.fetched().last(), Some(&("en".to_string(), true)));
}

#[tokio::test]
async fn test_ingestion_status_dialogs() {
    let mut app = AppComponent::new(Arc::new(StubApi::new(Vec::new())), settings(), Logger::new());
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('s'));

    pump_until(&mut app, |app| app.dialog_type().is_some()).await;
    match app.dialog_type() {
        Some(DialogType::Error(message)) => assert_eq!(message, ERROR_INGESTION_STATUS_UNAVAILABLE),
        other => panic!("expected error dialog, got {:?}", other),
    }

    // Any non-scrolling key dismisses it without quitting
    press(&mut app, KeyCode::Char('q'));
    assert!(app.dialog_type().is_none());
    assert!(!app.should_quit());

    let mut stub = StubApi::new(Vec::new());
    stub.status = Some(IngestionStatus {
        status: "ok".to_string(),
        count: 4,
        files: Vec::new(),
        path: Some("/data/raw".to_string()),
        message: None,
    });
    let mut app = AppComponent::new(Arc::new(stub), settings(), Logger::new());
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('s'));
    pump_until(&mut app, |app| app.dialog_type().is_some()).await;
    assert!(matches!(app.dialog_type(), Some(DialogType::Info(text)) if text.contains("4 data files")));
}

#[tokio::test]
async fn test_help_and_logs_dialogs() {
    let mut app = AppComponent::new(Arc::new(StubApi::new(Vec::new())), settings(), Logger::new());

    press(&mut app, KeyCode::Char('?'));
    assert!(matches!(app.dialog_type(), Some(DialogType::Help)));
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    press(&mut app, KeyCode::Esc);
    assert!(app.dialog_type().is_none());

    press(&mut app, KeyCode::Char('G'));
    assert!(matches!(app.dialog_type(), Some(DialogType::Logs)));
    press(&mut app, KeyCode::Char('G'));
    assert!(app.dialog_type().is_none());

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_render_every_view() {
    let api = Arc::new(StubApi::new(feed()));
    let mut app = started(api);
    pump_until(&mut app, |app| !app.headlines().state.is_loading()).await;

    let mut terminal = Terminal::new(TestBackend::new(140, 45)).expect("test terminal");
    for (key, expected) in [('1', "Sentiment Intelligence"), ('2', "Market Summary"), ('3', "Sentiment Analyzer Tester")] {
        press(&mut app, KeyCode::Char(key));
        terminal.draw(|f| app.render(f, f.area())).expect("draw succeeds");

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("FinVani"), "navbar missing on view {}", key);
        assert!(text.contains(expected), "view {} did not render '{}'", key, expected);
    }

    // Tab leaves the tester, whose keys would otherwise be typed
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('?'));
    terminal.draw(|f| app.render(f, f.area())).expect("draw succeeds");
    let text: String = terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect();
    assert!(text.contains("Help"));
}
