use crate::api::SentimentApi;
use crate::config::Config;
use crate::constants::ERROR_INGESTION_STATUS_UNAVAILABLE;
use crate::logger::Logger;
use crate::ui::components::status_bar::StatusBar;
use crate::ui::components::{DialogComponent, HeadlinesComponent, HomeComponent, NavbarComponent, TesterComponent};
use crate::ui::core::{
    actions::{Action, DialogType, Tab},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Settings the UI takes from the loaded configuration
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub default_language: String,
    pub health_poll_interval: Duration,
    pub refresh_settle_delay: Duration,
}

impl From<&Config> for AppSettings {
    fn from(config: &Config) -> Self {
        Self {
            default_language: config.ui.default_language.clone(),
            health_poll_interval: config.health.poll_interval(),
            refresh_settle_delay: config.refresh.settle_delay(),
        }
    }
}

pub struct AppComponent {
    // Component composition
    navbar: NavbarComponent,
    home: HomeComponent,
    headlines: HeadlinesComponent,
    tester: TesterComponent,
    dialog: DialogComponent,

    // Services
    api: Arc<dyn SentimentApi>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    settings: AppSettings,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(api: Arc<dyn SentimentApi>, settings: AppSettings, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger);

        Self {
            navbar: NavbarComponent::new(),
            home: HomeComponent::new(),
            headlines: HeadlinesComponent::new(&settings.default_language),
            tester: TesterComponent::new(),
            dialog,
            api,
            task_manager,
            background_action_rx,
            settings,
            should_quit: false,
        }
    }

    /// Start health polling and the first headlines load
    pub fn start(&mut self) {
        log::info!(
            "Starting dashboard (language '{}', health every {:?})",
            self.settings.default_language,
            self.settings.health_poll_interval
        );
        self.task_manager
            .spawn_health_poller(Arc::clone(&self.api), self.settings.health_poll_interval);
        self.dispatch(Action::LoadHeadlines);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn active_tab(&self) -> Tab {
        self.navbar.active_tab
    }

    pub fn navbar(&self) -> &NavbarComponent {
        &self.navbar
    }

    pub fn headlines(&self) -> &HeadlinesComponent {
        &self.headlines
    }

    pub fn tester(&self) -> &TesterComponent {
        &self.tester
    }

    pub fn dialog_type(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Requests in flight, excluding the health poller
    pub fn pending_request_count(&self) -> usize {
        self.task_manager.request_count()
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                log::debug!("Global key: {:?} - quitting application", key.code);
                Action::Quit
            }
            KeyCode::Char('?') | KeyCode::Char('h') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            _ => Action::None,
        }
    }

    /// Route a key press: dialogs first, then the active view, the navbar and global keys
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.navbar.active_tab {
            // Typing owns every key except view switching
            Tab::Tester => match key.code {
                KeyCode::Tab | KeyCode::BackTab => self.navbar.handle_key_events(key),
                _ => self.tester.handle_key_events(key),
            },
            Tab::Headlines if self.headlines.is_picker_open() => self.headlines.handle_key_events(key),
            tab => {
                let view_action = match tab {
                    Tab::Home => self.home.handle_key_events(key),
                    _ => self.headlines.handle_key_events(key),
                };
                if !matches!(view_action, Action::None) {
                    return view_action;
                }

                let navbar_action = self.navbar.handle_key_events(key);
                if !matches!(navbar_action, Action::None) {
                    return navbar_action;
                }

                self.handle_global_key(key)
            }
        }
    }

    /// Handle app-level actions that need the API client or the task manager
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                self.task_manager.cancel_all_tasks();
                Action::None
            }
            Action::LoadHeadlines => {
                let ticket = self.headlines.begin_load();
                self.task_manager.spawn_headlines_load(Arc::clone(&self.api), ticket);
                Action::None
            }
            Action::RefreshHeadlines => {
                let ticket = self.headlines.begin_refresh();
                self.task_manager
                    .spawn_refresh(Arc::clone(&self.api), ticket, self.settings.refresh_settle_delay);
                Action::None
            }
            Action::SelectLanguage(code) => {
                if let Some(ticket) = self.headlines.select_language(&code) {
                    self.task_manager.spawn_headlines_load(Arc::clone(&self.api), ticket);
                }
                Action::None
            }
            Action::AnalyzeText => {
                if let Some(ticket) = self.tester.submit() {
                    self.task_manager.spawn_analysis(Arc::clone(&self.api), ticket);
                }
                Action::None
            }
            Action::ShowIngestionStatus => {
                self.task_manager.spawn_ingestion_status(Arc::clone(&self.api));
                Action::None
            }
            Action::IngestionStatusLoaded(status) => {
                let dialog = match status {
                    Some(status) if status.is_ok() => DialogType::Info(status.describe()),
                    Some(status) => DialogType::Error(status.describe()),
                    None => DialogType::Error(ERROR_INGESTION_STATUS_UNAVAILABLE.to_string()),
                };
                self.dialog.update(Action::ShowDialog(dialog))
            }
            _ => Action::None,
        }
    }

    /// Run an action through the component hierarchy, then app-level handling
    pub fn dispatch(&mut self, action: Action) {
        let action = self.update(action);
        self.handle_app_action(action);
    }

    /// Drain results posted by background tasks
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        let finished = self.task_manager.cleanup_finished_tasks();
        if !finished.is_empty() {
            log::debug!("Background: cleaned up {} finished tasks", finished.len());
        }

        actions
    }

    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.dispatch(action);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.dialog.update(action);
        let action = self.navbar.update(action);
        let action = self.headlines.update(action);

        // Return for app-level handling
        self.tester.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect);

        self.navbar.render(f, areas.navbar);
        match self.navbar.active_tab {
            Tab::Home => self.home.render(f, areas.body),
            Tab::Headlines => self.headlines.render(f, areas.body),
            Tab::Tester => self.tester.render(f, areas.body),
        }
        StatusBar::render(f, areas.status, self.navbar.active_tab, self.pending_request_count());

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
