use crate::analytics::HeadlinesSnapshot;
use crate::api::{IngestionStatus, SentimentResult};
use crate::constants::{TAB_DASHBOARD, TAB_LIVE_FEED, TAB_TESTER};

/// Top-level views reachable from the navbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Headlines,
    Tester,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Headlines, Tab::Tester];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => TAB_DASHBOARD,
            Tab::Headlines => TAB_LIVE_FEED,
            Tab::Tester => TAB_TESTER,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Headlines => 1,
            Tab::Tester => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SwitchTab(Tab),
    NextTab,
    PrevTab,

    // Headlines
    SelectLanguage(String),
    LoadHeadlines,
    RefreshHeadlines,
    HeadlinesLoaded {
        generation: u64,
        snapshot: HeadlinesSnapshot,
    },

    // Tester
    AnalyzeText,
    AnalysisCompleted {
        generation: u64,
        result: Result<SentimentResult, String>,
    },

    // Backend status
    HealthChecked(bool),
    ShowIngestionStatus,
    IngestionStatusLoaded(Option<IngestionStatus>),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    Error(String),
    Info(String),
    Help,
    Logs,
}
