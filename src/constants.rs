//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Backend defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const API_URL_ENV: &str = "FINVANI_API_URL";
pub const DEFAULT_HEALTH_POLL_SECS: u64 = 30;
pub const DEFAULT_REFRESH_SETTLE_MS: u64 = 2000;

/// Number of leading headlines sent for sentiment analysis per fetch
pub const ANALYSIS_BATCH_LIMIT: usize = 10;

/// Source shown for articles the backend did not attribute
pub const DEFAULT_ARTICLE_SOURCE: &str = "Google News";

// Branding
pub const APP_TITLE: &str = "FinVani AI";
pub const TAB_DASHBOARD: &str = "Dashboard";
pub const TAB_LIVE_FEED: &str = "Live Feed";
pub const TAB_TESTER: &str = "Sentiment Tester";

// Health badge
pub const HEALTH_ONLINE: &str = "● System Online";
pub const HEALTH_OFFLINE: &str = "● Backend Offline";

// Headlines view
pub const HEADLINES_TITLE: &str = "Live Market Sentiment";
pub const HEADLINES_SUBTITLE: &str = "Real-time analysis of financial headlines impacting the MSME sector.";
pub const NO_HEADLINES: &str = "No data found for this language. Run ingestion script.";
pub const NO_CHART_DATA: &str = "No data available";
pub const LOADING_HEADLINES: &str = "⟳ Fetching and analyzing headlines...";
pub const REFRESHING_HEADLINES: &str = "⟳ Triggering ingestion and reloading...";

// Tester view
pub const TESTER_TITLE: &str = "Sentiment Analyzer Tester";
pub const TESTER_SUBTITLE: &str = "Paste a financial headline below to verify the model's prediction.";
pub const TESTER_PLACEHOLDER: &str = "e.g. RBI hikes repo rate, impacting MSME loans...";
pub const TESTER_ANALYZING: &str = "Analyzing...";
pub const ERROR_BACKEND_UNREACHABLE: &str = "Failed to connect to the backend. Is it running?";

// Dialog messages
pub const ERROR_INGESTION_STATUS_UNAVAILABLE: &str = "❌ Could not read ingestion status from the backend";
pub const DIALOG_TITLE_DEBUG_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// Log buffer
/// Maximum number of entries retained by the in-memory log buffer
pub const MAX_LOG_ENTRIES: usize = 1000;
