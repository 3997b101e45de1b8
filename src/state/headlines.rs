use super::RequestGeneration;
use crate::analytics::{self, EnrichedArticle, HeadlinesSnapshot, SentimentMetrics};
use crate::languages;

/// Describes one headlines load the view is waiting for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub language: String,
    pub randomize: bool,
}

/// State of the live feed view
#[derive(Debug, Clone)]
pub struct HeadlinesState {
    language: String,
    articles: Vec<EnrichedArticle>,
    metrics: SentimentMetrics,
    loading: bool,
    generation: RequestGeneration,
}

impl HeadlinesState {
    pub fn new(default_language: impl Into<String>) -> Self {
        Self {
            language: default_language.into(),
            articles: Vec::new(),
            metrics: SentimentMetrics::default(),
            loading: false,
            generation: RequestGeneration::new(),
        }
    }

    /// Switch language. Selecting the current language again is a no-op.
    pub fn select_language(&mut self, code: &str) -> Option<FetchTicket> {
        if code == self.language {
            return None;
        }
        log::info!("Headlines language changed: {} -> {}", self.language, code);
        self.language = code.to_string();
        Some(self.begin_fetch(false))
    }

    /// Start a load for the selected language; any earlier load becomes stale
    pub fn begin_fetch(&mut self, randomize: bool) -> FetchTicket {
        self.loading = true;
        FetchTicket {
            generation: self.generation.next(),
            language: self.language.clone(),
            randomize,
        }
    }

    /// Apply a finished load. Returns `false` when a newer load has been issued
    /// since, in which case the snapshot is discarded.
    pub fn apply(&mut self, generation: u64, snapshot: HeadlinesSnapshot) -> bool {
        if !self.generation.is_current(generation) {
            log::debug!(
                "Discarding stale headlines for '{}' (generation {}, latest {})",
                snapshot.language,
                generation,
                self.generation.latest()
            );
            return false;
        }

        self.articles = snapshot.articles;
        self.metrics = snapshot.metrics;
        self.loading = false;
        true
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn language_name(&self) -> String {
        languages::display_name_or_code(&self.language)
    }

    pub fn articles(&self) -> &[EnrichedArticle] {
        &self.articles
    }

    pub fn metrics(&self) -> SentimentMetrics {
        self.metrics
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn analyzed_count(&self) -> usize {
        analytics::analyzed_count(self.articles.len())
    }

    #[must_use]
    pub fn summary(&self) -> String {
        analytics::summarize(self.articles.len(), &self.metrics, &self.language_name())
    }
}
