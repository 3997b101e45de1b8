#![allow(dead_code)]

use async_trait::async_trait;
use finvani::api::{ApiError, IngestionStatus, NewsArticle, SentimentApi, SentimentLabel, SentimentResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-process backend with canned answers
pub struct StubApi {
    pub articles: Vec<NewsArticle>,
    pub healthy: bool,
    pub fail_analysis: bool,
    pub status: Option<IngestionStatus>,
    pub analyze_calls: AtomicUsize,
    pub refresh_calls: AtomicUsize,
    pub fetched: Mutex<Vec<(String, bool)>>,
}

impl StubApi {
    pub fn new(articles: Vec<NewsArticle>) -> Self {
        Self {
            articles,
            healthy: true,
            fail_analysis: false,
            status: None,
            analyze_calls: AtomicUsize::new(0),
            refresh_calls: AtomicUsize::new(0),
            fetched: Mutex::new(Vec::new()),
        }
    }

    pub fn fetched(&self) -> Vec<(String, bool)> {
        self.fetched.lock().map(|f| f.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl SentimentApi for StubApi {
    async fn analyze_sentiment(&self, text: &str) -> Result<SentimentResult, ApiError> {
        self.analyze_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_analysis {
            return Err(ApiError::Status {
                status: 500,
                reason: "Internal Server Error".to_string(),
            });
        }
        let label = if text.contains("loss") || text.contains("hike") {
            SentimentLabel::Negative
        } else if text.contains("growth") || text.contains("boost") {
            SentimentLabel::Positive
        } else {
            SentimentLabel::Neutral
        };
        Ok(SentimentResult::new(label, 0.9))
    }

    async fn fetch_headlines(&self, lang: &str, randomize: bool) -> Vec<NewsArticle> {
        if let Ok(mut fetched) = self.fetched.lock() {
            fetched.push((lang.to_string(), randomize));
        }
        self.articles.clone()
    }

    async fn trigger_refresh(&self) {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
    }

    async fn check_health(&self) -> bool {
        self.healthy
    }

    async fn ingestion_status(&self) -> Option<IngestionStatus> {
        self.status.clone()
    }
}

pub fn article(title: &str) -> NewsArticle {
    NewsArticle {
        title: title.to_string(),
        link: "https://news.example/item".to_string(),
        published_date: "Mon, 03 Mar 2025 08:00:00 GMT".to_string(),
        source: "Economic Times".to_string(),
        summary: None,
        language: Some("en".to_string()),
    }
}
