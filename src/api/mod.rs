//! Client for the FinVani inference backend
//!
//! The backend exposes a handful of JSON endpoints: sentiment analysis of a
//! single text, the latest ingested headlines for a language, a trigger for
//! background ingestion, a health probe and an ingestion status report.
//!
//! The [`SentimentApi`] trait is the seam the rest of the application talks
//! to; [`ApiClient`] is the HTTP implementation. Failure policy differs per
//! operation:
//!
//! - `analyze_sentiment` propagates every failure to the caller
//! - `fetch_headlines` degrades to an empty list
//! - `trigger_refresh` logs and swallows errors
//! - `check_health` reports `false` instead of failing
//! - `ingestion_status` degrades to `None`

mod client;
pub mod models;

use async_trait::async_trait;

pub use client::{parse_article_list, ApiClient};
pub use models::{IngestionFile, IngestionStatus, NewsArticle, SentimentLabel, SentimentResult};

/// Failures surfaced by backend calls that propagate errors
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("Malformed payload: {0}")]
    Payload(String),
}

/// Operations offered by the sentiment backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SentimentApi: Send + Sync {
    /// Classify a piece of text
    async fn analyze_sentiment(&self, text: &str) -> Result<SentimentResult, ApiError>;

    /// Latest headlines for a language, empty on any failure
    async fn fetch_headlines(&self, lang: &str, randomize: bool) -> Vec<NewsArticle>;

    /// Ask the backend to start a background ingestion run
    async fn trigger_refresh(&self);

    /// Whether the backend answers its health probe with a success status
    async fn check_health(&self) -> bool;

    /// Snapshot of the ingestion data directory, `None` on any failure
    async fn ingestion_status(&self) -> Option<IngestionStatus>;
}
