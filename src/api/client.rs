use async_trait::async_trait;
use reqwest::{header, Client, Response};
use serde_json::Value;
use std::time::Duration;

use super::models::{value_text, AnalysisRequest};
use super::{ApiError, IngestionStatus, NewsArticle, SentimentApi, SentimentResult};
use crate::config::ApiConfig;

/// HTTP client for the FinVani backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from the `[api]` configuration section
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn try_fetch_headlines(&self, lang: &str, randomize: bool) -> Result<Vec<NewsArticle>, ApiError> {
        let randomize = if randomize { "true" } else { "false" };
        let response = self
            .http
            .get(self.url("/news/latest"))
            .query(&[("lang", lang), ("randomize", randomize)])
            .header(header::CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let payload: Value = ensure_success(response)?.json().await?;
        parse_article_list(payload)
    }

    async fn try_ingestion_status(&self) -> Result<IngestionStatus, ApiError> {
        let response = self.http.get(self.url("/news/status")).send().await?;
        Ok(ensure_success(response)?.json().await?)
    }
}

/// Turn a non-2xx response into [`ApiError::Status`]
fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        })
    }
}

/// Decode a `/news/latest` payload. Anything but an array is rejected; every
/// element of an array comes back, in order.
pub fn parse_article_list(payload: Value) -> Result<Vec<NewsArticle>, ApiError> {
    let Value::Array(items) = payload else {
        let kind = match &payload {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Object(_) => "an object",
            Value::Array(_) => "an array",
        };
        return Err(ApiError::Payload(format!("news data is {}, expected an array", kind)));
    };

    Ok(items.into_iter().map(decode_article).collect())
}

/// Objects decode field by field; a bare scalar element becomes a title-only article
fn decode_article(item: Value) -> NewsArticle {
    if item.is_object() {
        if let Ok(article) = serde_json::from_value::<NewsArticle>(item.clone()) {
            return article;
        }
    }

    log::debug!("News item is not an article object: {}", item);
    NewsArticle {
        title: value_text(item).unwrap_or_default(),
        ..NewsArticle::default()
    }
}

#[async_trait]
impl SentimentApi for ApiClient {
    async fn analyze_sentiment(&self, text: &str) -> Result<SentimentResult, ApiError> {
        let outcome = async {
            let response = self
                .http
                .post(self.url("/analyze/"))
                .json(&AnalysisRequest { text })
                .send()
                .await?;
            let result: SentimentResult = ensure_success(response)?.json().await?;
            Ok::<_, ApiError>(result)
        }
        .await;

        if let Err(e) = &outcome {
            log::error!("Failed to analyze sentiment: {}", e);
        }
        outcome
    }

    async fn fetch_headlines(&self, lang: &str, randomize: bool) -> Vec<NewsArticle> {
        match self.try_fetch_headlines(lang, randomize).await {
            Ok(articles) => {
                log::info!("Fetched {} headlines for '{}' (randomize={})", articles.len(), lang, randomize);
                articles
            }
            Err(e) => {
                log::error!("Error fetching headlines for '{}': {}", lang, e);
                Vec::new()
            }
        }
    }

    async fn trigger_refresh(&self) {
        match self.http.post(self.url("/news/refresh")).send().await {
            Ok(response) if response.status().is_success() => {
                log::info!("Backend ingestion triggered");
            }
            Ok(response) => {
                log::warn!("Refresh request answered with status {}", response.status());
            }
            Err(e) => {
                log::error!("Error triggering refresh: {}", e);
            }
        }
    }

    async fn check_health(&self) -> bool {
        match self.http.get(self.url("/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                log::debug!("Health check failed: {}", e);
                false
            }
        }
    }

    async fn ingestion_status(&self) -> Option<IngestionStatus> {
        match self.try_ingestion_status().await {
            Ok(status) => Some(status),
            Err(e) => {
                log::warn!("Could not read ingestion status: {}", e);
                None
            }
        }
    }
}
