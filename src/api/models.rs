//! Wire models for the FinVani backend.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// A single ingested news item as served by `/news/latest`.
///
/// Every field decodes leniently: missing or `null` text becomes empty and
/// non-string scalars are kept in their JSON text form, so one sloppy record
/// never costs the rest of the feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub link: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub published_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub source: String,
    #[serde(default, deserialize_with = "lenient_option", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Language code the backend tagged the article with
    #[serde(default, deserialize_with = "lenient_option", skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Text of a JSON value; `None` for `null`
pub(crate) fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(value_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_option<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(value_text(Value::deserialize(deserializer)?))
}

impl NewsArticle {
    /// Source name for display, falling back to the feed the backend ingests from
    pub fn display_source(&self) -> &str {
        if self.source.trim().is_empty() {
            crate::constants::DEFAULT_ARTICLE_SOURCE
        } else {
            &self.source
        }
    }
}

/// Classification returned by the sentiment model.
///
/// Labels outside the three known classes collapse into `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    #[serde(other)]
    Unknown,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::Neutral => "NEUTRAL",
            SentimentLabel::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response body of `POST /analyze/`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    /// Model confidence in [0, 1]
    pub score: f64,
}

impl SentimentResult {
    pub fn new(label: SentimentLabel, score: f64) -> Self {
        Self { label, score }
    }

    /// Confidence as a whole percentage
    #[must_use]
    pub fn percent(&self) -> u32 {
        (self.score.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}

/// Request body of `POST /analyze/`.
#[derive(Debug, Serialize)]
pub(crate) struct AnalysisRequest<'a> {
    pub text: &'a str,
}

/// A raw data file known to the ingestion pipeline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IngestionFile {
    pub name: String,
    #[serde(default)]
    pub size: u64,
    /// Modification time as fractional unix seconds
    #[serde(default)]
    pub modified: f64,
}

impl IngestionFile {
    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        let secs = self.modified.trunc() as i64;
        let nanos = (self.modified.fract() * 1e9) as u32;
        Utc.timestamp_opt(secs, nanos).single()
    }
}

/// Response body of `GET /news/status`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IngestionStatus {
    pub status: String,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub files: Vec<IngestionFile>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl IngestionStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    /// Most recently modified data file, if any
    pub fn latest_file(&self) -> Option<&IngestionFile> {
        self.files
            .iter()
            .max_by(|a, b| a.modified.partial_cmp(&b.modified).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Multi-line human readable summary for the info dialog
    pub fn describe(&self) -> String {
        if !self.is_ok() {
            return format!(
                "Ingestion status: {}\n{}",
                self.status,
                self.message.as_deref().unwrap_or("No details provided")
            );
        }

        let mut lines = vec![format!("Ingestion status: {} ({} data files)", self.status, self.count)];
        if let Some(path) = &self.path {
            lines.push(format!("Data directory: {}", path));
        }
        if let Some(latest) = self.latest_file() {
            let when = latest
                .modified_at()
                .map(|dt| dt.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "unknown".to_string());
            lines.push(format!("Latest file: {} ({} bytes, modified {})", latest.name, latest.size, when));
        }
        lines.join("\n")
    }
}
