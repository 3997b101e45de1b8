//! Sentiment enrichment and aggregation for headline batches.
//!
//! A fetched batch is enriched by classifying the titles of its first
//! [`ANALYSIS_BATCH_LIMIT`] articles concurrently. Articles past the limit are
//! never analyzed; this bounds work and latency independently of feed size.
//! A failed classification leaves that one article without a sentiment and
//! does not affect the rest of the batch.

use futures::future::join_all;
use std::time::Duration;

use crate::api::{NewsArticle, SentimentApi, SentimentLabel, SentimentResult};
pub use crate::constants::ANALYSIS_BATCH_LIMIT;

/// A headline with the sentiment attached client-side, when one was obtained
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedArticle {
    pub article: NewsArticle,
    pub sentiment: Option<SentimentResult>,
}

impl EnrichedArticle {
    pub fn unannotated(article: NewsArticle) -> Self {
        Self { article, sentiment: None }
    }

    pub fn label(&self) -> Option<SentimentLabel> {
        self.sentiment.map(|s| s.label)
    }
}

/// Label counts over an enriched batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentMetrics {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

/// One segment of the sentiment distribution chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionSlice {
    pub label: SentimentLabel,
    pub name: &'static str,
    pub count: usize,
    /// Share of the counted total, 0.0 when nothing was counted
    pub fraction: f64,
}

impl SentimentMetrics {
    /// Count labels in a single pass. Articles without sentiment and
    /// `UNKNOWN` labels contribute to no counter.
    #[must_use]
    pub fn tally(articles: &[EnrichedArticle]) -> Self {
        articles
            .iter()
            .filter_map(EnrichedArticle::label)
            .fold(Self::default(), |mut metrics, label| {
                match label {
                    SentimentLabel::Positive => metrics.positive += 1,
                    SentimentLabel::Negative => metrics.negative += 1,
                    SentimentLabel::Neutral => metrics.neutral += 1,
                    SentimentLabel::Unknown => {}
                }
                metrics
            })
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// "Positive" when positive signals outnumber risks, "Mixed" otherwise
    #[must_use]
    pub fn outlook(&self) -> &'static str {
        if self.positive > self.negative {
            "Positive"
        } else {
            "Mixed"
        }
    }

    #[must_use]
    pub fn momentum(&self) -> &'static str {
        if self.positive > self.negative {
            "Strong"
        } else {
            "Moderate"
        }
    }

    #[must_use]
    pub fn risk_level(&self) -> &'static str {
        if self.negative > 2 {
            "High"
        } else {
            "Low"
        }
    }

    /// Positive, neutral and negative slices in chart order
    #[must_use]
    pub fn distribution(&self) -> [DistributionSlice; 3] {
        let total = self.total();
        let slice = |label, name, count: usize| DistributionSlice {
            label,
            name,
            count,
            fraction: if total == 0 { 0.0 } else { count as f64 / total as f64 },
        };

        [
            slice(SentimentLabel::Positive, "Positive", self.positive),
            slice(SentimentLabel::Neutral, "Neutral", self.neutral),
            slice(SentimentLabel::Negative, "Negative", self.negative),
        ]
    }
}

/// Result of one headlines load: the enriched batch and its counts
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlinesSnapshot {
    pub language: String,
    pub articles: Vec<EnrichedArticle>,
    pub metrics: SentimentMetrics,
}

impl HeadlinesSnapshot {
    pub fn new(language: impl Into<String>, articles: Vec<EnrichedArticle>) -> Self {
        let metrics = SentimentMetrics::tally(&articles);
        Self {
            language: language.into(),
            articles,
            metrics,
        }
    }

    #[must_use]
    pub fn analyzed_count(&self) -> usize {
        analyzed_count(self.articles.len())
    }
}

/// Number of articles out of a batch that are sent for analysis
#[must_use]
pub fn analyzed_count(article_count: usize) -> usize {
    article_count.min(ANALYSIS_BATCH_LIMIT)
}

/// One-sentence market summary for the dashboard
pub fn summarize(article_count: usize, metrics: &SentimentMetrics, language_name: &str) -> String {
    if article_count == 0 {
        return crate::constants::NO_HEADLINES.to_string();
    }

    format!(
        "The current market sentiment in {} media indicates a {} outlook. Tracking {} positive signals against {} risks.",
        language_name,
        metrics.outlook(),
        metrics.positive,
        metrics.negative
    )
}

/// Classify the first [`ANALYSIS_BATCH_LIMIT`] titles concurrently and pass the
/// rest through unannotated. Order is preserved.
pub async fn enrich_articles(api: &dyn SentimentApi, mut articles: Vec<NewsArticle>) -> Vec<EnrichedArticle> {
    let rest = articles.split_off(analyzed_count(articles.len()));

    let outcomes = join_all(articles.iter().map(|article| api.analyze_sentiment(&article.title))).await;

    let mut enriched: Vec<EnrichedArticle> = articles
        .into_iter()
        .zip(outcomes)
        .enumerate()
        .map(|(index, (article, outcome))| match outcome {
            Ok(sentiment) => EnrichedArticle {
                article,
                sentiment: Some(sentiment),
            },
            Err(e) => {
                log::warn!("Sentiment unavailable for headline #{} '{}': {}", index + 1, article.title, e);
                EnrichedArticle::unannotated(article)
            }
        })
        .collect();

    enriched.extend(rest.into_iter().map(EnrichedArticle::unannotated));
    enriched
}

/// Fetch, enrich and tally the headlines for `lang`
pub async fn load_snapshot(api: &dyn SentimentApi, lang: &str, randomize: bool) -> HeadlinesSnapshot {
    let articles = api.fetch_headlines(lang, randomize).await;
    let enriched = enrich_articles(api, articles).await;
    let snapshot = HeadlinesSnapshot::new(lang, enriched);

    log::info!(
        "Headlines '{}': {} total, {} analyzed, {}+ / {}- / {}~",
        lang,
        snapshot.articles.len(),
        snapshot.analyzed_count(),
        snapshot.metrics.positive,
        snapshot.metrics.negative,
        snapshot.metrics.neutral
    );
    snapshot
}

/// Trigger backend ingestion, wait `settle_delay`, then reload with randomization.
///
/// The delay is a heuristic: the backend offers no completion signal, so the
/// reload may still observe the previous data set.
pub async fn refresh_snapshot(api: &dyn SentimentApi, lang: &str, settle_delay: Duration) -> HeadlinesSnapshot {
    api.trigger_refresh().await;
    tokio::time::sleep(settle_delay).await;
    load_snapshot(api, lang, true).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, MockSentimentApi};

    fn article(title: &str) -> NewsArticle {
        NewsArticle {
            title: title.to_string(),
            link: format!("https://news.example/{}", title.replace(' ', "-")),
            published_date: "Mon, 03 Mar 2025 08:00:00 GMT".to_string(),
            source: "Example Times".to_string(),
            summary: None,
            language: Some("en".to_string()),
        }
    }

    #[tokio::test]
    async fn only_the_first_batch_is_sent_for_analysis() {
        let mut api = MockSentimentApi::new();
        api.expect_analyze_sentiment()
            .times(ANALYSIS_BATCH_LIMIT)
            .returning(|_| Ok(SentimentResult::new(SentimentLabel::Neutral, 0.7)));

        let articles: Vec<_> = (1..=25).map(|i| article(&format!("headline {}", i))).collect();
        let enriched = enrich_articles(&api, articles).await;

        assert_eq!(enriched.len(), 25);
        assert!(enriched[..10].iter().all(|a| a.sentiment.is_some()));
        assert!(enriched[10..].iter().all(|a| a.sentiment.is_none()));
        assert_eq!(enriched[24].article.title, "headline 25");
    }

    #[tokio::test]
    async fn titles_are_what_gets_classified() {
        let mut api = MockSentimentApi::new();
        api.expect_analyze_sentiment()
            .withf(|text| text.to_string() == "SIDBI expands credit line for MSMEs")
            .times(1)
            .returning(|_| Ok(SentimentResult::new(SentimentLabel::Positive, 0.93)));

        let enriched = enrich_articles(&api, vec![article("SIDBI expands credit line for MSMEs")]).await;
        assert_eq!(enriched[0].label(), Some(SentimentLabel::Positive));
    }

    #[tokio::test]
    async fn a_failed_analysis_only_drops_that_article() {
        let mut api = MockSentimentApi::new();
        api.expect_analyze_sentiment().returning(|text| {
            if text == "b" {
                Err(ApiError::Status {
                    status: 503,
                    reason: "Service Unavailable".to_string(),
                })
            } else {
                Ok(SentimentResult::new(SentimentLabel::Negative, 0.8))
            }
        });

        let enriched = enrich_articles(&api, vec![article("a"), article("b"), article("c")]).await;
        let labels: Vec<_> = enriched.iter().map(EnrichedArticle::label).collect();
        assert_eq!(
            labels,
            vec![Some(SentimentLabel::Negative), None, Some(SentimentLabel::Negative)]
        );
        assert_eq!(SentimentMetrics::tally(&enriched).negative, 2);
    }

    #[tokio::test]
    async fn empty_feed_makes_no_analysis_calls() {
        let mut api = MockSentimentApi::new();
        api.expect_fetch_headlines().returning(|_, _| Vec::new());
        api.expect_analyze_sentiment().never();

        let snapshot = load_snapshot(&api, "hi", false).await;
        assert!(snapshot.articles.is_empty());
        assert_eq!(snapshot.metrics, SentimentMetrics::default());
        assert_eq!(snapshot.analyzed_count(), 0);
        assert_eq!(
            summarize(snapshot.articles.len(), &snapshot.metrics, "Hindi"),
            crate::constants::NO_HEADLINES
        );
    }

    #[tokio::test]
    async fn refresh_triggers_ingestion_then_reloads_randomized() {
        let mut api = MockSentimentApi::new();
        api.expect_trigger_refresh().times(1).returning(|| ());
        api.expect_fetch_headlines()
            .withf(|lang, randomize| lang.to_string() == "ta" && *randomize)
            .times(1)
            .returning(|_, _| vec![article("x")]);
        api.expect_analyze_sentiment()
            .returning(|_| Ok(SentimentResult::new(SentimentLabel::Positive, 0.5)));

        let snapshot = refresh_snapshot(&api, "ta", Duration::from_millis(10)).await;
        assert_eq!(snapshot.language, "ta");
        assert_eq!(snapshot.metrics.positive, 1);
    }

    #[test]
    fn analyzed_count_caps_at_the_batch_limit() {
        assert_eq!(analyzed_count(0), 0);
        assert_eq!(analyzed_count(3), 3);
        assert_eq!(analyzed_count(ANALYSIS_BATCH_LIMIT), ANALYSIS_BATCH_LIMIT);
        assert_eq!(analyzed_count(25), ANALYSIS_BATCH_LIMIT);
    }

    #[test]
    fn unknown_labels_are_not_counted() {
        let articles = vec![
            EnrichedArticle {
                article: article("a"),
                sentiment: Some(SentimentResult::new(SentimentLabel::Unknown, 0.4)),
            },
            EnrichedArticle {
                article: article("b"),
                sentiment: Some(SentimentResult::new(SentimentLabel::Positive, 0.9)),
            },
            EnrichedArticle::unannotated(article("c")),
        ];

        let metrics = SentimentMetrics::tally(&articles);
        assert_eq!(metrics.total(), 1);
        assert_eq!(metrics.positive, 1);
    }

    #[test]
    fn derived_indicators_follow_counts() {
        let bullish = SentimentMetrics {
            positive: 5,
            negative: 2,
            neutral: 3,
        };
        assert_eq!(bullish.outlook(), "Positive");
        assert_eq!(bullish.momentum(), "Strong");
        assert_eq!(bullish.risk_level(), "Low");

        let bearish = SentimentMetrics {
            positive: 3,
            negative: 3,
            neutral: 0,
        };
        assert_eq!(bearish.outlook(), "Mixed");
        assert_eq!(bearish.momentum(), "Moderate");
        assert_eq!(bearish.risk_level(), "High");
    }

    #[test]
    fn distribution_fractions_sum_to_one() {
        let metrics = SentimentMetrics {
            positive: 2,
            negative: 1,
            neutral: 1,
        };
        let slices = metrics.distribution();
        assert_eq!(slices[0].name, "Positive");
        assert_eq!(slices[1].name, "Neutral");
        assert_eq!(slices[2].name, "Negative");
        assert!((slices.iter().map(|s| s.fraction).sum::<f64>() - 1.0).abs() < 1e-9);
        assert!((slices[0].fraction - 0.5).abs() < 1e-9);

        let empty = SentimentMetrics::default().distribution();
        assert!(empty.iter().all(|s| s.fraction == 0.0));
    }
}
