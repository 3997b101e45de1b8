use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::api::{SentimentLabel, SentimentResult};
use crate::state::HealthStatus;

/// Color used for a sentiment label across badges, lists and the chart
#[must_use]
pub fn sentiment_color(label: SentimentLabel) -> Color {
    match label {
        SentimentLabel::Positive => Color::Green,
        SentimentLabel::Negative => Color::Red,
        SentimentLabel::Neutral => Color::Cyan,
        SentimentLabel::Unknown => Color::DarkGray,
    }
}

/// Label badge, e.g. ` POSITIVE `
#[must_use]
pub fn create_sentiment_badge(label: SentimentLabel) -> Span<'static> {
    Span::styled(
        format!(" {} ", label.as_str()),
        Style::default()
            .fg(Color::Black)
            .bg(sentiment_color(label))
            .add_modifier(Modifier::BOLD),
    )
}

/// Confidence in parentheses, e.g. `(93%)`
#[must_use]
pub fn create_confidence_badge(result: &SentimentResult) -> Span<'static> {
    Span::styled(
        format!("({}%)", result.percent()),
        Style::default().fg(sentiment_color(result.label)),
    )
}

/// Navbar badge for the backend health; nothing until the first check completes
#[must_use]
pub fn create_health_badge(status: HealthStatus) -> Option<Span<'static>> {
    let color = match status {
        HealthStatus::Online => Color::Green,
        HealthStatus::Offline => Color::Red,
        HealthStatus::Unknown => return None,
    };

    status
        .badge_text()
        .map(|text| Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD)))
}
