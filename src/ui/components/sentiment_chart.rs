//! Donut chart of the positive / neutral / negative split, drawn with braille
//! points on a canvas, plus a legend that always lists all three labels.

use crate::analytics::{DistributionSlice, SentimentMetrics};
use crate::api::SentimentLabel;
use crate::constants::NO_CHART_DATA;
use crate::ui::components::badge::sentiment_color;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        block::BorderType,
        canvas::{Canvas, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};
use std::f64::consts::{FRAC_PI_2, TAU};

const INNER_RADIUS: f64 = 0.6;
const OUTER_RADIUS: f64 = 1.0;
/// Gap left between adjacent slices, in radians
const SLICE_PADDING: f64 = 5.0 * TAU / 360.0;
const RADIAL_STEPS: usize = 8;
const ANGULAR_STEPS: usize = 360;

/// Points making up one slice of the donut
#[derive(Debug, Clone, PartialEq)]
pub struct SliceArc {
    pub label: SentimentLabel,
    pub points: Vec<(f64, f64)>,
}

/// Sample the donut into per-slice point clouds on the unit circle.
///
/// Slices run clockwise from twelve o'clock; empty slices produce no arc.
#[must_use]
pub fn donut_arcs(slices: &[DistributionSlice]) -> Vec<SliceArc> {
    let active: Vec<&DistributionSlice> = slices.iter().filter(|s| s.count > 0).collect();
    let padding = if active.len() > 1 { SLICE_PADDING } else { 0.0 };

    let mut start = 0.0;
    active
        .into_iter()
        .map(|slice| {
            let sweep = slice.fraction * TAU;
            let arc_start = start + padding / 2.0;
            let arc_sweep = (sweep - padding).max(0.0);
            start += sweep;

            let angular = ((ANGULAR_STEPS as f64 * slice.fraction).ceil() as usize).max(1);
            let points = (0..=angular)
                .flat_map(|a| {
                    let theta = FRAC_PI_2 - (arc_start + arc_sweep * a as f64 / angular as f64);
                    (0..=RADIAL_STEPS).map(move |r| {
                        let radius = INNER_RADIUS + (OUTER_RADIUS - INNER_RADIUS) * r as f64 / RADIAL_STEPS as f64;
                        (radius * theta.cos(), radius * theta.sin())
                    })
                })
                .collect();

            SliceArc {
                label: slice.label,
                points,
            }
        })
        .collect()
}

/// Legend line: `● Positive (3)  ● Neutral (0)  ● Negative (1)`
#[must_use]
pub fn legend_line(slices: &[DistributionSlice]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, slice) in slices.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled("● ", Style::default().fg(sentiment_color(slice.label))));
        spans.push(Span::styled(
            format!("{} ({})", slice.name, slice.count),
            Style::default().fg(Color::Gray),
        ));
    }
    Line::from(spans).alignment(Alignment::Center)
}

pub struct SentimentChart;

impl SentimentChart {
    pub fn render(f: &mut Frame, area: Rect, metrics: &SentimentMetrics) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Sentiment Distribution ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        if metrics.total() == 0 {
            let empty = Paragraph::new(NO_CHART_DATA)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            let middle = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1.min(inner.height));
            f.render_widget(empty, middle);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(inner);

        let slices = metrics.distribution();
        let arcs = donut_arcs(&slices);

        // Cells are roughly twice as tall as wide; widen the x range to keep the ring round
        let chart = chunks[0];
        let x_half = if chart.height == 0 {
            OUTER_RADIUS
        } else {
            (f64::from(chart.width) / (2.0 * f64::from(chart.height))).max(1.0) * OUTER_RADIUS
        };
        let y_half = (x_half * 2.0 * f64::from(chart.height) / f64::from(chart.width.max(1))).max(OUTER_RADIUS);

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-x_half, x_half])
            .y_bounds([-y_half, y_half])
            .paint(move |ctx| {
                for arc in &arcs {
                    ctx.draw(&Points {
                        coords: &arc.points,
                        color: sentiment_color(arc.label),
                    });
                }
            });
        f.render_widget(canvas, chart);

        f.render_widget(Paragraph::new(legend_line(&slices)), chunks[1]);
    }
}
