//! Level 1 overview: one heatmap cell per month-year.
//!
//! Months run along the x-axis, years (newest first) down the y-axis. Cell
//! and axis-label coordinates are relative to the plot origin
//! ([`OverviewScene::origin`]); the legend is placed in canvas coordinates.

use crate::layout::OverviewLayout;
use crate::scale::{BandScale, SequentialScale};
use crate::shapes::{format_celsius, Anchor, Legend, TextLabel};
use heat_data::{distinct_years_desc, month_name, Metric, MonthSummary};
use serde::Serialize;

/// One filled rectangle of the overview grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatCell {
    pub year: i32,
    pub month: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    /// Tooltip text, one entry per line.
    pub tooltip: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewScene {
    pub metric: Metric,
    pub width: f64,
    pub height: f64,
    /// Translation of the plot area inside the canvas.
    pub origin: (f64, f64),
    pub month_labels: Vec<TextLabel>,
    pub year_labels: Vec<TextLabel>,
    pub cells: Vec<HeatCell>,
    pub legend: Legend,
}

impl OverviewScene {
    /// Lay out the overview for `metric`. Every call produces a complete
    /// scene; nothing is carried over from a previous metric.
    pub fn build(summaries: &[MonthSummary], metric: Metric, layout: &OverviewLayout) -> Self {
        let inner_width = layout.inner_width();
        let inner_height = layout.inner_height();

        let months: Vec<u32> = (1..=12).collect();
        let x_scale = BandScale::new(months, (0.0, inner_width), layout.padding);
        let years = distinct_years_desc(summaries);
        let y_scale = BandScale::new(years, (0.0, inner_height), layout.padding);
        let color = SequentialScale::for_metric(summaries, metric);

        let month_labels = x_scale
            .domain()
            .iter()
            .filter_map(|m| {
                let x = x_scale.center(m)?;
                let label = TextLabel::new(x, inner_height + 5.0, month_name(*m), Anchor::Middle);
                Some(label.with_dy("1em"))
            })
            .collect();

        let year_labels = y_scale
            .domain()
            .iter()
            .filter_map(|y| {
                let cy = y_scale.center(y)?;
                Some(TextLabel::new(-10.0, cy, y.to_string(), Anchor::End).with_dy("0.5em"))
            })
            .collect();

        let cells = match &color {
            Some(color) => summaries
                .iter()
                .filter_map(|s| {
                    Some(HeatCell {
                        year: s.year,
                        month: s.month,
                        x: x_scale.position(&s.month)?,
                        y: y_scale.position(&s.year)?,
                        width: x_scale.bandwidth(),
                        height: y_scale.bandwidth(),
                        fill: color.fill(s.value(metric)),
                        tooltip: vec![
                            s.label(),
                            format!("Max: {}", format_celsius(s.max_temperature)),
                            format!("Min: {}", format_celsius(s.min_temperature)),
                        ],
                    })
                })
                .collect(),
            None => Vec::new(),
        };

        // One 1px swatch per legend row
        let legend = Legend::build(
            color.as_ref(),
            (layout.margin.left + inner_width + layout.legend_gap, layout.margin.top),
            (layout.legend_width, layout.legend_height),
            layout.legend_height.max(0.0) as usize,
        );

        log::debug!(
            "overview: {} cells, {} years for {}",
            cells.len(),
            y_scale.domain().len(),
            metric
        );

        Self {
            metric,
            width: layout.width,
            height: layout.height,
            origin: (layout.margin.left, layout.margin.top),
            month_labels,
            year_labels,
            cells,
            legend,
        }
    }
}
