//! Level 2 drilldown: a month × year grid of mini-charts.
//!
//! Columns cover the fixed year range of the layout, rows the twelve months.
//! A cell with data is filled with the metric colour and carries two daily
//! sparklines; a cell without data stays an empty placeholder.
//!
//! Both sparklines share one vertical scale: the global range of the monthly
//! maximum temperatures, also for the minimum series. Minimum values below
//! that range fall under the cell bottom and are clipped by the cell.

use crate::layout::DrilldownLayout;
use crate::scale::SequentialScale;
use crate::shapes::{format_celsius, Anchor, Legend, TextLabel};
use heat_data::{extent, Metric, MonthSummary, SummaryIndex};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilledCell {
    pub fill: String,
    /// SVG path data for the daily maximum series.
    pub max_line: String,
    /// SVG path data for the daily minimum series.
    pub min_line: String,
    pub tooltip: Vec<String>,
}

/// One grid position. `filled` is `None` when the month has no data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridCell {
    pub year: i32,
    pub month: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub filled: Option<FilledCell>,
}

impl GridCell {
    pub fn is_empty(&self) -> bool {
        self.filled.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrilldownScene {
    pub metric: Metric,
    pub width: f64,
    pub height: f64,
    /// Year labels along the top edge of the grid.
    pub year_labels: Vec<TextLabel>,
    /// Month names along the left edge of the grid.
    pub month_labels: Vec<TextLabel>,
    /// Row-major: all years of January first, then February, ...
    pub cells: Vec<GridCell>,
    pub legend: Legend,
    pub line_width: f64,
    pub max_line_color: String,
    pub min_line_color: String,
    pub cell_stroke: String,
}

/// Vertical mapping of a temperature into a cell of `height`, top = warmest.
struct SparklineScale {
    range: Option<(f64, f64)>,
    width: f64,
    height: f64,
    days: f64,
}

impl SparklineScale {
    fn x(&self, day: usize) -> f64 {
        day as f64 / self.days * self.width
    }

    fn y(&self, temperature: f64) -> f64 {
        let t = match self.range {
            Some((lo, hi)) if hi != lo => (temperature - lo) / (hi - lo),
            _ => 0.5,
        };
        self.height - t * self.height
    }

    /// `M x,y L x,y ...` with day 1 at the first value.
    fn path(&self, values: &[f64]) -> String {
        let mut d = String::new();
        for (i, value) in values.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{}{:.2},{:.2}", cmd, self.x(i + 1), self.y(*value));
        }
        d
    }
}

impl DrilldownScene {
    /// Lay out the drilldown grid for `metric`. Years outside the layout's
    /// range are not drawn; years inside it without data get empty cells.
    pub fn build(summaries: &[MonthSummary], metric: Metric, layout: &DrilldownLayout) -> Self {
        let index = SummaryIndex::new(summaries);
        let year_scale = layout.year_scale();
        let month_scale = layout.month_scale();
        let color = SequentialScale::for_metric(summaries, metric);
        let sparkline = SparklineScale {
            range: extent(summaries, Metric::MaxTemperature),
            width: layout.cell_width,
            height: layout.cell_height,
            days: layout.days_per_month,
        };

        let year_labels = year_scale
            .domain()
            .iter()
            .filter_map(|y| {
                let x = year_scale.center(y)?;
                let y_top = layout.grid_offset - 8.0;
                Some(TextLabel::new(x, y_top, y.to_string(), Anchor::Middle))
            })
            .collect();

        let month_labels = month_scale
            .domain()
            .iter()
            .filter_map(|m| {
                let y = month_scale.center(m)?;
                let x = layout.grid_offset - 8.0;
                Some(TextLabel::new(x, y, *m, Anchor::End).with_dy("0.32em"))
            })
            .collect();

        let mut cells = Vec::with_capacity(12 * year_scale.domain().len());
        for (month_index, _) in month_scale.domain().iter().enumerate() {
            let month = month_index as u32 + 1;
            let y = month_scale.position_at(month_index);
            for (year_index, year) in year_scale.domain().iter().enumerate() {
                let filled = match (index.get(*year, month), &color) {
                    (Some(summary), Some(color)) => Some(FilledCell {
                        fill: color.fill(summary.value(metric)),
                        max_line: sparkline.path(&summary.max_temps_per_month),
                        min_line: sparkline.path(&summary.min_temps_per_month),
                        tooltip: vec![
                            summary.label(),
                            format!("Min Temp: {}", format_celsius(summary.min_temperature)),
                            format!("Max Temp: {}", format_celsius(summary.max_temperature)),
                        ],
                    }),
                    _ => None,
                };
                cells.push(GridCell {
                    year: *year,
                    month,
                    x: year_scale.position_at(year_index),
                    y,
                    width: layout.cell_width,
                    height: layout.cell_height,
                    filled,
                });
            }
        }

        let (width, height) = layout.canvas_size();
        let legend_x = layout.grid_offset + layout.grid_width() + layout.legend_gap;
        let legend = Legend::build(
            color.as_ref(),
            (legend_x, layout.grid_offset),
            (layout.legend_width, layout.legend_height),
            layout.legend_stops,
        )
        .with_end_labels(color.as_ref(), layout.legend_label_gap);

        log::debug!(
            "drilldown: {} of {} cells filled for {}",
            cells.iter().filter(|c| !c.is_empty()).count(),
            cells.len(),
            metric
        );

        Self {
            metric,
            width,
            height,
            year_labels,
            month_labels,
            cells,
            legend,
            line_width: layout.line_width,
            max_line_color: layout.max_line_color.clone(),
            min_line_color: layout.min_line_color.clone(),
            cell_stroke: layout.cell_stroke.clone(),
        }
    }

    pub fn cell(&self, year: i32, month: u32) -> Option<&GridCell> {
        self.cells.iter().find(|c| c.year == year && c.month == month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::Palette;
    use chrono::NaiveDate;
    use heat_data::{aggregate, RawRecord};

    fn rec(d: &str, max: f64, min: f64) -> RawRecord {
        RawRecord {
            date: NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap(),
            max_temperature: max,
            min_temperature: min,
        }
    }

    fn build(summaries: &[MonthSummary], metric: Metric) -> DrilldownScene {
        DrilldownScene::build(summaries, metric, &DrilldownLayout::default())
    }

    fn summaries() -> Vec<MonthSummary> {
        aggregate(&[
            rec("2010-01-01", 10.0, 2.0),
            rec("2010-01-02", 15.0, -1.0),
            rec("2010-02-10", 5.0, -5.0),
            // Outside the fixed year range
            rec("2020-06-01", 40.0, 25.0),
        ])
    }

    #[test]
    fn drilldown_grid_covers_fixed_years() {
        let scene = build(&summaries(), Metric::MaxTemperature);
        assert_eq!(scene.cells.len(), 120);
        assert_eq!(scene.year_labels.len(), 10);
        assert_eq!(scene.year_labels[0].text, "2008");
        assert_eq!(scene.year_labels[9].text, "2017");
        assert_eq!(scene.month_labels.len(), 12);
        assert_eq!(scene.month_labels[11].text, "Dec");
        assert!(scene.cell(2020, 6).is_none());
        assert_eq!(scene.cells.iter().filter(|c| !c.is_empty()).count(), 2);
    }

    #[test]
    fn drilldown_missing_month_is_empty_cell() {
        let scene = build(&summaries(), Metric::MaxTemperature);
        let cell = scene.cell(2012, 3).unwrap();
        assert!(cell.is_empty());
        assert!((cell.x - (50.0 + 4.0 * 88.0)).abs() < 1e-9);
        assert!((cell.y - (50.0 + 2.0 * 59.0)).abs() < 1e-9);
        assert_eq!(cell.width, 80.0);
        assert_eq!(cell.height, 51.0);
    }

    #[test]
    fn drilldown_sparklines_use_global_max_range() {
        // Max range across all summaries: 5 (Feb 2010) .. 40 (Jun 2020)
        let scene = build(&summaries(), Metric::MaxTemperature);
        let jan = scene.cell(2010, 1).unwrap().filled.as_ref().unwrap();

        // day 1: x = 1/31*80, max 10 -> y = 51 - (5/35)*51
        let x1 = 80.0 / 31.0;
        let y1 = 51.0 - (10.0 - 5.0) / 35.0 * 51.0;
        assert!(jan.max_line.starts_with(&format!("M{:.2},{:.2}", x1, y1)));
        assert_eq!(jan.max_line.matches('L').count(), 1);

        // The min series is scaled by the same max-temperature range
        let y_min = 51.0 - (2.0 - 5.0) / 35.0 * 51.0;
        assert!(jan.min_line.starts_with(&format!("M{:.2},{:.2}", x1, y_min)));
        assert!(y_min > 51.0);
    }

    #[test]
    fn drilldown_cell_fill_and_tooltip() {
        let data = summaries();
        let scene = build(&data, Metric::MinTemperature);
        let feb = scene.cell(2010, 2).unwrap().filled.as_ref().unwrap();
        assert_eq!(feb.fill, Palette::Blues.low().to_string());
        let jan = scene.cell(2010, 1).unwrap().filled.as_ref().unwrap();
        assert_eq!(jan.tooltip, vec!["Jan-2010", "Min Temp: -1°C", "Max Temp: 15°C"]);
    }

    #[test]
    fn drilldown_legend_has_ten_stops_and_end_labels() {
        let scene = build(&summaries(), Metric::MaxTemperature);
        assert_eq!(scene.legend.stops.len(), 10);
        assert_eq!(scene.legend.stops[0].height, 20.0);
        let labels: Vec<&str> = scene.legend.labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(labels, vec!["5", "40"]);
        assert_eq!(scene.legend.x, 50.0 + 880.0 + 40.0);
    }

    #[test]
    fn drilldown_empty_dataset() {
        let scene = build(&[], Metric::MaxTemperature);
        assert_eq!(scene.cells.len(), 120);
        assert!(scene.cells.iter().all(GridCell::is_empty));
        assert_eq!(scene.year_labels.len(), 10);
        assert!(scene.legend.is_empty());
        assert!(scene.legend.labels.is_empty());
    }

    #[test]
    fn drilldown_flat_range_draws_midline() {
        let data = aggregate(&[rec("2011-05-01", 20.0, 10.0), rec("2011-05-02", 20.0, 12.0)]);
        let scene = build(&data, Metric::MaxTemperature);
        let may = scene.cell(2011, 5).unwrap().filled.as_ref().unwrap();
        assert!(may.max_line.contains(",25.50L"));
        assert_eq!(may.fill, Palette::Oranges.at(0.5).to_string());
    }
}
