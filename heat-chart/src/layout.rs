//! Chart geometry configuration.
//!
//! Defaults reproduce the dimensions the heatmaps were designed at. All
//! values are in SVG user units (pixels).

use crate::scale::BandScale;
use heat_data::MONTH_NAMES;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Horizontal room reserved right of the legend for its value labels.
const LEGEND_LABEL_ROOM: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Level 1: one cell per month-year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverviewLayout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    /// Band padding for both axes, as a fraction of the step.
    pub padding: f64,
    pub legend_width: f64,
    pub legend_height: f64,
    /// Gap between the plot area and the legend strip.
    pub legend_gap: f64,
}

impl Default for OverviewLayout {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 800.0,
            margin: Margin {
                top: 50.0,
                right: 30.0,
                bottom: 70.0,
                left: 100.0,
            },
            padding: 0.05,
            legend_width: 20.0,
            legend_height: 100.0,
            legend_gap: 10.0,
        }
    }
}

impl OverviewLayout {
    /// Width of the plot area inside the margins.
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }
}

/// Level 2: a fixed year range of mini-charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrilldownLayout {
    pub first_year: i32,
    pub last_year: i32,
    pub cell_width: f64,
    pub cell_height: f64,
    pub spacing: f64,
    /// Offset of the first cell from the grid origin on both axes.
    pub grid_offset: f64,
    /// Day-of-month denominator for sparkline x positions.
    pub days_per_month: f64,
    pub legend_stops: usize,
    pub legend_width: f64,
    pub legend_height: f64,
    /// Horizontal gap between the legend swatches and their labels.
    pub legend_label_gap: f64,
    /// Gap between the grid and the legend.
    pub legend_gap: f64,
    pub line_width: f64,
    pub max_line_color: String,
    pub min_line_color: String,
    pub cell_stroke: String,
}

impl Default for DrilldownLayout {
    fn default() -> Self {
        Self {
            first_year: 2008,
            last_year: 2017,
            cell_width: 80.0,
            cell_height: 51.0,
            spacing: 8.0,
            grid_offset: 50.0,
            days_per_month: 31.0,
            legend_stops: 10,
            legend_width: 30.0,
            legend_height: 200.0,
            legend_label_gap: 5.0,
            legend_gap: 40.0,
            line_width: 2.0,
            max_line_color: "green".to_string(),
            min_line_color: "skyblue".to_string(),
            cell_stroke: "#ddd".to_string(),
        }
    }
}

impl DrilldownLayout {
    pub fn years(&self) -> RangeInclusive<i32> {
        self.first_year..=self.last_year
    }

    pub fn year_count(&self) -> usize {
        self.years().count()
    }

    /// Column scale over the fixed year range. Bands are exactly one cell
    /// wide and steps include the spacing, starting at the grid offset.
    pub fn year_scale(&self) -> BandScale<i32> {
        let start = self.grid_offset;
        BandScale::with_padding(
            self.years().collect(),
            (start, start + self.grid_width() - self.spacing),
            self.spacing / (self.cell_width + self.spacing),
            0.0,
        )
    }

    /// Row scale over the month names.
    pub fn month_scale(&self) -> BandScale<&'static str> {
        let start = self.grid_offset;
        BandScale::with_padding(
            MONTH_NAMES.to_vec(),
            (start, start + self.grid_height() - self.spacing),
            self.spacing / (self.cell_height + self.spacing),
            0.0,
        )
    }

    /// Width covered by all columns including spacing.
    pub fn grid_width(&self) -> f64 {
        self.year_count() as f64 * (self.cell_width + self.spacing)
    }

    /// Height covered by the twelve month rows including spacing.
    pub fn grid_height(&self) -> f64 {
        12.0 * (self.cell_height + self.spacing)
    }

    /// Total drawing size including the offset and the legend column.
    pub fn canvas_size(&self) -> (f64, f64) {
        let width = self.grid_offset
            + self.grid_width()
            + self.legend_gap
            + self.legend_width
            + self.legend_label_gap
            + LEGEND_LABEL_ROOM;
        let height = (self.grid_offset + self.grid_height()).max(self.legend_height);
        (width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_inner_dimensions() {
        let layout = OverviewLayout::default();
        assert_eq!(layout.inner_width(), 870.0);
        assert_eq!(layout.inner_height(), 680.0);
    }

    #[test]
    fn drilldown_scales_follow_cell_grid() {
        let layout = DrilldownLayout::default();
        assert_eq!(layout.year_count(), 10);
        assert_eq!(layout.grid_width(), 880.0);
        assert_eq!(layout.grid_height(), 708.0);

        let years = layout.year_scale();
        assert!((years.step() - 88.0).abs() < 1e-9);
        assert!((years.bandwidth() - 80.0).abs() < 1e-9);
        assert!((years.position(&2008).unwrap() - 50.0).abs() < 1e-9);
        assert!((years.position(&2010).unwrap() - 226.0).abs() < 1e-9);

        let months = layout.month_scale();
        assert!((months.bandwidth() - 51.0).abs() < 1e-9);
        assert!((months.position(&"Dec").unwrap() - (50.0 + 11.0 * 59.0)).abs() < 1e-9);
    }

    #[test]
    fn layout_overrides_from_partial_json() {
        let layout: DrilldownLayout =
            serde_json::from_str(r#"{"first_year": 2000, "last_year": 2004}"#).unwrap();
        assert_eq!(layout.year_count(), 5);
        assert_eq!(layout.cell_width, 80.0);

        let overview: OverviewLayout = serde_json::from_str(r#"{"width": 1200}"#).unwrap();
        assert_eq!(overview.inner_width(), 1070.0);
    }
}
