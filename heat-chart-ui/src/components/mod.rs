//! Reusable Dioxus RSX components for the heatmap app.

mod axis_label;
mod chart_header;
mod dataset_summary;
mod drilldown_grid;
mod error_display;
mod floating_tooltip;
mod legend_strip;
mod loading_spinner;
mod metric_selector;
mod overview_heatmap;

pub use axis_label::AxisLabel;
pub use chart_header::ChartHeader;
pub use dataset_summary::DatasetSummary;
pub use drilldown_grid::DrilldownGrid;
pub use error_display::ErrorDisplay;
pub use floating_tooltip::FloatingTooltip;
pub use legend_strip::LegendStrip;
pub use loading_spinner::LoadingSpinner;
pub use metric_selector::MetricSelector;
pub use overview_heatmap::OverviewHeatmap;
