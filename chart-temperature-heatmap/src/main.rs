//! Daily Temperature Calendar Heatmap
//!
//! Two views of the same daily temperature dataset:
//! - Level 1: one cell per month-year, coloured by the monthly maximum or
//!   minimum temperature
//! - Level 2: a fixed 2008-2017 grid of mini-charts with daily max/min
//!   sparklines and hover tooltips
//!
//! Data flow:
//! 1. On mount, `temperature_daily.csv` (served alongside WASM) is fetched.
//! 2. The CSV is parsed and aggregated once into per-(year, month) summaries.
//! 3. Both levels render from that read-only data set; each level has its
//!    own metric selector and redraws when it changes.
//!
//! A failed fetch or unreadable CSV is logged and shown as an error; no chart
//! is drawn in that case.

use dioxus::prelude::*;
use heat_chart_ui::components::{
    ChartHeader, DatasetSummary, DrilldownGrid, ErrorDisplay, LoadingSpinner, MetricSelector,
    OverviewHeatmap,
};
use heat_chart_ui::js_bridge;
use heat_chart_ui::state::{AppState, ChartLevel, LoadFailure};
use heat_data::DataSet;

/// Runtime-fetched daily temperature data (served alongside WASM).
const DATA_URL: &str = "./temperature_daily.csv";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("temperature-heatmap-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load and aggregate the dataset on mount
    use_effect(move || {
        spawn(async move {
            let csv_data = match js_bridge::fetch_text(DATA_URL).await {
                Ok(csv_data) => csv_data,
                Err(e) => {
                    log::error!("Error loading the CSV file: {}", e);
                    state.error.set(Some(LoadFailure::Fetch(e)));
                    state.loading.set(false);
                    return;
                }
            };

            match DataSet::from_csv(&csv_data) {
                Ok(data) => {
                    log::info!(
                        "Loaded {} months from {} daily records ({} skipped)",
                        data.summaries.len(),
                        data.record_count,
                        data.skipped
                    );
                    state.data.set(Some(data));
                }
                Err(e) => {
                    log::error!("Error parsing the CSV file: {:#}", e);
                    state.error.set(Some(LoadFailure::Parse(format!("{:#}", e))));
                }
            }
            state.loading.set(false);
        });
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            if let Some(failure) = (state.error)() {
                ErrorDisplay { failure }
            } else if (state.loading)() {
                LoadingSpinner { source: DATA_URL.to_string() }
            } else {
                DatasetSummary {}

                section {
                    ChartHeader {
                        title: "Monthly Temperature Overview".to_string(),
                        description: "Each cell is one month; colour shows the month's highest maximum or lowest minimum in °C. Hover a cell for details.".to_string(),
                    }
                    MetricSelector { level: ChartLevel::Overview }
                    OverviewHeatmap {}
                }

                section {
                    style: "margin-top: 24px;",
                    ChartHeader {
                        title: "Daily Temperatures, 2008-2017".to_string(),
                        description: "Lines show daily maximum (green) and minimum (blue) temperatures within each month.".to_string(),
                    }
                    MetricSelector { level: ChartLevel::Drilldown }
                    DrilldownGrid {}
                }
            }
        }
    }
}
