//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use heat_chart::selection::{SelectionController, DRILLDOWN_GROUP, OVERVIEW_GROUP};
use heat_data::DataSet;
use std::fmt;

/// Why the dataset could not be shown. Either case aborts rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    /// The CSV could not be fetched (network error or non-2xx status).
    Fetch(String),
    /// The CSV was fetched but is unreadable or lacks a required column.
    Parse(String),
}

impl LoadFailure {
    pub fn title(&self) -> &'static str {
        match self {
            LoadFailure::Fetch(_) => "Failed to fetch temperature data",
            LoadFailure::Parse(_) => "Failed to read temperature data",
        }
    }

    /// What the operator can check next.
    pub fn hint(&self) -> &'static str {
        match self {
            LoadFailure::Fetch(_) => "Check that temperature_daily.csv is served next to the app.",
            LoadFailure::Parse(_) => {
                "The CSV needs date, max_temperature and min_temperature columns."
            }
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            LoadFailure::Fetch(d) | LoadFailure::Parse(d) => d,
        }
    }
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.detail())
    }
}

/// Which of the two heatmaps a control belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartLevel {
    Overview,
    Drilldown,
}

/// Shared application state for the heatmap app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Aggregated data (None until loaded)
    pub data: Signal<Option<DataSet>>,
    /// Whether the CSV is still loading
    pub loading: Signal<bool>,
    /// Set when loading failed
    pub error: Signal<Option<LoadFailure>>,
    /// Metric selector for the overview (level 1)
    pub overview: Signal<SelectionController>,
    /// Metric selector for the drilldown (level 2)
    pub drilldown: Signal<SelectionController>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            data: Signal::new(None),
            loading: Signal::new(true),
            error: Signal::new(None),
            overview: Signal::new(SelectionController::new(OVERVIEW_GROUP)),
            drilldown: Signal::new(SelectionController::new(DRILLDOWN_GROUP)),
        }
    }

    /// The selector controller driving the given level.
    pub fn selection(&self, level: ChartLevel) -> Signal<SelectionController> {
        match level {
            ChartLevel::Overview => self.overview,
            ChartLevel::Drilldown => self.drilldown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_failure_messages() {
        let fetch = LoadFailure::Fetch("HTTP 404 Not Found".to_string());
        assert_eq!(fetch.to_string(), "Failed to fetch temperature data: HTTP 404 Not Found");
        assert!(fetch.hint().contains("temperature_daily.csv"));

        let parse = LoadFailure::Parse("missing column 'date'".to_string());
        assert_eq!(parse.title(), "Failed to read temperature data");
        assert_eq!(parse.detail(), "missing column 'date'");
        assert_ne!(fetch.hint(), parse.hint());
    }
}
