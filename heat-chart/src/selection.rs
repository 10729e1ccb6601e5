//! Metric selector controller.
//!
//! A controller owns one group of mutually exclusive metric inputs. It moves
//! from `Idle` to `Listening` exactly once; re-rendering a chart never
//! registers another listener, so a change always triggers a single redraw.

use heat_data::Metric;
use serde::Serialize;

/// Radio group name for the overview selector.
pub const OVERVIEW_GROUP: &str = "temperature_l1";
/// Radio group name for the drilldown selector.
pub const DRILLDOWN_GROUP: &str = "temperature_l2";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Idle,
    Listening,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionController {
    group: &'static str,
    phase: Phase,
    selected: Metric,
}

impl SelectionController {
    pub fn new(group: &'static str) -> Self {
        Self {
            group,
            phase: Phase::Idle,
            selected: Metric::default(),
        }
    }

    pub fn group(&self) -> &'static str {
        self.group
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected(&self) -> Metric {
        self.selected
    }

    /// Register the change listener. Returns `false` if one was already
    /// registered, in which case nothing changes.
    pub fn listen(&mut self) -> bool {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Listening;
                log::debug!("selection: listening on '{}'", self.group);
                true
            }
            Phase::Listening => false,
        }
    }

    /// Number of registered change listeners, never more than one.
    pub fn listener_count(&self) -> usize {
        match self.phase {
            Phase::Idle => 0,
            Phase::Listening => 1,
        }
    }

    /// Handle a change event carrying the input's `value`.
    ///
    /// Returns the metric to re-render with, or `None` when there is nothing
    /// to do (not listening, same metric, unknown value).
    pub fn on_change(&mut self, value: &str) -> Option<Metric> {
        if self.phase != Phase::Listening {
            log::debug!("selection: '{}' ignored change before listening", self.group);
            return None;
        }
        let metric = match value.parse::<Metric>() {
            Ok(metric) => metric,
            Err(e) => {
                log::warn!("selection: '{}': {}", self.group, e);
                return None;
            }
        };
        if metric == self.selected {
            return None;
        }
        log::debug!("selection: '{}' -> {}", self.group, metric);
        self.selected = metric;
        Some(metric)
    }
}
