//! Record and summary model structs for daily temperature data.
//!
//! All structs derive `Serialize` so aggregated data can be exported as JSON
//! alongside the rendered charts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Short month names, indexed by `month - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Short name for a 1-based month, or `"?"` outside 1..=12.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("?")
}

/// One row of the daily temperature CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub date: NaiveDate,
    /// Daily maximum in °C.
    pub max_temperature: f64,
    /// Daily minimum in °C.
    pub min_temperature: f64,
}

/// Aggregated statistics for one (year, month) pair.
///
/// Built once by [`crate::aggregate::aggregate`] and never mutated afterwards.
/// The per-day series keep the order in which days appeared in the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Highest daily maximum in the month.
    pub max_temperature: f64,
    /// Lowest daily minimum in the month.
    pub min_temperature: f64,
    #[serde(rename = "maxTempsPerMonth")]
    pub max_temps_per_month: Vec<f64>,
    #[serde(rename = "minTempsPerMonth")]
    pub min_temps_per_month: Vec<f64>,
}

impl MonthSummary {
    pub fn key(&self) -> (i32, u32) {
        (self.year, self.month)
    }

    /// Label such as `"Jan-2010"`.
    pub fn label(&self) -> String {
        format!("{}-{}", month_name(self.month), self.year)
    }

    /// The aggregate value the given metric colours by.
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::MaxTemperature => self.max_temperature,
            Metric::MinTemperature => self.min_temperature,
        }
    }

    /// Number of daily records that contributed to this month.
    pub fn day_count(&self) -> usize {
        self.max_temps_per_month.len()
    }
}

/// Which temperature extreme a chart is coloured by.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[default]
    MaxTemperature,
    MinTemperature,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::MaxTemperature, Metric::MinTemperature];

    /// Value carried by the selector controls and the CSV column name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::MaxTemperature => "max_temperature",
            Metric::MinTemperature => "min_temperature",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::MaxTemperature => "Max Temperature",
            Metric::MinTemperature => "Min Temperature",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricParseError(pub String);

impl fmt::Display for MetricParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown temperature metric: {}", self.0)
    }
}

impl std::error::Error for MetricParseError {}

impl FromStr for Metric {
    type Err = MetricParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "max_temperature" => Ok(Metric::MaxTemperature),
            "min_temperature" => Ok(Metric::MinTemperature),
            other => Err(MetricParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> MonthSummary {
        MonthSummary {
            year: 2010,
            month: 1,
            max_temperature: 15.0,
            min_temperature: -1.0,
            max_temps_per_month: vec![10.0, 15.0],
            min_temps_per_month: vec![2.0, -1.0],
        }
    }

    #[test]
    fn month_names_are_one_based() {
        assert_eq!(month_name(1), "Jan");
        assert_eq!(month_name(12), "Dec");
        assert_eq!(month_name(0), "?");
        assert_eq!(month_name(13), "?");
    }

    #[test]
    fn summary_label_and_value() {
        let s = summary();
        assert_eq!(s.label(), "Jan-2010");
        assert_eq!(s.value(Metric::MaxTemperature), 15.0);
        assert_eq!(s.value(Metric::MinTemperature), -1.0);
        assert_eq!(s.day_count(), 2);
    }

    #[test]
    fn metric_parses_control_values() {
        assert_eq!("max_temperature".parse::<Metric>(), Ok(Metric::MaxTemperature));
        assert_eq!(" min_temperature ".parse::<Metric>(), Ok(Metric::MinTemperature));
        assert!("avg_temperature".parse::<Metric>().is_err());
        assert_eq!(Metric::default(), Metric::MaxTemperature);
        assert_eq!(Metric::MinTemperature.to_string(), "min_temperature");
    }

    #[test]
    fn summary_serializes_series_in_camel_case() {
        let json = serde_json::to_value(summary()).unwrap();
        assert_eq!(json["maxTempsPerMonth"], serde_json::json!([10.0, 15.0]));
        assert_eq!(json["minTempsPerMonth"], serde_json::json!([2.0, -1.0]));
        assert_eq!(json["max_temperature"], serde_json::json!(15.0));
    }
}
