//! Daily temperature loading and year/month aggregation.
//!
//! This crate turns the daily temperature CSV into the per-(year, month)
//! summaries that both heatmap levels render from.
//!
//! # Pipeline
//!
//! - [`loader::load_records`] parses the CSV into [`models::RawRecord`]s,
//!   skipping malformed rows
//! - [`aggregate::aggregate`] groups records by year, then month, into
//!   [`models::MonthSummary`]s
//! - [`DataSet`] bundles both steps and keeps the load counts
//!
//! # Usage
//!
//! ```rust
//! use heat_data::DataSet;
//!
//! let csv = "date,max_temperature,min_temperature\n\
//!            2010-01-01,10,2\n\
//!            2010-01-02,15,-1\n\
//!            2010-02-10,5,-5\n";
//! let data = DataSet::from_csv(csv).unwrap();
//! assert_eq!(data.summaries.len(), 2);
//! assert_eq!(data.summaries[0].max_temperature, 15.0);
//! ```

pub mod aggregate;
pub mod loader;
pub mod models;

pub use aggregate::{aggregate, distinct_years_desc, extent, SummaryIndex};
pub use models::{month_name, Metric, MonthSummary, RawRecord, MONTH_NAMES};

use serde::Serialize;

/// Aggregated dataset shared read-only by both chart levels.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataSet {
    pub summaries: Vec<MonthSummary>,
    /// Daily records that made it into the summaries.
    pub record_count: usize,
    /// Rows dropped by the loader as malformed.
    pub skipped: usize,
}

impl DataSet {
    /// Load and aggregate a daily temperature CSV in one step.
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let report = loader::load_records(csv_data)?;
        Ok(Self::from_records(&report.records, report.skipped))
    }

    pub fn from_records(records: &[RawRecord], skipped: usize) -> Self {
        Self {
            summaries: aggregate(records),
            record_count: records.len(),
            skipped,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_from_csv_counts() {
        let csv = "\
date,max_temperature,min_temperature
2010-01-01,10,2
2010-01-02,oops,-1
2010-02-10,5,-5
";
        let data = DataSet::from_csv(csv).unwrap();
        assert_eq!(data.record_count, 2);
        assert_eq!(data.skipped, 1);
        assert_eq!(data.summaries.len(), 2);
        assert!(!data.is_empty());
    }

    #[test]
    fn dataset_from_bad_header_fails() {
        assert!(DataSet::from_csv("day,high,low\n2010-01-01,1,0\n").is_err());
    }

    #[test]
    fn dataset_empty() {
        let data = DataSet::from_csv("date,max_temperature,min_temperature\n").unwrap();
        assert!(data.is_empty());
        assert_eq!(data.record_count, 0);
    }
}
