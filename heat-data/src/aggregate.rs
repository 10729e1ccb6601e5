//! Year/month aggregation of daily temperature records.
//!
//! Records are grouped by year, then by month. Every (year, month) pair that
//! appears in the input produces exactly one [`MonthSummary`]; months without
//! records produce nothing (no zero-fill, no interpolation).

use crate::models::{Metric, MonthSummary, RawRecord};
use chrono::Datelike;
use std::collections::BTreeMap;

/// Aggregate daily records into per-(year, month) summaries.
///
/// Output is ordered ascending by `(year, month)`. Within a summary the daily
/// series keep the order in which records were encountered.
pub fn aggregate(records: &[RawRecord]) -> Vec<MonthSummary> {
    let mut groups: BTreeMap<(i32, u32), MonthSummary> = BTreeMap::new();

    for record in records {
        let key = (record.date.year(), record.date.month());
        let summary = groups.entry(key).or_insert_with(|| MonthSummary {
            year: key.0,
            month: key.1,
            max_temperature: f64::NEG_INFINITY,
            min_temperature: f64::INFINITY,
            max_temps_per_month: Vec::new(),
            min_temps_per_month: Vec::new(),
        });
        summary.max_temperature = summary.max_temperature.max(record.max_temperature);
        summary.min_temperature = summary.min_temperature.min(record.min_temperature);
        summary.max_temps_per_month.push(record.max_temperature);
        summary.min_temps_per_month.push(record.min_temperature);
    }

    let summaries: Vec<MonthSummary> = groups.into_values().collect();
    log::info!(
        "aggregate: {} daily records -> {} month summaries",
        records.len(),
        summaries.len()
    );
    summaries
}

/// Inclusive (min, max) of the metric across all summaries, `None` when empty.
pub fn extent(summaries: &[MonthSummary], metric: Metric) -> Option<(f64, f64)> {
    summaries.iter().map(|s| s.value(metric)).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Distinct years present in the summaries, newest first.
pub fn distinct_years_desc(summaries: &[MonthSummary]) -> Vec<i32> {
    let mut years: Vec<i32> = summaries.iter().map(|s| s.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// Lookup of summaries by `(year, month)`.
#[derive(Debug, Clone, Default)]
pub struct SummaryIndex<'a> {
    by_key: BTreeMap<(i32, u32), &'a MonthSummary>,
}

impl<'a> SummaryIndex<'a> {
    pub fn new(summaries: &'a [MonthSummary]) -> Self {
        Self {
            by_key: summaries.iter().map(|s| (s.key(), s)).collect(),
        }
    }

    pub fn get(&self, year: i32, month: u32) -> Option<&'a MonthSummary> {
        self.by_key.get(&(year, month)).copied()
    }
}
