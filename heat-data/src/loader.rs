//! CSV loading for the daily temperature dataset.
//!
//! # CSV Format
//!
//! Headed CSV with at least the columns `date`, `max_temperature` and
//! `min_temperature`, one row per day. Column order does not matter and
//! extra columns are ignored.
//!
//! ```text
//! date,max_temperature,min_temperature
//! 2010-01-01,10,2
//! 2010-01-02,15,-1
//! ```
//!
//! Rows with an unparseable date or a non-numeric temperature are skipped
//! and counted; the rest of the file still loads.

use crate::models::RawRecord;
use anyhow::{anyhow, Context};
use chrono::NaiveDate;
use csv::StringRecord;

/// Date format of the `date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DATE_COLUMN: &str = "date";
const MAX_COLUMN: &str = "max_temperature";
const MIN_COLUMN: &str = "min_temperature";

/// Result of parsing a CSV: the usable records in source order plus the
/// number of rows that were dropped as malformed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub records: Vec<RawRecord>,
    pub skipped: usize,
}

/// Column positions resolved from the header row.
struct Columns {
    date: usize,
    max: usize,
    min: usize,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> anyhow::Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().trim_start_matches('\u{feff}') == name)
                .ok_or_else(|| anyhow!("CSV is missing required column '{}'", name))
        };
        Ok(Self {
            date: find(DATE_COLUMN)?,
            max: find(MAX_COLUMN)?,
            min: find(MIN_COLUMN)?,
        })
    }
}

/// Parse a `YYYY-MM-DD` date, ignoring any time component after `T` or a space.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let day = s.trim().split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(day, DATE_FORMAT).ok()
}

fn parse_temperature(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Load daily temperature records from a CSV string.
///
/// Fails only when the CSV itself is unreadable or a required column is
/// missing. Individual malformed rows are skipped with a warning.
pub fn load_records(csv_data: &str) -> anyhow::Result<LoadReport> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers = rdr.headers().context("Failed to read CSV header")?.clone();
    let columns = Columns::from_headers(&headers)?;

    let mut report = LoadReport::default();
    for (line, result) in rdr.records().enumerate() {
        let r = result.context("Failed to read CSV record")?;
        let date_str = r.get(columns.date).unwrap_or("");
        let date = parse_date(date_str);
        let max = r.get(columns.max).and_then(parse_temperature);
        let min = r.get(columns.min).and_then(parse_temperature);

        match (date, max, min) {
            (Some(date), Some(max_temperature), Some(min_temperature)) => {
                report.records.push(RawRecord {
                    date,
                    max_temperature,
                    min_temperature,
                });
            }
            _ => {
                // +2: one for the header, one for 1-based line numbers
                log::warn!(
                    "loader: skipping malformed row {} (date '{}')",
                    line + 2,
                    date_str.trim()
                );
                report.skipped += 1;
            }
        }
    }
    log::info!(
        "loader: Loaded {} daily records, skipped {} malformed",
        report.records.len(),
        report.skipped
    );
    Ok(report)
}
