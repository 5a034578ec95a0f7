use chrono::NaiveDate;
use regex::Regex;
use runscan_types::RawDay;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::traits::{CaptureKey, CaptureSource};
use crate::Result;

/// `output_<mon><dd>.json`, e.g. `output_feb03.json`
static HISTORICAL_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^output_([a-z]{3})(\d{2})\.json$").unwrap());

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Finished captures, one JSON document per streamed day.
///
/// File names carry month and day only, so the year comes from configuration.
pub struct HistoricalSource {
    year: i32,
}

impl HistoricalSource {
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    fn date_of(&self, file_name: &str) -> Option<NaiveDate> {
        let caps = HISTORICAL_FILE.captures(file_name)?;
        let month = MONTHS.iter().position(|m| *m == &caps[1])? as u32 + 1;
        let day: u32 = caps[2].parse().ok()?;
        NaiveDate::from_ymd_opt(self.year, month, day)
    }
}

impl CaptureSource for HistoricalSource {
    fn id(&self) -> &'static str {
        "historical"
    }

    fn probe(&self, path: &Path) -> Option<CaptureKey> {
        let name = path.file_name()?.to_str()?;
        self.date_of(name).map(CaptureKey::Date)
    }

    fn load(&self, path: &Path) -> Result<RawDay> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
