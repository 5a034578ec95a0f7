use regex::Regex;
use runscan_types::{RawDay, RawObservation};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::traits::{CaptureKey, CaptureSource};
use crate::{Error, Result};

/// `output_<digits>.json`, e.g. `output_1738540800.json`
static LIVE_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^output_(\d+)\.json$").unwrap());

/// In-progress captures.
///
/// The recorder appends one observation object per line, each followed by a
/// comma, and never closes the array. The last line may be cut mid-write.
pub struct LiveSource;

impl LiveSource {
    fn token_of(file_name: &str) -> Option<u64> {
        let caps = LIVE_FILE.captures(file_name)?;
        caps[1].parse().ok()
    }
}

impl CaptureSource for LiveSource {
    fn id(&self) -> &'static str {
        "live"
    }

    fn probe(&self, path: &Path) -> Option<CaptureKey> {
        let name = path.file_name()?.to_str()?;
        Self::token_of(name).map(CaptureKey::Token)
    }

    fn load(&self, path: &Path) -> Result<RawDay> {
        let token = match self.probe(path) {
            Some(CaptureKey::Token(token)) => token,
            _ => {
                return Err(Error::Parse(format!(
                    "not a live capture: {}",
                    path.display()
                )));
            }
        };

        let text = fs::read_to_string(path)?;
        let data = parse_live_stream(&text)
            .map_err(|e| Error::Parse(format!("{}: {}", path.display(), e)))?;

        Ok(RawDay {
            date: token.to_string(),
            vod: None,
            data,
        })
    }
}

/// Parse a comma-terminated observation stream.
///
/// Retries once without the last line, which the recorder may still be writing.
pub fn parse_live_stream(text: &str) -> Result<Vec<RawObservation>> {
    match parse_wrapped(text) {
        Ok(data) => Ok(data),
        Err(first) => {
            let trimmed = text.trim_end();
            let Some(cut) = trimmed.rfind('\n') else {
                return Err(first);
            };
            parse_wrapped(&trimmed[..cut])
        }
    }
}

fn parse_wrapped(text: &str) -> Result<Vec<RawObservation>> {
    let body = text.trim();
    let body = body.strip_suffix(',').unwrap_or(body);
    Ok(serde_json::from_str(&format!("[{}]", body))?)
}
