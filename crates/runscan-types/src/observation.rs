use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::{Error, Result};

/// Shape of the in-game timer overlay: two-digit minutes, seconds in [00,59],
/// three-digit milliseconds, dot separated.
pub static TIMER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})\.([0-5]\d)\.(\d{3})$").unwrap());

/// In-game elapsed time as read from the overlay.
///
/// Keeps the original display text so that summaries can echo it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timer {
    text: String,
    minutes: u32,
    seconds: u32,
    millis: u32,
}

impl Timer {
    pub fn parse(text: &str) -> Result<Self> {
        let caps = TIMER_PATTERN
            .captures(text)
            .ok_or_else(|| Error::InvalidTimer(text.to_string()))?;

        // The pattern guarantees ASCII digits of bounded width
        let field = |i: usize| caps[i].parse::<u32>().unwrap_or_default();

        Ok(Self {
            text: text.to_string(),
            minutes: field(1),
            seconds: field(2),
            millis: field(3),
        })
    }

    /// Whole seconds elapsed; milliseconds are ignored.
    pub fn elapsed_seconds(&self) -> u32 {
        self.minutes * 60 + self.seconds
    }

    pub fn millis(&self) -> u32 {
        self.millis
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Timer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Timer::parse(s)
    }
}

impl TryFrom<String> for Timer {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Timer::parse(&value)
    }
}

impl From<Timer> for String {
    fn from(timer: Timer) -> Self {
        timer.text
    }
}

impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// One sample exactly as the OCR extractor wrote it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawObservation {
    /// Video-relative wall clock (`HH:MM:SS`)
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ninja: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death: Option<String>,
    /// Colour sample of the health bar; only meaningful to the extractor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rgb: Option<[u8; 3]>,
}

/// A sample that survived timer validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub timestamp: String,
    pub timer: Timer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ninja: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death: Option<String>,
}

impl Observation {
    pub fn elapsed_seconds(&self) -> u32 {
        self.timer.elapsed_seconds()
    }
}

/// Validates the timer and drops the colour sample.
impl TryFrom<RawObservation> for Observation {
    type Error = Error;

    fn try_from(raw: RawObservation) -> Result<Self> {
        let timer = match raw.timer.as_deref() {
            Some(text) => Timer::parse(text)?,
            None => return Err(Error::InvalidTimer(String::new())),
        };

        Ok(Self {
            timestamp: raw.timestamp,
            timer,
            achievement: raw.achievement,
            ninja: raw.ninja,
            death: raw.death,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_parse_valid() {
        let timer = Timer::parse("12.34.567").unwrap();
        assert_eq!(timer.elapsed_seconds(), 12 * 60 + 34);
        assert_eq!(timer.millis(), 567);
        assert_eq!(timer.as_str(), "12.34.567");
    }

    #[test]
    fn test_timer_rejects_bad_shapes() {
        for text in [
            "", "1.02.003", "01.60.000", "01.02.03", "01:02.003", "01.02.0034", "ab.cd.efg",
            " 01.02.003",
        ] {
            assert!(Timer::parse(text).is_err(), "accepted {:?}", text);
        }
    }

    #[test]
    fn test_timer_serde_is_plain_string() {
        let timer: Timer = serde_json::from_str("\"00.59.999\"").unwrap();
        assert_eq!(timer.elapsed_seconds(), 59);
        assert_eq!(serde_json::to_string(&timer).unwrap(), "\"00.59.999\"");
        assert!(serde_json::from_str::<Timer>("\"00.61.000\"").is_err());
    }

    #[test]
    fn test_raw_observation_defaults() {
        let raw: RawObservation =
            serde_json::from_str(r#"{"timestamp":"00:00:01","heart_rgb":[255,0,12]}"#).unwrap();
        assert_eq!(raw.timer, None);
        assert_eq!(raw.heart_rgb, Some([255, 0, 12]));
    }

    #[test]
    fn test_observation_from_raw_strips_heart() {
        let raw = RawObservation {
            timestamp: "01:02:03".to_string(),
            timer: Some("03.04.500".to_string()),
            achievement: Some("Need".to_string()),
            ninja: None,
            death: None,
            heart_rgb: Some([1, 2, 3]),
        };
        let obs = Observation::try_from(raw).unwrap();
        assert_eq!(obs.elapsed_seconds(), 184);

        let json = serde_json::to_value(&obs).unwrap();
        assert!(json.get("heart_rgb").is_none());
        assert_eq!(json["timer"], "03.04.500");
    }

    #[test]
    fn test_observation_without_timer_is_rejected() {
        let raw = RawObservation {
            timestamp: "01:02:03".to_string(),
            timer: None,
            achievement: None,
            ninja: None,
            death: None,
            heart_rgb: None,
        };
        assert!(Observation::try_from(raw).is_err());
    }
}
