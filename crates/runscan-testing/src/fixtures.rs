//! Synthetic captures.
//!
//! Builds observation streams the way the recorder writes them: one sample per
//! video second, with optional overlay text, misreads and dropped timers.

use runscan_types::RawObservation;
use serde_json::json;

/// Fluent builder for a capture session.
///
/// # Example
/// ```
/// use runscan_testing::CaptureBuilder;
///
/// let capture = CaptureBuilder::new()
///     .attempt(3)
///     .achievement("We Need to Go Deeper")
///     .attempt(2);
/// assert_eq!(capture.len(), 9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CaptureBuilder {
    video: u32,
    samples: Vec<RawObservation>,
}

impl CaptureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the video clock at `seconds`.
    pub fn starting_at(mut self, seconds: u32) -> Self {
        self.video = seconds;
        self
    }

    /// Sample with a well-formed timer reading `elapsed` seconds.
    pub fn tick(mut self, elapsed: u32) -> Self {
        let timer = format!("{:02}.{:02}.000", elapsed / 60, elapsed % 60);
        self.push(Some(timer));
        self
    }

    /// Sample whose timer text is exactly `text`.
    pub fn misread(mut self, text: &str) -> Self {
        self.push(Some(text.to_string()));
        self
    }

    /// Sample where no timer was recognized.
    pub fn dropout(mut self) -> Self {
        self.push(None);
        self
    }

    /// A fresh attempt: two loading-screen samples at zero, then one per second
    /// up to `seconds`.
    pub fn attempt(mut self, seconds: u32) -> Self {
        self = self.tick(0).tick(0);
        for elapsed in 1..=seconds {
            self = self.tick(elapsed);
        }
        self
    }

    /// Set the achievement text of the latest sample.
    pub fn achievement(mut self, text: &str) -> Self {
        if let Some(last) = self.samples.last_mut() {
            last.achievement = Some(text.to_string());
        }
        self
    }

    /// Set the eye-throw overlay text of the latest sample.
    pub fn ninja(mut self, text: &str) -> Self {
        if let Some(last) = self.samples.last_mut() {
            last.ninja = Some(text.to_string());
        }
        self
    }

    /// Set the death-screen text of the latest sample.
    pub fn death(mut self, text: &str) -> Self {
        if let Some(last) = self.samples.last_mut() {
            last.death = Some(text.to_string());
        }
        self
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[RawObservation] {
        &self.samples
    }

    /// Historical capture document: `{date, vod, data}`.
    pub fn historical_json(&self, date: &str, vod: &str) -> String {
        json!({
            "date": date,
            "vod": vod,
            "data": self.samples,
        })
        .to_string()
    }

    /// Live capture stream: one object per line, each followed by a comma.
    pub fn live_stream(&self) -> String {
        self.samples
            .iter()
            .map(|s| format!("{},\n", json!(s)))
            .collect()
    }

    fn push(&mut self, timer: Option<String>) {
        let video = self.video;
        self.samples.push(RawObservation {
            timestamp: format!(
                "{:02}:{:02}:{:02}",
                video / 3600,
                (video / 60) % 60,
                video % 60
            ),
            timer,
            achievement: None,
            ninja: None,
            death: None,
            heart_rgb: Some([180, 30, 30]),
        });
        self.video += 1;
    }
}
