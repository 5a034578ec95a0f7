use serde::{Deserialize, Serialize};

use crate::{Observation, RawObservation};

/// One capture session as written by the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDay {
    pub date: String,
    /// Absent for live captures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vod: Option<String>,
    #[serde(default)]
    pub data: Vec<RawObservation>,
}

/// A capture session after noise filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vod: Option<String>,
    pub observations: Vec<Observation>,
}

impl Day {
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}
