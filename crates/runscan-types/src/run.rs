use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Timer;

/// Narrative progress markers, in the order a run reaches them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Milestone {
    Nether,
    Bastion,
    Fort,
    Blind,
    Stronghold,
}

impl Milestone {
    pub const ALL: [Milestone; 5] = [
        Milestone::Nether,
        Milestone::Bastion,
        Milestone::Fort,
        Milestone::Blind,
        Milestone::Stronghold,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Milestone::Nether => "nether",
            Milestone::Bastion => "bastion",
            Milestone::Fort => "fort",
            Milestone::Blind => "blind",
            Milestone::Stronghold => "stronghold",
        }
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Positions of the first observation crediting each milestone within a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checkpoints {
    pub nether: Option<usize>,
    pub bastion: Option<usize>,
    pub fort: Option<usize>,
    pub blind: Option<usize>,
    pub stronghold: Option<usize>,
}

impl Checkpoints {
    pub fn get(&self, milestone: Milestone) -> Option<usize> {
        match milestone {
            Milestone::Nether => self.nether,
            Milestone::Bastion => self.bastion,
            Milestone::Fort => self.fort,
            Milestone::Blind => self.blind,
            Milestone::Stronghold => self.stronghold,
        }
    }

    /// Found milestones in narrative order.
    pub fn iter(&self) -> impl Iterator<Item = (Milestone, usize)> + '_ {
        Milestone::ALL
            .into_iter()
            .filter_map(|m| self.get(m).map(|i| (m, i)))
    }
}

/// Persisted summary of one attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrippedRun {
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vod: Option<String>,
    /// Timer display text of the run's final observation
    pub run_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nether: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bastion: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fort: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blind: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stronghold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death: Option<String>,
    /// One video timestamp per 5 in-game seconds
    #[serde(default)]
    pub timestamps: Vec<String>,
}

impl StrippedRun {
    pub fn split(&self, milestone: Milestone) -> Option<u32> {
        match milestone {
            Milestone::Nether => self.nether,
            Milestone::Bastion => self.bastion,
            Milestone::Fort => self.fort,
            Milestone::Blind => self.blind,
            Milestone::Stronghold => self.stronghold,
        }
    }

    pub fn set_split(&mut self, milestone: Milestone, seconds: u32) {
        let slot = match milestone {
            Milestone::Nether => &mut self.nether,
            Milestone::Bastion => &mut self.bastion,
            Milestone::Fort => &mut self.fort,
            Milestone::Blind => &mut self.blind,
            Milestone::Stronghold => &mut self.stronghold,
        };
        *slot = Some(seconds);
    }

    /// Elapsed seconds of `run_time`, if it still parses as a timer.
    pub fn run_seconds(&self) -> Option<u32> {
        Timer::parse(&self.run_time)
            .ok()
            .map(|t| t.elapsed_seconds())
    }
}
