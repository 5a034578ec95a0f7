use runscan_types::{Checkpoints, Milestone, Observation};

use crate::segment::Run;

/// Screen region a marker is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerField {
    Achievement,
    Ninja,
}

impl MarkerField {
    fn text<'a>(&self, obs: &'a Observation) -> Option<&'a str> {
        match self {
            MarkerField::Achievement => obs.achievement.as_deref(),
            MarkerField::Ninja => obs.ninja.as_deref(),
        }
    }
}

/// How a milestone shows up in the OCR output.
#[derive(Debug, Clone, Copy)]
pub struct Marker {
    pub milestone: Milestone,
    pub field: MarkerField,
    /// Any of these substrings credits the milestone
    pub fragments: &'static [&'static str],
    /// Only searched once all of these were found
    pub requires: &'static [Milestone],
}

/// Fragments are what the recognizer reliably gets right out of the fixed
/// toast and overlay strings. They are matched verbatim and must not be
/// generalized; prerequisites precede dependents in this table.
pub const MARKERS: [Marker; 5] = [
    Marker {
        milestone: Milestone::Nether,
        field: MarkerField::Achievement,
        fragments: &["Need"],
        requires: &[],
    },
    Marker {
        milestone: Milestone::Bastion,
        field: MarkerField::Achievement,
        fragments: &["Those"],
        requires: &[],
    },
    Marker {
        milestone: Milestone::Fort,
        field: MarkerField::Achievement,
        fragments: &["Terri"],
        requires: &[],
    },
    Marker {
        milestone: Milestone::Blind,
        field: MarkerField::Ninja,
        fragments: &["Certain"],
        requires: &[Milestone::Bastion, Milestone::Fort],
    },
    Marker {
        milestone: Milestone::Stronghold,
        field: MarkerField::Achievement,
        fragments: &["ue Sp", "ye Sp"],
        requires: &[Milestone::Blind],
    },
];

impl Marker {
    fn matches(&self, obs: &Observation) -> bool {
        self.field
            .text(obs)
            .is_some_and(|text| self.fragments.iter().any(|f| text.contains(f)))
    }

    /// First observation of the run crediting this marker.
    pub fn find(&self, observations: &[Observation]) -> Option<usize> {
        observations.iter().position(|obs| self.matches(obs))
    }
}

/// Locate each milestone within one run.
///
/// A milestone whose prerequisites are missing is never credited, even when
/// its text shows up.
pub fn extract_checkpoints(run: &Run<'_>) -> Checkpoints {
    let observations = run.observations();
    let mut checkpoints = Checkpoints::default();

    for marker in &MARKERS {
        let unlocked = marker
            .requires
            .iter()
            .all(|m| checkpoints.get(*m).is_some());
        if !unlocked {
            continue;
        }

        let found = marker.find(observations);
        match marker.milestone {
            Milestone::Nether => checkpoints.nether = found,
            Milestone::Bastion => checkpoints.bastion = found,
            Milestone::Fort => checkpoints.fort = found,
            Milestone::Blind => checkpoints.blind = found,
            Milestone::Stronghold => checkpoints.stronghold = found,
        }
    }

    checkpoints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::segment_runs;

    fn obs(secs: u32, achievement: &str, ninja: &str) -> Observation {
        let text = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Observation {
            timestamp: format!("00:00:{:02}", secs % 60),
            timer: format!("{:02}.{:02}.000", secs / 60, secs % 60).parse().unwrap(),
            achievement: text(achievement),
            ninja: text(ninja),
            death: None,
        }
    }

    fn checkpoints_of(observations: &[Observation]) -> Checkpoints {
        let runs = segment_runs(observations);
        assert_eq!(runs.len(), 1);
        extract_checkpoints(&runs[0])
    }

    #[test]
    fn test_blind_gated_on_both_structures() {
        let observations = vec![
            obs(1, "", ""),
            obs(2, "We Need to Go Deeper", ""),
            obs(3, "", "Certain 80%"),
            obs(4, "Those Were the Days!", "Certain"),
        ];
        let cps = checkpoints_of(&observations);
        assert_eq!(cps.nether, Some(1));
        assert_eq!(cps.bastion, Some(3));
        assert_eq!(cps.fort, None);
        assert_eq!(cps.blind, None);
        assert_eq!(cps.stronghold, None);
    }

    #[test]
    fn test_full_progression() {
        let observations = vec![
            obs(0, "", ""),
            obs(60, "We Need to Go Deeper", ""),
            obs(61, "Those Were the Days!", ""),
            obs(62, "Terrible Fortress", ""),
            obs(63, "", "Certain: 93%"),
            obs(64, "Eye Spy", ""),
        ];
        let cps = checkpoints_of(&observations);
        assert_eq!(
            cps.iter().collect::<Vec<_>>(),
            vec![
                (Milestone::Nether, 1),
                (Milestone::Bastion, 2),
                (Milestone::Fort, 3),
                (Milestone::Blind, 4),
                (Milestone::Stronghold, 5),
            ]
        );
    }

    #[test]
    fn test_stronghold_misread_variant() {
        let observations = vec![
            obs(0, "Those", ""),
            obs(1, "Terri", ""),
            obs(2, "", "Certain"),
            obs(3, "Eue Spy", ""),
        ];
        assert_eq!(checkpoints_of(&observations).stronghold, Some(3));
    }

    #[test]
    fn test_stronghold_without_blind_is_ignored() {
        let observations = vec![obs(0, "Those", ""), obs(1, "Terri", ""), obs(2, "Eye Spy", "")];
        let cps = checkpoints_of(&observations);
        assert_eq!(cps.blind, None);
        assert_eq!(cps.stronghold, None);
    }

    #[test]
    fn test_first_match_wins_and_blind_may_precede_structures() {
        let observations = vec![
            obs(0, "", "Certain"),
            obs(1, "Those", ""),
            obs(2, "Those", ""),
            obs(3, "Terri", ""),
        ];
        let cps = checkpoints_of(&observations);
        assert_eq!(cps.bastion, Some(1));
        assert_eq!(cps.blind, Some(0));
    }
}
