//! Noise filtering for a day of OCR observations.
//!
//! Recognition output is unreliable: timers get misread, frames get dropped and
//! the odd sample jumps backwards. Filtering runs in four steps:
//!
//! 1. drop samples without a well-formed timer
//! 2. "deskip": drop samples whose elapsed time is inconsistent with their
//!    neighbours, sweeping until nothing more is dropped
//! 3. drop the terminal sample of the capture
//! 4. drop the colour sample from everything that is left
//!
//! The deskip thresholds were tuned by hand against real captures. They are a
//! compatibility contract with previously published data, not a signal model.

use runscan_types::{Day, Observation, RawDay, RawObservation};
use serde::Serialize;

/// Tolerance band for the deskip pass, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeskipRules {
    /// A forward jump above this is always a misread.
    pub max_jump: i64,
    /// A forward jump above this needs a follow-up reading to be believed.
    pub medium_jump: i64,
    /// The follow-up must advance by more than 0 and less than this.
    pub follow_up: i64,
    /// Regressions landing above this are not resets.
    pub reset_ceiling: i64,
}

pub const DESKIP_RULES: DeskipRules = DeskipRules {
    max_jump: 80,
    medium_jump: 20,
    follow_up: 2,
    reset_ceiling: 10,
};

/// Why a sample was discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    InvalidTimer,
    ForwardJump,
    UnconfirmedJump,
    BackwardGlitch,
    Regression,
    Terminal,
}

/// Per-day accounting of what the filter removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterReport {
    pub input: usize,
    pub kept: usize,
    pub invalid_timer: usize,
    pub forward_jump: usize,
    pub unconfirmed_jump: usize,
    pub backward_glitch: usize,
    pub regression: usize,
    pub terminal: usize,
}

impl FilterReport {
    fn record(&mut self, reason: SkipReason) {
        let slot = match reason {
            SkipReason::InvalidTimer => &mut self.invalid_timer,
            SkipReason::ForwardJump => &mut self.forward_jump,
            SkipReason::UnconfirmedJump => &mut self.unconfirmed_jump,
            SkipReason::BackwardGlitch => &mut self.backward_glitch,
            SkipReason::Regression => &mut self.regression,
            SkipReason::Terminal => &mut self.terminal,
        };
        *slot += 1;
    }

    pub fn dropped(&self) -> usize {
        self.input - self.kept
    }
}

impl DeskipRules {
    /// Decide whether `cur` is noise given the last kept reading and the next raw one.
    ///
    /// A missing `next` never confirms a jump and never marks a glitch.
    pub fn skip_reason(&self, prev: u32, cur: u32, next: Option<u32>) -> Option<SkipReason> {
        let (prev, cur) = (i64::from(prev), i64::from(cur));
        let next = next.map(i64::from);
        let jump = cur - prev;

        if jump > self.max_jump {
            return Some(SkipReason::ForwardJump);
        }

        let confirmed = next.is_some_and(|n| 0 < n - cur && n - cur < self.follow_up);
        if jump > self.medium_jump && !confirmed {
            return Some(SkipReason::UnconfirmedJump);
        }

        if cur < prev && next.is_some_and(|n| n > cur) {
            return Some(SkipReason::BackwardGlitch);
        }

        if prev > cur && cur > self.reset_ceiling {
            return Some(SkipReason::Regression);
        }

        None
    }
}

/// Keep only samples whose timer has the fixed `MM.SS.mmm` shape.
pub fn validate(raw: Vec<RawObservation>, report: &mut FilterReport) -> Vec<Observation> {
    raw.into_iter()
        .filter_map(|r| match Observation::try_from(r) {
            Ok(obs) => Some(obs),
            Err(_) => {
                report.record(SkipReason::InvalidTimer);
                None
            }
        })
        .collect()
}

/// Temporal-consistency filter.
///
/// Within a sweep, the sample after a drop is judged against the same previous
/// reading, so a run of glitches is removed one by one without skipping any.
/// A drop changes the neighbours of the samples around it, so sweeps repeat
/// until one removes nothing. The result is a fixed point: deskipping it again
/// keeps every sample.
pub fn deskip(observations: Vec<Observation>) -> Vec<Observation> {
    deskip_with(&DESKIP_RULES, observations, &mut FilterReport::default())
}

fn deskip_with(
    rules: &DeskipRules,
    mut observations: Vec<Observation>,
    report: &mut FilterReport,
) -> Vec<Observation> {
    loop {
        let before = observations.len();
        observations = deskip_sweep(rules, observations, report);
        if observations.len() == before {
            return observations;
        }
    }
}

fn deskip_sweep(
    rules: &DeskipRules,
    observations: Vec<Observation>,
    report: &mut FilterReport,
) -> Vec<Observation> {
    let mut kept = Vec::with_capacity(observations.len());
    let mut prev = 0u32;

    let mut iter = observations.into_iter().peekable();
    while let Some(obs) = iter.next() {
        let cur = obs.elapsed_seconds();
        let next = iter.peek().map(Observation::elapsed_seconds);

        match rules.skip_reason(prev, cur, next) {
            Some(reason) => report.record(reason),
            None => {
                prev = cur;
                kept.push(obs);
            }
        }
    }

    kept
}

/// Run every filtering step over one capture session.
pub fn filter_day(raw: RawDay) -> (Day, FilterReport) {
    let mut report = FilterReport {
        input: raw.data.len(),
        ..Default::default()
    };

    let valid = validate(raw.data, &mut report);
    let mut observations = deskip_with(&DESKIP_RULES, valid, &mut report);

    if observations.pop().is_some() {
        report.record(SkipReason::Terminal);
    }
    report.kept = observations.len();

    let day = Day {
        date: raw.date,
        vod: raw.vod,
        observations,
    };
    (day, report)
}
