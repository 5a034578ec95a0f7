use runscan_types::Observation;

/// One attempt: a contiguous, non-empty slice of a filtered day.
#[derive(Debug, Clone, Copy)]
pub struct Run<'a> {
    observations: &'a [Observation],
}

impl<'a> Run<'a> {
    pub fn observations(&self) -> &'a [Observation] {
        self.observations
    }

    /// The reset sample that opened this attempt.
    pub fn first(&self) -> &'a Observation {
        &self.observations[0]
    }

    /// The furthest sample reached before the next reset or the end of the day.
    pub fn last(&self) -> &'a Observation {
        &self.observations[self.observations.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

/// Split a filtered day into attempts at every timer reset.
///
/// A sample whose elapsed time is lower than its predecessor's opens a new run.
/// Runs cover the day exactly: no gaps, no overlaps, original order.
pub fn segment_runs(observations: &[Observation]) -> Vec<Run<'_>> {
    let mut runs = Vec::new();
    let mut start = 0;

    for i in 1..observations.len() {
        if observations[i].elapsed_seconds() < observations[i - 1].elapsed_seconds() {
            runs.push(Run {
                observations: &observations[start..i],
            });
            start = i;
        }
    }

    if start < observations.len() {
        runs.push(Run {
            observations: &observations[start..],
        });
    }

    runs
}
