use runscan_types::{Checkpoints, Day, Observation, StrippedRun};

use crate::segment::Run;

/// Death-screen fragment that marks a real death rather than a transient misread.
pub const DEATH_MARKER: &str = "LUL";

/// Width of one scrub bucket in in-game seconds.
pub const TIMESTAMP_BUCKET_SECONDS: i64 = 5;

/// Project a run and its checkpoints into the persisted summary.
pub fn summarize_run(day: &Day, run: &Run<'_>, checkpoints: &Checkpoints) -> StrippedRun {
    let observations = run.observations();

    let mut summary = StrippedRun {
        date: day.date.clone(),
        vod: day.vod.clone(),
        run_time: run.last().timer.as_str().to_string(),
        nether: None,
        bastion: None,
        fort: None,
        blind: None,
        stronghold: None,
        death: find_death(observations),
        timestamps: bucket_timestamps(observations),
    };

    for (milestone, index) in checkpoints.iter() {
        summary.set_split(milestone, observations[index].elapsed_seconds());
    }

    summary
}

/// Latest death-screen text that carries the death marker.
fn find_death(observations: &[Observation]) -> Option<String> {
    observations
        .iter()
        .rev()
        .filter_map(|obs| obs.death.as_deref())
        .find(|text| text.contains(DEATH_MARKER))
        .map(str::to_string)
}

/// One video timestamp per elapsed bucket, for scrubbing the VOD alongside the run.
///
/// A sample that lands several buckets past the watermark fills all of them.
fn bucket_timestamps(observations: &[Observation]) -> Vec<String> {
    let mut timestamps = Vec::new();
    let mut watermark = -TIMESTAMP_BUCKET_SECONDS;

    for obs in observations {
        let elapsed = i64::from(obs.elapsed_seconds());
        while elapsed - watermark >= TIMESTAMP_BUCKET_SECONDS {
            timestamps.push(obs.timestamp.clone());
            watermark += TIMESTAMP_BUCKET_SECONDS;
        }
    }

    timestamps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::segment_runs;

    fn obs(secs: u32, timestamp: &str, death: Option<&str>) -> Observation {
        Observation {
            timestamp: timestamp.to_string(),
            timer: format!("{:02}.{:02}.250", secs / 60, secs % 60).parse().unwrap(),
            achievement: None,
            ninja: None,
            death: death.map(str::to_string),
        }
    }

    fn day(observations: Vec<Observation>) -> Day {
        Day {
            date: "Feb 03".to_string(),
            vod: Some("https://www.twitch.tv/videos/1".to_string()),
            observations,
        }
    }

    #[test]
    fn test_death_and_timestamps() {
        let day = day(vec![
            obs(0, "00:00:00", None),
            obs(3, "00:00:03", None),
            obs(6, "00:00:06", Some("")),
            obs(11, "00:00:11", Some("You Died! LUL")),
        ]);
        let runs = segment_runs(&day.observations);
        let summary = summarize_run(&day, &runs[0], &Checkpoints::default());

        assert_eq!(summary.death.as_deref(), Some("You Died! LUL"));
        assert_eq!(summary.timestamps, vec!["00:00:00", "00:00:06", "00:00:11"]);
        assert_eq!(summary.run_time, "00.11.250");
        assert_eq!(summary.nether, None);
    }

    #[test]
    fn test_death_without_marker_is_not_credited() {
        let day = day(vec![obs(0, "00:00:00", Some("You Died!")), obs(1, "00:00:01", None)]);
        let runs = segment_runs(&day.observations);
        assert_eq!(summarize_run(&day, &runs[0], &Checkpoints::default()).death, None);
    }

    #[test]
    fn test_latest_death_wins() {
        let day = day(vec![
            obs(0, "00:00:00", Some("first LUL")),
            obs(1, "00:00:01", Some("second LUL")),
            obs(2, "00:00:02", Some("misread")),
        ]);
        let runs = segment_runs(&day.observations);
        let summary = summarize_run(&day, &runs[0], &Checkpoints::default());
        assert_eq!(summary.death.as_deref(), Some("second LUL"));
    }

    #[test]
    fn test_jump_fills_several_buckets() {
        let day = day(vec![obs(2, "a", None), obs(14, "b", None), obs(15, "c", None)]);
        let runs = segment_runs(&day.observations);
        let summary = summarize_run(&day, &runs[0], &Checkpoints::default());
        // buckets 0, 5, 10 and 15
        assert_eq!(summary.timestamps, vec!["a", "b", "b", "c"]);
    }

    #[test]
    fn test_splits_use_elapsed_seconds_of_index() {
        let day = day(vec![
            obs(0, "00:00:00", None),
            obs(75, "00:01:15", None),
            obs(130, "00:02:10", None),
        ]);
        let runs = segment_runs(&day.observations);
        let checkpoints = Checkpoints {
            nether: Some(1),
            fort: Some(2),
            ..Default::default()
        };
        let summary = summarize_run(&day, &runs[0], &checkpoints);
        assert_eq!(summary.nether, Some(75));
        assert_eq!(summary.fort, Some(130));
        assert_eq!(summary.bastion, None);
        assert_eq!(summary.vod.as_deref(), Some("https://www.twitch.tv/videos/1"));
    }
}
