use runscan_engine::{
    deskip, extract_checkpoints, filter_day, process_day, segment_runs, summarize_run,
};
use runscan_types::{Checkpoints, Day, Observation, RawDay};
use std::fs;
use std::path::Path;

// Helper to load a RawDay from fixture JSON
fn load_day_from_fixture(fixture_name: &str) -> RawDay {
    let path = Path::new("tests/fixtures").join(fixture_name);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to read fixture: {}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|_| panic!("Failed to parse fixture: {}", path.display()))
}

fn observation(secs: u32, timestamp: &str) -> Observation {
    Observation {
        timestamp: timestamp.to_string(),
        timer: format!("{:02}.{:02}.000", secs / 60, secs % 60)
            .parse()
            .expect("valid timer"),
        achievement: None,
        ninja: None,
        death: None,
    }
}

fn elapsed(observations: &[Observation]) -> Vec<u32> {
    observations.iter().map(Observation::elapsed_seconds).collect()
}

#[test]
fn test_deskip_drops_unconfirmed_jump() {
    let input = [1, 5, 62, 8]
        .iter()
        .map(|&s| observation(s, "00:00:00"))
        .collect();
    assert_eq!(elapsed(&deskip(input)), vec![1, 5, 8]);
}

#[test]
fn test_segmentation_at_reset() {
    let observations: Vec<_> = [1, 5, 8, 2, 6]
        .iter()
        .map(|&s| observation(s, "00:00:00"))
        .collect();
    let runs = segment_runs(&observations);

    let shapes: Vec<Vec<u32>> = runs.iter().map(|r| elapsed(r.observations())).collect();
    assert_eq!(shapes, vec![vec![1, 5, 8], vec![2, 6]]);
}

#[test]
fn test_checkpoint_gating() {
    let achievements = ["", "Need the Dragon's Breath", "", "Those Were the Days"];
    let observations: Vec<_> = achievements
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let mut obs = observation(i as u32, "00:00:00");
            obs.achievement = (!text.is_empty()).then(|| text.to_string());
            obs.ninja = Some("Certain 90%".to_string());
            obs
        })
        .collect();

    let runs = segment_runs(&observations);
    let cps = extract_checkpoints(&runs[0]);
    assert_eq!(cps.nether, Some(1));
    assert_eq!(cps.bastion, Some(3));
    assert_eq!(cps.fort, None);
    assert_eq!(cps.blind, None);
}

#[test]
fn test_death_and_timestamp_buckets() {
    let mut observations = vec![
        observation(0, "00:00:00"),
        observation(3, "00:00:03"),
        observation(6, "00:00:06"),
        observation(11, "00:00:11"),
    ];
    observations[2].death = Some(String::new());
    observations[3].death = Some("Slain by Piglin Brute LUL".to_string());

    let day = Day {
        date: "Feb 03".to_string(),
        vod: None,
        observations,
    };
    let runs = segment_runs(&day.observations);
    let summary = summarize_run(&day, &runs[0], &Checkpoints::default());

    assert_eq!(summary.death.as_deref(), Some("Slain by Piglin Brute LUL"));
    assert_eq!(summary.timestamps.len(), 3);
    assert_eq!(summary.timestamps, vec!["00:00:00", "00:00:06", "00:00:11"]);
}

#[test]
fn test_fixture_day_filter_report() {
    let (day, report) = filter_day(load_day_from_fixture("output_feb03.json"));

    assert_eq!(report.input, 18);
    assert_eq!(report.invalid_timer, 2);
    assert_eq!(report.unconfirmed_jump, 1);
    assert_eq!(report.terminal, 1);
    assert_eq!(report.kept, 14);
    assert_eq!(
        elapsed(&day.observations),
        vec![0, 0, 1, 2, 4, 5, 6, 0, 0, 1, 2, 3, 4, 9]
    );
}

#[test]
fn test_fixture_day_runs() {
    let result = process_day(load_day_from_fixture("output_feb03.json"));

    assert_eq!(result.runs.len(), 2);

    insta::assert_json_snapshot!(result.runs, @r#"
    [
      {
        "date": "Feb 03",
        "vod": "https://www.twitch.tv/videos/2691497421",
        "runTime": "00.06.000",
        "nether": 5,
        "death": "You died! LUL",
        "timestamps": [
          "01:00:01",
          "01:00:07"
        ]
      },
      {
        "date": "Feb 03",
        "vod": "https://www.twitch.tv/videos/2691497421",
        "runTime": "00.09.000",
        "bastion": 1,
        "fort": 3,
        "blind": 4,
        "timestamps": [
          "01:00:09",
          "01:00:16"
        ]
      }
    ]
    "#);
}

#[test]
fn test_day_without_valid_samples_yields_no_runs() {
    let raw: RawDay = serde_json::from_str(
        r#"{"date":"Feb 05","vod":"v","data":[{"timestamp":"00:00:01"},{"timestamp":"00:00:02","timer":"garbage"}]}"#,
    )
    .expect("valid json");

    let result = process_day(raw);
    assert!(result.day.is_empty());
    assert!(result.runs.is_empty());
}
