mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use runscan_testing::{CaptureBuilder, TestWorld, assertions};
use runscan_types::StrippedRun;

fn world() -> TestWorld {
    TestWorld::new()
        .with_historical("output_feb10.json", "Feb 10", &CaptureBuilder::new().attempt(12))
        .with_historical("output_feb03.json", "Feb 03", &common::two_attempts())
        .with_live(7, &CaptureBuilder::new().attempt(3))
}

#[test]
fn test_process_publishes_runs_live_raw_and_manifest() {
    let world = world();

    let mut cmd = cargo_bin_cmd!("runscan");
    world
        .configure_command(&mut cmd)
        .args(world.process_args())
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Processed 2 days (3 runs) and 1 live capture (1 run); manifest lists 4 files",
        ));

    let runs = world.read_output_json("runs.json").unwrap();
    assertions::assert_run_count(&runs, 3).unwrap();
    assertions::assert_run_dates(&runs, &["Feb 03", "Feb 03", "Feb 10"]).unwrap();
    assertions::assert_split(&runs, 1, "nether", 2).unwrap();
    assertions::assert_split(&runs, 1, "bastion", 3).unwrap();
    assertions::assert_split(&runs, 1, "fort", 4).unwrap();
    assertions::assert_split(&runs, 1, "blind", 5).unwrap();

    let first: StrippedRun = serde_json::from_value(runs[0].clone()).unwrap();
    insta::assert_json_snapshot!(first, @r#"
    {
      "date": "Feb 03",
      "vod": "https://www.twitch.tv/videos/feb03",
      "runTime": "00.05.000",
      "death": "You Died! LUL",
      "timestamps": [
        "00:00:00",
        "00:00:06"
      ]
    }
    "#);
    assert_eq!(runs[2]["runTime"], "00.11.000");

    let live = world.read_output_json("live.json").unwrap();
    assertions::assert_run_count(&live, 1).unwrap();
    assert_eq!(live[0]["date"], "7");
    assert!(live[0].get("vod").is_none());

    let manifest = world.read_output_json("manifest.json").unwrap();
    assertions::assert_manifest_matches(&manifest, world.output_dir()).unwrap();
    let paths: Vec<&str> = manifest
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["path"].as_str().unwrap())
        .collect();
    assert_eq!(
        paths,
        vec![
            "live.json",
            "raw/output_feb03.json",
            "raw/output_feb10.json",
            "runs.json"
        ]
    );
}

#[test]
fn test_process_no_raw() {
    let world = world();

    let mut cmd = cargo_bin_cmd!("runscan");
    world
        .configure_command(&mut cmd)
        .args(world.process_args())
        .arg("--no-raw")
        .assert()
        .success();

    assert!(!world.output_dir().join("raw").exists());
    let manifest = world.read_output_json("manifest.json").unwrap();
    assert_eq!(manifest.as_array().unwrap().len(), 2);
}

#[test]
fn test_debug_log_level_reports_each_day() {
    let world = world();

    let mut cmd = cargo_bin_cmd!("runscan");
    world
        .configure_command(&mut cmd)
        .args(["--log-level", "debug"])
        .args(world.process_args())
        .assert()
        .success()
        .stderr(predicate::str::contains("output_feb03.json (Feb 03): kept"))
        .stderr(predicate::str::contains("output_7.json (7): kept"));
}

#[test]
fn test_error_log_level_is_quiet() {
    let world = world();

    let mut cmd = cargo_bin_cmd!("runscan");
    world
        .configure_command(&mut cmd)
        .args(["--log-level", "error"])
        .args(world.process_args())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_process_uses_config_file() {
    let world = world();
    let config = format!(
        "input_dir = {:?}\noutput_dir = {:?}\nyear = 2025\npublish_raw = false\nruns_file = \"history.json\"\n",
        world.input_dir().display().to_string(),
        world.output_dir().display().to_string(),
    );
    std::fs::write(world.data_dir().join("config.toml"), config).unwrap();

    let result = world.run(&["process"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let runs = world.read_output_json("history.json").unwrap();
    assertions::assert_run_count(&runs, 3).unwrap();
    assert!(!world.output_dir().join("runs.json").exists());
}

#[test]
fn test_malformed_capture_fails_the_run() {
    let world = world();
    world.write_input("output_feb05.json", "{\"date\": ").unwrap();

    let mut cmd = cargo_bin_cmd!("runscan");
    world
        .configure_command(&mut cmd)
        .args(world.process_args())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("output_feb05.json"));

    assert!(!world.output_dir().join("runs.json").exists());
}

#[test]
fn test_missing_input_directory() {
    let world = TestWorld::new();

    let result = world.run(&["process", "--input", "does-not-exist"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("input directory does not exist"));
}
