use anyhow::Result;
use runscan_engine::FilterReport;
use runscan_runtime::InspectResult;
use runscan_types::{Milestone, StrippedRun, format_mmss};
use serde::Serialize;
use std::path::Path;

pub fn print_plain(file: &Path, inspected: &InspectResult) {
    let result = &inspected.result;
    let report = &result.report;

    println!("File: {}", file.display());
    println!("Source: {}", inspected.source_id);
    println!("Date: {}", result.day.date);
    if let Some(vod) = &result.day.vod {
        println!("VOD: {}", vod);
    }
    println!(
        "Samples: {} read, {} kept, {} dropped",
        report.input,
        report.kept,
        report.dropped()
    );
    println!("Runs: {}", result.runs.len());

    if result.runs.is_empty() {
        return;
    }

    println!();
    for (i, run) in result.runs.iter().enumerate() {
        println!("{}", run_line(i + 1, run));
    }
}

fn run_line(number: usize, run: &StrippedRun) -> String {
    let start = run.timestamps.first().map(String::as_str).unwrap_or("--:--:--");
    let mut line = format!("#{:<4} {}  {}", number, start, run.run_time);

    for milestone in Milestone::ALL {
        if let Some(seconds) = run.split(milestone) {
            line.push_str(&format!("  {} {}", milestone, format_mmss(f64::from(seconds))));
        }
    }
    if let Some(death) = &run.death {
        line.push_str(&format!("  [{}]", death));
    }

    line
}

#[derive(Serialize)]
struct InspectView<'a> {
    file: String,
    source: &'static str,
    date: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    vod: Option<&'a str>,
    report: &'a FilterReport,
    runs: &'a [StrippedRun],
}

pub fn print_json(file: &Path, inspected: &InspectResult) -> Result<()> {
    let result = &inspected.result;
    let view = InspectView {
        file: file.display().to_string(),
        source: inspected.source_id,
        date: &result.day.date,
        vod: result.day.vod.as_deref(),
        report: &result.report,
        runs: &result.runs,
    };
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

#[derive(Serialize)]
struct CsvRow<'a> {
    run: usize,
    start: &'a str,
    date: &'a str,
    #[serde(rename = "runTime")]
    run_time: &'a str,
    nether: Option<u32>,
    bastion: Option<u32>,
    fort: Option<u32>,
    blind: Option<u32>,
    stronghold: Option<u32>,
    death: Option<&'a str>,
}

pub fn print_csv(runs: &[StrippedRun]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());

    for (i, run) in runs.iter().enumerate() {
        writer.serialize(CsvRow {
            run: i + 1,
            start: run.timestamps.first().map(String::as_str).unwrap_or(""),
            date: &run.date,
            run_time: &run.run_time,
            nether: run.nether,
            bastion: run.bastion,
            fort: run.fort,
            blind: run.blind,
            stronghold: run.stronghold,
            death: run.death.as_deref(),
        })?;
    }

    writer.flush()?;
    Ok(())
}
