use super::Console;
use runscan_runtime::{PipelineProgress, PipelineSummary};

pub fn render_progress(console: &Console, progress: &PipelineProgress) {
    match progress {
        PipelineProgress::DatasetScanning { dataset, dir } => {
            console.debug(format!(
                "Scanning {} for {} captures",
                dir.display(),
                dataset.name()
            ));
        }
        PipelineProgress::DatasetFound { dataset, files } => {
            console.info(format!("Found {} {} {}", files, dataset.name(), plural(*files, "capture")));
        }
        PipelineProgress::DayLoaded {
            file, observations, ..
        } => {
            console.debug(format!("{}: {} samples", file, observations));
        }
        PipelineProgress::DayProcessed {
            file,
            date,
            report,
            runs,
            ..
        } => {
            console.debug(format!(
                "{} ({}): kept {}/{} samples (invalid timer {}, jumps {}, glitches {}, regressions {}) -> {} {}",
                file,
                date,
                report.kept,
                report.input,
                report.invalid_timer,
                report.forward_jump + report.unconfirmed_jump,
                report.backward_glitch,
                report.regression,
                runs,
                plural(*runs, "run"),
            ));
            if *runs == 0 && report.input > 0 {
                console.warn(format!("{} ({}) produced no runs", file, date));
            }
        }
        PipelineProgress::DatasetWritten {
            dataset,
            path,
            days,
            runs,
        } => {
            console.info(format!(
                "Wrote {} {} from {} {} {} to {}",
                runs,
                plural(*runs, "run"),
                days,
                dataset.name(),
                plural(*days, "capture"),
                path.display()
            ));
        }
        PipelineProgress::RawPublished { file } => {
            console.debug(format!("Published raw/{}", file));
        }
        PipelineProgress::ManifestWritten { path, entries } => {
            console.debug(format!(
                "Manifest lists {} {} ({})",
                entries,
                plural(*entries, "file"),
                path.display()
            ));
        }
        PipelineProgress::Completed(summary) => {
            console.success(completion_line(summary));
        }
    }
}

fn completion_line(summary: &PipelineSummary) -> String {
    format!(
        "Processed {} {} ({} {}) and {} live {} ({} {}); manifest lists {} {}",
        summary.historical_days,
        plural(summary.historical_days, "day"),
        summary.historical_runs,
        plural(summary.historical_runs, "run"),
        summary.live_captures,
        plural(summary.live_captures, "capture"),
        summary.live_runs,
        plural(summary.live_runs, "run"),
        summary.manifest_entries,
        plural(summary.manifest_entries, "file"),
    )
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
