use runscan_engine::{FilterReport, process_day};
use runscan_providers::{CaptureFile, CaptureSource, create_source, scan_captures};
use runscan_types::StrippedRun;
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::ops::manifest::write_manifest;
use crate::storage::{clear_dir, copy_raw, write_json};
use crate::{Error, Result};

/// The two capture series the pipeline publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Historical,
    Live,
}

impl Dataset {
    pub fn name(&self) -> &'static str {
        match self {
            Dataset::Historical => "historical",
            Dataset::Live => "live",
        }
    }

    fn output_file<'a>(&self, config: &'a Config) -> &'a str {
        match self {
            Dataset::Historical => &config.runs_file,
            Dataset::Live => &config.live_file,
        }
    }
}

#[derive(Debug, Clone)]
pub enum PipelineProgress {
    DatasetScanning {
        dataset: Dataset,
        dir: PathBuf,
    },
    DatasetFound {
        dataset: Dataset,
        files: usize,
    },
    DayLoaded {
        dataset: Dataset,
        file: String,
        observations: usize,
    },
    DayProcessed {
        dataset: Dataset,
        file: String,
        date: String,
        report: FilterReport,
        runs: usize,
    },
    DatasetWritten {
        dataset: Dataset,
        path: PathBuf,
        days: usize,
        runs: usize,
    },
    RawPublished {
        file: String,
    },
    ManifestWritten {
        path: PathBuf,
        entries: usize,
    },
    Completed(PipelineSummary),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineSummary {
    pub historical_days: usize,
    pub historical_runs: usize,
    pub live_captures: usize,
    pub live_runs: usize,
    pub raw_files: usize,
    pub manifest_entries: usize,
}

struct DatasetOutput {
    files: Vec<CaptureFile>,
    runs: Vec<StrippedRun>,
}

pub struct PipelineService {
    config: Config,
}

impl PipelineService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Rebuild every output file from the captures in the input directory.
    ///
    /// A capture that cannot be loaded aborts the run before its dataset is
    /// written, so a published series never has silent gaps.
    pub fn run<F>(&self, mut on_progress: F) -> Result<PipelineSummary>
    where
        F: FnMut(PipelineProgress),
    {
        self.config.validate()?;
        if !self.config.input_dir.is_dir() {
            return Err(Error::InvalidOperation(format!(
                "input directory does not exist: {}",
                self.config.input_dir.display()
            )));
        }

        let output_dir = &self.config.output_dir;
        let raw_dir = output_dir.join("raw");
        if self.config.input_dir.starts_with(&raw_dir) {
            return Err(Error::InvalidOperation(format!(
                "input directory is inside the published raw directory: {}",
                self.config.input_dir.display()
            )));
        }
        fs::create_dir_all(output_dir)?;

        let mut summary = PipelineSummary::default();

        let historical = self.process_dataset(Dataset::Historical, &mut on_progress)?;
        summary.historical_days = historical.files.len();
        summary.historical_runs = historical.runs.len();
        self.write_dataset(Dataset::Historical, &historical, &mut on_progress)?;

        // Copies from earlier runs would otherwise outlive their captures.
        clear_dir(&raw_dir)?;
        if self.config.publish_raw {
            for file in &historical.files {
                copy_raw(&file.path, &raw_dir)?;
                summary.raw_files += 1;
                on_progress(PipelineProgress::RawPublished {
                    file: file.file_name(),
                });
            }
        }

        let live = self.process_dataset(Dataset::Live, &mut on_progress)?;
        summary.live_captures = live.files.len();
        summary.live_runs = live.runs.len();
        self.write_dataset(Dataset::Live, &live, &mut on_progress)?;

        let manifest_path = output_dir.join(&self.config.manifest_file);
        summary.manifest_entries = write_manifest(output_dir, &self.config.manifest_file)?;
        on_progress(PipelineProgress::ManifestWritten {
            path: manifest_path,
            entries: summary.manifest_entries,
        });

        on_progress(PipelineProgress::Completed(summary));
        Ok(summary)
    }

    fn process_dataset<F>(&self, dataset: Dataset, on_progress: &mut F) -> Result<DatasetOutput>
    where
        F: FnMut(PipelineProgress),
    {
        let source = create_source(dataset.name(), self.config.effective_year())?;

        on_progress(PipelineProgress::DatasetScanning {
            dataset,
            dir: self.config.input_dir.clone(),
        });
        let files = scan_captures(source.as_ref(), &self.config.input_dir)?;
        on_progress(PipelineProgress::DatasetFound {
            dataset,
            files: files.len(),
        });

        let mut runs = Vec::new();
        for file in &files {
            runs.extend(process_file(dataset, source.as_ref(), file, on_progress)?);
        }

        Ok(DatasetOutput { files, runs })
    }

    fn write_dataset<F>(
        &self,
        dataset: Dataset,
        output: &DatasetOutput,
        on_progress: &mut F,
    ) -> Result<()>
    where
        F: FnMut(PipelineProgress),
    {
        let path = self.config.output_dir.join(dataset.output_file(&self.config));
        write_json(&path, &output.runs)?;
        on_progress(PipelineProgress::DatasetWritten {
            dataset,
            path,
            days: output.files.len(),
            runs: output.runs.len(),
        });
        Ok(())
    }
}

fn process_file<F>(
    dataset: Dataset,
    source: &dyn CaptureSource,
    file: &CaptureFile,
    on_progress: &mut F,
) -> Result<Vec<StrippedRun>>
where
    F: FnMut(PipelineProgress),
{
    let raw = source.load(&file.path).map_err(|err| Error::Capture {
        path: file.path.clone(),
        source: err,
    })?;

    on_progress(PipelineProgress::DayLoaded {
        dataset,
        file: file.file_name(),
        observations: raw.data.len(),
    });

    let result = process_day(raw);

    on_progress(PipelineProgress::DayProcessed {
        dataset,
        file: file.file_name(),
        date: result.day.date.clone(),
        report: result.report,
        runs: result.runs.len(),
    });

    Ok(result.runs)
}
