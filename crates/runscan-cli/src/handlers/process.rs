use crate::presentation::{Console, render_progress};
use anyhow::{Context, Result};
use runscan_runtime::{Config, PipelineService};

pub fn handle(config: Config, console: &Console) -> Result<()> {
    let input = config.input_dir.clone();
    let service = PipelineService::new(config);

    service
        .run(|progress| render_progress(console, &progress))
        .with_context(|| format!("Failed to process captures in {}", input.display()))?;

    Ok(())
}
