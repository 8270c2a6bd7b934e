use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;
use watch_etl_config::Config;
use watch_etl_models::{ContentRecord, HistoryRecord};
use watch_etl_sources::load_shards;

use crate::merge::merge_records;
use crate::project::project_records;
use crate::writer::{write_csv, WriteOutcome};

/// Counts from one pipeline run, rendered by the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub content_records: usize,
    pub history_records: usize,
    pub merged_records: usize,
    pub output_path: PathBuf,
    pub outcome: WriteOutcome,
}

/// Run the whole reconciliation pass: load both shard families from
/// `input_dir`, join them, project to the output schema, and write the CSV.
/// A missing source family or an empty join result is an informational
/// outcome, not an error.
pub fn run_pipeline(config: &Config, input_dir: &Path) -> Result<PipelineReport> {
    let content_pattern = input_dir.join(&config.content.pattern);
    let history_pattern = input_dir.join(&config.history.pattern);

    let content: Vec<ContentRecord> =
        load_shards(&content_pattern.to_string_lossy(), &config.content.key_path)?
            .into_iter()
            .map(ContentRecord)
            .collect();
    let history: Vec<HistoryRecord> =
        load_shards(&history_pattern.to_string_lossy(), &config.history.key_path)?
            .into_iter()
            .map(HistoryRecord)
            .collect();
    info!(
        content = content.len(),
        history = history.len(),
        "loaded raw records"
    );

    let merged = merge_records(&content, &history);
    let projected = project_records(&merged);
    let outcome = write_csv(&config.output.path, &projected)?;

    match outcome {
        WriteOutcome::Written { rows } => {
            info!(rows, path = %config.output.path.display(), "wrote clean dataset")
        }
        WriteOutcome::EmptyInput => info!("no merged records, output file not written"),
    }

    Ok(PipelineReport {
        content_records: content.len(),
        history_records: history.len(),
        merged_records: merged.len(),
        output_path: config.output.path.clone(),
        outcome,
    })
}
