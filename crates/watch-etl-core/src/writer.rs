use std::path::Path;

use anyhow::{Context, Result};
use watch_etl_models::OutputRecord;

/// What the writer did with the projected records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written { rows: usize },
    /// Nothing to write; no file was created or touched.
    EmptyInput,
}

/// Serialize the projected records to `path`. A single writer instance
/// handles the header and every row, so the column order is identical across
/// the whole file. An empty input is an informational no-op.
pub fn write_csv(path: &Path, records: &[OutputRecord]) -> Result<WriteOutcome> {
    if records.is_empty() {
        return Ok(WriteOutcome::EmptyInput);
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(WriteOutcome::Written {
        rows: records.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> OutputRecord {
        OutputRecord {
            show_name: "Show A".to_string(),
            episode_name: "Episode 3".to_string(),
            season: "2".to_string(),
            episode: "3".to_string(),
            start_datetime_est: "2023-11-14 17:13:20".to_string(),
            duration_hh_mm_ss: "0:30:00".to_string(),
            end_datetime_est: "2023-11-14 17:43:20".to_string(),
            media_type: "tv".to_string(),
            start_timestamp: "1700000000000".to_string(),
            completed: "yes".to_string(),
            watch_time_seconds: "1800".to_string(),
            completed_percent: "50".to_string(),
            content_id: "7".to_string(),
            media_id: "m-1".to_string(),
            language: "en".to_string(),
        }
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw_data_clean.csv");

        let outcome = write_csv(&path, &[]).unwrap();
        assert_eq!(outcome, WriteOutcome::EmptyInput);
        assert!(!path.exists());
    }

    #[test]
    fn test_header_order_is_the_output_contract() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw_data_clean.csv");

        let outcome = write_csv(&path, &[sample_record()]).unwrap();
        assert_eq!(outcome, WriteOutcome::Written { rows: 1 });

        let contents = std::fs::read_to_string(&path).unwrap();
        let header = contents.lines().next().unwrap();
        assert_eq!(
            header,
            "show_name,episode_name,season,episode,start_datetime_EST,\
             duration_hh_mm_ss,end_datetime_EST,media_type,start_timestamp,\
             completed,watch_time_seconds,completed_percent,contentId,mediaId,language"
        );
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_one_row_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw_data_clean.csv");

        write_csv(&path, &[sample_record(), sample_record(), sample_record()]).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 4);
    }
}
