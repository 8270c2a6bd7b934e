use serde_json::Value;
use watch_etl_models::{MergedRecord, OutputRecord};

/// Narrow each merged record to the fixed 15-column output schema.
pub fn project_records(records: &[MergedRecord]) -> Vec<OutputRecord> {
    records.iter().map(project_record).collect()
}

fn project_record(record: &MergedRecord) -> OutputRecord {
    OutputRecord {
        show_name: text(record.get("axisMedia_title")),
        episode_name: text(record.get("title")),
        season: text(record.get("seasonNumber")),
        episode: text(record.get("episodeNumber")),
        start_datetime_est: text(record.get("start_datetime_EST")),
        duration_hh_mm_ss: text(record.get("duration")),
        end_datetime_est: text(record.get("end_datetime_EST")),
        media_type: text(record.get("axisMedia_mediaType")).to_lowercase(),
        start_timestamp: text(record.get("timestamp")),
        completed: if truthy(record.get("completed")) { "yes" } else { "no" }.to_string(),
        watch_time_seconds: text(record.get("offset")),
        completed_percent: text(record.get("progression")),
        content_id: text(record.get("contentId")),
        media_id: text(record.get("mediaId")),
        language: text(record.get("language")),
    }
}

/// Render a JSON scalar the way it appears in the export: strings verbatim,
/// numbers in display form, null/missing as an empty cell.
fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value};

    fn merged(value: Value) -> MergedRecord {
        let fields: Map<String, Value> = value.as_object().unwrap().clone();
        MergedRecord::new(fields)
    }

    #[test]
    fn test_full_projection() {
        let record = merged(json!({
            "axisMedia_title": "Show A",
            "title": "Episode 3",
            "seasonNumber": 2,
            "episodeNumber": 3,
            "start_datetime_EST": "2023-11-14 17:13:20",
            "duration": "0:30:00",
            "end_datetime_EST": "2023-11-14 17:43:20",
            "axisMedia_mediaType": "TV",
            "timestamp": 1_700_000_000_000i64,
            "completed": true,
            "offset": 1800,
            "progression": 50,
            "contentId": "7",
            "mediaId": "m-1",
            "language": "en",
        }));

        let output = project_record(&record);
        assert_eq!(output.show_name, "Show A");
        assert_eq!(output.episode_name, "Episode 3");
        assert_eq!(output.season, "2");
        assert_eq!(output.episode, "3");
        assert_eq!(output.media_type, "tv");
        assert_eq!(output.start_timestamp, "1700000000000");
        assert_eq!(output.completed, "yes");
        assert_eq!(output.watch_time_seconds, "1800");
        assert_eq!(output.completed_percent, "50");
        assert_eq!(output.content_id, "7");
        assert_eq!(output.media_id, "m-1");
        assert_eq!(output.language, "en");
    }

    #[test]
    fn test_missing_fields_become_empty_cells() {
        let output = project_record(&merged(json!({})));
        assert_eq!(output.show_name, "");
        assert_eq!(output.season, "");
        assert_eq!(output.media_type, "");
        assert_eq!(output.language, "");
        // completed is never absent.
        assert_eq!(output.completed, "no");
    }

    #[test]
    fn test_completed_truthiness() {
        assert_eq!(project_record(&merged(json!({"completed": true}))).completed, "yes");
        assert_eq!(project_record(&merged(json!({"completed": false}))).completed, "no");
        assert_eq!(project_record(&merged(json!({"completed": 1}))).completed, "yes");
        assert_eq!(project_record(&merged(json!({"completed": 0}))).completed, "no");
        assert_eq!(project_record(&merged(json!({"completed": ""}))).completed, "no");
        assert_eq!(project_record(&merged(json!({"completed": null}))).completed, "no");
    }

    #[test]
    fn test_media_type_is_lowercased() {
        let output = project_record(&merged(json!({"axisMedia_mediaType": "Movie"})));
        assert_eq!(output.media_type, "movie");
    }
}
