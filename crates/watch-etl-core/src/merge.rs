use serde_json::{Map, Value};
use tracing::{debug, warn};
use watch_etl_models::{ContentRecord, HistoryRecord, MergedRecord};

use crate::interval::derive_interval;

/// Prefix applied to every flattened `axisMedia` field before the union, so
/// content-side media fields never collide with history-side fields.
const MEDIA_FIELD_PREFIX: &str = "axisMedia_";
const MEDIA_OBJECT_KEY: &str = "axisMedia";

/// Join the two raw sequences on their coerced content identifier.
///
/// Nested-loop join: every (content, history) pair with equal identifiers
/// produces one merged record, so a rewatch (two history rows on one content
/// id) yields two records, and duplicate content rows join against every
/// match. A history record matching nothing is silently dropped; that is
/// the defined policy for partial exports, not an error. The data volumes
/// are personal exports, so the O(n·m) scan is fine.
pub fn merge_records(content: &[ContentRecord], history: &[HistoryRecord]) -> Vec<MergedRecord> {
    let mut merged = Vec::new();

    for content_record in content {
        let Some(axis_id) = content_record.axis_id() else {
            debug!("content record has no coercible axisId, cannot join");
            continue;
        };

        for history_record in history {
            if history_record.content_id() != Some(axis_id) {
                continue;
            }
            debug!(axis_id, "joining content and history records");
            if let Some(record) = merge_pair(content_record, history_record) {
                merged.push(record);
            }
        }
    }

    merged
}

/// Build one merged record from a matching pair. The field union runs in a
/// fixed precedence order: content-record fields first, then the flattened
/// media fields under their `axisMedia_` prefix, then history-record fields
/// (later insert wins any remaining collision). The resolved title and the
/// derived interval fields are written last.
fn merge_pair(content: &ContentRecord, history: &HistoryRecord) -> Option<MergedRecord> {
    let (Some(timestamp_ms), Some(offset_seconds)) =
        (history.timestamp_ms(), history.offset_seconds())
    else {
        warn!(
            content_id = history.content_id(),
            "history record has no usable timestamp/offset, skipping pair"
        );
        return None;
    };

    let interval = match derive_interval(timestamp_ms, offset_seconds) {
        Ok(interval) => interval,
        Err(err) => {
            warn!(content_id = history.content_id(), error = %err, "skipping pair");
            return None;
        }
    };

    let mut fields: Map<String, Value> = content.fields().clone();
    fields.remove(MEDIA_OBJECT_KEY);
    if let Some(media) = content.media() {
        for (name, value) in media {
            fields.insert(format!("{MEDIA_FIELD_PREFIX}{name}"), value.clone());
        }
    }
    for (name, value) in history.fields() {
        fields.insert(name.clone(), value.clone());
    }

    // Title resolution: prefer the content-side episode title, fall back to
    // whatever the history side calls the item.
    match content.title().or_else(|| history.title()) {
        Some(title) => {
            fields.insert("title".to_string(), Value::String(title.to_string()));
        }
        None => {
            fields.remove("title");
        }
    }

    fields.insert(
        "start_datetime_EST".to_string(),
        Value::String(interval.start),
    );
    fields.insert("duration".to_string(), Value::String(interval.duration));
    fields.insert("end_datetime_EST".to_string(), Value::String(interval.end));

    Some(MergedRecord::new(fields))
}
