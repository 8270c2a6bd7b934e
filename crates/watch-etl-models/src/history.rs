use serde_json::{Map, Value};

use crate::coerce::coerce_i64;

/// One entry from a `watchHistory_pageNumber_*.json` export shard: a play
/// event keyed by `contentId` (number or numeric string depending on the
/// export), with the play `timestamp` in epoch milliseconds and the watched
/// length as `offset` seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRecord(pub Map<String, Value>);

impl HistoryRecord {
    /// Content identifier, coerced to the shared integer domain.
    pub fn content_id(&self) -> Option<i64> {
        self.0.get("contentId").and_then(coerce_i64)
    }

    /// Play timestamp in epoch milliseconds.
    pub fn timestamp_ms(&self) -> Option<i64> {
        self.0.get("timestamp").and_then(coerce_i64)
    }

    /// Seconds watched.
    pub fn offset_seconds(&self) -> Option<i64> {
        self.0.get("offset").and_then(coerce_i64)
    }

    /// History-side title, used only when the content side has none.
    pub fn title(&self) -> Option<&str> {
        self.0
            .get("title")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> HistoryRecord {
        HistoryRecord(value.as_object().unwrap().clone())
    }

    #[test]
    fn test_content_id_accepts_string_or_number() {
        assert_eq!(record(json!({"contentId": "42"})).content_id(), Some(42));
        assert_eq!(record(json!({"contentId": 42})).content_id(), Some(42));
    }

    #[test]
    fn test_timestamp_and_offset() {
        let r = record(json!({"timestamp": 1700000000000i64, "offset": "1800"}));
        assert_eq!(r.timestamp_ms(), Some(1700000000000));
        assert_eq!(r.offset_seconds(), Some(1800));
    }
}
