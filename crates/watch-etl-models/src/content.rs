use serde_json::{Map, Value};

use crate::coerce::coerce_i64;

/// One entry from a `graphql_*.json` export shard: a content item keyed by
/// `axisId`, with the media metadata nested under `axisMedia`. The exports
/// carry more fields than the pipeline reads, so the record keeps the raw
/// object as-is and exposes typed accessors only for what the join needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRecord(pub Map<String, Value>);

impl ContentRecord {
    /// Content identifier, coerced to the shared integer domain.
    pub fn axis_id(&self) -> Option<i64> {
        self.0.get("axisId").and_then(coerce_i64)
    }

    /// The nested `axisMedia` metadata object (show title, media type, path).
    pub fn media(&self) -> Option<&Map<String, Value>> {
        self.0.get("axisMedia").and_then(Value::as_object)
    }

    /// Episode title. Empty strings count as absent so the merge falls back
    /// to the history-side title.
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

    fn record(value: Value) -> ContentRecord {
        ContentRecord(value.as_object().unwrap().clone())
    }

    #[test]
    fn test_axis_id_coercion() {
        assert_eq!(record(json!({"axisId": 7})).axis_id(), Some(7));
        assert_eq!(record(json!({"axisId": "7"})).axis_id(), Some(7));
        assert_eq!(record(json!({})).axis_id(), None);
    }

    #[test]
    fn test_empty_title_is_absent() {
        assert_eq!(record(json!({"title": ""})).title(), None);
        assert_eq!(record(json!({"title": "Ep 1"})).title(), Some("Ep 1"));
    }
}
