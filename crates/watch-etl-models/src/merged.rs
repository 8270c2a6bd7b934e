use serde_json::{Map, Value};

/// The wide record produced by joining one content record with one history
/// record: the union of both field sets after collision renaming, plus the
/// derived `start_datetime_EST` / `duration` / `end_datetime_EST` fields.
/// Produced once per matching pair and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRecord {
    fields: Map<String, Value>,
}

impl MergedRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}
