use serde::Serialize;

/// The fixed 15-column projection written to the clean CSV. Field order here
/// is the column order on disk, and the serde renames pin the exact header
/// spellings the downstream event publisher looks up by name — both are part
/// of the output contract and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    pub show_name: String,
    pub episode_name: String,
    pub season: String,
    pub episode: String,
    #[serde(rename = "start_datetime_EST")]
    pub start_datetime_est: String,
    pub duration_hh_mm_ss: String,
    #[serde(rename = "end_datetime_EST")]
    pub end_datetime_est: String,
    pub media_type: String,
    pub start_timestamp: String,
    pub completed: String,
    pub watch_time_seconds: String,
    pub completed_percent: String,
    #[serde(rename = "contentId")]
    pub content_id: String,
    #[serde(rename = "mediaId")]
    pub media_id: String,
    pub language: String,
}
