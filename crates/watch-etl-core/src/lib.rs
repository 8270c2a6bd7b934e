pub mod interval;
pub mod merge;
pub mod pipeline;
pub mod project;
pub mod writer;

pub use interval::{derive_interval, WatchInterval};
pub use merge::merge_records;
pub use pipeline::{run_pipeline, PipelineReport};
pub use project::project_records;
pub use writer::{write_csv, WriteOutcome};
