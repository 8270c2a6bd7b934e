use std::path::PathBuf;
use thiserror::Error;

/// Failure confined to a single export shard. The loader logs these and
/// keeps going; one bad shard never aborts the run.
#[derive(Debug, Error)]
pub enum ShardError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path} as JSON")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("key path segment '{segment}' not found in {path}")]
    KeyPath { path: PathBuf, segment: String },

    #[error("key path '{key_path}' in {path} does not lead to an array")]
    NotAnArray { path: PathBuf, key_path: String },
}
