use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Result;
use glob::glob;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::ShardError;

/// Discover every shard file matching `pattern`, navigate each parsed
/// document through the slash-delimited `key_path`, and concatenate the
/// arrays found there.
///
/// Both source families are optional and partially trusted: zero matches
/// yields an empty vec, and a shard that fails to read, parse, or resolve
/// is skipped with a warning while the remaining shards still load. Only an
/// invalid glob pattern is a hard error.
pub fn load_shards(pattern: &str, key_path: &str) -> Result<Vec<Map<String, Value>>> {
    let mut combined = Vec::new();
    let mut matched = 0usize;

    for entry in glob(pattern)? {
        let path = match entry {
            Ok(path) => path,
            Err(err) => {
                warn!(error = %err, "skipping unreadable glob entry");
                continue;
            }
        };
        matched += 1;
        info!(path = %path.display(), "processing shard");

        match load_shard(&path, key_path) {
            Ok(records) => {
                debug!(path = %path.display(), records = records.len(), "loaded shard");
                combined.extend(records);
            }
            Err(err) => warn!(path = %path.display(), error = %err, "skipping shard"),
        }
    }

    if matched == 0 {
        info!(pattern, "no files found for pattern");
    }

    Ok(combined)
}

fn load_shard(path: &Path, key_path: &str) -> Result<Vec<Map<String, Value>>, ShardError> {
    let file = File::open(path).map_err(|source| ShardError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Value =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ShardError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let leaf = resolve_key_path(&document, key_path, path)?;
    let items = leaf.as_array().ok_or_else(|| ShardError::NotAnArray {
        path: path.to_path_buf(),
        key_path: key_path.to_string(),
    })?;

    // Non-object entries cannot participate in the join; drop them here
    // rather than letting them poison the merge.
    Ok(items
        .iter()
        .filter_map(|item| item.as_object().cloned())
        .collect())
}

fn resolve_key_path<'a>(
    document: &'a Value,
    key_path: &str,
    path: &Path,
) -> Result<&'a Value, ShardError> {
    let mut current = document;
    for segment in key_path.split('/') {
        current = current.get(segment).ok_or_else(|| ShardError::KeyPath {
            path: path.to_path_buf(),
            segment: segment.to_string(),
        })?;
    }
    Ok(current)
}
