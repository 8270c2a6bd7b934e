use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Pipeline configuration. Every field defaults to the layout the streaming
/// service's export tooling produces, so a config file is only needed when
/// the shard naming or document shape differs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// First source family: content metadata shards.
    #[serde(default = "default_content_source")]
    pub content: ShardSource,
    /// Second source family: watch-history shards.
    #[serde(default = "default_history_source")]
    pub history: ShardSource,
    #[serde(default)]
    pub output: OutputConfig,
}

/// One shard family: which files to pick up and where the record array
/// lives inside each parsed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShardSource {
    pub pattern: String,
    /// Slash-delimited key path to the array of records.
    pub key_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

fn default_content_source() -> ShardSource {
    ShardSource {
        pattern: "graphql_*.json".to_string(),
        key_path: "data/contentData/items".to_string(),
    }
}

fn default_history_source() -> ShardSource {
    ShardSource {
        pattern: "watchHistory_pageNumber_*.json".to_string(),
        key_path: "content".to_string(),
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("raw_data_clean.csv")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content: default_content_source(),
            history: default_history_source(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl Config {
    /// Load configuration from an explicit TOML file, or fall back to the
    /// defaults when no path is given. An explicit path that cannot be read
    /// or parsed is a hard error: silently running with defaults against the
    /// wrong shard layout would just produce an empty output.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config file {}", path.display()))?;
                toml::from_str(&raw)
                    .with_context(|| format!("failed to parse config file {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }
}
