pub mod config;

pub use config::{Config, OutputConfig, ShardSource};
