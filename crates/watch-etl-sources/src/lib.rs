pub mod error;
pub mod shards;

pub use error::ShardError;
pub use shards::load_shards;
