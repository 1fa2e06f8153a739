pub mod locator;

pub use locator::{shard_files, shard_path};
