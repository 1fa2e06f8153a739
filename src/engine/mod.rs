pub mod core;
pub mod errors;
pub mod read;
pub mod render;
pub mod schema;
pub mod shard;

pub use errors::*;
