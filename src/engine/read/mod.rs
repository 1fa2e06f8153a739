pub mod reader;
pub mod store;

pub use reader::{DeltaBatchReader, TopBatchReader};
pub use store::TickStore;
