pub mod select;
pub mod variant;

pub use select::{DeltaSelect, TopSelect};
pub use variant::{SchemaVariant, col};
