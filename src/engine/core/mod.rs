pub mod cursor;
pub mod decode;
pub mod list;
pub mod view;

pub use cursor::{Entry, Int64Cursor};
pub use decode::{DeltaDecoder, TopDecoder};
pub use list::{DivergencePolicy, read_list_pairs, read_list_single};
pub use view::{DeltaBuffers, DeltaView, TopBuffers, TopView};
