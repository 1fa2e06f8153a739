pub mod line;

pub use line::{delta_line, top_line};
