mod broken_file_factory;
mod delta_file_factory;
mod top_file_factory;

pub use broken_file_factory::{corrupt_file, write_string_ts_file};
pub use delta_file_factory::{DeltaFileFactory, DeltaRow};
pub use top_file_factory::{TopFileFactory, TopRow};

use std::sync::Arc;

use parquet::basic::{Repetition, Type as PhysicalType};
use parquet::schema::types::{Type, TypePtr};

use crate::shared::time::DAY_NS;

/// Start of UTC calendar day `d`, in epoch nanoseconds.
pub fn day_ns(d: i64) -> i64 {
    d * DAY_NS
}

pub(crate) fn required_i64(name: &str) -> TypePtr {
    Arc::new(
        Type::primitive_type_builder(name, PhysicalType::INT64)
            .with_repetition(Repetition::REQUIRED)
            .build()
            .unwrap(),
    )
}
