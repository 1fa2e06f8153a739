pub mod delta;
pub mod top;

pub use delta::DeltaDecoder;
pub use top::TopDecoder;


use parquet::file::reader::RowGroupReader;
use parquet::schema::types::SchemaDescriptor;

use crate::engine::core::cursor::{Entry, Int64Cursor};
use crate::engine::errors::DecodeError;

pub(crate) fn find_column(schema: &SchemaDescriptor, name: &str) -> Option<usize> {
    schema
        .columns()
        .iter()
        .position(|c| c.path().string() == name)
}

pub(crate) fn leaf_cursor(
    rg: &dyn RowGroupReader,
    schema: &SchemaDescriptor,
    name: &str,
) -> Result<Int64Cursor, DecodeError> {
    let idx =
        find_column(schema, name).ok_or_else(|| DecodeError::MissingColumn(name.to_string()))?;
    let reader = rg.get_column_reader(idx)?;
    let descr = schema.column(idx);
    Ok(Int64Cursor::new(reader, descr.as_ref())?)
}

pub(crate) fn maybe_cursor(
    rg: &dyn RowGroupReader,
    schema: &SchemaDescriptor,
    wanted: bool,
    name: &str,
) -> Result<Option<Int64Cursor>, DecodeError> {
    if wanted {
        Ok(Some(leaf_cursor(rg, schema, name)?))
    } else {
        Ok(None)
    }
}

pub(crate) fn take_required(cursor: &mut Int64Cursor) -> Result<Entry, DecodeError> {
    let entry = cursor.take()?;
    entry.ok_or_else(|| DecodeError::Truncated(cursor.column().to_string()))
}

/// Advance an optional scalar cursor by one row, returning its value
/// (0 for nulls and unselected columns).
pub(crate) fn take_opt(cursor: &mut Option<Int64Cursor>) -> Result<i64, DecodeError> {
    match cursor.as_mut() {
        Some(c) => Ok(take_required(c)?.value),
        None => Ok(0),
    }
}
