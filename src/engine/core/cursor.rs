use parquet::column::reader::{ColumnReader, ColumnReaderImpl};
use parquet::data_type::Int64Type;
use parquet::schema::types::ColumnDescriptor;

use crate::engine::errors::CursorError;

/// Number of records pulled per physical read.
const BATCH: usize = 65_536;

/// One decoded slot of a leaf column's level stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct Entry {
    /// Definition (presence) level; equals the column's max when a value is
    /// present.
    pub def: i16,
    /// Repetition (nesting) level; 0 starts a new logical row.
    pub rep: i16,
    pub present: bool,
    /// Decoded value; 0 when `present` is false.
    pub value: i64,
}

/// Pull-based peek/take cursor over one INT64 leaf column of a block.
///
/// Levels and values are read in large batches and handed out one slot at a
/// time; exhaustion is the ordinary end-of-column signal (`Ok(None)`), not
/// an error.
pub struct Int64Cursor {
    reader: ColumnReaderImpl<Int64Type>,
    column: String,
    max_def: i16,
    max_rep: i16,
    eof: bool,
    pending: Option<Entry>,
    def_buf: Vec<i16>,
    rep_buf: Vec<i16>,
    val_buf: Vec<i64>,
    levels_in_buf: usize,
    level_idx: usize,
    value_idx: usize,
}

impl Int64Cursor {
    /// Fails fast when the column's physical encoding is not INT64; that is
    /// a misconfiguration, not a data error.
    pub fn new(reader: ColumnReader, descr: &ColumnDescriptor) -> Result<Self, CursorError> {
        let column = descr.path().string();
        let reader = match reader {
            ColumnReader::Int64ColumnReader(r) => r,
            _ => return Err(CursorError::NotInt64(column)),
        };

        Ok(Self {
            reader,
            column,
            max_def: descr.max_def_level(),
            max_rep: descr.max_rep_level(),
            eof: false,
            pending: None,
            def_buf: Vec::new(),
            rep_buf: Vec::new(),
            val_buf: Vec::new(),
            levels_in_buf: 0,
            level_idx: 0,
            value_idx: 0,
        })
    }

    /// Consume and return the next slot, or `None` at end of column.
    pub fn take(&mut self) -> Result<Option<Entry>, CursorError> {
        if !self.ensure_pending()? {
            return Ok(None);
        }
        Ok(self.pending.take())
    }

    /// Look at the next slot without consuming it.
    pub fn peek(&mut self) -> Result<Option<&Entry>, CursorError> {
        if !self.ensure_pending()? {
            return Ok(None);
        }
        Ok(self.pending.as_ref())
    }

    /// Dotted path of the leaf column, for diagnostics.
    pub fn column(&self) -> &str {
        &self.column
    }

    fn refill(&mut self) -> Result<bool, CursorError> {
        if self.eof {
            return Ok(false);
        }

        self.def_buf.clear();
        self.rep_buf.clear();
        self.val_buf.clear();

        let (_, _, levels) = self.reader.read_records(
            BATCH,
            (self.max_def > 0).then_some(&mut self.def_buf),
            (self.max_rep > 0).then_some(&mut self.rep_buf),
            &mut self.val_buf,
        )?;

        if levels == 0 {
            self.eof = true;
            return Ok(false);
        }

        self.levels_in_buf = levels;
        self.level_idx = 0;
        self.value_idx = 0;
        Ok(true)
    }

    fn ensure_pending(&mut self) -> Result<bool, CursorError> {
        if self.pending.is_some() {
            return Ok(true);
        }
        if self.level_idx >= self.levels_in_buf && !self.refill()? {
            return Ok(false);
        }

        let def = if self.max_def > 0 {
            self.def_buf[self.level_idx]
        } else {
            0
        };
        let rep = if self.max_rep > 0 {
            self.rep_buf[self.level_idx]
        } else {
            0
        };

        let mut entry = Entry {
            def,
            rep,
            present: false,
            value: 0,
        };
        if def == self.max_def {
            if self.value_idx >= self.val_buf.len() {
                return Err(CursorError::ValueUnderflow(self.column.clone()));
            }
            entry.present = true;
            entry.value = self.val_buf[self.value_idx];
            self.value_idx += 1;
        }

        self.level_idx += 1;
        self.pending = Some(entry);
        Ok(true)
    }
}
