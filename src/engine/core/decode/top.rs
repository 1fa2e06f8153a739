use std::fs::File;
use std::path::Path;

use parquet::file::reader::{FileReader, SerializedFileReader};

use crate::engine::core::decode::{leaf_cursor, maybe_cursor, take_opt, take_required};
use crate::engine::core::view::TopBuffers;
use crate::engine::errors::{DecodeError, ShardOpenError};
use crate::engine::schema::TopSelect;
use crate::engine::schema::col;

/// Streams one flat shard file block by block (parquet row group), decoding
/// the selected columns into reusable buffers with the `[start, end)` time
/// filter applied during decode.
pub struct TopDecoder {
    reader: SerializedFileReader<File>,
    rg_idx: usize,
}

impl TopDecoder {
    pub fn open(path: &Path) -> Result<Self, ShardOpenError> {
        let file = File::open(path)?;
        let reader = SerializedFileReader::new(file)?;
        Ok(Self { reader, rg_idx: 0 })
    }

    /// Decode blocks until one yields at least one in-range row (`Ok(true)`)
    /// or the file is exhausted (`Ok(false)`). Fully filtered blocks are
    /// still drained so the block cursor stays consistent.
    pub fn next_block(
        &mut self,
        start_ns: i64,
        end_ns: i64,
        sel: &TopSelect,
        out: &mut TopBuffers,
    ) -> Result<bool, DecodeError> {
        loop {
            if self.rg_idx >= self.reader.num_row_groups() {
                return Ok(false);
            }

            let rows = self.reader.metadata().row_group(self.rg_idx).num_rows() as usize;
            let rg = self.reader.get_row_group(self.rg_idx)?;
            self.rg_idx += 1;

            let schema = self.reader.metadata().file_metadata().schema_descr();

            // ts is always decoded; it drives the filter.
            let mut ts = leaf_cursor(rg.as_ref(), schema, col::TS)?;
            let mut ask_px = maybe_cursor(rg.as_ref(), schema, sel.ask_px, col::ASK_PX)?;
            let mut ask_qty = maybe_cursor(rg.as_ref(), schema, sel.ask_qty, col::ASK_QTY)?;
            let mut bid_px = maybe_cursor(rg.as_ref(), schema, sel.bid_px, col::BID_PX)?;
            let mut bid_qty = maybe_cursor(rg.as_ref(), schema, sel.bid_qty, col::BID_QTY)?;
            let mut value = maybe_cursor(rg.as_ref(), schema, sel.value, col::VALUE)?;

            out.clear();
            out.ts.reserve(rows);

            for _ in 0..rows {
                let e_ts = take_required(&mut ts)?;

                // Every selected cursor advances exactly once per row, in
                // and out of range alike.
                let v_ask_px = take_opt(&mut ask_px)?;
                let v_ask_qty = take_opt(&mut ask_qty)?;
                let v_bid_px = take_opt(&mut bid_px)?;
                let v_bid_qty = take_opt(&mut bid_qty)?;
                let v_value = take_opt(&mut value)?;

                if e_ts.value >= start_ns && e_ts.value < end_ns {
                    out.ts.push(e_ts.value);
                    if sel.ask_px {
                        out.ask_px.push(v_ask_px);
                    }
                    if sel.ask_qty {
                        out.ask_qty.push(v_ask_qty);
                    }
                    if sel.bid_px {
                        out.bid_px.push(v_bid_px);
                    }
                    if sel.bid_qty {
                        out.bid_qty.push(v_bid_qty);
                    }
                    if sel.value {
                        out.value.push(v_value);
                    }
                }
            }

            if !out.ts.is_empty() {
                return Ok(true);
            }
        }
    }
}
