use std::fs::File;
use std::path::Path;

use parquet::file::reader::{FileReader, SerializedFileReader};

use crate::engine::core::decode::{leaf_cursor, maybe_cursor, take_opt, take_required};
use crate::engine::core::list::{DivergencePolicy, read_list_pairs, read_list_single};
use crate::engine::core::view::DeltaBuffers;
use crate::engine::errors::{DecodeError, ShardOpenError};
use crate::engine::schema::DeltaSelect;
use crate::engine::schema::col;

/// Streams one nested shard file block by block, reconstructing the ask and
/// bid lists row by row and applying the `[start, end)` time filter during
/// decode.
pub struct DeltaDecoder {
    reader: SerializedFileReader<File>,
    rg_idx: usize,
    policy: DivergencePolicy,
}

impl DeltaDecoder {
    pub fn open(path: &Path, policy: DivergencePolicy) -> Result<Self, ShardOpenError> {
        let file = File::open(path)?;
        let reader = SerializedFileReader::new(file)?;
        Ok(Self {
            reader,
            rg_idx: 0,
            policy,
        })
    }

    /// Decode blocks until one yields at least one in-range row (`Ok(true)`)
    /// or the file is exhausted (`Ok(false)`).
    ///
    /// List cursors advance for every row, in range or not, so the sibling
    /// cursors stay synchronized on row boundaries; only in-range rows
    /// append values and extend the offsets arrays.
    pub fn next_block(
        &mut self,
        start_ns: i64,
        end_ns: i64,
        sel: &DeltaSelect,
        out: &mut DeltaBuffers,
    ) -> Result<bool, DecodeError> {
        loop {
            if self.rg_idx >= self.reader.num_row_groups() {
                return Ok(false);
            }

            let rows = self.reader.metadata().row_group(self.rg_idx).num_rows() as usize;
            let rg = self.reader.get_row_group(self.rg_idx)?;
            self.rg_idx += 1;

            let schema = self.reader.metadata().file_metadata().schema_descr();

            let mut ts = leaf_cursor(rg.as_ref(), schema, col::TS)?;
            let mut first_id = maybe_cursor(rg.as_ref(), schema, sel.first_id, col::FIRST_ID)?;
            let mut last_id = maybe_cursor(rg.as_ref(), schema, sel.last_id, col::LAST_ID)?;
            let mut event_time =
                maybe_cursor(rg.as_ref(), schema, sel.event_time, col::EVENT_TIME)?;

            let mut ask_px = maybe_cursor(rg.as_ref(), schema, sel.ask_px, col::ASK_LIST_PX)?;
            let mut ask_qty = maybe_cursor(rg.as_ref(), schema, sel.ask_qty, col::ASK_LIST_QTY)?;
            let mut bid_px = maybe_cursor(rg.as_ref(), schema, sel.bid_px, col::BID_LIST_PX)?;
            let mut bid_qty = maybe_cursor(rg.as_ref(), schema, sel.bid_qty, col::BID_LIST_QTY)?;

            out.clear();
            out.ts.reserve(rows);
            if sel.need_asks() {
                out.ask_off.reserve(rows + 1);
                out.ask_off.push(0);
            }
            if sel.need_bids() {
                out.bid_off.reserve(rows + 1);
                out.bid_off.push(0);
            }

            for _ in 0..rows {
                let e_ts = take_required(&mut ts)?;
                let v_first_id = take_opt(&mut first_id)?;
                let v_last_id = take_opt(&mut last_id)?;
                let v_event_time = take_opt(&mut event_time)?;

                let in_range = e_ts.value >= start_ns && e_ts.value < end_ns;

                let asks_added = match (ask_px.as_mut(), ask_qty.as_mut()) {
                    (Some(px), Some(qty)) => read_list_pairs(
                        px,
                        qty,
                        in_range.then_some(&mut out.ask_px),
                        in_range.then_some(&mut out.ask_qty),
                        self.policy,
                    )?,
                    (Some(px), None) => {
                        read_list_single(px, in_range.then_some(&mut out.ask_px))?
                    }
                    (None, Some(qty)) => {
                        read_list_single(qty, in_range.then_some(&mut out.ask_qty))?
                    }
                    (None, None) => 0,
                };

                let bids_added = match (bid_px.as_mut(), bid_qty.as_mut()) {
                    (Some(px), Some(qty)) => read_list_pairs(
                        px,
                        qty,
                        in_range.then_some(&mut out.bid_px),
                        in_range.then_some(&mut out.bid_qty),
                        self.policy,
                    )?,
                    (Some(px), None) => {
                        read_list_single(px, in_range.then_some(&mut out.bid_px))?
                    }
                    (None, Some(qty)) => {
                        read_list_single(qty, in_range.then_some(&mut out.bid_qty))?
                    }
                    (None, None) => 0,
                };

                if in_range {
                    out.ts.push(e_ts.value);
                    if sel.first_id {
                        out.first_id.push(v_first_id);
                    }
                    if sel.last_id {
                        out.last_id.push(v_last_id);
                    }
                    if sel.event_time {
                        out.event_time.push(v_event_time);
                    }
                    if sel.need_asks() {
                        let prev = out.ask_off.last().copied().unwrap_or(0);
                        out.ask_off.push(prev + asks_added);
                    }
                    if sel.need_bids() {
                        let prev = out.bid_off.last().copied().unwrap_or(0);
                        out.bid_off.push(prev + bids_added);
                    }
                }
            }

            if !out.ts.is_empty() {
                return Ok(true);
            }
        }
    }
}
