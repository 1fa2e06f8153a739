use tracing::warn;

use crate::engine::core::cursor::Int64Cursor;
use crate::engine::errors::DecodeError;

/// What to do when the two leaf cursors of one list field stop agreeing on
/// repetition levels mid-row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DivergencePolicy {
    /// Keep the pairs read so far and stop at the row boundary: a
    /// best-effort partial result for workloads that tolerate occasional
    /// row-level defects.
    #[default]
    Truncate,
    /// Surface the inconsistency as an error; the batch reader then skips
    /// the whole shard file.
    Fail,
}

/// Reconstruct one logical row's list from a single leaf cursor.
///
/// The cursor advances whether or not `out` is given (out-of-range rows
/// still consume their entries); returns the element count.
pub fn read_list_single(
    leaf: &mut Int64Cursor,
    mut out: Option<&mut Vec<i64>>,
) -> Result<u32, DecodeError> {
    let empty_start = match leaf.peek()? {
        None => return Ok(0),
        Some(p) => p.rep == 0 && !p.present,
    };
    if empty_start {
        // The row's list is empty; consume the placeholder slot only.
        leaf.take()?;
        return Ok(0);
    }

    let mut count = 0u32;
    loop {
        let Some(entry) = leaf.take()? else { break };
        if let Some(v) = out.as_deref_mut() {
            v.push(entry.value);
        }
        count += 1;

        match leaf.peek()? {
            Some(next) if next.rep != 0 => {}
            _ => break,
        }
    }
    Ok(count)
}

/// Reconstruct one logical row's (px, qty) pairs from two sibling leaf
/// cursors, advancing both in lockstep. Returns the pair count.
pub fn read_list_pairs(
    px: &mut Int64Cursor,
    qty: &mut Int64Cursor,
    mut out_px: Option<&mut Vec<i64>>,
    mut out_qty: Option<&mut Vec<i64>>,
    policy: DivergencePolicy,
) -> Result<u32, DecodeError> {
    let (px_empty, qty_empty) = match (px.peek()?.copied(), qty.peek()?.copied()) {
        (Some(p), Some(q)) => (p.rep == 0 && !p.present, q.rep == 0 && !q.present),
        _ => return Ok(0),
    };

    if px_empty && qty_empty {
        px.take()?;
        qty.take()?;
        return Ok(0);
    }

    let mut count = 0u32;
    loop {
        let (Some(e_px), Some(e_qty)) = (px.take()?, qty.take()?) else {
            break;
        };
        if let Some(v) = out_px.as_deref_mut() {
            v.push(e_px.value);
        }
        if let Some(v) = out_qty.as_deref_mut() {
            v.push(e_qty.value);
        }
        count += 1;

        let next_px = px.peek()?.map(|e| e.rep);
        let next_qty = qty.peek()?.map(|e| e.rep);
        match (next_px, next_qty) {
            (None, _) | (_, None) => break,
            (Some(0), Some(0)) => break,
            (Some(a), Some(b)) if a != b => match policy {
                DivergencePolicy::Truncate => {
                    warn!(
                        field = px.column(),
                        pairs = count,
                        "sibling list cursors diverged; truncating row's list"
                    );
                    break;
                }
                DivergencePolicy::Fail => {
                    return Err(DecodeError::LevelDivergence(px.column().to_string()));
                }
            },
            _ => {}
        }
    }

    Ok(count)
}
