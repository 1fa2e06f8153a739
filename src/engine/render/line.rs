use crate::engine::core::view::{DeltaView, TopView};

/// Render row `i` of a flat batch as a semicolon-joined line, in schema
/// order, skipping unselected fields.
pub fn top_line(view: &TopView<'_>, i: usize) -> String {
    let mut buf = itoa::Buffer::new();
    let mut out = String::with_capacity(64);

    for field in [
        view.ts,
        view.ask_px,
        view.ask_qty,
        view.bid_px,
        view.bid_qty,
        view.value,
    ] {
        let Some(vals) = field else { continue };
        if !out.is_empty() {
            out.push(';');
        }
        out.push_str(buf.format(vals[i]));
    }

    out
}

/// Render row `i` of a nested batch: the four scalars (0 when unselected),
/// then the ask and bid lists as comma-joined `px(qty)` entries.
pub fn delta_line(view: &DeltaView<'_>, i: usize) -> String {
    let mut buf = itoa::Buffer::new();
    let mut out = String::with_capacity(96);

    for field in [view.ts, view.first_id, view.last_id, view.event_time] {
        if !out.is_empty() {
            out.push(';');
        }
        let v = field.map_or(0, |vals| vals[i]);
        out.push_str(buf.format(v));
    }

    out.push(';');
    render_list(&mut out, view.ask_off, view.ask_px, view.ask_qty, i);
    out.push(';');
    render_list(&mut out, view.bid_off, view.bid_px, view.bid_qty, i);

    out
}

fn render_list(
    out: &mut String,
    off: Option<&[u32]>,
    px: Option<&[i64]>,
    qty: Option<&[i64]>,
    i: usize,
) {
    let Some(off) = off else { return };
    let (start, end) = (off[i] as usize, off[i + 1] as usize);
    let mut buf = itoa::Buffer::new();

    for j in start..end {
        if j > start {
            out.push(',');
        }
        match (px, qty) {
            (Some(px), Some(qty)) => {
                out.push_str(buf.format(px[j]));
                out.push('(');
                out.push_str(buf.format(qty[j]));
                out.push(')');
            }
            (Some(px), None) => out.push_str(buf.format(px[j])),
            (None, Some(qty)) => out.push_str(buf.format(qty[j])),
            (None, None) => {}
        }
    }
}
