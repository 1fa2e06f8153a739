use crate::engine::schema::{DeltaSelect, TopSelect};

/// Reusable output vectors for flat top-of-book decode. Owned by the batch
/// reader, cleared and refilled per block.
#[derive(Debug, Default)]
pub struct TopBuffers {
    pub ts: Vec<i64>,
    pub ask_px: Vec<i64>,
    pub ask_qty: Vec<i64>,
    pub bid_px: Vec<i64>,
    pub bid_qty: Vec<i64>,
    pub value: Vec<i64>,
}

impl TopBuffers {
    pub fn clear(&mut self) {
        self.ts.clear();
        self.ask_px.clear();
        self.ask_qty.clear();
        self.bid_px.clear();
        self.bid_qty.clear();
        self.value.clear();
    }

    pub fn view(&self, sel: &TopSelect) -> TopView<'_> {
        TopView {
            ts: sel.ts.then_some(self.ts.as_slice()),
            ask_px: sel.ask_px.then_some(self.ask_px.as_slice()),
            ask_qty: sel.ask_qty.then_some(self.ask_qty.as_slice()),
            bid_px: sel.bid_px.then_some(self.bid_px.as_slice()),
            bid_qty: sel.bid_qty.then_some(self.bid_qty.as_slice()),
            value: sel.value.then_some(self.value.as_slice()),
            n: self.ts.len(),
        }
    }
}

/// One decoded, range-filtered batch of flat rows. Every populated array has
/// length `n`. Borrows the reader's buffers, so it lives only until the next
/// decode call.
#[derive(Debug, Clone, Copy)]
pub struct TopView<'a> {
    pub ts: Option<&'a [i64]>,
    pub ask_px: Option<&'a [i64]>,
    pub ask_qty: Option<&'a [i64]>,
    pub bid_px: Option<&'a [i64]>,
    pub bid_qty: Option<&'a [i64]>,
    pub value: Option<&'a [i64]>,
    pub n: usize,
}

/// Reusable output vectors for nested book-delta decode. List fields use an
/// arena layout: one values vector per leaf plus an offsets vector with
/// `n + 1` entries.
#[derive(Debug, Default)]
pub struct DeltaBuffers {
    pub ts: Vec<i64>,
    pub first_id: Vec<i64>,
    pub last_id: Vec<i64>,
    pub event_time: Vec<i64>,
    pub ask_off: Vec<u32>,
    pub ask_px: Vec<i64>,
    pub ask_qty: Vec<i64>,
    pub bid_off: Vec<u32>,
    pub bid_px: Vec<i64>,
    pub bid_qty: Vec<i64>,
}

impl DeltaBuffers {
    pub fn clear(&mut self) {
        self.ts.clear();
        self.first_id.clear();
        self.last_id.clear();
        self.event_time.clear();
        self.ask_off.clear();
        self.ask_px.clear();
        self.ask_qty.clear();
        self.bid_off.clear();
        self.bid_px.clear();
        self.bid_qty.clear();
    }

    pub fn view(&self, sel: &DeltaSelect) -> DeltaView<'_> {
        DeltaView {
            ts: sel.ts.then_some(self.ts.as_slice()),
            first_id: sel.first_id.then_some(self.first_id.as_slice()),
            last_id: sel.last_id.then_some(self.last_id.as_slice()),
            event_time: sel.event_time.then_some(self.event_time.as_slice()),
            ask_off: sel.need_asks().then_some(self.ask_off.as_slice()),
            ask_px: sel.ask_px.then_some(self.ask_px.as_slice()),
            ask_qty: sel.ask_qty.then_some(self.ask_qty.as_slice()),
            bid_off: sel.need_bids().then_some(self.bid_off.as_slice()),
            bid_px: sel.bid_px.then_some(self.bid_px.as_slice()),
            bid_qty: sel.bid_qty.then_some(self.bid_qty.as_slice()),
            n: self.ts.len(),
        }
    }
}

/// One decoded, range-filtered batch of nested rows. Row `i`'s ask list
/// occupies `ask_off[i]..ask_off[i + 1]` in the ask values arrays, and
/// likewise for bids.
#[derive(Debug, Clone, Copy)]
pub struct DeltaView<'a> {
    pub ts: Option<&'a [i64]>,
    pub first_id: Option<&'a [i64]>,
    pub last_id: Option<&'a [i64]>,
    pub event_time: Option<&'a [i64]>,
    pub ask_off: Option<&'a [u32]>,
    pub ask_px: Option<&'a [i64]>,
    pub ask_qty: Option<&'a [i64]>,
    pub bid_off: Option<&'a [u32]>,
    pub bid_px: Option<&'a [i64]>,
    pub bid_qty: Option<&'a [i64]>,
    pub n: usize,
}
