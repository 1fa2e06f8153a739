/// Column projection for flat top-of-book shards.
///
/// `ts` is always decoded because it drives the time filter; its flag only
/// controls whether it is exposed in the view.
#[derive(Debug, Clone, Copy)]
pub struct TopSelect {
    pub ts: bool,
    pub ask_px: bool,
    pub ask_qty: bool,
    pub bid_px: bool,
    pub bid_qty: bool,
    pub value: bool,
}

impl Default for TopSelect {
    fn default() -> Self {
        Self::all()
    }
}

impl TopSelect {
    pub fn all() -> Self {
        Self {
            ts: true,
            ask_px: true,
            ask_qty: true,
            bid_px: true,
            bid_qty: true,
            value: true,
        }
    }

    pub fn none() -> Self {
        Self {
            ts: false,
            ask_px: false,
            ask_qty: false,
            bid_px: false,
            bid_qty: false,
            value: false,
        }
    }

    /// Parse a comma-separated column list, e.g. `ts,askPx,value`.
    /// Unknown tokens are ignored.
    pub fn from_csv(csv: &str) -> Self {
        let mut sel = Self::none();
        for token in csv.split(',') {
            match norm_token(token).as_str() {
                "ts" | "time" => sel.ts = true,
                "askpx" | "px" | "ask" | "askprice" => sel.ask_px = true,
                "askqty" | "qty" | "asksize" => sel.ask_qty = true,
                "bidpx" | "bid" | "bidprice" => sel.bid_px = true,
                "bidqty" | "bidsize" => sel.bid_qty = true,
                "value" | "valu" | "vol" | "volume" => sel.value = true,
                _ => {}
            }
        }
        sel
    }
}

/// Column projection for nested book-delta shards. Selecting either leaf of
/// a list field materializes that field's offsets array.
#[derive(Debug, Clone, Copy)]
pub struct DeltaSelect {
    pub ts: bool,
    pub first_id: bool,
    pub last_id: bool,
    pub event_time: bool,
    pub ask_px: bool,
    pub ask_qty: bool,
    pub bid_px: bool,
    pub bid_qty: bool,
}

impl Default for DeltaSelect {
    fn default() -> Self {
        Self::all()
    }
}

impl DeltaSelect {
    pub fn all() -> Self {
        Self {
            ts: true,
            first_id: true,
            last_id: true,
            event_time: true,
            ask_px: true,
            ask_qty: true,
            bid_px: true,
            bid_qty: true,
        }
    }

    pub fn none() -> Self {
        Self {
            ts: false,
            first_id: false,
            last_id: false,
            event_time: false,
            ask_px: false,
            ask_qty: false,
            bid_px: false,
            bid_qty: false,
        }
    }

    pub fn need_asks(&self) -> bool {
        self.ask_px || self.ask_qty
    }

    pub fn need_bids(&self) -> bool {
        self.bid_px || self.bid_qty
    }

    /// Parse a comma-separated column list, e.g. `ts,firstId,askPx`.
    /// Unknown tokens are ignored.
    pub fn from_csv(csv: &str) -> Self {
        let mut sel = Self::none();
        for token in csv.split(',') {
            match norm_token(token).as_str() {
                "ts" | "time" => sel.ts = true,
                "firstid" | "fid" => sel.first_id = true,
                "lastid" | "lid" => sel.last_id = true,
                "eventtime" | "evt" | "event" => sel.event_time = true,
                "askpx" | "px" | "ask" | "askprice" => sel.ask_px = true,
                "askqty" | "qty" | "asksize" => sel.ask_qty = true,
                "bidpx" | "bid" | "bidprice" => sel.bid_px = true,
                "bidqty" | "bidsize" => sel.bid_qty = true,
                _ => {}
            }
        }
        sel
    }
}

/// Lowercase and strip everything outside [a-z0-9].
fn norm_token(token: &str) -> String {
    token
        .chars()
        .filter_map(|c| {
            let c = c.to_ascii_lowercase();
            c.is_ascii_alphanumeric().then_some(c)
        })
        .collect()
}
