/// The two supported shapes of shard files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVariant {
    /// Flat top-of-book snapshots: one scalar INT64 per column per row.
    Top,
    /// Nested book deltas: scalar columns plus ask/bid lists of (px, qty).
    Delta,
}

impl SchemaVariant {
    /// File-name prefix used by the shard naming convention
    /// (`<prefix>_<DAY>.parquet`).
    pub fn file_prefix(&self) -> &'static str {
        match self {
            SchemaVariant::Top => "top",
            SchemaVariant::Delta => "delta",
        }
    }
}

impl std::str::FromStr for SchemaVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(SchemaVariant::Top),
            "delta" => Ok(SchemaVariant::Delta),
            other => Err(format!("unknown schema variant '{other}' (expected top|delta)")),
        }
    }
}

/// Leaf column paths, as declared in the shard files. List leaves use the
/// standard three-level dotted path.
pub mod col {
    pub const TS: &str = "ts";

    pub const ASK_PX: &str = "askPx";
    pub const ASK_QTY: &str = "askQty";
    pub const BID_PX: &str = "bidPx";
    pub const BID_QTY: &str = "bidQty";
    pub const VALUE: &str = "value";

    pub const FIRST_ID: &str = "firstId";
    pub const LAST_ID: &str = "lastId";
    pub const EVENT_TIME: &str = "eventTime";

    pub const ASK_LIST_PX: &str = "ask.list.element.px";
    pub const ASK_LIST_QTY: &str = "ask.list.element.qty";
    pub const BID_LIST_PX: &str = "bid.list.element.px";
    pub const BID_LIST_QTY: &str = "bid.list.element.qty";
}
