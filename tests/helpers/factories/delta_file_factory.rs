use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use parquet::basic::{LogicalType, Repetition, Type as PhysicalType};
use parquet::data_type::Int64Type;
use parquet::file::properties::WriterProperties;
use parquet::file::writer::{SerializedFileWriter, SerializedRowGroupWriter};
use parquet::schema::types::{Type, TypePtr};

use super::required_i64;

/// One nested book-delta row with plausible defaults.
#[derive(Debug, Clone)]
pub struct DeltaRow {
    pub ts: i64,
    pub first_id: i64,
    pub last_id: i64,
    pub event_time: i64,
    pub asks: Vec<(i64, i64)>,
    pub bids: Vec<(i64, i64)>,
}

impl DeltaRow {
    pub fn at(ts: i64) -> Self {
        Self {
            ts,
            first_id: 1,
            last_id: 1,
            event_time: ts,
            asks: Vec::new(),
            bids: Vec::new(),
        }
    }

    pub fn with_asks(mut self, asks: &[(i64, i64)]) -> Self {
        self.asks = asks.to_vec();
        self
    }

    pub fn with_bids(mut self, bids: &[(i64, i64)]) -> Self {
        self.bids = bids.to_vec();
        self
    }
}

// Leaves kept separate so a row can carry px and qty lists of different
// lengths, which a well-formed writer never produces.
#[derive(Debug, Clone)]
struct RawRow {
    ts: i64,
    first_id: i64,
    last_id: i64,
    event_time: i64,
    ask_px: Vec<i64>,
    ask_qty: Vec<i64>,
    bid_px: Vec<i64>,
    bid_qty: Vec<i64>,
}

/// Writes nested shard files for tests, including malformed ones.
pub struct DeltaFileFactory {
    rows: Vec<RawRow>,
    rows_per_group: usize,
}

impl DeltaFileFactory {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            rows_per_group: usize::MAX,
        }
    }

    pub fn with_row(mut self, row: DeltaRow) -> Self {
        self.rows.push(RawRow {
            ts: row.ts,
            first_id: row.first_id,
            last_id: row.last_id,
            event_time: row.event_time,
            ask_px: row.asks.iter().map(|&(px, _)| px).collect(),
            ask_qty: row.asks.iter().map(|&(_, qty)| qty).collect(),
            bid_px: row.bids.iter().map(|&(px, _)| px).collect(),
            bid_qty: row.bids.iter().map(|&(_, qty)| qty).collect(),
        });
        self
    }

    /// A row whose ask px and qty leaves disagree on element count.
    pub fn with_uneven_ask_row(mut self, ts: i64, px: &[i64], qty: &[i64]) -> Self {
        self.rows.push(RawRow {
            ts,
            first_id: 1,
            last_id: 1,
            event_time: ts,
            ask_px: px.to_vec(),
            ask_qty: qty.to_vec(),
            bid_px: Vec::new(),
            bid_qty: Vec::new(),
        });
        self
    }

    pub fn with_rows_per_group(mut self, n: usize) -> Self {
        self.rows_per_group = n.max(1);
        self
    }

    pub fn write(self, path: &Path) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        let file = File::create(path).unwrap();
        let props = Arc::new(WriterProperties::builder().build());
        let mut writer = SerializedFileWriter::new(file, delta_schema(), props).unwrap();

        for chunk in self.rows.chunks(self.rows_per_group) {
            let mut rg = writer.next_row_group().unwrap();

            write_required(&mut rg, &collect(chunk, |r| r.ts));
            write_required(&mut rg, &collect(chunk, |r| r.first_id));
            write_required(&mut rg, &collect(chunk, |r| r.last_id));
            write_required(&mut rg, &collect(chunk, |r| r.event_time));

            write_leaf(&mut rg, &levels(chunk, |r| &r.ask_px));
            write_leaf(&mut rg, &levels(chunk, |r| &r.ask_qty));
            write_leaf(&mut rg, &levels(chunk, |r| &r.bid_px));
            write_leaf(&mut rg, &levels(chunk, |r| &r.bid_qty));

            rg.close().unwrap();
        }

        writer.close().unwrap();
    }
}

fn delta_schema() -> TypePtr {
    Arc::new(
        Type::group_type_builder("book_delta")
            .with_fields(vec![
                required_i64("ts"),
                required_i64("firstId"),
                required_i64("lastId"),
                required_i64("eventTime"),
                list_field("ask"),
                list_field("bid"),
            ])
            .build()
            .unwrap(),
    )
}

// The standard three-level list shape: optional group, repeated "list",
// optional "element" holding optional px and qty. Leaf max def is 4 and
// max rep is 1.
fn list_field(name: &str) -> TypePtr {
    let element = Arc::new(
        Type::group_type_builder("element")
            .with_repetition(Repetition::OPTIONAL)
            .with_fields(vec![optional_i64("px"), optional_i64("qty")])
            .build()
            .unwrap(),
    );
    let list = Arc::new(
        Type::group_type_builder("list")
            .with_repetition(Repetition::REPEATED)
            .with_fields(vec![element])
            .build()
            .unwrap(),
    );
    Arc::new(
        Type::group_type_builder(name)
            .with_repetition(Repetition::OPTIONAL)
            .with_logical_type(Some(LogicalType::List))
            .with_fields(vec![list])
            .build()
            .unwrap(),
    )
}

fn optional_i64(name: &str) -> TypePtr {
    Arc::new(
        Type::primitive_type_builder(name, PhysicalType::INT64)
            .with_repetition(Repetition::OPTIONAL)
            .build()
            .unwrap(),
    )
}

#[derive(Default)]
struct LeafLevels {
    defs: Vec<i16>,
    reps: Vec<i16>,
    values: Vec<i64>,
}

impl LeafLevels {
    fn push_list(&mut self, vals: &[i64]) {
        if vals.is_empty() {
            // Present list with zero elements: one placeholder slot.
            self.defs.push(1);
            self.reps.push(0);
            return;
        }
        for (i, &v) in vals.iter().enumerate() {
            self.defs.push(4);
            self.reps.push(if i == 0 { 0 } else { 1 });
            self.values.push(v);
        }
    }
}

fn levels<'a>(rows: &'a [RawRow], f: impl Fn(&'a RawRow) -> &'a [i64]) -> LeafLevels {
    let mut lv = LeafLevels::default();
    for row in rows {
        lv.push_list(f(row));
    }
    lv
}

fn collect(rows: &[RawRow], f: impl Fn(&RawRow) -> i64) -> Vec<i64> {
    rows.iter().map(f).collect()
}

fn write_required(rg: &mut SerializedRowGroupWriter<'_, File>, values: &[i64]) {
    let mut col = rg.next_column().unwrap().unwrap();
    col.typed::<Int64Type>()
        .write_batch(values, None, None)
        .unwrap();
    col.close().unwrap();
}

fn write_leaf(rg: &mut SerializedRowGroupWriter<'_, File>, lv: &LeafLevels) {
    let mut col = rg.next_column().unwrap().unwrap();
    col.typed::<Int64Type>()
        .write_batch(&lv.values, Some(&lv.defs), Some(&lv.reps))
        .unwrap();
    col.close().unwrap();
}
