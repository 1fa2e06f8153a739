use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use parquet::data_type::Int64Type;
use parquet::file::properties::WriterProperties;
use parquet::file::writer::{SerializedFileWriter, SerializedRowGroupWriter};
use parquet::schema::types::{Type, TypePtr};

use super::required_i64;

/// One flat top-of-book row with plausible defaults.
#[derive(Debug, Clone)]
pub struct TopRow {
    pub ts: i64,
    pub ask_px: i64,
    pub ask_qty: i64,
    pub bid_px: i64,
    pub bid_qty: i64,
    pub value: i64,
}

impl TopRow {
    pub fn at(ts: i64) -> Self {
        Self {
            ts,
            ask_px: 100,
            ask_qty: 1,
            bid_px: 99,
            bid_qty: 2,
            value: 10,
        }
    }
}

/// Writes flat shard files for tests.
pub struct TopFileFactory {
    rows: Vec<TopRow>,
    rows_per_group: usize,
}

impl TopFileFactory {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            rows_per_group: usize::MAX,
        }
    }

    pub fn with_row(mut self, row: TopRow) -> Self {
        self.rows.push(row);
        self
    }

    pub fn with_ts_rows(mut self, ts: &[i64]) -> Self {
        for &t in ts {
            self.rows.push(TopRow::at(t));
        }
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
        let mut writer = SerializedFileWriter::new(file, top_schema(), props).unwrap();

        for chunk in self.rows.chunks(self.rows_per_group) {
            let mut rg = writer.next_row_group().unwrap();
            write_required(&mut rg, &collect(chunk, |r| r.ts));
            write_required(&mut rg, &collect(chunk, |r| r.ask_px));
            write_required(&mut rg, &collect(chunk, |r| r.ask_qty));
            write_required(&mut rg, &collect(chunk, |r| r.bid_px));
            write_required(&mut rg, &collect(chunk, |r| r.bid_qty));
            write_required(&mut rg, &collect(chunk, |r| r.value));
            rg.close().unwrap();
        }

        writer.close().unwrap();
    }
}

fn top_schema() -> TypePtr {
    Arc::new(
        Type::group_type_builder("book_top")
            .with_fields(vec![
                required_i64("ts"),
                required_i64("askPx"),
                required_i64("askQty"),
                required_i64("bidPx"),
                required_i64("bidQty"),
                required_i64("value"),
            ])
            .build()
            .unwrap(),
    )
}

fn collect(rows: &[TopRow], f: impl Fn(&TopRow) -> i64) -> Vec<i64> {
    rows.iter().map(f).collect()
}

fn write_required(rg: &mut SerializedRowGroupWriter<'_, File>, values: &[i64]) {
    let mut col = rg.next_column().unwrap().unwrap();
    col.typed::<Int64Type>()
        .write_batch(values, None, None)
        .unwrap();
    col.close().unwrap();
}
