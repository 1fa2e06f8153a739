use std::path::PathBuf;

use tracing::debug;

use crate::engine::read::{DeltaBatchReader, TopBatchReader};
use crate::engine::schema::{DeltaSelect, SchemaVariant, TopSelect};
use crate::engine::shard::shard_files;

/// Entry point over an on-disk shard tree rooted at a single directory.
///
/// Layout: `root/SYMBOL/YEAR/MONTH/<prefix>_<DAY>.parquet`, one file per
/// UTC calendar day and variant.
pub struct TickStore {
    root: PathBuf,
}

impl TickStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Batch reader over top-of-book shards covering `[start_ns, end_ns)`.
    pub fn top_reader(
        &self,
        symbol: &str,
        start_ns: i64,
        end_ns: i64,
        sel: TopSelect,
    ) -> TopBatchReader {
        let files = shard_files(&self.root, symbol, SchemaVariant::Top, start_ns, end_ns);
        debug!(symbol, shards = files.len(), "resolved top shard files");
        TopBatchReader::new(files, start_ns, end_ns, sel)
    }

    /// Batch reader over depth-update shards covering `[start_ns, end_ns)`.
    pub fn delta_reader(
        &self,
        symbol: &str,
        start_ns: i64,
        end_ns: i64,
        sel: DeltaSelect,
    ) -> DeltaBatchReader {
        let files = shard_files(&self.root, symbol, SchemaVariant::Delta, start_ns, end_ns);
        debug!(symbol, shards = files.len(), "resolved delta shard files");
        DeltaBatchReader::new(files, start_ns, end_ns, sel)
    }
}
