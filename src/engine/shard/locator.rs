use std::path::{Path, PathBuf};

use crate::engine::schema::SchemaVariant;
use crate::shared::time::{DAY_NS, Ymd, floor_day_ns, ymd_utc_from_ns};

/// Expected shard path for one UTC calendar day. Month and day directories
/// and file names are unpadded.
pub fn shard_path(root: &Path, symbol: &str, variant: SchemaVariant, ymd: Ymd) -> PathBuf {
    root.join(symbol)
        .join(ymd.year.to_string())
        .join(ymd.month.to_string())
        .join(format!("{}_{}.parquet", variant.file_prefix(), ymd.day))
}

/// Existing shard files covering `[start_ns, end_ns)`, one candidate per UTC
/// calendar day.
///
/// Day stepping keeps the result chronological and free of duplicates; a
/// lexicographic sort would order day 10 before day 2, since day numbers in
/// the naming convention are not zero-padded.
pub fn shard_files(
    root: &Path,
    symbol: &str,
    variant: SchemaVariant,
    start_ns: i64,
    end_ns: i64,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if start_ns >= end_ns {
        return paths;
    }

    let mut t = floor_day_ns(start_ns);
    // end is exclusive, so the last covered day is anchored one nanosecond
    // before end_ns.
    let end_floor = floor_day_ns(end_ns - 1);

    while t <= end_floor {
        if let Some(ymd) = ymd_utc_from_ns(t) {
            let path = shard_path(root, symbol, variant, ymd);
            if path.is_file() {
                paths.push(path);
            }
        }
        // Stepping past i64::MAX means the range ended on the last
        // representable day.
        match t.checked_add(DAY_NS) {
            Some(next) => t = next,
            None => break,
        }
    }

    paths
}
