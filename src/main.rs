use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use tickstore::engine::read::TickStore;
use tickstore::engine::render::{delta_line, top_line};
use tickstore::engine::schema::{DeltaSelect, SchemaVariant, TopSelect};
use tickstore::logging;
use tickstore::shared::config::CONFIG;

/// Dump rows from an on-disk tick store as semicolon-joined lines.
#[derive(Debug, Parser)]
#[command(name = "tickstore", version, about)]
struct Args {
    /// Instrument symbol, e.g. BTCUSDT.
    symbol: String,

    /// Shard variant to read: "top" or "delta".
    variant: SchemaVariant,

    /// Inclusive start of the time range, in epoch nanoseconds.
    start_ns: i64,

    /// Exclusive end of the time range, in epoch nanoseconds.
    end_ns: i64,

    /// Store root directory; defaults to the configured store.root.
    #[arg(long)]
    root: Option<PathBuf>,

    /// Comma-separated column list; all columns when omitted.
    #[arg(long)]
    columns: Option<String>,

    /// Print only every n-th row.
    #[arg(long, default_value = "1")]
    every: u64,
}

fn main() -> anyhow::Result<()> {
    logging::init()?;
    let args = Args::parse();

    let root = args
        .root
        .unwrap_or_else(|| PathBuf::from(&CONFIG.store.root));
    let store = TickStore::new(root);
    let every = args.every.max(1);

    info!(
        symbol = %args.symbol,
        variant = ?args.variant,
        start_ns = args.start_ns,
        end_ns = args.end_ns,
        "starting dump"
    );

    let mut row: u64 = 0;
    match args.variant {
        SchemaVariant::Top => {
            let sel = match args.columns.as_deref() {
                Some(csv) => TopSelect::from_csv(csv),
                None => TopSelect::all(),
            };
            let mut reader = store.top_reader(&args.symbol, args.start_ns, args.end_ns, sel);
            while let Some(view) = reader.next() {
                for i in 0..view.n {
                    if row % every == 0 {
                        println!("{}", top_line(&view, i));
                    }
                    row += 1;
                }
            }
        }
        SchemaVariant::Delta => {
            let sel = match args.columns.as_deref() {
                Some(csv) => DeltaSelect::from_csv(csv),
                None => DeltaSelect::all(),
            };
            let mut reader = store.delta_reader(&args.symbol, args.start_ns, args.end_ns, sel);
            while let Some(view) = reader.next() {
                for i in 0..view.n {
                    if row % every == 0 {
                        println!("{}", delta_line(&view, i));
                    }
                    row += 1;
                }
            }
        }
    }

    info!(rows = row, "dump complete");
    Ok(())
}
