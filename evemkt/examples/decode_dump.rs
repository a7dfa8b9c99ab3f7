//! Decodes an uncompressed market order dump and prints a summary.
//!
//! Run with: `cargo run --example decode_dump -- <dump-file> [era]`
//!
//! The era is taken from the `YYYY-MM-DD` date in the file name unless one of
//! `pacific-legacy`, `pacific` or `utc` is given. Set `RUST_LOG=debug` to see
//! rejected lines.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, bail};
use evemkt::prelude::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: decode_dump <dump-file> [pacific-legacy|pacific|utc]");
    };
    let forced: Option<Era> = args.next().map(|s| s.parse()).transpose()?;

    let mut builder = FeedConfig::builder();
    if let Some(era) = forced {
        builder = builder.era(era);
    }
    let config = builder.build();

    let name = Path::new(&path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path.as_str());
    let mut decoder = match (FeedDecoder::for_file_name(config.clone(), name), forced) {
        (Ok(decoder), _) => decoder,
        (Err(_), Some(era)) => FeedDecoder::with_era(config, era),
        (Err(e), None) => return Err(e).context("pass an era for dumps without a dated name"),
    };

    let file = File::open(&path).with_context(|| format!("opening {path}"))?;
    tracing::info!("Decoding {} as {}", path, decoder.era());

    let mut volume_by_type: BTreeMap<u32, u64> = BTreeMap::new();
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("reading {path}"))?;
        if let Some((record, Verdict::Valid)) = decoder.decode_line(&line) {
            *volume_by_type.entry(record.type_id).or_default() += u64::from(record.vol_rem);
        }
    }

    let stats = decoder.finish();
    println!("{path}: {stats}");
    println!("reject rate: {:.3}%", stats.reject_rate() * 100.0);

    let mut top: Vec<_> = volume_by_type.into_iter().collect();
    top.sort_by(|a, b| b.1.cmp(&a.1));
    for (type_id, volume) in top.into_iter().take(10) {
        println!("  type {type_id:>6}: {volume} units remaining");
    }

    Ok(())
}
