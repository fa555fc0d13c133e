use anyhow::Result;
use serde::Serialize;

use BitSieve::params::compute_params;

#[derive(Debug, Serialize)]
struct SizeReport {
    items: i64,
    fpp: f64,
    bits: u64,
    hashes: u32,
    storage_bytes: usize,
    bits_per_item: f64,
}

/// CLI: one-shot sizing calculator. Text output matches the interpreter's
/// `set` reply; --json prints a fuller report.
pub fn exec(items: i64, fpp: f64, json: bool) -> Result<()> {
    let params = compute_params(items, fpp)?;

    if json {
        let report = SizeReport {
            items,
            fpp,
            bits: params.bits,
            hashes: params.hashes,
            storage_bytes: params.storage_bytes(),
            bits_per_item: params.bits as f64 / items as f64,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} {}", params.bits, params.hashes);
    }
    Ok(())
}
