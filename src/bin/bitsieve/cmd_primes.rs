use anyhow::Result;

use BitSieve::primes::PrimeSeq;

/// CLI: dump the first `count` salt primes (diagnostic).
pub fn exec(count: usize) -> Result<()> {
    let mut seq = PrimeSeq::new();
    seq.ensure(count);

    let shown = &seq.as_slice()[..count.min(seq.len())];
    let line: Vec<String> = shown.iter().map(|p| p.to_string()).collect();
    println!("{}", line.join(" "));
    Ok(())
}
