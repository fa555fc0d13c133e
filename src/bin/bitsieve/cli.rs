use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI for the bitsieve membership filter
#[derive(Parser, Debug)]
#[command(name = "bitsieve", version, about = "Bloom filter with a line-oriented command shell")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Interpret set/add/search/print commands, one per line
    ///
    /// Reads the named script files in order, or stdin when none are given.
    /// One filter session spans all inputs. Replies go to stdout; every
    /// failed or unknown command replies with the literal token "error".
    Run {
        /// Script files (stdin if empty)
        files: Vec<PathBuf>,
    },
    /// One-shot sizing: print bit length and probe count for n/p
    Size {
        /// Expected number of keys
        #[arg(long)]
        items: i64,
        /// Target false-positive rate, in (0, 1)
        #[arg(long)]
        fpp: f64,
        /// Print a JSON report instead of "bits probes"
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the first N primes of the salt sequence
    Primes {
        #[arg(long, default_value_t = 16)]
        count: usize,
    },
}
