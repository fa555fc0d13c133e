use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env};
use log::error;

mod cli;
mod cmd_primes;
mod cmd_run;
mod cmd_size;

fn init_logger() {
    // Level comes from RUST_LOG, default info. Logger writes to stderr, so
    // protocol output on stdout stays clean.
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    if let Err(e) = run() {
        error!("{:?}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = cli::Cli::parse();
    match cli.cmd {
        cli::Cmd::Run { files } => cmd_run::exec(files),

        cli::Cmd::Size { items, fpp, json } => cmd_size::exec(items, fpp, json),

        cli::Cmd::Primes { count } => cmd_primes::exec(count),
    }
}
