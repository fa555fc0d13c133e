//! Line-oriented command adapter over one filter.
//!
//! One command per line, replies on stdout-style sink:
//!   set <items> <rate>   -> "<bits> <probes>"
//!   add <key>            -> (silent)
//!   search <key>         -> "1" | "0"
//!   print                -> the bit string
//! Anything else, malformed arguments included, yields the literal token
//! "error" and the stream continues. The recover boundary is scoped to one
//! line; only stream I/O failures abort the run.

use anyhow::{bail, Context, Result};
use log::debug;
use std::io::{BufRead, Write};

use crate::filter::BloomFilter;

/// One interpreter session: a single filter driven by textual commands.
/// A session may span several input streams (the CLI feeds it one script
/// file after another).
#[derive(Debug, Default)]
pub struct Session {
    filter: BloomFilter,
}

impl Session {
    pub fn new() -> Self {
        Self {
            filter: BloomFilter::new(),
        }
    }

    /// Evaluate one command line. `None` means no reply (successful `add`);
    /// any failure collapses to the opaque `error` reply.
    pub fn eval_line(&mut self, line: &str) -> Option<String> {
        match self.dispatch(line) {
            Ok(reply) => reply,
            Err(e) => {
                debug!("command '{}' failed: {:#}", line.trim(), e);
                Some("error".to_string())
            }
        }
    }

    fn dispatch(&mut self, line: &str) -> Result<Option<String>> {
        // Extra trailing tokens are ignored, blank lines fall through to
        // the unknown-command arm.
        let mut parts = line.split_whitespace();
        match parts.next().unwrap_or("") {
            "set" => {
                let items: i64 = parse_arg(parts.next(), "item count")?;
                let fpp: f64 = parse_arg(parts.next(), "false-positive rate")?;
                self.filter.initialize(items, fpp)?;
                Ok(Some(format!(
                    "{} {}",
                    self.filter.size_in_bits(),
                    self.filter.hash_count()
                )))
            }
            "add" => {
                let key: i64 = parse_arg(parts.next(), "key")?;
                self.filter.add(key)?;
                Ok(None)
            }
            "search" => {
                let key: i64 = parse_arg(parts.next(), "key")?;
                let found = self.filter.search(key)?;
                Ok(Some(if found { "1" } else { "0" }.to_string()))
            }
            "print" => Ok(Some(self.filter.to_bit_string()?)),
            other => bail!("unknown command '{}'", other),
        }
    }

    /// Drive a whole input stream, writing one reply line per replying
    /// command. Read/write failures are fatal; command failures are not.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("read command line")?;
            if let Some(reply) = self.eval_line(&line) {
                writeln!(out, "{}", reply).context("write reply")?;
            }
        }
        Ok(())
    }

    /// The filter being driven (for inspection after a scripted run).
    #[inline]
    pub fn filter(&self) -> &BloomFilter {
        &self.filter
    }
}

fn parse_arg<T: std::str::FromStr>(token: Option<&str>, what: &'static str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let token = token.with_context(|| format!("missing {}", what))?;
    token
        .parse::<T>()
        .with_context(|| format!("parse {} '{}'", what, token))
}
