use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use BitSieve::script::Session;

/// CLI: run the command interpreter.
/// One session (one filter) spans every input: several script files behave
/// like one concatenated stream.
pub fn exec(files: Vec<PathBuf>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut session = Session::new();

    if files.is_empty() {
        let stdin = io::stdin();
        session.run(stdin.lock(), &mut out)?;
        return Ok(());
    }

    for path in files {
        let f = File::open(&path).with_context(|| format!("open script {}", path.display()))?;
        session.run(BufReader::new(f), &mut out)?;
    }
    Ok(())
}
