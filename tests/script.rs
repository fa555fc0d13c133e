use anyhow::Result;
use std::io::Cursor;

use BitSieve::script::Session;

#[test]
fn command_scenario_end_to_end() -> Result<()> {
    let lines = run_lines("set 10 0.01\nadd 42\nsearch 42\nprint\n")?;

    assert_eq!(lines.len(), 3, "add replies nothing");
    assert_eq!(lines[0], "96 7");
    assert_eq!(lines[1], "1");

    // the rendered bit array: full length, only 0/1, with the bits of the
    // single insert set
    assert_eq!(lines[2].len(), 96);
    assert!(lines[2].chars().all(|c| c == '0' || c == '1'));
    let ones = lines[2].chars().filter(|&c| c == '1').count();
    assert!(ones >= 1 && ones <= 7);
    Ok(())
}

/// Failures are reported per line and never stop the stream.
#[test]
fn errors_do_not_stop_the_stream() -> Result<()> {
    let lines = run_lines("add 1\nbogus\nset 10 0.01\nset 10 0.01\nsearch 42\n")?;
    assert_eq!(lines, vec!["error", "error", "96 7", "error", "0"]);
    Ok(())
}

#[test]
fn print_before_set_is_an_error() -> Result<()> {
    assert_eq!(run_lines("print\n")?, vec!["error"]);
    Ok(())
}

#[test]
fn malformed_lines_are_errors() -> Result<()> {
    let script = "set ten 0.01\nset 10\nadd\nadd x\nsearch\n\nsearch abc\n";
    let lines = run_lines(script)?;
    assert_eq!(lines, vec!["error"; 7]);
    Ok(())
}

/// Trailing junk after the expected arguments is ignored.
#[test]
fn extra_tokens_are_ignored() -> Result<()> {
    let lines = run_lines("set 10 0.01 junk\nadd 42 junk\nsearch 42 junk\n")?;
    assert_eq!(lines, vec!["96 7", "1"]);
    Ok(())
}

/// A search miss on a sized-but-empty filter is a definite "0".
#[test]
fn search_on_empty_filter_is_zero() -> Result<()> {
    let lines = run_lines("set 10 0.01\nsearch 9999\n")?;
    assert_eq!(lines, vec!["96 7", "0"]);
    Ok(())
}

/// One session may span several input streams (the CLI feeds script files
/// one after another into the same filter).
#[test]
fn session_state_spans_streams() -> Result<()> {
    let mut session = Session::new();
    let mut out = Vec::new();

    session.run(Cursor::new("set 10 0.01\nadd 42\n"), &mut out)?;
    session.run(Cursor::new("search 42\n"), &mut out)?;

    let text = String::from_utf8(out)?;
    assert_eq!(text.lines().collect::<Vec<_>>(), vec!["96 7", "1"]);
    assert_eq!(session.filter().size_in_bits(), 96);
    Ok(())
}

// ---------- helpers ----------

fn run_lines(script: &str) -> Result<Vec<String>> {
    let mut session = Session::new();
    let mut out = Vec::new();
    session.run(Cursor::new(script), &mut out)?;
    let text = String::from_utf8(out)?;
    Ok(text.lines().map(|s| s.to_string()).collect())
}
