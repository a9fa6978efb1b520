//! Drive a board interactively from stdin.
//!
//! Reads one selection key per line, prints the utterance for leaf symbols,
//! and re-lists the visible keys after every action so a caller can script a
//! session. `.` resets to the top level; EOF ends the session.

use aacboard::{load_board, Board, BoardError};
use anyhow::{bail, Context, Result};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let file = parse_args()?;
    let mut board =
        load_board(&file).with_context(|| format!("loading board {}", file.display()))?;

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    list_keys(&mut out, &board)?;
    for line in stdin.lock().lines() {
        let line = line.context("reading selection from stdin")?;
        let key = line.trim();
        if key.is_empty() {
            continue;
        }
        if key == "." {
            board.reset();
        } else {
            match board.select(key) {
                Ok(utterance) if utterance.is_empty() => {}
                Ok(utterance) => writeln!(out, "speak: {utterance}")?,
                Err(BoardError::NotFound { key }) => writeln!(out, "not found: {key}")?,
                Err(err) => return Err(err.into()),
            }
        }
        list_keys(&mut out, &board)?;
    }
    Ok(())
}

fn parse_args() -> Result<PathBuf> {
    let mut args = env::args_os().skip(1);
    let file = match args.next() {
        Some(path) => PathBuf::from(path),
        None => bail!("usage: board-walk <FILE>"),
    };
    if args.next().is_some() {
        bail!("usage: board-walk <FILE>");
    }
    Ok(file)
}

fn list_keys(out: &mut impl Write, board: &Board) -> Result<()> {
    match board.current_category() {
        Some(name) => writeln!(out, "[{name}]")?,
        None => writeln!(out, "[top]")?,
    }
    for key in board.image_keys() {
        writeln!(out, "  {key}")?;
    }
    Ok(())
}
