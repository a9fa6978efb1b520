//! Validate a board file and report its categories.
//!
//! Usage:
//!   board-check boards/default.board
//!   board-check --roundtrip --json boards/default.board

use aacboard::{codec, load_board, Board, Category};
use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "board-check")]
#[command(about = "Validate a board file and report its categories")]
struct Cli {
    /// Board file to load.
    file: PathBuf,
    /// Verify that the serialized form survives a reparse unchanged.
    #[arg(long)]
    roundtrip: bool,
    /// Emit the summary as a JSON record instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Summary {
    file: String,
    categories: Vec<CategorySummary>,
    symbols: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    roundtrip: Option<bool>,
}

#[derive(Serialize)]
struct CategorySummary {
    launcher: String,
    name: String,
    symbols: usize,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let board = load_board(&cli.file)
        .with_context(|| format!("loading board {}", cli.file.display()))?;

    let roundtrip = if cli.roundtrip {
        verify_roundtrip(&board)?;
        Some(true)
    } else {
        None
    };

    let categories: Vec<CategorySummary> = board
        .top_level()
        .map(|(key, name)| CategorySummary {
            launcher: key.to_string(),
            name: name.to_string(),
            symbols: board.category(name).map_or(0, Category::len),
        })
        .collect();
    let symbols = categories.iter().map(|c| c.symbols).sum::<usize>();

    let summary = Summary {
        file: cli.file.display().to_string(),
        categories,
        symbols,
        roundtrip,
    };

    if cli.json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        print_text(&summary);
    }
    Ok(())
}

fn verify_roundtrip(board: &Board) -> Result<()> {
    let first = codec::serialize(board);
    let reparsed = codec::parse(&first).context("reparsing serialized board")?;
    let second = codec::serialize(&reparsed);
    if first != second {
        bail!("round-trip mismatch: serialized board is not a fixpoint");
    }
    Ok(())
}

fn print_text(summary: &Summary) {
    println!(
        "{}: {} categories, {} symbols",
        summary.file,
        summary.categories.len(),
        summary.symbols
    );
    for category in &summary.categories {
        println!(
            "  {} ({}) -> {} symbols",
            category.name, category.launcher, category.symbols
        );
    }
    if summary.roundtrip == Some(true) {
        println!("  round-trip: ok");
    }
}
