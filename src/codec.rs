//! Line-oriented board file format.
//!
//! Two line shapes, one entry per line. `KEY TEXT` declares a category whose
//! top-level launcher is `KEY` and whose display name is `TEXT`; `>KEY TEXT`
//! adds a leaf symbol to the most recently declared category. Lines split on
//! the first space only, so TEXT may contain further spaces. [`serialize`] is
//! the exact inverse of [`parse`] under insertion order.

use crate::board::Board;
use crate::error::{BoardError, Result};

/// Parse board text into a [`Board`] focused at the top level.
///
/// The parse is fail-fast: the first malformed line aborts the load with
/// `MalformedLine`. Malformed means no space on the line, an empty KEY, or an
/// item line arriving before any category has been declared.
pub fn parse(text: &str) -> Result<Board> {
    let mut board = Board::new();
    let mut in_category = false;
    for (idx, line) in text.lines().enumerate() {
        let malformed = || BoardError::MalformedLine {
            line: idx + 1,
            content: line.to_string(),
        };
        if let Some(item) = line.strip_prefix('>') {
            if !in_category {
                return Err(malformed());
            }
            let (key, utterance) = item.split_once(' ').ok_or_else(malformed)?;
            board.add_item(key, utterance).map_err(|_| malformed())?;
        } else {
            let (key, name) = line.split_once(' ').ok_or_else(malformed)?;
            board.reset();
            board.add_item(key, name).map_err(|_| malformed())?;
            // Enter the category so following item lines land inside it.
            board.select(key)?;
            in_category = true;
        }
    }
    board.reset();
    Ok(board)
}

/// Serialize a board back to its file format, in declaration order.
pub fn serialize(board: &Board) -> String {
    let mut out = String::new();
    for (key, name) in board.top_level() {
        out.push_str(key.as_str());
        out.push(' ');
        out.push_str(name);
        out.push('\n');
        if let Some(category) = board.category(name) {
            for (leaf, utterance) in category.iter() {
                out.push('>');
                out.push_str(leaf.as_str());
                out.push(' ');
                out.push_str(utterance);
                out.push('\n');
            }
        }
    }
    out
}
