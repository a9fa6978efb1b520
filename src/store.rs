//! File boundary for board catalogs.
//!
//! Loads read the whole file and hand off to the codec. Saves serialize to a
//! named temp file in the destination directory and persist it over the
//! target, so a failed save leaves the previous file intact rather than
//! truncated.

use crate::board::Board;
use crate::codec;
use crate::error::{BoardError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Load and parse a board file.
///
/// Fails with `FileAccess` when the file is unreadable and `MalformedLine`
/// when its contents do not parse.
pub fn load_board(path: &Path) -> Result<Board> {
    let text = fs::read_to_string(path).map_err(|source| BoardError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    codec::parse(&text)
}

/// Serialize the board and atomically replace the file at `path`.
pub fn save_board(board: &Board, path: &Path) -> Result<()> {
    let text = codec::serialize(board);
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let file_access = |source: io::Error| BoardError::FileAccess {
        path: path.to_path_buf(),
        source,
    };
    let mut tmp = NamedTempFile::new_in(parent).map_err(file_access)?;
    tmp.write_all(text.as_bytes()).map_err(file_access)?;
    tmp.persist(path).map_err(|err| file_access(err.error))?;
    Ok(())
}
