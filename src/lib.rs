//! Two-level AAC symbol board engine.
//!
//! An AAC (Augmentative and Alternative Communication) board is a catalog of
//! selectable symbols, each identified by an image reference. At the top
//! level every symbol launches a category; inside a category every symbol
//! speaks an utterance. This crate owns the mapping engine and its
//! line-oriented file format; rendering images and playing audio belong to
//! the presentation collaborator driving [`Board`].
//!
//! - [`board`] — identity newtypes, ordered tables, categories, and the
//!   navigation state machine.
//! - [`codec`] — the `KEY TEXT` / `>KEY TEXT` line format.
//! - [`store`] — file load/save with atomic replacement.
//! - [`error`] — the typed failure taxonomy.

pub mod board;
pub mod codec;
pub mod error;
pub mod store;

pub use board::{Board, Category, CategoryName, Page, SymbolKey, SymbolTable};
pub use error::{BoardError, Result};
pub use store::{load_board, save_board};
