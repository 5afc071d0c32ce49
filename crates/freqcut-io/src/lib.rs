//! CSV input layer for freqcut
//!
//! Reads `(query, instances)` rows from a file path or a standard input
//! stream into a [`freqcut_core::FreqTable`], preserving row order. The
//! input needs a header row with `query` and `instances` columns; extra
//! columns are ignored.

mod error;
mod reader;

pub use error::{Error, Result};
pub use reader::{read_from, read_path};
