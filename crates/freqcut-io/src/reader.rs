//! CSV readers producing [`FreqTable`]s

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use freqcut_core::{FreqTable, QueryFreq};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Columns every input must carry; anything else is ignored.
const REQUIRED_COLUMNS: [&str; 2] = ["query", "instances"];

#[derive(Debug, Deserialize)]
struct Row {
    query: String,
    instances: u64,
}

/// Read a frequency table from a file, or from stdin when no path is given
pub fn read_path(path: Option<&Path>) -> Result<FreqTable> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| Error::Open {
                path: path.to_owned(),
                source,
            })?;
            read_from(file)
        }
        None => read_from(io::stdin().lock()),
    }
}

/// Read a frequency table from any reader yielding CSV with a header row
///
/// The header must contain `query` and `instances` columns; this is checked
/// before any row is parsed so that schema problems surface immediately.
/// Row order defines item order, and every row is materialized before the
/// table is returned.
pub fn read_from<R: Read>(rdr: R) -> Result<FreqTable> {
    let mut reader = csv::Reader::from_reader(rdr);

    let headers = reader.headers()?.clone();
    for name in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == name) {
            return Err(Error::MissingColumn { name });
        }
    }

    let mut items = Vec::new();
    for row in reader.deserialize::<Row>() {
        let row = row?;
        items.push(QueryFreq::new(row.query, row.instances));
    }

    tracing::debug!(rows = items.len(), "loaded frequency table");
    Ok(FreqTable::new(items))
}
