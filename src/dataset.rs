use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::error::DatasetError;

pub const DIFF_COLUMN: &str = "diff";

/// One user's row. Columns other than `diff` are ignored.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Record {
    /// Elapsed time since the reference action, e.g. `"12 days 03:00:00"`
    pub diff: String,
}

impl Record {
    pub fn new(diff: impl Into<String>) -> Self {
        Self { diff: diff.into() }
    }
}

pub fn load_records(path: &Path) -> Result<Vec<Record>, DatasetError> {
    let start_time = Instant::now();
    info!(action = "start", component = "dataset_loader", path = ?path, "Loading dataset");

    let file = File::open(path).map_err(|source| DatasetError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .from_reader(file);

    let headers = reader.headers().map_err(|e| read_error(path, e))?;
    if !headers.iter().any(|header| header == DIFF_COLUMN) {
        return Err(DatasetError::MissingColumn {
            path: path.to_path_buf(),
            column: DIFF_COLUMN,
        });
    }

    let records = reader
        .deserialize()
        .collect::<Result<Vec<Record>, _>>()
        .map_err(|e| read_error(path, e))?;

    info!(
        action = "complete",
        component = "dataset_loader",
        record_count = records.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Dataset loaded"
    );
    Ok(records)
}

// I/O failures surface from the reader only once the first bytes are pulled,
// e.g. when the path is a directory.
fn read_error(path: &Path, source: csv::Error) -> DatasetError {
    if !source.is_io_error() {
        return DatasetError::Csv {
            path: path.to_path_buf(),
            source,
        };
    }

    match source.into_kind() {
        csv::ErrorKind::Io(source) => DatasetError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
        _ => unreachable!("csv guarantees ErrorKind::Io when is_io_error is true"),
    }
}
