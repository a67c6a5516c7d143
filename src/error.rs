use std::path::PathBuf;

/// A `diff` value that carries the `days` marker but no integer before it.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("malformed duration {text:?}: expected an integer before \"days\"")]
    Malformed { text: String },
}

/// Everything that can stop a single dataset from producing a report.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("cannot read dataset {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset {path:?} is missing required column {column:?}")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("invalid CSV in {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    Duration(#[from] DurationError),
}
