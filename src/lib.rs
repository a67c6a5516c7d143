pub mod args;
pub mod config;
pub mod dataset;
pub mod duration;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod retention;
pub mod utils;

pub use args::Args;
pub use config::Config;
pub use dataset::{load_records, Record};
pub use duration::parse_days;
pub use error::{DatasetError, DurationError};
pub use pipeline::{analyze_dataset, run, DatasetOutcome};
pub use report::{print_retention_table, render_retention_table};
pub use retention::{calculate_retention, CohortRetention, RetentionReport, RETENTION_HORIZONS};
