use std::time::Instant;
use tracing::{error, info};

use crate::config::{Config, DatasetSpec};
use crate::dataset::load_records;
use crate::error::DatasetError;
use crate::report::print_retention_table;
use crate::retention::{calculate_retention, RetentionReport};

/// What happened to one dataset in a run.
#[derive(Debug)]
pub struct DatasetOutcome {
    pub name: &'static str,
    pub label: &'static str,
    pub result: Result<RetentionReport, DatasetError>,
}

impl DatasetOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

pub fn analyze_dataset(spec: &DatasetSpec<'_>) -> Result<RetentionReport, DatasetError> {
    let start_time = Instant::now();
    info!(action = "start", component = "retention", dataset = spec.name, path = ?spec.path, "Starting retention analysis");

    let records = load_records(spec.path)?;
    let report = calculate_retention(&records)?;

    info!(
        action = "complete",
        component = "retention",
        dataset = spec.name,
        total_users = report.total_users,
        is_empty = report.is_empty,
        duration_ms = start_time.elapsed().as_millis(),
        "Retention analysis completed"
    );
    Ok(report)
}

/// Processes every configured dataset in order, printing each report as it
/// is produced. A failing dataset is recorded and the run moves on, unless
/// `fail_fast` is set.
pub fn run(config: &Config, fail_fast: bool) -> Vec<DatasetOutcome> {
    let total_start_time = Instant::now();
    let mut outcomes = Vec::new();

    for spec in config.datasets() {
        let result = analyze_dataset(&spec);

        match &result {
            Ok(report) => print_retention_table(report, spec.label),
            Err(e) => {
                error!(action = "fail", component = "retention", dataset = spec.name, error = %e, "Dataset failed")
            }
        }

        let failed = result.is_err();
        outcomes.push(DatasetOutcome {
            name: spec.name,
            label: spec.label,
            result,
        });

        if failed && fail_fast {
            break;
        }
    }

    info!(
        action = "complete",
        component = "run",
        datasets = outcomes.len(),
        failures = outcomes.iter().filter(|o| !o.is_ok()).count(),
        duration_ms = total_start_time.elapsed().as_millis(),
        "Run finished"
    );
    outcomes
}
