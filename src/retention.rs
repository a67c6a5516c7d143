use crate::dataset::Record;
use crate::duration::parse_days;
use crate::error::DurationError;

/// Day thresholds at which retention is measured, ascending.
pub const RETENTION_HORIZONS: [u32; 5] = [1, 7, 30, 60, 90];

#[derive(Debug, Clone, PartialEq)]
pub struct CohortRetention {
    pub horizon_days: u32,
    /// Users whose duration is at least `horizon_days`
    pub retained: usize,
    /// `100 * retained / total_users`, or 0 for an empty dataset
    pub percentage: f64,
}

/// Retention figures for one dataset.
///
/// `cohorts` follows the order of [`RETENTION_HORIZONS`]. `is_empty` tells a
/// zero-user dataset (where every percentage is defined as 0) apart from
/// one where nobody was retained.
#[derive(Debug, Clone, PartialEq)]
pub struct RetentionReport {
    pub total_users: usize,
    pub cohorts: Vec<CohortRetention>,
    pub is_empty: bool,
}

impl RetentionReport {
    pub fn from_days(days: &[i64]) -> Self {
        let total_users = days.len();

        let cohorts = RETENTION_HORIZONS
            .iter()
            .map(|&horizon_days| {
                let retained = days
                    .iter()
                    .filter(|&&d| d >= i64::from(horizon_days))
                    .count();
                CohortRetention {
                    horizon_days,
                    retained,
                    percentage: percentage(retained, total_users),
                }
            })
            .collect();

        Self {
            total_users,
            cohorts,
            is_empty: total_users == 0,
        }
    }

    pub fn cohort(&self, horizon_days: u32) -> Option<&CohortRetention> {
        self.cohorts.iter().find(|c| c.horizon_days == horizon_days)
    }
}

fn percentage(retained: usize, total_users: usize) -> f64 {
    if total_users == 0 {
        return 0.0;
    }
    retained as f64 / total_users as f64 * 100.0
}

/// Parses every record's `diff` and builds the report.
///
/// A single malformed duration fails the whole calculation.
pub fn calculate_retention(records: &[Record]) -> Result<RetentionReport, DurationError> {
    let days = records
        .iter()
        .map(|record| parse_days(&record.diff))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RetentionReport::from_days(&days))
}
