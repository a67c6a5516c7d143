use crate::retention::RetentionReport;

const HEADERS: [&str; 2] = ["Metric", "Value"];

pub fn retention_rows(report: &RetentionReport) -> Vec<[String; 2]> {
    let mut rows = vec![["Total Users".to_string(), report.total_users.to_string()]];

    for cohort in &report.cohorts {
        rows.push([
            format!("Retention D{}", cohort.horizon_days),
            cohort.retained.to_string(),
        ]);
    }

    for cohort in &report.cohorts {
        rows.push([
            format!("Percentage Retention D{}", cohort.horizon_days),
            format!("{:.2}%", cohort.percentage),
        ]);
    }

    rows
}

/// Renders the header line and a centred, boxed two-column table.
pub fn render_retention_table(report: &RetentionReport, label: &str) -> String {
    let rows = retention_rows(report);

    let widths: [usize; 2] = std::array::from_fn(|col| {
        rows.iter()
            .map(|row| row[col].chars().count())
            .chain(std::iter::once(HEADERS[col].len()))
            .max()
            .unwrap_or(0)
    });

    let rule = format!(
        "+{}+{}+",
        "-".repeat(widths[0] + 2),
        "-".repeat(widths[1] + 2)
    );
    let line = |cells: [&str; 2]| {
        format!(
            "| {} | {} |",
            center(cells[0], widths[0]),
            center(cells[1], widths[1])
        )
    };

    let mut out = format!("\n{} Retention Table:\n", label);
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&line(HEADERS));
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    for row in &rows {
        out.push_str(&line([&row[0], &row[1]]));
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');

    if report.is_empty {
        out.push_str("(no users in dataset)\n");
    }

    out
}

pub fn print_retention_table(report: &RetentionReport, label: &str) {
    print!("{}", render_retention_table(report, label));
}

fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.chars().count());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_fixed_order() {
        let report = RetentionReport::from_days(&[10, 0, 100]);
        let labels: Vec<String> = retention_rows(&report)
            .into_iter()
            .map(|[metric, _]| metric)
            .collect();

        assert_eq!(
            labels,
            vec![
                "Total Users",
                "Retention D1",
                "Retention D7",
                "Retention D30",
                "Retention D60",
                "Retention D90",
                "Percentage Retention D1",
                "Percentage Retention D7",
                "Percentage Retention D30",
                "Percentage Retention D60",
                "Percentage Retention D90",
            ]
        );
    }

    #[test]
    fn percentages_have_two_decimals() {
        let report = RetentionReport::from_days(&[10, 0, 100]);
        let rows = retention_rows(&report);

        assert_eq!(rows[0][1], "3");
        assert_eq!(rows[1][1], "2");
        assert_eq!(rows[6][1], "66.67%");
        assert_eq!(rows[8][1], "33.33%");
    }

    #[test]
    fn table_has_header_and_borders() {
        let report = RetentionReport::from_days(&[2, 0]);
        let table = render_retention_table(&report, "Views Dataset");
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Views Dataset Retention Table:");
        assert!(lines[2].starts_with("+-"));
        assert!(lines[3].contains("Metric") && lines[3].contains("Value"));
        assert!(table.contains("| Percentage Retention D1  |"));
        assert!(table.contains("50.00%"));
        assert!(!table.contains("no users"));

        let width = lines[2].len();
        assert!(lines[2..].iter().all(|l| l.len() == width));
    }

    #[test]
    fn empty_report_is_flagged() {
        let report = RetentionReport::from_days(&[]);
        let table = render_retention_table(&report, "Friends Dataset");

        assert!(table.contains("0.00%"));
        assert!(table.ends_with("(no users in dataset)\n"));
    }

    #[test]
    fn center_splits_padding() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("ab", 5), " ab  ");
        assert_eq!(center("abcdef", 3), "abcdef");
    }
}
