use std::path::Path;

use chrono::NaiveDate;

use crate::model::span::format_date;
use crate::model::{cell_date, MilestoneIndex};

/// Export the computed timeline to a semicolon-delimited CSV file.
///
/// Columns: Month Index ; Date ; Milestone — one row per label, months
/// ascending. Returns the number of rows written.
pub fn export_csv(
    index: &MilestoneIndex,
    start: NaiveDate,
    path: &Path,
) -> Result<usize, String> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_path(path)
        .map_err(|e| format!("Failed to create CSV file: {}", e))?;

    wtr.write_record(["Month Index", "Date", "Milestone"])
        .map_err(|e| format!("Failed to write header: {}", e))?;

    let mut rows = 0usize;
    for (month, labels) in index.iter() {
        let date = format_date(cell_date(start, month));
        for label in labels {
            wtr.write_record([month.to_string().as_str(), date.as_str(), label.as_str()])
                .map_err(|e| format!("Failed to write row for month {}: {}", month, e))?;
            rows += 1;
        }
    }

    wtr.flush().map_err(|e| format!("Failed to flush CSV: {}", e))?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_one_row_per_milestone_label() {
        let start = NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date");
        let index = MilestoneIndex::compute(start);
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("milestones.csv");

        let rows = export_csv(&index, start, &path).expect("export succeeds");
        assert_eq!(rows, index.total_labels());

        let contents = std::fs::read_to_string(&path).expect("file readable");
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("Month Index;Date;Milestone"));
        assert_eq!(contents.lines().count(), rows + 1);
        assert!(contents.contains("42 days alive (the answer!) (Feb 12, 2000)"));
    }
}
