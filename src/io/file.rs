use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{cell_date, MilestoneIndex};

/// One exported month and the milestone labels it carries.
#[derive(Debug, Serialize)]
struct TimelineEntry {
    month_index: u32,
    date: NaiveDate,
    labels: Vec<String>,
}

/// Export the computed timeline as pretty-printed JSON.
///
/// Write-only: the app never reads a timeline back — the index is always
/// recomputed from the selected date. Returns the number of months written.
pub fn export_json(
    index: &MilestoneIndex,
    start: NaiveDate,
    path: &Path,
) -> Result<usize, String> {
    let entries: Vec<TimelineEntry> = index
        .iter()
        .map(|(month, labels)| TimelineEntry {
            month_index: month,
            date: cell_date(start, month),
            labels: labels.to_vec(),
        })
        .collect();

    let json = serde_json::to_string_pretty(&entries).map_err(|e| e.to_string())?;
    std::fs::write(path, json).map_err(|e| e.to_string())?;
    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exported_json_mirrors_the_index() {
        let start = NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date");
        let index = MilestoneIndex::compute(start);
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("milestones.json");

        let months = export_json(&index, start, &path).expect("export succeeds");
        assert_eq!(months, index.month_count());

        let contents = std::fs::read_to_string(&path).expect("file readable");
        let parsed: serde_json::Value = serde_json::from_str(&contents).expect("valid JSON");
        let entries = parsed.as_array().expect("top-level array");
        assert_eq!(entries.len(), months);

        let first = &entries[0];
        assert_eq!(first["month_index"], 0);
        assert!(first["labels"].as_array().is_some_and(|l| !l.is_empty()));
    }
}
