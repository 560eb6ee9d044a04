use std::collections::BTreeMap;

use chrono::{Months, NaiveDate, NaiveDateTime, NaiveTime};

use super::definition::MILESTONE_TABLE;
use super::span::{format_date, whole_months_between};

/// Milestone labels grouped by whole calendar months elapsed since the
/// start instant.
///
/// Built fresh on every start-date change; nothing is cached or shared
/// between invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MilestoneIndex {
    by_month: BTreeMap<u32, Vec<String>>,
}

impl MilestoneIndex {
    /// Compute the full milestone set for a start date, anchored at midnight.
    pub fn compute(start: NaiveDate) -> Self {
        Self::compute_at(start.and_time(NaiveTime::MIN))
    }

    /// Compute the full milestone set for a start instant.
    ///
    /// One pass over the definition table: calendar-add each span, then
    /// group the rendered label under the whole-month offset of its
    /// target. An entry whose target precedes the start is discarded
    /// silently; no entry in the shipped table can trigger that.
    pub fn compute_at(start: NaiveDateTime) -> Self {
        let mut by_month: BTreeMap<u32, Vec<String>> = BTreeMap::new();
        for entry in MILESTONE_TABLE {
            let Some(target) = entry.span.add_to(start) else {
                continue;
            };
            let offset = whole_months_between(start, target);
            if offset < 0 {
                continue;
            }
            by_month
                .entry(offset as u32)
                .or_default()
                .push(format!("{} ({})", entry.label, format_date(target.date())));
        }
        Self { by_month }
    }

    /// Labels grouped at the given month offset, in table order.
    pub fn labels_for(&self, month_offset: u32) -> &[String] {
        self.by_month
            .get(&month_offset)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_milestone(&self, month_offset: u32) -> bool {
        !self.labels_for(month_offset).is_empty()
    }

    /// Number of distinct months carrying at least one milestone.
    pub fn month_count(&self) -> usize {
        self.by_month.len()
    }

    /// Total rendered labels across all months.
    pub fn total_labels(&self) -> usize {
        self.by_month.values().map(Vec::len).sum()
    }

    /// Iterate `(month offset, labels)` in ascending month order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[String])> {
        self.by_month.iter().map(|(k, v)| (*k, v.as_slice()))
    }
}

/// Absolute calendar date of the grid cell `month_offset` months after
/// `start`. Falls back to `start` at the far end of the representable
/// range.
pub fn cell_date(start: NaiveDate, month_offset: u32) -> NaiveDate {
    start
        .checked_add_months(Months::new(month_offset))
        .unwrap_or(start)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn millennium() -> NaiveDate {
        NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date")
    }

    #[test]
    fn recomputing_yields_a_structurally_identical_index() {
        let first = MilestoneIndex::compute(millennium());
        let second = MilestoneIndex::compute(millennium());
        assert_eq!(first, second);
    }

    #[test]
    fn every_table_entry_lands_in_exactly_one_month() {
        let index = MilestoneIndex::compute(millennium());
        assert_eq!(index.total_labels(), MILESTONE_TABLE.len());
    }

    #[test]
    fn forty_two_days_from_the_millennium() {
        let index = MilestoneIndex::compute(millennium());
        let labels = index.labels_for(1);
        assert!(
            labels
                .iter()
                .any(|l| l == "42 days alive (the answer!) (Feb 12, 2000)"),
            "month 1 was {:?}",
            labels
        );
    }

    #[test]
    fn one_year_from_the_millennium_lands_at_month_twelve() {
        let index = MilestoneIndex::compute(millennium());
        let labels = index.labels_for(12);
        assert!(
            labels.iter().any(|l| l == "1 year alive (Jan 1, 2001)"),
            "month 12 was {:?}",
            labels
        );
    }

    #[test]
    fn same_month_labels_accumulate_in_table_order() {
        // From 2000-01-01, both five-year day-count entries land in month 59
        // (Dec 30 and Dec 31, 2004).
        let index = MilestoneIndex::compute(millennium());
        let labels = index.labels_for(59);
        let first = labels
            .iter()
            .position(|l| l.starts_with("5 years alive (1,825 days)"));
        let second = labels
            .iter()
            .position(|l| l.starts_with("5 years alive (1,826 days)"));
        let (first, second) = (
            first.expect("1,825-day entry present"),
            second.expect("1,826-day entry present"),
        );
        assert!(first < second, "table order not preserved: {:?}", labels);
    }

    #[test]
    fn second_granularity_spans_respect_the_start_time_of_day() {
        let late_evening = NaiveDate::from_ymd_opt(2000, 1, 1)
            .expect("valid date")
            .and_hms_opt(23, 45, 0)
            .expect("valid time");
        let index = MilestoneIndex::compute_at(late_evening);
        // 1,000 seconds later is shortly after midnight on Jan 2.
        assert!(
            index
                .labels_for(0)
                .iter()
                .any(|l| l == "1,000 seconds alive (Jan 2, 2000)"),
            "month 0 was {:?}",
            index.labels_for(0)
        );
    }

    #[test]
    fn empty_months_report_no_milestones() {
        let index = MilestoneIndex::compute(millennium());
        // Month 7 of year 0 carries nothing for this start date.
        assert!(!index.has_milestone(7));
        assert!(index.labels_for(7).is_empty());
    }

    #[test]
    fn cell_dates_advance_by_calendar_months() {
        let start = NaiveDate::from_ymd_opt(2000, 1, 31).expect("valid date");
        // Adding one month to Jan 31 clamps to the end of February.
        assert_eq!(
            cell_date(start, 1),
            NaiveDate::from_ymd_opt(2000, 2, 29).expect("valid date")
        );
        assert_eq!(
            cell_date(start, 12),
            NaiveDate::from_ymd_opt(2001, 1, 31).expect("valid date")
        );
    }

    #[test]
    fn leap_day_start_produces_a_complete_index() {
        let leap = NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid date");
        let index = MilestoneIndex::compute(leap);
        assert_eq!(index.total_labels(), MILESTONE_TABLE.len());
        // The 1-year milestone clamps to Feb 28, 2025 — exactly 12 months out.
        assert!(
            index
                .labels_for(12)
                .iter()
                .any(|l| l == "1 year alive (Feb 28, 2025)"),
            "month 12 was {:?}",
            index.labels_for(12)
        );
    }
}
