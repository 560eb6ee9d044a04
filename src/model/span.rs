use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};

/// A fixed offset from a start instant: one unit plus an integer magnitude.
///
/// Seconds through weeks are exact elapsed time. Years are calendar years:
/// adding one year to Feb 29 lands on Feb 28 of the following (non-leap)
/// year rather than shifting by a literal day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Seconds(i64),
    Minutes(i64),
    Hours(i64),
    Days(i64),
    Weeks(i64),
    Years(u32),
}

impl Span {
    /// Apply this span to `start`.
    ///
    /// Returns `None` when the target would fall outside chrono's
    /// representable date range.
    pub fn add_to(&self, start: NaiveDateTime) -> Option<NaiveDateTime> {
        match *self {
            Span::Seconds(n) => start.checked_add_signed(chrono::Duration::seconds(n)),
            Span::Minutes(n) => start.checked_add_signed(chrono::Duration::minutes(n)),
            Span::Hours(n) => start.checked_add_signed(chrono::Duration::hours(n)),
            Span::Days(n) => start.checked_add_signed(chrono::Duration::days(n)),
            Span::Weeks(n) => start.checked_add_signed(chrono::Duration::weeks(n)),
            Span::Years(n) => start.checked_add_months(Months::new(n.checked_mul(12)?)),
        }
    }

    /// True when the span cannot move an instant backwards in time.
    pub fn is_non_negative(&self) -> bool {
        match *self {
            Span::Seconds(n)
            | Span::Minutes(n)
            | Span::Hours(n)
            | Span::Days(n)
            | Span::Weeks(n) => n >= 0,
            Span::Years(_) => true,
        }
    }
}

/// Count of complete calendar months between `start` and `end`, truncated
/// toward zero: the largest `n` for which `start + n months` (with
/// end-of-month clamping) does not pass `end`.
///
/// Clamping makes a short month still close the period — Feb 29 plus
/// twelve months lands on Feb 28, so Feb 28 completes that year. Never
/// derived by dividing elapsed days by 30.
pub fn whole_months_between(start: NaiveDateTime, end: NaiveDateTime) -> i32 {
    if end < start {
        return -whole_months_between(end, start);
    }
    let mut months =
        (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
    // The raw count can overshoot by at most one; the clamped re-add decides.
    match start.checked_add_months(Months::new(months as u32)) {
        Some(candidate) if candidate > end => months -= 1,
        _ => {}
    }
    months
}

/// The fixed human-readable date format used across the app ("Feb 12, 2000").
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .expect("valid date")
            .and_time(NaiveTime::MIN)
    }

    #[test]
    fn adding_a_year_to_leap_day_clamps_to_feb_28() {
        let target = Span::Years(1).add_to(dt(2024, 2, 29)).expect("in range");
        assert_eq!(target, dt(2025, 2, 28));
    }

    #[test]
    fn weeks_are_exact_seven_day_blocks() {
        let target = Span::Weeks(2).add_to(dt(2000, 1, 1)).expect("in range");
        assert_eq!(target, dt(2000, 1, 15));
    }

    #[test]
    fn seconds_carry_across_midnight() {
        let start = NaiveDate::from_ymd_opt(2000, 1, 1)
            .expect("valid date")
            .and_hms_opt(23, 59, 50)
            .expect("valid time");
        let target = Span::Seconds(1000).add_to(start).expect("in range");
        assert_eq!(target.date(), NaiveDate::from_ymd_opt(2000, 1, 2).expect("valid date"));
    }

    #[test]
    fn months_only_count_once_the_boundary_day_is_reached() {
        // Jan 31 → Mar 1 crosses one full month, not two.
        assert_eq!(whole_months_between(dt(2000, 1, 31), dt(2000, 3, 1)), 1);
        // Jan 1 → Feb 12: one full month elapsed.
        assert_eq!(whole_months_between(dt(2000, 1, 1), dt(2000, 2, 12)), 1);
        // Same month, later day: no boundary crossed yet.
        assert_eq!(whole_months_between(dt(2000, 1, 1), dt(2000, 1, 28)), 0);
        // Next month but before the boundary day (2000 is a leap year, so
        // Jan 31 + 1 month clamps to Feb 29).
        assert_eq!(whole_months_between(dt(2000, 1, 31), dt(2000, 2, 28)), 0);
        assert_eq!(whole_months_between(dt(2000, 1, 31), dt(2000, 2, 29)), 1);
    }

    #[test]
    fn clamped_month_ends_complete_the_period() {
        // Feb 29 + 12 months clamps to Feb 28, which therefore closes the year.
        assert_eq!(whole_months_between(dt(2024, 2, 29), dt(2025, 2, 28)), 12);
        assert_eq!(whole_months_between(dt(2024, 2, 29), dt(2025, 2, 27)), 11);
    }

    #[test]
    fn month_difference_respects_time_of_day() {
        let start = NaiveDate::from_ymd_opt(2000, 1, 15)
            .expect("valid date")
            .and_hms_opt(12, 0, 0)
            .expect("valid time");
        let just_before = NaiveDate::from_ymd_opt(2000, 2, 15)
            .expect("valid date")
            .and_hms_opt(11, 0, 0)
            .expect("valid time");
        let on_boundary = NaiveDate::from_ymd_opt(2000, 2, 15)
            .expect("valid date")
            .and_hms_opt(12, 0, 0)
            .expect("valid time");
        assert_eq!(whole_months_between(start, just_before), 0);
        assert_eq!(whole_months_between(start, on_boundary), 1);
    }

    #[test]
    fn month_difference_truncates_toward_zero_in_both_directions() {
        assert_eq!(whole_months_between(dt(2000, 3, 1), dt(2000, 1, 31)), -1);
        assert_eq!(whole_months_between(dt(2000, 1, 31), dt(2000, 1, 1)), 0);
    }

    #[test]
    fn date_format_matches_display_contract() {
        let date = NaiveDate::from_ymd_opt(2000, 2, 12).expect("valid date");
        assert_eq!(format_date(date), "Feb 12, 2000");
        let single_digit = NaiveDate::from_ymd_opt(2001, 1, 1).expect("valid date");
        assert_eq!(format_date(single_digit), "Jan 1, 2001");
    }
}
