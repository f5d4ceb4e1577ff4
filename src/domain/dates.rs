// src/domain/dates.rs

use chrono::{DateTime, NaiveDate, Utc};

/// Whole days between the denial date and `today`, in either direction.
pub fn days_open(denial_date: NaiveDate, today: NaiveDate) -> i64 {
    (today - denial_date).num_days().abs()
}

/// A deadline is a calendar date read as UTC midnight; once that instant has
/// passed the appeal is overdue. No deadline means never overdue.
pub fn is_overdue(deadline: Option<NaiveDate>, now: DateTime<Utc>) -> bool {
    match deadline.and_then(|d| d.and_hms_opt(0, 0, 0)) {
        Some(start) => start.and_utc() < now,
        None => false,
    }
}

/// `Jan 15, 2024`
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// `January 15, 2024`
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

pub fn parse_form_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn days_open_counts_whole_days() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        for n in [0, 1, 7, 45, 400] {
            assert_eq!(days_open(today - Duration::days(n), today), n);
        }
    }

    #[test]
    fn future_denial_date_is_still_positive() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(days_open(today + Duration::days(3), today), 3);
    }

    #[test]
    fn overdue_only_when_deadline_has_passed() {
        let now = Utc.with_ymd_and_hms(2024, 1, 30, 12, 0, 0).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2024, 1, 29);
        let tomorrow = NaiveDate::from_ymd_opt(2024, 1, 31);

        assert!(is_overdue(yesterday, now));
        assert!(!is_overdue(tomorrow, now));
        assert!(!is_overdue(None, now));
    }

    #[test]
    fn deadline_exactly_now_is_not_overdue() {
        let now = Utc.with_ymd_and_hms(2024, 1, 30, 0, 0, 0).unwrap();
        assert!(!is_overdue(NaiveDate::from_ymd_opt(2024, 1, 30), now));
    }

    #[test]
    fn formats_dates_for_tables_and_letters() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(short_date(d), "Jan 05, 2024");
        assert_eq!(long_date(d), "January 05, 2024");
        assert_eq!(parse_form_date(" 2024-01-05 "), Some(d));
        assert_eq!(parse_form_date("01/05/2024"), None);
    }
}
