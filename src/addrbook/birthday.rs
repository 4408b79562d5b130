//! Countdown to the next anniversary of a date.
//!
//! February 29 has no same-day analogue in common years; there the anniversary
//! falls on March 1.

use chrono::{Datelike, Local, NaiveDate};

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Days from `today` until the next anniversary of `date`.
///
/// Returns `0` when `today` is the anniversary itself.
pub fn days_until_next(date: NaiveDate, today: NaiveDate) -> i64 {
    let mut candidate = anniversary(date, today.year());
    if candidate < today {
        candidate = anniversary(date, today.year() + 1);
    }
    (candidate - today).num_days()
}

/// The anniversary of `date` in `year`.
pub fn anniversary(date: NaiveDate, year: i32) -> NaiveDate {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn zero_on_the_day() {
        assert_eq!(days_until_next(ymd(2000, 1, 1), ymd(2026, 1, 1)), 0);
    }

    #[test]
    fn counts_forward_within_the_year() {
        assert_eq!(days_until_next(ymd(1990, 5, 1), ymd(2026, 4, 1)), 30);
    }

    #[test]
    fn rolls_over_to_next_year_once_passed() {
        assert_eq!(days_until_next(ymd(2000, 1, 1), ymd(2026, 1, 2)), 364);
        assert_eq!(days_until_next(ymd(2000, 1, 1), ymd(2026, 12, 31)), 1);
    }

    #[test]
    fn leap_year_rollover_counts_the_extra_day() {
        // 2028 is a leap year, so Mar 1 2027 -> Mar 1 2028 is 366 days.
        assert_eq!(days_until_next(ymd(1990, 3, 1), ymd(2027, 3, 2)), 365);
        assert_eq!(days_until_next(ymd(1990, 2, 28), ymd(2027, 3, 1)), 364);
    }

    #[test]
    fn feb_29_falls_on_march_1_in_common_years() {
        let leapling = ymd(2000, 2, 29);
        assert_eq!(anniversary(leapling, 2026), ymd(2026, 3, 1));
        assert_eq!(anniversary(leapling, 2028), ymd(2028, 2, 29));

        assert_eq!(days_until_next(leapling, ymd(2026, 2, 28)), 1);
        assert_eq!(days_until_next(leapling, ymd(2026, 3, 1)), 0);
        // Passed in 2027 (Mar 1), next is Feb 29 2028.
        assert_eq!(days_until_next(leapling, ymd(2027, 3, 2)), 364);
        assert_eq!(days_until_next(leapling, ymd(2028, 2, 29)), 0);
    }
}
