//! Week numbering.
//!
//! The date dimension carries two week numbers: the ISO 8601 week
//! ([`Date::iso_week`]) and a *custom* week that never jumps backward at
//! the turn of the year.  ISO assigns week 1 to the last days of some
//! Decembers and week 52/53 to the first days of some Januaries; the
//! custom week keeps counting in December and starts at 1 on January 1.

use crate::date::Date;

/// Return the custom week number of `date`.
///
/// * A December day in ISO week 1 continues the numbering of the preceding
///   days of that December.
/// * In a year whose January 1 lies in ISO week 52/53, the leading January
///   days form week 1 and every later week is the ISO week plus one.
/// * Otherwise the ISO week is used unchanged.
///
/// # Example
/// ```
/// use dd_time::{custom_week, Date};
/// // ISO puts 2024-12-30 into week 1 of 2025.
/// assert_eq!(custom_week(Date::from_ymd(2024, 12, 30).unwrap()), 53);
/// // ISO puts 2021-01-01 into week 53 of 2020.
/// assert_eq!(custom_week(Date::from_ymd(2021, 1, 1).unwrap()), 1);
/// ```
pub fn custom_week(date: Date) -> u8 {
    let (year, month, _) = date.ymd();
    let shifted = first_iso_week(year) > 50;
    let (_, iso) = date.iso_week();

    if month == 12 && iso == 1 {
        let bump = if shifted { 2 } else { 1 };
        let mut previous = date - 1;
        loop {
            let week = previous.iso_week().1 + bump;
            if week >= 50 {
                return week;
            }
            previous -= 1;
        }
    }

    if shifted {
        if iso > 50 && month == 1 {
            1
        } else {
            iso + 1
        }
    } else {
        iso
    }
}

/// ISO week number of January 1 of `year`.
fn first_iso_week(year: u16) -> u8 {
    Date::from_ymd_unchecked(year, 1, 1).iso_week().1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn plain_year_follows_iso() {
        // 2024-01-01 is a Monday, ISO week 1.
        assert_eq!(custom_week(date(2024, 1, 1)), 1);
        assert_eq!(custom_week(date(2024, 1, 7)), 1);
        assert_eq!(custom_week(date(2024, 1, 8)), 2);
        assert_eq!(custom_week(date(2024, 12, 29)), 52);
    }

    #[test]
    fn december_days_in_iso_week_one_continue_numbering() {
        assert_eq!(custom_week(date(2024, 12, 30)), 53);
        assert_eq!(custom_week(date(2024, 12, 31)), 53);
        // 2019-12-30 (Monday) is ISO week 1 of 2020.
        assert_eq!(custom_week(date(2019, 12, 30)), 53);
    }

    #[test]
    fn year_starting_in_last_iso_week_is_shifted() {
        // 2021-01-01 (Friday) is ISO week 53 of 2020.
        assert_eq!(custom_week(date(2021, 1, 1)), 1);
        assert_eq!(custom_week(date(2021, 1, 3)), 1);
        assert_eq!(custom_week(date(2021, 1, 4)), 2);
        assert_eq!(custom_week(date(2021, 12, 31)), 53);
    }

    #[test]
    fn shifted_leap_year_ending_in_iso_week_one() {
        // 2040 starts on a Sunday (ISO 52) and ends on a Monday (ISO 1 of 2041).
        assert_eq!(custom_week(date(2040, 1, 1)), 1);
        assert_eq!(custom_week(date(2040, 1, 2)), 2);
        assert_eq!(custom_week(date(2040, 12, 30)), 53);
        assert_eq!(custom_week(date(2040, 12, 31)), 54);
    }
}
