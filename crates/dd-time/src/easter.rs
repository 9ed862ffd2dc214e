//! Easter calculator.
//!
//! Easter Sunday is computed with Gauss's algorithm, including the two
//! exceptional corrections for April 26 and April 25.  Good Friday and
//! Easter Monday are derived from it.

use crate::date::Date;

/// Return the date of Easter Sunday in `year` (Gregorian computus).
///
/// The result always lies between March 22 and April 25 inclusive.
///
/// # Example
/// ```
/// use dd_time::{easter_sunday, Date};
/// assert_eq!(easter_sunday(2024), Date::from_ymd(2024, 3, 31).unwrap());
/// ```
pub fn easter_sunday(year: u16) -> Date {
    let y = year as i32;
    let a = y % 19;
    let b = y % 4;
    let c = y % 7;
    let k = y / 100;
    let p = (13 + 8 * k) / 25;
    let q = k / 4;
    let m = (15 - p + k - q).rem_euclid(30);
    let n = (4 + k - q).rem_euclid(7);
    let d = (19 * a + m) % 30;
    let e = (2 * b + 4 * c + 6 * d + n) % 7;

    let (mut day, mut month) = (22 + d + e, 3);
    if day > 31 {
        day = d + e - 9;
        month = 4;
    }
    if d == 29 && e == 6 {
        day = 19;
    }
    if d == 28 && e == 6 && (11 * m + 11) % 30 < 19 {
        day = 18;
    }
    Date::from_ymd_unchecked(year, month, day as u8)
}

/// Return Good Friday (Easter Sunday − 2 days).
pub fn good_friday(year: u16) -> Date {
    easter_sunday(year) - 2
}

/// Return Easter Monday (Easter Sunday + 1 day).
pub fn easter_monday(year: u16) -> Date {
    easter_sunday(year) + 1
}
