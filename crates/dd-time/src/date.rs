//! `Date` type.
//!
//! Dates are represented as a serial number of days in the proleptic
//! Gregorian calendar.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 0001 (a Monday).
//! * The valid date range is 0001-01-01 to 9999-12-31.

use std::str::FromStr;

use crate::month::Month;
use crate::weekday::Weekday;
use dd_core::errors::{Error, Result};

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

/// Serial number of 1970-01-01.
const UNIX_EPOCH_SERIAL: i32 = 719_163;

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(3_652_059);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if the serial lies outside `[MIN, MAX]`.
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} out of range")));
        }
        Ok(d)
    }

    /// Create a date from year (1–9999), month (1–12), and day-of-month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range [1, 9999]")));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from components already known to be valid.
    pub(crate) fn from_ymd_unchecked(year: u16, month: u8, day: u8) -> Self {
        debug_assert!(
            (1..=9999).contains(&year)
                && (1..=12).contains(&month)
                && day >= 1
                && day <= days_in_month(year, month),
            "invalid date {year}-{month:02}-{day:02}"
        );
        Date(serial_from_ymd(year, month, day))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the month as an enum.
    pub fn month_of_year(&self) -> Month {
        Month::from_number(self.month()).expect("month() is always in 1..=12")
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)` in one conversion.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, _, _) = ymd_from_serial(self.0);
        (self.0 - serial_from_ymd(y, 1, 1) + 1) as u16
    }

    /// Return the quarter (1–4).
    pub fn quarter(&self) -> u8 {
        (self.month() - 1) / 3 + 1
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 0001-01-01 is a Monday (ordinal 1).
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    /// Return `true` if the date falls on a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }

    /// Return the ISO 8601 `(week-numbering year, week number)`.
    ///
    /// The week containing the year's first Thursday is week 1, so the first
    /// days of January may belong to week 52/53 of the previous year and the
    /// last days of December to week 1 of the next.
    pub fn iso_week(&self) -> (u16, u8) {
        let thursday = self.0 + 4 - self.weekday().ordinal() as i32;
        let (y, _, _) = ymd_from_serial(thursday);
        let doy = thursday - serial_from_ymd(y, 1, 1);
        (y, (doy / 7 + 1) as u8)
    }

    /// Return the date as the integer `YYYYMMDD`.
    pub fn date_key(&self) -> u32 {
        let (y, m, d) = ymd_from_serial(self.0);
        y as u32 * 10_000 + m as u32 * 100 + d as u32
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self
            .0
            .checked_add(n)
            .ok_or_else(|| Error::Date("date arithmetic overflow".into()))?;
        Date::from_serial(serial)
            .map_err(|_| Error::Date(format!("date arithmetic: {self} + {n} days out of range")))
    }

    /// Advance by `n` months, clamping the day to the end of the target month.
    ///
    /// `2024-01-31 + 1 month` is `2024-02-29`.
    pub fn add_months(self, n: i32) -> Result<Self> {
        let (y, m, d) = ymd_from_serial(self.0);
        let total = y as i32 * 12 + (m as i32 - 1) + n;
        let new_y = total.div_euclid(12);
        let new_m = (total.rem_euclid(12) + 1) as u8;
        if !(1..=9999).contains(&new_y) {
            return Err(Error::Date(format!("year {new_y} out of range")));
        }
        let new_y = new_y as u16;
        let new_d = d.min(days_in_month(new_y, new_m));
        Ok(Date(serial_from_ymd(new_y, new_m, new_d)))
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = self.add_days(-rhs).expect("date subtraction underflow");
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::Date(format!("cannot parse \"{s}\" as YYYY-MM-DD"));
        let mut parts = s.trim().splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };
        if y.len() != 4 || m.len() != 2 || d.len() != 2 {
            return Err(invalid());
        }
        let y: u16 = y.parse().map_err(|_| invalid())?;
        let m: u8 = m.parse().map_err(|_| invalid())?;
        let d: u8 = d.parse().map_err(|_| invalid())?;
        Date::from_ymd(y, m, d)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "chrono")]
impl From<Date> for chrono::NaiveDate {
    fn from(date: Date) -> Self {
        chrono::NaiveDate::from_num_days_from_ce_opt(date.0)
            .expect("every Date is representable as NaiveDate")
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(date: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        Date::from_serial(date.num_days_from_ce())
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a serial number.
///
/// Counts days in 400-year eras starting from March 1 so that the leap day
/// falls at the end of each computational year.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32 - i32::from(month <= 2);
    let m = month as i32;
    let d = day as i32;
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468 + UNIX_EPOCH_SERIAL
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let z = serial - UNIX_EPOCH_SERIAL + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i32::from(m <= 2);
    (y as u16, m as u8, d as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
