//! Calendar days and their enumeration.
//!
//! [`enumerate_days`] produces the ordered, gap-free day sequence the rest
//! of the engine consumes.  Each [`CalendarDay`] starts with the attributes
//! that need no knowledge of other rows; the holiday resolver and the
//! workday assigner fill in the rest.

use dd_core::errors::{Error, Result};
use dd_time::{custom_week, Date, Weekday};

/// A calendar month identified by year and month number.
///
/// Formats as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    /// Year.
    pub year: u16,
    /// Month number (1–12).
    pub month: u8,
}

impl YearMonth {
    /// The month containing `date`.
    pub fn of(date: Date) -> Self {
        let (year, month, _) = date.ymd();
        Self { year, month }
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl serde::Serialize for YearMonth {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One row of the date dimension before period navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    /// The day itself (unique key).
    pub date: Date,
    /// Year.
    pub year: u16,
    /// Month number (1–12).
    pub month: u8,
    /// Day of month.
    pub day: u8,
    /// Day of week.
    pub weekday: Weekday,
    /// ISO 8601 week number.
    pub iso_week: u8,
    /// Week number that never jumps backward inside a year.
    pub custom_week: u8,
    /// Quarter (1–4).
    pub quarter: u8,
    /// Weekend day of the holiday calendar; Saturday or Sunday until the
    /// holiday resolver classifies the day.
    pub is_weekend: bool,
    /// Set by the holiday resolver.
    pub is_holiday: bool,
    /// Name of the holiday, if any.
    pub holiday_name: Option<String>,
    /// Dense 1-based rank among workdays; present iff the day is a workday.
    pub workday_id: Option<u32>,
    /// 1-based rank among the workdays of the same month; present iff the day is a workday.
    pub workday_ordinal_in_month: Option<u32>,
}

impl CalendarDay {
    /// Create a day with its row-local attributes; holiday and workday
    /// attributes start empty.
    pub fn new(date: Date) -> Self {
        let (year, month, day) = date.ymd();
        let weekday = date.weekday();
        Self {
            date,
            year,
            month,
            day,
            weekday,
            iso_week: date.iso_week().1,
            custom_week: custom_week(date),
            quarter: date.quarter(),
            is_weekend: weekday.is_weekend(),
            is_holiday: false,
            holiday_name: None,
            workday_id: None,
            workday_ordinal_in_month: None,
        }
    }

    /// Neither a weekend day nor a holiday.
    pub fn is_workday(&self) -> bool {
        !self.is_weekend && !self.is_holiday
    }

    /// The month this day belongs to.
    pub fn year_month(&self) -> YearMonth {
        YearMonth {
            year: self.year,
            month: self.month,
        }
    }
}

/// Enumerate every day in `[start, end]`.
pub fn enumerate_days(start: Date, end: Date) -> Result<Vec<CalendarDay>> {
    if start > end {
        return Err(Error::InvalidRange(format!("start {start} is after end {end}")));
    }
    let mut days = Vec::with_capacity((end - start + 1) as usize);
    let mut date = start;
    loop {
        days.push(CalendarDay::new(date));
        if date == end {
            break;
        }
        date += 1;
    }
    Ok(days)
}

/// Check that `days` is non-empty, strictly ordered and has no gaps.
pub fn check_sequence(days: &[CalendarDay]) -> Result<()> {
    if days.is_empty() {
        return Err(Error::InvalidRange("empty day sequence".into()));
    }
    for pair in days.windows(2) {
        if pair[1].date - pair[0].date != 1 {
            return Err(Error::InvalidRange(format!(
                "day sequence is not contiguous between {} and {}",
                pair[0].date, pair[1].date
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn enumerate_inclusive() {
        let days = enumerate_days(date(2024, 2, 27), date(2024, 3, 2)).unwrap();
        let dates: Vec<_> = days.iter().map(|d| d.date.to_string()).collect();
        assert_eq!(
            dates,
            ["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01", "2024-03-02"]
        );
        assert!(check_sequence(&days).is_ok());
    }

    #[test]
    fn single_day_and_reversed_range() {
        assert_eq!(enumerate_days(date(2024, 1, 1), date(2024, 1, 1)).unwrap().len(), 1);
        assert!(matches!(
            enumerate_days(date(2024, 1, 2), date(2024, 1, 1)),
            Err(Error::InvalidRange(_))
        ));
    }

    #[test]
    fn row_local_attributes() {
        let day = CalendarDay::new(date(2024, 12, 30));
        assert_eq!(day.weekday, Weekday::Monday);
        assert_eq!(day.iso_week, 1);
        assert_eq!(day.custom_week, 53);
        assert_eq!(day.quarter, 4);
        assert!(!day.is_weekend);
        assert!(day.is_workday());
        assert_eq!(day.year_month().to_string(), "2024-12");
    }

    #[test]
    fn gaps_are_rejected() {
        let mut days = enumerate_days(date(2024, 1, 1), date(2024, 1, 5)).unwrap();
        days.remove(2);
        assert!(matches!(check_sequence(&days), Err(Error::InvalidRange(_))));
        assert!(check_sequence(&[]).is_err());
    }
}
