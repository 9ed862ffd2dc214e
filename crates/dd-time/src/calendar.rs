//! `Calendar` trait and the weekends-only calendar.
//!
//! A calendar knows which days are weekends and which rules make a day a
//! public holiday.  A *workday* is a day that is neither.

use crate::date::Date;
use crate::holiday::HolidayTable;

/// A regional holiday calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Czech Republic"`).
    fn name(&self) -> &str;

    /// The holiday rules observed by this calendar.
    fn holidays(&self) -> &HolidayTable;

    /// Return `true` if `date` is a weekend according to this calendar.
    ///
    /// Most calendars consider Saturday and Sunday as weekends.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Name of the first holiday rule that applies to `date`, if any.
    ///
    /// Ambiguity between rules is reported by the holiday resolver, not here.
    fn holiday_name(&self, date: Date) -> Option<&str> {
        self.holidays().matching(date).next()
    }

    /// Return `true` if some holiday rule applies to `date`.
    fn is_holiday(&self, date: Date) -> bool {
        self.holiday_name(date).is_some()
    }

    /// Return `true` if `date` is neither a weekend nor a holiday.
    fn is_workday(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }
}

/// A calendar that treats only Saturdays and Sundays as non-working days,
/// with no holidays.
#[derive(Debug, Clone, Default)]
pub struct WeekendsOnly {
    table: HolidayTable,
}

impl WeekendsOnly {
    /// Create the calendar.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn holidays(&self) -> &HolidayTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn weekends_only_saturday() {
        let cal = WeekendsOnly::new();
        // 2023-09-02 is a Saturday
        assert!(!cal.is_workday(date(2023, 9, 2)));
        assert!(cal.is_weekend(date(2023, 9, 2)));
        assert!(cal.is_workday(date(2023, 9, 4)));
    }

    #[test]
    fn weekends_only_has_no_holidays() {
        let cal = WeekendsOnly::new();
        assert!(!cal.is_holiday(date(2023, 12, 25)));
        assert_eq!(cal.holiday_name(date(2023, 1, 1)), None);
    }
}
