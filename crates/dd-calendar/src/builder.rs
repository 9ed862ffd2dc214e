//! Calendar builder.
//!
//! Orchestrates a generation run: enumerate the days of the range, resolve
//! holidays, assign workdays, aggregate periods and assemble the output
//! rows.  A run either yields a complete, consistent table or fails before
//! any row is produced.

use chrono::{Local, NaiveDateTime};
use dd_core::{ensure, fail};
use dd_core::errors::{Error, Result};
use dd_time::{Calendar, CzechRepublic, Date};
use tracing::{debug, info, warn};

use crate::day::enumerate_days;
use crate::holidays::HolidayResolver;
use crate::periods::{AdjacentPeriods, CurrentPeriod, PeriodNavigator};
use crate::table::{CalendarRow, CalendarTable};
use crate::workdays::WorkdayAssigner;

/// Earliest year a range may start in.
pub const MIN_YEAR: u16 = 2;
/// Latest year a range may end in.
pub const MAX_YEAR: u16 = 9998;

/// Builds a [`CalendarTable`] for a date range.
///
/// Defaults: the Czech Republic holiday calendar, no "today" (every
/// current-period flag is zero) and the local clock for `created`.
///
/// # Example
/// ```
/// use dd_calendar::CalendarBuilder;
/// use dd_time::Date;
///
/// let table = CalendarBuilder::for_years(2024, 1)
///     .unwrap()
///     .with_today(Date::from_ymd(2024, 4, 2).unwrap())
///     .build()
///     .unwrap();
/// assert_eq!(table.len(), 366);
/// ```
#[derive(Debug)]
pub struct CalendarBuilder {
    start: Date,
    end: Date,
    calendar: Box<dyn Calendar>,
    today: Option<Date>,
    created: Option<NaiveDateTime>,
}

impl CalendarBuilder {
    /// Create a builder for the inclusive range `[start, end]`.
    pub fn new(start: Date, end: Date) -> Self {
        Self {
            start,
            end,
            calendar: Box::new(CzechRepublic),
            today: None,
            created: None,
        }
    }

    /// Create a builder covering `years` whole years from January 1 of
    /// `start_year`.
    pub fn for_years(start_year: u16, years: u16) -> Result<Self> {
        ensure!(years >= 1, "number of years must be positive");
        let end_year = u32::from(start_year) + u32::from(years);
        ensure!(
            end_year <= u32::from(MAX_YEAR) + 1,
            "{years} years from {start_year} end after year {MAX_YEAR}"
        );
        let start = Date::from_ymd(start_year, 1, 1)?;
        let end = Date::from_ymd(end_year as u16, 1, 1)?.add_days(-1)?;
        Ok(Self::new(start, end))
    }

    /// Set the holiday calendar.
    pub fn with_calendar(mut self, calendar: impl Calendar + 'static) -> Self {
        self.calendar = Box::new(calendar);
        self
    }

    /// Set an already boxed holiday calendar.
    pub fn with_boxed_calendar(mut self, calendar: Box<dyn Calendar>) -> Self {
        self.calendar = calendar;
        self
    }

    /// Set the day the current-period flags are computed against.
    pub fn with_today(mut self, today: Date) -> Self {
        self.today = Some(today);
        self
    }

    /// Set the `created` timestamp written to every row.
    pub fn with_created(mut self, created: NaiveDateTime) -> Self {
        self.created = Some(created);
        self
    }

    /// First day of the range.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last day of the range.
    pub fn end(&self) -> Date {
        self.end
    }

    fn validate(&self) -> Result<()> {
        if self.start > self.end {
            return Err(Error::InvalidRange(format!(
                "start {} is after end {}",
                self.start, self.end
            )));
        }
        if self.start.year() < MIN_YEAR || self.end.year() > MAX_YEAR {
            return Err(Error::InvalidRange(format!(
                "range {}..={} leaves years [{MIN_YEAR}, {MAX_YEAR}]",
                self.start, self.end
            )));
        }
        Ok(())
    }

    /// Generate the table.
    ///
    /// # Errors
    /// * [`Error::InvalidRange`] for an empty or out-of-bounds range.
    /// * [`Error::AmbiguousHoliday`] if two holiday rules hit the same day.
    /// * [`Error::NoWorkdays`] / [`Error::NoWorkdaysInMonth`] if the range
    ///   or one of its months has no workday.
    pub fn build(self) -> Result<CalendarTable> {
        self.validate()?;
        let calendar = self.calendar.as_ref();

        let mut days = enumerate_days(self.start, self.end)?;
        let holidays = HolidayResolver::new(calendar).classify(&mut days, self.end)?;
        let workdays = WorkdayAssigner::assign(&mut days)?;
        let navigator = PeriodNavigator::new(&days);

        let current = self.today.and_then(|today| {
            let current = CurrentPeriod::locate(today, &days, workdays.contexts());
            if current.is_none() {
                warn!(
                    %today,
                    start = %self.start,
                    end = %self.end,
                    "today is outside the generated range; current-period flags are zero"
                );
            }
            current
        });
        if let Some(current) = &current {
            debug!(today = %current.today(), report_day = %current.report_day(), "located today");
        }

        let created = self.created.unwrap_or_else(|| Local::now().naive_local());
        let rows = days
            .iter()
            .zip(workdays.contexts())
            .map(|(day, context)| {
                let Some(periods) = navigator.periods(day) else {
                    fail!("no period bounds for {}", day.date);
                };
                let adjacent = AdjacentPeriods::of(day.date)?;
                let flags = current.map(|c| c.flags(day)).unwrap_or_default();
                Ok(CalendarRow::assemble(
                    day, context, &periods, &adjacent, flags, created,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        info!(
            calendar = calendar.name(),
            start = %self.start,
            end = %self.end,
            days = rows.len(),
            workdays = workdays.len(),
            holidays = holidays.len(),
            "built calendar"
        );
        Ok(CalendarTable::new(
            rows,
            calendar.name().to_owned(),
            self.today,
            created,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dd_time::WeekendsOnly;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn for_years_covers_whole_years() {
        let builder = CalendarBuilder::for_years(2023, 2).unwrap();
        assert_eq!(builder.start(), date(2023, 1, 1));
        assert_eq!(builder.end(), date(2024, 12, 31));
        assert!(CalendarBuilder::for_years(2023, 0).is_err());
        assert!(CalendarBuilder::for_years(9998, 1).is_ok());
        assert!(CalendarBuilder::for_years(9998, 2).is_err());
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        let err = CalendarBuilder::new(date(2024, 2, 1), date(2024, 1, 1))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRange(_)));
        let err = CalendarBuilder::new(date(1, 1, 1), date(1, 12, 31))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRange(_)));
    }

    #[test]
    fn today_outside_range_clears_flags() {
        let table = CalendarBuilder::new(date(2024, 1, 1), date(2024, 1, 31))
            .with_calendar(WeekendsOnly::new())
            .with_today(date(2025, 6, 1))
            .build()
            .unwrap();
        assert!(table.rows().iter().all(|r| !r.is_today
            && !r.is_report_day
            && !r.is_current_week
            && !r.is_current_month
            && !r.is_current_quarter
            && !r.is_current_year));
        assert_eq!(table.calendar_name(), "Weekends Only");
    }
}
