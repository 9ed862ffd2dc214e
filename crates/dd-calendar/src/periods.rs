//! Period navigator.
//!
//! First/last day of the year, quarter, month and week a day belongs to,
//! pointers to the adjacent day/month/quarter/year, and the "current
//! period" flags relative to an injected today.
//!
//! Period bounds are aggregates over the generated range: a range that
//! starts mid-year reports its own first day as the year's first day.

use std::collections::BTreeMap;

use dd_core::errors::Result;
use dd_time::{Date, Weekday};

use crate::day::{CalendarDay, YearMonth};
use crate::workdays::WorkdayContext;

/// First and last day of a period, restricted to the generated range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodBounds {
    /// Earliest day of the period in range.
    pub first: Date,
    /// Latest day of the period in range.
    pub last: Date,
}

impl PeriodBounds {
    fn extend(&mut self, date: Date) {
        self.first = self.first.min(date);
        self.last = self.last.max(date);
    }
}

/// Bounds of every period a single day belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayPeriods {
    /// Calendar year.
    pub year: PeriodBounds,
    /// Quarter of the year.
    pub quarter: PeriodBounds,
    /// Calendar month.
    pub month: PeriodBounds,
    /// Custom week of the year.
    pub week: PeriodBounds,
    /// 1-based rank of the custom week among the weeks touching the month.
    pub week_of_month: u8,
}

/// Per-period aggregates over a day range.
#[derive(Debug, Clone, Default)]
pub struct PeriodNavigator {
    years: BTreeMap<u16, PeriodBounds>,
    quarters: BTreeMap<(u16, u8), PeriodBounds>,
    months: BTreeMap<YearMonth, PeriodBounds>,
    weeks: BTreeMap<(u16, u8), PeriodBounds>,
    week_ranks: BTreeMap<(YearMonth, u8), u8>,
}

fn record<K: Ord>(map: &mut BTreeMap<K, PeriodBounds>, key: K, date: Date) {
    map.entry(key)
        .and_modify(|b| b.extend(date))
        .or_insert(PeriodBounds {
            first: date,
            last: date,
        });
}

impl PeriodNavigator {
    /// Aggregate the periods of `days`.
    pub fn new(days: &[CalendarDay]) -> Self {
        let mut nav = Self::default();
        for day in days {
            record(&mut nav.years, day.year, day.date);
            record(&mut nav.quarters, (day.year, day.quarter), day.date);
            record(&mut nav.months, day.year_month(), day.date);
            record(&mut nav.weeks, (day.year, day.custom_week), day.date);
            nav.week_ranks.insert((day.year_month(), day.custom_week), 0);
        }

        // Dense rank of the week number inside each month; the map is
        // ordered by (month, week) so a running counter suffices.
        let mut current = None;
        let mut rank = 0;
        for ((ym, _), slot) in nav.week_ranks.iter_mut() {
            if current != Some(*ym) {
                current = Some(*ym);
                rank = 0;
            }
            rank += 1;
            *slot = rank;
        }
        nav
    }

    /// Bounds of `year`.
    pub fn year(&self, year: u16) -> Option<PeriodBounds> {
        self.years.get(&year).copied()
    }

    /// Bounds of quarter `quarter` of `year`.
    pub fn quarter(&self, year: u16, quarter: u8) -> Option<PeriodBounds> {
        self.quarters.get(&(year, quarter)).copied()
    }

    /// Bounds of `month`.
    pub fn month(&self, month: YearMonth) -> Option<PeriodBounds> {
        self.months.get(&month).copied()
    }

    /// Bounds of custom week `week` of `year`.
    pub fn week(&self, year: u16, week: u8) -> Option<PeriodBounds> {
        self.weeks.get(&(year, week)).copied()
    }

    /// All period bounds of `day`, or `None` if it was not part of the
    /// aggregated range.
    pub fn periods(&self, day: &CalendarDay) -> Option<DayPeriods> {
        let ym = day.year_month();
        Some(DayPeriods {
            year: self.year(day.year)?,
            quarter: self.quarter(day.year, day.quarter)?,
            month: self.month(ym)?,
            week: self.week(day.year, day.custom_week)?,
            week_of_month: *self.week_ranks.get(&(ym, day.custom_week))?,
        })
    }
}

/// The closest Monday–Friday before `date`; holidays are not skipped.
pub fn previous_weekday(date: Date) -> Date {
    match date.weekday() {
        Weekday::Monday => date - 3,
        Weekday::Sunday => date - 2,
        _ => date - 1,
    }
}

/// The closest Monday–Friday after `date`; holidays are not skipped.
pub fn next_weekday(date: Date) -> Date {
    match date.weekday() {
        Weekday::Friday => date + 3,
        Weekday::Saturday => date + 2,
        _ => date + 1,
    }
}

/// Pointers from a day to its neighbouring periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacentPeriods {
    /// The day before.
    pub previous_day: Date,
    /// The day after.
    pub next_day: Date,
    /// The month before.
    pub previous_year_month: YearMonth,
    /// The month after.
    pub next_year_month: YearMonth,
    /// Quarter number (1–4) three months back.
    pub previous_quarter: u8,
    /// Quarter number (1–4) three months ahead.
    pub next_quarter: u8,
    /// The year before.
    pub previous_year: u16,
    /// The year after.
    pub next_year: u16,
}

impl AdjacentPeriods {
    /// Compute the neighbours of `date`.
    ///
    /// Fails only when a neighbour leaves the representable date range.
    pub fn of(date: Date) -> Result<Self> {
        Ok(Self {
            previous_day: date.add_days(-1)?,
            next_day: date.add_days(1)?,
            previous_year_month: YearMonth::of(date.add_months(-1)?),
            next_year_month: YearMonth::of(date.add_months(1)?),
            previous_quarter: date.add_months(-3)?.quarter(),
            next_quarter: date.add_months(3)?.quarter(),
            previous_year: date.add_months(-12)?.year(),
            next_year: date.add_months(12)?.year(),
        })
    }
}

/// "Current period" flags of one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurrentFlags {
    /// The day is today.
    pub is_today: bool,
    /// The day is today's previous workday.
    ///
    /// Only that workday itself is flagged.  Weekend days and holidays that
    /// resolve to it are not, so this is not the same as matching rows on
    /// `workday_date == pwd`: for today = 2024-04-02 that match would flag
    /// four rows (2024-03-28 through 2024-03-31), this flag flags one.
    pub is_report_day: bool,
    /// Same year and custom week as today.
    pub is_current_week: bool,
    /// Same year and month as today.
    pub is_current_month: bool,
    /// Same year and quarter as today.
    pub is_current_quarter: bool,
    /// Same year as today.
    pub is_current_year: bool,
}

/// Today's position inside a generated range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentPeriod {
    today: Date,
    report_day: Date,
    year: u16,
    month: u8,
    quarter: u8,
    week: u8,
}

impl CurrentPeriod {
    /// Locate `today` among `days`.
    ///
    /// `contexts` must be the workday contexts of `days`, index for index.
    /// Returns `None` when today lies outside the range; every flag is then
    /// zero.
    pub fn locate(today: Date, days: &[CalendarDay], contexts: &[WorkdayContext]) -> Option<Self> {
        let start = days.first()?.date;
        if today < start {
            return None;
        }
        let index = usize::try_from(today - start).ok()?;
        let day = days.get(index)?;
        let context = contexts.get(index)?;
        Some(Self {
            today,
            report_day: context.previous_workday,
            year: day.year,
            month: day.month,
            quarter: day.quarter,
            week: day.custom_week,
        })
    }

    /// Today.
    pub fn today(&self) -> Date {
        self.today
    }

    /// The workday before today.
    pub fn report_day(&self) -> Date {
        self.report_day
    }

    /// Flags of `day` relative to today.
    pub fn flags(&self, day: &CalendarDay) -> CurrentFlags {
        let same_year = day.year == self.year;
        CurrentFlags {
            is_today: day.date == self.today,
            is_report_day: day.date == self.report_day,
            is_current_week: same_year && day.custom_week == self.week,
            is_current_month: same_year && day.month == self.month,
            is_current_quarter: same_year && day.quarter == self.quarter,
            is_current_year: same_year,
        }
    }
}
