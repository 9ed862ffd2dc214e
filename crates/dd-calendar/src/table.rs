//! Output rows of the date dimension.

use chrono::NaiveDateTime;
use dd_time::{Date, Weekday};
use serde::{Serialize, Serializer};

use crate::day::{CalendarDay, YearMonth};
use crate::periods::{AdjacentPeriods, CurrentFlags, DayPeriods};
use crate::workdays::WorkdayContext;

/// Format of the `created` column.
pub const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

fn flag<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*value))
}

fn timestamp<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&value.format(CREATED_FORMAT))
}

/// English ordinal suffix of a day of month.
pub fn day_suffix(day: u8) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}

/// One day of the generated calendar with every output column.
///
/// Field order is column order; flags serialize as `0`/`1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarRow {
    /// `YYYYMMDD`.
    pub date_key: u32,
    /// The day itself.
    pub full_date: Date,
    /// Year.
    pub y: u16,
    /// Month number (1–12).
    pub m: u8,
    /// Day of month.
    pub d: u8,
    /// English ordinal suffix of `d` (`st`, `nd`, `rd`, `th`).
    pub day_suffix: &'static str,
    /// `YYYY-MM`.
    pub year_month: YearMonth,
    /// Day of week, 0 = Monday.
    pub wkd: u8,
    /// English weekday name.
    pub wkd_name: &'static str,
    /// English month name.
    pub month_name: &'static str,
    /// Quarter (1–4).
    pub q: u8,
    /// `YYYY-Qn`.
    pub year_quarter: String,
    /// Day of the year (1–366).
    pub day_year: u16,
    /// Custom week.
    pub w: u8,
    /// ISO 8601 week.
    pub iso_w: u8,
    /// Rank of `w` among the weeks touching the month.
    pub week_month: u8,
    /// Weekend day of the holiday calendar.
    #[serde(serialize_with = "flag")]
    pub is_weekend: bool,
    /// Not a weekend day.
    #[serde(serialize_with = "flag")]
    pub is_weekday: bool,
    /// Closest Monday–Friday before the day.
    pub previous_weekday: Date,
    /// Closest Monday–Friday after the day.
    pub next_weekday: Date,
    /// Public holiday.
    #[serde(serialize_with = "flag")]
    pub is_holiday: bool,
    /// Holiday name; empty when the day is not a holiday.
    pub holiday_name: Option<String>,
    /// Neither a weekend day nor a holiday.
    #[serde(serialize_with = "flag")]
    pub is_workday: bool,
    /// Id of the workday this day resolves to.
    pub workday_id: u32,
    /// Date of the resolved workday.
    pub workday_date: Date,
    /// Month ordinal of the resolved workday.
    pub workday_number: u32,
    /// Previous workday of the resolved workday.
    pub pwd: Date,
    /// Next workday of the resolved workday.
    pub nwd: Date,
    /// First workday of the month.
    pub first_workday_in_month: Date,
    /// Last workday of the month.
    pub last_workday_in_month: Date,
    /// First day of the year inside the range.
    pub first_day_year: Date,
    /// First day of the quarter inside the range.
    pub first_day_quarter: Date,
    /// First day of the month inside the range.
    pub first_day_month: Date,
    /// First day of the custom week inside the range.
    pub first_day_week: Date,
    /// Last day of the year inside the range.
    pub last_day_year: Date,
    /// Last day of the quarter inside the range.
    pub last_day_quarter: Date,
    /// Last day of the month inside the range.
    pub last_day_month: Date,
    /// Last day of the custom week inside the range.
    pub last_day_week: Date,
    /// The day before.
    pub previous_day: Date,
    /// The day after.
    pub next_day: Date,
    /// Month of the same day one month earlier.
    pub previous_year_month: YearMonth,
    /// Month of the same day one month later.
    pub next_year_month: YearMonth,
    /// Quarter of the same day three months earlier.
    pub previous_quarter: u8,
    /// Quarter of the same day three months later.
    pub next_quarter: u8,
    /// Year before.
    pub previous_year: u16,
    /// Year after.
    pub next_year: u16,
    /// The day is today.
    #[serde(serialize_with = "flag")]
    pub is_today: bool,
    /// The day is today's previous workday.
    #[serde(serialize_with = "flag")]
    pub is_report_day: bool,
    /// Same custom week and year as today.
    #[serde(serialize_with = "flag")]
    pub is_current_week: bool,
    /// Same month and year as today.
    #[serde(serialize_with = "flag")]
    pub is_current_month: bool,
    /// Same quarter and year as today.
    #[serde(serialize_with = "flag")]
    pub is_current_quarter: bool,
    /// Same year as today.
    #[serde(serialize_with = "flag")]
    pub is_current_year: bool,
    /// Generation timestamp, `YYYY-MM-DD HH:MM:SS.ffffff`.
    #[serde(serialize_with = "timestamp")]
    pub created: NaiveDateTime,
}

impl CalendarRow {
    pub(crate) fn assemble(
        day: &CalendarDay,
        workday: &WorkdayContext,
        periods: &DayPeriods,
        adjacent: &AdjacentPeriods,
        current: CurrentFlags,
        created: NaiveDateTime,
    ) -> Self {
        Self {
            date_key: day.date.date_key(),
            full_date: day.date,
            y: day.year,
            m: day.month,
            d: day.day,
            day_suffix: day_suffix(day.day),
            year_month: day.year_month(),
            wkd: day.weekday.index(),
            wkd_name: day.weekday.name(),
            month_name: day.date.month_of_year().long_name(),
            q: day.quarter,
            year_quarter: format!("{}-Q{}", day.year, day.quarter),
            day_year: day.date.day_of_year(),
            w: day.custom_week,
            iso_w: day.iso_week,
            week_month: periods.week_of_month,
            is_weekend: day.is_weekend,
            is_weekday: !day.is_weekend,
            previous_weekday: crate::periods::previous_weekday(day.date),
            next_weekday: crate::periods::next_weekday(day.date),
            is_holiday: day.is_holiday,
            holiday_name: day.holiday_name.clone(),
            is_workday: day.is_workday(),
            workday_id: workday.nearest_workday_id,
            workday_date: workday.nearest_workday_date,
            workday_number: workday.nearest_workday_ordinal,
            pwd: workday.previous_workday,
            nwd: workday.next_workday,
            first_workday_in_month: workday.first_workday_of_month,
            last_workday_in_month: workday.last_workday_of_month,
            first_day_year: periods.year.first,
            first_day_quarter: periods.quarter.first,
            first_day_month: periods.month.first,
            first_day_week: periods.week.first,
            last_day_year: periods.year.last,
            last_day_quarter: periods.quarter.last,
            last_day_month: periods.month.last,
            last_day_week: periods.week.last,
            previous_day: adjacent.previous_day,
            next_day: adjacent.next_day,
            previous_year_month: adjacent.previous_year_month,
            next_year_month: adjacent.next_year_month,
            previous_quarter: adjacent.previous_quarter,
            next_quarter: adjacent.next_quarter,
            previous_year: adjacent.previous_year,
            next_year: adjacent.next_year,
            is_today: current.is_today,
            is_report_day: current.is_report_day,
            is_current_week: current.is_current_week,
            is_current_month: current.is_current_month,
            is_current_quarter: current.is_current_quarter,
            is_current_year: current.is_current_year,
            created,
        }
    }

    /// Day of week.
    pub fn weekday(&self) -> Weekday {
        self.full_date.weekday()
    }
}

/// The generated calendar: one row per day, ordered by date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarTable {
    rows: Vec<CalendarRow>,
    calendar: String,
    today: Option<Date>,
    created: NaiveDateTime,
}

impl CalendarTable {
    pub(crate) fn new(
        rows: Vec<CalendarRow>,
        calendar: String,
        today: Option<Date>,
        created: NaiveDateTime,
    ) -> Self {
        Self {
            rows,
            calendar,
            today,
            created,
        }
    }

    /// All rows in date order.
    pub fn rows(&self) -> &[CalendarRow] {
        &self.rows
    }

    /// Number of days.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false` for a built table.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First day of the range.
    pub fn start(&self) -> Option<Date> {
        self.rows.first().map(|r| r.full_date)
    }

    /// Last day of the range.
    pub fn end(&self) -> Option<Date> {
        self.rows.last().map(|r| r.full_date)
    }

    /// The row of `date`, if it lies in the range.
    pub fn row(&self, date: Date) -> Option<&CalendarRow> {
        let index = usize::try_from(date - self.start()?).ok()?;
        self.rows.get(index)
    }

    /// Name of the holiday calendar used.
    pub fn calendar_name(&self) -> &str {
        &self.calendar
    }

    /// The "today" current-period flags were computed against.
    pub fn today(&self) -> Option<Date> {
        self.today
    }

    /// Generation timestamp shared by every row.
    pub fn created(&self) -> NaiveDateTime {
        self.created
    }

    /// Number of workdays in the range.
    pub fn workday_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_workday).count()
    }

    /// Rows flagged as holidays.
    pub fn holidays(&self) -> impl Iterator<Item = &CalendarRow> + '_ {
        self.rows.iter().filter(|r| r.is_holiday)
    }
}
