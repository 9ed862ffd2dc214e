//! # dd-calendar
//!
//! The date-dimension engine: holiday resolution, dense workday numbering,
//! period navigation and the output table.
//!
//! ```text
//! enumerate_days ─▶ HolidayResolver ─▶ WorkdayAssigner ─▶ PeriodNavigator ─▶ CalendarTable
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `CalendarBuilder` — runs a generation end to end.
pub mod builder;

/// `CalendarDay`, `YearMonth` and day enumeration.
pub mod day;

/// CSV export.
pub mod export;

/// Holiday resolution against a day range.
pub mod holidays;

/// Period bounds, adjacent periods and current-period flags.
pub mod periods;

/// Output rows and the generated table.
pub mod table;

/// Dense workday numbering and workday contexts.
pub mod workdays;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use builder::CalendarBuilder;
pub use day::{check_sequence, enumerate_days, CalendarDay, YearMonth};
pub use export::{write_csv, write_csv_path, ExportError};
pub use holidays::{HolidayMap, HolidayResolver};
pub use periods::{
    next_weekday, previous_weekday, AdjacentPeriods, CurrentFlags, CurrentPeriod, DayPeriods,
    PeriodBounds, PeriodNavigator,
};
pub use table::{day_suffix, CalendarRow, CalendarTable};
pub use workdays::{MonthBounds, Workday, WorkdayAssigner, WorkdayContext, WorkdaySequence};
