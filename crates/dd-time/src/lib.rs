//! # dd-time
//!
//! Date, week-numbering, Easter and holiday-calendar types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and the weekends-only calendar.
pub mod calendar;

/// Concrete calendar implementations (country specific, bespoke).
pub mod calendars;

/// `Date` type.
pub mod date;

/// Easter Sunday and the feasts derived from it.
pub mod easter;

/// Fixed-date and Easter-relative holiday rules.
pub mod holiday;

/// `Month` — month of the year.
pub mod month;

/// ISO and custom week numbering.
pub mod week;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, WeekendsOnly};
pub use calendars::{BespokeCalendar, CzechRepublic};
pub use date::Date;
pub use easter::{easter_monday, easter_sunday, good_friday};
pub use holiday::{EasterHoliday, FixedHoliday, HolidayTable};
pub use month::Month;
pub use week::custom_week;
pub use weekday::Weekday;
