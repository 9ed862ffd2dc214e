//! # datedim
//!
//! Date-dimension ("calendar table") generation: one row per day with
//! holiday flags, dense workday numbering, period bounds and
//! current-period flags.
//!
//! This crate is a **façade** that re-exports the workspace crates, and
//! ships the `datedim` command-line tool.
//!
//! ```rust
//! use datedim::calendar::CalendarBuilder;
//! use datedim::time::Date;
//!
//! let table = CalendarBuilder::new(
//!     Date::from_ymd(2024, 1, 1).unwrap(),
//!     Date::from_ymd(2024, 1, 31).unwrap(),
//! )
//! .build()
//! .unwrap();
//! assert_eq!(table.workday_count(), 22);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and macros.
pub use dd_core as core;

/// Dates, week numbering, Easter and holiday calendars.
pub use dd_time as time;

/// Holiday resolution, workday numbering, period navigation and export.
pub use dd_calendar as calendar;
