//! Concrete calendar implementations.

/// User-defined holiday calendar.
pub mod bespoke_calendar;

/// Czech Republic public holidays.
pub mod czech_republic;

pub use bespoke_calendar::BespokeCalendar;
pub use czech_republic::CzechRepublic;
