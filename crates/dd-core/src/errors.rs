//! Error types for datedim.
//!
//! All fallible operations of the core return [`Result`].  Input-shape
//! problems (bad dates, broken day sequences) and the two configuration
//! failures of the workday engine (months without workdays, ambiguous
//! holiday rules) each get a dedicated variant so callers can tell them
//! apart without parsing messages.

use thiserror::Error;

/// The top-level error type used throughout datedim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error (invalid components, arithmetic out of range, parse failure).
    #[error("date error: {0}")]
    Date(String),

    /// The day sequence handed to the core is empty, unordered, gapped or out of bounds.
    #[error("invalid date range: {0}")]
    InvalidRange(String),

    /// The generated range contains no working day at all.
    #[error("the date range contains no workday")]
    NoWorkdays,

    /// A calendar month inside the range contains no working day.
    #[error("month {year}-{month:02} contains no workday")]
    NoWorkdaysInMonth {
        /// Year of the offending month.
        year: u16,
        /// Month number (1–12).
        month: u8,
    },

    /// Two holiday rules resolved to the same calendar day.
    #[error("ambiguous holiday on {date}: both \"{first}\" and \"{second}\" apply")]
    AmbiguousHoliday {
        /// The day in ISO format.
        date: String,
        /// Name of the first matching rule.
        first: String,
        /// Name of the second matching rule.
        second: String,
    },

    /// Two rules of a holiday table target the same day with overlapping validity.
    #[error("holiday rules \"{first}\" and \"{second}\" overlap on {target}")]
    OverlappingHolidayRules {
        /// Human-readable rule target, e.g. `05-08` or `Easter+1`.
        target: String,
        /// Name of the first rule.
        first: String,
        /// Name of the second rule.
        second: String,
    },
}

/// Shorthand `Result` type used throughout datedim.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use dd_core::{ensure, errors::Error};
/// fn positive_span(years: u16) -> dd_core::errors::Result<u16> {
///     ensure!(years > 0, "number of years must be positive, got {years}");
///     Ok(years)
/// }
/// assert!(positive_span(1).is_ok());
/// assert!(matches!(positive_span(0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use dd_core::{fail, errors::Error};
/// fn always_err() -> dd_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_without_workdays_message() {
        let err = Error::NoWorkdaysInMonth { year: 2024, month: 3 };
        assert_eq!(err.to_string(), "month 2024-03 contains no workday");
    }

    #[test]
    fn ambiguous_holiday_message() {
        let err = Error::AmbiguousHoliday {
            date: "2024-05-01".into(),
            first: "Labour Day".into(),
            second: "May Day".into(),
        };
        assert_eq!(
            err.to_string(),
            "ambiguous holiday on 2024-05-01: both \"Labour Day\" and \"May Day\" apply"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<Error>();
    }
}
