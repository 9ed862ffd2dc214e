//! Holiday resolver.
//!
//! Combines a calendar's fixed-date rules with its Easter-relative rules
//! and flags every day of a range that is a public holiday.  Two rules
//! landing on the same day are reported as [`Error::AmbiguousHoliday`]
//! instead of letting one silently win.  [`HolidayResolver::classify`]
//! also marks the calendar's weekend days.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use dd_core::errors::{Error, Result};
use dd_time::{Calendar, Date};
use tracing::debug;

use crate::day::CalendarDay;

/// Holidays found in a range, keyed by date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayMap {
    names: BTreeMap<Date, String>,
}

impl HolidayMap {
    /// Name of the holiday on `date`, if any.
    pub fn name(&self, date: Date) -> Option<&str> {
        self.names.get(&date).map(String::as_str)
    }

    /// Return `true` if `date` is a holiday.
    pub fn is_holiday(&self, date: Date) -> bool {
        self.names.contains_key(&date)
    }

    /// Number of holidays.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Return `true` if no holiday was found.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Holidays in date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, &str)> + '_ {
        self.names.iter().map(|(d, n)| (*d, n.as_str()))
    }

    /// Copy the holiday flags and names onto `days`.
    pub fn apply(&self, days: &mut [CalendarDay]) {
        for day in days {
            match self.names.get(&day.date) {
                Some(name) => {
                    day.is_holiday = true;
                    day.holiday_name = Some(name.clone());
                }
                None => {
                    day.is_holiday = false;
                    day.holiday_name = None;
                }
            }
        }
    }

    fn insert(&mut self, date: Date, name: &str) -> Result<()> {
        match self.names.entry(date) {
            Entry::Vacant(slot) => {
                slot.insert(name.to_owned());
                Ok(())
            }
            Entry::Occupied(slot) => Err(Error::AmbiguousHoliday {
                date: date.to_string(),
                first: slot.get().clone(),
                second: name.to_owned(),
            }),
        }
    }
}

/// Resolves a calendar's holiday rules against a day range.
#[derive(Debug, Clone, Copy)]
pub struct HolidayResolver<'a> {
    calendar: &'a dyn Calendar,
}

impl<'a> HolidayResolver<'a> {
    /// Create a resolver for `calendar`.
    pub fn new(calendar: &'a dyn Calendar) -> Self {
        Self { calendar }
    }

    /// Find every holiday among `days` that falls on or before `range_end`.
    ///
    /// Fixed-date rules are matched day by day; Easter rules are evaluated
    /// once per year present in `days`.
    pub fn resolve(&self, days: &[CalendarDay], range_end: Date) -> Result<HolidayMap> {
        let table = self.calendar.holidays();
        let mut map = HolidayMap::default();
        let Some(range_start) = days.first().map(|d| d.date) else {
            return Ok(map);
        };

        for day in days.iter().filter(|d| d.date <= range_end) {
            for name in table.matching_fixed(day.date) {
                map.insert(day.date, name)?;
            }
        }
        let fixed = map.len();

        let years: BTreeSet<u16> = days.iter().map(|d| d.year).collect();
        for &year in &years {
            for rule in table.easter() {
                if let Some(date) = rule.observed_in(year) {
                    if date >= range_start && date <= range_end {
                        map.insert(date, rule.name())?;
                    }
                }
            }
        }

        debug!(
            calendar = self.calendar.name(),
            years = years.len(),
            fixed,
            movable = map.len() - fixed,
            "resolved holidays"
        );
        Ok(map)
    }

    /// Flag the weekend days and holidays of `days` according to the
    /// calendar, returning the holidays found.
    pub fn classify(&self, days: &mut [CalendarDay], range_end: Date) -> Result<HolidayMap> {
        let map = self.resolve(days, range_end)?;
        for day in days.iter_mut() {
            day.is_weekend = self.calendar.is_weekend(day.date);
        }
        map.apply(days);
        Ok(map)
    }
}
