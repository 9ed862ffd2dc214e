//! Holiday rules and holiday tables.
//!
//! A [`HolidayTable`] combines fixed-date rules ([`FixedHoliday`]) with
//! movable feasts defined relative to Easter Sunday ([`EasterHoliday`]).
//! Every rule carries a validity window so that historical renames and
//! introductions can be modelled by several rules sharing a month/day.

use crate::date::{days_in_month, Date};
use crate::easter::easter_sunday;
use dd_core::errors::{Error, Result};
use dd_core::ensure;

/// A holiday that falls on the same month/day every year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedHoliday {
    month: u8,
    day: u8,
    name: String,
    valid_from: Date,
    valid_to: Option<Date>,
}

impl FixedHoliday {
    /// Create a fixed-date rule valid on `[valid_from, valid_to]`.
    ///
    /// `valid_to = None` leaves the rule open-ended.
    pub fn new(
        month: u8,
        day: u8,
        name: impl Into<String>,
        valid_from: Date,
        valid_to: Option<Date>,
    ) -> Result<Self> {
        ensure!((1..=12).contains(&month), "holiday month {month} out of range [1, 12]");
        // Leap-year maximum so that Feb 29 rules are accepted.
        let max_day = days_in_month(2000, month);
        ensure!(
            (1..=max_day).contains(&day),
            "holiday day {day} out of range [1, {max_day}] for month {month}"
        );
        ensure!(
            valid_to.map_or(true, |to| valid_from <= to),
            "holiday validity window is empty ({valid_from} > {})",
            valid_to.map(|d| d.to_string()).unwrap_or_default()
        );
        Ok(Self {
            month,
            day,
            name: name.into(),
            valid_from,
            valid_to,
        })
    }

    /// Build a rule from components already known to be valid.
    pub(crate) fn from_parts(
        month: u8,
        day: u8,
        name: &str,
        valid_from: Date,
        valid_to: Option<Date>,
    ) -> Self {
        Self {
            month,
            day,
            name: name.to_owned(),
            valid_from,
            valid_to,
        }
    }

    /// Month of the holiday (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Holiday name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First day the rule is in force.
    pub fn valid_from(&self) -> Date {
        self.valid_from
    }

    /// Last day the rule is in force (`None` = open-ended).
    pub fn valid_to(&self) -> Option<Date> {
        self.valid_to
    }

    /// Return `true` if the rule puts a holiday on `date`.
    pub fn applies_to(&self, date: Date) -> bool {
        let (_, m, d) = date.ymd();
        m == self.month && d == self.day && in_window(date, self.valid_from, self.valid_to)
    }
}

/// A movable feast: Easter Sunday plus a fixed day offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EasterHoliday {
    offset: i32,
    name: String,
    valid_from: Date,
    valid_to: Option<Date>,
}

impl EasterHoliday {
    /// Create a rule for Easter Sunday + `offset` days (e.g. −2 for Good
    /// Friday, +1 for Easter Monday), valid on `[valid_from, valid_to]`.
    pub fn new(
        offset: i32,
        name: impl Into<String>,
        valid_from: Date,
        valid_to: Option<Date>,
    ) -> Result<Self> {
        // Keeps the feast inside the year of its Easter Sunday.
        ensure!(
            (-80..=250).contains(&offset),
            "Easter offset {offset} out of range [-80, 250]"
        );
        ensure!(
            valid_to.map_or(true, |to| valid_from <= to),
            "holiday validity window is empty"
        );
        Ok(Self {
            offset,
            name: name.into(),
            valid_from,
            valid_to,
        })
    }

    /// Build a rule from components already known to be valid.
    pub(crate) fn from_parts(offset: i32, name: &str, valid_from: Date, valid_to: Option<Date>) -> Self {
        Self {
            offset,
            name: name.to_owned(),
            valid_from,
            valid_to,
        }
    }

    /// Offset from Easter Sunday in days.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Holiday name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The day this feast falls on in `year`, ignoring the validity window.
    ///
    /// Returns `None` when the day would fall outside the representable range.
    pub fn date_in(&self, year: u16) -> Option<Date> {
        easter_sunday(year).add_days(self.offset).ok()
    }

    /// The day this feast falls on in `year` if the rule is in force then.
    pub fn observed_in(&self, year: u16) -> Option<Date> {
        self.date_in(year)
            .filter(|&date| in_window(date, self.valid_from, self.valid_to))
    }

    /// Return `true` if the rule puts a holiday on `date`.
    pub fn applies_to(&self, date: Date) -> bool {
        self.observed_in(date.year()) == Some(date)
    }
}

/// An immutable set of holiday rules.
///
/// Construction rejects tables in which two rules for the same target
/// (same month/day, or same Easter offset) have overlapping validity
/// windows, because their resolution order would be undefined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayTable {
    fixed: Vec<FixedHoliday>,
    easter: Vec<EasterHoliday>,
}

impl HolidayTable {
    /// Build a table, validating that no two rules overlap.
    pub fn new(fixed: Vec<FixedHoliday>, easter: Vec<EasterHoliday>) -> Result<Self> {
        for (i, a) in fixed.iter().enumerate() {
            for b in &fixed[i + 1..] {
                if a.month == b.month
                    && a.day == b.day
                    && windows_overlap(a.valid_from, a.valid_to, b.valid_from, b.valid_to)
                {
                    return Err(Error::OverlappingHolidayRules {
                        target: format!("{:02}-{:02}", a.month, a.day),
                        first: a.name.clone(),
                        second: b.name.clone(),
                    });
                }
            }
        }
        for (i, a) in easter.iter().enumerate() {
            for b in &easter[i + 1..] {
                if a.offset == b.offset
                    && windows_overlap(a.valid_from, a.valid_to, b.valid_from, b.valid_to)
                {
                    return Err(Error::OverlappingHolidayRules {
                        target: format!("Easter{:+}", a.offset),
                        first: a.name.clone(),
                        second: b.name.clone(),
                    });
                }
            }
        }
        Ok(Self { fixed, easter })
    }

    /// Build a table from rules already known not to overlap.
    pub(crate) fn from_parts(fixed: Vec<FixedHoliday>, easter: Vec<EasterHoliday>) -> Self {
        Self { fixed, easter }
    }

    /// An empty table (weekends only).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fixed-date rules.
    pub fn fixed(&self) -> &[FixedHoliday] {
        &self.fixed
    }

    /// Easter-relative rules.
    pub fn easter(&self) -> &[EasterHoliday] {
        &self.easter
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.fixed.len() + self.easter.len()
    }

    /// Return `true` if the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of the fixed-date rules that apply to `date`.
    pub fn matching_fixed(&self, date: Date) -> impl Iterator<Item = &str> + '_ {
        self.fixed
            .iter()
            .filter(move |r| r.applies_to(date))
            .map(FixedHoliday::name)
    }

    /// Names of every rule that applies to `date`, fixed rules first.
    pub fn matching(&self, date: Date) -> impl Iterator<Item = &str> + '_ {
        let easter = self
            .easter
            .iter()
            .filter(move |r| r.applies_to(date))
            .map(EasterHoliday::name);
        self.matching_fixed(date).chain(easter)
    }
}

fn in_window(date: Date, from: Date, to: Option<Date>) -> bool {
    date >= from && to.map_or(true, |to| date <= to)
}

fn windows_overlap(a_from: Date, a_to: Option<Date>, b_from: Date, b_to: Option<Date>) -> bool {
    let a_to = a_to.unwrap_or(Date::MAX);
    let b_to = b_to.unwrap_or(Date::MAX);
    a_from <= b_to && b_from <= a_to
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn fixed_rule_respects_window() {
        let rule = FixedHoliday::new(5, 9, "Victory Day", date(1952, 1, 1), Some(date(1990, 5, 10)))
            .unwrap();
        assert!(rule.applies_to(date(1989, 5, 9)));
        assert!(rule.applies_to(date(1990, 5, 9)));
        assert!(!rule.applies_to(date(1991, 5, 9)));
        assert!(!rule.applies_to(date(1951, 5, 9)));
        assert!(!rule.applies_to(date(1989, 5, 8)));
    }

    #[test]
    fn invalid_fixed_rules_are_rejected() {
        assert!(FixedHoliday::new(13, 1, "x", date(2000, 1, 1), None).is_err());
        assert!(FixedHoliday::new(4, 31, "x", date(2000, 1, 1), None).is_err());
        assert!(FixedHoliday::new(2, 29, "Leap", date(2000, 1, 1), None).is_ok());
        assert!(FixedHoliday::new(1, 1, "x", date(2000, 1, 1), Some(date(1999, 1, 1))).is_err());
    }

    #[test]
    fn easter_rule_window() {
        let rule = EasterHoliday::new(-2, "Good Friday", date(2015, 12, 21), None).unwrap();
        assert_eq!(rule.observed_in(2024), Some(date(2024, 3, 29)));
        assert_eq!(rule.observed_in(2015), None);
        assert!(rule.applies_to(date(2016, 3, 25)));
    }

    #[test]
    fn overlapping_fixed_rules_are_rejected() {
        let a = FixedHoliday::new(5, 8, "Victory Day", date(1990, 1, 1), None).unwrap();
        let b = FixedHoliday::new(5, 8, "Liberation Day", date(2000, 1, 1), None).unwrap();
        let err = HolidayTable::new(vec![a, b], vec![]).unwrap_err();
        assert!(matches!(err, Error::OverlappingHolidayRules { ref target, .. } if target == "05-08"));
    }

    #[test]
    fn disjoint_windows_share_a_day() {
        let a = FixedHoliday::new(5, 9, "Old", date(1952, 1, 1), Some(date(1990, 5, 10))).unwrap();
        let b = FixedHoliday::new(5, 9, "New", date(1990, 5, 11), None).unwrap();
        let table = HolidayTable::new(vec![a, b], vec![]).unwrap();
        assert_eq!(table.matching(date(1980, 5, 9)).collect::<Vec<_>>(), vec!["Old"]);
        assert_eq!(table.matching(date(2020, 5, 9)).collect::<Vec<_>>(), vec!["New"]);
    }

    #[test]
    fn overlapping_easter_rules_are_rejected() {
        let a = EasterHoliday::new(1, "Easter Monday", date(1952, 1, 1), None).unwrap();
        let b = EasterHoliday::new(1, "Bright Monday", date(1952, 1, 1), None).unwrap();
        assert!(HolidayTable::new(vec![], vec![a, b]).is_err());
    }
}
