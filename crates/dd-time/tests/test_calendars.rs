//! Holiday-calendar tests.
//!
//! These integration tests exercise the `Calendar` trait, the Czech Republic
//! holiday table and `BespokeCalendar`.

use dd_time::calendar::Calendar;
use dd_time::{BespokeCalendar, CzechRepublic, Date, FixedHoliday, HolidayTable, WeekendsOnly};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Collect all non-weekend holidays in the inclusive range `[from, to]`.
fn holiday_list(cal: &dyn Calendar, from: Date, to: Date) -> Vec<Date> {
    let mut holidays = Vec::new();
    let mut d = from;
    while d <= to {
        if cal.is_holiday(d) && !cal.is_weekend(d) {
            holidays.push(d);
        }
        d += 1;
    }
    holidays
}

/// Assert that every date in `expected` is a holiday, and every holiday in the
/// range is in `expected`.
fn check_holidays(cal: &dyn Calendar, from: Date, to: Date, expected: &[Date]) {
    let calculated = holiday_list(cal, from, to);
    let calc_set: std::collections::HashSet<_> = calculated.iter().copied().collect();
    let exp_set: std::collections::HashSet<_> = expected.iter().copied().collect();

    for &d in &calculated {
        assert!(
            exp_set.contains(&d),
            "{}: {} calculated as holiday but not expected ({})",
            cal.name(),
            d,
            d.weekday()
        );
    }
    for &d in expected {
        assert!(
            calc_set.contains(&d),
            "{}: {} expected as holiday but not found ({})",
            cal.name(),
            d,
            d.weekday()
        );
    }
}

// ─── Czech Republic ───────────────────────────────────────────────────────────

#[test]
fn test_czech_holidays_2024() {
    let expected = vec![
        date(2024, 1, 1),
        date(2024, 3, 29),
        date(2024, 4, 1),
        date(2024, 5, 1),
        date(2024, 5, 8),
        date(2024, 7, 5),
        date(2024, 10, 28),
        date(2024, 12, 24),
        date(2024, 12, 25),
        date(2024, 12, 26),
    ];
    check_holidays(&CzechRepublic, date(2024, 1, 1), date(2024, 12, 31), &expected);
}

#[test]
fn test_czech_holidays_1989() {
    // Before 1990: Victory Day on May 9, no July or Christmas holidays,
    // Independent Czechoslovak State Day already in force.
    let expected = vec![
        date(1989, 3, 27),
        date(1989, 5, 1),
        date(1989, 5, 9),
        date(1989, 10, 28),
    ];
    let cal = CzechRepublic;
    // 1989-01-01 is a Sunday and 1989-10-28 a Saturday.
    let expected: Vec<Date> = expected.into_iter().filter(|d| !cal.is_weekend(*d)).collect();
    check_holidays(&cal, date(1989, 1, 1), date(1989, 12, 31), &expected);
}

#[test]
fn test_good_friday_introduced_in_2016() {
    let cal = CzechRepublic;
    assert_eq!(cal.holiday_name(date(2016, 3, 25)), Some("Good Friday"));
    assert_eq!(cal.holiday_name(date(2016, 3, 28)), Some("Easter Monday"));
    // Easter Sunday 2015 is April 5.
    assert!(!cal.is_holiday(date(2015, 4, 3)));
    assert!(cal.is_holiday(date(2015, 4, 6)));
}

#[test]
fn test_no_rules_before_1952() {
    let cal = CzechRepublic;
    assert!(holiday_list(&cal, date(1950, 1, 1), date(1951, 12, 31)).is_empty());
}

#[test]
fn test_weekend_holidays_are_still_named() {
    let cal = CzechRepublic;
    // 2024-09-28 is a Saturday.
    assert!(cal.is_weekend(date(2024, 9, 28)));
    assert_eq!(cal.holiday_name(date(2024, 9, 28)), Some("Statehood Day"));
}

// ─── Other calendars ──────────────────────────────────────────────────────────

#[test]
fn test_weekends_only() {
    let cal = WeekendsOnly::new();
    assert!(holiday_list(&cal, date(2024, 1, 1), date(2024, 12, 31)).is_empty());
}

#[test]
fn test_bespoke_calendar() {
    let table = HolidayTable::new(
        vec![FixedHoliday::new(6, 3, "Founders Day", date(2020, 1, 1), Some(date(2030, 12, 31))).unwrap()],
        vec![],
    )
    .unwrap();
    let cal = BespokeCalendar::new("Bespoke", table);
    check_holidays(&cal, date(2024, 1, 1), date(2024, 12, 31), &[date(2024, 6, 3)]);
    assert!(!cal.is_holiday(date(2031, 6, 3)));
}
