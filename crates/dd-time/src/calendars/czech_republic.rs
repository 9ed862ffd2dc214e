//! Czech Republic calendar.

use std::sync::OnceLock;

use crate::calendar::Calendar;
use crate::date::Date;
use crate::holiday::{EasterHoliday, FixedHoliday, HolidayTable};

/// Czech Republic calendar.
///
/// Weekends and the following holidays are observed:
/// * Restoration Day of the Independent Czech State (Jan 1)
/// * Good Friday (since 21 December 2015)
/// * Easter Monday
/// * Labour Day (May 1)
/// * Victory Day (May 9 until 10 May 1990, May 8 afterwards)
/// * Saints Cyril and Methodius Day (Jul 5, since 1990)
/// * Jan Hus Day (Jul 6, since 1990)
/// * Statehood Day (Sep 28, since 2000)
/// * Independent Czechoslovak State Day (Oct 28, since 1988)
/// * Struggle for Freedom and Democracy Day (Nov 17, since 2000)
/// * Christmas Eve, Christmas Day, Second Day of Christmas (Dec 24–26, since 1990)
///
/// Rules are in force from 1 January 1952 at the earliest.
#[derive(Debug, Clone, Copy, Default)]
pub struct CzechRepublic;

impl CzechRepublic {
    /// Create the calendar.
    pub fn new() -> Self {
        CzechRepublic
    }
}

impl Calendar for CzechRepublic {
    fn name(&self) -> &str {
        "Czech Republic"
    }

    fn holidays(&self) -> &HolidayTable {
        static TABLE: OnceLock<HolidayTable> = OnceLock::new();
        TABLE.get_or_init(czech_table)
    }
}

fn czech_table() -> HolidayTable {
    let d = Date::from_ymd_unchecked;
    let since_1952 = d(1952, 1, 1);
    let since_1990 = d(1990, 5, 10);
    let since_2000 = d(2000, 8, 9);

    let fixed = [
        (1, 1, "Restoration Day of the Independent Czech State", since_1952, None),
        (5, 1, "Labour Day", since_1952, None),
        (5, 8, "Victory Day", d(1990, 5, 11), None),
        (5, 9, "Victory Day", since_1952, Some(d(1990, 5, 10))),
        (7, 5, "Saints Cyril and Methodius Day", since_1990, None),
        (7, 6, "Jan Hus Day", d(1990, 5, 18), None),
        (9, 28, "Statehood Day", since_2000, None),
        (10, 28, "Independent Czechoslovak State Day", d(1988, 9, 21), None),
        (11, 17, "Struggle for Freedom and Democracy Day", since_2000, None),
        (12, 24, "Christmas Eve", since_1990, None),
        (12, 25, "Christmas Day", since_1990, None),
        (12, 26, "Second Day of Christmas", since_1990, None),
    ]
    .into_iter()
    .map(|(m, day, name, from, to)| FixedHoliday::from_parts(m, day, name, from, to))
    .collect();

    let easter = vec![
        EasterHoliday::from_parts(-2, "Good Friday", d(2015, 12, 21), None),
        EasterHoliday::from_parts(1, "Easter Monday", since_1952, None),
    ];

    HolidayTable::from_parts(fixed, easter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn table_passes_overlap_validation() {
        let table = CzechRepublic.holidays().clone();
        assert_eq!(table.fixed().len(), 12);
        assert_eq!(table.easter().len(), 2);
        assert!(HolidayTable::new(table.fixed().to_vec(), table.easter().to_vec()).is_ok());
    }

    #[test]
    fn new_years_day() {
        let cal = CzechRepublic;
        assert_eq!(
            cal.holiday_name(date(2024, 1, 1)),
            Some("Restoration Day of the Independent Czech State")
        );
        assert!(!cal.is_workday(date(2024, 1, 1)));
    }

    #[test]
    fn good_friday_since_2016() {
        let cal = CzechRepublic;
        assert_eq!(cal.holiday_name(date(2024, 3, 29)), Some("Good Friday"));
        // Easter Sunday 2015: April 5, Good Friday = April 3
        assert!(cal.is_workday(date(2015, 4, 3)));
    }

    #[test]
    fn victory_day_moved_in_1990() {
        let cal = CzechRepublic;
        assert_eq!(cal.holiday_name(date(1985, 5, 9)), Some("Victory Day"));
        assert!(!cal.is_holiday(date(1985, 5, 8)));
        assert_eq!(cal.holiday_name(date(2023, 5, 8)), Some("Victory Day"));
        assert!(!cal.is_holiday(date(2023, 5, 9)));
    }

    #[test]
    fn christmas_eve() {
        let cal = CzechRepublic;
        assert_eq!(cal.holiday_name(date(2024, 12, 24)), Some("Christmas Eve"));
        assert!(!cal.is_holiday(date(1989, 12, 24)));
    }

    #[test]
    fn normal_business_day() {
        let cal = CzechRepublic;
        assert!(cal.is_workday(date(2023, 6, 15)));
    }
}
