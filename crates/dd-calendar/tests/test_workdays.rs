//! Workday numbering properties over arbitrary whole-month ranges.

use dd_calendar::{enumerate_days, CalendarDay, HolidayResolver, WorkdayAssigner, WorkdaySequence};
use dd_time::{CzechRepublic, Date};
use proptest::prelude::*;

fn assigned(start: Date, months: i32) -> (Vec<CalendarDay>, WorkdaySequence) {
    let end = start.add_months(months).unwrap() - 1;
    let mut days = enumerate_days(start, end).unwrap();
    HolidayResolver::new(&CzechRepublic)
        .classify(&mut days, end)
        .unwrap();
    let seq = WorkdayAssigner::assign(&mut days).unwrap();
    (days, seq)
}

fn month_start() -> impl Strategy<Value = Date> {
    (1970u16..=2100, 1u8..=12).prop_map(|(y, m)| Date::from_ymd(y, m, 1).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn ids_are_dense_and_follow_dates(start in month_start(), months in 1i32..=24) {
        let (days, seq) = assigned(start, months);
        let ids: Vec<u32> = days.iter().filter_map(|d| d.workday_id).collect();
        let expected: Vec<u32> = (1..=seq.len() as u32).collect();
        prop_assert_eq!(&ids, &expected);

        for day in &days {
            prop_assert_eq!(day.workday_id.is_some(), day.is_workday());
            prop_assert_eq!(day.workday_ordinal_in_month.is_some(), day.is_workday());
        }
        for pair in seq.workdays().windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
            prop_assert_eq!(pair[0].next, pair[1].date);
            prop_assert_eq!(pair[1].previous, pair[0].date);
        }
    }

    #[test]
    fn ordinals_restart_every_month(start in month_start(), months in 1i32..=24) {
        let (days, _) = assigned(start, months);
        let mut previous: Option<&CalendarDay> = None;
        for day in days.iter().filter(|d| d.is_workday()) {
            let ordinal = day.workday_ordinal_in_month.unwrap();
            match previous {
                Some(p) if p.year_month() == day.year_month() => {
                    prop_assert_eq!(ordinal, p.workday_ordinal_in_month.unwrap() + 1);
                }
                _ => prop_assert_eq!(ordinal, 1),
            }
            previous = Some(day);
        }
    }

    #[test]
    fn non_workdays_resolve_to_an_adjacent_id(start in month_start(), months in 1i32..=24) {
        let (days, seq) = assigned(start, months);
        let mut last_id = 0;
        for (day, ctx) in days.iter().zip(seq.contexts()) {
            if let Some(id) = day.workday_id {
                last_id = id;
                prop_assert_eq!(ctx.nearest_workday_id, id);
                prop_assert_eq!(ctx.nearest_workday_date, day.date);
                continue;
            }
            // Either the workday before or the one after.
            prop_assert!(
                ctx.nearest_workday_id == last_id || ctx.nearest_workday_id == last_id + 1,
                "{} resolved to {} after id {}", day.date, ctx.nearest_workday_id, last_id
            );
            // Never leaves the day's own month.
            prop_assert_eq!(
                dd_calendar::YearMonth::of(ctx.nearest_workday_date),
                day.year_month()
            );
            let bounds = seq.month_bounds(day.year_month()).unwrap();
            prop_assert_eq!(ctx.first_workday_of_month, bounds.first_date);
            prop_assert_eq!(ctx.last_workday_of_month, bounds.last_date);
        }
    }
}

#[test]
fn sorting_by_id_reproduces_date_order() {
    let (_, seq) = assigned(Date::from_ymd(2024, 1, 1).unwrap(), 12);
    let mut by_id = seq.workdays().to_vec();
    by_id.reverse();
    by_id.sort_by_key(|w| w.id);
    assert!(by_id.windows(2).all(|p| p[0].date < p[1].date));
    assert_eq!(seq.len(), 252);
}
