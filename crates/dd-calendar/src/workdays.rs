//! Workday assigner.
//!
//! Numbers the working days of a range and links every other day to a
//! working-day context.  The work happens in two passes over the day
//! sequence:
//!
//! 1. Workdays are numbered `1, 2, …, K` in date order, which yields the
//!    dense id arena, the per-month ordinals and each month's first/last
//!    workday.
//! 2. Every day is resolved to a workday of the arena.  A workday resolves
//!    to itself; a non-workday before its month's first workday resolves to
//!    that first workday, one after the month's last workday to that last
//!    workday, and one inside the span to the closest preceding workday.
//!
//! Previous/next workday links follow the arena (`id − 1`, `id + 1`).  The
//! first workday's predecessor and the last workday's successor lie outside
//! the range; they are found by skipping weekends only, so a holiday just
//! outside the range can be reported as a neighbouring workday.

use std::collections::BTreeMap;

use dd_core::errors::{Error, Result};
use dd_core::fail;
use dd_time::Date;
use tracing::debug;

use crate::day::{check_sequence, CalendarDay, YearMonth};

/// One entry of the dense workday sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workday {
    /// Dense 1-based id, strictly increasing with `date`.
    pub id: u32,
    /// The working day.
    pub date: Date,
    /// 1-based rank among the workdays of the same month.
    pub ordinal_in_month: u32,
    /// The preceding workday.
    pub previous: Date,
    /// The following workday.
    pub next: Date,
}

/// First and last workday of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBounds {
    /// Id of the month's first workday.
    pub first_id: u32,
    /// Id of the month's last workday.
    pub last_id: u32,
    /// Date of the month's first workday.
    pub first_date: Date,
    /// Date of the month's last workday.
    pub last_date: Date,
}

/// The workday a calendar day resolves to, plus its month boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkdayContext {
    /// Id of the resolved workday (the day itself when it is a workday).
    pub nearest_workday_id: u32,
    /// Date of the resolved workday.
    pub nearest_workday_date: Date,
    /// Month ordinal of the resolved workday.
    pub nearest_workday_ordinal: u32,
    /// Workday preceding the resolved workday.
    pub previous_workday: Date,
    /// Workday following the resolved workday.
    pub next_workday: Date,
    /// First workday of the day's month.
    pub first_workday_of_month: Date,
    /// Last workday of the day's month.
    pub last_workday_of_month: Date,
}

/// Output of [`WorkdayAssigner::assign`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkdaySequence {
    workdays: Vec<Workday>,
    months: BTreeMap<YearMonth, MonthBounds>,
    contexts: Vec<WorkdayContext>,
}

impl WorkdaySequence {
    /// All workdays in id order.
    pub fn workdays(&self) -> &[Workday] {
        &self.workdays
    }

    /// Number of workdays (`K`).
    pub fn len(&self) -> usize {
        self.workdays.len()
    }

    /// Always `false`: assignment fails on ranges without workdays.
    pub fn is_empty(&self) -> bool {
        self.workdays.is_empty()
    }

    /// Look up a workday by id.
    pub fn get(&self, id: u32) -> Option<&Workday> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.workdays.get(index)
    }

    /// First/last workday of `month`, if the month is part of the range.
    pub fn month_bounds(&self, month: YearMonth) -> Option<&MonthBounds> {
        self.months.get(&month)
    }

    /// One context per input day, in input order.
    pub fn contexts(&self) -> &[WorkdayContext] {
        &self.contexts
    }
}

/// Numbers workdays and resolves every day to a workday context.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkdayAssigner;

impl WorkdayAssigner {
    /// Assign workday ids and ordinals to `days` and resolve every day.
    ///
    /// `days` must be ordered and gap-free with holiday flags already set.
    /// On success, every workday row carries `workday_id` and
    /// `workday_ordinal_in_month`.
    ///
    /// # Errors
    /// * [`Error::InvalidRange`] if `days` is empty or not contiguous.
    /// * [`Error::NoWorkdays`] if no day of the range is a workday.
    /// * [`Error::NoWorkdaysInMonth`] if some month of the range has none.
    /// * [`Error::Date`] if the workday before the range start or after the
    ///   range end is not representable.
    pub fn assign(days: &mut [CalendarDay]) -> Result<WorkdaySequence> {
        check_sequence(days)?;

        let (mut workdays, months) = number_workdays(days);
        if workdays.is_empty() {
            return Err(Error::NoWorkdays);
        }
        link_neighbours(&mut workdays, days[0].date, days[days.len() - 1].date)?;

        for day in days.iter() {
            let ym = day.year_month();
            if !months.contains_key(&ym) {
                return Err(Error::NoWorkdaysInMonth {
                    year: ym.year,
                    month: ym.month,
                });
            }
        }

        let contexts = resolve_contexts(days, &workdays, &months)?;
        for (day, workday) in days
            .iter_mut()
            .filter(|d| d.is_workday())
            .zip(workdays.iter())
        {
            day.workday_id = Some(workday.id);
            day.workday_ordinal_in_month = Some(workday.ordinal_in_month);
        }

        debug!(
            days = days.len(),
            workdays = workdays.len(),
            months = months.len(),
            "assigned workday ids"
        );
        Ok(WorkdaySequence {
            workdays,
            months,
            contexts,
        })
    }
}

/// First pass: dense ids, month ordinals and month bounds.
///
/// `previous`/`next` are left pointing at the workday itself.
fn number_workdays(days: &[CalendarDay]) -> (Vec<Workday>, BTreeMap<YearMonth, MonthBounds>) {
    let mut workdays: Vec<Workday> = Vec::new();
    let mut months: BTreeMap<YearMonth, MonthBounds> = BTreeMap::new();
    let mut ordinal = 0;
    let mut current_month = None;

    for day in days.iter().filter(|d| d.is_workday()) {
        let ym = day.year_month();
        if current_month != Some(ym) {
            current_month = Some(ym);
            ordinal = 0;
        }
        ordinal += 1;
        let id = workdays.len() as u32 + 1;
        workdays.push(Workday {
            id,
            date: day.date,
            ordinal_in_month: ordinal,
            previous: day.date,
            next: day.date,
        });
        months
            .entry(ym)
            .and_modify(|b| {
                b.last_id = id;
                b.last_date = day.date;
            })
            .or_insert(MonthBounds {
                first_id: id,
                last_id: id,
                first_date: day.date,
                last_date: day.date,
            });
    }
    (workdays, months)
}

/// Set previous/next links along the arena, bootstrapping both ends.
fn link_neighbours(workdays: &mut [Workday], range_start: Date, range_end: Date) -> Result<()> {
    let before = weekday_before_range(range_start)?;
    let after = weekday_after_range(range_end)?;
    let dates: Vec<Date> = workdays.iter().map(|w| w.date).collect();
    let last = dates.len() - 1;
    for (i, workday) in workdays.iter_mut().enumerate() {
        workday.previous = if i == 0 { before } else { dates[i - 1] };
        workday.next = if i == last { after } else { dates[i + 1] };
    }
    Ok(())
}

/// Closest Monday–Friday strictly before `range_start`.
fn weekday_before_range(range_start: Date) -> Result<Date> {
    let mut date = range_start.add_days(-1)?;
    while date.is_weekend() {
        date = date.add_days(-1)?;
    }
    Ok(date)
}

/// Closest Monday–Friday on or after `range_end + 2`.
///
/// The day right after the range is skipped: for whole-year ranges it is
/// always January 1.
fn weekday_after_range(range_end: Date) -> Result<Date> {
    let mut date = range_end.add_days(2)?;
    while date.is_weekend() {
        date = date.add_days(1)?;
    }
    Ok(date)
}

/// Second pass: resolve every day against the arena.
fn resolve_contexts(
    days: &[CalendarDay],
    workdays: &[Workday],
    months: &BTreeMap<YearMonth, MonthBounds>,
) -> Result<Vec<WorkdayContext>> {
    let mut contexts = Vec::with_capacity(days.len());
    let mut last_seen: Option<u32> = None;
    let mut next_id = 1;

    for day in days {
        let ym = day.year_month();
        let bounds = months.get(&ym).ok_or(Error::NoWorkdaysInMonth {
            year: ym.year,
            month: ym.month,
        })?;

        let id = if day.is_workday() {
            let id = next_id;
            next_id += 1;
            last_seen = Some(id);
            id
        } else if day.date < bounds.first_date {
            bounds.first_id
        } else if day.date > bounds.last_date {
            bounds.last_id
        } else {
            // Inside the month's workday span the first workday of the
            // month has already been seen.
            let Some(id) = last_seen else {
                fail!("no workday precedes {} within its month", day.date);
            };
            id
        };

        let workday = &workdays[(id - 1) as usize];
        contexts.push(WorkdayContext {
            nearest_workday_id: id,
            nearest_workday_date: workday.date,
            nearest_workday_ordinal: workday.ordinal_in_month,
            previous_workday: workday.previous,
            next_workday: workday.next,
            first_workday_of_month: bounds.first_date,
            last_workday_of_month: bounds.last_date,
        });
    }
    Ok(contexts)
}
