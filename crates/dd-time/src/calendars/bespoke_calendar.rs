//! Bespoke calendar — a calendar with a user-supplied holiday table.

use crate::calendar::Calendar;
use crate::holiday::HolidayTable;

/// A calendar whose holiday rules are supplied at run time.
///
/// The table has already been validated against overlapping rules by
/// [`HolidayTable::new`].
#[derive(Debug, Clone)]
pub struct BespokeCalendar {
    name: String,
    table: HolidayTable,
}

impl BespokeCalendar {
    /// Create a new bespoke calendar with the given name and rules.
    pub fn new(name: impl Into<String>, table: HolidayTable) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }
}

impl Calendar for BespokeCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn holidays(&self) -> &HolidayTable {
        &self.table
    }
}
