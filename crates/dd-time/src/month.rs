//! `Month` — month of the year.

/// Month of the year, numbered 1–12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    /// January (1).
    January = 1,
    /// February (2).
    February,
    /// March (3).
    March,
    /// April (4).
    April,
    /// May (5).
    May,
    /// June (6).
    June,
    /// July (7).
    July,
    /// August (8).
    August,
    /// September (9).
    September,
    /// October (10).
    October,
    /// November (11).
    November,
    /// December (12).
    December,
}

impl Month {
    /// Every month in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    const NAMES: [&'static str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    /// The month numbered `n` (1 = January), or `None` outside 1–12.
    pub fn from_number(n: u8) -> Option<Self> {
        n.checked_sub(1)
            .and_then(|i| Self::ALL.get(usize::from(i)))
            .copied()
    }

    /// 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Quarter the month belongs to (1–4).
    pub fn quarter(&self) -> u8 {
        (self.number() + 2) / 3
    }

    /// English name, as written to the `month_name` column.
    pub fn long_name(&self) -> &'static str {
        Self::NAMES[usize::from(self.number() - 1)]
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.long_name())
    }
}

impl From<Month> for u8 {
    fn from(m: Month) -> u8 {
        m as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering() {
        for (i, m) in Month::ALL.iter().enumerate() {
            assert_eq!(usize::from(m.number()), i + 1);
            assert_eq!(Month::from_number(m.number()), Some(*m));
        }
        assert!(Month::from_number(0).is_none());
        assert!(Month::from_number(13).is_none());
    }

    #[test]
    fn quarters_and_names() {
        assert_eq!(Month::March.quarter(), 1);
        assert_eq!(Month::April.quarter(), 2);
        assert_eq!(Month::September.quarter(), 3);
        assert_eq!(Month::December.quarter(), 4);
        assert_eq!(Month::November.to_string(), "November");
    }
}
