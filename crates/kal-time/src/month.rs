//! Month of the year, as used by the fixed-date holiday table.
//!
//! Only what [`MonthDay`](crate::holidays::MonthDay) needs lives here: the
//! 1-based number passed to the date constructor and the Danish name used
//! when a table entry is displayed.

/// Month of the year.
///
/// Variants are numbered 1–12 (January = 1, December = 12), matching
/// `chrono`'s `Datelike::month`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    /// January (1).
    January = 1,
    /// February (2).
    February = 2,
    /// March (3).
    March = 3,
    /// April (4).
    April = 4,
    /// May (5).
    May = 5,
    /// June (6).
    June = 6,
    /// July (7).
    July = 7,
    /// August (8).
    August = 8,
    /// September (9).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

impl Month {
    /// Return the 1-based month number.
    pub fn number(&self) -> u32 {
        *self as u32
    }

    /// Return the Danish name (`"januar"`, `"februar"`, …).
    pub fn danish_name(&self) -> &'static str {
        match self {
            Month::January => "januar",
            Month::February => "februar",
            Month::March => "marts",
            Month::April => "april",
            Month::May => "maj",
            Month::June => "juni",
            Month::July => "juli",
            Month::August => "august",
            Month::September => "september",
            Month::October => "oktober",
            Month::November => "november",
            Month::December => "december",
        }
    }
}
