//! Day of the week.
//!
//! Two numberings are in play: the Sunday-start ordinal (0–6) that drives
//! [`start_of_week`](crate::boundary::start_of_week) and
//! [`week_in_year`](crate::week::week_in_year), and the ISO-8601 number
//! (Monday = 1 … Sunday = 7) behind the ISO-week functions.  Dates are
//! classified through `chrono::Weekday`.

use chrono::{Datelike, NaiveDateTime, Weekday};

/// Day of the week.
///
/// Variants are numbered 0–6 (Sunday = 0, Saturday = 6), the convention used
/// by the Sunday-start week functions.  [`DayOfWeek::iso_number`] gives the
/// ISO-8601 numbering (Monday = 1, Sunday = 7) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DayOfWeek {
    /// Sunday (0).
    Sunday = 0,
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
}

impl DayOfWeek {
    /// Every day of the week, Sunday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    /// Monday through Friday.
    pub const WORK_WEEK: [DayOfWeek; 5] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
    ];

    /// Day of the week of `date`.
    pub fn of(date: NaiveDateTime) -> Self {
        date.weekday().into()
    }

    /// Return the ordinal (0 = Sunday … 6 = Saturday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Return the ISO-8601 number (1 = Monday … 7 = Sunday).
    pub fn iso_number(&self) -> u8 {
        match self {
            DayOfWeek::Sunday => 7,
            other => other.ordinal(),
        }
    }

    /// Return `true` if this is Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, DayOfWeek::Saturday | DayOfWeek::Sunday)
    }

    /// Return `true` if this is Monday–Friday.
    pub fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(w: Weekday) -> Self {
        match w {
            Weekday::Sun => DayOfWeek::Sunday,
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
        }
    }
}
