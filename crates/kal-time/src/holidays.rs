//! Danish public holidays.
//!
//! Two constant tables drive everything here: holidays at a fixed day offset
//! from Easter Sunday, and holidays on a fixed month and day.  Both are plain
//! `const` data and never change at run time.
//!
//! Names are unique across the two tables; [`danish_holidays`] merges them
//! into one [`HolidayTable`].

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDateTime};
use kal_core::errors::Result;

use crate::boundary::start_of_day;
use crate::date::{add_days, ymd};
use crate::easter::easter;
use crate::month::Month;

/// Holiday name → date for one year, ordered by name.
pub type HolidayTable = BTreeMap<&'static str, NaiveDateTime>;

/// A month and day of month with no year.
///
/// Resolved against a concrete year by [`MonthDay::in_year`], so a 29
/// February entry fails loudly in common years instead of drifting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    /// Month of the year.
    pub month: Month,
    /// Day of the month (1–31).
    pub day: u32,
}

impl MonthDay {
    /// Create a month/day pair.
    pub const fn new(month: Month, day: u32) -> Self {
        Self { month, day }
    }

    /// This month and day in `year`, at midnight.
    ///
    /// Fails with [`Error::Construction`](kal_core::Error::Construction) if
    /// the day does not exist in that year.
    pub fn in_year(&self, year: i32) -> Result<NaiveDateTime> {
        ymd(year, self.month.number(), self.day)
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.day, self.month.danish_name())
    }
}

/// Holidays defined as a day offset from Easter Sunday.
pub const EASTER_OFFSETS: &[(&str, i64)] = &[
    ("Fastelavn", -49),
    ("Palmesøndag", -7),
    ("Skærtorsdag", -3),
    ("Langfredag", -2),
    ("Påskedag", 0),
    ("2. påskedag", 1),
    ("Store bededag", 26),
    ("Kristi himmelfartsdag", 39),
    ("Pinsedag", 49),
    ("2. pinsedag", 50),
];

/// Holidays on the same month and day every year.
pub const FIXED_HOLIDAYS: &[(&str, MonthDay)] = &[
    ("Nytårsdag", MonthDay::new(Month::January, 1)),
    ("Grundlovsdag", MonthDay::new(Month::June, 5)),
    ("Juleaftensdag", MonthDay::new(Month::December, 24)),
    ("Juledag", MonthDay::new(Month::December, 25)),
    ("2. juledag", MonthDay::new(Month::December, 26)),
    ("Nytårsaftensdag", MonthDay::new(Month::December, 31)),
];

/// The Easter-relative holidays of `year`.
pub fn easter_dependent_holidays(year: i32) -> Result<HolidayTable> {
    let sunday = easter(year)?;
    EASTER_OFFSETS
        .iter()
        .map(|&(name, offset)| add_days(sunday, offset).map(|d| (name, d)))
        .collect()
}

/// The fixed-date holidays of `year`.
pub fn fixed_holidays(year: i32) -> Result<HolidayTable> {
    FIXED_HOLIDAYS
        .iter()
        .map(|&(name, md)| md.in_year(year).map(|d| (name, d)))
        .collect()
}

/// Every Danish holiday of `year`, keyed by name.
///
/// The two source tables share no names.  Should they ever overlap, which
/// entry survives is unspecified.
pub fn danish_holidays(year: i32) -> Result<HolidayTable> {
    let mut table = easter_dependent_holidays(year)?;
    table.extend(fixed_holidays(year)?);
    Ok(table)
}

/// Name of the Danish holiday falling on `date`'s day, if any.
pub fn danish_holiday_name(date: NaiveDateTime) -> Result<Option<&'static str>> {
    let day = start_of_day(date);
    Ok(danish_holidays(date.year())?
        .into_iter()
        .find_map(|(name, d)| (d == day).then_some(name)))
}

/// Return `true` if `date`'s day is a Danish holiday.
pub fn is_danish_holiday(date: NaiveDateTime) -> Result<bool> {
    Ok(danish_holiday_name(date)?.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use kal_core::Error;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        ymd(y, m, d).unwrap()
    }

    #[test]
    fn tables_do_not_share_names() {
        let easter: HashSet<_> = EASTER_OFFSETS.iter().map(|(n, _)| *n).collect();
        let fixed: HashSet<_> = FIXED_HOLIDAYS.iter().map(|(n, _)| *n).collect();
        assert_eq!(easter.len(), EASTER_OFFSETS.len());
        assert_eq!(fixed.len(), FIXED_HOLIDAYS.len());
        assert!(easter.is_disjoint(&fixed));
    }

    #[test]
    fn offsets_span() {
        let min = EASTER_OFFSETS.iter().map(|(_, o)| *o).min().unwrap();
        let max = EASTER_OFFSETS.iter().map(|(_, o)| *o).max().unwrap();
        assert_eq!((min, max), (-49, 50));
    }

    #[test]
    fn easter_monday_2011() {
        let table = easter_dependent_holidays(2011).unwrap();
        assert_eq!(table["2. påskedag"], date(2011, 4, 25));
        assert_eq!(table["Skærtorsdag"], date(2011, 4, 21));
        assert_eq!(table["Langfredag"], date(2011, 4, 22));
        assert_eq!(table["Pinsedag"], date(2011, 6, 12));
    }

    #[test]
    fn fixed_dates_follow_the_year() {
        let table = fixed_holidays(2010).unwrap();
        assert_eq!(table["Juleaftensdag"], date(2010, 12, 24));
        assert_eq!(table["Grundlovsdag"], date(2010, 6, 5));
        assert_eq!(table["Nytårsdag"], date(2010, 1, 1));
    }

    #[test]
    fn merged_table() {
        let table = danish_holidays(2010).unwrap();
        assert_eq!(table.len(), EASTER_OFFSETS.len() + FIXED_HOLIDAYS.len());
        assert_eq!(table["Påskedag"], date(2010, 4, 4));
        assert_eq!(table["Juledag"], date(2010, 12, 25));
    }

    #[test]
    fn month_day_leap_day() {
        let leap = MonthDay::new(Month::February, 29);
        assert_eq!(leap.in_year(2012).unwrap(), date(2012, 2, 29));
        assert!(matches!(leap.in_year(2011), Err(Error::Construction(_))));
        assert_eq!(leap.to_string(), "29. februar");
    }

    #[test]
    fn reverse_lookup() {
        let afternoon = date(2011, 4, 25) + TimeDelta::hours(14);
        assert_eq!(danish_holiday_name(afternoon).unwrap(), Some("2. påskedag"));
        assert!(is_danish_holiday(date(2010, 12, 24)).unwrap());
        assert!(!is_danish_holiday(date(2010, 12, 23)).unwrap());
    }
}
