//! Week numbering: ISO-8601 weeks and Sunday-start weeks.
//!
//! Week 1 of an ISO year is the Monday-start week containing January 4th.
//! Week numbers are found by walking forward one week at a time from the
//! start of week 1, so the cost is linear in the week number (at most 53
//! steps).
//!
//! Known edge case: the last days of December that ISO-8601 assigns to
//! week 1 of the *following* year are reported here as week 53 of their own
//! calendar year.

use chrono::NaiveDateTime;
use kal_core::bounds::{MAX_ISO_WEEK, MAX_WEEK, MAX_YEAR, MIN_YEAR};
use kal_core::ensure_range;
use kal_core::errors::Result;
use tracing::trace;

use crate::boundary::{end_of_day, start_of_iso_week, start_of_week, start_of_year};
use crate::date::{shift, ymd};

/// Monday of ISO week 1 of `date`'s calendar year.
fn first_iso_week_start(date: NaiveDateTime) -> NaiveDateTime {
    start_of_iso_week(shift(start_of_year(date), 3))
}

/// Count weeks from `week_one` until the week whose last instant is at or
/// after `date`.
fn walk_weeks(week_one: NaiveDateTime, date: NaiveDateTime) -> u32 {
    let mut week = 1;
    let mut week_start = week_one;
    while end_of_day(shift(week_start, 6)) < date {
        week_start = shift(week_start, 7);
        week += 1;
    }
    week
}

/// The 1-based ISO-8601 week number of `date`.
///
/// Dates before Monday of week 1 belong to the last ISO week of the previous
/// year and are numbered as December 31st of that year.
pub fn iso_week_in_year(date: NaiveDateTime) -> u32 {
    let week_one = first_iso_week_start(date);
    if date < week_one {
        let dec_31 = shift(start_of_year(date), -1);
        trace!(%date, %dec_31, "date precedes ISO week 1, using previous year");
        return iso_week_in_year(dec_31);
    }
    walk_weeks(week_one, date)
}

/// Midnight on the Monday that starts ISO week `week` of `year`.
///
/// `week` must be in `[1, 53]` and `year` in `[1, 9999]`.
pub fn start_of_iso_week_in_year(week: u32, year: i32) -> Result<NaiveDateTime> {
    ensure_range!(week, 1, MAX_ISO_WEEK, "week");
    ensure_range!(year, MIN_YEAR, MAX_YEAR, "year");
    let week_one = first_iso_week_start(ymd(year, 1, 1)?);
    Ok(shift(week_one, 7 * i64::from(week - 1)))
}

/// Number of ISO-8601 weeks (52 or 53) in `year`.
///
/// This is the week number of December 28th, which always lies in the last
/// ISO week of its year.
pub fn iso_weeks_in_year(year: i32) -> Result<u32> {
    ensure_range!(year, MIN_YEAR, MAX_YEAR, "year");
    Ok(iso_week_in_year(ymd(year, 12, 28)?))
}

/// The 1-based Sunday-start week number of `date`.
///
/// Week 1 starts on the Sunday on or before January 1st; there is no
/// first-Thursday rule, so every date belongs to its own calendar year and a
/// year touches 53 or 54 such weeks.
pub fn week_in_year(date: NaiveDateTime) -> u32 {
    walk_weeks(start_of_week(start_of_year(date)), date)
}

/// Midnight on the Sunday that starts Sunday-start week `week` of `year`.
///
/// `week` must be in `[1, 54]` and `year` in `[1, 9999]`.
pub fn start_of_week_in_year(week: u32, year: i32) -> Result<NaiveDateTime> {
    ensure_range!(week, 1, MAX_WEEK, "week");
    ensure_range!(year, MIN_YEAR, MAX_YEAR, "year");
    let week_one = start_of_week(ymd(year, 1, 1)?);
    Ok(shift(week_one, 7 * i64::from(week - 1)))
}
