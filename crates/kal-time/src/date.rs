//! Date construction and arithmetic on top of `chrono`.
//!
//! The date value used throughout kalender-rs is [`chrono::NaiveDateTime`]:
//! a proleptic-Gregorian date with a time of day and no zone offset.  This
//! module wraps the handful of `chrono` calls that can fail so that their
//! failures surface as [`Error::Construction`].

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use kal_core::errors::{Error, Result};

/// 23:59:59.999, the last instant of a day at millisecond resolution.
pub(crate) fn last_instant() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("23:59:59.999 is a valid time")
}

/// Build a date at 00:00:00.000 from year, month and day.
///
/// Fails with [`Error::Construction`] if the components do not name a real
/// calendar day (e.g. 31 April or 29 February in a common year).
pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|d| d.and_time(NaiveTime::MIN))
        .ok_or_else(|| Error::Construction(format!("{year:04}-{month:02}-{day:02}")))
}

/// Advance `date` by `n` days (negative `n` moves backward).
///
/// Fails with [`Error::Construction`] if the result leaves the range
/// representable by `chrono`.
pub fn add_days(date: NaiveDateTime, n: i64) -> Result<NaiveDateTime> {
    TimeDelta::try_days(n)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or_else(|| Error::Construction(format!("{date} {n:+} days")))
}

/// Unchecked day shift for callers that start from a valid date and move by
/// at most a few days.
pub(crate) fn shift(date: NaiveDateTime, n: i64) -> NaiveDateTime {
    date + TimeDelta::days(n)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
