//! Start and end of minutes, days, weeks, months and years.
//!
//! A period starts at 00:00:00.000 of its first day and ends at
//! 23:59:59.999 of its last day (a minute ends at second 59.999).  Functions
//! that take an existing date cannot fail; the `*_ymd`, `*_ym` and `*_y`
//! variants that build a date from integers validate their arguments first.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use kal_core::bounds::{MAX_DAY_ARG, MAX_YEAR, MIN_YEAR};
use kal_core::ensure_range;
use kal_core::errors::Result;

use crate::date::{last_instant, shift, ymd};
use crate::period_unit::PeriodUnit;
use crate::weekday::DayOfWeek;

// ── Minute / day ──────────────────────────────────────────────────────────────

/// Truncate `date` to the start of its minute.
pub fn start_of_minute(date: NaiveDateTime) -> NaiveDateTime {
    date.with_second(0)
        .and_then(|d| d.with_nanosecond(0))
        .expect("second 0 and nanosecond 0 are always valid")
}

/// The last millisecond of `date`'s minute.
pub fn end_of_minute(date: NaiveDateTime) -> NaiveDateTime {
    start_of_minute(date) + TimeDelta::milliseconds(59_999)
}

/// Midnight at the start of `date`'s day.
pub fn start_of_day(date: NaiveDateTime) -> NaiveDateTime {
    date.date().and_time(NaiveTime::MIN)
}

/// 23:59:59.999 on `date`'s day.
pub fn end_of_day(date: NaiveDateTime) -> NaiveDateTime {
    date.date().and_time(last_instant())
}

// ── Weeks ─────────────────────────────────────────────────────────────────────

/// The Sunday on or before `date`, at midnight.
pub fn start_of_week(date: NaiveDateTime) -> NaiveDateTime {
    let back = DayOfWeek::of(date).ordinal();
    start_of_day(shift(date, -i64::from(back)))
}

/// The Saturday on or after `date`, at 23:59:59.999.
pub fn end_of_week(date: NaiveDateTime) -> NaiveDateTime {
    end_of_day(shift(start_of_week(date), 6))
}

/// The Monday on or before `date`, at midnight.
///
/// Sunday counts as the seventh day of the week, so a Sunday maps to the
/// Monday six days earlier.
pub fn start_of_iso_week(date: NaiveDateTime) -> NaiveDateTime {
    let back = DayOfWeek::of(date).iso_number() - 1;
    start_of_day(shift(date, -i64::from(back)))
}

/// The Sunday on or after `date`, at 23:59:59.999.
pub fn end_of_iso_week(date: NaiveDateTime) -> NaiveDateTime {
    end_of_day(shift(start_of_iso_week(date), 6))
}

// ── Month / year ──────────────────────────────────────────────────────────────

/// Midnight on the first day of `date`'s month.
pub fn start_of_month(date: NaiveDateTime) -> NaiveDateTime {
    start_of_day(date.with_day(1).expect("every month has a first day"))
}

/// 23:59:59.999 on the last day of `date`'s month.
pub fn end_of_month(date: NaiveDateTime) -> NaiveDateTime {
    // the day before the first of next month; chrono's last month has no
    // successor and ends on NaiveDate::MAX
    let last = start_of_month(date)
        .date()
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    last.and_time(last_instant())
}

/// Midnight on January 1st of `date`'s year.
pub fn start_of_year(date: NaiveDateTime) -> NaiveDateTime {
    start_of_day(date.with_ordinal(1).expect("every year has a first day"))
}

/// 23:59:59.999 on December 31st of `date`'s year.
pub fn end_of_year(date: NaiveDateTime) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(date.year(), 12, 31)
        .expect("every year has a December 31st")
        .and_time(last_instant())
}

// ── Explicit year / month / day ───────────────────────────────────────────────

/// Midnight on `year-month-day`.
///
/// The day is only checked against `[1, 366]`; a day that does not exist in
/// the month is reported by the date constructor as
/// [`Error::Construction`](kal_core::Error::Construction).
pub fn start_of_day_ymd(year: i32, month: u32, day: u32) -> Result<NaiveDateTime> {
    ensure_range!(year, MIN_YEAR, MAX_YEAR, "year");
    ensure_range!(month, 1, 12, "month");
    ensure_range!(day, 1, MAX_DAY_ARG, "day");
    ymd(year, month, day)
}

/// 23:59:59.999 on `year-month-day`.  Validation as [`start_of_day_ymd`].
pub fn end_of_day_ymd(year: i32, month: u32, day: u32) -> Result<NaiveDateTime> {
    start_of_day_ymd(year, month, day).map(end_of_day)
}

/// Midnight on the first day of `year-month`.
pub fn start_of_month_ym(year: i32, month: u32) -> Result<NaiveDateTime> {
    ensure_range!(year, MIN_YEAR, MAX_YEAR, "year");
    ensure_range!(month, 1, 12, "month");
    ymd(year, month, 1)
}

/// 23:59:59.999 on the last day of `year-month`.
pub fn end_of_month_ym(year: i32, month: u32) -> Result<NaiveDateTime> {
    start_of_month_ym(year, month).map(end_of_month)
}

/// Midnight on January 1st of `year`.
pub fn start_of_year_y(year: i32) -> Result<NaiveDateTime> {
    ensure_range!(year, MIN_YEAR, MAX_YEAR, "year");
    ymd(year, 1, 1)
}

/// 23:59:59.999 on December 31st of `year`.
pub fn end_of_year_y(year: i32) -> Result<NaiveDateTime> {
    start_of_year_y(year).map(end_of_year)
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

/// Start of the `unit` period containing `date`.
pub fn start_of(date: NaiveDateTime, unit: PeriodUnit) -> NaiveDateTime {
    match unit {
        PeriodUnit::Minute => start_of_minute(date),
        PeriodUnit::Day => start_of_day(date),
        PeriodUnit::Week => start_of_week(date),
        PeriodUnit::IsoWeek => start_of_iso_week(date),
        PeriodUnit::Month => start_of_month(date),
        PeriodUnit::Year => start_of_year(date),
    }
}

/// End of the `unit` period containing `date`.
pub fn end_of(date: NaiveDateTime, unit: PeriodUnit) -> NaiveDateTime {
    match unit {
        PeriodUnit::Minute => end_of_minute(date),
        PeriodUnit::Day => end_of_day(date),
        PeriodUnit::Week => end_of_week(date),
        PeriodUnit::IsoWeek => end_of_iso_week(date),
        PeriodUnit::Month => end_of_month(date),
        PeriodUnit::Year => end_of_year(date),
    }
}
