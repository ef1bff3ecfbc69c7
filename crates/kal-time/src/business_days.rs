//! Work days: Monday to Friday minus an excluded set of holidays.
//!
//! Holidays are compared at day resolution: a holiday given as
//! `2010-12-24 15:00` excludes all of December 24th.

use std::borrow::Cow;
use std::collections::HashSet;
use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDateTime};
use kal_core::errors::Result;
use kal_core::{ensure, ensure_post};
use tracing::debug;

use crate::boundary::start_of_day;
use crate::date::add_days;
use crate::holidays::danish_holidays;
use crate::range::days_of_week_in_range;
use crate::weekday::DayOfWeek;

/// Where the holidays excluded from work days come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HolidaySource<'a> {
    /// Only weekends are excluded.
    #[default]
    None,
    /// The given dates are excluded.
    Explicit(&'a [NaiveDateTime]),
    /// The Danish holiday table is excluded.
    Danish,
}

/// Options for the work-day functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkDayOptions<'a> {
    /// Holidays to exclude.
    pub holidays: HolidaySource<'a>,
}

impl<'a> WorkDayOptions<'a> {
    /// Exclude weekends only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude weekends and `holidays`.
    pub fn with_holidays(holidays: &'a [NaiveDateTime]) -> Self {
        Self {
            holidays: HolidaySource::Explicit(holidays),
        }
    }

    /// Exclude weekends and Danish holidays.
    pub fn danish() -> Self {
        Self {
            holidays: HolidaySource::Danish,
        }
    }

    /// The concrete holiday dates for the given calendar years.
    fn resolve(&self, years: RangeInclusive<i32>) -> Result<Cow<'a, [NaiveDateTime]>> {
        match self.holidays {
            HolidaySource::None => Ok(Cow::Borrowed(&[])),
            HolidaySource::Explicit(dates) => Ok(Cow::Borrowed(dates)),
            HolidaySource::Danish => {
                let mut dates = Vec::new();
                for year in years {
                    dates.extend(danish_holidays(year)?.into_values());
                }
                Ok(Cow::Owned(dates))
            }
        }
    }
}

/// Every work day in `[start, end]`, at midnight, in ascending order.
///
/// Preconditions as [`days_of_week_in_range`].
pub fn work_days_in_range(
    start: NaiveDateTime,
    end: NaiveDateTime,
    holidays: &[NaiveDateTime],
) -> Result<Vec<NaiveDateTime>> {
    let excluded: HashSet<NaiveDateTime> = holidays.iter().copied().map(start_of_day).collect();
    let mut days = days_of_week_in_range(start, end, &DayOfWeek::WORK_WEEK)?;
    days.retain(|d| !excluded.contains(d));
    Ok(days)
}

/// The date `work_days` work days after `start`, at midnight.
///
/// If `start` is itself a work day it is not counted; otherwise the first
/// work day after it counts as day one.  With [`HolidaySource::Danish`] the
/// table for `start`'s year is used.
///
/// # Errors
/// * [`Error::InvalidArgument`](kal_core::Error::InvalidArgument) if
///   `work_days <= 0`; only forward counting is supported.
/// * [`Error::InternalInvariant`](kal_core::Error::InternalInvariant) if the
///   search window `n + 2n/5 + |holidays| + 5` days long holds fewer than
///   `n` work days.  Each holiday widens the window by one day only, so a
///   dense run of weekday holidays that pushes the answer across further
///   weekends can fall short.
#[tracing::instrument(level = "debug", skip(options), err)]
pub fn add_work_days(
    start: NaiveDateTime,
    work_days: i32,
    options: &WorkDayOptions<'_>,
) -> Result<NaiveDateTime> {
    ensure!(work_days > 0, "work days must be positive, got {work_days}");

    let start = start_of_day(start);
    let holidays = options.resolve(start.year()..=start.year())?;
    let n = i64::from(work_days);
    let window = n + 2 * n / 5 + holidays.len() as i64 + 5;
    let end = add_days(start, window)?;
    debug!(window, holidays = holidays.len(), %end, "work-day search window");

    let days = work_days_in_range(start, end, &holidays)?;
    let steps = work_days as usize;
    let index = if days.first() == Some(&start) {
        steps
    } else {
        steps - 1
    };
    ensure_post!(
        index < days.len(),
        "search window up to {end} holds {} work days, need index {index}",
        days.len()
    );
    Ok(days[index])
}

/// Return `true` if `date` falls on a work day.
///
/// With [`HolidaySource::Danish`] the table for `date`'s year is used.
pub fn is_work_day(date: NaiveDateTime, options: &WorkDayOptions<'_>) -> Result<bool> {
    if DayOfWeek::of(date).is_weekend() {
        return Ok(false);
    }
    let day = start_of_day(date);
    let holidays = options.resolve(date.year()..=date.year())?;
    Ok(!holidays.iter().any(|h| start_of_day(*h) == day))
}

/// Number of work days in `[start, end]`.
///
/// Preconditions as [`days_of_week_in_range`].  With
/// [`HolidaySource::Danish`] the tables of every year from `start` to `end`
/// are used.
#[tracing::instrument(level = "debug", skip(options), err)]
pub fn count_work_days(
    start: NaiveDateTime,
    end: NaiveDateTime,
    options: &WorkDayOptions<'_>,
) -> Result<usize> {
    let holidays = options.resolve(start.year()..=end.year())?;
    debug!(holidays = holidays.len(), "counting work days");
    Ok(work_days_in_range(start, end, &holidays)?.len())
}
