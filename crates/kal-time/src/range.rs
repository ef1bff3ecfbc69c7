//! Enumerate the dates in a range that fall on chosen days of the week.

use chrono::NaiveDateTime;
use kal_core::ensure;
use kal_core::errors::Result;

use crate::boundary::start_of_day;
use crate::date::shift;
use crate::weekday::DayOfWeek;

/// Every date in `[start, end]` whose day of week is in `weekdays`.
///
/// Both bounds are truncated to midnight and the walk is inclusive of the
/// end day.  The result is in ascending order, each element at midnight.
///
/// # Errors
/// [`Error::InvalidArgument`](kal_core::Error::InvalidArgument) if
/// `start >= end` (compared before truncation) or `weekdays` is empty.
pub fn days_of_week_in_range(
    start: NaiveDateTime,
    end: NaiveDateTime,
    weekdays: &[DayOfWeek],
) -> Result<Vec<NaiveDateTime>> {
    ensure!(start < end, "range start {start} must precede end {end}");
    ensure!(!weekdays.is_empty(), "weekday set must not be empty");

    let last = start_of_day(end);
    let mut days = Vec::new();
    let mut day = start_of_day(start);
    while day <= last {
        if weekdays.contains(&DayOfWeek::of(day)) {
            days.push(day);
        }
        day = shift(day, 1);
    }
    Ok(days)
}
