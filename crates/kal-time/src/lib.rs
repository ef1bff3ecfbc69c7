//! # kal-time
//!
//! Calendrical calculations over `chrono::NaiveDateTime`: period boundaries,
//! ISO-8601 and Sunday-start week numbers, day-of-week ranges, work-day
//! arithmetic, Gregorian Easter and the Danish holiday table.
//!
//! Every function is pure; the only shared data are the two constant holiday
//! tables in [`holidays`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Start and end of minutes, days, weeks, months and years.
pub mod boundary;

/// Work-day ranges and work-day arithmetic.
pub mod business_days;

/// Date construction and day arithmetic.
pub mod date;

/// Gregorian Easter Sunday.
pub mod easter;

/// Danish holiday tables.
pub mod holidays;

/// `Month` — month of the year.
pub mod month;

/// `PeriodUnit` — minute, day, week, ISO week, month, year.
pub mod period_unit;

/// Dates in a range matching a set of weekdays.
pub mod range;

/// ISO-8601 and Sunday-start week numbering.
pub mod week;

/// `DayOfWeek` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use boundary::{
    end_of, end_of_day, end_of_day_ymd, end_of_iso_week, end_of_minute, end_of_month,
    end_of_month_ym, end_of_week, end_of_year, end_of_year_y, start_of, start_of_day,
    start_of_day_ymd, start_of_iso_week, start_of_minute, start_of_month, start_of_month_ym,
    start_of_week, start_of_year, start_of_year_y,
};
pub use business_days::{
    add_work_days, count_work_days, is_work_day, work_days_in_range, HolidaySource,
    WorkDayOptions,
};
pub use easter::easter;
pub use holidays::{
    danish_holiday_name, danish_holidays, easter_dependent_holidays, fixed_holidays,
    is_danish_holiday, HolidayTable, MonthDay,
};
pub use month::Month;
pub use period_unit::PeriodUnit;
pub use range::days_of_week_in_range;
pub use week::{
    iso_week_in_year, iso_weeks_in_year, start_of_iso_week_in_year, start_of_week_in_year,
    week_in_year,
};
pub use weekday::DayOfWeek;
