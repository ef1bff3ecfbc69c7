//! Inclusive bounds for the integer arguments accepted by kalender-rs.

/// Smallest accepted year argument.
pub const MIN_YEAR: i32 = 1;

/// Largest accepted year argument.
pub const MAX_YEAR: i32 = 9999;

/// Largest accepted day-of-month argument.
///
/// Deliberately loose: the date constructor rejects days that do not exist
/// in the given month.
pub const MAX_DAY_ARG: u32 = 366;

/// Largest ISO-8601 week number.
pub const MAX_ISO_WEEK: u32 = 53;

/// Largest Sunday-start week number (a leap year starting on a Saturday
/// touches 54 such weeks).
pub const MAX_WEEK: u32 = 54;
