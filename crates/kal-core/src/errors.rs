//! Error types for kalender-rs.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum below.  Argument
//! checks go through the `ensure!`, `ensure_range!` and `ensure_post!`
//! macros so that each failure kind maps to exactly one variant.

use thiserror::Error;

/// The top-level error type used throughout kalender-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An integer argument (year, month, day, week number) is outside its
    /// documented bounds.  Detected before any computation takes place.
    #[error("{name} ({value}) out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the offending argument.
        name: &'static str,
        /// The value that was supplied.
        value: i64,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },

    /// A structural precondition was violated (empty weekday set, unordered
    /// range, non-positive work-day count).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The underlying date primitive rejected the components, e.g. 31 April.
    #[error("cannot construct date: {0}")]
    Construction(String),

    /// An internal postcondition failed.  Never expected to occur.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),
}

/// Shorthand `Result` type used throughout kalender-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use kal_core::{ensure, errors::Error};
/// fn positive(n: i32) -> kal_core::errors::Result<i32> {
///     ensure!(n > 0, "n must be positive, got {n}");
///     Ok(n)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(0), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::OutOfRange { .. })` unless `$min <= $value <= $max`.
///
/// # Example
/// ```
/// use kal_core::{ensure_range, errors::Error};
/// fn month(m: u32) -> kal_core::errors::Result<u32> {
///     ensure_range!(m, 1, 12, "month");
///     Ok(m)
/// }
/// assert!(month(12).is_ok());
/// assert_eq!(
///     month(13),
///     Err(Error::OutOfRange { name: "month", value: 13, min: 1, max: 12 })
/// );
/// ```
#[macro_export]
macro_rules! ensure_range {
    ($value:expr, $min:expr, $max:expr, $name:expr) => {{
        let value = i64::from($value);
        let (min, max) = (i64::from($min), i64::from($max));
        if value < min || value > max {
            return Err($crate::errors::Error::OutOfRange {
                name: $name,
                value,
                min,
                max,
            });
        }
    }};
}

/// Returns `Err(Error::InternalInvariant(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use kal_core::{ensure_post, errors::Error};
/// fn halve(xs: &[u8]) -> kal_core::errors::Result<u8> {
///     let mid = xs.len() / 2;
///     ensure_post!(mid < xs.len(), "no middle element in {} items", xs.len());
///     Ok(xs[mid])
/// }
/// assert!(halve(&[1, 2, 3]).is_ok());
/// assert!(matches!(halve(&[]), Err(Error::InternalInvariant(_))));
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InternalInvariant(
                format!($($msg)*)
            ));
        }
    };
}
