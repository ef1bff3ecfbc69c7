//! # kalender
//!
//! Calendrical calculations on naive date-times: period boundaries, ISO-8601
//! week numbers, work-day arithmetic with holiday exclusion, Gregorian Easter
//! and the Danish holiday table.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates. Application code should depend on this crate rather
//! than the individual `kal-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! kalender = "0.1"
//! ```
//!
//! ```rust
//! use kalender::prelude::*;
//!
//! let start = start_of_day_ymd(2010, 12, 20)?;
//! assert_eq!(add_work_days(start, 6, &WorkDayOptions::new())?, start_of_day_ymd(2010, 12, 28)?);
//! assert_eq!(add_work_days(start, 6, &WorkDayOptions::danish())?, start_of_day_ymd(2010, 12, 29)?);
//!
//! assert_eq!(iso_week_in_year(start_of_day_ymd(2010, 10, 27)?), 43);
//! assert_eq!(easter(2010)?, start_of_day_ymd(2010, 4, 4)?);
//! # Ok::<(), kalender::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and argument bounds.
pub use kal_core as core;

/// Calendrical operations.
pub use kal_time as time;

/// The date value every operation takes and returns.
pub use chrono::NaiveDateTime;

/// Everything needed for typical use, in one import.
pub mod prelude {
    pub use chrono::NaiveDateTime;
    pub use kal_core::{Error, Result};
    pub use kal_time::*;
}
