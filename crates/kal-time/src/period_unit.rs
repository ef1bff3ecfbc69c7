//! `PeriodUnit` — the calendar periods whose boundaries can be computed.

/// A calendar period with a well-defined start and end.
///
/// Used with [`crate::boundary::start_of`] and [`crate::boundary::end_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodUnit {
    /// A clock minute.
    Minute,
    /// A calendar day.
    Day,
    /// A Sunday-start week.
    Week,
    /// An ISO-8601 (Monday-start) week.
    IsoWeek,
    /// A calendar month.
    Month,
    /// A calendar year.
    Year,
}

impl PeriodUnit {
    /// Every unit, shortest first.
    pub const ALL: [PeriodUnit; 6] = [
        PeriodUnit::Minute,
        PeriodUnit::Day,
        PeriodUnit::Week,
        PeriodUnit::IsoWeek,
        PeriodUnit::Month,
        PeriodUnit::Year,
    ];
}

impl std::fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeriodUnit::Minute => write!(f, "Minute"),
            PeriodUnit::Day => write!(f, "Day"),
            PeriodUnit::Week => write!(f, "Week"),
            PeriodUnit::IsoWeek => write!(f, "ISO Week"),
            PeriodUnit::Month => write!(f, "Month"),
            PeriodUnit::Year => write!(f, "Year"),
        }
    }
}
