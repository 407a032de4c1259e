//! Errors shared by every calendar operation of this crate.

use std::{error, fmt};

use jelal::{IYear, UMonth, UMonthDay};

use crate::date::CalendarSystem;

/// Shorthand for results of this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug)]
pub enum Error {
    /// The day (or month) does not exist in that year of that calendar.
    InvalidDate {
        system: CalendarSystem,
        year: IYear,
        month: UMonth,
        day: UMonthDay,
    },
    /// A calendar was requested by a name that is not known to this crate.
    UnsupportedCalendarSystem(String),
    /// The year is valid for the calendar but cannot be represented or converted here.
    OutOfRange { system: CalendarSystem, year: IYear },
    /// Span arithmetic failed inside [`jiff`].
    Jiff(jiff::Error),
}

impl Error {
    pub(crate) fn invalid(system: CalendarSystem, year: IYear, month: UMonth, day: UMonthDay) -> Self {
        Self::InvalidDate {
            system,
            year,
            month,
            day,
        }
    }

    /// True if this is an [`Error::InvalidDate`].
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, Self::InvalidDate { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate {
                system,
                year,
                month,
                day,
            } => write!(f, "{year}/{month}/{day} is not a valid {system} date"),
            Self::UnsupportedCalendarSystem(name) => {
                write!(f, "unsupported calendar system \"{name}\"")
            }
            Self::OutOfRange { system, year } => {
                let (min, max) = system.year_range();
                write!(
                    f,
                    "{system} year {year} is out of the supported range ({min} to {max})"
                )
            }
            Self::Jiff(e) => write!(f, "date arithmetic failed: {e}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Jiff(e) => Some(e),
            _ => None,
        }
    }
}

impl From<jiff::Error> for Error {
    fn from(value: jiff::Error) -> Self {
        Self::Jiff(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_message() {
        let e = Error::invalid(CalendarSystem::Jalali, 1404, 12, 30);
        assert!(e.is_invalid_date());
        assert_eq!(e.to_string(), "1404/12/30 is not a valid Jalali date");
    }

    #[test]
    fn test_out_of_range_message() {
        let e = Error::OutOfRange {
            system: CalendarSystem::Gregorian,
            year: 12000,
        };
        assert!(!e.is_invalid_date());
        assert_eq!(
            e.to_string(),
            "Gregorian year 12000 is out of the supported range (-9999 to 9999)"
        );
    }
}
