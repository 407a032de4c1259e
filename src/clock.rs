//! Where "today" comes from.

use jiff::Zoned;

use crate::date::GregorianDate;

/// Source of the current day, injected into calendars so they can be tested at any date.
pub trait Clock: Send + Sync {
    /// The current day in the proleptic Gregorian calendar.
    fn today(&self) -> GregorianDate;
}

/// The local date of the system's time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> GregorianDate {
        Zoned::now().date()
    }
}

/// Always the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub GregorianDate);

impl Clock for FixedClock {
    fn today(&self) -> GregorianDate {
        self.0
    }
}
