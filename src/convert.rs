//! Converts dates between calendar systems.
//!
//! Gregorian is the hub: every calendar only knows how to go to and come back from it, so a
//! conversion between two non-Gregorian calendars is always two hops.

use crate::{
    date::{CalendarDate, CalendarSystem, CommonDate, GregorianDate, JalaliDate},
    error::Result,
};

/// The Gregorian day of any date.
pub fn to_gregorian(date: CalendarDate) -> Result<GregorianDate> {
    match date {
        CalendarDate::Gregorian(date) => Ok(date),
        CalendarDate::Jalali(date) => date.to_gregorian(),
    }
}

/// Express a Gregorian day in the target calendar.
pub fn from_gregorian(date: GregorianDate, target: CalendarSystem) -> Result<CalendarDate> {
    match target {
        CalendarSystem::Gregorian => Ok(CalendarDate::Gregorian(date)),
        CalendarSystem::Jalali => JalaliDate::from_gregorian(date).map(CalendarDate::Jalali),
    }
}

/// Express any date in the target calendar, passing through Gregorian.
pub fn convert(date: CalendarDate, target: CalendarSystem) -> Result<CalendarDate> {
    if date.system() == target {
        return Ok(date);
    }
    from_gregorian(to_gregorian(date)?, target)
}
