//! Month grids and month arithmetic for a dual Jalali/Gregorian calendar.
//!
//! The UI asks a [`calendar::Calendar`] (one per calendar system, or both at once through
//! [`dual::DualCalendar`]) for labels and a [`grid::MonthGrid`], navigates it month by month and
//! renders the result. Nothing in this crate draws, stores settings or reads the wall clock
//! directly; the current day comes from an injected [`clock::Clock`].
pub mod arithmetic;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod convert;
pub mod date;
pub mod dual;
pub mod error;
pub mod grid;
pub mod string;

pub use calendar::{Calendar, GregorianCalendar, PersianCalendar, WeekdayLabel, new_facade};
pub use date::{CalendarDate, CalendarSystem, CommonDate, GregorianDate, JalaliDate};
pub use error::{Error, Result};

/// Sunday based weekdays in English.
pub const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// [`WEEKDAYS`] abbreviations to 3 letters.
pub const WEEKDAYS_ABB: [&str; 7] = abbr_strarr(WEEKDAYS);

/// Sunday based weekdays in Persian as (short, long).
pub const PERSIAN_WEEKDAYS: [(&str, &str); 7] = [
    ("۱ش", "یک\u{200c}شنبه"),
    ("۲ش", "دو\u{200c}شنبه"),
    ("۳ش", "سه\u{200c}شنبه"),
    ("۴ش", "چهار\u{200c}شنبه"),
    ("۵ش", "پنج\u{200c}شنبه"),
    ("آ", "آدینه"),
    ("ش", "شنبه"),
];

/// Gregorian months in English.
pub const GREGORIAN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Jalali months in English.
// Note to future self: these are popular, known and accepted, officially and non-officially.
// do NOT change!
pub const JALALI_MONTHS: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

/// Jalali months in Persian.
pub const PERSIAN_MONTHS: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Abbreviate to 3 letters.
const fn abbr_strarr<const N: usize>(original: [&str; N]) -> [&str; N] {
    const CHARS: usize = 3;

    let mut v = [""; N];
    let mut i = 0;
    while i < original.len() {
        assert!(
            original[i].is_ascii() && original[i].len() >= CHARS,
            "automatic abbrevations only work with ASCII strings with enough length",
        );

        // a way around Index not being in const
        v[i] = unsafe {
            core::str::from_utf8_unchecked(
                original[i]
                    .as_bytes()
                    .first_chunk::<CHARS>()
                    .unwrap()
                    .as_slice(),
            )
        };
        i += 1;
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_abbreviations() {
        assert_eq!(
            WEEKDAYS_ABB,
            ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        );
    }

    #[test]
    fn test_persian_weekdays_are_sunday_based() {
        assert_eq!(PERSIAN_WEEKDAYS[6].1, "شنبه");
        assert_eq!(PERSIAN_WEEKDAYS[5].1, "آدینه");
    }
}
