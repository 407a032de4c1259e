//! Holds the supported calendar systems, their date values and a unified view over them.

use std::{fmt, str::FromStr};

use jelal::{IDayDiff, IYear, MonthDay, UMonth, UMonthDay, Weekday, Year};
use jiff::{Span, civil};

use crate::{
    error::{Error, Result},
    grid::Direction,
};

const JIFF_MIN_YEAR: IYear = -9999;
const JIFF_MAX_YEAR: IYear = 9999;

/// Day zero of the day count shared by both calendars (Jalali 1348/10/11).
pub(crate) const UNIX_EPOCH: civil::Date = civil::Date::constant(1970, 1, 1);

/// The proleptic Gregorian date, the interchange representation between calendars.
pub type GregorianDate = civil::Date;

/// Calendars known to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarSystem {
    Gregorian,
    Jalali,
}

impl CalendarSystem {
    /// Every system in the order the applet shows them.
    pub const ALL: [Self; 2] = [Self::Jalali, Self::Gregorian];

    /// English name of the system.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gregorian => "Gregorian",
            Self::Jalali => "Jalali",
        }
    }

    /// Smallest and largest year (inclusive) a date of this system can have.
    pub const fn year_range(self) -> (IYear, IYear) {
        match self {
            Self::Gregorian => (JIFF_MIN_YEAR, JIFF_MAX_YEAR),
            Self::Jalali => (JalaliDate::MIN_YEAR, JalaliDate::MAX_YEAR),
        }
    }

    /// Fail with [`Error::OutOfRange`] if the year cannot be represented.
    pub fn check_year(self, year: IYear) -> Result<()> {
        let (min, max) = self.year_range();
        if (min..=max).contains(&year) {
            Ok(())
        } else {
            Err(Error::OutOfRange { system: self, year })
        }
    }

    /// Whether the last month of this year has its extra day.
    pub fn is_leap_year(self, year: IYear) -> bool {
        match self {
            Self::Gregorian => year % 4 == 0 && (year % 100 != 0 || year % 400 == 0),
            Self::Jalali => Year::from(year).is_leap(),
        }
    }

    /// Number of days of the month in that year or [`None`] if the month is not in 1..=12.
    pub fn days_in_month(self, year: IYear, month: UMonth) -> Option<UMonthDay> {
        let days = match (self, month) {
            (_, 0) | (_, 13..) => return None,
            (Self::Gregorian, 2) if self.is_leap_year(year) => 29,
            (Self::Gregorian, 2) => 28,
            (Self::Gregorian, 4 | 6 | 9 | 11) => 30,
            (Self::Gregorian, _) => 31,
            (Self::Jalali, 1..=6) => 31,
            (Self::Jalali, 7..=11) => 30,
            (Self::Jalali, _) if self.is_leap_year(year) => 30,
            (Self::Jalali, _) => 29,
        };
        Some(days)
    }

    /// The weekday that starts a week in this calendar.
    pub const fn default_first_weekday(self) -> Weekday {
        match self {
            Self::Gregorian => Weekday::MON,
            Self::Jalali => Weekday::SAT,
        }
    }

    /// How the grid columns are usually laid out for this calendar.
    pub const fn default_direction(self) -> Direction {
        match self {
            Self::Gregorian => Direction::LeftToRight,
            Self::Jalali => Direction::RightToLeft,
        }
    }

    /// Create a validated date in this system.
    pub fn date(self, year: IYear, month: UMonth, day: UMonthDay) -> Result<CalendarDate> {
        CalendarDate::new(self, year, month, day)
    }
}

impl fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalendarSystem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "gregorian" | "georgian" | "iso" => Ok(Self::Gregorian),
            "jalali" | "persian" | "shamsi" | "solar hijri" => Ok(Self::Jalali),
            _ => Err(Error::UnsupportedCalendarSystem(s.to_owned())),
        }
    }
}

/// A valid Jalali (Persian) date.
///
/// Unlike [`jelal::Date`] this never saturates: construction fails if the day does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaliDate {
    year: IYear,
    month: UMonth,
    day: UMonthDay,
}

impl JalaliDate {
    /// First whole year that fits in the Gregorian range.
    pub const MIN_YEAR: IYear = 1;

    /// Last year that fits in the Gregorian range, only up to [`Self::MAX_MONTH_DAY`].
    pub const MAX_YEAR: IYear = 9378;

    /// Last day of [`Self::MAX_YEAR`] (Gregorian 9999/12/31).
    pub const MAX_MONTH_DAY: (UMonth, UMonthDay) = (10, 10);

    pub fn new(year: IYear, month: UMonth, day: UMonthDay) -> Result<Self> {
        CalendarSystem::Jalali.check_year(year)?;
        match CalendarSystem::Jalali.days_in_month(year, month) {
            Some(max) if (MonthDay::MIN_DAY..=max).contains(&day) => {}
            _ => return Err(Error::invalid(CalendarSystem::Jalali, year, month, day)),
        }
        if year == Self::MAX_YEAR && (month, day) > Self::MAX_MONTH_DAY {
            return Err(Error::OutOfRange {
                system: CalendarSystem::Jalali,
                year,
            });
        }
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> IYear {
        self.year
    }

    pub fn month(&self) -> UMonth {
        self.month
    }

    pub fn day(&self) -> UMonthDay {
        self.day
    }

    pub fn days_in_month(&self) -> UMonthDay {
        // months are validated on construction
        CalendarSystem::Jalali
            .days_in_month(self.year, self.month)
            .unwrap_or(MonthDay::POST_MID_MAX_DAY)
    }

    /// The Gregorian day this is.
    pub fn to_gregorian(self) -> Result<GregorianDate> {
        let days = self.days_from_epoch();
        UNIX_EPOCH
            .checked_add(Span::new().try_days(i64::from(days))?)
            .map_err(|_| Error::OutOfRange {
                system: CalendarSystem::Gregorian,
                year: self.year,
            })
    }

    /// The Jalali day of the given Gregorian date.
    pub fn from_gregorian(date: GregorianDate) -> Result<Self> {
        let days = UNIX_EPOCH.until(date)?.get_days();
        Self::from_jelal(&jelal::Date::EPOCH.add_days(days))
    }

    /// Signed days since the epoch (1348/10/11).
    ///
    /// Summed from whole year lengths so it is the exact inverse of [`jelal::Date::add_days`].
    fn days_from_epoch(self) -> IDayDiff {
        let epoch = jelal::Date::EPOCH;
        let epoch_year = epoch.year().get();
        let year_days = |year: IYear| Year::from(year).max_ordinal().get() as IDayDiff;
        let years: IDayDiff = if self.year >= epoch_year {
            (epoch_year..self.year).map(year_days).sum()
        } else {
            -(self.year..epoch_year).map(year_days).sum::<IDayDiff>()
        };
        let ordinal = |date: &jelal::Date| date.ordinal().get() as IDayDiff;
        years + ordinal(&self.to_jelal()) - ordinal(&epoch)
    }

    fn to_jelal(self) -> jelal::Date {
        jelal::Date::from((self.year, self.month, self.day))
    }

    fn from_jelal(date: &jelal::Date) -> Result<Self> {
        let md = MonthDay::from(date.clone());
        Self::new(date.year().get(), md.month().get(), md.day())
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.year, self.month, self.day)
    }
}

/// Provides primitive insights for date structs of any supported calendar.
///
/// Everything month arithmetic and grids need is here so they never have to know which calendar
/// they are working on. Implementing this (plus a conversion pair in [`crate::convert`]) is all a
/// new calendar needs.
pub trait CommonDate: Copy {
    /// Which calendar this date belongs to.
    fn system(&self) -> CalendarSystem;

    /// Return what year it is.
    fn year(&self) -> IYear;

    /// Return what month it is (1..=12).
    fn month(&self) -> UMonth;

    /// Returns what day of the month is it (1..=31).
    fn day(&self) -> UMonthDay;

    /// What is the maximum day of this month.
    fn month_end_day(&self) -> UMonthDay;

    /// What weekday it is.
    fn weekday(&self) -> Weekday;

    /// The first day of this month.
    fn first_of_month(self) -> Self;

    /// Move this many days forward (or backward if negative).
    fn checked_add_days(self, days: IDayDiff) -> Result<Self>;

    /// Replace the year keeping month and day or fail with [`Error::InvalidDate`] if that day
    /// does not exist in the new year.
    fn with_year(self, year: IYear) -> Result<Self>;
}

impl CommonDate for civil::Date {
    fn system(&self) -> CalendarSystem {
        CalendarSystem::Gregorian
    }

    fn year(&self) -> IYear {
        civil::Date::year(*self) as IYear
    }

    fn month(&self) -> UMonth {
        civil::Date::month(*self) as UMonth
    }

    fn day(&self) -> UMonthDay {
        civil::Date::day(*self) as UMonthDay
    }

    fn month_end_day(&self) -> UMonthDay {
        civil::Date::days_in_month(*self) as UMonthDay
    }

    fn weekday(&self) -> Weekday {
        civil::Date::weekday(*self).into()
    }

    fn first_of_month(self) -> Self {
        civil::Date::first_of_month(self)
    }

    fn checked_add_days(self, days: IDayDiff) -> Result<Self> {
        let span = Span::new().try_days(i64::from(days))?;
        civil::Date::checked_add(self, span).map_err(|_| Error::OutOfRange {
            system: CalendarSystem::Gregorian,
            year: CommonDate::year(&self),
        })
    }

    fn with_year(self, year: IYear) -> Result<Self> {
        CalendarSystem::Gregorian.check_year(year)?;
        let (month, day) = (CommonDate::month(&self), CommonDate::day(&self));
        civil::Date::new(year as i16, month as i8, day as i8)
            .map_err(|_| Error::invalid(CalendarSystem::Gregorian, year, month, day))
    }
}

impl CommonDate for JalaliDate {
    fn system(&self) -> CalendarSystem {
        CalendarSystem::Jalali
    }

    fn year(&self) -> IYear {
        self.year
    }

    fn month(&self) -> UMonth {
        self.month
    }

    fn day(&self) -> UMonthDay {
        self.day
    }

    fn month_end_day(&self) -> UMonthDay {
        self.days_in_month()
    }

    fn weekday(&self) -> Weekday {
        civil::Date::weekday(UNIX_EPOCH)
            .wrapping_add(self.days_from_epoch())
            .into()
    }

    fn first_of_month(self) -> Self {
        Self {
            day: MonthDay::MIN_DAY,
            ..self
        }
    }

    fn checked_add_days(self, days: IDayDiff) -> Result<Self> {
        Self::from_jelal(&self.to_jelal().add_days(days))
    }

    fn with_year(self, year: IYear) -> Result<Self> {
        Self::new(year, self.month, self.day)
    }
}

/// A single day tagged with the calendar it is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarDate {
    Gregorian(GregorianDate),
    Jalali(JalaliDate),
}

impl CalendarDate {
    /// Create a validated date in the given system.
    pub fn new(system: CalendarSystem, year: IYear, month: UMonth, day: UMonthDay) -> Result<Self> {
        match system {
            CalendarSystem::Gregorian => {
                system.check_year(year)?;
                match system.days_in_month(year, month) {
                    Some(max) if (MonthDay::MIN_DAY..=max).contains(&day) => {
                        civil::Date::new(year as i16, month as i8, day as i8)
                            .map(Self::Gregorian)
                            .map_err(|_| Error::invalid(system, year, month, day))
                    }
                    _ => Err(Error::invalid(system, year, month, day)),
                }
            }
            CalendarSystem::Jalali => JalaliDate::new(year, month, day).map(Self::Jalali),
        }
    }

    pub fn gregorian(&self) -> Option<GregorianDate> {
        match self {
            Self::Gregorian(date) => Some(*date),
            Self::Jalali(_) => None,
        }
    }

    pub fn jalali(&self) -> Option<JalaliDate> {
        match self {
            Self::Jalali(date) => Some(*date),
            Self::Gregorian(_) => None,
        }
    }

    /// Whether both values name the same day regardless of their calendars.
    pub fn is_same_day(&self, other: &Self) -> Result<bool> {
        Ok(crate::convert::to_gregorian(*self)? == crate::convert::to_gregorian(*other)?)
    }
}

impl CommonDate for CalendarDate {
    fn system(&self) -> CalendarSystem {
        match self {
            Self::Gregorian(_) => CalendarSystem::Gregorian,
            Self::Jalali(_) => CalendarSystem::Jalali,
        }
    }

    fn year(&self) -> IYear {
        match self {
            Self::Gregorian(date) => CommonDate::year(date),
            Self::Jalali(date) => date.year(),
        }
    }

    fn month(&self) -> UMonth {
        match self {
            Self::Gregorian(date) => CommonDate::month(date),
            Self::Jalali(date) => date.month(),
        }
    }

    fn day(&self) -> UMonthDay {
        match self {
            Self::Gregorian(date) => CommonDate::day(date),
            Self::Jalali(date) => date.day(),
        }
    }

    fn month_end_day(&self) -> UMonthDay {
        match self {
            Self::Gregorian(date) => date.month_end_day(),
            Self::Jalali(date) => date.month_end_day(),
        }
    }

    fn weekday(&self) -> Weekday {
        match self {
            Self::Gregorian(date) => CommonDate::weekday(date),
            Self::Jalali(date) => CommonDate::weekday(date),
        }
    }

    fn first_of_month(self) -> Self {
        match self {
            Self::Gregorian(date) => Self::Gregorian(CommonDate::first_of_month(date)),
            Self::Jalali(date) => Self::Jalali(date.first_of_month()),
        }
    }

    fn checked_add_days(self, days: IDayDiff) -> Result<Self> {
        match self {
            Self::Gregorian(date) => date.checked_add_days(days).map(Self::Gregorian),
            Self::Jalali(date) => date.checked_add_days(days).map(Self::Jalali),
        }
    }

    fn with_year(self, year: IYear) -> Result<Self> {
        match self {
            Self::Gregorian(date) => date.with_year(year).map(Self::Gregorian),
            Self::Jalali(date) => date.with_year(year).map(Self::Jalali),
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gregorian(date) => write!(f, "{date}"),
            Self::Jalali(date) => write!(f, "{date}"),
        }
    }
}

impl From<GregorianDate> for CalendarDate {
    fn from(value: GregorianDate) -> Self {
        Self::Gregorian(value)
    }
}

impl From<JalaliDate> for CalendarDate {
    fn from(value: JalaliDate) -> Self {
        Self::Jalali(value)
    }
}
