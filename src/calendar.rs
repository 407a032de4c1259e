//! The face of a calendar system as seen by the UI.
//!
//! A [`Calendar`] owns one date in its own system. The UI queries labels and a grid for it,
//! navigates it and renders again. [`PersianCalendar`] and [`GregorianCalendar`] are the two
//! variants; [`new_facade`] picks one at runtime and optionally wraps it in [`Traced`].

use std::sync::Arc;

use jelal::{IYear, UMonthDay, Weekday};

use crate::{
    GREGORIAN_MONTHS, JALALI_MONTHS, PERSIAN_MONTHS, PERSIAN_WEEKDAYS, WEEKDAYS, WEEKDAYS_ABB,
    arithmetic::{add_months, add_years},
    clock::Clock,
    config::{CalendarConfig, Script},
    convert::{convert, to_gregorian},
    date::{CalendarDate, CalendarSystem, CommonDate, GregorianDate, JalaliDate},
    error::Result,
    grid::{Direction, Grid, MonthGrid, WEEK_DAYS, week_order},
    string::Digits,
};

/// Name of a weekday in two lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayLabel {
    pub short: &'static str,
    pub long: &'static str,
}

impl WeekdayLabel {
    pub const fn new((short, long): (&'static str, &'static str)) -> Self {
        Self { short, long }
    }
}

/// Everything the UI needs from a calendar system.
///
/// Implementors provide the storage of the date and their labels; navigation, conversion and
/// grids come for free on top of [`CommonDate`].
pub trait Calendar {
    fn system(&self) -> CalendarSystem;

    fn config(&self) -> &CalendarConfig;

    fn clock(&self) -> &Arc<dyn Clock>;

    /// The current reference date in this calendar.
    fn date(&self) -> CalendarDate;

    /// Set the reference date from a date of any calendar.
    fn set_date(&mut self, date: CalendarDate) -> Result<()>;

    /// Name of a single weekday.
    fn weekday_label(&self, weekday: Weekday) -> WeekdayLabel;

    /// All 12 month names, first month first.
    fn get_months(&self) -> [&'static str; 12];

    /// What day it is in this calendar.
    fn today(&self) -> Result<CalendarDate> {
        self.get_date(self.clock().today().into())
    }

    /// Express any date in this calendar.
    fn get_date(&self, date: CalendarDate) -> Result<CalendarDate> {
        convert(date, self.system())
    }

    fn get_days_in_month(&self) -> UMonthDay {
        self.date().month_end_day()
    }

    fn first_weekday(&self) -> Weekday {
        self.config().first_weekday(self.system())
    }

    fn direction(&self) -> Direction {
        self.config().direction(self.system())
    }

    fn digits(&self) -> Digits {
        self.config().digits(self.system())
    }

    /// Weekday names in week order, starting from [`Self::first_weekday`].
    ///
    /// This is the logical order; a right to left UI shows the first one at the right.
    fn get_week_days(&self) -> [WeekdayLabel; WEEK_DAYS] {
        week_order(self.first_weekday()).map(|w| self.weekday_label(w))
    }

    /// Lay out the month of the current date.
    fn gen_grid(&self) -> Result<MonthGrid> {
        Grid {
            date: self.date(),
            base_weekday: self.first_weekday(),
            direction: self.direction(),
            digits: self.digits(),
        }
        .build()
    }

    /// Move the date this many months (see [`add_months`]).
    fn advance_months(&mut self, months: i32) -> Result<()> {
        let date = add_months(self.date(), months)?;
        self.set_date(date)
    }

    /// Move the date this many years (see [`add_years`]).
    fn advance_years(&mut self, years: IYear) -> Result<()> {
        let date = add_years(self.date(), years)?;
        self.set_date(date)
    }

    fn jump_to_today(&mut self) -> Result<()> {
        let today = self.today()?;
        self.set_date(today)
    }

    fn month_name(&self) -> &'static str {
        self.get_months()[self.date().month() as usize - 1]
    }

    /// Month name and year, a header for the grid.
    fn month_label(&self) -> String {
        let date = self.date();
        format!("{} {}", self.month_name(), self.digits().format(date.year()))
    }

    /// Full name of the current date, e.g. "Monday 19 October 2026".
    fn date_label(&self) -> String {
        let date = self.date();
        let digits = self.digits();
        format!(
            "{} {} {} {}",
            self.weekday_label(date.weekday()).long,
            digits.format(date.day()),
            self.month_name(),
            digits.format(date.year()),
        )
    }
}

/// The Jalali (Solar Hijri) calendar, Saturday based and right to left by default.
pub struct PersianCalendar {
    date: JalaliDate,
    config: CalendarConfig,
    clock: Arc<dyn Clock>,
}

impl PersianCalendar {
    /// Start at the given date (of any calendar) or today if omitted.
    pub fn new(
        date: Option<CalendarDate>,
        clock: Arc<dyn Clock>,
        config: CalendarConfig,
    ) -> Result<Self> {
        let date = match date {
            Some(date) => to_gregorian(date)?,
            None => clock.today(),
        };
        Ok(Self {
            date: JalaliDate::from_gregorian(date)?,
            config,
            clock,
        })
    }

    pub fn native(&self) -> JalaliDate {
        self.date
    }
}

impl Calendar for PersianCalendar {
    fn system(&self) -> CalendarSystem {
        CalendarSystem::Jalali
    }

    fn config(&self) -> &CalendarConfig {
        &self.config
    }

    fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    fn date(&self) -> CalendarDate {
        self.date.into()
    }

    fn set_date(&mut self, date: CalendarDate) -> Result<()> {
        self.date = match date {
            CalendarDate::Jalali(date) => date,
            other => JalaliDate::from_gregorian(to_gregorian(other)?)?,
        };
        Ok(())
    }

    fn weekday_label(&self, weekday: Weekday) -> WeekdayLabel {
        let i = weekday.get() as usize;
        match self.config.script {
            Script::Native => WeekdayLabel::new(PERSIAN_WEEKDAYS[i]),
            Script::Latin => WeekdayLabel::new((WEEKDAYS_ABB[i], WEEKDAYS[i])),
        }
    }

    fn get_months(&self) -> [&'static str; 12] {
        match self.config.script {
            Script::Native => PERSIAN_MONTHS,
            Script::Latin => JALALI_MONTHS,
        }
    }
}

/// The proleptic Gregorian calendar, Monday based and left to right by default.
pub struct GregorianCalendar {
    date: GregorianDate,
    config: CalendarConfig,
    clock: Arc<dyn Clock>,
}

impl GregorianCalendar {
    /// Start at the given date (of any calendar) or today if omitted.
    pub fn new(
        date: Option<CalendarDate>,
        clock: Arc<dyn Clock>,
        config: CalendarConfig,
    ) -> Result<Self> {
        let date = match date {
            Some(date) => to_gregorian(date)?,
            None => clock.today(),
        };
        Ok(Self {
            date,
            config,
            clock,
        })
    }

    pub fn native(&self) -> GregorianDate {
        self.date
    }
}

impl Calendar for GregorianCalendar {
    fn system(&self) -> CalendarSystem {
        CalendarSystem::Gregorian
    }

    fn config(&self) -> &CalendarConfig {
        &self.config
    }

    fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    fn date(&self) -> CalendarDate {
        self.date.into()
    }

    fn set_date(&mut self, date: CalendarDate) -> Result<()> {
        self.date = to_gregorian(date)?;
        Ok(())
    }

    fn weekday_label(&self, weekday: Weekday) -> WeekdayLabel {
        let i = weekday.get() as usize;
        WeekdayLabel::new((WEEKDAYS_ABB[i], WEEKDAYS[i]))
    }

    fn get_months(&self) -> [&'static str; 12] {
        GREGORIAN_MONTHS
    }
}

/// Logs every call made on the wrapped calendar.
///
/// Queries are logged at `trace` and navigation at `debug` level. Errors are returned untouched
/// and not logged.
pub struct Traced<C> {
    inner: C,
}

impl<C: Calendar> Traced<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> C {
        self.inner
    }

    fn navigated(&self, action: &str) {
        log::debug!(
            "{} calendar {}: now at {}",
            self.inner.system(),
            action,
            self.inner.date()
        );
    }
}

impl<C: Calendar> Calendar for Traced<C> {
    fn system(&self) -> CalendarSystem {
        self.inner.system()
    }

    fn config(&self) -> &CalendarConfig {
        self.inner.config()
    }

    fn clock(&self) -> &Arc<dyn Clock> {
        self.inner.clock()
    }

    fn date(&self) -> CalendarDate {
        self.inner.date()
    }

    fn set_date(&mut self, date: CalendarDate) -> Result<()> {
        self.inner.set_date(date)?;
        self.navigated(&format!("set_date({date})"));
        Ok(())
    }

    fn weekday_label(&self, weekday: Weekday) -> WeekdayLabel {
        self.inner.weekday_label(weekday)
    }

    fn get_months(&self) -> [&'static str; 12] {
        log::trace!("{} calendar get_months()", self.system());
        self.inner.get_months()
    }

    fn today(&self) -> Result<CalendarDate> {
        let today = self.inner.today()?;
        log::trace!("{} calendar today() = {}", self.system(), today);
        Ok(today)
    }

    fn get_date(&self, date: CalendarDate) -> Result<CalendarDate> {
        let native = self.inner.get_date(date)?;
        log::trace!("{} calendar get_date({}) = {}", self.system(), date, native);
        Ok(native)
    }

    fn get_days_in_month(&self) -> UMonthDay {
        let days = self.inner.get_days_in_month();
        log::trace!("{} calendar get_days_in_month() = {}", self.system(), days);
        days
    }

    fn get_week_days(&self) -> [WeekdayLabel; WEEK_DAYS] {
        log::trace!("{} calendar get_week_days()", self.system());
        self.inner.get_week_days()
    }

    fn gen_grid(&self) -> Result<MonthGrid> {
        let grid = self.inner.gen_grid()?;
        log::trace!(
            "{} calendar gen_grid() for {} = {} rows",
            self.system(),
            grid.date(),
            grid.row_count()
        );
        Ok(grid)
    }

    fn advance_months(&mut self, months: i32) -> Result<()> {
        self.inner.advance_months(months)?;
        self.navigated(&format!("advance_months({months})"));
        Ok(())
    }

    fn advance_years(&mut self, years: IYear) -> Result<()> {
        self.inner.advance_years(years)?;
        self.navigated(&format!("advance_years({years})"));
        Ok(())
    }

    fn jump_to_today(&mut self) -> Result<()> {
        self.inner.jump_to_today()?;
        self.navigated("jump_to_today()");
        Ok(())
    }
}

/// Create the calendar of the given system around a date (today if omitted).
///
/// The result is wrapped in [`Traced`] if [`CalendarConfig::trace`] is set.
pub fn new_facade(
    system: CalendarSystem,
    date: Option<CalendarDate>,
    clock: Arc<dyn Clock>,
    config: CalendarConfig,
) -> Result<Box<dyn Calendar + Send>> {
    let trace = config.trace;
    let calendar: Box<dyn Calendar + Send> = match (system, trace) {
        (CalendarSystem::Jalali, false) => Box::new(PersianCalendar::new(date, clock, config)?),
        (CalendarSystem::Jalali, true) => {
            Box::new(Traced::new(PersianCalendar::new(date, clock, config)?))
        }
        (CalendarSystem::Gregorian, false) => {
            Box::new(GregorianCalendar::new(date, clock, config)?)
        }
        (CalendarSystem::Gregorian, true) => {
            Box::new(Traced::new(GregorianCalendar::new(date, clock, config)?))
        }
    };
    Ok(calendar)
}
