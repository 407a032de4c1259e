//! Two calendars showing the same day side by side.

use std::sync::Arc;

use crate::{
    arithmetic::add_months,
    calendar::{Calendar, GregorianCalendar, PersianCalendar},
    clock::Clock,
    config::CalendarConfig,
    convert::convert,
    date::{CalendarDate, CalendarSystem},
    error::Result,
    grid::MonthGrid,
};

/// A Jalali and a Gregorian calendar that always point at the same day.
///
/// Navigating either side moves both; the other side follows the resulting day, so the months
/// shown may differ while the day is the same.
pub struct DualCalendar {
    persian: PersianCalendar,
    gregorian: GregorianCalendar,
}

impl DualCalendar {
    /// Start both calendars at the given date (of any calendar) or today if omitted.
    pub fn new(
        date: Option<CalendarDate>,
        clock: Arc<dyn Clock>,
        persian: CalendarConfig,
        gregorian: CalendarConfig,
    ) -> Result<Self> {
        let date = match date {
            Some(date) => date,
            None => clock.today().into(),
        };
        Ok(Self {
            persian: PersianCalendar::new(Some(date), Arc::clone(&clock), persian)?,
            gregorian: GregorianCalendar::new(Some(date), clock, gregorian)?,
        })
    }

    pub fn persian(&self) -> &PersianCalendar {
        &self.persian
    }

    pub fn gregorian(&self) -> &GregorianCalendar {
        &self.gregorian
    }

    pub fn calendar(&self, system: CalendarSystem) -> &dyn Calendar {
        match system {
            CalendarSystem::Jalali => &self.persian,
            CalendarSystem::Gregorian => &self.gregorian,
        }
    }

    /// The shared day, in the given calendar.
    pub fn date(&self, system: CalendarSystem) -> CalendarDate {
        self.calendar(system).date()
    }

    /// Move both sides to a date of any calendar.
    ///
    /// Nothing changes if the date can not be expressed in both calendars.
    pub fn set_date(&mut self, date: CalendarDate) -> Result<()> {
        let persian = convert(date, CalendarSystem::Jalali)?;
        let gregorian = convert(date, CalendarSystem::Gregorian)?;
        self.persian.set_date(persian)?;
        self.gregorian.set_date(gregorian)?;
        Ok(())
    }

    /// Move by whole months of the given calendar, clamping the day like [`add_months`].
    pub fn advance_months(&mut self, system: CalendarSystem, months: i32) -> Result<()> {
        let date = add_months(self.date(system), months)?;
        self.set_date(date)
    }

    pub fn jump_to_today(&mut self) -> Result<()> {
        let today = self.gregorian.today()?;
        self.set_date(today)
    }

    /// Grids of both months, Jalali first.
    pub fn grids(&self) -> Result<[MonthGrid; 2]> {
        Ok([self.persian.gen_grid()?, self.gregorian.gen_grid()?])
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{clock::FixedClock, date::JalaliDate};

    fn dual() -> DualCalendar {
        DualCalendar::new(
            None,
            Arc::new(FixedClock(date(2026, 10, 19))),
            Default::default(),
            Default::default(),
        )
        .unwrap()
    }

    fn assert_synced(dual: &DualCalendar) {
        let persian = dual.date(CalendarSystem::Jalali);
        let gregorian = dual.date(CalendarSystem::Gregorian);
        assert!(persian.is_same_day(&gregorian).unwrap(), "{persian} {gregorian}");
    }

    #[test]
    fn test_starts_today() {
        let dual = dual();
        assert_eq!(
            dual.date(CalendarSystem::Jalali),
            JalaliDate::new(1405, 7, 27).unwrap().into()
        );
        assert_eq!(dual.gregorian().native(), date(2026, 10, 19));
        assert_synced(&dual);
    }

    #[test]
    fn test_advance_either_side() {
        let mut dual = dual();
        dual.advance_months(CalendarSystem::Gregorian, 1).unwrap();
        assert_eq!(dual.gregorian().native(), date(2026, 11, 19));
        assert_synced(&dual);

        dual.advance_months(CalendarSystem::Jalali, -2).unwrap();
        assert_eq!(
            dual.persian().native(),
            JalaliDate::new(1405, 6, 28).unwrap()
        );
        assert_synced(&dual);

        dual.jump_to_today().unwrap();
        assert_eq!(dual.gregorian().native(), date(2026, 10, 19));
        assert_synced(&dual);
    }

    #[test]
    fn test_set_date_is_all_or_nothing() {
        let mut dual = dual();
        dual.set_date(JalaliDate::new(1404, 1, 1).unwrap().into())
            .unwrap();
        assert_eq!(dual.gregorian().native(), date(2025, 3, 21));

        // no Jalali year for this day
        assert!(dual.set_date(date(500, 1, 1).into()).is_err());
        assert_eq!(dual.gregorian().native(), date(2025, 3, 21));
        assert_synced(&dual);
    }

    #[test]
    fn test_grids() {
        let dual = dual();
        let [persian, gregorian] = dual.grids().unwrap();
        assert_eq!(persian.date(), dual.date(CalendarSystem::Jalali));
        assert_eq!(gregorian.date(), dual.date(CalendarSystem::Gregorian));
        assert!(
            persian
                .in_month_cells()
                .any(|c| c.date.is_same_day(&gregorian.date()).unwrap())
        );
    }
}
