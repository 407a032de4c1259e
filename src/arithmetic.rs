//! Month and year arithmetic that works on any calendar through [`CommonDate`].
//!
//! Months are walked one day at a time in the date's own calendar, so month lengths and leap
//! years of that calendar are respected without knowing them. When the destination month is too
//! short, the day is clamped to its last day.

use jelal::IYear;

use crate::{
    date::CommonDate,
    error::{Error, Result},
};

/// Same day of the next month or the last day of it if it is shorter.
///
/// ```text
/// 2010/01/31 -> 2010/02/28
/// ```
pub fn add_one_month<D: CommonDate>(date: D) -> Result<D> {
    // advance to start of next month
    let mut later = date.checked_add_days(1)?;
    while later.month() == date.month() {
        later = later.checked_add_days(1)?;
    }

    let target_month = later.month();
    while later.day() < date.day() {
        let next = later.checked_add_days(1)?;
        if next.month() != target_month {
            break;
        }
        later = next;
    }
    Ok(later)
}

/// Same day of the previous month or the last day of it if it is shorter.
///
/// ```text
/// 2010/03/31 -> 2010/02/28
/// ```
pub fn subtract_one_month<D: CommonDate>(date: D) -> Result<D> {
    let mut earlier = date.checked_add_days(-1)?;
    while earlier.month() == date.month() || earlier.day() > date.day() {
        earlier = earlier.checked_add_days(-1)?;
    }
    Ok(earlier)
}

/// Move by this many months, one month at a time.
///
/// Every step clamps on its own: 31 January plus two months is 28 March when February has 28
/// days, not 31 March.
pub fn add_months<D: CommonDate>(mut date: D, months: i32) -> Result<D> {
    for _ in 0..months.unsigned_abs() {
        date = if months > 0 {
            add_one_month(date)?
        } else {
            subtract_one_month(date)?
        };
    }
    Ok(date)
}

/// Move by this many years keeping the month and day, stepping back a day while it does not exist.
pub fn add_years<D: CommonDate>(mut date: D, years: IYear) -> Result<D> {
    let year = date
        .year()
        .checked_add(years)
        .ok_or_else(|| Error::OutOfRange {
            system: date.system(),
            year: date.year(),
        })?;
    loop {
        match date.with_year(year) {
            Err(e) if e.is_invalid_date() => date = date.checked_add_days(-1)?,
            other => return other,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::{Date, date};

    use super::*;
    use crate::date::{CalendarDate, JalaliDate};

    fn jalali(y: IYear, m: u8, d: u8) -> JalaliDate {
        JalaliDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_add_one_month_same_day() {
        assert_eq!(add_one_month(date(2025, 5, 14)).unwrap(), date(2025, 6, 14));
        assert_eq!(add_one_month(date(2025, 12, 1)).unwrap(), date(2026, 1, 1));
    }

    #[test]
    fn test_month_end_clamping() {
        assert_eq!(add_months(date(2023, 1, 31), 1).unwrap(), date(2023, 2, 28));
        assert_eq!(add_months(date(2024, 1, 31), 1).unwrap(), date(2024, 2, 29));
        assert_eq!(add_months(date(2023, 3, 31), -1).unwrap(), date(2023, 2, 28));
        assert_eq!(add_months(date(2024, 3, 31), -1).unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_sequential_clamping() {
        assert_eq!(add_months(date(2023, 1, 31), 2).unwrap(), date(2023, 3, 28));
        assert_eq!(add_months(date(2023, 3, 31), -2).unwrap(), date(2023, 1, 28));
    }

    #[test]
    fn test_subtract_keeps_day_when_it_fits() {
        assert_eq!(subtract_one_month(date(2025, 8, 31)).unwrap(), date(2025, 7, 31));
        assert_eq!(subtract_one_month(date(2025, 1, 15)).unwrap(), date(2024, 12, 15));
        assert_eq!(subtract_one_month(date(2025, 5, 1)).unwrap(), date(2025, 4, 1));
    }

    #[test]
    fn test_zero_months_is_identity() {
        let d = date(2025, 1, 31);
        assert_eq!(add_months(d, 0).unwrap(), d);
    }

    #[test]
    fn test_twelve_months_crosses_year() {
        assert_eq!(add_months(date(2024, 2, 29), 12).unwrap(), date(2025, 2, 28));
        assert_eq!(add_months(date(2025, 2, 28), -12).unwrap(), date(2024, 2, 28));
    }

    #[test]
    fn test_add_years_leap_day() {
        assert_eq!(add_years(date(2020, 2, 29), 1).unwrap(), date(2021, 2, 28));
        assert_eq!(add_years(date(2020, 2, 29), 4).unwrap(), date(2024, 2, 29));
        assert_eq!(add_years(date(2021, 3, 1), -1).unwrap(), date(2020, 3, 1));
    }

    #[test]
    fn test_add_years_out_of_range() {
        assert!(add_years(Date::constant(9999, 6, 1), 1).is_err());
    }

    #[test]
    fn test_jalali_month_lengths() {
        // 31 day month into 30 day month
        assert_eq!(add_one_month(jalali(1403, 6, 31)).unwrap(), jalali(1403, 7, 30));
        // 30 day month into leap Esfand
        assert_eq!(add_one_month(jalali(1403, 11, 30)).unwrap(), jalali(1403, 12, 30));
        // 30 day month into common Esfand
        assert_eq!(add_one_month(jalali(1404, 11, 30)).unwrap(), jalali(1404, 12, 29));
        assert_eq!(add_one_month(jalali(1403, 12, 30)).unwrap(), jalali(1404, 1, 30));
        assert_eq!(subtract_one_month(jalali(1404, 1, 31)).unwrap(), jalali(1403, 12, 30));
        assert_eq!(subtract_one_month(jalali(1405, 1, 31)).unwrap(), jalali(1404, 12, 29));
    }

    #[test]
    fn test_jalali_sequential_clamping() {
        assert_eq!(add_months(jalali(1404, 6, 31), 2).unwrap(), jalali(1404, 8, 30));
        assert_eq!(add_months(jalali(1404, 10, 30), 3).unwrap(), jalali(1405, 1, 29));
    }

    #[test]
    fn test_jalali_add_years_leap_day() {
        assert_eq!(add_years(jalali(1403, 12, 30), 1).unwrap(), jalali(1404, 12, 29));
        assert_eq!(add_years(jalali(1403, 7, 15), -3).unwrap(), jalali(1400, 7, 15));
    }

    #[test]
    fn test_tagged_dates_stay_in_their_calendar() {
        let j = CalendarDate::Jalali(jalali(1404, 6, 31));
        assert_eq!(
            add_one_month(j).unwrap(),
            CalendarDate::Jalali(jalali(1404, 7, 30))
        );
        let g = CalendarDate::Gregorian(date(2025, 1, 31));
        assert_eq!(
            add_months(g, 1).unwrap(),
            CalendarDate::Gregorian(date(2025, 2, 28))
        );
    }
}
