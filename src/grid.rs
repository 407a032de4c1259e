//! Lays out the days of a month in weeks.
//!
//! Layout of a [`MonthGrid`] (left to right, Saturday based):
//! ```text
//! .----------------------------------.
//! | 29 30 31 |  1  2  3  4           | } row 0, days before the 1st are from the last month
//! |  5  6  7    8  9 10 11           |
//! |   ...                            | } 5 or 6 rows
//! | 26 27 28   29 30 |  1  2         | } days after the end are from the next month
//! `----------------------------------*
//!  `---------------v--------------*
//!              7 columns
//! ```
//!
//! Every cell holds a date, so leading and trailing days of the neighboring months are filled in
//! and marked as not [`Cell::in_month`]. In right to left mode the columns of every row are
//! mirrored, the first weekday being the rightmost cell.

use core::array;

use jelal::{IDayDiff, Weekday};

use crate::{
    date::{CalendarDate, CommonDate},
    error::Result,
    string::{Digits, day_text},
};

/// How many days is in each week.
pub const WEEK_DAYS: usize = 7;

/// Least number of weeks in a grid.
pub const MIN_WEEK_COUNT: usize = 5;

/// Most number of weeks in a grid.
pub const MAX_WEEK_COUNT: usize = 6;

/// Order of the columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// The first weekday is the leftmost column.
    #[default]
    LeftToRight,
    /// The first weekday is the rightmost column.
    RightToLeft,
}

impl Direction {
    /// Which weekday (counting from the first weekday) is shown in the given visual column.
    pub const fn weekday_offset(self, column: usize) -> usize {
        match self {
            Self::LeftToRight => column,
            Self::RightToLeft => WEEK_DAYS - 1 - column,
        }
    }
}

/// Collect the weekdays of a week from the base to the end.
pub fn week_order(base_weekday: Weekday) -> [Weekday; WEEK_DAYS] {
    array::from_fn(|offset| base_weekday.forward(offset))
}

/// A single day of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub date: CalendarDate,
    /// Day of month as it should be displayed.
    pub text: String,
    /// False for days of the previous or next month.
    pub in_month: bool,
}

/// The result of [`Grid::build`], never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    date: CalendarDate,
    rows: Vec<[Cell; WEEK_DAYS]>,
}

impl MonthGrid {
    /// The date this grid was built around.
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    /// Weeks in display order, each with cells in display order.
    pub fn rows(&self) -> &[[Cell; WEEK_DAYS]] {
        &self.rows
    }

    /// 5 or 6.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }

    /// The cells of the month itself in no particular order.
    pub fn in_month_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells().filter(|c| c.in_month)
    }
}

/// Create a grid of 7 weekdays times 5 or 6 weeks.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Any day of the month to lay out.
    pub date: CalendarDate,
    /// The start of the week.
    pub base_weekday: Weekday,
    pub direction: Direction,
    /// Glyphs for [`Cell::text`].
    pub digits: Digits,
}

impl Grid {
    /// How many empty days are in the grid before the first day of the month in the given base.
    ///
    /// This is guaranteed to be at maximum 6 days (`WEEK_DAYS - 1`).
    ///
    /// For example if the calendar is Sunday based and the first day of the month is Saturday
    /// the grid will look like this:
    /// ```text
    /// Su Mo Tu We Th Fr Sa
    /// 00 00 00 00 00 00 01
    /// ```
    ///
    /// That is 6.
    pub fn first_weekday_of_month(&self) -> usize {
        let start_month = self.date.first_of_month();
        self.base_weekday.till_next(&start_month.weekday()) as usize % WEEK_DAYS
    }

    /// 6 if the month spills over 5 weeks, else 5.
    pub fn week_count(&self) -> usize {
        let month_end = self.date.month_end_day() as usize;
        if self.first_weekday_of_month() + month_end > WEEK_DAYS * MIN_WEEK_COUNT {
            MAX_WEEK_COUNT
        } else {
            MIN_WEEK_COUNT
        }
    }

    /// Lay out the month.
    ///
    /// Fails only if the visible days of the neighboring months leave the supported years.
    pub fn build(&self) -> Result<MonthGrid> {
        let rows = self.week_count();

        // distance from the reference to the top left (first weekday) cell
        let delta = 1 - (self.first_weekday_of_month() as IDayDiff + self.date.day() as IDayDiff);
        let start = self.date.checked_add_days(delta)?;
        let dates = (0..(rows * WEEK_DAYS) as IDayDiff)
            .map(|i| start.checked_add_days(i))
            .collect::<Result<Vec<_>>>()?;

        let month = self.date.month();
        let rows = (0..rows)
            .map(|j| {
                array::from_fn(|i| {
                    let date = dates[j * WEEK_DAYS + self.direction.weekday_offset(i)];
                    Cell {
                        date,
                        text: day_text(date.day(), self.digits),
                        in_month: date.month() == month,
                    }
                })
            })
            .collect();

        Ok(MonthGrid {
            date: self.date,
            rows,
        })
    }
}
