// Calendar day module
// Cells and week rows of a displayed month

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// One cell of the month grid.
///
/// `date == None` marks a padding cell before the 1st or after the last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: Option<NaiveDate>,
    pub is_current_month: bool,
}

impl CalendarDay {
    pub const PADDING: CalendarDay = CalendarDay {
        date: None,
        is_current_month: false,
    };

    pub fn in_month(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            is_current_month: true,
        }
    }

    pub fn is_padding(&self) -> bool {
        self.date.is_none()
    }

    /// Day-of-month number, `None` for padding cells
    pub fn day_number(&self) -> Option<u32> {
        self.date.map(|d| d.day())
    }
}

/// One displayed week; always exactly seven cells.
pub type WeekRow = [CalendarDay; 7];

/// The weeks of one displayed month, in ascending date order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekGrid {
    year: i32,
    month: u32,
    start_day: Weekday,
    weeks: Vec<WeekRow>,
}

impl WeekGrid {
    pub(crate) fn new(year: i32, month: u32, start_day: Weekday, weeks: Vec<WeekRow>) -> Self {
        Self {
            year,
            month,
            start_day,
            weeks,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1-based
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn start_day(&self) -> Weekday {
        self.start_day
    }

    pub fn weeks(&self) -> &[WeekRow] {
        &self.weeks
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Every non-padding date, in grid order
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.weeks
            .iter()
            .flat_map(|week| week.iter())
            .filter_map(|cell| cell.date)
    }

    pub fn first_visible_date(&self) -> Option<NaiveDate> {
        self.dates().next()
    }

    pub fn last_visible_date(&self) -> Option<NaiveDate> {
        self.dates().last()
    }

    /// `(week, column)` of the cell showing `day` (day-of-month number).
    pub fn position_of(&self, day: u32) -> Option<(usize, usize)> {
        self.weeks.iter().enumerate().find_map(|(week_idx, week)| {
            week.iter()
                .position(|cell| cell.day_number() == Some(day))
                .map(|column| (week_idx, column))
        })
    }
}
