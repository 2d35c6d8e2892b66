// Test fixtures - reusable test data
// Provides consistent events and grids across all test files

#![allow(dead_code)]

use calendar_grid::{generate_calendar_days, CalendarDay, CalendarEvent, WeekGrid};
use chrono::{NaiveDate, NaiveDateTime, Weekday};

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Returns the given November 2025 day at `hour:00`
    pub fn nov_2025(day: u32, hour: u32) -> NaiveDateTime {
        self::day(2025, 11, day).and_hms_opt(hour, 0, 0).unwrap()
    }

    pub fn dec_2025(day: u32, hour: u32) -> NaiveDateTime {
        self::day(2025, 12, day).and_hms_opt(hour, 0, 0).unwrap()
    }

    /// Drop target cell for a November 2025 day
    pub fn nov_cell(day: u32) -> CalendarDay {
        CalendarDay::in_month(self::day(2025, 11, day))
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn event(id: &str, title: &str, start: NaiveDateTime, end: NaiveDateTime) -> CalendarEvent {
        CalendarEvent::new(id, title, start, end).unwrap()
    }

    /// The November 2025 planner demo data
    pub fn november_planner() -> Vec<CalendarEvent> {
        use dates::nov_2025;
        vec![
            event("e1", "An event", nov_2025(16, 10), nov_2025(19, 20)),
            event("e2", "Happy birthday", nov_2025(1, 10), nov_2025(1, 20)),
            event("e3", "Training course", nov_2025(6, 10), nov_2025(7, 20)),
            event("e4", "Par ici", nov_2025(7, 10), nov_2025(8, 20)),
            event("e5", "Rendez-vous", nov_2025(7, 10), nov_2025(7, 20)),
            event("e6", "Scrum", nov_2025(5, 10), nov_2025(6, 20)),
            event("e7", "Rendez-vous", nov_2025(8, 10), nov_2025(9, 20)),
        ]
    }
}

/// November 2025 with Monday as first column:
/// `[_ _ _ _ _ 1 2] [3..9] [10..16] [17..23] [24..30]`
pub fn november_grid() -> WeekGrid {
    generate_calendar_days(2025, 11, Weekday::Mon)
}
