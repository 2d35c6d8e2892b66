//! Month grid construction.
//!
//! Lays a month out as rows of seven cells, leading and trailing cells
//! padded so the first column is always the configured week start.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::calendar_day::{CalendarDay, WeekGrid, WeekRow};
use crate::utils::date::days_in_month;

/// Every date of the month in ascending order (`month` is 1-based).
pub fn get_days_in_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(count) = days_in_month(year, month) else {
        return Vec::new();
    };

    (1..=count)
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .collect()
}

/// Builds the week rows for `year`/`month`, starting each row on `start_day`.
///
/// An out-of-range month produces an empty grid.
pub fn generate_calendar_days(year: i32, month: u32, start_day: Weekday) -> WeekGrid {
    let days = get_days_in_month(year, month);
    let Some(first) = days.first() else {
        log::warn!("cannot build a grid for month {} of {}", month, year);
        return WeekGrid::new(year, month, start_day, Vec::new());
    };

    let offset = leading_padding(first.weekday(), start_day);

    let mut weeks: Vec<WeekRow> = Vec::with_capacity(6);
    let mut current_week = [CalendarDay::PADDING; 7];
    let mut filled = offset;

    for day in days {
        if filled == 7 {
            weeks.push(current_week);
            current_week = [CalendarDay::PADDING; 7];
            filled = 0;
        }
        current_week[filled] = CalendarDay::in_month(day);
        filled += 1;
    }
    // Remaining cells of the last row keep their padding value
    weeks.push(current_week);

    log::debug!(
        "built {} week rows for {}-{:02} starting on {:?}",
        weeks.len(),
        year,
        month,
        start_day
    );

    WeekGrid::new(year, month, start_day, weeks)
}

/// Rotates Sunday-first `labels` so index 0 is `start_day`.
pub fn get_week_days<T: Clone>(start_day: Weekday, labels: &[T; 7]) -> [T; 7] {
    let mut rotated = labels.clone();
    rotated.rotate_left(start_day.num_days_from_sunday() as usize);
    rotated
}

/// Padding cells before the 1st, normalized into `[0, 7)`.
fn leading_padding(first_weekday: Weekday, start_day: Weekday) -> usize {
    let offset =
        first_weekday.num_days_from_sunday() as i32 - start_day.num_days_from_sunday() as i32;
    offset.rem_euclid(7) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

    fn day_numbers(week: &WeekRow) -> Vec<Option<u32>> {
        week.iter().map(|cell| cell.day_number()).collect()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(get_days_in_month(2025, 11).len(), 30);
        assert_eq!(get_days_in_month(2024, 2).len(), 29);
        assert_eq!(get_days_in_month(2025, 2).len(), 28);
        assert!(get_days_in_month(2025, 13).is_empty());
    }

    #[test]
    fn test_november_2025_monday_start() {
        let grid = generate_calendar_days(2025, 11, Weekday::Mon);
        let weeks = grid.weeks();

        // Nov 1st 2025 is a Saturday
        assert_eq!(weeks.len(), 5);
        assert_eq!(
            day_numbers(&weeks[0]),
            vec![None, None, None, None, None, Some(1), Some(2)]
        );
        assert_eq!(
            day_numbers(&weeks[4]),
            (24..=30u32).map(Some).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_november_2025_sunday_start_pads_trailing_cells() {
        let grid = generate_calendar_days(2025, 11, Weekday::Sun);
        let weeks = grid.weeks();

        assert_eq!(weeks.len(), 6);
        assert_eq!(day_numbers(&weeks[0])[6], Some(1));
        assert_eq!(
            day_numbers(&weeks[5]),
            vec![Some(30), None, None, None, None, None, None]
        );
        assert!(!weeks[5][1].is_current_month);
    }

    #[test_case(2025, 6, Weekday::Sun, 0 ; "june 2025 starts on sunday")]
    #[test_case(2025, 6, Weekday::Mon, 6 ; "june 2025 monday start wraps")]
    #[test_case(2025, 11, Weekday::Sat, 0 ; "november 2025 saturday start")]
    #[test_case(2026, 2, Weekday::Wed, 4 ; "february 2026 wednesday start")]
    fn test_leading_padding(year: i32, month: u32, start: Weekday, expected: usize) {
        let grid = generate_calendar_days(year, month, start);
        let padding = grid.weeks()[0]
            .iter()
            .take_while(|cell| cell.is_padding())
            .count();
        assert_eq!(padding, expected);
    }

    #[test]
    fn test_month_starting_on_week_start_has_no_empty_row() {
        // Feb 2026 starts on a Sunday and has 28 days: exactly four rows
        let grid = generate_calendar_days(2026, 2, Weekday::Sun);
        assert_eq!(grid.weeks().len(), 4);
        assert!(grid.weeks().iter().flatten().all(|cell| !cell.is_padding()));
    }

    #[test]
    fn test_invalid_month_yields_empty_grid() {
        let grid = generate_calendar_days(2025, 0, Weekday::Sun);
        assert!(grid.is_empty());
        assert_eq!(grid.first_visible_date(), None);
    }

    #[test_case(Weekday::Sun, ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"])]
    #[test_case(Weekday::Mon, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"])]
    #[test_case(Weekday::Sat, ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"])]
    fn test_get_week_days(start: Weekday, expected: [&str; 7]) {
        assert_eq!(get_week_days(start, &LABELS), expected);
    }
}
