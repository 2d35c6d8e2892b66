//! Projection of events onto a month grid.
//!
//! An event becomes one segment per week row it is visible in. Start and
//! end are detected by day-of-month number, which is enough while the grid
//! shows a single month.
//!
//! Known limitation: for an event that starts or finishes outside the
//! displayed month, a day of the month carrying the same number as its
//! start or finish day still matches (Oct 15 - Dec 10 closes on Nov 10 and
//! reopens on Nov 15, Oct 30 - Nov 4 reopens on Nov 30). Kept for output
//! compatibility.

use chrono::{Datelike, NaiveDate};

use crate::models::calendar_day::WeekGrid;
use crate::models::event::CalendarEvent;
use crate::models::segment::EventSegment;
use crate::utils::date::{end_of_day, first_of_month, last_of_month, start_of_day};

/// Splits `event` into the per-week segments visible in `grid`.
pub fn get_event_segments(event: &CalendarEvent, grid: &WeekGrid) -> Vec<EventSegment> {
    let mut segments = Vec::new();

    let (Some(first_visible), Some(last_visible)) =
        (grid.first_visible_date(), grid.last_visible_date())
    else {
        return segments;
    };

    let started = event.started_on.date();
    let finished = event.finished_on.date();
    if finished < first_visible || started > last_visible {
        return segments;
    }

    let start_day = started.day();
    let end_day = finished.day();

    // Event already running when the grid begins: carry it in from the left edge
    let mut carry_over = started < first_visible;

    for week in grid.weeks() {
        let last_in_week = week.iter().rev().find_map(|cell| cell.day_number());
        let mut open: Option<u32> = None;

        for day in week.iter().filter_map(|cell| cell.day_number()) {
            if day == start_day || carry_over {
                open = Some(day);
                carry_over = false;
            }

            if day == end_day {
                if let Some(start) = open.take() {
                    segments.push(EventSegment::new(start, day));
                }
            }

            // Still open at the end of the row: crop here, continue next week
            if Some(day) == last_in_week {
                if let Some(start) = open.take() {
                    segments.push(EventSegment::new(start, day));
                    carry_over = true;
                }
            }
        }
    }

    segments
}

/// Keeps events whose `[started_on, finished_on]` overlaps the month of `displayed`.
pub fn filter_events_for_month(
    events: &[CalendarEvent],
    displayed: NaiveDate,
) -> Vec<CalendarEvent> {
    let month_start = start_of_day(first_of_month(displayed));
    let month_end = end_of_day(last_of_month(displayed));

    events
        .iter()
        .filter(|event| event.started_on <= month_end && event.finished_on >= month_start)
        .cloned()
        .collect()
}

/// Draw order: earliest start first, shorter event first on ties.
pub fn sort_for_display(events: &[CalendarEvent]) -> Vec<CalendarEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| {
        a.started_on
            .cmp(&b.started_on)
            .then(a.finished_on.cmp(&b.finished_on))
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::grid::generate_calendar_days;
    use chrono::{NaiveDateTime, Weekday};
    use pretty_assertions::assert_eq;

    fn at(month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn event(id: &str, start: NaiveDateTime, end: NaiveDateTime) -> CalendarEvent {
        CalendarEvent::new(id, format!("Event {}", id), start, end).unwrap()
    }

    fn november() -> WeekGrid {
        // Rows: [_ _ _ _ _ 1 2] [3..9] [10..16] [17..23] [24..30]
        generate_calendar_days(2025, 11, Weekday::Mon)
    }

    fn seg(start: u32, end: u32) -> EventSegment {
        EventSegment::new(start, end)
    }

    #[test]
    fn test_event_starting_on_last_column() {
        let segments = get_event_segments(&event("a", at(11, 16, 10), at(11, 19, 20)), &november());
        // Nov 16 is a Sunday: last cell of the row
        assert_eq!(segments, vec![seg(16, 16), seg(17, 19)]);
    }

    #[test]
    fn test_event_inside_one_row() {
        let segments = get_event_segments(&event("a", at(11, 5, 10), at(11, 7, 20)), &november());
        assert_eq!(segments, vec![seg(5, 7)]);
        assert_eq!(segments[0].span(), 3);
    }

    #[test]
    fn test_single_day_event() {
        let segments = get_event_segments(&event("a", at(11, 7, 10), at(11, 7, 20)), &november());
        assert_eq!(segments, vec![seg(7, 7)]);
    }

    #[test]
    fn test_week_boundary_crop() {
        let segments = get_event_segments(&event("a", at(11, 9, 10), at(11, 11, 20)), &november());
        assert_eq!(segments, vec![seg(9, 9), seg(10, 11)]);
    }

    #[test]
    fn test_multi_week_event() {
        let segments = get_event_segments(&event("a", at(11, 1, 8), at(11, 20, 8)), &november());
        assert_eq!(
            segments,
            vec![seg(1, 2), seg(3, 9), seg(10, 16), seg(17, 20)]
        );
    }

    #[test]
    fn test_event_crossing_into_next_month_crops_at_last_visible_day() {
        let segments = get_event_segments(&event("a", at(11, 28, 9), at(12, 2, 18)), &november());
        // Nov 2 shares the finish day number but no segment is open there
        assert_eq!(segments, vec![seg(28, 30)]);
    }

    #[test]
    fn test_event_started_before_grid_is_carried_in() {
        let segments = get_event_segments(&event("a", at(10, 31, 9), at(11, 4, 18)), &november());
        assert_eq!(segments, vec![seg(1, 2), seg(3, 4)]);
    }

    #[test]
    fn test_event_outside_grid_yields_nothing() {
        let grid = november();
        assert!(get_event_segments(&event("a", at(10, 1, 9), at(10, 5, 18)), &grid).is_empty());
        assert!(get_event_segments(&event("b", at(12, 5, 9), at(12, 7, 18)), &grid).is_empty());
    }

    #[test]
    fn test_multi_month_event_closes_and_reopens_on_matching_day_numbers() {
        let segments = get_event_segments(&event("a", at(10, 15, 9), at(12, 10, 18)), &november());
        assert_eq!(
            segments,
            vec![seg(1, 2), seg(3, 9), seg(10, 10), seg(15, 16), seg(17, 23), seg(24, 30)]
        );
    }

    #[test]
    fn test_carried_in_event_reopens_on_matching_start_day_number() {
        let segments = get_event_segments(&event("a", at(10, 30, 9), at(11, 4, 18)), &november());
        assert_eq!(segments, vec![seg(1, 2), seg(3, 4), seg(30, 30)]);
    }

    #[test]
    fn test_empty_grid_yields_nothing() {
        let grid = generate_calendar_days(2025, 13, Weekday::Mon);
        assert!(get_event_segments(&event("a", at(11, 5, 9), at(11, 6, 9)), &grid).is_empty());
    }

    #[test]
    fn test_filter_events_for_month() {
        let events = vec![
            event("before", at(10, 1, 9), at(10, 31, 23)),
            event("overlap-start", at(10, 30, 9), at(11, 1, 0)),
            event("inside", at(11, 5, 10), at(11, 5, 20)),
            event("overlap-end", at(11, 30, 23), at(12, 2, 9)),
            event("after", at(12, 1, 0), at(12, 3, 0)),
            event("spanning", at(10, 1, 0), at(12, 31, 0)),
        ];

        let visible: Vec<String> = filter_events_for_month(&events, NaiveDate::from_ymd_opt(2025, 11, 17).unwrap())
            .into_iter()
            .map(|e| e.id)
            .collect();

        assert_eq!(visible, vec!["overlap-start", "inside", "overlap-end", "spanning"]);
    }

    #[test]
    fn test_sort_for_display() {
        let events = vec![
            event("long", at(11, 5, 10), at(11, 9, 10)),
            event("late", at(11, 6, 8), at(11, 6, 9)),
            event("short", at(11, 5, 10), at(11, 5, 12)),
        ];
        let ids: Vec<String> = sort_for_display(&events).into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["short", "long", "late"]);
    }
}
