//! Drag and resize of events on the month grid.
//!
//! Every operation returns a new event list and never touches its input.
//! A gesture that cannot be applied (padding cell, unknown id, inverted
//! range) returns the list unchanged so the view can snap back.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::calendar_day::CalendarDay;
use crate::models::event::CalendarEvent;
use crate::models::gesture::{DragGesture, GestureKind};
use crate::utils::date::start_of_day;

/// Moves the event to `target`, anchored at midnight, keeping its duration.
pub fn move_event_on(
    gesture_event: &CalendarEvent,
    target: &CalendarDay,
    events: &[CalendarEvent],
) -> Vec<CalendarEvent> {
    let Some(date) = target.date else {
        log::debug!("move of {} dropped on a padding cell", gesture_event.id);
        return events.to_vec();
    };

    reschedule(events, &gesture_event.id, |current| {
        let started_on = start_of_day(date);
        let finished_on = started_on.checked_add_signed(current.duration())?;
        Some((started_on, finished_on))
    })
}

/// Moves the start to `target`, keeping the original time of day.
pub fn resize_event_on_from_start(
    gesture_event: &CalendarEvent,
    target: &CalendarDay,
    events: &[CalendarEvent],
) -> Vec<CalendarEvent> {
    let Some(date) = target.date else {
        log::debug!("resize of {} dropped on a padding cell", gesture_event.id);
        return events.to_vec();
    };

    reschedule(events, &gesture_event.id, |current| {
        Some((keep_time_of_day(date, current.started_on), current.finished_on))
    })
}

/// Moves the finish to `target`, keeping the original time of day.
pub fn resize_event_on_from_end(
    gesture_event: &CalendarEvent,
    target: &CalendarDay,
    events: &[CalendarEvent],
) -> Vec<CalendarEvent> {
    let Some(date) = target.date else {
        log::debug!("resize of {} dropped on a padding cell", gesture_event.id);
        return events.to_vec();
    };

    reschedule(events, &gesture_event.id, |current| {
        Some((current.started_on, keep_time_of_day(date, current.finished_on)))
    })
}

impl DragGesture {
    /// Resolves the gesture against the list that is current at drop time.
    pub fn finish(self, target: &CalendarDay, events: &[CalendarEvent]) -> Vec<CalendarEvent> {
        match self.kind {
            GestureKind::Move => move_event_on(&self.event, target, events),
            GestureKind::ResizeStart => resize_event_on_from_start(&self.event, target, events),
            GestureKind::ResizeEnd => resize_event_on_from_end(&self.event, target, events),
        }
    }
}

fn keep_time_of_day(date: NaiveDate, original: NaiveDateTime) -> NaiveDateTime {
    date.and_time(original.time())
}

/// Replaces the event `id` in a copy of `events` with the bounds computed
/// from its current version. Unknown ids and inverted ranges are no-ops.
fn reschedule<F>(events: &[CalendarEvent], id: &str, compute: F) -> Vec<CalendarEvent>
where
    F: FnOnce(&CalendarEvent) -> Option<(NaiveDateTime, NaiveDateTime)>,
{
    let Some(index) = events.iter().position(|event| event.id == id) else {
        log::debug!("event {} is no longer in the list, ignoring gesture", id);
        return events.to_vec();
    };

    let Some((started_on, finished_on)) = compute(&events[index]) else {
        log::debug!("event {} cannot be rescheduled out of range", id);
        return events.to_vec();
    };

    if started_on > finished_on {
        log::debug!(
            "rejecting gesture on {}: start {} would be after finish {}",
            id,
            started_on,
            finished_on
        );
        return events.to_vec();
    }

    let mut next = events.to_vec();
    next[index].started_on = started_on;
    next[index].finished_on = finished_on;
    next
}
