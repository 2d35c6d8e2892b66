//! Loading of event lists handed to the grid by the host.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::event::CalendarEvent;

/// Reads a JSON array of events; every event must pass validation.
pub fn load_events(path: &Path) -> Result<Vec<CalendarEvent>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read events from {}", path.display()))?;
    parse_events(&data).with_context(|| format!("invalid events in {}", path.display()))
}

pub fn parse_events(data: &str) -> Result<Vec<CalendarEvent>> {
    let events: Vec<CalendarEvent> =
        serde_json::from_str(data).context("failed to deserialize events")?;

    for event in &events {
        event
            .validate()
            .with_context(|| format!("event '{}' is invalid", event.id))?;
    }

    log::debug!("parsed {} events", events.len());
    Ok(events)
}
