// Gesture module
// Drag/resize state carried from gesture start to drop

use serde::{Deserialize, Serialize};

use crate::models::event::CalendarEvent;

/// Which interaction the user started on an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GestureKind {
    /// Drag the whole event, keeping its duration
    Move,
    /// Drag the left edge, changing the start date
    ResizeStart,
    /// Drag the right edge, changing the finish date
    ResizeEnd,
}

/// Gesture captured at drag start and resolved at drop.
///
/// Owned by whoever handles the interaction; dropping it without calling
/// `finish` cancels the gesture, nothing has been mutated yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragGesture {
    pub event: CalendarEvent,
    pub kind: GestureKind,
}

impl DragGesture {
    pub fn begin(event: &CalendarEvent, kind: GestureKind) -> Self {
        Self {
            event: event.clone(),
            kind,
        }
    }

    /// Serialized form handed to a drag-and-drop transport
    pub fn to_payload(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_payload(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }
}
