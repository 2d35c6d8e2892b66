// Event segment module

use serde::{Deserialize, Serialize};

/// Visible run of an event inside one week row.
///
/// Bounds are day-of-month numbers, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventSegment {
    pub start: u32,
    pub end: u32,
}

impl EventSegment {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Number of consecutive cells the segment occupies
    pub fn span(&self) -> usize {
        (self.end.saturating_sub(self.start) + 1) as usize
    }
}
