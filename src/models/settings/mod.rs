// Settings module
// Display preferences for the month grid

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::utils::date::weekday_from_index;

/// Height in pixels of one stacked event row
pub const DEFAULT_ROW_HEIGHT: f32 = 25.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// 0 = Sunday ... 6 = Saturday
    pub first_day_of_week: u8,
    pub row_height: f32,
    /// Header labels, Sunday first
    pub weekday_labels: [String; 7],
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            row_height: DEFAULT_ROW_HEIGHT,
            weekday_labels: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]
            .map(String::from),
        }
    }
}

impl GridSettings {
    pub fn validate(&self) -> Result<(), String> {
        if weekday_from_index(self.first_day_of_week).is_none() {
            return Err(format!(
                "first_day_of_week must be between 0 and 6, got {}",
                self.first_day_of_week
            ));
        }

        if !(self.row_height.is_finite() && self.row_height > 0.0) {
            return Err(format!(
                "row_height must be a positive number, got {}",
                self.row_height
            ));
        }

        if self.weekday_labels.iter().any(|label| label.trim().is_empty()) {
            return Err("weekday_labels must not contain empty labels".to_string());
        }

        Ok(())
    }

    /// Week start as a weekday; falls back to Sunday for out-of-range values
    pub fn start_day(&self) -> Weekday {
        weekday_from_index(self.first_day_of_week).unwrap_or(Weekday::Sun)
    }
}
