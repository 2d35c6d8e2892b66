// Event module
// Calendar event as seen by the month grid

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons an event fails validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Event id cannot be empty")]
    EmptyId,
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event must not finish before it starts")]
    FinishBeforeStart,
    #[error("Color must be in hex format (#RRGGBB or #RGB)")]
    InvalidColor,
    #[error("Event {0} is required")]
    MissingField(&'static str),
}

/// Calendar event owned by the hosting application.
///
/// The engine never stores events; it only returns transformed copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub started_on: NaiveDateTime,
    pub finished_on: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub all_day: bool,
}

impl CalendarEvent {
    /// Create a new event with required fields
    ///
    /// # Examples
    /// ```
    /// use calendar_grid::models::event::CalendarEvent;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 11, 5).unwrap().and_hms_opt(10, 0, 0).unwrap();
    /// let end = start + chrono::Duration::hours(10);
    /// let event = CalendarEvent::new("e1", "Team Meeting", start, end).unwrap();
    /// assert_eq!(event.duration(), chrono::Duration::hours(10));
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        started_on: NaiveDateTime,
        finished_on: NaiveDateTime,
    ) -> Result<Self, ValidationError> {
        let event = Self {
            id: id.into(),
            title: title.into(),
            started_on,
            finished_on,
            description: None,
            location: None,
            category: None,
            color: None,
            all_day: false,
        };

        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> CalendarEventBuilder {
        CalendarEventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }

        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        if !self.is_well_ordered() {
            return Err(ValidationError::FinishBeforeStart);
        }

        if let Some(ref color) = self.color {
            let hex = color.strip_prefix('#').unwrap_or("");
            let valid_len = hex.len() == 6 || hex.len() == 3;
            if !color.starts_with('#') || !valid_len || !hex.chars().all(|c| c.is_ascii_hexdigit())
            {
                return Err(ValidationError::InvalidColor);
            }
        }

        Ok(())
    }

    /// Start and finish are ordered (`started_on <= finished_on`)
    pub fn is_well_ordered(&self) -> bool {
        self.started_on <= self.finished_on
    }

    /// Get the duration of the event
    pub fn duration(&self) -> Duration {
        self.finished_on - self.started_on
    }
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct CalendarEventBuilder {
    id: Option<String>,
    title: Option<String>,
    started_on: Option<NaiveDateTime>,
    finished_on: Option<NaiveDateTime>,
    description: Option<String>,
    location: Option<String>,
    category: Option<String>,
    color: Option<String>,
    all_day: bool,
}

impl CalendarEventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn started_on(mut self, started_on: NaiveDateTime) -> Self {
        self.started_on = Some(started_on);
        self
    }

    pub fn finished_on(mut self, finished_on: NaiveDateTime) -> Self {
        self.finished_on = Some(finished_on);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the event color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Build the event
    pub fn build(self) -> Result<CalendarEvent, ValidationError> {
        let event = CalendarEvent {
            id: self.id.ok_or(ValidationError::MissingField("id"))?,
            title: self.title.ok_or(ValidationError::MissingField("title"))?,
            started_on: self
                .started_on
                .ok_or(ValidationError::MissingField("start"))?,
            finished_on: self
                .finished_on
                .ok_or(ValidationError::MissingField("finish"))?,
            description: self.description,
            location: self.location,
            category: self.category,
            color: self.color,
            all_day: self.all_day,
        };

        event.validate()?;
        Ok(event)
    }
}
