// Calendar Grid Library
// Month-grid layout engine: week grids, event segments, drag/resize mutations

pub mod models;
pub mod services;
pub mod ui_text;
pub mod utils;

pub use models::calendar_day::{CalendarDay, WeekGrid, WeekRow};
pub use models::event::{CalendarEvent, ValidationError};
pub use models::gesture::{DragGesture, GestureKind};
pub use models::segment::EventSegment;
pub use services::grid::{generate_calendar_days, get_days_in_month, get_week_days};
pub use services::layout::{pack_month, CellSpace, MonthLayout, PlacedSegment};
pub use services::mutation::{move_event_on, resize_event_on_from_end, resize_event_on_from_start};
pub use services::segments::{filter_events_for_month, get_event_segments, sort_for_display};
