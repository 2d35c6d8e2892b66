// Module exports for models

pub mod calendar_day;
pub mod event;
pub mod gesture;
pub mod segment;
pub mod settings;
