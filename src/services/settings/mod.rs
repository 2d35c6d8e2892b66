mod service;

pub use service::{ConfigError, SettingsService};
