// Calendar Grid preview
// Prints a month of events as a text grid

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{Datelike, Local, NaiveDate};

use calendar_grid::services::import::load_events;
use calendar_grid::services::settings::SettingsService;
use calendar_grid::ui_text::render_month;
use calendar_grid::{filter_events_for_month, generate_calendar_days, pack_month};

/// Rows of text available under each day number
const LINES_PER_CELL: f32 = 4.0;

fn parse_month(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d")
        .with_context(|| format!("expected a month as YYYY-MM, got '{}'", value))
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(events_path) = args.next().map(PathBuf::from) else {
        bail!("usage: calendar-grid <events.json> [YYYY-MM]");
    };
    let displayed = match args.next() {
        Some(value) => parse_month(&value)?,
        None => Local::now().date_naive(),
    };

    let settings = match SettingsService::from_project_dirs() {
        Some(service) => service
            .load()
            .with_context(|| format!("failed to load {}", service.path().display()))?,
        None => Default::default(),
    };

    log::info!(
        "Rendering {}-{:02} from {}",
        displayed.year(),
        displayed.month(),
        events_path.display()
    );

    let events = load_events(&events_path)?;
    let visible = filter_events_for_month(&events, displayed);
    let grid = generate_calendar_days(displayed.year(), displayed.month(), settings.start_day());

    let cell_height = settings.row_height * LINES_PER_CELL;
    let space = move |_week: usize, _column: usize| cell_height;
    let layout = pack_month(&visible, &grid, &space, settings.row_height);

    let today = Local::now().date_naive();
    println!(
        "{}",
        render_month(&grid, &layout, &visible, &settings.weekday_labels, Some(today))
    );
    Ok(())
}
