//! Plain-text month preview.
//!
//! Draws the header labels, day numbers, one line per lane and the
//! "+N" overflow markers of a packed month layout. Today's day number is
//! followed by `*`.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::calendar_day::WeekGrid;
use crate::models::event::CalendarEvent;
use crate::services::grid::get_week_days;
use crate::services::layout::MonthLayout;

/// Characters per grid column
pub const CELL_WIDTH: usize = 11;

/// Shortens `text` to at most `max_chars` characters, marking the cut with `~`.
fn truncate_to_width(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut short: String = text.chars().take(max_chars - 1).collect();
    short.push('~');
    short
}

fn pad_cell(text: &str, width: usize) -> String {
    format!("{:<width$}", truncate_to_width(text, width.saturating_sub(1)), width = width)
}

/// Renders `layout` over `grid`; `labels` are Sunday-first.
pub fn render_month(
    grid: &WeekGrid,
    layout: &MonthLayout,
    events: &[CalendarEvent],
    labels: &[String; 7],
    today: Option<NaiveDate>,
) -> String {
    let titles: HashMap<&str, &str> = events
        .iter()
        .map(|event| (event.id.as_str(), event.title.as_str()))
        .collect();

    let mut lines = Vec::new();
    lines.push(
        get_week_days(grid.start_day(), labels)
            .iter()
            .map(|label| pad_cell(label, CELL_WIDTH))
            .collect::<String>(),
    );

    for (week_idx, week) in grid.weeks().iter().enumerate() {
        lines.push(
            week.iter()
                .map(|cell| match (cell.date, cell.day_number()) {
                    (Some(date), Some(day)) if Some(date) == today => {
                        pad_cell(&format!("{}*", day), CELL_WIDTH)
                    }
                    (_, Some(day)) => pad_cell(&day.to_string(), CELL_WIDTH),
                    _ => pad_cell("", CELL_WIDTH),
                })
                .collect(),
        );

        for lane in 0..layout.lanes_in_week(week_idx) {
            let mut line = String::new();
            let mut column = 0;
            while column < 7 {
                let placed = layout
                    .segments_in_week(week_idx)
                    .find(|placed| placed.lane == lane && placed.column == column);

                match placed {
                    Some(placed) => {
                        let cells = placed.columns().len().max(1);
                        let width = cells * CELL_WIDTH - 1;
                        let title = titles.get(placed.event_id.as_str()).copied().unwrap_or("?");
                        line.push('[');
                        line.push_str(&format!(
                            "{:<inner$}",
                            truncate_to_width(title, width - 2),
                            inner = width - 2
                        ));
                        line.push_str("] ");
                        column += cells;
                    }
                    None => {
                        line.push_str(&" ".repeat(CELL_WIDTH));
                        column += 1;
                    }
                }
            }
            lines.push(line);
        }

        if (0..7).any(|column| layout.overflow_at(week_idx, column) > 0) {
            lines.push(
                (0..7)
                    .map(|column| match layout.overflow_at(week_idx, column) {
                        0 => pad_cell("", CELL_WIDTH),
                        hidden => pad_cell(&format!("+{}", hidden), CELL_WIDTH),
                    })
                    .collect(),
            );
        }
    }

    lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}
