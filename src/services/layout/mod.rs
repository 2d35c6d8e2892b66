//! Stacking of event segments inside week rows.
//!
//! The renderer supplies the vertical space of each cell; segments are given
//! the lowest free lane and the ones that do not fit are counted per cell so
//! a "+N more" marker can be drawn.

use crate::models::calendar_day::WeekGrid;
use crate::models::event::CalendarEvent;
use crate::models::segment::EventSegment;
use crate::services::segments::{get_event_segments, sort_for_display};

/// Vertical space available in a grid cell, measured by the rendering layer.
pub trait CellSpace {
    fn available_height(&self, week: usize, column: usize) -> f32;
}

impl<F> CellSpace for F
where
    F: Fn(usize, usize) -> f32,
{
    fn available_height(&self, week: usize, column: usize) -> f32 {
        self(week, column)
    }
}

/// A segment with its position in the grid
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedSegment {
    pub event_id: String,
    pub week: usize,
    pub column: usize,
    pub lane: usize,
    pub segment: EventSegment,
}

impl PlacedSegment {
    pub fn span(&self) -> usize {
        self.segment.span()
    }

    pub fn columns(&self) -> std::ops::Range<usize> {
        self.column..(self.column + self.span()).min(7)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonthLayout {
    pub placed: Vec<PlacedSegment>,
    overflow: Vec<[usize; 7]>,
}

impl MonthLayout {
    /// Number of hidden segments covering the cell
    pub fn overflow_at(&self, week: usize, column: usize) -> usize {
        self.overflow
            .get(week)
            .and_then(|row| row.get(column))
            .copied()
            .unwrap_or(0)
    }

    /// Lanes used in a week row
    pub fn lanes_in_week(&self, week: usize) -> usize {
        self.placed
            .iter()
            .filter(|placed| placed.week == week)
            .map(|placed| placed.lane + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn segments_in_week(&self, week: usize) -> impl Iterator<Item = &PlacedSegment> {
        self.placed.iter().filter(move |placed| placed.week == week)
    }
}

/// A lane fits when it and the day-number label both fit under the cell height.
fn lane_fits(lane: usize, row_height: f32, available: f32) -> bool {
    (lane as f32 + 2.0) * row_height < available
}

/// Packs every event of `events` into lanes of `grid`.
pub fn pack_month(
    events: &[CalendarEvent],
    grid: &WeekGrid,
    space: &impl CellSpace,
    row_height: f32,
) -> MonthLayout {
    let weeks = grid.weeks().len();
    let mut occupied: Vec<Vec<[bool; 7]>> = vec![Vec::new(); weeks];
    let mut layout = MonthLayout {
        placed: Vec::new(),
        overflow: vec![[0; 7]; weeks],
    };

    for event in sort_for_display(events) {
        for segment in get_event_segments(&event, grid) {
            let Some((week, column)) = grid.position_of(segment.start) else {
                continue;
            };
            let columns = column..(column + segment.span()).min(7);
            let lanes = &mut occupied[week];

            let lane = (0..)
                .find(|&lane| {
                    lanes
                        .get(lane)
                        .map_or(true, |taken| columns.clone().all(|c| !taken[c]))
                })
                .unwrap_or(lanes.len());

            let fits = columns
                .clone()
                .all(|c| lane_fits(lane, row_height, space.available_height(week, c)));

            if !fits {
                for c in columns {
                    layout.overflow[week][c] += 1;
                }
                continue;
            }

            if lanes.len() <= lane {
                lanes.resize(lane + 1, [false; 7]);
            }
            for c in columns {
                lanes[lane][c] = true;
            }

            layout.placed.push(PlacedSegment {
                event_id: event.id.clone(),
                week,
                column,
                lane,
                segment,
            });
        }
    }

    log::debug!(
        "packed {} segments for {}-{:02}",
        layout.placed.len(),
        grid.year(),
        grid.month()
    );

    layout
}
