//! Common test utilities for building grids and checking geometry.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridgeom::scroll::{ManualScheduler, TimerScheduler};
use gridgeom::{AxisRange, GridGeometry, GridOptions, ScrollOffsets};

// ============================================================================
// Grid Builders
// ============================================================================

/// Grid with uniform row heights and column widths in an 800x600 container
#[must_use]
pub fn uniform_grid(rows: u32, columns: u32, row_height: f64, column_width: f64) -> GridGeometry {
    frozen_grid(rows, columns, 0, 0, row_height, column_width)
}

/// Uniform grid with frozen leading rows/columns
#[must_use]
pub fn frozen_grid(
    rows: u32,
    columns: u32,
    frozen_rows: u32,
    frozen_columns: u32,
    row_height: f64,
    column_width: f64,
) -> GridGeometry {
    let mut options = GridOptions::new(rows, columns);
    options.estimated_row_height = row_height;
    options.estimated_column_width = column_width;
    options.frozen_rows = frozen_rows;
    options.frozen_columns = frozen_columns;
    GridGeometry::new(&options).expect("valid test options")
}

/// Grid built from a JSON options document
#[must_use]
pub fn grid_from_json(json: &str) -> GridGeometry {
    let options = GridOptions::from_json(json).expect("valid options JSON");
    GridGeometry::new(&options).expect("valid test options")
}

// ============================================================================
// Scrolling Helpers
// ============================================================================

/// Jump to a scroll position without starting a scroll burst
pub fn jump_to(grid: &mut GridGeometry, scroll_top: f64, scroll_left: f64) -> ScrollOffsets {
    grid.set_scroll(ScrollOffsets {
        scroll_top,
        scroll_left,
    })
}

/// Feed a user scroll event through the debounce
pub fn user_scroll(
    grid: &mut GridGeometry,
    timers: &mut impl TimerScheduler,
    scroll_top: f64,
    scroll_left: f64,
) -> bool {
    grid.on_scroll(
        ScrollOffsets {
            scroll_top,
            scroll_left,
        },
        timers,
    )
}

/// Advance the clock and report every fired timer to the grid.
/// Returns how many of them ended a scroll burst.
pub fn advance(grid: &mut GridGeometry, timers: &mut ManualScheduler, time: f64) -> usize {
    timers
        .advance_to(time)
        .into_iter()
        .filter(|&id| grid.on_timer(id))
        .count()
}

// ============================================================================
// Assertions
// ============================================================================

/// Assert the overscanned window of a range
pub fn assert_range(range: AxisRange, start: u32, stop: u32) {
    assert_eq!(
        (range.start, range.stop),
        (start, stop),
        "expected rendered range {}..={}, got {:?}",
        start,
        stop,
        range
    );
}

/// Assert the precise (overscan-free) window of a range
pub fn assert_precise(range: AxisRange, start: u32, stop: u32) {
    assert_eq!(
        (range.precise_start, range.precise_stop),
        (start, stop),
        "expected visible range {}..={}, got {:?}",
        start,
        stop,
        range
    );
}
