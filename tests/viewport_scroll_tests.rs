//! Viewport and scroll coordinate tests
//!
//! Tests for verifying scroll position, visible row/column calculation,
//! and coordinate transformations.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{assert_precise, assert_range, jump_to, uniform_grid};
use gridgeom::{Axis, CellCoord, GridGeometry, GridOptions};

// =============================================================================
// BASIC VIEWPORT TESTS
// =============================================================================

#[test]
fn test_viewport_initial_scroll_zero() {
    let grid = uniform_grid(100, 10, 20.0, 80.0);
    let scroll = grid.scroll_state();
    assert_eq!(scroll.scroll_top, 0.0, "Initial scroll_top should be 0");
    assert_eq!(scroll.scroll_left, 0.0, "Initial scroll_left should be 0");
    assert!(!scroll.is_scrolling);
}

#[test]
fn test_visible_rows_at_scroll_zero() {
    let mut grid = uniform_grid(100, 10, 20.0, 80.0);
    let rows = grid.visible_range(Axis::Row);

    // 600 / 20 = 30 rows fully visible, plus one overscan row below
    assert_precise(rows, 0, 29);
    assert_range(rows, 0, 30);
}

#[test]
fn test_visible_cols_at_scroll_zero() {
    let mut grid = uniform_grid(100, 100, 20.0, 80.0);
    let cols = grid.visible_range(Axis::Column);

    // 800 / 80 = 10 columns
    assert_precise(cols, 0, 9);
    assert_range(cols, 0, 10);
}

#[test]
fn test_visible_rows_after_scroll() {
    let mut grid = uniform_grid(100, 10, 20.0, 80.0);
    jump_to(&mut grid, 200.0, 0.0);

    let rows = grid.visible_range(Axis::Row);
    assert_precise(rows, 10, 39);
    assert_range(rows, 9, 40);
}

#[test]
fn test_partially_visible_rows_are_included() {
    let mut grid = uniform_grid(100, 10, 20.0, 80.0);
    jump_to(&mut grid, 210.0, 0.0);

    // Row 10 spans 200..220 and row 40 spans 800..820: both partly on screen
    let rows = grid.visible_range(Axis::Row);
    assert_precise(rows, 10, 40);
}

#[test]
fn test_visible_range_near_end_clamps_to_last_row() {
    let mut grid = uniform_grid(100, 10, 20.0, 80.0);
    jump_to(&mut grid, 1_400.0, 0.0);

    let rows = grid.visible_range(Axis::Row);
    assert_precise(rows, 70, 99);
    assert_range(rows, 69, 99);
}

#[test]
fn test_visible_window_combines_axes() {
    let mut grid = uniform_grid(100, 100, 20.0, 80.0);
    jump_to(&mut grid, 200.0, 400.0);

    let window = grid.visible_window();
    assert_eq!(window.row_start, 9);
    assert_eq!(window.row_stop, 40);
    assert_eq!(window.column_start, 4);
    assert_eq!(window.column_stop, 15);
}

// =============================================================================
// SCROLL CLAMPING TESTS
// =============================================================================

#[test]
fn test_scroll_clamps_to_content() {
    let mut grid = uniform_grid(100, 10, 20.0, 80.0);

    // 100 * 20 = 2000 content, 600 container
    assert_eq!(grid.max_scroll(Axis::Row), 1_400.0);
    let applied = jump_to(&mut grid, 10_000.0, 0.0);
    assert_eq!(applied.scroll_top, 1_400.0);

    let applied = jump_to(&mut grid, -50.0, 0.0);
    assert_eq!(applied.scroll_top, 0.0);
}

#[test]
fn test_scroll_by_is_relative_and_clamped() {
    let mut grid = uniform_grid(100, 100, 20.0, 80.0);
    jump_to(&mut grid, 100.0, 100.0);

    let applied = grid.scroll_by(50.0, -30.0);
    assert_eq!((applied.scroll_top, applied.scroll_left), (70.0, 150.0));

    let applied = grid.scroll_by(0.0, 5_000.0);
    assert_eq!(applied.scroll_top, 1_400.0);
}

#[test]
fn test_content_smaller_than_container_cannot_scroll() {
    let mut grid = uniform_grid(10, 5, 20.0, 80.0);
    assert_eq!(grid.max_scroll(Axis::Row), 0.0);
    assert_eq!(grid.max_scroll(Axis::Column), 0.0);
    assert_eq!(jump_to(&mut grid, 300.0, 300.0).scroll_top, 0.0);
}

#[test]
fn test_resize_reclamps_scroll() {
    let mut grid = uniform_grid(100, 10, 20.0, 80.0);
    jump_to(&mut grid, 1_400.0, 0.0);

    grid.set_container_size(800.0, 1_000.0);
    assert_eq!(grid.scroll_state().scroll_top, 1_000.0);
}

#[test]
fn test_shrinking_row_count_reclamps_scroll() {
    let mut grid = uniform_grid(100, 10, 20.0, 80.0);
    jump_to(&mut grid, 1_400.0, 0.0);

    grid.set_count(Axis::Row, 50);
    assert_eq!(grid.scroll_state().scroll_top, 400.0);
    assert_range(grid.visible_range(Axis::Row), 19, 49);
}

// =============================================================================
// VARIABLE SIZE TESTS
// =============================================================================

#[test]
fn test_zero_height_rows_are_skipped_by_start_index() {
    let mut grid = uniform_grid(100, 10, 20.0, 80.0);
    grid.set_row_height(|row| if (5..10).contains(&row) { 0.0 } else { 20.0 });
    jump_to(&mut grid, 100.0, 0.0);

    // Rows 5..=9 are hidden at offset 100, so row 10 is the first drawn
    let rows = grid.visible_range(Axis::Row);
    assert_eq!(rows.precise_start, 10);
}

#[test]
fn test_variable_heights_drive_visible_stop() {
    let mut grid = uniform_grid(1_000, 10, 20.0, 80.0);
    grid.set_row_height(|row| if row % 2 == 0 { 10.0 } else { 30.0 });

    // Each pair of rows is 40px: 600px holds 15 pairs
    let rows = grid.visible_range(Axis::Row);
    assert_precise(rows, 0, 29);
    assert_eq!(grid.offset(Axis::Row, 30), 600.0);
}

#[test]
fn test_scale_multiplies_geometry() {
    let mut grid = uniform_grid(100, 10, 20.0, 80.0);
    grid.set_scale(2.0);

    assert_eq!(grid.offset(Axis::Row, 10), 400.0);
    assert_eq!(grid.total(Axis::Row), 4_000.0);
    assert_precise(grid.visible_range(Axis::Row), 0, 14);
}

// =============================================================================
// COORDINATE TRANSFORMATION TESTS
// =============================================================================

#[test]
fn test_offset_to_cell_at_scroll_zero() {
    let mut grid = uniform_grid(100, 100, 20.0, 80.0);
    assert_eq!(grid.offset_to_cell(85.0, 45.0), Some(CellCoord::new(2, 1)));
    assert_eq!(grid.offset_to_cell(0.0, 0.0), Some(CellCoord::new(0, 0)));
}

#[test]
fn test_offset_to_cell_after_scroll() {
    let mut grid = uniform_grid(100, 100, 20.0, 80.0);
    jump_to(&mut grid, 200.0, 160.0);
    assert_eq!(grid.offset_to_cell(85.0, 45.0), Some(CellCoord::new(12, 3)));
}

#[test]
fn test_offset_to_cell_outside_content() {
    let mut grid = uniform_grid(10, 10, 20.0, 80.0);
    assert_eq!(grid.offset_to_cell(10.0, 250.0), None, "below the last row");
    assert_eq!(grid.offset_to_cell(900.0, 10.0), None, "right of the last column");
    assert_eq!(grid.offset_to_cell(-1.0, 10.0), None);
    assert_eq!(grid.offset_to_cell(f64::NAN, 10.0), None);
}

#[test]
fn test_cell_rects_content_and_screen() {
    let mut grid = uniform_grid(100, 100, 20.0, 80.0);
    jump_to(&mut grid, 200.0, 80.0);

    let cell = CellCoord::new(12, 1);
    let content = grid.cell_rect(cell);
    assert_eq!((content.x, content.y), (80.0, 240.0));
    assert_eq!((content.width, content.height), (80.0, 20.0));

    let screen = grid.cell_screen_rect(cell);
    assert_eq!((screen.x, screen.y), (0.0, 40.0));
}

#[test]
fn test_visible_cells_cover_window() {
    let mut grid = uniform_grid(100, 100, 20.0, 80.0);
    let window = grid.visible_window();
    let cells = grid.visible_cells();

    let rows = (window.row_stop - window.row_start + 1) as usize;
    let cols = (window.column_stop - window.column_start + 1) as usize;
    assert_eq!(cells.len(), rows * cols);
    assert!(cells
        .iter()
        .all(|p| p.bounds.is_single_cell() && p.bounds.anchor() == p.cell));
}

// =============================================================================
// DEGENERATE GRIDS
// =============================================================================

#[test]
fn test_empty_grid() {
    let mut grid = GridGeometry::new(&GridOptions::default()).unwrap();

    assert_eq!(grid.visible_range(Axis::Row), Default::default());
    assert_eq!(grid.visible_range(Axis::Column), Default::default());
    assert_eq!(grid.total(Axis::Row), 0.0);
    assert_eq!(grid.offset(Axis::Row, 5), 0.0);
    assert!(grid.visible_cells().is_empty());
    assert_eq!(grid.offset_to_cell(10.0, 10.0), None);
}

#[test]
fn test_single_row_grid() {
    let mut grid = uniform_grid(1, 1, 20.0, 80.0);
    let rows = grid.visible_range(Axis::Row);
    assert_precise(rows, 0, 0);
    assert_range(rows, 0, 0);
    assert_eq!(grid.visible_cells().len(), 1);
}
