//! Scroll-to-cell alignment tests.
//!
//! Grid used throughout: 100 rows of 20px in a 600px tall container
//! (content 2000px, maximum scroll 1400px).

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{jump_to, uniform_grid};
use gridgeom::scroll::ManualScheduler;
use gridgeom::{Align, ApplyTiming, Axis, CellCoord, GridGeometry, ScrollOffsets};
use test_case::test_case;

fn rows_grid() -> GridGeometry {
    uniform_grid(100, 10, 20.0, 80.0)
}

fn scroll_top_for(grid: &mut GridGeometry, row: u32, align: Align) -> Option<f64> {
    grid.plan_scroll_to(CellCoord::new(row, 0), align).scroll_top
}

// =============================================================================
// ALIGNMENT MODES
// =============================================================================

#[test]
fn test_end_alignment_puts_row_on_bottom_edge() {
    let mut grid = rows_grid();
    let expected = grid.offset(Axis::Row, 81) - 600.0;

    let plan = grid.plan_scroll_to(CellCoord::new(80, 0), Align::End);
    assert_eq!(plan.scroll_top, Some(expected));
    assert_eq!(plan.scroll_top, Some(1_020.0));
}

#[test_case(Align::Start, 800.0 ; "start")]
#[test_case(Align::End, 220.0 ; "end")]
#[test_case(Align::Center, 510.0 ; "center")]
#[test_case(Align::Smart, 220.0 ; "smart below")]
fn test_alignment_modes(align: Align, expected: f64) {
    let mut grid = rows_grid();
    assert_eq!(scroll_top_for(&mut grid, 40, align), Some(expected));
}

#[test_case("start", Align::Start)]
#[test_case("end", Align::End)]
#[test_case("center", Align::Center)]
#[test_case("smart", Align::Smart)]
#[test_case("auto", Align::Smart)]
fn test_align_from_str(input: &str, expected: Align) {
    assert_eq!(input.parse::<Align>().unwrap(), expected);
}

#[test]
fn test_unknown_align_rejected() {
    assert!("middle".parse::<Align>().is_err());
}

// =============================================================================
// SMART ALIGNMENT
// =============================================================================

#[test]
fn test_smart_keeps_fully_visible_row() {
    let mut grid = rows_grid();
    jump_to(&mut grid, 300.0, 0.0);
    assert_eq!(scroll_top_for(&mut grid, 20, Align::Smart), Some(300.0));
}

#[test]
fn test_smart_visibility_is_inclusive_at_edges() {
    let mut grid = rows_grid();
    // Row 29 spans 580..600: flush with the bottom edge counts as visible
    assert_eq!(scroll_top_for(&mut grid, 29, Align::Smart), Some(0.0));
    // Row 30 is just past it
    assert_eq!(scroll_top_for(&mut grid, 30, Align::Smart), Some(20.0));

    jump_to(&mut grid, 200.0, 0.0);
    // Row 10 starts exactly at the top edge
    assert_eq!(scroll_top_for(&mut grid, 10, Align::Smart), Some(200.0));
    assert_eq!(scroll_top_for(&mut grid, 9, Align::Smart), Some(180.0));
}

#[test]
fn test_smart_above_window_aligns_start() {
    let mut grid = rows_grid();
    jump_to(&mut grid, 1_000.0, 0.0);
    assert_eq!(scroll_top_for(&mut grid, 10, Align::Smart), Some(200.0));
}

#[test]
fn test_smart_partially_visible_row_aligns_nearest_edge() {
    let mut grid = rows_grid();
    jump_to(&mut grid, 210.0, 0.0);
    // Row 10 (200..220) is cut off at the top
    assert_eq!(scroll_top_for(&mut grid, 10, Align::Smart), Some(200.0));
    // Row 40 (800..820) is cut off at the bottom
    assert_eq!(scroll_top_for(&mut grid, 40, Align::Smart), Some(220.0));
}

// =============================================================================
// CLAMPING AND OVERSIZED TARGETS
// =============================================================================

#[test]
fn test_offsets_clamp_to_scroll_range() {
    let mut grid = rows_grid();
    assert_eq!(scroll_top_for(&mut grid, 99, Align::Start), Some(1_400.0));
    assert_eq!(scroll_top_for(&mut grid, 2, Align::End), Some(0.0));
    assert_eq!(scroll_top_for(&mut grid, 1, Align::Center), Some(0.0));
}

#[test_case(Align::End ; "end")]
#[test_case(Align::Center ; "center")]
#[test_case(Align::Smart ; "smart")]
fn test_oversized_row_aligns_to_start(align: Align) {
    let mut grid = rows_grid();
    grid.set_row_height(|row| if row == 50 { 1_000.0 } else { 20.0 });
    assert_eq!(scroll_top_for(&mut grid, 50, align), Some(1_000.0));
}

#[test]
fn test_column_alignment() {
    let mut grid = uniform_grid(10, 100, 20.0, 64.0);
    let plan = grid.plan_scroll_to(CellCoord::new(0, 20), Align::Start);
    assert_eq!(plan.scroll_left, Some(1_280.0));

    let plan = grid.plan_scroll_to(CellCoord::new(0, 99), Align::Start);
    assert_eq!(plan.scroll_left, Some(6_400.0 - 800.0));
}

#[test]
fn test_empty_grid_plan_is_noop() {
    let mut grid = uniform_grid(0, 0, 20.0, 80.0);
    let plan = grid.plan_scroll_to(CellCoord::new(5, 5), Align::Start);
    assert!(plan.is_noop());
}

// =============================================================================
// APPLY TIMING
// =============================================================================

#[test]
fn test_near_target_applies_immediately() {
    let mut grid = rows_grid();

    let plan = grid.plan_scroll_to(CellCoord::new(35, 0), Align::End);
    assert_eq!(plan.timing, ApplyTiming::Immediate);

    let applied = grid.request_scroll_to(CellCoord::new(35, 0), Align::End);
    assert_eq!(
        applied,
        Some(ScrollOffsets {
            scroll_top: 120.0,
            scroll_left: 0.0
        })
    );
    assert_eq!(grid.pending_scroll(), None);
    assert_eq!(grid.scroll_state().scroll_top, 120.0);
}

#[test]
fn test_far_target_deferred_to_next_frame() {
    let mut grid = rows_grid();
    let mut timers = ManualScheduler::new();

    let plan = grid.plan_scroll_to(CellCoord::new(80, 0), Align::End);
    assert_eq!(plan.timing, ApplyTiming::NextFrame);

    assert_eq!(grid.request_scroll_to(CellCoord::new(80, 0), Align::End), None);
    assert_eq!(grid.scroll_state().scroll_top, 0.0, "not applied yet");

    let applied = grid.on_animation_frame(&mut timers);
    assert_eq!(applied.map(|o| o.scroll_top), Some(1_020.0));
    assert_eq!(grid.pending_scroll(), None);
}

#[test]
fn test_latest_deferred_request_wins() {
    let mut grid = rows_grid();
    let mut timers = ManualScheduler::new();

    grid.request_scroll_to(CellCoord::new(80, 0), Align::End);
    grid.request_scroll_to(CellCoord::new(90, 0), Align::End);

    let applied = grid.on_animation_frame(&mut timers);
    assert_eq!(applied.map(|o| o.scroll_top), Some(1_220.0));
}

#[test]
fn test_immediate_request_cancels_deferred_one() {
    let mut grid = rows_grid();
    let mut timers = ManualScheduler::new();

    grid.request_scroll_to(CellCoord::new(80, 0), Align::End);
    assert!(grid.pending_scroll().is_some());

    grid.request_scroll_to(CellCoord::new(35, 0), Align::End);
    assert_eq!(grid.pending_scroll(), None);
    assert_eq!(grid.on_animation_frame(&mut timers), None);
    assert_eq!(grid.scroll_state().scroll_top, 120.0);
}

#[test]
fn test_deferred_scroll_combines_with_wheel() {
    let mut grid = rows_grid();
    let mut timers = ManualScheduler::new();

    grid.request_scroll_to(CellCoord::new(80, 0), Align::End);
    grid.on_wheel(0.0, 10.0, &mut timers);

    let applied = grid.on_animation_frame(&mut timers);
    assert_eq!(applied.map(|o| o.scroll_top), Some(1_030.0));
}
