//! Size metadata tests: lazy measurement, invalidation, stale items and
//! offset/index resolution.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::uniform_grid;
use gridgeom::layout::{index_for_offset, stop_index_for_start, AxisStore};
use gridgeom::{Axis, CellCoord};

/// Store whose item size can be changed from the test, counting callback calls
fn adjustable_store(count: u32, size: f64) -> (AxisStore, Rc<Cell<f64>>, Rc<Cell<u32>>) {
    let current = Rc::new(Cell::new(size));
    let calls = Rc::new(Cell::new(0u32));
    let (c, n) = (Rc::clone(&current), Rc::clone(&calls));
    let store = AxisStore::with_item_size(count, 20.0, move |_| {
        n.set(n.get() + 1);
        c.get()
    });
    (store, current, calls)
}

fn varied(index: u32) -> f64 {
    f64::from(10 + (index * 7) % 23)
}

// ============================================================================
// LAZY MEASUREMENT
// ============================================================================

#[test]
fn test_offset_measures_only_up_to_index() {
    let (mut store, _, calls) = adjustable_store(1_000_000, 20.0);

    assert_eq!(store.offset(10), 200.0);
    assert_eq!(store.last_measured_index(), Some(10));
    assert_eq!(calls.get(), 11);

    // Already measured: no further callback invocations
    assert_eq!(store.offset(5), 100.0);
    assert_eq!(calls.get(), 11);
}

#[test]
fn test_size_does_not_measure() {
    let (mut store, _, calls) = adjustable_store(100, 35.0);
    assert_eq!(store.size(50), 20.0, "unmeasured items report the estimate");
    assert_eq!(calls.get(), 0);

    store.offset(50);
    assert_eq!(store.size(50), 35.0);
}

#[test]
fn test_estimated_total_mixes_measured_and_estimated() {
    let (mut store, _, _) = adjustable_store(100, 30.0);
    assert_eq!(store.total(), 2_000.0);

    store.offset(9);
    assert_eq!(store.total(), 10.0 * 30.0 + 90.0 * 20.0);
    assert_eq!(store.estimated_total(5), 150.0);
}

#[test]
fn test_offsets_are_cumulative() {
    let mut store = AxisStore::with_item_size(500, 20.0, varied);
    for i in 0..499 {
        let next = store.offset(i + 1);
        let here = store.offset(i);
        assert_eq!(next, here + store.size(i), "offset({}) + size({})", i, i);
    }
}

// ============================================================================
// INVALIDATION
// ============================================================================

#[test]
fn test_invalidate_then_remeasure() {
    let (mut store, size, _) = adjustable_store(100, 20.0);
    store.offset(20);

    size.set(30.0);
    store.invalidate(10);
    assert_eq!(store.last_measured_index(), Some(9));

    // Rows before 10 keep their old sizes, rows from 10 are re-measured
    assert_eq!(store.offset(15), 10.0 * 20.0 + 5.0 * 30.0);
    assert_eq!(store.offset(5), 100.0);
}

#[test]
fn test_invalidate_past_measured_prefix_is_noop() {
    let (mut store, _, _) = adjustable_store(100, 20.0);
    store.offset(5);
    store.invalidate(50);
    assert_eq!(store.last_measured_index(), Some(5));
}

#[test]
fn test_reset_after_invalidates_both_axes() {
    let mut grid = uniform_grid(100, 100, 20.0, 80.0);
    let heights = Rc::new(Cell::new(20.0));
    let h = Rc::clone(&heights);
    grid.set_row_height(move |_| h.get());
    grid.set_column_width(|_| 80.0);
    assert_eq!(grid.offset(Axis::Row, 50), 1_000.0);
    grid.offset(Axis::Column, 50);

    heights.set(25.0);
    grid.reset_after(CellCoord::new(10, 20));
    assert_eq!(grid.store(Axis::Row).last_measured_index(), Some(9));
    assert_eq!(grid.store(Axis::Column).last_measured_index(), Some(19));
    assert_eq!(grid.offset(Axis::Row, 50), 200.0 + 40.0 * 25.0);
}

// ============================================================================
// STALE ITEMS
// ============================================================================

#[test]
fn test_mark_stale_shifts_later_offsets() {
    let sizes = Rc::new(Cell::new(20.0));
    let s = Rc::clone(&sizes);
    let mut grid = uniform_grid(100, 10, 20.0, 80.0);
    grid.set_row_height(move |row| if row == 3 { s.get() } else { 20.0 });
    assert_eq!(grid.offset(Axis::Row, 10), 200.0);

    sizes.set(50.0);
    grid.mark_stale(Axis::Row, &[3]);
    assert_eq!(grid.size(Axis::Row, 3), 20.0, "stale items report the estimate");

    assert_eq!(grid.offset(Axis::Row, 2), 40.0);
    assert_eq!(grid.offset(Axis::Row, 10), 230.0);
    assert_eq!(grid.size(Axis::Row, 3), 50.0);
    assert_eq!(grid.store(Axis::Row).last_measured_index(), Some(10));
}

#[test]
fn test_mark_stale_ignores_unmeasured_items() {
    let (mut store, _, _) = adjustable_store(100, 20.0);
    store.offset(5);
    store.mark_recalc(&[3, 40]);
    assert_eq!(store.stale_indices().collect::<Vec<_>>(), vec![3]);
}

// ============================================================================
// SIZE CALLBACK EDGE CASES
// ============================================================================

#[test]
fn test_invalid_sizes_are_sanitized() {
    let mut store = AxisStore::with_item_size(10, 20.0, |i| match i {
        1 => f64::NAN,
        2 => -5.0,
        3 => f64::INFINITY,
        _ => 10.0,
    });
    assert_eq!(store.offset(2), 10.0 + 20.0);
    assert_eq!(store.offset(3), 30.0);
    assert_eq!(store.offset(4), 50.0);
}

#[test]
fn test_scale_applies_without_remeasuring() {
    let (mut store, _, calls) = adjustable_store(100, 20.0);
    store.offset(10);
    store.set_scale(1.5);
    assert_eq!(store.offset(10), 300.0);
    assert_eq!(store.size(3), 30.0);
    assert_eq!(calls.get(), 11);

    store.set_scale(0.0);
    assert_eq!(store.scale(), 1.5, "invalid scale is ignored");
}

#[test]
fn test_shrinking_count_drops_measurements() {
    let (mut store, _, _) = adjustable_store(100, 20.0);
    store.offset(50);
    store.set_count(20);
    assert_eq!(store.last_measured_index(), Some(19));
    assert_eq!(store.offset(99), 380.0, "index clamps to the new last item");
}

// ============================================================================
// OFFSET <-> INDEX
// ============================================================================

#[test]
fn test_index_for_offset_round_trip() {
    let mut store = AxisStore::with_item_size(2_000, 20.0, varied);
    for i in (0..2_000).step_by(37) {
        let offset = store.offset(i);
        assert_eq!(index_for_offset(&mut store, offset), i);
        let mid = offset + store.size(i) / 2.0;
        assert_eq!(index_for_offset(&mut store, mid), i);
    }
}

#[test]
fn test_index_for_offset_beyond_measured_prefix() {
    let mut fresh = AxisStore::with_item_size(100_000, 20.0, varied);
    let mut reference = AxisStore::with_item_size(100_000, 20.0, varied);
    let target = reference.offset(75_000) + 1.0;

    assert_eq!(index_for_offset(&mut fresh, target), 75_000);
}

#[test]
fn test_index_for_offset_clamps() {
    let mut store = AxisStore::with_item_size(10, 20.0, |_| 20.0);
    assert_eq!(index_for_offset(&mut store, -100.0), 0);
    assert_eq!(index_for_offset(&mut store, f64::NAN), 0);
    assert_eq!(index_for_offset(&mut store, 1e9), 9);
}

#[test]
fn test_stop_index_for_start() {
    let mut store = AxisStore::with_item_size(100, 20.0, |_| 20.0);
    assert_eq!(stop_index_for_start(&mut store, 0, 0.0, 600.0), 29);
    assert_eq!(stop_index_for_start(&mut store, 10, 210.0, 600.0), 40);
    assert_eq!(stop_index_for_start(&mut store, 95, 1_900.0, 600.0), 99);
}
