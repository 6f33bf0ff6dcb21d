//! Browser-side smoke tests for the `GridView` bindings.
//!
//! Run with: wasm-pack test --headless --chrome
#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

use gridgeom::{AxisRange, CellCoord, GridOptions, GridView};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn view(rows: u32, columns: u32) -> GridView {
    let options = serde_wasm_bindgen::to_value(&GridOptions::new(rows, columns)).unwrap();
    GridView::new(options).unwrap()
}

#[wasm_bindgen_test]
fn test_construct_with_defaults() {
    let grid = GridView::new(JsValue::UNDEFINED).unwrap();
    assert!(!grid.is_scrolling());
}

#[wasm_bindgen_test]
fn test_visible_range_from_js() {
    let grid = view(1_000, 10);
    let range: AxisRange = serde_wasm_bindgen::from_value(grid.visible_range("row").unwrap()).unwrap();
    assert_eq!(range.precise_start, 0);
    assert_eq!(range.precise_stop, 29);
    assert!(grid.visible_range("diagonal").is_err());
}

#[wasm_bindgen_test]
fn test_scroll_marks_scrolling() {
    let grid = view(1_000, 10);
    assert!(grid.on_scroll(400.0, 0.0));
    assert!(grid.is_scrolling());
    assert_eq!(grid.offset("row", 20).unwrap(), 400.0);
}

#[wasm_bindgen_test]
fn test_wheel_marks_scrolling() {
    let grid = view(1_000, 10);
    grid.wheel(0.0, 120.0);
    assert!(grid.is_scrolling());
}

#[wasm_bindgen_test]
fn test_estimated_size_from_js() {
    let grid = view(100, 10);
    grid.set_estimated_size("row", 30.0).unwrap();
    assert_eq!(grid.estimated_total("row", 100).unwrap(), 3_000.0);
    assert!(grid.set_estimated_size("diagonal", 30.0).is_err());
}

#[wasm_bindgen_test]
fn test_hit_test_from_js() {
    let grid = view(100, 10);
    let cell: CellCoord = serde_wasm_bindgen::from_value(grid.offset_to_cell(70.0, 45.0).unwrap()).unwrap();
    assert_eq!(cell, CellCoord::new(2, 1));
    assert!(grid.offset_to_cell(10.0, 5_000.0).unwrap().is_null());
}
