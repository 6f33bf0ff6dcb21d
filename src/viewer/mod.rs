//! `GridView` - the WASM-exported entry point for JavaScript hosts.
//!
//! The host owns the DOM: it forwards container scroll/wheel events and
//! container resizes, supplies row/column size callbacks, and draws whatever
//! `visible_cells()` returns. Timers and animation frames are scheduled here
//! through `window`, so `is_scrolling` settles on its own.

mod scroll;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::grid::GridGeometry;
use crate::options::GridOptions;
use crate::types::{Align, AreaBounds, Axis, CellCoord, ScrollOffsets};

use scroll::BrowserTimers;

/// Shared state reachable from timer and animation-frame closures
pub(crate) struct SharedState {
    pub(crate) grid: GridGeometry,
    pub(crate) timers: BrowserTimers,
    pub(crate) frame_closure: Option<Closure<dyn FnMut()>>,
    pub(crate) frame_requested: bool,
    pub(crate) render_callback: Option<Function>,
}

/// Grid geometry handle for JavaScript
#[wasm_bindgen]
pub struct GridView {
    state: Rc<RefCell<SharedState>>,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

fn parse_axis(axis: &str) -> Result<Axis, JsValue> {
    axis.parse::<Axis>().map_err(JsValue::from)
}

/// Wrap a JS `(index) => number` function as a size callback.
/// Throwing or non-numeric results fall back to the estimated size.
fn js_size_callback(callback: Function) -> impl Fn(u32) -> f64 {
    move |index| {
        callback
            .call1(&JsValue::NULL, &JsValue::from(index))
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(f64::NAN)
    }
}

#[wasm_bindgen]
impl GridView {
    /// Create a grid from an options object (see `GridOptions`, camelCase keys).
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<GridView, JsValue> {
        console_error_panic_hook::set_once();

        let options: GridOptions = if options.is_undefined() || options.is_null() {
            GridOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| JsValue::from_str(&format!("Invalid options: {e}")))?
        };
        let grid = GridGeometry::new(&options)?;

        let state = Rc::new(RefCell::new(SharedState {
            grid,
            timers: BrowserTimers::new(),
            frame_closure: None,
            frame_requested: false,
            render_callback: None,
        }));
        Self::install_closures(&state);

        Ok(GridView { state })
    }

    /// Set the size callback for rows; discards all row measurements
    pub fn set_row_height(&self, callback: Function) {
        self.state
            .borrow_mut()
            .grid
            .set_row_height(js_size_callback(callback));
    }

    /// Set the size callback for columns; discards all column measurements
    pub fn set_column_width(&self, callback: Function) {
        self.state
            .borrow_mut()
            .grid
            .set_column_width(js_size_callback(callback));
    }

    /// Set a callback invoked (with the current scroll offsets) whenever the
    /// grid needs to be redrawn outside of a host-driven call
    pub fn set_render_callback(&self, callback: Option<Function>) {
        self.state.borrow_mut().render_callback = callback;
    }

    pub fn set_container_size(&self, width: f64, height: f64) {
        self.state
            .borrow_mut()
            .grid
            .set_container_size(width, height);
    }

    pub fn set_count(&self, axis: &str, count: u32) -> Result<(), JsValue> {
        let axis = parse_axis(axis)?;
        self.state.borrow_mut().grid.set_count(axis, count);
        Ok(())
    }

    pub fn set_frozen(&self, rows: u32, columns: u32) {
        self.state.borrow_mut().grid.set_frozen(rows, columns);
    }

    /// Size assumed for unmeasured rows or columns
    pub fn set_estimated_size(&self, axis: &str, size: f64) -> Result<(), JsValue> {
        let axis = parse_axis(axis)?;
        self.state.borrow_mut().grid.set_estimated_size(axis, size);
        Ok(())
    }

    pub fn set_scale(&self, scale: f64) {
        self.state.borrow_mut().grid.set_scale(scale);
    }

    /// Replace the merged regions with a list of `{top, left, bottom, right}`
    pub fn set_merged_cells(&self, regions: JsValue) -> Result<(), JsValue> {
        let regions: Vec<AreaBounds> = serde_wasm_bindgen::from_value(regions)
            .map_err(|e| JsValue::from_str(&format!("Invalid merged cells: {e}")))?;
        self.state.borrow_mut().grid.set_merged_regions(&regions);
        Ok(())
    }

    /// `{start, stop, preciseStart, preciseStop}` for `"row"` or `"column"`
    pub fn visible_range(&self, axis: &str) -> Result<JsValue, JsValue> {
        let axis = parse_axis(axis)?;
        let range = self.state.borrow_mut().grid.visible_range(axis);
        to_js(&range)
    }

    pub fn offset(&self, axis: &str, index: u32) -> Result<f64, JsValue> {
        let axis = parse_axis(axis)?;
        Ok(self.state.borrow_mut().grid.offset(axis, index))
    }

    pub fn size(&self, axis: &str, index: u32) -> Result<f64, JsValue> {
        let axis = parse_axis(axis)?;
        Ok(self.state.borrow().grid.size(axis, index))
    }

    pub fn estimated_total(&self, axis: &str, count: u32) -> Result<f64, JsValue> {
        let axis = parse_axis(axis)?;
        Ok(self.state.borrow().grid.estimated_total(axis, count))
    }

    pub fn invalidate(&self, axis: &str, from_index: u32) -> Result<(), JsValue> {
        let axis = parse_axis(axis)?;
        self.state.borrow_mut().grid.invalidate(axis, from_index);
        Ok(())
    }

    pub fn mark_stale(&self, axis: &str, indices: Vec<u32>) -> Result<(), JsValue> {
        let axis = parse_axis(axis)?;
        self.state.borrow_mut().grid.mark_stale(axis, &indices);
        Ok(())
    }

    pub fn resolve_cell_bounds(&self, row: u32, column: u32) -> Result<JsValue, JsValue> {
        let bounds = self
            .state
            .borrow()
            .grid
            .resolve_cell_bounds(CellCoord::new(row, column));
        to_js(&bounds)
    }

    pub fn canonical_cell(&self, row: u32, column: u32) -> Result<JsValue, JsValue> {
        let cell = self
            .state
            .borrow()
            .grid
            .canonical_cell(CellCoord::new(row, column));
        to_js(&cell)
    }

    /// Screen rectangle of the block containing the cell
    pub fn cell_rect(&self, row: u32, column: u32) -> Result<JsValue, JsValue> {
        let rect = self
            .state
            .borrow_mut()
            .grid
            .cell_screen_rect(CellCoord::new(row, column));
        to_js(&rect)
    }

    /// Hit-test a container-relative point. Returns `null` outside the grid.
    pub fn offset_to_cell(&self, x: f64, y: f64) -> Result<JsValue, JsValue> {
        match self.state.borrow_mut().grid.offset_to_cell(x, y) {
            Some(cell) => to_js(&cell),
            None => Ok(JsValue::NULL),
        }
    }

    /// Plan a scroll to a cell without applying it
    pub fn plan_scroll_to(&self, row: u32, column: u32, align: &str) -> Result<JsValue, JsValue> {
        let align = align.parse::<Align>()?;
        let plan = self
            .state
            .borrow_mut()
            .grid
            .plan_scroll_to(CellCoord::new(row, column), align);
        to_js(&plan)
    }

    /// Scroll to a cell. Returns the new offsets, or `null` when nothing moved
    /// now (the target is frozen, already visible, or deferred to the next frame).
    pub fn scroll_to_cell(&self, row: u32, column: u32, align: &str) -> Result<JsValue, JsValue> {
        let align = align.parse::<Align>()?;
        let offsets = {
            let mut s = self.state.borrow_mut();
            let offsets = s
                .grid
                .request_scroll_to(CellCoord::new(row, column), align);
            if s.grid.needs_frame() {
                Self::request_frame(&mut s);
            }
            offsets
        };
        match offsets {
            Some(offsets) => to_js(&offsets),
            None => Ok(JsValue::NULL),
        }
    }

    /// Forward a scroll event from the host's scroll container
    pub fn on_scroll(&self, scroll_top: f64, scroll_left: f64) -> bool {
        let mut guard = self.state.borrow_mut();
        let s = &mut *guard;
        s.grid.on_scroll(
            ScrollOffsets {
                scroll_top,
                scroll_left,
            },
            &mut s.timers,
        )
    }

    /// Forward a wheel delta; applied on the next animation frame
    pub fn wheel(&self, delta_x: f64, delta_y: f64) {
        let mut guard = self.state.borrow_mut();
        let s = &mut *guard;
        if s.grid.on_wheel(delta_x, delta_y, &mut s.timers) {
            Self::request_frame(s);
        }
    }

    pub fn is_scrolling(&self) -> bool {
        self.state.borrow().grid.is_scrolling()
    }

    pub fn scroll_state(&self) -> Result<JsValue, JsValue> {
        let scroll = *self.state.borrow().grid.scroll_state();
        to_js(&scroll)
    }

    /// Blocks to draw this pass, merged regions once each
    pub fn visible_cells(&self) -> Result<JsValue, JsValue> {
        let cells = self.state.borrow_mut().grid.visible_cells();
        to_js(&cells)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = self.state.borrow_mut().grid.snapshot();
        to_js(&snapshot)
    }
}

impl GridView {
    pub(crate) fn invoke_render_callback(callback: Option<Function>, offsets: ScrollOffsets) {
        if let Some(callback) = callback {
            let arg = to_js(&offsets).unwrap_or(JsValue::NULL);
            let _ = callback.call1(&JsValue::NULL, &arg);
        }
    }
}
