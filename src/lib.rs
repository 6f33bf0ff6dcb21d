//! gridgeom - geometry engine for virtualized grids
//!
//! Decides what a grid of R rows x C columns has to draw for a given scroll
//! position, without measuring every row and column up front:
//! - Lazily measured row heights / column widths with cumulative offsets
//! - Offset <-> index resolution and visible index windows with overscan
//! - Merged cells, frozen panes and zoom
//! - Scroll-to-cell alignment (`start`, `end`, `center`, `smart`)
//! - Scroll-settle debounce and wheel frame coalescing
//!
//! # Usage (Rust)
//!
//! ```
//! use gridgeom::{Axis, GridGeometry, GridOptions};
//!
//! let mut grid = GridGeometry::new(&GridOptions::new(10_000, 50)).unwrap();
//! grid.set_row_height(|row| if row % 10 == 0 { 32.0 } else { 20.0 });
//! let rows = grid.visible_range(Axis::Row);
//! assert_eq!(rows.start, 0);
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'gridgeom';
//! await init();
//! const grid = new GridView({ rowCount: 10000, columnCount: 50 });
//! grid.set_row_height((row) => 20);
//! grid.visible_range('row');
//! ```

pub mod cell_ref;
pub mod error;
pub mod grid;
pub mod layout;
pub mod options;
pub mod scroll;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use error::{GridError, Result};
pub use grid::{CellPlacement, GridGeometry, GridSnapshot};
pub use options::GridOptions;
pub use types::*;

#[cfg(target_arch = "wasm32")]
pub use viewer::GridView;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
