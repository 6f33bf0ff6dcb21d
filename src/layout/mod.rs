//! Geometry engine for a virtualized grid.
//!
//! This module handles:
//! - Lazily measured per-axis size metadata with cumulative offsets
//! - Offset -> index resolution (binary search / exponential probe)
//! - Visible index windows with direction-aware overscan
//! - Merged cell lookup
//! - Scroll offsets for bringing a cell into view

pub mod align;
pub mod merge;
pub mod range;
pub mod resolver;
mod size_store;
mod viewport;

pub use align::{plan_axis_scroll, AxisPane, AxisScroll};
pub use merge::{MergedIndex, RenderedMerges};
pub use range::{visible_range, RangeRequest};
pub use resolver::{index_for_offset, stop_index_for_start};
pub use size_store::{AxisStore, ItemMetadata, SizeFn};
pub use viewport::{
    to_content, to_screen, Viewport, DEFAULT_CONTAINER_HEIGHT, DEFAULT_CONTAINER_WIDTH,
};

/// Default column width in pixels
pub const DEFAULT_COL_WIDTH: f64 = 64.0;

/// Default row height in pixels
pub const DEFAULT_ROW_HEIGHT: f64 = 20.0;
