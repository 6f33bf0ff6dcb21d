//! Container dimensions and content <-> screen conversion.
//!
//! Content coordinates are distances from the grid origin along the full,
//! unscrolled grid. Frozen items are drawn at their content position; all
//! other items are translated by the scroll offset and slide underneath the
//! frozen panes.

use serde::{Deserialize, Serialize};

use crate::types::Axis;

/// Default container width in pixels
pub const DEFAULT_CONTAINER_WIDTH: f64 = 800.0;

/// Default container height in pixels
pub const DEFAULT_CONTAINER_HEIGHT: f64 = 600.0;

/// Pixel size of the grid's container
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_CONTAINER_WIDTH, DEFAULT_CONTAINER_HEIGHT)
    }
}

impl Viewport {
    /// Create a viewport; negative or non-finite dimensions become 0
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f64, height: f64) {
        *self = Self::new(width, height);
    }

    /// Container extent along `axis`
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Row => self.height,
            Axis::Column => self.width,
        }
    }

    /// Largest useful scroll offset for content of `total` extent
    pub fn max_scroll(&self, axis: Axis, total: f64) -> f64 {
        (total - self.extent(axis)).max(0.0)
    }

    /// Clamp a scroll offset into `[0, max_scroll]`
    pub fn clamp_scroll(&self, axis: Axis, offset: f64, total: f64) -> f64 {
        if offset.is_finite() {
            offset.clamp(0.0, self.max_scroll(axis, total))
        } else {
            0.0
        }
    }
}

/// Screen position of a content coordinate belonging to item `index`.
///
/// Items before `frozen_count` stay fixed; everything else moves with the scroll.
pub fn to_screen(content: f64, index: u32, frozen_count: u32, scroll_offset: f64) -> f64 {
    if index < frozen_count {
        content
    } else {
        content - scroll_offset
    }
}

/// Content coordinate under a screen position.
///
/// Positions over the frozen panes map to frozen content; everything past them
/// maps into the scrolled region.
pub fn to_content(screen: f64, frozen_extent: f64, scroll_offset: f64) -> f64 {
    if screen < frozen_extent {
        screen
    } else {
        screen + scroll_offset
    }
}

fn sanitize(v: f64) -> f64 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_defaults() {
        let viewport = Viewport::default();
        assert_eq!(viewport.extent(Axis::Column), 800.0);
        assert_eq!(viewport.extent(Axis::Row), 600.0);
    }

    #[test]
    fn test_clamp_scroll() {
        let viewport = Viewport::new(800.0, 600.0);
        assert_eq!(viewport.clamp_scroll(Axis::Row, -10.0, 2_000.0), 0.0);
        assert_eq!(viewport.clamp_scroll(Axis::Row, 5_000.0, 2_000.0), 1_400.0);
        // Content smaller than the container never scrolls
        assert_eq!(viewport.clamp_scroll(Axis::Column, 50.0, 400.0), 0.0);
        assert_eq!(viewport.clamp_scroll(Axis::Row, f64::NAN, 2_000.0), 0.0);
    }

    #[test]
    fn test_screen_roundtrip_outside_frozen() {
        let screen = to_screen(250.0, 12, 2, 200.0);
        assert_eq!(screen, 50.0);
        assert_eq!(to_content(screen, 40.0, 200.0), 250.0);
    }

    #[test]
    fn test_frozen_content_is_fixed() {
        assert_eq!(to_screen(30.0, 1, 2, 500.0), 30.0);
        assert_eq!(to_content(30.0, 40.0, 500.0), 30.0);
    }

    #[test]
    fn test_negative_dimensions_sanitized() {
        let viewport = Viewport::new(-5.0, f64::INFINITY);
        assert_eq!(viewport.width, 0.0);
        assert_eq!(viewport.height, 0.0);
    }
}
