//! Visible index window of the scrollable region along one axis, with
//! direction-aware overscan.

use super::resolver::{index_for_offset, stop_index_for_start};
use super::AxisStore;
use crate::types::{AxisRange, ScrollDirection};

/// Inputs describing one axis of the viewport for a render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeRequest {
    /// Scroll offset of the scrollable region
    pub scroll_offset: f64,
    /// Container extent along the axis (frozen panes included)
    pub container_extent: f64,
    /// Number of leading frozen items
    pub frozen_count: u32,
    /// Pixel extent of the frozen items
    pub frozen_extent: f64,
    /// Configured overscan item count
    pub overscan: u32,
    pub is_scrolling: bool,
    pub direction: ScrollDirection,
}

/// Compute `[start, stop, precise_start, precise_stop]` for the scrollable
/// region of one axis.
///
/// While idle both edges get `max(1, overscan)` extra items. While scrolling,
/// only the edge the scroll is moving toward gets the full amount; the
/// trailing edge keeps exactly one item so focus traversal still has a
/// neighbour to land on.
pub fn visible_range(store: &mut AxisStore, request: &RangeRequest) -> AxisRange {
    let Some(last) = store.count().checked_sub(1) else {
        return AxisRange::default();
    };
    let first_scrollable = request.frozen_count.min(last);

    // The frozen panes cover the first `frozen_extent` pixels of the container,
    // so scrollable content starts that far past the scroll offset.
    let precise_start = index_for_offset(store, request.scroll_offset + request.frozen_extent)
        .max(first_scrollable);
    let precise_stop = stop_index_for_start(
        store,
        precise_start,
        request.scroll_offset,
        request.container_extent,
    );

    let full = request.overscan.max(1);
    let (backward, forward) = if !request.is_scrolling {
        (full, full)
    } else {
        match request.direction {
            ScrollDirection::Forward => (1, full),
            ScrollDirection::Backward => (full, 1),
        }
    };

    AxisRange {
        start: precise_start.saturating_sub(backward).max(first_scrollable),
        stop: precise_stop.saturating_add(forward).min(last),
        precise_start,
        precise_stop,
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
    use test_case::test_case;

    fn rows(count: u32) -> AxisStore {
        AxisStore::with_item_size(count, 20.0, |_| 20.0)
    }

    fn request(scroll_offset: f64) -> RangeRequest {
        RangeRequest {
            scroll_offset,
            container_extent: 600.0,
            frozen_count: 0,
            frozen_extent: 0.0,
            overscan: 3,
            is_scrolling: false,
            direction: ScrollDirection::Forward,
        }
    }

    #[test]
    fn test_idle_overscan_both_edges() {
        let mut store = rows(1_000);
        let range = visible_range(&mut store, &request(400.0));
        assert_eq!(range.precise_start, 20);
        assert_eq!(range.precise_stop, 49);
        assert_eq!(range.start, 17);
        assert_eq!(range.stop, 52);
    }

    #[test_case(ScrollDirection::Forward, 19, 52 ; "scrolling down")]
    #[test_case(ScrollDirection::Backward, 17, 50 ; "scrolling up")]
    fn test_scrolling_overscan_is_asymmetric(direction: ScrollDirection, start: u32, stop: u32) {
        let mut store = rows(1_000);
        let req = RangeRequest {
            is_scrolling: true,
            direction,
            ..request(400.0)
        };
        let range = visible_range(&mut store, &req);
        assert_eq!(range.start, start);
        assert_eq!(range.stop, stop);
    }

    #[test]
    fn test_zero_overscan_still_renders_one_extra() {
        let mut store = rows(1_000);
        let req = RangeRequest {
            overscan: 0,
            ..request(400.0)
        };
        let range = visible_range(&mut store, &req);
        assert_eq!(range.start, 19);
        assert_eq!(range.stop, 50);
    }

    #[test]
    fn test_range_clamps_to_bounds() {
        let mut store = rows(10);
        let range = visible_range(&mut store, &request(0.0));
        assert_eq!(range.start, 0);
        assert_eq!(range.stop, 9);
        let range = visible_range(&mut store, &request(10_000.0));
        assert_eq!(range.precise_start, 9);
        assert_eq!(range.stop, 9);
    }

    #[test]
    fn test_empty_axis_is_degenerate() {
        let mut store = rows(0);
        assert_eq!(visible_range(&mut store, &request(0.0)), AxisRange::default());
    }

    #[test]
    fn test_frozen_rows_are_excluded() {
        let mut store = rows(100);
        let req = RangeRequest {
            frozen_count: 2,
            frozen_extent: 40.0,
            ..request(0.0)
        };
        let range = visible_range(&mut store, &req);
        assert_eq!(range.precise_start, 2);
        assert_eq!(range.start, 2);
        assert_eq!(range.precise_stop, 29);

        let req = RangeRequest {
            frozen_count: 2,
            frozen_extent: 40.0,
            ..request(100.0)
        };
        let range = visible_range(&mut store, &req);
        // Content at screen y=40 is logical y=140, row 7
        assert_eq!(range.precise_start, 7);
        assert_eq!(range.start, 4);
    }
}
