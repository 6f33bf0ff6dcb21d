//! Scroll offsets that bring a target cell into view.

use super::AxisStore;
use crate::types::Align;

/// Current viewport geometry along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisPane {
    /// Current scroll offset of the scrollable region
    pub scroll_offset: f64,
    /// Container extent along the axis (frozen panes included)
    pub extent: f64,
    pub frozen_count: u32,
    pub frozen_extent: f64,
}

impl AxisPane {
    /// Extent left for scrolled content once the frozen panes are drawn
    pub fn scrollable_extent(&self) -> f64 {
        (self.extent - self.frozen_extent).max(0.0)
    }
}

/// Planned scroll offset for one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScroll {
    pub offset: f64,
    /// Target lies more than one viewport away from the visible window;
    /// its measured geometry may still move, so apply on the next frame.
    pub deferred: bool,
}

/// Plan the scroll offset that places items `first..=last` (a cell, or the
/// rows/columns of a merged block) according to `align`.
///
/// Returns `None` when the axis must not scroll: the target starts inside the
/// frozen region, or the axis is empty.
pub fn plan_axis_scroll(
    store: &mut AxisStore,
    first: u32,
    last: u32,
    align: Align,
    pane: &AxisPane,
) -> Option<AxisScroll> {
    let count = store.count();
    if count == 0 || first < pane.frozen_count {
        return None;
    }
    let last = last.max(first);

    let item_start = store.item(first).offset;
    let item_end = store.item(last).end();
    let item_size = item_end - item_start;

    let visible = pane.scrollable_extent();
    let window_start = pane.scroll_offset + pane.frozen_extent;
    let window_end = pane.scroll_offset + pane.extent;

    let max_scroll = (store.total() - pane.extent).max(0.0);
    let start_offset = item_start - pane.frozen_extent;
    let end_offset = item_end - pane.extent;

    // An oversized block can only be shown from its leading edge
    let align = if item_size > visible { Align::Start } else { align };

    let raw = match align {
        Align::Start => start_offset,
        Align::End => end_offset,
        Align::Center => start_offset - (visible - item_size) / 2.0,
        Align::Smart => {
            if item_start >= window_start && item_end <= window_end {
                pane.scroll_offset
            } else if item_start < window_start {
                start_offset
            } else {
                end_offset
            }
        }
    };

    let gap = if item_end < window_start {
        window_start - item_end
    } else if item_start > window_end {
        item_start - window_end
    } else {
        0.0
    };

    Some(AxisScroll {
        offset: raw.clamp(0.0, max_scroll),
        deferred: gap > visible,
    })
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

    fn rows() -> AxisStore {
        AxisStore::with_item_size(100, 20.0, |_| 20.0)
    }

    fn pane(scroll_offset: f64) -> AxisPane {
        AxisPane {
            scroll_offset,
            extent: 600.0,
            frozen_count: 0,
            frozen_extent: 0.0,
        }
    }

    #[test]
    fn test_end_alignment_flush_with_bottom() {
        let mut store = rows();
        let plan = plan_axis_scroll(&mut store, 80, 80, Align::End, &pane(0.0)).unwrap();
        assert_eq!(plan.offset, store.offset(81) - 600.0);
    }

    #[test_case(Align::Start, 800.0 ; "start")]
    #[test_case(Align::End, 220.0 ; "end")]
    #[test_case(Align::Center, 510.0 ; "center")]
    fn test_alignment_modes(align: Align, expected: f64) {
        let mut store = rows();
        let plan = plan_axis_scroll(&mut store, 40, 40, align, &pane(0.0)).unwrap();
        assert_eq!(plan.offset, expected);
    }

    #[test]
    fn test_offsets_clamp_to_scroll_range() {
        let mut store = rows();
        let plan = plan_axis_scroll(&mut store, 2, 2, Align::End, &pane(0.0)).unwrap();
        assert_eq!(plan.offset, 0.0);
        let plan = plan_axis_scroll(&mut store, 99, 99, Align::Start, &pane(0.0)).unwrap();
        assert_eq!(plan.offset, 1_400.0);
    }

    #[test]
    fn test_smart_keeps_visible_target() {
        let mut store = rows();
        let plan = plan_axis_scroll(&mut store, 12, 12, Align::Smart, &pane(100.0)).unwrap();
        assert_eq!(plan.offset, 100.0);
    }

    #[test]
    fn test_smart_edges_are_inclusive() {
        let mut store = rows();
        // Row 5 starts exactly at the viewport top
        let plan = plan_axis_scroll(&mut store, 5, 5, Align::Smart, &pane(100.0)).unwrap();
        assert_eq!(plan.offset, 100.0);
        // Row 34 ends exactly at the viewport bottom (700)
        let plan = plan_axis_scroll(&mut store, 34, 34, Align::Smart, &pane(100.0)).unwrap();
        assert_eq!(plan.offset, 100.0);
    }

    #[test]
    fn test_smart_picks_nearest_edge() {
        let mut store = rows();
        let above = plan_axis_scroll(&mut store, 2, 2, Align::Smart, &pane(100.0)).unwrap();
        assert_eq!(above.offset, 40.0);
        let below = plan_axis_scroll(&mut store, 40, 40, Align::Smart, &pane(100.0)).unwrap();
        assert_eq!(below.offset, 220.0);
    }

    #[test]
    fn test_oversized_target_aligns_to_start() {
        let mut store = AxisStore::with_item_size(10, 20.0, |i| if i == 5 { 900.0 } else { 20.0 });
        let plan = plan_axis_scroll(&mut store, 5, 5, Align::End, &pane(0.0)).unwrap();
        assert_eq!(plan.offset, 100.0);
    }

    #[test]
    fn test_frozen_target_is_suppressed() {
        let mut store = rows();
        let frozen = AxisPane {
            frozen_count: 3,
            frozen_extent: 60.0,
            ..pane(200.0)
        };
        assert!(plan_axis_scroll(&mut store, 1, 1, Align::Start, &frozen).is_none());
        // First scrollable row lands right below the frozen rows
        let plan = plan_axis_scroll(&mut store, 10, 10, Align::Start, &frozen).unwrap();
        assert_eq!(plan.offset, 140.0);
    }

    #[test]
    fn test_far_target_is_deferred() {
        let mut store = rows();
        let near = plan_axis_scroll(&mut store, 40, 40, Align::Start, &pane(0.0)).unwrap();
        assert!(!near.deferred);
        let far = plan_axis_scroll(&mut store, 90, 90, Align::Start, &pane(0.0)).unwrap();
        assert!(far.deferred);
    }
}
