use serde::{Deserialize, Serialize};

use crate::types::{Axis, ScrollDirection, ScrollOffsets};

/// Scroll position, direction and the "is scrolling" flag of one grid.
///
/// `is_scrolling` turns on with every scroll input and is only turned off by
/// the debounce timer (see [`super::ScrollDebounce`]).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollState {
    pub scroll_top: f64,
    pub scroll_left: f64,
    pub is_scrolling: bool,
    pub vertical_direction: ScrollDirection,
    pub horizontal_direction: ScrollDirection,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offsets(&self) -> ScrollOffsets {
        ScrollOffsets {
            scroll_top: self.scroll_top,
            scroll_left: self.scroll_left,
        }
    }

    /// Scroll offset along `axis`
    pub fn offset(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Row => self.scroll_top,
            Axis::Column => self.scroll_left,
        }
    }

    /// Direction of the last movement along `axis`
    pub fn direction(&self, axis: Axis) -> ScrollDirection {
        match axis {
            Axis::Row => self.vertical_direction,
            Axis::Column => self.horizontal_direction,
        }
    }

    /// Move to `offsets`, updating the direction of each axis that moved.
    /// Returns `true` if either offset changed.
    pub fn apply(&mut self, offsets: ScrollOffsets) -> bool {
        let moved_top = update_axis(
            &mut self.scroll_top,
            &mut self.vertical_direction,
            offsets.scroll_top,
        );
        let moved_left = update_axis(
            &mut self.scroll_left,
            &mut self.horizontal_direction,
            offsets.scroll_left,
        );
        moved_top || moved_left
    }
}

fn update_axis(current: &mut f64, direction: &mut ScrollDirection, next: f64) -> bool {
    if (next - *current).abs() <= f64::EPSILON {
        return false;
    }
    *direction = if next > *current {
        ScrollDirection::Forward
    } else {
        ScrollDirection::Backward
    };
    *current = next;
    true
}
