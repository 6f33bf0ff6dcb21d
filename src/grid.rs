//! `GridGeometry` - the geometry state of one grid instance.
//!
//! Owns both axis stores, the merged-cell index, the container viewport and
//! the scroll state. Rendering and input layers talk to the engine only
//! through the methods here; the stores are never handed out mutably.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::Result;
use crate::layout::{
    index_for_offset, plan_axis_scroll, to_content, to_screen, visible_range, AxisPane,
    AxisStore, MergedIndex, RangeRequest, RenderedMerges, Viewport,
};
use crate::options::GridOptions;
use crate::scroll::{FrameGate, ScrollDebounce, ScrollState, TimerId, TimerScheduler};
use crate::types::{
    Align, ApplyTiming, AreaBounds, Axis, AxisRange, CellCoord, CellRect, GridRange,
    ScrollOffsets, ScrollPlan,
};

/// One block to draw in a render pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellPlacement {
    /// Anchor cell of the block
    pub cell: CellCoord,
    /// Cells covered by the block (1x1 unless merged)
    pub bounds: AreaBounds,
    /// Screen rectangle, scroll and frozen panes applied
    pub rect: CellRect,
}

/// Serializable view of the grid geometry at one moment
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSnapshot {
    pub rows: AxisRange,
    pub columns: AxisRange,
    pub scroll: ScrollState,
    pub total_width: f64,
    pub total_height: f64,
    pub frozen_width: f64,
    pub frozen_height: f64,
    pub merged_cells: Vec<AreaBounds>,
    pub cells: Vec<CellPlacement>,
}

/// Geometry state of a virtualized grid
#[derive(Debug)]
pub struct GridGeometry {
    rows: AxisStore,
    columns: AxisStore,
    merged: MergedIndex,
    frozen_rows: u32,
    frozen_columns: u32,
    overscan_rows: u32,
    overscan_columns: u32,
    viewport: Viewport,
    scroll: ScrollState,
    debounce: ScrollDebounce,
    wheel: FrameGate,
    pending_scroll: Option<ScrollOffsets>,
}

impl GridGeometry {
    /// Build a grid from validated options.
    ///
    /// Sizes come from the sparse `rowHeights` / `columnWidths` overrides,
    /// falling back to the estimated sizes; install real callbacks with
    /// [`set_row_height`](Self::set_row_height) and
    /// [`set_column_width`](Self::set_column_width).
    pub fn new(options: &GridOptions) -> Result<Self> {
        options.validate()?;

        let mut rows = AxisStore::with_item_size(
            options.row_count,
            options.estimated_row_height,
            sizes_with_overrides(&options.row_heights, options.estimated_row_height),
        );
        let mut columns = AxisStore::with_item_size(
            options.column_count,
            options.estimated_column_width,
            sizes_with_overrides(&options.column_widths, options.estimated_column_width),
        );
        rows.set_scale(options.scale);
        columns.set_scale(options.scale);

        Ok(Self {
            rows,
            columns,
            merged: MergedIndex::build(&options.merged_regions()),
            frozen_rows: options.frozen_rows,
            frozen_columns: options.frozen_columns,
            overscan_rows: options.overscan_row_count,
            overscan_columns: options.overscan_column_count,
            viewport: Viewport::new(options.container_width, options.container_height),
            scroll: ScrollState::new(),
            debounce: ScrollDebounce::new(options.scroll_debounce_ms),
            wheel: FrameGate::new(),
            pending_scroll: None,
        })
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Read-only access to an axis store
    pub fn store(&self, axis: Axis) -> &AxisStore {
        match axis {
            Axis::Row => &self.rows,
            Axis::Column => &self.columns,
        }
    }

    fn store_mut(&mut self, axis: Axis) -> &mut AxisStore {
        match axis {
            Axis::Row => &mut self.rows,
            Axis::Column => &mut self.columns,
        }
    }

    pub fn count(&self, axis: Axis) -> u32 {
        self.store(axis).count()
    }

    pub fn set_count(&mut self, axis: Axis, count: u32) {
        self.store_mut(axis).set_count(count);
        self.clamp_scroll();
    }

    /// Install a new size callback for `axis`; all measurements on that axis are discarded.
    pub fn set_item_size(&mut self, axis: Axis, item_size: impl Fn(u32) -> f64 + 'static) {
        self.store_mut(axis).set_item_size(item_size);
    }

    /// Change the size assumed for unmeasured items on `axis`. Negative or
    /// non-finite sizes become 0.
    pub fn set_estimated_size(&mut self, axis: Axis, size: f64) {
        self.store_mut(axis).set_estimated_item_size(size);
        self.clamp_scroll();
    }

    pub fn set_row_height(&mut self, row_height: impl Fn(u32) -> f64 + 'static) {
        self.set_item_size(Axis::Row, row_height);
    }

    pub fn set_column_width(&mut self, column_width: impl Fn(u32) -> f64 + 'static) {
        self.set_item_size(Axis::Column, column_width);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_container_size(&mut self, width: f64, height: f64) {
        self.viewport.resize(width, height);
        self.clamp_scroll();
    }

    /// Number of frozen items on `axis`
    pub fn frozen_count(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Row => self.frozen_rows,
            Axis::Column => self.frozen_columns,
        }
    }

    pub fn set_frozen(&mut self, rows: u32, columns: u32) {
        self.frozen_rows = rows;
        self.frozen_columns = columns;
    }

    pub fn set_overscan(&mut self, rows: u32, columns: u32) {
        self.overscan_rows = rows;
        self.overscan_columns = columns;
    }

    fn overscan(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Row => self.overscan_rows,
            Axis::Column => self.overscan_columns,
        }
    }

    /// Set the zoom factor on both axes. Invalid values are ignored.
    pub fn set_scale(&mut self, scale: f64) {
        self.rows.set_scale(scale);
        self.columns.set_scale(scale);
        self.clamp_scroll();
    }

    pub fn scale(&self) -> f64 {
        self.rows.scale()
    }

    /// Replace the merged region list and rebuild the index
    pub fn set_merged_regions(&mut self, regions: &[AreaBounds]) {
        self.merged = MergedIndex::build(regions);
    }

    pub fn merged(&self) -> &MergedIndex {
        &self.merged
    }

    // ------------------------------------------------------------------
    // Size metadata
    // ------------------------------------------------------------------

    /// Leading edge of item `index` on `axis` (scaled)
    pub fn offset(&mut self, axis: Axis, index: u32) -> f64 {
        self.store_mut(axis).offset(index)
    }

    /// Size of item `index` on `axis`, or the estimate if not measured yet
    pub fn size(&self, axis: Axis, index: u32) -> f64 {
        self.store(axis).size(index)
    }

    /// Estimated extent of the first `count` items on `axis`
    pub fn estimated_total(&self, axis: Axis, count: u32) -> f64 {
        self.store(axis).estimated_total(count)
    }

    /// Estimated extent of every item on `axis`
    pub fn total(&self, axis: Axis) -> f64 {
        self.store(axis).total()
    }

    /// Pixel extent of the frozen items on `axis`
    pub fn frozen_extent(&mut self, axis: Axis) -> f64 {
        let frozen = self.frozen_count(axis).min(self.count(axis));
        match frozen.checked_sub(1) {
            Some(last) => self.store_mut(axis).item(last).end(),
            None => 0.0,
        }
    }

    /// Discard measurements on `axis` from `from_index` onward
    pub fn invalidate(&mut self, axis: Axis, from_index: u32) {
        self.store_mut(axis).invalidate(from_index);
    }

    /// Re-read the sizes of specific items on `axis` on next access
    pub fn mark_stale(&mut self, axis: Axis, indices: &[u32]) {
        self.store_mut(axis).mark_recalc(indices);
    }

    /// Invalidate rows from `cell.row` and columns from `cell.column`
    pub fn reset_after(&mut self, cell: CellCoord) {
        self.rows.invalidate(cell.row);
        self.columns.invalidate(cell.column);
    }

    // ------------------------------------------------------------------
    // Visible range
    // ------------------------------------------------------------------

    /// Overscanned and precise index window of the scrollable region on `axis`
    pub fn visible_range(&mut self, axis: Axis) -> AxisRange {
        let request = RangeRequest {
            scroll_offset: self.scroll.offset(axis),
            container_extent: self.viewport.extent(axis),
            frozen_count: self.frozen_count(axis),
            frozen_extent: self.frozen_extent(axis),
            overscan: self.overscan(axis),
            is_scrolling: self.scroll.is_scrolling,
            direction: self.scroll.direction(axis),
        };
        visible_range(self.store_mut(axis), &request)
    }

    /// Overscanned window of both axes
    pub fn visible_window(&mut self) -> GridRange {
        let rows = self.visible_range(Axis::Row);
        let columns = self.visible_range(Axis::Column);
        GridRange::from_axes(rows, columns)
    }

    /// Every index on `axis` drawn this pass: frozen items, then the scrollable window
    fn render_indices(&mut self, axis: Axis) -> Vec<u32> {
        let count = self.count(axis);
        if count == 0 {
            return Vec::new();
        }
        let frozen = self.frozen_count(axis).min(count);
        let mut indices: Vec<u32> = (0..frozen).collect();
        if frozen < count {
            let range = self.visible_range(axis);
            indices.extend(range.start..=range.stop);
        }
        indices
    }

    /// Blocks to draw this pass, frozen panes included.
    ///
    /// Merged regions appear once, at their anchor, even when the anchor
    /// itself lies outside the window.
    pub fn visible_cells(&mut self) -> Vec<CellPlacement> {
        let rows = self.render_indices(Axis::Row);
        let columns = self.render_indices(Axis::Column);
        let mut rendered = RenderedMerges::new();
        let mut cells = Vec::with_capacity(rows.len() * columns.len());

        for &row in &rows {
            for &column in &columns {
                let cell = CellCoord::new(row, column);
                let bounds = self.merged.bounds_of(cell);
                let anchor = bounds.anchor();
                if !bounds.is_single_cell() && !rendered.claim(anchor) {
                    continue;
                }
                cells.push(CellPlacement {
                    cell: anchor,
                    bounds,
                    rect: self.area_screen_rect(bounds),
                });
            }
        }
        cells
    }

    // ------------------------------------------------------------------
    // Merged cells and pixel geometry
    // ------------------------------------------------------------------

    /// Bounds of the block `cell` belongs to
    pub fn resolve_cell_bounds(&self, cell: CellCoord) -> AreaBounds {
        self.merged.bounds_of(cell)
    }

    /// Anchor cell of the block `cell` belongs to
    pub fn canonical_cell(&self, cell: CellCoord) -> CellCoord {
        self.merged.canonical_of(cell)
    }

    pub fn is_merged(&self, cell: CellCoord) -> bool {
        self.merged.is_merged(cell)
    }

    /// Content-space rectangle covering `area`
    pub fn bounds_rect(&mut self, area: AreaBounds) -> CellRect {
        let area = area.normalized();
        let top = self.rows.item(area.top);
        let bottom = self.rows.item(area.bottom);
        let left = self.columns.item(area.left);
        let right = self.columns.item(area.right);
        CellRect {
            x: left.offset,
            y: top.offset,
            width: (right.end() - left.offset).max(0.0),
            height: (bottom.end() - top.offset).max(0.0),
        }
    }

    /// Content-space rectangle of the block `cell` belongs to
    pub fn cell_rect(&mut self, cell: CellCoord) -> CellRect {
        let bounds = self.merged.bounds_of(cell);
        self.bounds_rect(bounds)
    }

    /// Screen rectangle of the block `cell` belongs to
    pub fn cell_screen_rect(&mut self, cell: CellCoord) -> CellRect {
        let bounds = self.merged.bounds_of(cell);
        self.area_screen_rect(bounds)
    }

    fn area_screen_rect(&mut self, area: AreaBounds) -> CellRect {
        let rect = self.bounds_rect(area);
        CellRect {
            x: to_screen(
                rect.x,
                area.left,
                self.frozen_columns,
                self.scroll.scroll_left,
            ),
            y: to_screen(rect.y, area.top, self.frozen_rows, self.scroll.scroll_top),
            ..rect
        }
    }

    /// Cell under the screen point `(x, y)`, resolved to its merged anchor.
    ///
    /// Returns `None` outside the grid's content.
    pub fn offset_to_cell(&mut self, x: f64, y: f64) -> Option<CellCoord> {
        let row = self.index_at_screen(Axis::Row, y)?;
        let column = self.index_at_screen(Axis::Column, x)?;
        Some(self.canonical_cell(CellCoord::new(row, column)))
    }

    fn index_at_screen(&mut self, axis: Axis, screen: f64) -> Option<u32> {
        if self.count(axis) == 0 || !screen.is_finite() || screen < 0.0 {
            return None;
        }
        let frozen_extent = self.frozen_extent(axis);
        let content = to_content(screen, frozen_extent, self.scroll.offset(axis));
        let store = self.store_mut(axis);
        let index = index_for_offset(store, content);
        // Past the last item's trailing edge there is no cell
        if content >= store.item(index).end() {
            return None;
        }
        Some(index)
    }

    // ------------------------------------------------------------------
    // Scrolling
    // ------------------------------------------------------------------

    pub fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_scrolling
    }

    /// Largest scroll offset on `axis`
    pub fn max_scroll(&self, axis: Axis) -> f64 {
        self.viewport.max_scroll(axis, self.total(axis))
    }

    fn clamped(&self, offsets: ScrollOffsets) -> ScrollOffsets {
        ScrollOffsets {
            scroll_top: self.viewport.clamp_scroll(
                Axis::Row,
                offsets.scroll_top,
                self.total(Axis::Row),
            ),
            scroll_left: self.viewport.clamp_scroll(
                Axis::Column,
                offsets.scroll_left,
                self.total(Axis::Column),
            ),
        }
    }

    fn clamp_scroll(&mut self) {
        let offsets = self.clamped(self.scroll.offsets());
        self.scroll.apply(offsets);
    }

    /// Set the scroll position programmatically (clamped). Does not touch
    /// `is_scrolling`; the container's resulting scroll event does that.
    pub fn set_scroll(&mut self, offsets: ScrollOffsets) -> ScrollOffsets {
        let offsets = self.clamped(offsets);
        self.scroll.apply(offsets);
        offsets
    }

    /// Move the scroll position by a delta (clamped)
    pub fn scroll_by(&mut self, delta_x: f64, delta_y: f64) -> ScrollOffsets {
        let current = self.scroll.offsets();
        self.set_scroll(ScrollOffsets {
            scroll_top: current.scroll_top + delta_y,
            scroll_left: current.scroll_left + delta_x,
        })
    }

    /// Handle a scroll event from the container.
    ///
    /// Marks the grid as scrolling and re-arms the settle timer. Returns
    /// `true` if the position changed.
    pub fn on_scroll(
        &mut self,
        offsets: ScrollOffsets,
        timers: &mut impl TimerScheduler,
    ) -> bool {
        let offsets = self.clamped(offsets);
        let moved = self.scroll.apply(offsets);
        self.scroll.is_scrolling = true;
        self.debounce.touch(timers);
        moved
    }

    /// Report a fired timer. Returns `true` if it ended a scroll burst.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.debounce.fire(id) {
            self.scroll.is_scrolling = false;
            log::trace!("scroll settled");
            true
        } else {
            false
        }
    }

    /// Queue a wheel delta. Returns `true` if the caller must request an
    /// animation frame; later deltas merge into the pending one.
    ///
    /// Wheel input counts as scrolling right away and re-arms the settle
    /// timer, even though the offsets only move when the frame runs.
    pub fn on_wheel(
        &mut self,
        delta_x: f64,
        delta_y: f64,
        timers: &mut impl TimerScheduler,
    ) -> bool {
        self.scroll.is_scrolling = true;
        self.debounce.touch(timers);
        self.wheel.push(delta_x, delta_y)
    }

    /// True while a deferred scroll-to or wheel delta waits for a frame
    pub fn needs_frame(&self) -> bool {
        self.pending_scroll.is_some() || self.wheel.is_pending()
    }

    /// Run the pending frame: apply the deferred scroll-to plan and the
    /// accumulated wheel delta. Returns the new offsets if the position moved.
    pub fn on_animation_frame(
        &mut self,
        timers: &mut impl TimerScheduler,
    ) -> Option<ScrollOffsets> {
        let mut target = self.pending_scroll.take();
        if let Some((dx, dy)) = self.wheel.take() {
            let base = target.unwrap_or_else(|| self.scroll.offsets());
            target = Some(ScrollOffsets {
                scroll_top: base.scroll_top + dy,
                scroll_left: base.scroll_left + dx,
            });
        }
        let target = target?;
        if self.on_scroll(target, timers) {
            Some(self.scroll.offsets())
        } else {
            None
        }
    }

    /// Scroll offsets bringing `cell` (or the merged block it belongs to)
    /// into view according to `align`.
    pub fn plan_scroll_to(&mut self, cell: CellCoord, align: Align) -> ScrollPlan {
        let bounds = self.merged.bounds_of(cell);
        let mut plan = ScrollPlan::default();

        for axis in Axis::ALL {
            let pane = AxisPane {
                scroll_offset: self.scroll.offset(axis),
                extent: self.viewport.extent(axis),
                frozen_count: self.frozen_count(axis),
                frozen_extent: self.frozen_extent(axis),
            };
            let (first, last) = bounds.span(axis);
            let Some(axis_scroll) =
                plan_axis_scroll(self.store_mut(axis), first, last, align, &pane)
            else {
                continue;
            };
            if axis_scroll.deferred {
                plan.timing = ApplyTiming::NextFrame;
            }
            match axis {
                Axis::Row => plan.scroll_top = Some(axis_scroll.offset),
                Axis::Column => plan.scroll_left = Some(axis_scroll.offset),
            }
        }
        plan
    }

    /// Plan and apply a scroll to `cell`.
    ///
    /// Near targets are applied at once and returned. Far targets are parked
    /// until the next [`on_animation_frame`](Self::on_animation_frame); a newer
    /// request replaces a parked one.
    pub fn request_scroll_to(&mut self, cell: CellCoord, align: Align) -> Option<ScrollOffsets> {
        let plan = self.plan_scroll_to(cell, align);
        if plan.is_noop() {
            return None;
        }
        let offsets = plan.resolve(self.scroll.offsets());
        match plan.timing {
            ApplyTiming::Immediate => {
                self.pending_scroll = None;
                Some(self.set_scroll(offsets))
            }
            ApplyTiming::NextFrame => {
                log::debug!("deferring scroll to {cell} until next frame");
                self.pending_scroll = Some(offsets);
                None
            }
        }
    }

    /// Scroll-to offsets waiting for the next frame
    pub fn pending_scroll(&self) -> Option<ScrollOffsets> {
        self.pending_scroll
    }

    // ------------------------------------------------------------------
    // Debugging
    // ------------------------------------------------------------------

    /// Capture ranges, totals and visible blocks for inspection
    pub fn snapshot(&mut self) -> GridSnapshot {
        let rows = self.visible_range(Axis::Row);
        let columns = self.visible_range(Axis::Column);
        let cells = self.visible_cells();
        GridSnapshot {
            rows,
            columns,
            scroll: self.scroll,
            total_width: self.total(Axis::Column),
            total_height: self.total(Axis::Row),
            frozen_width: self.frozen_extent(Axis::Column),
            frozen_height: self.frozen_extent(Axis::Row),
            merged_cells: self.merged.regions().to_vec(),
            cells,
        }
    }
}

fn sizes_with_overrides(overrides: &HashMap<u32, f64>, fallback: f64) -> impl Fn(u32) -> f64 {
    let overrides = overrides.clone();
    move |index| overrides.get(&index).copied().unwrap_or(fallback)
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
    use crate::scroll::ManualScheduler;

    fn grid(rows: u32, columns: u32) -> GridGeometry {
        GridGeometry::new(&GridOptions::new(rows, columns)).unwrap()
    }

    #[test]
    fn test_size_overrides_from_options() {
        let mut options = GridOptions::new(10, 10);
        options.row_heights.insert(1, 45.0);
        let mut grid = GridGeometry::new(&options).unwrap();
        assert_eq!(grid.offset(Axis::Row, 2), 65.0);
        assert_eq!(grid.size(Axis::Row, 1), 45.0);
    }

    #[test]
    fn test_invalid_options_rejected() {
        let options = GridOptions {
            scale: f64::NAN,
            ..GridOptions::new(1, 1)
        };
        assert!(GridGeometry::new(&options).is_err());
    }

    #[test]
    fn test_offset_to_cell_outside_content() {
        let mut g = grid(3, 3);
        assert_eq!(g.offset_to_cell(10.0, 10.0), Some(CellCoord::new(0, 0)));
        // 3 rows of 20px: y=60 is past the last row
        assert_eq!(g.offset_to_cell(10.0, 60.0), None);
        assert_eq!(g.offset_to_cell(-1.0, 10.0), None);
        assert_eq!(grid(0, 3).offset_to_cell(0.0, 0.0), None);
    }

    #[test]
    fn test_offset_to_cell_after_hidden_rows() {
        let mut g = grid(100, 3);
        g.set_row_height(|row| if (5..10).contains(&row) { 0.0 } else { 20.0 });
        // Rows 5..=10 share offset 100; only row 10 has height
        assert_eq!(g.offset_to_cell(10.0, 100.0), Some(CellCoord::new(10, 0)));
        assert_eq!(g.offset_to_cell(10.0, 119.0), Some(CellCoord::new(10, 0)));
        assert_eq!(g.offset_to_cell(10.0, 99.0), Some(CellCoord::new(4, 0)));
        // Warm cache gives the same answer
        assert_eq!(g.offset_to_cell(10.0, 100.0), Some(CellCoord::new(10, 0)));
    }

    #[test]
    fn test_wheel_marks_scrolling_before_frame() {
        let mut g = grid(100, 10);
        let mut timers = ManualScheduler::new();
        assert!(g.on_wheel(0.0, 100.0, &mut timers));
        assert!(g.is_scrolling());
        assert!(g.needs_frame());
        assert_eq!(g.scroll_state().scroll_top, 0.0);

        // No frame ran: the burst still settles after the debounce delay
        for id in timers.advance_by(150.0) {
            g.on_timer(id);
        }
        assert!(!g.is_scrolling());
        assert!(g.needs_frame());
    }

    #[test]
    fn test_wheel_rearms_settle_timer() {
        let mut g = grid(100, 10);
        let mut timers = ManualScheduler::new();
        g.on_wheel(0.0, 10.0, &mut timers);
        timers.advance_by(100.0);
        g.on_wheel(0.0, 10.0, &mut timers);
        // First timer was replaced; 100ms after the second input nothing settles
        for id in timers.advance_by(100.0) {
            assert!(!g.on_timer(id));
        }
        assert!(g.is_scrolling());
        assert_eq!(timers.pending(), 1);
    }

    #[test]
    fn test_estimated_size_changes_unmeasured_total() {
        let mut g = grid(100, 10);
        assert_eq!(g.total(Axis::Row), 2_000.0);
        g.set_estimated_size(Axis::Row, 30.0);
        assert_eq!(g.total(Axis::Row), 3_000.0);
        // Measuring row 0 (20px from the options) makes that part exact
        g.offset(Axis::Row, 1);
        assert_eq!(g.total(Axis::Row), 20.0 + 20.0 + 98.0 * 30.0);
    }

    #[test]
    fn test_scale_change_clamps_scroll() {
        let mut grid = grid(100, 10);
        let mut timers = ManualScheduler::new();
        grid.on_scroll(
            ScrollOffsets {
                scroll_top: 1_400.0,
                scroll_left: 0.0,
            },
            &mut timers,
        );
        assert_eq!(grid.scroll_state().scroll_top, 1_400.0);
        grid.set_scale(0.5);
        // 100 rows * 10px = 1000px of content in a 600px container
        assert_eq!(grid.scroll_state().scroll_top, 400.0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut grid = grid(5, 5);
        grid.set_merged_regions(&[AreaBounds::new(0, 0, 1, 1)]);
        let snapshot = grid.snapshot();
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["totalHeight"], 100.0);
        assert_eq!(json["mergedCells"][0]["bottom"], 1);
        // 25 cells, four of which collapse into one merged block
        assert_eq!(snapshot.cells.len(), 22);
    }
}
