//! Per-axis cache of measured item sizes and cumulative offsets.
//!
//! Sizes are measured lazily: an index is only asked of the size callback when
//! something needs its offset. Measurement always proceeds forward from the
//! last measured index, so the cached prefix `0..=last_measured_index` is
//! contiguous and `offset(i + 1) == offset(i) + size(i)` holds across it.
//! Indices past the prefix contribute `estimated_item_size` to totals.
//!
//! Values are stored unscaled; every public read multiplies by the scale
//! factor, so a zoom change never needs an invalidation.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Callback producing the unscaled size of the item at an index.
pub type SizeFn = Box<dyn Fn(u32) -> f64>;

/// Measured geometry of one row or column
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemMetadata {
    /// Distance from the axis origin to the item's leading edge
    pub offset: f64,
    pub size: f64,
}

impl ItemMetadata {
    /// Trailing edge
    pub fn end(&self) -> f64 {
        self.offset + self.size
    }

    fn scaled(self, scale: f64) -> Self {
        Self {
            offset: self.offset * scale,
            size: self.size * scale,
        }
    }
}

/// Size metadata for one axis of a grid
pub struct AxisStore {
    count: u32,
    item_size: SizeFn,
    estimated_item_size: f64,
    scale: f64,
    /// Unscaled metadata for the contiguous measured prefix
    items: Vec<ItemMetadata>,
    /// Measured indices whose size must be re-read before being trusted
    recalc: BTreeSet<u32>,
}

impl fmt::Debug for AxisStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisStore")
            .field("count", &self.count)
            .field("estimated_item_size", &self.estimated_item_size)
            .field("scale", &self.scale)
            .field("last_measured_index", &self.last_measured_index())
            .field("recalc", &self.recalc)
            .finish_non_exhaustive()
    }
}

impl AxisStore {
    /// Create a store whose items all measure `estimated_item_size` until a
    /// size callback is installed.
    pub fn new(count: u32, estimated_item_size: f64) -> Self {
        let estimated_item_size = sanitize_estimate(estimated_item_size);
        Self {
            count,
            item_size: Box::new(move |_| estimated_item_size),
            estimated_item_size,
            scale: 1.0,
            items: Vec::new(),
            recalc: BTreeSet::new(),
        }
    }

    /// Create a store measuring items with `item_size`
    pub fn with_item_size(
        count: u32,
        estimated_item_size: f64,
        item_size: impl Fn(u32) -> f64 + 'static,
    ) -> Self {
        let mut store = Self::new(count, estimated_item_size);
        store.item_size = Box::new(item_size);
        store
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Change the number of items. Shrinking drops measurements past the new end.
    pub fn set_count(&mut self, count: u32) {
        if count < self.count {
            self.items.truncate(count as usize);
            self.recalc.retain(|&i| i < count);
        }
        self.count = count;
    }

    /// Replace the size callback. Everything measured so far is discarded.
    pub fn set_item_size(&mut self, item_size: impl Fn(u32) -> f64 + 'static) {
        self.item_size = Box::new(item_size);
        self.invalidate(0);
    }

    /// Estimated (scaled) size used for unmeasured items
    pub fn estimated_item_size(&self) -> f64 {
        self.estimated_item_size * self.scale
    }

    pub fn set_estimated_item_size(&mut self, size: f64) {
        self.estimated_item_size = sanitize_estimate(size);
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Set the uniform scale factor. Non-finite or non-positive values are ignored.
    pub fn set_scale(&mut self, scale: f64) {
        if scale.is_finite() && scale > 0.0 {
            self.scale = scale;
        } else {
            log::warn!("ignoring invalid scale factor {scale}");
        }
    }

    /// Highest index whose offset is known contiguously from 0
    pub fn last_measured_index(&self) -> Option<u32> {
        self.items
            .len()
            .checked_sub(1)
            .and_then(|i| u32::try_from(i).ok())
    }

    /// True if `index` lies in the measured prefix and is not marked stale
    pub fn is_measured(&self, index: u32) -> bool {
        (index as usize) < self.items.len() && !self.recalc.contains(&index)
    }

    /// Size of the item at `index`, or the estimated size if it is
    /// unmeasured or stale.
    pub fn size(&self, index: u32) -> f64 {
        match self.items.get(index as usize) {
            Some(item) if !self.recalc.contains(&index) => item.size * self.scale,
            _ => self.estimated_item_size(),
        }
    }

    /// Leading edge of the item at `index`, measuring forward as needed.
    pub fn offset(&mut self, index: u32) -> f64 {
        self.item(index).offset
    }

    /// Scaled metadata for `index`, measuring forward as needed.
    ///
    /// `index` is clamped to `count - 1`; an empty axis yields zeroed metadata.
    pub fn item(&mut self, index: u32) -> ItemMetadata {
        let Some(last) = self.count.checked_sub(1) else {
            return ItemMetadata::default();
        };
        let index = index.min(last);
        self.refresh_stale();
        self.measure_through(index);
        self.items
            .get(index as usize)
            .copied()
            .unwrap_or_default()
            .scaled(self.scale)
    }

    /// Estimated total extent of `count` items: exact through the measured
    /// prefix plus `estimated_item_size` for every item after it.
    pub fn estimated_total(&self, count: u32) -> f64 {
        let measured = self.items.len().min(count as usize);
        let measured_end = measured
            .checked_sub(1)
            .and_then(|i| self.items.get(i))
            .map_or(0.0, ItemMetadata::end);
        let unmeasured = count as usize - measured;
        (measured_end + self.estimated_item_size * unmeasured as f64) * self.scale
    }

    /// Estimated total extent of all items on this axis
    pub fn total(&self) -> f64 {
        self.estimated_total(self.count)
    }

    /// Forget everything measured from `from_index` onward and clear all stale marks.
    pub fn invalidate(&mut self, from_index: u32) {
        let before = self.last_measured_index();
        self.items.truncate(from_index as usize);
        self.recalc.clear();
        log::debug!(
            "invalidated axis from {from_index}: last measured {before:?} -> {:?}",
            self.last_measured_index()
        );
    }

    /// Mark individual measured items stale without discarding the rest of
    /// the prefix. Their sizes are re-read on the next measured query and
    /// the offsets after them shift by the size difference.
    pub fn mark_recalc(&mut self, indices: &[u32]) {
        let measured = self.items.len();
        self.recalc
            .extend(indices.iter().copied().filter(|&i| (i as usize) < measured));
        log::debug!("marked {} item(s) stale", self.recalc.len());
    }

    /// Indices currently marked stale
    pub fn stale_indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.recalc.iter().copied()
    }

    fn measure(&self, index: u32) -> f64 {
        let size = (self.item_size)(index);
        if size.is_finite() {
            size.max(0.0)
        } else {
            self.estimated_item_size
        }
    }

    fn measure_through(&mut self, index: u32) {
        let start = self.items.len();
        if (index as usize) < start {
            return;
        }
        let mut offset = self.items.last().map_or(0.0, ItemMetadata::end);
        self.items.reserve(index as usize + 1 - start);
        for i in start..=index as usize {
            let Ok(i) = u32::try_from(i) else {
                break;
            };
            let size = self.measure(i);
            self.items.push(ItemMetadata { offset, size });
            offset += size;
        }
        log::trace!("measured items {start}..={index}");
    }

    fn refresh_stale(&mut self) {
        if self.recalc.is_empty() {
            return;
        }
        let stale = std::mem::take(&mut self.recalc);
        for index in stale {
            let size = self.measure(index);
            let Some(item) = self.items.get_mut(index as usize) else {
                continue;
            };
            let delta = size - item.size;
            item.size = size;
            if delta != 0.0 {
                for later in self.items.iter_mut().skip(index as usize + 1) {
                    later.offset += delta;
                }
            }
        }
    }
}

fn sanitize_estimate(size: f64) -> f64 {
    if size.is_finite() && size >= 0.0 {
        size
    } else {
        log::warn!("invalid estimated item size {size}, using 0");
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
    use std::cell::Cell;
    use std::rc::Rc;

    fn alternating(count: u32) -> AxisStore {
        AxisStore::with_item_size(count, 25.0, |i| if i % 2 == 0 { 20.0 } else { 30.0 })
    }

    #[test]
    fn test_offsets_are_cumulative() {
        let mut store = alternating(100);
        assert_eq!(store.offset(0), 0.0);
        assert_eq!(store.offset(1), 20.0);
        assert_eq!(store.offset(2), 50.0);
        assert_eq!(store.offset(10), 250.0);
        for i in 0..50 {
            let next = store.offset(i + 1);
            assert_eq!(next, store.offset(i) + store.size(i));
        }
    }

    #[test]
    fn test_measurement_is_lazy_and_memoized() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        let mut store = AxisStore::with_item_size(1_000, 20.0, move |_| {
            counter.set(counter.get() + 1);
            20.0
        });
        assert_eq!(calls.get(), 0);
        store.offset(9);
        assert_eq!(calls.get(), 10);
        store.offset(5);
        store.offset(9);
        assert_eq!(calls.get(), 10, "measured prefix must not be re-read");
        assert_eq!(store.last_measured_index(), Some(9));
    }

    #[test]
    fn test_size_falls_back_to_estimate() {
        let mut store = alternating(10);
        assert_eq!(store.size(3), 25.0);
        store.offset(3);
        assert_eq!(store.size(3), 30.0);
    }

    #[test]
    fn test_estimated_total() {
        let mut store = alternating(10);
        assert_eq!(store.total(), 250.0);
        store.offset(1);
        // 20 + 30 measured, 8 estimated
        assert_eq!(store.total(), 50.0 + 8.0 * 25.0);
        store.offset(9);
        assert_eq!(store.total(), 250.0);
        // Totals for a prefix of the measured items are exact
        assert_eq!(store.estimated_total(2), 50.0);
    }

    #[test]
    fn test_invalidate_truncates_prefix() {
        let mut store = alternating(100);
        store.offset(20);
        store.invalidate(10);
        assert_eq!(store.last_measured_index(), Some(9));
        store.invalidate(0);
        assert_eq!(store.last_measured_index(), None);
    }

    #[test]
    fn test_mark_recalc_shifts_later_offsets() {
        let sizes = Rc::new(Cell::new(20.0));
        let source = Rc::clone(&sizes);
        let mut store =
            AxisStore::with_item_size(10, 20.0, move |i| if i == 3 { source.get() } else { 20.0 });
        assert_eq!(store.offset(9), 180.0);
        sizes.set(50.0);
        store.mark_recalc(&[3]);
        assert!(!store.is_measured(3));
        assert_eq!(store.last_measured_index(), Some(9));
        assert_eq!(store.offset(3), 60.0);
        assert_eq!(store.offset(4), 110.0);
        assert_eq!(store.offset(9), 210.0);
        assert!(store.is_measured(3));
    }

    #[test]
    fn test_scale_applies_to_reads() {
        let mut store = alternating(10);
        store.set_scale(2.0);
        assert_eq!(store.offset(2), 100.0);
        assert_eq!(store.size(1), 60.0);
        assert_eq!(store.estimated_item_size(), 50.0);
        store.set_scale(-1.0);
        assert_eq!(store.scale(), 2.0);
    }

    #[test]
    fn test_bad_sizes_are_sanitized() {
        let mut store = AxisStore::with_item_size(3, 10.0, |i| match i {
            0 => f64::NAN,
            1 => -5.0,
            _ => 7.0,
        });
        assert_eq!(store.item(0).size, 10.0);
        assert_eq!(store.item(1).size, 0.0);
        assert_eq!(store.offset(2), 10.0);
    }

    #[test]
    fn test_empty_axis() {
        let mut store = AxisStore::new(0, 20.0);
        assert_eq!(store.item(5), ItemMetadata::default());
        assert_eq!(store.total(), 0.0);
    }

    #[test]
    fn test_shrinking_count_drops_measurements() {
        let mut store = alternating(100);
        store.offset(50);
        store.set_count(10);
        assert_eq!(store.last_measured_index(), Some(9));
        // Out-of-range index clamps to the last item
        assert_eq!(store.offset(99), store.offset(9));
    }
}
