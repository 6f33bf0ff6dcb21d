//! Offset <-> index resolution along one axis.

use super::AxisStore;

/// Find the index whose `[offset, offset + size)` interval contains `offset`.
///
/// Offsets inside the measured prefix are binary searched. Offsets past it are
/// found by an exponential probe that measures forward as it goes, so the
/// result is the same index an exact linear scan would produce. Negative or
/// non-finite offsets clamp to 0; offsets past the end clamp to the last index.
pub fn index_for_offset(store: &mut AxisStore, offset: f64) -> u32 {
    if store.count() == 0 {
        return 0;
    }
    let offset = clamp_offset(offset);

    match store.last_measured_index() {
        Some(last) if store.item(last).offset > offset => binary_search(store, 0, last, offset),
        last => exponential_search(store, last.unwrap_or(0), offset),
    }
}

/// Walk forward from `start_index` until the accumulated extent reaches
/// `scroll_offset + container_extent`, returning the last index that is at
/// least partly visible.
pub fn stop_index_for_start(
    store: &mut AxisStore,
    start_index: u32,
    scroll_offset: f64,
    container_extent: f64,
) -> u32 {
    let Some(last) = store.count().checked_sub(1) else {
        return 0;
    };
    let start_index = start_index.min(last);
    let max_offset = clamp_offset(scroll_offset) + clamp_offset(container_extent);

    let mut offset = store.item(start_index).end();
    let mut stop_index = start_index;
    while stop_index < last && offset < max_offset {
        stop_index += 1;
        offset += store.item(stop_index).size;
    }
    stop_index
}

/// Largest index in `[low, high]` whose leading edge is `<= offset`.
fn binary_search(store: &mut AxisStore, low: u32, high: u32, offset: f64) -> u32 {
    let (mut low, mut high) = (low, high);
    while low < high {
        let mid = low + (high - low).div_ceil(2);
        if store.item(mid).offset <= offset {
            low = mid;
        } else {
            high = mid - 1;
        }
    }
    low
}

fn exponential_search(store: &mut AxisStore, start: u32, offset: f64) -> u32 {
    let count = store.count();
    let mut low = start;
    let mut index = start;
    let mut interval: u32 = 1;

    // Stop at the first leading edge strictly past `offset`; zero-size runs
    // share an edge with the next visible item.
    while index < count && store.item(index).offset <= offset {
        low = index;
        index = index.saturating_add(interval);
        interval = interval.saturating_mul(2);
    }

    binary_search(store, low, index.min(count - 1), offset)
}

fn clamp_offset(offset: f64) -> f64 {
    if offset.is_finite() {
        offset.max(0.0)
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

    fn uniform(count: u32, size: f64) -> AxisStore {
        AxisStore::with_item_size(count, size, move |_| size)
    }

    #[test]
    fn test_index_for_offset_uniform() {
        let mut store = uniform(100, 20.0);
        assert_eq!(index_for_offset(&mut store, 0.0), 0);
        assert_eq!(index_for_offset(&mut store, 10.0), 0);
        assert_eq!(index_for_offset(&mut store, 20.0), 1);
        assert_eq!(index_for_offset(&mut store, 50.0), 2);
        assert_eq!(index_for_offset(&mut store, 1_999.0), 99);
        assert_eq!(index_for_offset(&mut store, 50_000.0), 99);
    }

    #[test]
    fn test_index_for_offset_uses_measured_prefix() {
        let mut store = uniform(100, 20.0);
        store.offset(80);
        assert_eq!(index_for_offset(&mut store, 410.0), 20);
        assert_eq!(store.last_measured_index(), Some(80));
    }

    #[test]
    fn test_index_for_offset_skips_zero_sized() {
        // Index 2 is hidden: it shares its offset with index 3
        let mut store =
            AxisStore::with_item_size(10, 20.0, |i| if i == 2 { 0.0 } else { 20.0 });
        assert_eq!(index_for_offset(&mut store, 40.0), 3);
        assert_eq!(index_for_offset(&mut store, 39.0), 1);
    }

    fn with_hidden_run() -> AxisStore {
        // Rows 5..10 are hidden, so rows 5..=10 all start at 100
        AxisStore::with_item_size(100, 20.0, |i| if (5..10).contains(&i) { 0.0 } else { 20.0 })
    }

    #[test]
    fn test_index_for_offset_hidden_run_past_prefix() {
        let mut store = with_hidden_run();
        assert_eq!(index_for_offset(&mut store, 100.0), 10);
        assert_eq!(index_for_offset(&mut store, 119.0), 10);
        assert_eq!(index_for_offset(&mut store, 99.0), 4);
        assert_eq!(index_for_offset(&mut store, 120.0), 11);
    }

    #[test]
    fn test_index_for_offset_prefix_ends_inside_hidden_run() {
        let mut store = with_hidden_run();
        store.offset(6);
        assert_eq!(store.last_measured_index(), Some(6));
        assert_eq!(index_for_offset(&mut store, 100.0), 10);

        // Same answer once the whole run is measured
        store.offset(30);
        assert_eq!(index_for_offset(&mut store, 100.0), 10);
        assert_eq!(index_for_offset(&mut store, 99.0), 4);
    }

    #[test]
    fn test_index_for_offset_clamps_bad_input() {
        let mut store = uniform(10, 20.0);
        assert_eq!(index_for_offset(&mut store, -50.0), 0);
        assert_eq!(index_for_offset(&mut store, f64::NAN), 0);
        assert_eq!(index_for_offset(&mut store, f64::INFINITY), 0);
    }

    #[test]
    fn test_empty_axis_returns_zero() {
        let mut store = uniform(0, 20.0);
        assert_eq!(index_for_offset(&mut store, 100.0), 0);
        assert_eq!(stop_index_for_start(&mut store, 0, 0.0, 600.0), 0);
    }

    #[test]
    fn test_stop_index_includes_partial_cell() {
        let mut store = uniform(100, 20.0);
        // 600px shows rows 0..=29 exactly
        assert_eq!(stop_index_for_start(&mut store, 0, 0.0, 600.0), 29);
        // Shift by half a row: row 30 is partly visible
        assert_eq!(stop_index_for_start(&mut store, 0, 10.0, 600.0), 30);
    }

    #[test]
    fn test_stop_index_clamps_to_count() {
        let mut store = uniform(5, 20.0);
        assert_eq!(stop_index_for_start(&mut store, 0, 0.0, 10_000.0), 4);
        assert_eq!(stop_index_for_start(&mut store, 42, 0.0, 10.0), 4);
    }
}
