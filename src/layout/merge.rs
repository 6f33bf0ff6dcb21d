//! Merged-cell lookup.
//!
//! A merged region renders and hit-tests as one cell anchored at its top-left
//! corner. The index maps every constituent cell to its region; it is rebuilt
//! wholesale whenever the region list changes.

use std::collections::{HashMap, HashSet};

use crate::types::{AreaBounds, CellCoord};

/// Lookup from cell to owning merged region
#[derive(Debug, Clone, Default)]
pub struct MergedIndex {
    regions: Vec<AreaBounds>,
    /// (row, col) -> position in `regions`
    cells: HashMap<(u32, u32), usize>,
}

impl MergedIndex {
    /// Build the index from a region list.
    ///
    /// Single-cell regions carry no merge and are skipped. Regions must not
    /// overlap; the first registered region wins and any later region touching
    /// an already indexed cell is rejected as a whole.
    pub fn build(regions: &[AreaBounds]) -> Self {
        let mut index = Self::default();

        for region in regions.iter().map(|r| r.normalized()) {
            if region.is_single_cell() {
                continue;
            }
            let overlaps = index
                .regions
                .iter()
                .any(|existing| existing.intersects(region));
            if overlaps {
                log::warn!("rejecting merged region {region:?}: overlaps an earlier region");
                continue;
            }

            let slot = index.regions.len();
            for r in region.top..=region.bottom {
                for c in region.left..=region.right {
                    index.cells.insert((r, c), slot);
                }
            }
            index.regions.push(region);
        }

        log::debug!(
            "built merged index: {} region(s), {} cell(s)",
            index.regions.len(),
            index.cells.len()
        );
        index
    }

    /// Accepted regions in registration order
    pub fn regions(&self) -> &[AreaBounds] {
        &self.regions
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Owning region of `cell`, if it is part of a merge
    pub fn region_of(&self, cell: CellCoord) -> Option<AreaBounds> {
        self.cells
            .get(&(cell.row, cell.column))
            .and_then(|&slot| self.regions.get(slot))
            .copied()
    }

    pub fn is_merged(&self, cell: CellCoord) -> bool {
        self.cells.contains_key(&(cell.row, cell.column))
    }

    /// Bounds of the block `cell` renders as: its merged region, or itself
    pub fn bounds_of(&self, cell: CellCoord) -> AreaBounds {
        self.region_of(cell)
            .unwrap_or_else(|| AreaBounds::cell(cell))
    }

    /// Anchor (top-left) cell of the block containing `cell`
    pub fn canonical_of(&self, cell: CellCoord) -> CellCoord {
        self.region_of(cell).map_or(cell, AreaBounds::anchor)
    }
}

/// Anchors already drawn during one render pass.
///
/// Every constituent cell of a merged region is reached by the row/column
/// walk; only the first visit should draw it. Create one per pass and drop it
/// afterwards.
#[derive(Debug, Default)]
pub struct RenderedMerges {
    anchors: HashSet<CellCoord>,
}

impl RenderedMerges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `anchor` as drawn. Returns `false` if it already was.
    pub fn claim(&mut self, anchor: CellCoord) -> bool {
        self.anchors.insert(anchor)
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
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
    fn test_merged_cells() {
        // Merge A1:B2 (rows 0-1, cols 0-1)
        let index = MergedIndex::build(&[AreaBounds::new(0, 0, 1, 1)]);

        for (r, c) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            let cell = CellCoord::new(r, c);
            assert!(index.is_merged(cell));
            assert_eq!(index.canonical_of(cell), CellCoord::new(0, 0));
            assert_eq!(index.bounds_of(cell), AreaBounds::new(0, 0, 1, 1));
        }
        assert!(!index.is_merged(CellCoord::new(2, 0)));
    }

    #[test]
    fn test_unmerged_cell_is_its_own_block() {
        let index = MergedIndex::build(&[]);
        let cell = CellCoord::new(7, 3);
        assert_eq!(index.bounds_of(cell), AreaBounds::new(7, 3, 7, 3));
        assert_eq!(index.canonical_of(cell), cell);
    }

    #[test]
    fn test_single_cell_region_is_ignored() {
        let index = MergedIndex::build(&[AreaBounds::new(4, 4, 4, 4)]);
        assert!(index.is_empty());
        assert!(!index.is_merged(CellCoord::new(4, 4)));
    }

    #[test]
    fn test_overlapping_region_rejected() {
        let index = MergedIndex::build(&[
            AreaBounds::new(0, 0, 2, 2),
            AreaBounds::new(2, 2, 4, 4),
            AreaBounds::new(5, 0, 6, 1),
        ]);
        assert_eq!(index.regions().len(), 2);
        assert_eq!(index.canonical_of(CellCoord::new(2, 2)), CellCoord::new(0, 0));
        assert!(!index.is_merged(CellCoord::new(3, 3)));
        assert_eq!(index.canonical_of(CellCoord::new(6, 1)), CellCoord::new(5, 0));
    }

    #[test]
    fn test_reversed_region_is_normalized() {
        let index = MergedIndex::build(&[AreaBounds {
            top: 3,
            left: 3,
            bottom: 1,
            right: 1,
        }]);
        assert_eq!(index.canonical_of(CellCoord::new(2, 2)), CellCoord::new(1, 1));
    }

    #[test]
    fn test_rendered_merges_claims_once() {
        let mut rendered = RenderedMerges::new();
        assert!(rendered.claim(CellCoord::new(0, 0)));
        assert!(!rendered.claim(CellCoord::new(0, 0)));
        assert_eq!(rendered.len(), 1);
    }
}
