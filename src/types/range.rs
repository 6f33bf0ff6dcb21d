use serde::{Deserialize, Serialize};

/// Index window along one axis.
///
/// `start..=stop` is the overscanned window to render; `precise_start..=precise_stop`
/// is the window actually intersecting the viewport. For an axis with no items
/// every field is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisRange {
    pub start: u32,
    pub stop: u32,
    pub precise_start: u32,
    pub precise_stop: u32,
}

impl AxisRange {
    /// Number of indices in the overscanned window
    pub fn count(&self) -> u32 {
        self.stop.saturating_sub(self.start).saturating_add(1)
    }

    pub fn contains(&self, index: u32) -> bool {
        (self.start..=self.stop).contains(&index)
    }
}

/// Visible window of the scrollable region, both axes (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRange {
    pub row_start: u32,
    pub row_stop: u32,
    pub column_start: u32,
    pub column_stop: u32,
}

impl GridRange {
    pub fn from_axes(rows: AxisRange, columns: AxisRange) -> Self {
        Self {
            row_start: rows.start,
            row_stop: rows.stop,
            column_start: columns.start,
            column_stop: columns.stop,
        }
    }
}
