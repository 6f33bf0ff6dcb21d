//! Grid configuration.
//!
//! Options are plain serde data so they can come from JSON files (CLI), JS
//! objects (WASM) or be built in Rust.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cell_ref::parse_range_list;
use crate::error::{GridError, Result};
use crate::layout::{
    DEFAULT_COL_WIDTH, DEFAULT_CONTAINER_HEIGHT, DEFAULT_CONTAINER_WIDTH, DEFAULT_ROW_HEIGHT,
};
use crate::scroll::DEFAULT_SCROLL_DEBOUNCE_MS;
use crate::types::AreaBounds;

/// Configuration of a grid instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridOptions {
    pub row_count: u32,
    pub column_count: u32,
    /// Height assumed for rows that have not been measured yet
    pub estimated_row_height: f64,
    /// Width assumed for columns that have not been measured yet
    pub estimated_column_width: f64,
    /// Number of leading rows pinned to the top
    pub frozen_rows: u32,
    /// Number of leading columns pinned to the left
    pub frozen_columns: u32,
    pub overscan_row_count: u32,
    pub overscan_column_count: u32,
    /// Uniform zoom factor applied to every size and offset
    pub scale: f64,
    /// Delay after the last scroll input before the grid counts as idle
    pub scroll_debounce_ms: f64,
    pub container_width: f64,
    pub container_height: f64,
    /// Merged regions as explicit bounds
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub merged_cells: Vec<AreaBounds>,
    /// Merged regions as A1 ranges, e.g. `"B2:C4"`; an entry may hold
    /// several space-separated ranges (`"B2:C4 E1:F1"`)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub merged_ranges: Vec<String>,
    /// Sparse row height overrides used by the default size callback
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub row_heights: HashMap<u32, f64>,
    /// Sparse column width overrides used by the default size callback
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub column_widths: HashMap<u32, f64>,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            row_count: 0,
            column_count: 0,
            estimated_row_height: DEFAULT_ROW_HEIGHT,
            estimated_column_width: DEFAULT_COL_WIDTH,
            frozen_rows: 0,
            frozen_columns: 0,
            overscan_row_count: 1,
            overscan_column_count: 1,
            scale: 1.0,
            scroll_debounce_ms: DEFAULT_SCROLL_DEBOUNCE_MS,
            container_width: DEFAULT_CONTAINER_WIDTH,
            container_height: DEFAULT_CONTAINER_HEIGHT,
            merged_cells: Vec::new(),
            merged_ranges: Vec::new(),
            row_heights: HashMap::new(),
            column_widths: HashMap::new(),
        }
    }
}

impl GridOptions {
    /// Options for an `rows` x `columns` grid with default sizes
    pub fn new(row_count: u32, column_count: u32) -> Self {
        Self {
            row_count,
            column_count,
            ..Self::default()
        }
    }

    /// Parse and validate options from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Read, parse and validate options from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values the geometry engine cannot work with
    pub fn validate(&self) -> Result<()> {
        positive("scale", self.scale)?;
        non_negative("estimatedRowHeight", self.estimated_row_height)?;
        non_negative("estimatedColumnWidth", self.estimated_column_width)?;
        non_negative("scrollDebounceMs", self.scroll_debounce_ms)?;
        non_negative("containerWidth", self.container_width)?;
        non_negative("containerHeight", self.container_height)?;
        for (name, sizes) in [
            ("rowHeights", &self.row_heights),
            ("columnWidths", &self.column_widths),
        ] {
            if let Some((index, size)) = sizes.iter().find(|(_, s)| !s.is_finite() || **s < 0.0)
            {
                return Err(GridError::invalid_option(
                    name,
                    format!("size {size} at index {index} must be a finite, non-negative number"),
                ));
            }
        }
        for ranges in &self.merged_ranges {
            parse_range_list(ranges)?;
        }
        Ok(())
    }

    /// All merged regions: explicit bounds first, then parsed A1 ranges.
    /// Unparsable ranges are skipped (`validate` reports them).
    pub fn merged_regions(&self) -> Vec<AreaBounds> {
        self.merged_cells
            .iter()
            .copied()
            .chain(
                self.merged_ranges
                    .iter()
                    .flat_map(|ranges| parse_range_list(ranges).unwrap_or_default()),
            )
            .collect()
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GridError::invalid_option(
            name,
            format!("{value} must be a finite number greater than 0"),
        ))
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GridError::invalid_option(
            name,
            format!("{value} must be a finite, non-negative number"),
        ))
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
    fn test_defaults_from_empty_json() {
        let options = GridOptions::from_json("{}").unwrap();
        assert_eq!(options, GridOptions::default());
        assert_eq!(options.scroll_debounce_ms, 150.0);
        assert_eq!(options.estimated_row_height, 20.0);
    }

    #[test]
    fn test_parse_camel_case() {
        let options = GridOptions::from_json(
            r#"{
                "rowCount": 1000,
                "columnCount": 26,
                "frozenRows": 1,
                "overscanRowCount": 4,
                "rowHeights": {"0": 32},
                "mergedCells": [{"top": 1, "left": 1, "bottom": 2, "right": 3}],
                "mergedRanges": ["F10:G12"]
            }"#,
        )
        .unwrap();
        assert_eq!(options.row_count, 1_000);
        assert_eq!(options.frozen_rows, 1);
        assert_eq!(options.overscan_row_count, 4);
        assert_eq!(options.row_heights.get(&0), Some(&32.0));
        assert_eq!(
            options.merged_regions(),
            vec![AreaBounds::new(1, 1, 2, 3), AreaBounds::new(9, 5, 11, 6)]
        );
    }

    #[test]
    fn test_invalid_scale_rejected() {
        let err = GridOptions::from_json(r#"{"scale": 0}"#).unwrap_err();
        assert!(matches!(err, GridError::InvalidOption { name: "scale", .. }));
    }

    #[test]
    fn test_negative_override_rejected() {
        let mut options = GridOptions::new(10, 10);
        options.column_widths.insert(3, -1.0);
        assert!(matches!(
            options.validate(),
            Err(GridError::InvalidOption { name: "columnWidths", .. })
        ));
    }

    #[test]
    fn test_bad_merged_range_rejected() {
        let err = GridOptions::from_json(r#"{"mergedRanges": ["A1:??"]}"#).unwrap_err();
        assert!(matches!(err, GridError::CellRef(_)));
    }

    #[test]
    fn test_space_separated_merged_ranges() {
        let options =
            GridOptions::from_json(r#"{"mergedRanges": ["A1:B2  D4:E5", "G7"]}"#).unwrap();
        assert_eq!(
            options.merged_regions(),
            vec![
                AreaBounds::new(0, 0, 1, 1),
                AreaBounds::new(3, 3, 4, 4),
                AreaBounds::new(6, 6, 6, 6),
            ]
        );

        let err = GridOptions::from_json(r#"{"mergedRanges": ["A1:B2 nope"]}"#).unwrap_err();
        assert!(matches!(err, GridError::CellRef(ref part) if part == "nope"));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            GridOptions::from_path("does/not/exist.json"),
            Err(GridError::Io(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            GridOptions::from_json("{rowCount: }"),
            Err(GridError::Json(_))
        ));
    }
}
