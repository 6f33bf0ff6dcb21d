//! Utilities for parsing A1-style cell references and ranges.
//!
//! Merged ranges in configuration files may be written as `"B2:C4"` instead of
//! explicit `{top, left, bottom, right}` bounds.

use crate::error::{GridError, Result};
use crate::types::{AreaBounds, CellCoord};

/// Parse a cell reference like "A1" into a 0-indexed cell. `$` markers are ignored.
pub fn parse_cell_ref(cell_ref: &str) -> Option<CellCoord> {
    let mut col: u32 = 0;
    let mut row: u32 = 0;
    let mut saw_col = false;
    let mut saw_row = false;

    for ch in cell_ref.trim().chars() {
        if ch == '$' {
            continue;
        }
        if ch.is_ascii_alphabetic() {
            // Letters after digits ("1A") are not a reference
            if saw_row {
                return None;
            }
            let upper = u32::from(ch.to_ascii_uppercase()) - u32::from('A') + 1;
            col = col.checked_mul(26)?.checked_add(upper)?;
            saw_col = true;
        } else if let Some(digit) = ch.to_digit(10) {
            row = row.checked_mul(10)?.checked_add(digit)?;
            saw_row = true;
        } else {
            return None;
        }
    }

    if !saw_col || !saw_row || row == 0 {
        return None;
    }

    Some(CellCoord::new(row - 1, col - 1))
}

/// Parse a cell range like "A1:B10" or a single "A1" into inclusive bounds.
pub fn parse_cell_range(range: &str) -> Option<AreaBounds> {
    if let Some((start, end)) = range.split_once(':') {
        let start = parse_cell_ref(start)?;
        let end = parse_cell_ref(end)?;
        Some(AreaBounds::new(start.row, start.column, end.row, end.column))
    } else {
        parse_cell_ref(range).map(AreaBounds::cell)
    }
}

/// Parse a space-separated list of ranges ("A1:B2 D4:E5"), failing on the first bad entry.
pub fn parse_range_list(ranges: &str) -> Result<Vec<AreaBounds>> {
    ranges
        .split_whitespace()
        .map(|part| parse_cell_range(part).ok_or_else(|| GridError::CellRef(part.to_string())))
        .collect()
}

/// Convert a 0-based column index to column letters (A, B, ..., Z, AA, AB, ...)
pub fn col_to_letter(col: u32) -> String {
    let mut result = String::new();
    let mut n = u64::from(col) + 1;
    while n > 0 {
        n -= 1;
        let offset = u8::try_from(n % 26).unwrap_or(0);
        result.insert(0, char::from(b'A' + offset));
        n /= 26;
    }
    result
}
