use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// One of the two grid dimensions. Rows and columns are measured,
/// resolved and scrolled by the same code, parameterised by `Axis`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    /// Vertical axis: row heights, `scroll_top`
    Row,
    /// Horizontal axis: column widths, `scroll_left`
    Column,
}

impl Axis {
    /// Both axes, rows first.
    pub const ALL: [Axis; 2] = [Axis::Row, Axis::Column];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

impl FromStr for Axis {
    type Err = GridError;

    /// Accepts the names used by the JS bindings (`"row"`, `"rows"`, `"y"`,
    /// `"column"`, `"columns"`, `"col"`, `"x"`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "row" | "rows" | "y" | "vertical" => Ok(Axis::Row),
            "column" | "columns" | "col" | "cols" | "x" | "horizontal" => Ok(Axis::Column),
            _ => Err(GridError::UnknownAxis(s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_axis_names() {
        assert_eq!("row".parse::<Axis>().unwrap(), Axis::Row);
        assert_eq!("Rows".parse::<Axis>().unwrap(), Axis::Row);
        assert_eq!(" col ".parse::<Axis>().unwrap(), Axis::Column);
        assert_eq!("x".parse::<Axis>().unwrap(), Axis::Column);
        assert!("diagonal".parse::<Axis>().is_err());
    }
}
