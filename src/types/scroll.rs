use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Direction of the most recent scroll movement along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScrollDirection {
    /// Toward higher indices (down / right)
    #[default]
    Forward,
    /// Toward lower indices (up / left)
    Backward,
}

/// Where a target cell should land after a programmatic scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Align {
    /// Leading edge flush with the viewport's leading edge (after frozen panes)
    Start,
    /// Trailing edge flush with the viewport's trailing edge
    End,
    /// Centered in the scrollable part of the viewport
    Center,
    /// Leave the scroll alone if fully visible, otherwise the nearest of start/end
    #[default]
    Smart,
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Align::Start => "start",
            Align::End => "end",
            Align::Center => "center",
            Align::Smart => "smart",
        };
        f.write_str(s)
    }
}

impl FromStr for Align {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Align::Start),
            "end" => Ok(Align::End),
            "center" => Ok(Align::Center),
            "smart" | "auto" => Ok(Align::Smart),
            _ => Err(GridError::UnknownAlign(s.to_string())),
        }
    }
}

/// Scroll position of the grid's scrollable region
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollOffsets {
    pub scroll_top: f64,
    pub scroll_left: f64,
}

/// When a planned scroll should be applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApplyTiming {
    /// Apply during the current paint
    #[default]
    Immediate,
    /// Target was far outside the rendered window; apply on the next animation frame
    NextFrame,
}

/// Result of planning a scroll to a cell.
///
/// An axis is `None` when it must not move: the target sits inside the
/// frozen region on that axis, or the grid has no items on it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollPlan {
    pub scroll_top: Option<f64>,
    pub scroll_left: Option<f64>,
    pub timing: ApplyTiming,
}

impl ScrollPlan {
    /// True if neither axis moves
    pub fn is_noop(&self) -> bool {
        self.scroll_top.is_none() && self.scroll_left.is_none()
    }

    /// Resolve against the current offsets, keeping axes the plan leaves alone
    pub fn resolve(&self, current: ScrollOffsets) -> ScrollOffsets {
        ScrollOffsets {
            scroll_top: self.scroll_top.unwrap_or(current.scroll_top),
            scroll_left: self.scroll_left.unwrap_or(current.scroll_left),
        }
    }
}
