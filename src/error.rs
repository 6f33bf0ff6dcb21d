//! Structured error types for gridgeom.
//!
//! Geometry queries never fail: they clamp out-of-range input instead.
//! Errors only come from the configuration and binding boundary.

/// All errors that can occur while configuring or driving a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Option value out of its valid domain.
    #[error("Invalid option `{name}`: {reason}")]
    InvalidOption { name: &'static str, reason: String },

    /// Axis name not recognised.
    #[error("Unknown axis: {0}")]
    UnknownAxis(String),

    /// Alignment mode not recognised.
    #[error("Unknown alignment: {0}")]
    UnknownAlign(String),

    /// Invalid A1 cell reference or range.
    #[error("Invalid cell reference: {0}")]
    CellRef(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl GridError {
    pub(crate) fn invalid_option(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
