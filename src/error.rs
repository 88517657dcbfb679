//! Error types
//!
//! Grid lookups and uninitialized frame calls never fail; they resolve to
//! zero/empty values. Only malformed draw input, grid data and bad configuration do.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    #[error("quad requires exactly 4 vertices, got {0}")]
    VertexCount(usize),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("{width}x{height} grid needs {expected} heights, got {actual}")]
    HeightCount {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings")]
    Parse(#[from] serde_json::Error),

    #[error("view size must be at least 1")]
    EmptyView,

    #[error("view size {0} exceeds the maximum of {max}", max = crate::consts::MAX_VIEW_SIZE)]
    ViewTooLarge(u32),

    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidPhysics { field: &'static str, value: f32 },
}
