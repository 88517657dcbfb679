//! Heightmapped tile grid
//!
//! Heights are stored row-major with the origin at the top-left cell. A height
//! of 0 is a hole: nothing can stand there at any altitude.

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Rectangular heightmap, immutable once built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct TileGrid {
    heights: Vec<f32>,
    width: u32,
    height: u32,
}

impl TileGrid {
    /// Build a grid from row-major heights.
    ///
    /// Returns `None` when `heights.len() != width * height`.
    pub fn new(width: u32, height: u32, heights: Vec<f32>) -> Option<Self> {
        if heights.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            heights,
            width,
            height,
        })
    }

    /// The starting stage: 8x8, every tile at height 1
    pub fn create_default() -> Self {
        Self::create_flat(8, 8, 1.0)
    }

    /// Uniform grid of any size
    pub fn create_flat(width: u32, height: u32, flat_height: f32) -> Self {
        Self {
            heights: vec![flat_height; width as usize * height as usize],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Row-major index of the cell containing (x, y), or `None` outside the grid
    pub fn index_of(&self, x: f32, y: f32) -> Option<usize> {
        let xi = x.floor();
        let yi = y.floor();
        // NaN fails both range checks
        if !(xi >= 0.0 && xi < self.width as f32) || !(yi >= 0.0 && yi < self.height as f32) {
            return None;
        }
        Some(yi as usize * self.width as usize + xi as usize)
    }

    /// Tile height under (x, y); 0 outside the grid
    pub fn height_at(&self, x: f32, y: f32) -> f32 {
        self.index_of(x, y)
            .and_then(|i| self.heights.get(i).copied())
            .unwrap_or(0.0)
    }

    /// A point is passable when it has a floor and sits at or above it
    pub fn is_passable(&self, x: f32, y: f32, z: f32) -> bool {
        let floor = self.height_at(x, y);
        floor != 0.0 && z >= floor
    }
}

/// Unchecked wire form; deserialization goes through the length check
#[derive(Deserialize)]
struct RawGrid {
    heights: Vec<f32>,
    width: u32,
    height: u32,
}

impl TryFrom<RawGrid> for TileGrid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        let (width, height) = (raw.width, raw.height);
        let actual = raw.heights.len();
        Self::new(width, height, raw.heights).ok_or(GridError::HeightCount {
            width,
            height,
            expected: width as usize * height as usize,
            actual,
        })
    }
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::create_default()
    }
}
