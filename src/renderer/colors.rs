//! Scene palette

pub use crate::color::{BLACK, Color, WHITE};

use crate::color::rgb;

/// Tile top face (mint green)
pub const TILE_TOP: Color = rgb(0xA8, 0xD5, 0xBA);
/// Tile side walls, a shade darker than the top
pub const TILE_WALL: Color = rgb(0x8B, 0xB9, 0xA0);
pub const SHADOW: Color = BLACK;
pub const OUTLINE: Color = BLACK;
pub const LABEL: Color = WHITE;
