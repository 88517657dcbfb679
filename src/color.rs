//! RGBA color values shared by appearance data and the renderer

/// Linear RGBA, each channel in 0..=1
pub type Color = [f32; 4];

/// Opaque color from 8-bit channels
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const LIGHT_BLUE: Color = rgb(0xAD, 0xD8, 0xE6);
