//! Vector helpers on top of `glam::Vec2`
//!
//! `Vec2` already covers arithmetic, dot product and length. The extension
//! trait adds rotation and magnitude adjustments used by the projection and
//! debug drawing code. Every method returns a new value.

use glam::Vec2;

/// Unit vector pointing right on screen
pub const RIGHT: Vec2 = Vec2::X;
/// Unit vector pointing down on screen
pub const DOWN: Vec2 = Vec2::Y;

pub trait Vec2Ext {
    /// Rotate counter-clockwise by `rad`
    fn rotated(self, rad: f32) -> Vec2;
    /// Same direction with magnitude `s` (zero stays zero)
    fn mag_set(self, s: f32) -> Vec2;
    /// Magnitude grown by `s` (zero stays zero)
    fn mag_added(self, s: f32) -> Vec2;
    /// Unit vector, or zero for a zero input
    fn normalized(self) -> Vec2;
    fn approx_eq(self, other: Vec2, eps: f32) -> bool;
}

impl Vec2Ext for Vec2 {
    #[inline]
    fn rotated(self, rad: f32) -> Vec2 {
        Vec2::from_angle(rad).rotate(self)
    }

    fn mag_set(self, s: f32) -> Vec2 {
        let mag = self.length();
        if mag == 0.0 { Vec2::ZERO } else { self * (s / mag) }
    }

    fn mag_added(self, s: f32) -> Vec2 {
        let mag = self.length();
        if mag == 0.0 {
            Vec2::ZERO
        } else {
            self * (1.0 + s / mag)
        }
    }

    #[inline]
    fn normalized(self) -> Vec2 {
        self.normalize_or_zero()
    }

    #[inline]
    fn approx_eq(self, other: Vec2, eps: f32) -> bool {
        (self - other).abs().max_element() <= eps
    }
}
