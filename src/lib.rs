//! Iso Stroll - a heightmapped tile walker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (tile grid, actor physics, input mapping)
//! - `renderer`: Draw commands, avatar figure, isometric/top-down projection
//! - `service`: Frame driver owning one simulation
//! - `settings`: Tunable physics and view configuration

pub mod color;
pub mod error;
pub mod renderer;
pub mod service;
pub mod settings;
pub mod sim;
pub mod vector;

pub use error::{DrawError, GridError, SettingsError};
pub use service::{Frame, Simulation};
pub use settings::{PhysicsConfig, Settings, ViewConfig};
pub use vector::Vec2Ext;

use std::f32::consts::TAU;

/// Simulation and projection constants
pub mod consts {
    use glam::Vec2;

    /// Downward acceleration applied per tick while airborne
    pub const GRAVITY: f32 = 0.0029;
    /// Upward velocity given by a jump
    pub const JUMP_IMPULSE: f32 = 0.1;
    /// Horizontal distance covered per tick of held input (grid units)
    pub const STEP_SIZE: f32 = 1.0 / 30.0;

    /// Actor spawn point (grid units)
    pub const SPAWN_POSITION: Vec2 = Vec2::new(1.5, 3.5);
    /// Actor spawn facing (radians)
    pub const SPAWN_ANGLE: f32 = -std::f32::consts::FRAC_PI_2;
    /// Actor spawn altitude
    pub const SPAWN_HEIGHT: f32 = 1.0;

    /// Isometric view basis
    pub const ISO_ROOT: Vec2 = Vec2::new(200.0, 275.0);
    pub const ISO_X_AXIS: Vec2 = Vec2::new(48.0, 24.0);
    pub const ISO_Y_AXIS: Vec2 = Vec2::new(-48.0, 24.0);

    /// Top-down view basis
    pub const TOP_ROOT: Vec2 = Vec2::new(400.0, 50.0);
    pub const TOP_X_AXIS: Vec2 = Vec2::new(48.0, 0.0);
    pub const TOP_Y_AXIS: Vec2 = Vec2::new(0.0, 48.0);

    /// Number of cells drawn along each grid axis
    pub const VIEW_SIZE: u32 = 4;
    /// Largest accepted view size
    pub const MAX_VIEW_SIZE: u32 = 256;
    /// Radius of the ground shadow under the actor (pixels)
    pub const SHADOW_RADIUS: f32 = 8.0;
    /// Screen offset applied to the figure in the top-down view
    pub const TOP_FIGURE_OFFSET: Vec2 = Vec2::new(0.0, 12.0);

    /// Bias added before normalizing angles so exact boundaries don't flicker
    pub const ANGLE_EPSILON: f32 = 0.0001;
}

/// Normalize an angle to [0, 2π), biased by a small epsilon
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let n = (angle + consts::ANGLE_EPSILON).rem_euclid(TAU);
    // rem_euclid rounds tiny negatives up to exactly TAU
    if n >= TAU { 0.0 } else { n }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_normalize_angle_range() {
        for a in [-3.0 * PI, -PI, -0.5, 0.0, 0.5, PI, 3.0 * PI, 7.0] {
            let n = normalize_angle(a);
            assert!((0.0..TAU).contains(&n), "{a} -> {n}");
        }
    }

    #[test]
    fn test_normalize_angle_just_below_zero() {
        let n = normalize_angle(-0.00010001);
        assert!((0.0..TAU).contains(&n), "{n}");
        assert_eq!(normalize_angle(-consts::ANGLE_EPSILON), 0.0);
    }

    #[test]
    fn test_normalize_angle_wraps_negative() {
        let n = normalize_angle(-PI / 2.0);
        assert!((n - (1.5 * PI + consts::ANGLE_EPSILON)).abs() < 1e-4);
    }
}
