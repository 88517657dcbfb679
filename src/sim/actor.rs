//! The player-controlled actor

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::appearance::Appearance;
use crate::consts::*;

/// Mutable simulation state of the single actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Planar position in grid units
    pub position: Vec2,
    /// Facing in grid space (radians)
    pub facing_angle: f32,
    /// Altitude of the feet
    pub z_height: f32,
    /// Vertical velocity; exactly 0 when resting or blocked
    pub z_velocity: f32,
    /// Ticks spent walking, drives the gait cycle
    pub animation_clock: u32,
    pub appearance: Appearance,
}

impl Actor {
    pub fn new(appearance: Appearance, position: Vec2) -> Self {
        Self {
            position,
            facing_angle: SPAWN_ANGLE,
            z_height: SPAWN_HEIGHT,
            z_velocity: 0.0,
            animation_clock: 0,
            appearance,
        }
    }

    /// Only a grounded actor (no vertical velocity) may jump
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.z_velocity == 0.0
    }

    /// Start a jump; ignored while airborne
    pub fn jump(&mut self, impulse: f32) {
        if self.is_grounded() {
            self.z_velocity = impulse;
        }
    }

    pub fn apply_gravity(&mut self, gravity: f32) {
        self.z_velocity -= gravity;
    }

    pub fn advance_animation(&mut self) {
        self.animation_clock = self.animation_clock.wrapping_add(1);
    }

    /// Stop vertical motion without touching the altitude
    pub fn reset_velocity(&mut self) {
        self.z_velocity = 0.0;
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new(Appearance::default(), SPAWN_POSITION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_state() {
        let actor = Actor::default();
        assert_eq!(actor.position, Vec2::new(1.5, 3.5));
        assert_eq!(actor.facing_angle, -std::f32::consts::FRAC_PI_2);
        assert_eq!(actor.z_height, 1.0);
        assert!(actor.is_grounded());
        assert_eq!(actor.animation_clock, 0);
    }

    #[test]
    fn test_no_double_jump() {
        let mut actor = Actor::default();
        actor.jump(0.1);
        assert_eq!(actor.z_velocity, 0.1);
        actor.apply_gravity(0.0029);
        let airborne = actor.z_velocity;
        actor.jump(0.1);
        assert_eq!(actor.z_velocity, airborne);
    }
}
