//! Fixed-step simulation tick
//!
//! One call advances the actor by exactly one frame: jump, horizontal move,
//! then vertical integration. Horizontal and vertical moves are resolved
//! independently against the grid; a blocked move is dropped whole.

use glam::Vec2;
use std::f32::consts::FRAC_PI_4;

use super::actor::Actor;
use super::grid::TileGrid;
use crate::settings::PhysicsConfig;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Screen-relative direction, each axis in {-1, 0, 1}
    pub direction: Vec2,
    /// Jump requested this tick
    pub jump: bool,
}

impl TickInput {
    pub fn walk(direction: Vec2) -> Self {
        Self {
            direction,
            jump: false,
        }
    }

    pub fn jump() -> Self {
        Self {
            direction: Vec2::ZERO,
            jump: true,
        }
    }
}

/// Grid-space heading for a screen-relative input direction.
///
/// The isometric view is rotated by π/4, so the input angle is skewed back to
/// make WASD line up with the screen.
#[inline]
pub fn heading_for(direction: Vec2) -> f32 {
    direction.y.atan2(direction.x) - FRAC_PI_4
}

/// Advance the actor by one tick
pub fn tick(actor: &mut Actor, grid: &TileGrid, input: &TickInput, physics: &PhysicsConfig) {
    if input.jump {
        actor.jump(physics.jump_impulse);
    }

    if input.direction != Vec2::ZERO {
        actor.advance_animation();

        let angle = heading_for(input.direction);
        actor.facing_angle = angle;

        let candidate = actor.position + Vec2::from_angle(angle) * physics.step_size;
        if grid.is_passable(candidate.x, candidate.y, actor.z_height) {
            actor.position = candidate;
        } else {
            log::trace!("Move to ({:.3}, {:.3}) blocked", candidate.x, candidate.y);
        }
    }

    let candidate_z = actor.z_height + actor.z_velocity;
    if grid.is_passable(actor.position.x, actor.position.y, candidate_z) {
        actor.z_height = candidate_z;
        actor.apply_gravity(physics.gravity);
    } else {
        if actor.z_velocity < 0.0 {
            log::trace!("Landed at z={:.4}", actor.z_height);
        }
        actor.reset_velocity();
    }
}
