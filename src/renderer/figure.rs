//! Articulated avatar figure
//!
//! A figure is a stack of circles (body, head, eyes, beak) placed around its
//! foot position. Turning is faked in 2D: horizontal offsets shrink with
//! `cos(facing)` and front-only parts vanish once the figure faces away.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_3, PI};

use super::colors::OUTLINE;
use super::surface::Surface;
use crate::normalize_angle;
use crate::sim::appearance::Appearance;

/// Foot-to-body-center offset (pixels)
pub const BODY_OFFSET: Vec2 = Vec2::new(0.0, -16.0);
/// Gait period in animation ticks
pub const GAIT_PERIOD: u32 = 20;
/// Ticks within a gait period spent on the ground
pub const GAIT_GROUNDED: u32 = 10;

/// Facing arc bounds, in normalized radians
pub const FACING_ARC_START: f32 = -PI / 36.0;
pub const FACING_ARC_END: f32 = 37.0 * PI / 36.0;

const OUTLINE_WEIGHT: f32 = 2.0;
const BEAK_OUTLINE_WEIGHT: f32 = 1.0;

/// Whether a figure turned to `angle` shows its front to the viewer
pub fn is_facing_viewer(angle: f32) -> bool {
    let a = normalize_angle(angle);
    (FACING_ARC_START..=FACING_ARC_END).contains(&a)
}

/// Square-wave bob: lifted during the second half of each gait period
pub fn bounce_offset(appearance: &Appearance, animation_clock: u32) -> Vec2 {
    let animation = appearance.animation();
    if animation.walk_bounce && animation_clock % GAIT_PERIOD > GAIT_GROUNDED {
        Vec2::new(0.0, -animation.bounce_amount)
    } else {
        Vec2::ZERO
    }
}

/// Screen positions of every visible part
#[derive(Debug, Clone, PartialEq)]
pub struct FigureLayout {
    pub body: Vec2,
    pub head: Vec2,
    pub eyes: Vec<Vec2>,
    pub beak: Option<Vec2>,
    /// Body drawn before head
    pub body_first: bool,
}

/// Draw command for an avatar standing at `foot`
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub foot: Vec2,
    pub facing_angle: f32,
    pub animation_clock: u32,
    pub appearance: Appearance,
    pub depth: i32,
}

impl Figure {
    pub fn layout(&self) -> FigureLayout {
        let angle = self.facing_angle;
        let appearance = &self.appearance;
        let facing = is_facing_viewer(angle);

        let shake = bounce_offset(appearance, self.animation_clock);
        let body = self.foot + BODY_OFFSET + shake;

        // head counter-bounces against the body
        let head_offset = appearance.head.offset;
        let head = body + Vec2::new(head_offset.x * angle.cos(), head_offset.y) - shake;

        let beak = appearance
            .beak
            .as_ref()
            .filter(|_| facing)
            .map(|beak| head + Vec2::new(beak.offset.x * angle.cos(), beak.offset.y));

        let eyes = appearance
            .eyes
            .as_ref()
            .map(|eyes| {
                eyes.positions
                    .iter()
                    .filter_map(|socket| {
                        let side = if socket.x > 0.0 { -FRAC_PI_3 } else { FRAC_PI_3 };
                        let eye_angle = angle + side;
                        is_facing_viewer(eye_angle).then(|| {
                            head + Vec2::new(socket.x.abs() * eye_angle.cos(), socket.y)
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        FigureLayout {
            body,
            head,
            eyes,
            beak,
            body_first: facing,
        }
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        let layout = self.layout();
        let appearance = &self.appearance;

        surface.push_style();
        surface.stroke(OUTLINE);
        surface.stroke_weight(OUTLINE_WEIGHT);

        let body = (appearance.body.color, layout.body, appearance.body.size);
        let head = (appearance.head.color, layout.head, appearance.head.size);
        // nearer part goes last
        let parts = if layout.body_first { [body, head] } else { [head, body] };
        for (color, center, size) in parts {
            surface.fill(color);
            surface.circle(center, size);
        }

        if let Some(eyes) = appearance.eyes.as_ref().filter(|_| !layout.eyes.is_empty()) {
            surface.fill(eyes.color);
            surface.stroke_weight(0.0);
            // every eye type renders as a filled circle for now
            for eye in &layout.eyes {
                surface.circle(*eye, eyes.diameter());
            }
        }

        if let (Some(beak), Some(center)) = (appearance.beak.as_ref(), layout.beak) {
            surface.fill(beak.color);
            surface.stroke_weight(BEAK_OUTLINE_WEIGHT);
            surface.circle(center, beak.size);
        }

        surface.pop_style();
    }
}
