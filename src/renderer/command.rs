//! Draw commands
//!
//! Each frame the projection emits a flat list of commands tagged with a
//! depth key. Sorting ascending by depth and drawing in order gives correct
//! occlusion (painter's algorithm).

use glam::Vec2;

use super::colors::{Color, OUTLINE, SHADOW};
use super::figure::Figure;
use super::surface::Surface;
use crate::error::DrawError;

const QUAD_OUTLINE_WEIGHT: f32 = 2.0;

/// Filled four-sided polygon (tile face or wall)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// Clockwise from the root-side corner
    pub vertices: [Vec2; 4],
    pub color: Color,
    pub depth: i32,
}

impl Quad {
    pub fn new(vertices: [Vec2; 4], color: Color, depth: i32) -> Self {
        Self {
            vertices,
            color,
            depth,
        }
    }

    /// Build from a vertex list of unknown length
    pub fn from_slice(vertices: &[Vec2], color: Color, depth: i32) -> Result<Self, DrawError> {
        let vertices: [Vec2; 4] = vertices
            .try_into()
            .map_err(|_| DrawError::VertexCount(vertices.len()))?;
        Ok(Self::new(vertices, color, depth))
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.push_style();
        surface.stroke(OUTLINE);
        surface.stroke_weight(QUAD_OUTLINE_WEIGHT);
        surface.fill(self.color);
        surface.quad(&self.vertices);
        surface.pop_style();
    }
}

/// Flattened ellipse on the floor under a figure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub center: Vec2,
    pub radius: f32,
    pub depth: i32,
}

impl Shadow {
    pub fn draw(&self, surface: &mut impl Surface) {
        surface.push_style();
        surface.stroke_weight(0.0);
        surface.fill(SHADOW);
        // twice as wide as tall to sit on the isometric floor
        surface.ellipse(self.center, self.radius * 4.0, self.radius * 2.0);
        surface.pop_style();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Quad(Quad),
    Shadow(Shadow),
    Figure(Figure),
}

impl DrawCommand {
    /// Painter's key; larger draws later
    pub fn depth(&self) -> i32 {
        match self {
            DrawCommand::Quad(q) => q.depth,
            DrawCommand::Shadow(s) => s.depth,
            DrawCommand::Figure(f) => f.depth,
        }
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        match self {
            DrawCommand::Quad(q) => q.draw(surface),
            DrawCommand::Shadow(s) => s.draw(surface),
            DrawCommand::Figure(f) => f.draw(surface),
        }
    }
}

impl From<Quad> for DrawCommand {
    fn from(quad: Quad) -> Self {
        DrawCommand::Quad(quad)
    }
}

impl From<Shadow> for DrawCommand {
    fn from(shadow: Shadow) -> Self {
        DrawCommand::Shadow(shadow)
    }
}

impl From<Figure> for DrawCommand {
    fn from(figure: Figure) -> Self {
        DrawCommand::Figure(figure)
    }
}

/// Stable ascending sort by depth; equal keys keep emission order
pub fn sort_by_depth(commands: &mut [DrawCommand]) {
    commands.sort_by_key(DrawCommand::depth);
}

/// Issue every command in list order
pub fn draw_all(commands: &[DrawCommand], surface: &mut impl Surface) {
    for command in commands {
        command.draw(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::colors::TILE_TOP;
    use crate::renderer::surface::{RecordingSurface, SurfaceCall};
    use crate::sim::Appearance;

    fn square() -> [Vec2; 4] {
        [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_quad_from_slice_requires_four() {
        let vs = square();
        assert!(Quad::from_slice(&vs, TILE_TOP, 0).is_ok());
        assert_eq!(
            Quad::from_slice(&vs[..3], TILE_TOP, 0),
            Err(DrawError::VertexCount(3))
        );
        let five = [vs[0], vs[1], vs[2], vs[3], vs[0]];
        assert_eq!(
            Quad::from_slice(&five, TILE_TOP, 0),
            Err(DrawError::VertexCount(5))
        );
    }

    #[test]
    fn test_quad_draw_calls() {
        let mut surface = RecordingSurface::new();
        Quad::new(square(), TILE_TOP, 3).draw(&mut surface);
        assert_eq!(
            surface.calls,
            vec![
                SurfaceCall::PushStyle,
                SurfaceCall::Stroke(OUTLINE),
                SurfaceCall::StrokeWeight(2.0),
                SurfaceCall::Fill(TILE_TOP),
                SurfaceCall::Quad(square()),
                SurfaceCall::PopStyle,
            ]
        );
    }

    #[test]
    fn test_shadow_is_wide_ellipse() {
        let mut surface = RecordingSurface::new();
        let shadow = Shadow {
            center: Vec2::new(10.0, 20.0),
            radius: 8.0,
            depth: 0,
        };
        DrawCommand::from(shadow).draw(&mut surface);
        assert!(surface.calls.contains(&SurfaceCall::Ellipse {
            center: Vec2::new(10.0, 20.0),
            width: 32.0,
            height: 16.0,
        }));
        assert!(surface.calls.contains(&SurfaceCall::StrokeWeight(0.0)));
        assert_eq!(surface.style_depth(), 0);
    }

    #[test]
    fn test_sort_is_stable_by_depth() {
        let quad = |d| DrawCommand::from(Quad::new(square(), TILE_TOP, d));
        let shadow = DrawCommand::from(Shadow {
            center: Vec2::ZERO,
            radius: 8.0,
            depth: 1,
        });
        let figure = DrawCommand::from(Figure {
            foot: Vec2::ZERO,
            facing_angle: 0.0,
            animation_clock: 0,
            appearance: Appearance::default(),
            depth: 1,
        });
        let mut commands = vec![quad(2), quad(1), quad(0), shadow.clone(), figure.clone()];
        sort_by_depth(&mut commands);

        let depths: Vec<i32> = commands.iter().map(DrawCommand::depth).collect();
        assert_eq!(depths, vec![0, 1, 1, 1, 2]);
        // shadow stays under the figure, both after the tile at the same depth
        assert_eq!(commands[2], shadow);
        assert_eq!(commands[3], figure);
    }

    #[test]
    fn test_draw_all_balances_styles() {
        let commands = vec![
            DrawCommand::from(Quad::new(square(), TILE_TOP, 0)),
            DrawCommand::from(Shadow {
                center: Vec2::ZERO,
                radius: 8.0,
                depth: 0,
            }),
        ];
        let mut surface = RecordingSurface::new();
        draw_all(&commands, &mut surface);
        assert_eq!(surface.quads().count(), 1);
        assert_eq!(surface.style_depth(), 0);
    }
}
