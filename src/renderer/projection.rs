//! Grid-to-screen projection
//!
//! A view is described by a [`Basis`]: the screen position of the grid origin
//! plus the screen vectors of one grid step along x and y. The vertical axis
//! is derived as `-(x_axis + y_axis)`, so raising a point by `z` shears it
//! back along both planar axes and reads as "up" on screen.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use super::colors::{LABEL, OUTLINE, TILE_TOP, TILE_WALL};
use super::command::{DrawCommand, Quad};
use super::surface::{HAlign, Surface, VAlign};
use crate::consts::*;
use crate::sim::TileGrid;
use crate::vector::Vec2Ext;

/// Projection basis for one view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Basis {
    pub root: Vec2,
    pub x_axis: Vec2,
    pub y_axis: Vec2,
}

impl Basis {
    pub fn new(root: Vec2, x_axis: Vec2, y_axis: Vec2) -> Self {
        Self {
            root,
            x_axis,
            y_axis,
        }
    }

    /// 2:1 diamond view
    pub fn isometric() -> Self {
        Self::new(ISO_ROOT, ISO_X_AXIS, ISO_Y_AXIS)
    }

    /// Square map view
    pub fn top_down() -> Self {
        Self::new(TOP_ROOT, TOP_X_AXIS, TOP_Y_AXIS)
    }

    #[inline]
    pub fn z_axis(&self) -> Vec2 {
        -self.x_axis - self.y_axis
    }

    /// Screen position of a world point at planar `pos` and altitude `z`
    #[inline]
    pub fn project(&self, pos: Vec2, z: f32) -> Vec2 {
        self.root + self.x_axis * pos.x + self.y_axis * pos.y + self.z_axis() * z
    }
}

/// Top face of the cell (x, y) raised to height z, clockwise from the root corner
pub fn top_quad_vertices(x: f32, y: f32, z: f32, basis: &Basis) -> [Vec2; 4] {
    let p = basis.root + basis.x_axis * (x - z) + basis.y_axis * (y - z);
    [
        p,
        p + basis.x_axis,
        p + basis.x_axis + basis.y_axis,
        p + basis.y_axis,
    ]
}

/// The two visible side walls under a raised top face
pub fn wall_quads(top: &[Vec2; 4], height: f32, basis: &Basis) -> [[Vec2; 4]; 2] {
    let wall = basis.z_axis() * height;
    let bottom = top.map(|v| v - wall);
    [
        [top[1], bottom[1], bottom[2], top[2]],
        [top[2], bottom[2], bottom[3], top[3]],
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilemapOptions {
    /// Raise tiles to their height and draw walls; false draws a flat map
    pub draw_height: bool,
}

impl Default for TilemapOptions {
    fn default() -> Self {
        Self { draw_height: true }
    }
}

/// Commands for the `view_size` x `view_size` cells from the grid origin.
///
/// Every cell gets a top quad; raised cells also get their two walls. All
/// three share the cell's depth key `x + y`.
pub fn tilemap_commands(
    grid: &TileGrid,
    basis: &Basis,
    view_size: u32,
    options: TilemapOptions,
) -> Vec<DrawCommand> {
    let cells = view_size as usize * view_size as usize;
    let mut commands = Vec::with_capacity(cells * 3);

    for ty in 0..view_size {
        for tx in 0..view_size {
            let (x, y) = (tx as f32, ty as f32);
            let height = if options.draw_height {
                grid.height_at(x, y)
            } else {
                0.0
            };
            let depth = (tx + ty) as i32;

            let top = top_quad_vertices(x, y, height, basis);
            commands.push(Quad::new(top, TILE_TOP, depth).into());

            if height > 0.0 {
                for wall in wall_quads(&top, height, basis) {
                    commands.push(Quad::new(wall, TILE_WALL, depth).into());
                }
            }
        }
    }

    commands
}

/// Depth key of a world position, matching the tile convention
#[inline]
pub fn depth_of(pos: Vec2) -> i32 {
    (pos.x.floor() + pos.y.floor()) as i32
}

/// Debug overlay: each cell's height written at its root corner
pub fn draw_tile_heights(surface: &mut impl Surface, grid: &TileGrid, basis: &Basis, length: u32) {
    surface.push_style();
    surface.stroke(OUTLINE);
    surface.stroke_weight(2.0);
    surface.fill(LABEL);
    surface.text_align(HAlign::Left, VAlign::Top);
    surface.text_size(24.0);

    for ty in 0..length {
        for tx in 0..length {
            let (x, y) = (tx as f32, ty as f32);
            let corner = top_quad_vertices(x, y, 0.0, basis)[0];
            surface.text(&grid.height_at(x, y).to_string(), corner);
        }
    }

    surface.pop_style();
}

/// Debug arrow from `begin` along `way`, with a two-line head of `brim_size`
pub fn draw_arrow(surface: &mut impl Surface, begin: Vec2, way: Vec2, brim_size: f32) {
    let end = begin + way;

    if brim_size != 0.0 {
        let b1 = (way.normalized() * -brim_size).rotated(PI / 6.0);
        let b2 = b1.rotated(-2.0 * PI / 6.0);
        for brim in [b1, b2] {
            surface.line(end, end + brim);
        }
    }

    surface.line(begin, end);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::surface::{RecordingSurface, SurfaceCall};
    use proptest::prelude::*;

    #[test]
    fn test_z_axis_balances_basis() {
        let iso = Basis::isometric();
        assert_eq!(iso.z_axis(), Vec2::new(0.0, -48.0));
        assert_eq!(iso.x_axis + iso.y_axis + iso.z_axis(), Vec2::ZERO);
        assert_eq!(Basis::top_down().z_axis(), Vec2::new(-48.0, -48.0));
    }

    #[test]
    fn test_top_quad_flat() {
        let basis = Basis::isometric();
        let vs = top_quad_vertices(0.0, 0.0, 0.0, &basis);
        assert_eq!(vs[0], Vec2::new(200.0, 275.0));
        assert_eq!(vs[1], Vec2::new(248.0, 299.0));
        assert_eq!(vs[2], Vec2::new(200.0, 323.0));
        assert_eq!(vs[3], Vec2::new(152.0, 299.0));
    }

    #[test]
    fn test_top_quad_is_clockwise_on_screen() {
        // y points down on screen, so clockwise means positive shoelace area
        for basis in [Basis::isometric(), Basis::top_down()] {
            let vs = top_quad_vertices(2.0, 1.0, 1.0, &basis);
            let area: f32 = (0..4).map(|i| vs[i].perp_dot(vs[(i + 1) % 4])).sum();
            assert!(area > 0.0);
        }
    }

    #[test]
    fn test_wall_quads_hang_from_trailing_edges() {
        let basis = Basis::isometric();
        let top = top_quad_vertices(1.0, 1.0, 1.0, &basis);
        let [xwall, ywall] = wall_quads(&top, 1.0, &basis);
        assert_eq!(xwall[0], top[1]);
        assert_eq!(xwall[3], top[2]);
        assert_eq!(ywall[0], top[2]);
        assert_eq!(ywall[3], top[3]);
        // one unit of height is 48px straight down in the iso view
        assert_eq!(xwall[1], top[1] + Vec2::new(0.0, 48.0));
    }

    #[test]
    fn test_tilemap_counts_and_depths() {
        let n = 5;
        let grid = TileGrid::create_flat(n, n, 2.0);
        let commands = tilemap_commands(&grid, &Basis::isometric(), n, TilemapOptions::default());
        assert_eq!(commands.len(), (3 * n * n) as usize);

        let tops = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Quad(q) if q.color == TILE_TOP))
            .count();
        assert_eq!(tops, (n * n) as usize);

        // emitted row by row, three quads per cell
        for (i, chunk) in commands.chunks(3).enumerate() {
            let (tx, ty) = (i as u32 % n, i as u32 / n);
            for c in chunk {
                assert_eq!(c.depth(), (tx + ty) as i32);
            }
        }
    }

    #[test]
    fn test_tilemap_flat_option_skips_walls() {
        let grid = TileGrid::create_flat(4, 4, 1.0);
        let commands = tilemap_commands(&grid, &Basis::top_down(), 4, TilemapOptions { draw_height: false });
        assert_eq!(commands.len(), 16);
        match &commands[5] {
            DrawCommand::Quad(q) => {
                assert_eq!(q.vertices, top_quad_vertices(1.0, 1.0, 0.0, &Basis::top_down()));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_tilemap_holes_have_no_walls() {
        let grid = TileGrid::new(2, 1, vec![0.0, 1.0]).unwrap();
        let commands = tilemap_commands(&grid, &Basis::isometric(), 2, TilemapOptions::default());
        // first row: hole (1 quad) + raised cell (3 quads); second row is out of grid
        assert_eq!(commands.len(), 1 + 3 + 2);
    }

    #[test]
    fn test_project_matches_quad_corner() {
        let basis = Basis::isometric();
        let projected = basis.project(Vec2::new(2.0, 3.0), 1.0);
        assert_eq!(projected, top_quad_vertices(2.0, 3.0, 1.0, &basis)[0]);
    }

    #[test]
    fn test_depth_of_floors() {
        assert_eq!(depth_of(Vec2::new(1.5, 3.5)), 4);
        assert_eq!(depth_of(Vec2::new(0.99, 0.01)), 0);
    }

    #[test]
    fn test_tile_height_labels() {
        let mut surface = RecordingSurface::new();
        let grid = TileGrid::create_flat(2, 2, 1.5);
        draw_tile_heights(&mut surface, &grid, &Basis::top_down(), 2);

        let labels: Vec<_> = surface
            .calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Text { text, at } => Some((text.clone(), *at)),
                _ => None,
            })
            .collect();
        assert_eq!(labels.len(), 4);
        assert_eq!(labels[0], ("1.5".to_string(), Vec2::new(400.0, 50.0)));
        assert_eq!(labels[1].1, Vec2::new(448.0, 50.0));
        assert!(surface.calls.contains(&SurfaceCall::TextAlign(HAlign::Left, VAlign::Top)));
        assert_eq!(surface.style_depth(), 0);
    }

    #[test]
    fn test_arrow_head() {
        let mut surface = RecordingSurface::new();
        draw_arrow(&mut surface, Vec2::ZERO, Vec2::new(100.0, 0.0), 20.0);
        let lines: Vec<_> = surface
            .calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Line { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect();
        assert_eq!(lines.len(), 3);
        let end = Vec2::new(100.0, 0.0);
        for (from, to) in &lines[..2] {
            assert_eq!(*from, end);
            // both barbs point back toward the start
            assert!(to.x < end.x);
            assert!(((*to - end).length() - 20.0).abs() < 1e-3);
        }
        assert!(lines[0].1.y * lines[1].1.y < 0.0);
        assert_eq!(lines[2], (Vec2::ZERO, end));
    }

    proptest! {
        #[test]
        fn raising_shifts_every_vertex(x in -10.0f32..10.0, y in -10.0f32..10.0, z in 0.0f32..5.0) {
            let basis = Basis::isometric();
            let flat = top_quad_vertices(x, y, 0.0, &basis);
            let raised = top_quad_vertices(x, y, z, &basis);
            let shift = -basis.x_axis * z - basis.y_axis * z;
            for (f, r) in flat.iter().zip(raised.iter()) {
                prop_assert!((*r - (*f + shift)).length() < 1e-2);
            }
        }
    }
}
