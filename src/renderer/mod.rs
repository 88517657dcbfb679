//! Rendering module
//!
//! Turns simulation state into depth-tagged draw commands. Nothing here owns
//! a canvas: commands are issued against the host's [`Surface`].

pub mod colors;
pub mod command;
pub mod figure;
pub mod projection;
pub mod surface;

pub use colors::Color;
pub use command::{DrawCommand, Quad, Shadow, draw_all, sort_by_depth};
pub use figure::{Figure, FigureLayout, is_facing_viewer};
pub use projection::{Basis, TilemapOptions, tilemap_commands, top_quad_vertices};
pub use surface::{HAlign, RecordingSurface, Surface, SurfaceCall, VAlign};
