//! Frame driver
//!
//! Owns the actor and the grid. The host calls [`Simulation::advance_frame`]
//! then [`Simulation::build_frame`] once per animation frame. Until
//! [`Simulation::initialize`] runs both are no-ops.

use glam::Vec2;
use std::f32::consts::FRAC_PI_4;

use crate::renderer::command::{DrawCommand, Shadow, draw_all, sort_by_depth};
use crate::renderer::figure::Figure;
use crate::renderer::projection::{TilemapOptions, depth_of, tilemap_commands};
use crate::renderer::surface::Surface;
use crate::settings::Settings;
use crate::sim::{Actor, KeySource, TileGrid, read_input, tick};

/// Draw lists and state snapshot for one rendered frame
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    /// Isometric view in emission order; sort by depth before drawing
    pub iso: Vec<DrawCommand>,
    /// Top-down view; no occlusion, drawn as emitted
    pub top: Vec<DrawCommand>,
    pub player_position: Vec2,
    pub grid: &'a TileGrid,
}

impl Frame<'_> {
    /// Draw the isometric view far-to-near
    pub fn render_iso(&self, surface: &mut impl Surface) {
        let mut commands = self.iso.clone();
        sort_by_depth(&mut commands);
        draw_all(&commands, surface);
    }

    pub fn render_top(&self, surface: &mut impl Surface) {
        draw_all(&self.top, surface);
    }

    pub fn is_empty(&self) -> bool {
        self.iso.is_empty() && self.top.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Simulation {
    actor: Actor,
    grid: TileGrid,
    settings: Settings,
    initialized: bool,
}

impl Simulation {
    pub fn new(settings: Settings) -> Self {
        Self {
            actor: Actor::default(),
            grid: TileGrid::create_default(),
            settings,
            initialized: false,
        }
    }

    /// Reset the actor and the stage and start accepting frames
    pub fn initialize(&mut self) {
        self.actor = Actor::default();
        self.grid = TileGrid::create_default();
        self.initialized = true;
        log::info!(
            "Simulation initialized: {}x{} grid, actor at ({}, {})",
            self.grid.width(),
            self.grid.height(),
            self.actor.position.x,
            self.actor.position.y
        );
    }

    /// Start on a custom stage instead of the default one
    pub fn initialize_with(&mut self, grid: TileGrid, actor: Actor) {
        self.grid = grid;
        self.actor = actor;
        self.initialized = true;
        log::info!(
            "Simulation initialized: {}x{} custom grid",
            self.grid.width(),
            self.grid.height()
        );
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Read input and run one physics tick
    pub fn advance_frame(&mut self, keys: &impl KeySource) {
        if !self.initialized {
            return;
        }
        let input = read_input(keys);
        tick(&mut self.actor, &self.grid, &input, &self.settings.physics);
    }

    /// Project the current state into both views
    pub fn build_frame(&self) -> Frame<'_> {
        if !self.initialized {
            return Frame {
                iso: Vec::new(),
                top: Vec::new(),
                player_position: Vec2::ZERO,
                grid: &self.grid,
            };
        }

        let view = &self.settings.view;
        let actor = &self.actor;
        let (iso_basis, top_basis) = (&view.iso, &view.top);

        let mut iso = tilemap_commands(&self.grid, iso_basis, view.view_size, TilemapOptions {
            draw_height: true,
        });
        let mut top = tilemap_commands(&self.grid, top_basis, view.view_size, TilemapOptions {
            draw_height: false,
        });

        let depth = depth_of(actor.position);
        let iso_foot = iso_basis.project(actor.position, actor.z_height);

        // flatten the figure onto the floor directly beneath it
        let floor = self.grid.height_at(actor.position.x, actor.position.y);
        let shadow_center = iso_foot - iso_basis.z_axis() * (actor.z_height - floor);
        iso.push(
            Shadow {
                center: shadow_center,
                radius: view.shadow_radius,
                depth,
            }
            .into(),
        );
        // the iso view is rotated by π/4 relative to grid space
        iso.push(
            Figure {
                foot: iso_foot,
                facing_angle: actor.facing_angle + FRAC_PI_4,
                animation_clock: actor.animation_clock,
                appearance: actor.appearance.clone(),
                depth,
            }
            .into(),
        );

        let top_foot = top_basis.project(actor.position, 0.0) + view.top_figure_offset;
        top.push(
            Figure {
                foot: top_foot,
                facing_angle: actor.facing_angle,
                animation_clock: actor.animation_clock,
                appearance: actor.appearance.clone(),
                depth: 0,
            }
            .into(),
        );

        log::trace!("Built frame: {} iso / {} top commands", iso.len(), top.len());

        Frame {
            iso,
            top,
            player_position: actor.position,
            grid: &self.grid,
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
