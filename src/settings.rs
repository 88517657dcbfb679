//! Simulation settings
//!
//! Production values are pinned in [`crate::consts`]; a host or test can
//! override any of them by supplying a (partial) JSON document.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;
use crate::renderer::projection::Basis;

/// Per-tick physics constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Subtracted from vertical velocity each airborne tick
    pub gravity: f32,
    /// Vertical velocity set by a jump from rest
    pub jump_impulse: f32,
    /// Horizontal distance per tick of held input
    pub step_size: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            step_size: STEP_SIZE,
        }
    }
}

impl PhysicsConfig {
    fn validate(&self) -> Result<(), SettingsError> {
        for (field, value) in [
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("step_size", self.step_size),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::InvalidPhysics { field, value });
            }
        }
        Ok(())
    }
}

/// Projection setup for both views
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub iso: Basis,
    pub top: Basis,
    /// Cells drawn along each axis, starting at the grid origin
    pub view_size: u32,
    pub shadow_radius: f32,
    /// Added to the projected foot position in the top-down view
    pub top_figure_offset: Vec2,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            iso: Basis::isometric(),
            top: Basis::top_down(),
            view_size: VIEW_SIZE,
            shadow_radius: SHADOW_RADIUS,
            top_figure_offset: TOP_FIGURE_OFFSET,
        }
    }
}

/// All tunables for one simulation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub physics: PhysicsConfig,
    pub view: ViewConfig,
}

impl Settings {
    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        log::debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    /// Read and parse a JSON settings file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.view.view_size == 0 {
            return Err(SettingsError::EmptyView);
        }
        if self.view.view_size > MAX_VIEW_SIZE {
            return Err(SettingsError::ViewTooLarge(self.view.view_size));
        }
        self.physics.validate()
    }
}
