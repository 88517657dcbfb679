//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed per-tick constants only (no wall-clock time)
//! - One actor, one read-only grid
//! - No rendering or platform dependencies beyond the key query trait

pub mod actor;
pub mod appearance;
pub mod grid;
pub mod input;
pub mod tick;

pub use actor::Actor;
pub use appearance::{Accessory, Animation, Appearance, Beak, BodyPart, EyeType, Eyes, HeadPart};
pub use grid::TileGrid;
pub use input::{InputState, KeyAction, KeySource, keys, read_input};
pub use tick::{TickInput, heading_for, tick};
