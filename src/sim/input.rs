//! Keyboard input mapping
//!
//! The host owns key capture; the core only asks whether any key is held and
//! whether a given key code is down.

use super::tick::TickInput;

/// Query interface over the host's keyboard state
pub trait KeySource {
    fn any_key_pressed(&self) -> bool;
    fn is_key_down(&self, code: u32) -> bool;
}

/// Key codes used by the default bindings
pub mod keys {
    pub const SPACE: u32 = 32;
    pub const A: u32 = 65;
    pub const D: u32 = 68;
    pub const S: u32 = 83;
    pub const W: u32 = 87;
}

/// What a bound key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Jump,
    Right,
    Left,
    Down,
    Up,
}

/// Static binding table, applied in order so later entries win on an axis
pub const KEY_BINDINGS: [(u32, KeyAction); 5] = [
    (keys::SPACE, KeyAction::Jump),
    (keys::D, KeyAction::Right),
    (keys::A, KeyAction::Left),
    (keys::S, KeyAction::Down),
    (keys::W, KeyAction::Up),
];

/// Plain snapshot of the keyboard for one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    pub pressed: bool,
    pub down: Vec<u32>,
}

impl InputState {
    /// Nothing held
    pub fn idle() -> Self {
        Self::default()
    }

    /// The given keys held down
    pub fn with_keys(codes: &[u32]) -> Self {
        Self {
            pressed: !codes.is_empty(),
            down: codes.to_vec(),
        }
    }
}

impl KeySource for InputState {
    fn any_key_pressed(&self) -> bool {
        self.pressed
    }

    fn is_key_down(&self, code: u32) -> bool {
        self.down.contains(&code)
    }
}

/// Resolve held keys into a tick input
pub fn read_input(source: &impl KeySource) -> TickInput {
    if !source.any_key_pressed() {
        return TickInput::default();
    }

    let mut input = TickInput::default();
    for (code, action) in KEY_BINDINGS {
        if !source.is_key_down(code) {
            continue;
        }
        match action {
            KeyAction::Jump => input.jump = true,
            KeyAction::Right => input.direction.x = 1.0,
            KeyAction::Left => input.direction.x = -1.0,
            KeyAction::Down => input.direction.y = 1.0,
            KeyAction::Up => input.direction.y = -1.0,
        }
    }
    input
}
