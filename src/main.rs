//! Iso Stroll entry point
//!
//! Headless driver: runs a scripted walk through the simulation, renders both
//! views into a recording surface each frame and logs what was drawn. An
//! optional first argument names a JSON settings file.

use std::process::ExitCode;

use iso_stroll::{Settings, SettingsError};
use iso_stroll::Simulation;
use iso_stroll::renderer::{RecordingSurface, SurfaceCall};
use iso_stroll::sim::{InputState, keys};

/// (frames, keys held) pairs played in order
const SCRIPT: &[(u32, &[u32])] = &[
    (10, &[]),
    (30, &[keys::D, keys::S]),
    (1, &[keys::SPACE]),
    (40, &[]),
    (20, &[keys::W]),
    (15, &[keys::A, keys::SPACE]),
];

fn load_settings(path: Option<&str>) -> Result<Settings, SettingsError> {
    match path {
        Some(path) => Settings::from_file(path),
        None => Ok(Settings::default()),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Iso Stroll starting...");

    let path = std::env::args().nth(1);
    let settings = match load_settings(path.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Invalid settings {}: {}", path.unwrap_or_default(), e);
            return ExitCode::FAILURE;
        }
    };

    let mut sim = Simulation::new(settings);
    let mut surface = RecordingSurface::new();
    let mut frame_index = 0u32;

    // hosts may call frame hooks before setup finishes
    sim.advance_frame(&InputState::idle());
    if !sim.build_frame().is_empty() {
        log::warn!("Frame produced before initialization");
    }

    sim.initialize();

    for &(frames, held) in SCRIPT {
        let input = InputState::with_keys(held);
        for _ in 0..frames {
            sim.advance_frame(&input);

            let frame = sim.build_frame();
            surface.clear();
            frame.render_iso(&mut surface);
            frame.render_top(&mut surface);
            frame_index += 1;

            log::debug!(
                "Frame {}: pos=({:.3}, {:.3}) z={:.3} calls={}",
                frame_index,
                frame.player_position.x,
                frame.player_position.y,
                sim.actor().z_height,
                surface.calls.len()
            );
        }
    }

    let actor = sim.actor();
    let circles = surface
        .calls
        .iter()
        .filter(|c| matches!(c, SurfaceCall::Circle { .. }))
        .count();
    log::info!(
        "Ran {} frames: actor at ({:.3}, {:.3}) z={:.3}, facing {:.3} rad",
        frame_index,
        actor.position.x,
        actor.position.y,
        actor.z_height,
        actor.facing_angle
    );
    log::info!(
        "Last frame: {} quads, {} circles, {} surface calls",
        surface.quads().count(),
        circles,
        surface.calls.len()
    );

    ExitCode::SUCCESS
}
