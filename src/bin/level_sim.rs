//! Headless Level Runner
//!
//! Run with: `cargo run --bin level_sim -- [config.json]`
//!
//! Builds the level, drops a collectible in front of the car and rolls a
//! sphere at the east wall, then drives a scripted lap at 60 Hz and prints
//! the level layout and the final frame report. Set `RUST_LOG=info` to see pickups and sphere
//! removals as they happen.

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
use ramp_rally_engine::{
    DriveKeys, LevelError, Vec3,
    game::{Level, LevelConfig},
};

#[cfg(not(target_arch = "wasm32"))]
const FRAME_DT: f32 = 1.0 / 60.0;

/// (frames, forward, backward, left, right)
#[cfg(not(target_arch = "wasm32"))]
const SCRIPT: [(u32, bool, bool, bool, bool); 4] = [
    (90, true, false, false, false),
    (60, true, false, true, false),
    (60, false, false, false, false),
    (45, false, true, false, true),
];

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), LevelError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            log::info!("Loading level config from {}", path.display());
            LevelConfig::load(&path)?
        }
        None => LevelConfig::default(),
    };

    let mut level = Level::new(config)?;
    let collectible = level.spawn_collectible(Vec3::new(30.0, 1.0, -12.0));
    let sphere = level.spawn_sphere(Vec3::new(90.0, 1.0, 0.0), Vec3::new(15.0, 0.0, 0.0));
    log::info!("Collectible {collectible} and sphere {sphere} placed");

    let mut collected = 0usize;
    let mut removed = 0usize;
    let mut last = None;

    for (frames, forward, backward, left, right) in SCRIPT {
        let keys = DriveKeys::from_wasd(forward, left, backward, right);
        for _ in 0..frames {
            let report = level.update(FRAME_DT, &keys);
            for id in &report.collected_ids {
                log::info!("Frame {}: collectible {id} touched", report.step);
            }
            for index in &report.spheres_removed {
                log::info!("Frame {}: sphere {index} gone", report.step);
            }
            collected += report.collected_ids.len();
            removed += report.spheres_removed.len();
            last = Some(report);
        }
    }

    println!("{}", level.layout().to_json()?);
    println!("collected: {collected}, spheres removed: {removed}");
    if let Some(report) = last {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
