//! Ramp Rally Engine Library
//!
//! Physics world setup and per-frame driving update for the Ramp Rally level.
//! Integration, collision detection and contact resolution are delegated to
//! rapier; this crate owns the level description and the input-to-velocity
//! mapping around it.
//!
//! # Modules
//!
//! - [`physics`] - rapier world wrapper, body tags and the collision event queue
//! - [`input`] - Platform-agnostic key codes, drive keys and bindings
//! - [`error`] - Error type shared by config loading and level bookkeeping
//! - [`game`] - Level geometry, vehicle, collectibles and the frame update
//!
//! # Example
//!
//! ```ignore
//! use ramp_rally_engine::game::{Level, LevelConfig};
//! use ramp_rally_engine::input::{DriveKeys, KeyCode};
//!
//! let mut level = Level::new(LevelConfig::default())?;
//! let mut keys = DriveKeys::new();
//! keys.handle_key(KeyCode::W, true, level.bindings());
//!
//! let report = level.update(1.0 / 60.0, &keys);
//! println!("speed: {:.1} m/s", report.car.display_speed);
//! ```

pub mod error;
pub mod input;
pub mod physics;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use error::LevelError;
pub use input::{DriveAction, DriveBindings, DriveKeys, KeyCode};
pub use physics::{BodyTag, CollisionQueue, PhysicsWorld, Quat, Vec3};
