//! Game Module
//!
//! Level-specific systems that build on top of the engine: arena geometry,
//! the car, collectibles and spheres, and the per-frame update.

pub mod collectibles;
pub mod config;
pub mod level;
pub mod systems;
pub mod vehicle;

pub use collectibles::COLLECTIBLE_HALF_EXTENT;
pub use config::{CarConfig, DriveConfig, LevelConfig};
pub use level::{BoxDescriptor, FrameReport, Level, LevelLayout};
pub use systems::{CollisionOutcome, CollisionSystem, Contact};
pub use vehicle::{CAR_FORWARD, CarState};
