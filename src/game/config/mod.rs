//! Config Module
//!
//! Centralized configuration for the level and the drive model.

pub mod level_config;

pub use level_config::{CarConfig, DriveConfig, LevelConfig};
