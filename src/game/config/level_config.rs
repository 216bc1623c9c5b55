//! Level Configuration
//!
//! Tunable parameters for the level: world gravity and step, the car body and
//! the drive model. `Default` returns the shipped level's values; JSON files
//! may override any subset of fields.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::LevelError;
use crate::input::DriveBindings;
use crate::physics::DEFAULT_TIMESTEP;

/// Drive model parameters (speeds in m/s, rates in rad/s).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriveConfig {
    /// Forward and reverse speed cap
    pub max_speed: f32,
    /// Base yaw rate
    pub turn_speed: f32,
    /// Speed gained per second while a throttle key is held (m/s²)
    pub acceleration: f32,
    /// Speed lost per second while coasting (m/s²)
    pub friction: f32,
    /// Yaw rate multiplier while a throttle key is held
    pub throttle_turn_factor: f32,
    /// Yaw rate multiplier while coasting
    pub coast_turn_factor: f32,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            max_speed: 30.0,
            turn_speed: 1.0,
            acceleration: 30.0,
            friction: 5.0,
            throttle_turn_factor: 1.5,
            coast_turn_factor: 0.5,
        }
    }
}

/// Player vehicle body parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarConfig {
    /// Spawn position of the car's center
    pub spawn: Vec3,
    /// Half extents of the car's box collider
    pub half_extents: Vec3,
    /// Mass added on top of the collider-derived mass (kg)
    pub additional_mass: f32,
    pub linear_damping: f32,
    pub angular_damping: f32,
    pub friction: f32,
    pub restitution: f32,
}

impl Default for CarConfig {
    fn default() -> Self {
        Self {
            spawn: Vec3::new(30.0, 0.25, 0.0),
            half_extents: Vec3::new(0.5, 0.25, 1.0),
            additional_mass: 1.0,
            linear_damping: 0.0,
            angular_damping: 0.1,
            friction: 0.5,
            restitution: 0.3,
        }
    }
}

/// Central configuration for the whole level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// World gravity (m/s²)
    pub gravity: Vec3,
    /// Fixed physics step (seconds); frame delta only drives the speed model
    pub timestep: f32,
    /// Radius of spawned spheres (meters)
    pub sphere_radius: f32,
    pub drive: DriveConfig,
    pub car: CarConfig,
    pub bindings: DriveBindings,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -9.81, 0.0),
            timestep: DEFAULT_TIMESTEP,
            sphere_radius: 0.5,
            drive: DriveConfig::default(),
            car: CarConfig::default(),
            bindings: DriveBindings::default(),
        }
    }
}

impl LevelConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, LevelError> {
        let config: LevelConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every value is in range for building a world.
    pub fn validate(&self) -> Result<(), LevelError> {
        fn positive(name: &str, value: f32) -> Result<(), LevelError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(LevelError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )))
            }
        }
        fn non_negative(name: &str, value: f32) -> Result<(), LevelError> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(LevelError::InvalidConfig(format!(
                    "{name} must be non-negative, got {value}"
                )))
            }
        }

        if !self.gravity.is_finite() {
            return Err(LevelError::InvalidConfig("gravity must be finite".into()));
        }
        positive("timestep", self.timestep)?;
        positive("sphere_radius", self.sphere_radius)?;

        positive("drive.max_speed", self.drive.max_speed)?;
        positive("drive.acceleration", self.drive.acceleration)?;
        non_negative("drive.turn_speed", self.drive.turn_speed)?;
        non_negative("drive.friction", self.drive.friction)?;
        non_negative("drive.throttle_turn_factor", self.drive.throttle_turn_factor)?;
        non_negative("drive.coast_turn_factor", self.drive.coast_turn_factor)?;

        if !self.car.spawn.is_finite() {
            return Err(LevelError::InvalidConfig("car.spawn must be finite".into()));
        }
        positive("car.half_extents.x", self.car.half_extents.x)?;
        positive("car.half_extents.y", self.car.half_extents.y)?;
        positive("car.half_extents.z", self.car.half_extents.z)?;
        non_negative("car.additional_mass", self.car.additional_mass)?;
        non_negative("car.linear_damping", self.car.linear_damping)?;
        non_negative("car.angular_damping", self.car.angular_damping)?;
        non_negative("car.friction", self.car.friction)?;
        non_negative("car.restitution", self.car.restitution)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_shipped_level() {
        let config = LevelConfig::default();
        assert_eq!(config.gravity, Vec3::new(0.0, -9.81, 0.0));
        assert_eq!(config.drive.max_speed, 30.0);
        assert_eq!(config.drive.acceleration, 30.0);
        assert_eq!(config.drive.friction, 5.0);
        assert_eq!(config.car.spawn, Vec3::new(30.0, 0.25, 0.0));
        assert_eq!(config.car.half_extents, Vec3::new(0.5, 0.25, 1.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = LevelConfig::from_json_str(
            r#"{ "drive": { "max_speed": 12.0 }, "car": { "spawn": [0.0, 1.0, 0.0] } }"#,
        )
        .unwrap();
        assert_eq!(config.drive.max_speed, 12.0);
        assert_eq!(config.drive.acceleration, 30.0);
        assert_eq!(config.car.spawn, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(config.car.friction, 0.5);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = LevelConfig::from_json_str(r#"{ "drive": { "max_speed": 0.0 } }"#).unwrap_err();
        assert!(matches!(err, LevelError::InvalidConfig(_)));

        let mut config = LevelConfig::default();
        config.car.half_extents.y = -1.0;
        assert!(config.validate().is_err());

        let mut config = LevelConfig::default();
        config.timestep = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = LevelConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, LevelError::Json(_)));
    }

    #[test]
    fn test_json_roundtrip_through_file() {
        let path = std::env::temp_dir().join(format!(
            "ramp_rally_config_{}.json",
            std::process::id()
        ));
        let mut config = LevelConfig::default();
        config.drive.turn_speed = 2.0;
        std::fs::write(&path, config.to_json_pretty().unwrap()).unwrap();

        let loaded = LevelConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = LevelConfig::load("/definitely/not/here/level.json").unwrap_err();
        assert!(matches!(err, LevelError::Io(_)));
    }
}
