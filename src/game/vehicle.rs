//! Vehicle Module
//!
//! The player car: body construction and the arcade drive model that turns
//! drive keys into a target forward speed and yaw rate. The physics engine
//! does the rest (gravity, ramps, bumps); the drive model only overwrites the
//! horizontal velocity and the yaw rate each frame.

use glam::{Quat, Vec3};
use rapier3d::prelude::*;
use serde::{Deserialize, Serialize};

use crate::input::DriveKeys;
use crate::physics::types::{from_rotation, from_vector, to_vector};
use crate::physics::{BodyTag, PhysicsWorld};

use super::config::{CarConfig, DriveConfig};

/// Local forward axis of the car (-Z).
pub const CAR_FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);

/// Snapshot of the car's pose and motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarState {
    pub position: Vec3,
    pub rotation: Quat,
    pub velocity: Vec3,
    /// Horizontal (XZ) speed in m/s, for the HUD
    pub display_speed: f32,
}

impl CarState {
    /// Car at rest at `position` facing -Z.
    pub fn at_rest(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            display_speed: 0.0,
        }
    }

    fn from_body(body: &RigidBody) -> Self {
        let velocity = from_vector(body.linvel());
        Self {
            position: from_vector(body.translation()),
            rotation: from_rotation(body.rotation()),
            velocity,
            display_speed: horizontal_speed(velocity),
        }
    }
}

/// Insert the car body and its box collider into the world.
pub fn spawn_car(world: &mut PhysicsWorld, config: &CarConfig) -> RigidBodyHandle {
    let body = RigidBodyBuilder::dynamic()
        .translation(to_vector(config.spawn))
        .additional_mass(config.additional_mass)
        .linear_damping(config.linear_damping)
        .angular_damping(config.angular_damping)
        .user_data(BodyTag::Car.to_user_data())
        .build();
    let handle = world.insert_body(body);

    let half = config.half_extents;
    let collider = ColliderBuilder::cuboid(half.x, half.y, half.z)
        .friction(config.friction)
        .restitution(config.restitution)
        .active_events(ActiveEvents::COLLISION_EVENTS)
        .build();
    world.insert_collider(collider, Some(handle));
    handle
}

/// Read the car's current state, or `None` if the handle is stale.
pub fn car_state(world: &PhysicsWorld, car: RigidBodyHandle) -> Option<CarState> {
    world.body(car).map(CarState::from_body)
}

/// World-space forward direction for a car rotation.
pub fn forward_direction(rotation: Quat) -> Vec3 {
    rotation * CAR_FORWARD
}

/// Speed along `forward`, ignoring vertical velocity. Negative when reversing.
pub fn signed_speed(forward: Vec3, velocity: Vec3) -> f32 {
    forward.dot(Vec3::new(velocity.x, 0.0, velocity.z))
}

pub fn horizontal_speed(velocity: Vec3) -> f32 {
    (velocity.x * velocity.x + velocity.z * velocity.z).sqrt()
}

/// Speed after one frame of input.
///
/// Forward throttle wins over reverse. With no throttle, friction pulls the
/// speed towards zero without crossing it.
pub fn next_speed(speed: f32, keys: &DriveKeys, delta: f32, config: &DriveConfig) -> f32 {
    if keys.forward {
        (speed + config.acceleration * delta).min(config.max_speed)
    } else if keys.backward {
        (speed - config.acceleration * delta).max(-config.max_speed)
    } else if speed > 0.0 {
        (speed - config.friction * delta).max(0.0)
    } else if speed < 0.0 {
        (speed + config.friction * delta).min(0.0)
    } else {
        0.0
    }
}

/// Yaw rate (rad/s, positive turns left) for the held steering keys.
///
/// Steering is sharper while a throttle key is held.
pub fn turn_rate(keys: &DriveKeys, config: &DriveConfig) -> f32 {
    let factor = if keys.any_throttle() {
        config.throttle_turn_factor
    } else {
        config.coast_turn_factor
    };
    if keys.left {
        config.turn_speed * factor
    } else if keys.right {
        -config.turn_speed * factor
    } else {
        0.0
    }
}

/// Write the drive model's velocities into the car body.
///
/// Horizontal velocity is replaced by `forward * speed`; vertical velocity is
/// kept so gravity and ramps still act. Angular velocity is replaced by a pure
/// yaw. Both writes wake the body.
pub fn apply_drive(body: &mut RigidBody, keys: &DriveKeys, delta: f32, config: &DriveConfig) {
    let velocity = from_vector(body.linvel());
    let forward = forward_direction(from_rotation(body.rotation()));
    let speed = next_speed(signed_speed(forward, velocity), keys, delta, config);

    let planar = forward * speed;
    body.set_linvel(vector![planar.x, velocity.y, planar.z], true);
    body.set_angvel(vector![0.0, turn_rate(keys, config), 0.0], true);
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn keys(w: bool, a: bool, s: bool, d: bool) -> DriveKeys {
        DriveKeys::from_wasd(w, a, s, d)
    }

    #[test]
    fn test_forward_direction_identity_is_negative_z() {
        assert_eq!(forward_direction(Quat::IDENTITY), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_forward_direction_after_left_turn() {
        // Positive yaw turns left: -Z rotates towards -X.
        let forward = forward_direction(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
        assert!((forward - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_signed_speed_ignores_vertical() {
        let forward = CAR_FORWARD;
        assert_eq!(signed_speed(forward, Vec3::new(0.0, -50.0, -4.0)), 4.0);
        assert_eq!(signed_speed(forward, Vec3::new(3.0, 0.0, 2.0)), -2.0);
    }

    #[test]
    fn test_accelerate_and_cap() {
        let config = DriveConfig::default();
        let speed = next_speed(0.0, &keys(true, false, false, false), 0.1, &config);
        assert!((speed - 3.0).abs() < 1e-5);

        let speed = next_speed(29.9, &keys(true, false, false, false), 0.1, &config);
        assert_eq!(speed, config.max_speed);
    }

    #[test]
    fn test_reverse_and_cap() {
        let config = DriveConfig::default();
        let speed = next_speed(0.0, &keys(false, false, true, false), 0.1, &config);
        assert!((speed + 3.0).abs() < 1e-5);

        let speed = next_speed(-29.9, &keys(false, false, true, false), 0.1, &config);
        assert_eq!(speed, -config.max_speed);
    }

    #[test]
    fn test_forward_wins_over_reverse() {
        let config = DriveConfig::default();
        let speed = next_speed(5.0, &keys(true, false, true, false), 0.1, &config);
        assert!((speed - 8.0).abs() < 1e-5);
    }

    #[test]
    fn test_coasting_friction_stops_at_zero() {
        let config = DriveConfig::default();
        let idle = DriveKeys::new();

        let speed = next_speed(10.0, &idle, 0.1, &config);
        assert!((speed - 9.5).abs() < 1e-5);

        assert_eq!(next_speed(0.2, &idle, 0.1, &config), 0.0);
        assert_eq!(next_speed(-0.2, &idle, 0.1, &config), 0.0);
        assert!((next_speed(-10.0, &idle, 0.1, &config) + 9.5).abs() < 1e-5);
        assert_eq!(next_speed(0.0, &idle, 0.1, &config), 0.0);
    }

    #[test]
    fn test_turn_rate_factors() {
        let config = DriveConfig::default();
        assert_eq!(turn_rate(&keys(false, true, false, false), &config), 0.5);
        assert_eq!(turn_rate(&keys(false, false, false, true), &config), -0.5);
        assert_eq!(turn_rate(&keys(true, true, false, false), &config), 1.5);
        assert_eq!(turn_rate(&keys(false, false, true, true), &config), -1.5);
        // Left wins when both steering keys are held.
        assert_eq!(turn_rate(&keys(false, true, false, true), &config), 0.5);
        assert_eq!(turn_rate(&DriveKeys::new(), &config), 0.0);
    }

    #[test]
    fn test_horizontal_speed() {
        assert_eq!(horizontal_speed(Vec3::new(3.0, 100.0, 4.0)), 5.0);
    }

    #[test]
    fn test_apply_drive_keeps_vertical_velocity() {
        let config = DriveConfig::default();
        let mut body = RigidBodyBuilder::dynamic()
            .linvel(vector![0.0, -2.0, -10.0])
            .build();

        apply_drive(&mut body, &keys(true, true, false, false), DT, &config);

        let linvel = body.linvel();
        assert!((linvel.z + 10.5).abs() < 1e-4);
        assert!(linvel.x.abs() < 1e-6);
        assert_eq!(linvel.y, -2.0);
        assert_eq!(body.angvel().y, 1.5);
    }

    #[test]
    fn test_spawned_car_matches_config() {
        let mut world = PhysicsWorld::new(Vec3::new(0.0, -9.81, 0.0));
        let config = CarConfig::default();
        let car = spawn_car(&mut world, &config);

        assert_eq!(world.tag_of_body(car), Some(BodyTag::Car));
        let state = car_state(&world, car).unwrap();
        assert_eq!(state, CarState::at_rest(config.spawn));
        assert_eq!(world.collider_count(), 1);
    }
}
