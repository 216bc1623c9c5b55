//! Level Module
//!
//! Builds the physics world for the arena and owns everything that lives in
//! it: static geometry, the car, collectibles and spheres.

pub mod geometry;
pub mod update;

use std::collections::HashMap;

use rapier3d::prelude::*;

use crate::error::LevelError;
use crate::input::DriveBindings;
use crate::physics::types::{to_isometry, to_vector};
use crate::physics::{BodyTag, CollisionQueue, PhysicsWorld};

use super::config::LevelConfig;
use super::vehicle::{self, CarState};

pub use geometry::{BoxDescriptor, BoxShape, LevelLayout, RampShape};
pub use update::FrameReport;

/// Walls and platforms are in collision group 1 and only interact with
/// group 1; every other collider uses the all/all default and so still hits
/// them.
fn static_groups() -> InteractionGroups {
    InteractionGroups::new(Group::GROUP_1, Group::GROUP_1)
}

/// A fully built level: physics world, car and dynamic object tables.
pub struct Level {
    pub(crate) config: LevelConfig,
    pub(crate) world: PhysicsWorld,
    pub(crate) events: CollisionQueue,
    pub(crate) car: RigidBodyHandle,
    pub(crate) layout: LevelLayout,
    pub(crate) collectibles: HashMap<u32, RigidBodyHandle>,
    pub(crate) next_collectible: u32,
    /// Indexed by sphere index; `None` once removed. Indices are never reused.
    pub(crate) spheres: Vec<Option<RigidBodyHandle>>,
}

impl Level {
    /// Validate `config` and build the world: ground, outer walls, platforms,
    /// ramps and the car at its spawn point.
    pub fn new(config: LevelConfig) -> Result<Self, LevelError> {
        config.validate()?;

        let mut world = PhysicsWorld::with_timestep(config.gravity, config.timestep);
        let mut layout = LevelLayout::default();

        spawn_ground(&mut world);

        for wall in geometry::outer_walls() {
            spawn_static_box(&mut world, &wall, BodyTag::Wall);
            layout.walls.push(wall.descriptor());
        }

        for platform in geometry::platforms() {
            spawn_static_box(&mut world, &platform, BodyTag::Platform);
            layout.platforms.push(platform.descriptor());
        }

        for ramp in geometry::ramps() {
            spawn_ramp(&mut world, &ramp);
            layout.ramps.push(ramp.descriptor());
        }

        let car = vehicle::spawn_car(&mut world, &config.car);

        log::debug!(
            "Level built: {} walls, {} platforms, {} ramps, {} bodies, {} colliders",
            layout.walls.len(),
            layout.platforms.len(),
            layout.ramps.len(),
            world.body_count(),
            world.collider_count()
        );

        Ok(Self {
            config,
            world,
            events: CollisionQueue::new(),
            car,
            layout,
            collectibles: HashMap::new(),
            next_collectible: 0,
            spheres: Vec::new(),
        })
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    pub fn bindings(&self) -> &DriveBindings {
        &self.config.bindings
    }

    /// Static geometry for renderers.
    pub fn layout(&self) -> &LevelLayout {
        &self.layout
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn car_handle(&self) -> RigidBodyHandle {
        self.car
    }

    /// Current car pose and motion without stepping the world.
    pub fn car_state(&self) -> CarState {
        vehicle::car_state(&self.world, self.car)
            .unwrap_or_else(|| CarState::at_rest(self.config.car.spawn))
    }
}

fn spawn_ground(world: &mut PhysicsWorld) {
    let body = world.insert_body(
        RigidBodyBuilder::fixed()
            .user_data(BodyTag::Ground.to_user_data())
            .build(),
    );
    let half = geometry::GROUND_HALF_EXTENTS;
    let collider = ColliderBuilder::cuboid(half.x, half.y, half.z)
        .friction(geometry::GROUND_FRICTION)
        .build();
    world.insert_collider(collider, Some(body));
}

/// Fixed body with a box collider. Walls keep the default friction; platforms
/// get platform friction. Both report collision events.
fn spawn_static_box(world: &mut PhysicsWorld, shape: &BoxShape, tag: BodyTag) -> RigidBodyHandle {
    let body = world.insert_body(
        RigidBodyBuilder::fixed()
            .translation(to_vector(shape.center))
            .user_data(tag.to_user_data())
            .build(),
    );

    let half = shape.half_extents;
    let mut collider = ColliderBuilder::cuboid(half.x, half.y, half.z)
        .collision_groups(static_groups())
        .active_events(ActiveEvents::COLLISION_EVENTS);
    collider = match tag {
        BodyTag::Platform => collider
            .friction(geometry::PLATFORM_FRICTION)
            .restitution(geometry::PLATFORM_RESTITUTION),
        _ => collider.restitution(geometry::WALL_RESTITUTION),
    };
    world.insert_collider(collider.build(), Some(body));
    body
}

/// Ramps are free colliders with no parent body.
fn spawn_ramp(world: &mut PhysicsWorld, shape: &RampShape) -> ColliderHandle {
    let half = shape.half_extents();
    let collider = ColliderBuilder::cuboid(half.x, half.y, half.z)
        .position(to_isometry(shape.center, shape.rotation()))
        .friction(geometry::RAMP_FRICTION)
        .restitution(geometry::RAMP_RESTITUTION)
        .build();
    world.insert_collider(collider, None)
}
