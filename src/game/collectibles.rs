//! Collectibles and Spheres
//!
//! Dynamic level content added by the host at runtime. Collectible cubes are
//! kinematic: they never move on their own and the car cannot push them.
//! Spheres are dynamic and disappear when they reach an outer wall.

use glam::Vec3;
use rapier3d::prelude::*;

use crate::error::LevelError;
use crate::physics::BodyTag;
use crate::physics::types::{from_vector, to_vector};

use super::level::Level;

/// Half extent of a collectible cube (a 2 x 2 x 2 m box).
pub const COLLECTIBLE_HALF_EXTENT: f32 = 1.0;

impl Level {
    /// Place a collectible cube centered at `position` and return its id.
    pub fn spawn_collectible(&mut self, position: Vec3) -> u32 {
        let id = self.next_collectible;
        self.next_collectible += 1;

        let body = RigidBodyBuilder::kinematic_position_based()
            .translation(to_vector(position))
            .user_data(BodyTag::Collectible(id).to_user_data())
            .build();
        let handle = self.world.insert_body(body);

        let h = COLLECTIBLE_HALF_EXTENT;
        let collider = ColliderBuilder::cuboid(h, h, h)
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build();
        self.world.insert_collider(collider, Some(handle));

        self.collectibles.insert(id, handle);
        log::debug!("Spawned collectible {id} at {position}");
        id
    }

    /// Remove a collectible, typically after the host has counted it.
    pub fn remove_collectible(&mut self, id: u32) -> Result<(), LevelError> {
        let handle = self
            .collectibles
            .remove(&id)
            .ok_or(LevelError::UnknownCollectible(id))?;
        self.world.remove_body(handle);
        Ok(())
    }

    pub fn collectible_position(&self, id: u32) -> Option<Vec3> {
        let handle = self.collectibles.get(&id)?;
        self.world
            .body(*handle)
            .map(|body| from_vector(body.translation()))
    }

    pub fn collectible_count(&self) -> usize {
        self.collectibles.len()
    }

    /// Launch a sphere from `position` with `velocity` and return its index.
    pub fn spawn_sphere(&mut self, position: Vec3, velocity: Vec3) -> u32 {
        let index = self.spheres.len() as u32;

        let body = RigidBodyBuilder::dynamic()
            .translation(to_vector(position))
            .linvel(to_vector(velocity))
            .user_data(BodyTag::Sphere(index).to_user_data())
            .build();
        let handle = self.world.insert_body(body);

        let collider = ColliderBuilder::ball(self.config.sphere_radius)
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build();
        self.world.insert_collider(collider, Some(handle));

        self.spheres.push(Some(handle));
        log::debug!("Spawned sphere {index} at {position}");
        index
    }

    /// Remove a sphere from the physics world.
    pub fn remove_sphere(&mut self, index: u32) -> Result<(), LevelError> {
        if self.take_sphere(index) {
            Ok(())
        } else {
            Err(LevelError::UnknownSphere(index))
        }
    }

    pub fn sphere_position(&self, index: u32) -> Option<Vec3> {
        let handle = (*self.spheres.get(index as usize)?)?;
        self.world
            .body(handle)
            .map(|body| from_vector(body.translation()))
    }

    /// Number of spheres still in the world.
    pub fn live_sphere_count(&self) -> usize {
        self.spheres.iter().filter(|slot| slot.is_some()).count()
    }

    /// Remove the sphere's body if it is still alive. Returns whether it was.
    pub(crate) fn take_sphere(&mut self, index: u32) -> bool {
        let handle = self
            .spheres
            .get_mut(index as usize)
            .and_then(|slot| slot.take());
        match handle {
            Some(handle) => self.world.remove_body(handle),
            None => false,
        }
    }
}
