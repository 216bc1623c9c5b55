//! Per-frame update: input to velocity, one physics step, collision
//! bookkeeping.

use serde::{Deserialize, Serialize};

use crate::input::DriveKeys;

use super::Level;
use crate::game::systems::CollisionSystem;
use crate::game::vehicle::{self, CarState};

/// Everything the host needs after a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    #[serde(flatten)]
    pub car: CarState,
    /// Spheres removed from the physics world this frame (their indices)
    pub spheres_removed: Vec<u32>,
    /// True if the car touched any collectible this frame
    pub collected: bool,
    /// Ids of the collectibles touched this frame
    pub collected_ids: Vec<u32>,
    /// Physics steps taken since the level was built
    pub step: u64,
}

impl Level {
    /// Advance the level by one frame.
    ///
    /// `delta` (seconds) drives the speed model only; the physics world always
    /// advances by its fixed step. Non-finite or negative deltas count as 0.
    pub fn update(&mut self, delta: f32, keys: &DriveKeys) -> FrameReport {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };

        if let Some(body) = self.world.body_mut(self.car) {
            vehicle::apply_drive(body, keys, delta, &self.config.drive);
        }

        self.world.step(&self.events);

        let events = self.events.drain();
        let outcome = CollisionSystem::resolve(&self.world, &events);

        let mut spheres_removed = Vec::with_capacity(outcome.spheres_to_remove.len());
        for index in outcome.spheres_to_remove {
            if self.take_sphere(index) {
                log::info!("Removing sphere at index {index} from physics world");
                spheres_removed.push(index);
            }
        }

        FrameReport {
            car: self.car_state(),
            spheres_removed,
            collected: !outcome.collected.is_empty(),
            collected_ids: outcome.collected,
            step: self.world.steps(),
        }
    }
}
