//! Collision Event Queue
//!
//! Collects rapier collision events during a step so the level can drain and
//! classify them afterwards.

use std::sync::{Mutex, PoisonError};

use rapier3d::prelude::*;

/// Event handler that buffers collision events until drained.
///
/// Contact-force events are ignored; only colliders with
/// `ActiveEvents::COLLISION_EVENTS` produce entries.
#[derive(Debug, Default)]
pub struct CollisionQueue {
    events: Mutex<Vec<CollisionEvent>>,
}

impl CollisionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every buffered event in emission order, leaving the queue empty.
    pub fn drain(&self) -> Vec<CollisionEvent> {
        let mut events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *events)
    }

    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventHandler for CollisionQueue {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        event: CollisionEvent,
        _contact_pair: Option<&ContactPair>,
    ) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }

    fn handle_contact_force_event(
        &self,
        _dt: Real,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: Real,
    ) {
    }
}
