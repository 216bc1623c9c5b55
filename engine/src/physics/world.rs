//! Physics World
//!
//! Owns every piece of rapier pipeline state for one level and exposes the
//! handful of operations the game needs: insert, remove, look up, step.

use rapier3d::prelude::*;

use super::events::CollisionQueue;
use super::tags::BodyTag;
use super::types::{Vec3, from_vector, to_vector};

/// Fixed simulation step used when none is configured (60 Hz).
pub const DEFAULT_TIMESTEP: f32 = 1.0 / 60.0;

/// Wrapper around the rapier pipeline and its body/collider sets.
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
    steps: u64,
}

impl PhysicsWorld {
    /// Create an empty world with the given gravity and a 60 Hz step.
    pub fn new(gravity: Vec3) -> Self {
        Self::with_timestep(gravity, DEFAULT_TIMESTEP)
    }

    /// Create an empty world with an explicit fixed step length (seconds).
    pub fn with_timestep(gravity: Vec3, timestep: f32) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = timestep;
        Self {
            gravity: to_vector(gravity),
            integration_parameters,
            pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            steps: 0,
        }
    }

    pub fn gravity(&self) -> Vec3 {
        from_vector(&self.gravity)
    }

    /// Length of one simulation step in seconds.
    pub fn timestep(&self) -> f32 {
        self.integration_parameters.dt
    }

    /// Number of steps taken since creation.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Advance the simulation by one fixed step, buffering collision events.
    pub fn step(&mut self, events: &CollisionQueue) {
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            events,
        );
        self.steps += 1;
    }

    pub fn insert_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.bodies.insert(body)
    }

    /// Insert a collider, attached to `parent` when given, free-standing otherwise.
    pub fn insert_collider(
        &mut self,
        collider: Collider,
        parent: Option<RigidBodyHandle>,
    ) -> ColliderHandle {
        match parent {
            Some(parent) => self
                .colliders
                .insert_with_parent(collider, parent, &mut self.bodies),
            None => self.colliders.insert(collider),
        }
    }

    /// Remove a body together with its colliders. Returns `false` if it was
    /// already gone.
    pub fn remove_body(&mut self, handle: RigidBodyHandle) -> bool {
        self.bodies
            .remove(
                handle,
                &mut self.island_manager,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            )
            .is_some()
    }

    pub fn body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle)
    }

    pub fn body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle)
    }

    pub fn collider(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.colliders.get(handle)
    }

    pub fn colliders(&self) -> impl Iterator<Item = (ColliderHandle, &Collider)> {
        self.colliders.iter()
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    /// Tag of a rigid body, if it has one.
    pub fn tag_of_body(&self, handle: RigidBodyHandle) -> Option<BodyTag> {
        self.bodies
            .get(handle)
            .and_then(|body| BodyTag::from_user_data(body.user_data))
    }

    /// Tag of the body a collider is attached to. Parentless colliders and
    /// colliders removed since the event was emitted yield `None`.
    pub fn tag_of_collider(&self, handle: ColliderHandle) -> Option<BodyTag> {
        self.colliders
            .get(handle)
            .and_then(|collider| collider.parent())
            .and_then(|parent| self.tag_of_body(parent))
    }
}
