//! Physics module for Ramp Rally
//!
//! Thin layer over rapier. Integration, broad/narrow phase and contact
//! resolution all live in rapier; this module only owns the pipeline state,
//! tags bodies with their level role and buffers collision events.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! # Submodules
//!
//! - [`types`] - glam re-exports and glam <-> nalgebra conversions
//! - [`tags`] - [`BodyTag`] packed into rigid body `user_data`
//! - [`events`] - [`CollisionQueue`], the buffering event handler
//! - [`world`] - [`PhysicsWorld`], the pipeline owner

pub mod events;
pub mod tags;
pub mod types;
pub mod world;

pub use events::CollisionQueue;
pub use tags::BodyTag;
pub use types::{Quat, Vec3};
pub use world::{DEFAULT_TIMESTEP, PhysicsWorld};
