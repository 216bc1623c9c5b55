//! Game systems: stateless logic run once per frame.

pub mod collision_system;

pub use collision_system::{CollisionOutcome, CollisionSystem, Contact, classify_pair};
