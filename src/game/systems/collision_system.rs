//! Collision system: turns drained rapier collision events into gameplay
//! outcomes.
//!
//! Only two pairings matter to the level: the car touching a collectible and
//! a sphere touching an outer wall. Everything else (car on ground, sphere on
//! platform, ...) is resolved by the physics engine and ignored here.

use rapier3d::prelude::CollisionEvent;

use crate::physics::{BodyTag, PhysicsWorld};

/// Gameplay meaning of a single contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// The car touched the collectible with this id.
    Collected(u32),
    /// The sphere with this index touched an outer wall.
    SphereHitWall(u32),
}

/// Outcomes of one frame's collision events, deduplicated, in event order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionOutcome {
    pub collected: Vec<u32>,
    pub spheres_to_remove: Vec<u32>,
}

impl CollisionOutcome {
    pub fn is_empty(&self) -> bool {
        self.collected.is_empty() && self.spheres_to_remove.is_empty()
    }
}

/// Classify a pair of tags, in either order.
pub fn classify_pair(a: Option<BodyTag>, b: Option<BodyTag>) -> Option<Contact> {
    match (a?, b?) {
        (BodyTag::Car, BodyTag::Collectible(id)) | (BodyTag::Collectible(id), BodyTag::Car) => {
            Some(Contact::Collected(id))
        }
        (BodyTag::Sphere(index), BodyTag::Wall) | (BodyTag::Wall, BodyTag::Sphere(index)) => {
            Some(Contact::SphereHitWall(index))
        }
        _ => None,
    }
}

/// Stateless system mapping collision events to outcomes.
pub struct CollisionSystem;

impl CollisionSystem {
    /// Classify every *started* event against the world's body tags.
    ///
    /// Must run before any body named in `events` is removed; events whose
    /// colliders are already gone are skipped.
    pub fn resolve(world: &PhysicsWorld, events: &[CollisionEvent]) -> CollisionOutcome {
        let mut outcome = CollisionOutcome::default();

        for event in events.iter().filter(|event| event.started()) {
            let contact = classify_pair(
                world.tag_of_collider(event.collider1()),
                world.tag_of_collider(event.collider2()),
            );
            match contact {
                Some(Contact::Collected(id)) => {
                    if !outcome.collected.contains(&id) {
                        log::info!("The player has acquired collectible {id}");
                        outcome.collected.push(id);
                    }
                }
                Some(Contact::SphereHitWall(index)) => {
                    if !outcome.spheres_to_remove.contains(&index) {
                        log::info!("Sphere {index} collided with wall");
                        outcome.spheres_to_remove.push(index);
                    }
                }
                None => {}
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::Vec3;
    use rapier3d::prelude::{ColliderBuilder, ColliderHandle, CollisionEventFlags, RigidBodyBuilder};

    #[test]
    fn test_car_collectible_either_order() {
        assert_eq!(
            classify_pair(Some(BodyTag::Car), Some(BodyTag::Collectible(4))),
            Some(Contact::Collected(4))
        );
        assert_eq!(
            classify_pair(Some(BodyTag::Collectible(4)), Some(BodyTag::Car)),
            Some(Contact::Collected(4))
        );
    }

    #[test]
    fn test_sphere_wall_either_order() {
        assert_eq!(
            classify_pair(Some(BodyTag::Sphere(2)), Some(BodyTag::Wall)),
            Some(Contact::SphereHitWall(2))
        );
        assert_eq!(
            classify_pair(Some(BodyTag::Wall), Some(BodyTag::Sphere(2))),
            Some(Contact::SphereHitWall(2))
        );
    }

    #[test]
    fn test_irrelevant_pairs_ignored() {
        assert_eq!(classify_pair(Some(BodyTag::Car), Some(BodyTag::Ground)), None);
        assert_eq!(classify_pair(Some(BodyTag::Car), Some(BodyTag::Wall)), None);
        // Platforms are not walls: spheres bounce off them.
        assert_eq!(
            classify_pair(Some(BodyTag::Sphere(0)), Some(BodyTag::Platform)),
            None
        );
        assert_eq!(
            classify_pair(Some(BodyTag::Sphere(0)), Some(BodyTag::Collectible(0))),
            None
        );
        // Ramps have no parent body and therefore no tag.
        assert_eq!(classify_pair(Some(BodyTag::Car), None), None);
        assert_eq!(classify_pair(None, None), None);
    }

    fn tagged_collider(world: &mut PhysicsWorld, tag: BodyTag) -> ColliderHandle {
        let body = RigidBodyBuilder::fixed().user_data(tag.to_user_data()).build();
        let body = world.insert_body(body);
        world.insert_collider(ColliderBuilder::ball(0.5).build(), Some(body))
    }

    #[test]
    fn test_resolve_counts_started_events_once() {
        let mut world = PhysicsWorld::new(Vec3::ZERO);
        let wall = tagged_collider(&mut world, BodyTag::Wall);
        let sphere = tagged_collider(&mut world, BodyTag::Sphere(3));
        let flags = CollisionEventFlags::empty();

        let events = [
            CollisionEvent::Stopped(sphere, wall, flags),
            CollisionEvent::Started(sphere, wall, flags),
            CollisionEvent::Started(wall, sphere, flags),
        ];
        let outcome = CollisionSystem::resolve(&world, &events);
        assert_eq!(outcome.spheres_to_remove, vec![3]);
        assert!(outcome.collected.is_empty());
    }

    #[test]
    fn test_resolve_ignores_stopped_events() {
        let mut world = PhysicsWorld::new(Vec3::ZERO);
        let car = tagged_collider(&mut world, BodyTag::Car);
        let cube = tagged_collider(&mut world, BodyTag::Collectible(1));
        let flags = CollisionEventFlags::empty();

        let events = [CollisionEvent::Stopped(car, cube, flags)];
        assert!(CollisionSystem::resolve(&world, &events).is_empty());
    }

    #[test]
    fn test_resolve_keeps_event_order() {
        let mut world = PhysicsWorld::new(Vec3::ZERO);
        let car = tagged_collider(&mut world, BodyTag::Car);
        let second = tagged_collider(&mut world, BodyTag::Collectible(2));
        let first = tagged_collider(&mut world, BodyTag::Collectible(1));
        let flags = CollisionEventFlags::empty();

        let events = [
            CollisionEvent::Started(second, car, flags),
            CollisionEvent::Started(car, first, flags),
            CollisionEvent::Started(car, second, flags),
        ];
        let outcome = CollisionSystem::resolve(&world, &events);
        assert_eq!(outcome.collected, vec![2, 1]);
    }

    #[test]
    fn test_outcome_empty() {
        assert!(CollisionOutcome::default().is_empty());
    }
}
