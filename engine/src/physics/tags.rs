//! Body Tags
//!
//! Identifies what a rigid body is in the level. The tag is packed into the
//! body's `user_data` so collision events can be classified from handles alone.

/// Role of a rigid body in the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyTag {
    Ground,
    /// Outer boundary wall; spheres are removed when they touch one.
    Wall,
    Platform,
    /// The player vehicle.
    Car,
    /// Collectible cube, carrying its collectible id.
    Collectible(u32),
    /// Dynamic sphere, carrying its index in the level's sphere table.
    Sphere(u32),
}

// Low byte: kind. Bits 32..64: collectible id or sphere index. Kind 0 is an untagged body.
const KIND_MASK: u128 = 0xFF;
const INDEX_SHIFT: u32 = 32;
const INDEX_MASK: u128 = 0xFFFF_FFFF;

const KIND_GROUND: u128 = 1;
const KIND_WALL: u128 = 2;
const KIND_PLATFORM: u128 = 3;
const KIND_CAR: u128 = 4;
const KIND_COLLECTIBLE: u128 = 5;
const KIND_SPHERE: u128 = 6;

impl BodyTag {
    /// Pack the tag into a rapier `user_data` value.
    pub fn to_user_data(self) -> u128 {
        let (kind, index) = match self {
            BodyTag::Ground => (KIND_GROUND, 0),
            BodyTag::Wall => (KIND_WALL, 0),
            BodyTag::Platform => (KIND_PLATFORM, 0),
            BodyTag::Car => (KIND_CAR, 0),
            BodyTag::Collectible(id) => (KIND_COLLECTIBLE, id),
            BodyTag::Sphere(index) => (KIND_SPHERE, index),
        };
        kind | ((index as u128) << INDEX_SHIFT)
    }

    /// Unpack a `user_data` value. Returns `None` for untagged bodies.
    pub fn from_user_data(data: u128) -> Option<Self> {
        let index = ((data >> INDEX_SHIFT) & INDEX_MASK) as u32;
        match data & KIND_MASK {
            KIND_GROUND => Some(BodyTag::Ground),
            KIND_WALL => Some(BodyTag::Wall),
            KIND_PLATFORM => Some(BodyTag::Platform),
            KIND_CAR => Some(BodyTag::Car),
            KIND_COLLECTIBLE => Some(BodyTag::Collectible(index)),
            KIND_SPHERE => Some(BodyTag::Sphere(index)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_body_has_no_tag() {
        assert_eq!(BodyTag::from_user_data(0), None);
        assert_eq!(BodyTag::from_user_data(0x7F), None);
    }

    #[test]
    fn test_index_survives_packing() {
        let tag = BodyTag::Sphere(u32::MAX);
        assert_eq!(BodyTag::from_user_data(tag.to_user_data()), Some(tag));

        let tag = BodyTag::Collectible(17);
        assert_eq!(BodyTag::from_user_data(tag.to_user_data()), Some(tag));
    }

    #[test]
    fn test_kinds_are_distinct() {
        let tags = [
            BodyTag::Ground,
            BodyTag::Wall,
            BodyTag::Platform,
            BodyTag::Car,
            BodyTag::Collectible(0),
            BodyTag::Sphere(0),
        ];
        for (i, a) in tags.iter().enumerate() {
            for b in &tags[i + 1..] {
                assert_ne!(a.to_user_data(), b.to_user_data());
            }
        }
    }
}
