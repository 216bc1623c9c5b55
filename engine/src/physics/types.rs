//! Physics type re-exports and conversions
//!
//! The public API uses glam; rapier stores nalgebra types. These helpers are
//! the only place the two meet.

pub use glam::{Quat, Vec3};

use rapier3d::na::{Isometry3, Quaternion, Translation3, UnitQuaternion, Vector3};

/// glam vector to nalgebra vector.
pub fn to_vector(v: Vec3) -> Vector3<f32> {
    Vector3::new(v.x, v.y, v.z)
}

/// nalgebra vector to glam vector.
pub fn from_vector(v: &Vector3<f32>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

/// glam quaternion to a unit nalgebra quaternion (renormalized).
pub fn to_rotation(q: Quat) -> UnitQuaternion<f32> {
    UnitQuaternion::from_quaternion(Quaternion::new(q.w, q.x, q.y, q.z))
}

/// nalgebra unit quaternion to glam quaternion.
pub fn from_rotation(q: &UnitQuaternion<f32>) -> Quat {
    Quat::from_xyzw(q.i, q.j, q.k, q.w)
}

/// Build a rigid transform from a glam position and rotation.
pub fn to_isometry(position: Vec3, rotation: Quat) -> Isometry3<f32> {
    Isometry3::from_parts(
        Translation3::new(position.x, position.y, position.z),
        to_rotation(rotation),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_conversion_preserves_components() {
        let v = Vec3::new(1.5, -2.0, 3.25);
        let na = to_vector(v);
        assert_eq!((na.x, na.y, na.z), (1.5, -2.0, 3.25));
        assert_eq!(from_vector(&na), v);
    }

    #[test]
    fn test_rotation_conversion_matches_glam() {
        let q = Quat::from_rotation_y(0.7);
        let back = from_rotation(&to_rotation(q));
        assert!((back.x - q.x).abs() < 1e-6);
        assert!((back.y - q.y).abs() < 1e-6);
        assert!((back.z - q.z).abs() < 1e-6);
        assert!((back.w - q.w).abs() < 1e-6);

        // Both libraries must rotate a vector the same way.
        let v = Vec3::new(0.0, 0.0, -1.0);
        let glam_rotated = q * v;
        let na_rotated = to_rotation(q) * to_vector(v);
        assert!((glam_rotated - from_vector(&na_rotated)).length() < 1e-5);
    }

    #[test]
    fn test_isometry_translation() {
        let iso = to_isometry(Vec3::new(4.0, 5.0, 6.0), Quat::IDENTITY);
        assert_eq!(iso.translation.vector, Vector3::new(4.0, 5.0, 6.0));
    }
}
