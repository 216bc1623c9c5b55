//! Level Geometry
//!
//! Hand-placed static geometry of the arena: ground, outer walls, raised
//! platforms and ramps. Sizes in the tables are half extents; the
//! [`BoxDescriptor`]s handed to renderers carry full extents.
//!
//! The arena is a 200 x 200 m square. Each quadrant holds a two-level
//! platform group reached by two level-1 ramps and one level-2 ramp, and four
//! elevated connectors run between the groups.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Half extents of the ground slab.
pub const GROUND_HALF_EXTENTS: Vec3 = Vec3::new(100.0, 0.1, 100.0);
pub const GROUND_FRICTION: f32 = 0.5;

pub const WALL_RESTITUTION: f32 = 0.3;
pub const PLATFORM_FRICTION: f32 = 0.5;
pub const PLATFORM_RESTITUTION: f32 = 0.3;

/// Ramps are nearly frictionless so the car does not stall on the incline.
pub const RAMP_FRICTION: f32 = 0.01;
pub const RAMP_RESTITUTION: f32 = 0.1;

pub const RAMP_WIDTH: f32 = 7.0;
pub const RAMP_THICKNESS: f32 = 0.1;
/// Length of the ground-to-level-1 ramps.
pub const RAMP_LENGTH: f32 = 44.5;
/// Length of the level-1-to-level-2 ramps.
pub const UPPER_RAMP_LENGTH: f32 = 35.0;

/// Incline of every ramp (radians): rise of 4 over a 30 m slope.
pub fn ramp_angle() -> f32 {
    (4.0_f32 / 30.0).asin()
}

/// A static box as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxDescriptor {
    pub position: Vec3,
    /// Full extents (twice the collider half extents)
    pub size: Vec3,
    pub rotation: Quat,
}

/// Every static box in the level, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub walls: Vec<BoxDescriptor>,
    pub platforms: Vec<BoxDescriptor>,
    pub ramps: Vec<BoxDescriptor>,
}

impl LevelLayout {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Axis-aligned static box: center and half extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShape {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl BoxShape {
    const fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    pub fn descriptor(&self) -> BoxDescriptor {
        BoxDescriptor {
            position: self.center,
            size: self.half_extents * 2.0,
            rotation: Quat::IDENTITY,
        }
    }
}

/// Which way a ramp is tilted by [`ramp_angle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tilt {
    PosX,
    NegX,
    PosZ,
    NegZ,
}

impl Tilt {
    pub fn rotation(self) -> Quat {
        let half = ramp_angle() / 2.0;
        let (s, c) = half.sin_cos();
        match self {
            Tilt::PosX => Quat::from_xyzw(s, 0.0, 0.0, c),
            Tilt::NegX => Quat::from_xyzw(-s, 0.0, 0.0, c),
            Tilt::PosZ => Quat::from_xyzw(0.0, 0.0, s, c),
            Tilt::NegZ => Quat::from_xyzw(0.0, 0.0, -s, c),
        }
    }
}

/// Horizontal axis a ramp's length runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RampAxis {
    X,
    Z,
}

/// A tilted ramp slab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampShape {
    pub center: Vec3,
    pub axis: RampAxis,
    pub length: f32,
    pub tilt: Tilt,
}

impl RampShape {
    const fn new(center: Vec3, axis: RampAxis, length: f32, tilt: Tilt) -> Self {
        Self {
            center,
            axis,
            length,
            tilt,
        }
    }

    pub fn half_extents(&self) -> Vec3 {
        let half_width = RAMP_WIDTH / 2.0;
        let half_thickness = RAMP_THICKNESS / 2.0;
        let half_length = self.length / 2.0;
        match self.axis {
            RampAxis::X => Vec3::new(half_length, half_thickness, half_width),
            RampAxis::Z => Vec3::new(half_width, half_thickness, half_length),
        }
    }

    pub fn rotation(&self) -> Quat {
        self.tilt.rotation()
    }

    pub fn descriptor(&self) -> BoxDescriptor {
        BoxDescriptor {
            position: self.center,
            size: self.half_extents() * 2.0,
            rotation: self.rotation(),
        }
    }
}

/// The four boundary walls.
pub fn outer_walls() -> [BoxShape; 4] {
    [
        BoxShape::new(Vec3::new(0.0, 2.5, 100.0), Vec3::new(100.0, 2.5, 0.5)),
        BoxShape::new(Vec3::new(0.0, 2.5, -100.0), Vec3::new(100.0, 2.5, 0.5)),
        BoxShape::new(Vec3::new(100.0, 2.5, 0.0), Vec3::new(0.5, 2.5, 100.0)),
        BoxShape::new(Vec3::new(-100.0, 2.5, 0.0), Vec3::new(0.5, 2.5, 100.0)),
    ]
}

/// Quadrant signs (x, z) of the four platform groups, in build order.
pub const PLATFORM_GROUPS: [(f32, f32); 4] = [(-1.0, 1.0), (1.0, -1.0), (-1.0, -1.0), (1.0, 1.0)];

/// Elevated connectors between the platform groups (west, east, north, south).
pub fn connectors() -> [BoxShape; 4] {
    [
        BoxShape::new(Vec3::new(-60.0, 6.95, 0.0), Vec3::new(5.0, 0.5, 45.0)),
        BoxShape::new(Vec3::new(60.0, 6.95, 0.0), Vec3::new(5.0, 0.5, 45.0)),
        BoxShape::new(Vec3::new(0.0, 6.95, -60.0), Vec3::new(45.0, 0.5, 5.0)),
        BoxShape::new(Vec3::new(0.0, 6.95, 60.0), Vec3::new(45.0, 0.5, 5.0)),
    ]
}

/// Level 1 block, its two additions, the level 2 block and the level 2
/// landing for the group in quadrant (`sx`, `sz`).
pub fn platform_group(sx: f32, sz: f32) -> [BoxShape; 5] {
    [
        BoxShape::new(Vec3::new(55.0 * sx, 0.5, 55.0 * sz), Vec3::new(20.0, 2.5, 20.0)),
        BoxShape::new(Vec3::new(31.5 * sx, 0.5, 66.25 * sz), Vec3::new(3.5, 2.5, 8.8)),
        BoxShape::new(Vec3::new(66.25 * sx, 0.5, 31.5 * sz), Vec3::new(8.8, 2.5, 3.5)),
        BoxShape::new(Vec3::new(55.0 * sx, 2.45, 55.0 * sz), Vec3::new(10.0, 5.0, 10.0)),
        BoxShape::new(
            Vec3::new(46.5 * sx, 7.425, 25.0 * sz),
            Vec3::new(RAMP_WIDTH / 2.0 + 5.0, 0.05, 7.6 / 2.0),
        ),
    ]
}

/// Connectors followed by every platform group.
pub fn platforms() -> Vec<BoxShape> {
    let mut specs = connectors().to_vec();
    for (sx, sz) in PLATFORM_GROUPS {
        specs.extend(platform_group(sx, sz));
    }
    specs
}

/// Every ramp, three per platform group: two from the ground to level 1 and
/// one from level 1 to level 2.
pub fn ramps() -> [RampShape; 12] {
    use RampAxis::{X, Z};
    use Tilt::{NegX, NegZ, PosX, PosZ};
    [
        // Group in quadrant (-x, +z)
        RampShape::new(Vec3::new(-31.5, 0.0, 35.5), Z, RAMP_LENGTH, NegX),
        RampShape::new(Vec3::new(-35.5, 0.0, 31.5), X, RAMP_LENGTH, NegZ),
        RampShape::new(Vec3::new(-41.5, 5.1, 46.0), Z, UPPER_RAMP_LENGTH, PosX),
        // Group in quadrant (+x, -z)
        RampShape::new(Vec3::new(31.5, 0.0, -35.5), Z, RAMP_LENGTH, PosX),
        RampShape::new(Vec3::new(35.5, 0.0, -31.5), X, RAMP_LENGTH, PosZ),
        RampShape::new(Vec3::new(41.5, 5.1, -46.0), Z, UPPER_RAMP_LENGTH, NegX),
        // Group in quadrant (-x, -z)
        RampShape::new(Vec3::new(-31.5, 0.0, -35.5), Z, RAMP_LENGTH, PosX),
        RampShape::new(Vec3::new(-35.5, 0.0, -31.5), X, RAMP_LENGTH, NegZ),
        RampShape::new(Vec3::new(-41.5, 5.1, -46.0), Z, UPPER_RAMP_LENGTH, NegX),
        // Group in quadrant (+x, +z)
        RampShape::new(Vec3::new(31.5, 0.0, 35.5), Z, RAMP_LENGTH, NegX),
        RampShape::new(Vec3::new(35.5, 0.0, 31.5), X, RAMP_LENGTH, PosZ),
        RampShape::new(Vec3::new(41.5, 5.1, 46.0), Z, UPPER_RAMP_LENGTH, PosX),
    ]
}
