// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::cmp::Ordering;

/// 3D vector used for points, displacements and half extents.
///
/// * Components are world-space units; one maze cell is one unit wide.
/// * The maze floor lies in the XZ plane: grid `x` maps to world `x`, grid
///   `y` maps to world `z`, and world `y` points up.
/// * Use [`crate::math::Mat4::transform_point`] for points and
///   [`crate::math::Mat4::transform_direction`] for displacements.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 3] {
        self.data
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component (up).
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// Component on `axis` (`0 = x`, `1 = y`, `2 = z`).
    ///
    /// # Panics
    /// Panics if `axis > 2`.
    pub fn component(&self, axis: usize) -> f32 {
        self.data[axis]
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.data[0] + other.data[0],
            self.data[1] + other.data[1],
            self.data[2] + other.data[2],
        )
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.data[0] - other.data[0],
            self.data[1] - other.data[1],
            self.data[2] - other.data[2],
        )
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(self.data[0] * scalar, self.data[1] * scalar, self.data[2] * scalar)
    }

    /// Squared magnitude; orders box corners without a square root.
    pub fn length_squared(&self) -> f32 {
        let [x, y, z] = self.data;
        x * x + y * y + z * z
    }

    /// Compares two vectors component by component (`x`, then `y`, then `z`).
    ///
    /// NaN components compare as equal so the ordering stays total for
    /// sorting purposes.
    pub fn lexicographic_cmp(&self, other: &Self) -> Ordering {
        for axis in 0..3 {
            match self.data[axis].partial_cmp(&other.data[axis]) {
                Some(Ordering::Equal) | None => {}
                Some(ord) => return ord,
            }
        }
        Ordering::Equal
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}
