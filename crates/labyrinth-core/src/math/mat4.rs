// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::Vec3;

/// Column‑major 4×4 affine matrix used to place volumes in world space.
///
/// - Stored column‑major; translation occupies the last column.
/// - Points are transformed with `w = 1`, directions with `w = 0`; there is
///   no perspective divide.
///
/// # Examples
/// ```
/// use labyrinth_core::math::{Mat4, Vec3};
/// let t = Mat4::translation(5.0, -3.0, 2.0);
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    data: [f32; 16],
}

impl Mat4 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Builds a translation matrix.
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                tx, ty, tz, 1.0, // col 3 (translation)
            ],
        }
    }

    /// Builds a translation matrix from a vector offset.
    pub fn translation_by(offset: Vec3) -> Self {
        Self::translation(offset.x(), offset.y(), offset.z())
    }

    /// Builds a rotation about the +Y (up) axis by `angle` radians.
    ///
    /// Used for walking headings: yaw `0` walks along `+Z`, yaw `π/2` along `+X`.
    #[rustfmt::skip]
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            data: [
                c,   0.0, -s,  0.0,
                0.0, 1.0, 0.0, 0.0,
                s,   0.0, c,   0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    fn at(&self, row: usize, col: usize) -> f32 {
        self.data[col * 4 + row]
    }

    /// Transforms a point (`w = 1`).
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        let [x, y, z] = point.to_array();
        Vec3::new(
            self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z + self.at(0, 3),
            self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z + self.at(1, 3),
            self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z + self.at(2, 3),
        )
    }

    /// Transforms a direction (`w = 0`); translation is ignored.
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        let [x, y, z] = direction.to_array();
        Vec3::new(
            self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z,
            self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z,
            self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z,
        )
    }
}
