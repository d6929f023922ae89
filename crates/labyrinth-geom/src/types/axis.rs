// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{BitAnd, BitAndAssign};

use labyrinth_core::math::Vec3;

/// One boolean per spatial axis.
///
/// Produced by per-axis box queries and consumed by the collision resolver to
/// decide which displacement components survive a contact.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct AxisMask {
    /// X axis flag.
    pub x: bool,
    /// Y axis flag.
    pub y: bool,
    /// Z axis flag.
    pub z: bool,
}

impl AxisMask {
    /// Every axis set.
    pub const ALL: Self = Self::splat(true);

    /// No axis set.
    pub const NONE: Self = Self::splat(false);

    /// Creates a mask from individual flags.
    pub const fn new(x: bool, y: bool, z: bool) -> Self {
        Self { x, y, z }
    }

    /// Creates a mask with the same flag on every axis.
    pub const fn splat(flag: bool) -> Self {
        Self::new(flag, flag, flag)
    }

    /// `true` when every axis is set.
    pub const fn all(self) -> bool {
        self.x && self.y && self.z
    }

    /// `true` when at least one axis is set.
    pub const fn any(self) -> bool {
        self.x || self.y || self.z
    }

    /// Flag on `axis` (`0 = x`, `1 = y`, `2 = z`); other indices read `false`.
    pub const fn get(self, axis: usize) -> bool {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => false,
        }
    }

    /// Returns the flags as an array.
    pub const fn to_array(self) -> [bool; 3] {
        [self.x, self.y, self.z]
    }

    /// Keeps the components of `v` on set axes and zeroes the rest.
    pub fn keep(self, v: Vec3) -> Vec3 {
        let [x, y, z] = v.to_array();
        Vec3::new(
            if self.x { x } else { 0.0 },
            if self.y { y } else { 0.0 },
            if self.z { z } else { 0.0 },
        )
    }
}

impl From<[bool; 3]> for AxisMask {
    fn from([x, y, z]: [bool; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl BitAnd for AxisMask {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self::Output {
        Self::new(self.x & rhs.x, self.y & rhs.y, self.z & rhs.z)
    }
}

impl BitAndAssign for AxisMask {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}
