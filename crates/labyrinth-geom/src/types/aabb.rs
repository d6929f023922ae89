// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::cmp::Ordering;

use labyrinth_core::math::{Mat4, Vec3};

use crate::types::axis::AxisMask;

/// Classification of one coordinate against one axis of a box.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BoundAxis {
    /// `coordinate >= min` on this axis.
    pub bottom: bool,
    /// `coordinate <= max` on this axis.
    pub top: bool,
}

impl BoundAxis {
    /// `true` when the coordinate lies inside `[min, max]`.
    pub const fn within(self) -> bool {
        self.bottom && self.top
    }
}

/// Classification of a point against all three axes of a box.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Bound {
    /// X axis classification.
    pub x: BoundAxis,
    /// Y axis classification.
    pub y: BoundAxis,
    /// Z axis classification.
    pub z: BoundAxis,
}

impl Bound {
    /// Per-axis "inside `[min, max]`" mask.
    pub const fn within(self) -> AxisMask {
        AxisMask::new(self.x.within(), self.y.within(), self.z.within())
    }
}

/// Axis-aligned box described by two corners.
///
/// Corner ordering:
/// - [`Aabb::from_corners`] picks the corner with the smaller squared length
///   as `min`. This is not a componentwise sort: corners such as
///   `(0, 5, 0)` and `(1, 0, 0)` produce a box whose `min.y > max.y`, and
///   such a box overlaps nothing on that axis. Ties on squared length fall
///   back to lexicographic order so argument order never matters.
/// - [`Aabb::from_center_half_extents`] builds a componentwise-sorted box
///   directly and is what moving agents use.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

impl Aabb {
    /// Constructs a box from two corners ordered by squared length.
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        let a_first = match a.length_squared().partial_cmp(&b.length_squared()) {
            Some(Ordering::Less) => true,
            Some(Ordering::Greater) => false,
            Some(Ordering::Equal) | None => a.lexicographic_cmp(&b) != Ordering::Greater,
        };
        if a_first {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Builds a box centred at `center` reaching `half_extents` along each axis.
    ///
    /// Negative half extents are taken by magnitude.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let [hx, hy, hz] = half_extents.to_array();
        let he = Vec3::new(hx.abs(), hy.abs(), hz.abs());
        Self { min: center.sub(&he), max: center.add(&he) }
    }

    /// The corner chosen as minimum.
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// The corner chosen as maximum.
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// `max - min` per axis; negative on axes where the ordering heuristic
    /// left the corners unsorted.
    pub fn extent(&self) -> Vec3 {
        self.max.sub(&self.min)
    }

    /// Per-axis strict overlap test.
    ///
    /// Axis `i` overlaps iff `self.max[i] > other.min[i] && other.max[i] > self.min[i]`.
    pub fn overlaps(&self, other: &Self) -> AxisMask {
        let axis = |i: usize| {
            self.max.component(i) > other.min.component(i)
                && other.max.component(i) > self.min.component(i)
        };
        AxisMask::new(axis(0), axis(1), axis(2))
    }

    /// `true` iff the boxes overlap on every axis.
    pub fn has_overlap(&self, other: &Self) -> bool {
        self.overlaps(other).all()
    }

    /// Classifies `point` against each axis (`point >= min`, `point <= max`).
    pub fn bounds_point(&self, point: &Vec3) -> Bound {
        let axis = |i: usize| BoundAxis {
            bottom: point.component(i) >= self.min.component(i),
            top: point.component(i) <= self.max.component(i),
        };
        Bound { x: axis(0), y: axis(1), z: axis(2) }
    }

    /// Per-axis containment: both corners of `other` lie in `[min, max]`.
    pub fn contains(&self, other: &Self) -> AxisMask {
        self.bounds_point(&other.min).within() & self.bounds_point(&other.max).within()
    }

    /// Returns the box with both corners run through `transform`.
    ///
    /// Only the two stored corners are transformed and their roles are kept,
    /// so rotations that swap axes can yield an unsorted box. Placement
    /// transforms are translations in practice.
    pub fn transformed(&self, transform: &Mat4) -> Self {
        Self {
            min: transform.transform_point(&self.min),
            max: transform.transform_point(&self.max),
        }
    }
}
