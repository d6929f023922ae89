// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use labyrinth_core::math::{Mat4, Vec3};
use tracing::info;

use crate::types::aabb::{Aabb, Bound};
use crate::types::axis::AxisMask;

/// A box in a local frame plus a name and a collided flag.
///
/// Conventions:
/// - An empty name marks a plain obstacle; named volumes are triggers or
///   player-controlled boxes.
/// - The volume stores no transform. [`BoundingVolume::world_box`] takes the
///   placement from the caller, and the pairwise queries compare the two
///   local boxes directly (both volumes are assumed to share a frame).
/// - The collided flag only changes through [`BoundingVolume::set_collided`].
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingVolume {
    local: Aabb,
    name: String,
    collided: bool,
}

impl BoundingVolume {
    /// Unnamed obstacle spanning corners `a` and `b` (ordered by squared length).
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self::named(a, b, String::new())
    }

    /// Named volume spanning corners `a` and `b`.
    pub fn named(a: Vec3, b: Vec3, name: impl Into<String>) -> Self {
        Self { local: Aabb::from_corners(a, b), name: name.into(), collided: false }
    }

    /// Box in the volume's own frame.
    pub fn local_box(&self) -> Aabb {
        self.local
    }

    /// Box placed in world space by `transform`.
    pub fn world_box(&self, transform: &Mat4) -> Aabb {
        self.local.transformed(transform)
    }

    /// Per-axis strict overlap with `other`.
    pub fn overlaps(&self, other: &Self) -> AxisMask {
        self.local.overlaps(&other.local)
    }

    /// `true` iff `overlaps(other)` holds on every axis.
    pub fn has_overlap(&self, other: &Self) -> bool {
        self.local.has_overlap(&other.local)
    }

    /// Per-axis containment of both corners of `other`.
    pub fn contains(&self, other: &Self) -> AxisMask {
        self.local.contains(&other.local)
    }

    /// Per-axis classification of `point` against this volume.
    pub fn bounds_point(&self, point: &Vec3) -> Bound {
        self.local.bounds_point(point)
    }

    /// Updates the collided flag.
    ///
    /// Returns `true` only on the false→true edge, which is also when the
    /// contact signal is emitted. Setting the current value again is a no-op.
    pub fn set_collided(&mut self, collided: bool) -> bool {
        let rising = collided && !self.collided;
        self.collided = collided;
        if rising {
            info!(volume = %self.label(), "volume collided");
        }
        rising
    }

    /// Current collided flag.
    pub fn is_collided(&self) -> bool {
        self.collided
    }

    /// Volume name; empty for obstacles.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `true` for unnamed volumes.
    pub fn is_obstacle(&self) -> bool {
        self.name.is_empty()
    }

    fn label(&self) -> &str {
        if self.is_obstacle() {
            "<obstacle>"
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collided_signal_fires_once_per_rising_edge() {
        let mut v = BoundingVolume::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        assert!(v.set_collided(true));
        assert!(!v.set_collided(true));
        assert!(v.is_collided());
        assert!(!v.set_collided(false));
        assert!(!v.is_collided());
        assert!(v.set_collided(true));
    }

    #[test]
    fn name_decides_obstacle_classification() {
        let wall = BoundingVolume::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        let button =
            BoundingVolume::named(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0), "button-0");
        assert!(wall.is_obstacle());
        assert!(!button.is_obstacle());
        assert_eq!(button.name(), "button-0");
    }

    #[test]
    fn world_box_uses_caller_transform() {
        let v = BoundingVolume::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        let placed = v.world_box(&Mat4::translation(0.0, 0.0, 3.0));
        assert_eq!(placed.min().to_array(), [0.0, 0.0, 3.0]);
        assert_eq!(v.local_box().min().to_array(), [0.0, 0.0, 0.0]);
    }
}
