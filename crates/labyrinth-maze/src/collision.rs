// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-axis sliding response against a [`SpatialLayout`].
//!
//! The agent is a box of fixed half extent. A step is accepted unchanged when
//! the projected box touches no blocking volume. Otherwise each axis survives
//! only if the pre-move box already overlapped every hit volume on that axis:
//! the axis that brought the boxes together is the one that gets zeroed.
//!
//! The test is discrete. Displacements longer than a volume are not swept and
//! may tunnel; contacts on an edge can zero two axes at once.

use labyrinth_core::math::Vec3;
use labyrinth_geom::{Aabb, AxisMask};
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::layout::{SpatialLayout, VolumeId};

/// How collided flags evolve across steps.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ContactPolicy {
    /// Flags stay set once raised; clear them with
    /// [`SpatialLayout::reset_contacts`].
    #[default]
    Latch,
    /// Flags drop as soon as a step no longer overlaps the volume.
    ClearOnSeparation,
}

/// Outcome of probing one step.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Corrected position.
    pub position: Vec3,
    /// Position the step asked for.
    pub projected: Vec3,
    /// Axes whose displacement survived.
    pub free_axes: AxisMask,
    /// Blocking volumes overlapped by the projected box.
    pub obstacles: Vec<VolumeId>,
    /// Non-blocking triggers overlapped by the projected box.
    pub triggers: Vec<VolumeId>,
}

impl Resolution {
    /// `true` when at least one displacement component was zeroed.
    pub fn blocked(&self) -> bool {
        !self.obstacles.is_empty() && !self.free_axes.all()
    }
}

/// Resolves agent steps against a layout's static volumes.
#[derive(Debug, Copy, Clone, Default)]
pub struct CollisionResolver {
    policy: ContactPolicy,
}

impl CollisionResolver {
    /// Creates a resolver with the given contact policy.
    pub fn new(policy: ContactPolicy) -> Self {
        Self { policy }
    }

    /// Active contact policy.
    pub fn policy(&self) -> ContactPolicy {
        self.policy
    }

    /// Computes the response to a step without touching any flag.
    pub fn probe(
        &self,
        layout: &SpatialLayout,
        position: Vec3,
        displacement: Vec3,
        half_extent: Vec3,
    ) -> Resolution {
        let projected = position.add(&displacement);
        let before = Aabb::from_center_half_extents(position, half_extent);
        let after = Aabb::from_center_half_extents(projected, half_extent);
        let placement = layout.placement();

        let mut free = AxisMask::ALL;
        let mut obstacles = Vec::new();
        let mut triggers = Vec::new();
        for (id, entry) in layout.iter() {
            let world = entry.volume().world_box(&placement);
            if !world.has_overlap(&after) {
                continue;
            }
            if entry.kind().blocks() {
                free &= world.overlaps(&before);
                obstacles.push(id);
            } else {
                triggers.push(id);
            }
        }

        if obstacles.is_empty() {
            return Resolution {
                position: projected,
                projected,
                free_axes: AxisMask::ALL,
                obstacles,
                triggers,
            };
        }

        let resolved = position.add(&free.keep(displacement));
        debug!(
            hits = obstacles.len(),
            free = ?free.to_array(),
            "step clipped"
        );
        Resolution { position: resolved, projected, free_axes: free, obstacles, triggers }
    }

    /// Resolves a step, updates collided flags and returns the new position.
    pub fn resolve(
        &self,
        layout: &mut SpatialLayout,
        position: Vec3,
        displacement: Vec3,
        half_extent: Vec3,
    ) -> Vec3 {
        self.resolve_detailed(layout, position, displacement, half_extent).position
    }

    /// [`CollisionResolver::resolve`], returning the full [`Resolution`].
    pub fn resolve_detailed(
        &self,
        layout: &mut SpatialLayout,
        position: Vec3,
        displacement: Vec3,
        half_extent: Vec3,
    ) -> Resolution {
        let resolution = self.probe(layout, position, displacement, half_extent);
        self.record_contacts(layout, &resolution);
        resolution
    }

    /// Applies a probed step's contacts to the layout's flags.
    ///
    /// Returns the volumes that went from clear to collided on this step.
    pub fn record_contacts(
        &self,
        layout: &mut SpatialLayout,
        resolution: &Resolution,
    ) -> Vec<VolumeId> {
        let hits: FxHashSet<VolumeId> =
            resolution.obstacles.iter().chain(&resolution.triggers).copied().collect();
        let mut rising = Vec::new();
        for &id in resolution.obstacles.iter().chain(&resolution.triggers) {
            if layout.set_collided(id, true) {
                rising.push(id);
            }
        }
        if self.policy == ContactPolicy::ClearOnSeparation {
            for id in layout.collided_ids() {
                if !hits.contains(&id) {
                    layout.set_collided(id, false);
                }
            }
        }
        rising
    }
}
