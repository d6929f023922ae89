// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![doc = r"Geometry primitives for Labyrinth.

This crate provides:
- Per-axis boolean masks (`AxisMask`) used to gate movement components.
- Axis-aligned boxes (`Aabb`) with per-axis overlap, containment and point
  classification.
- Bounding volumes (`BoundingVolume`): a local box plus a name and a collided
  flag that signals on its rising edge.

Design notes:
- Overlap is strict on faces: boxes that only touch do not overlap.
- Queries answer per axis; callers reduce with `all`/`any`/`&` as needed.
- Volumes own no transform. World placement is passed in per query.
"]

/// Foundational geometric types.
pub mod types;

pub use types::aabb::{Aabb, Bound, BoundAxis};
pub use types::axis::AxisMask;
pub use types::volume::BoundingVolume;
