// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types used by the layout and the collision resolver.
//!
//! Determinism notes:
//! - All math is `f32` without fused multiply-add.
//! - Corner ordering at construction depends only on the two corners, never
//!   on argument order.

#[doc = "Axis-aligned boxes and point classification."]
pub mod aabb;
#[doc = "Three-component boolean masks."]
pub mod axis;
#[doc = "Named bounding volumes with collided state."]
pub mod volume;
