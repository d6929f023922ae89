// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! labyrinth-core: deterministic float32 math and seeded randomness shared by
//! the maze generator, the spatial layout and the collision resolver.
//!
//! Nothing in this crate reads ambient state (clocks, thread RNGs, globals);
//! identical inputs always produce identical outputs.
#![forbid(unsafe_code)]

pub mod math;

pub use math::{Mat4, Prng, Vec3};
