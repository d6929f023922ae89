// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Deterministic math helpers: vectors, affine matrices and a seeded
//! pseudo-random generator.
//!
//! All operations round to `f32`.

mod mat4;
mod prng;
mod vec3;

pub use mat4::Mat4;
pub use prng::Prng;
pub use vec3::Vec3;
