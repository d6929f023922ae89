// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! labyrinth-maze: procedural maze grids and the spatial reasoning built on
//! top of them.
//!
//! Pipeline:
//! 1. [`MazeGenerator`] carves rectangular loops into a [`CellGrid`] from a
//!    seed.
//! 2. [`LayoutBuilder`] merges wall faces into as few boxes as possible and
//!    freezes them into a [`SpatialLayout`].
//! 3. [`CollisionResolver`] corrects an agent's per-step displacement against
//!    that layout with per-axis sliding.
#![forbid(unsafe_code)]

mod collision;
mod error;
mod generator;
mod grid;
mod layout;

pub use collision::{CollisionResolver, ContactPolicy, Resolution};
pub use error::{GridError, LayoutError};
pub use generator::{generate, loop_passes, MazeGenerator};
pub use grid::CellGrid;
pub use layout::{
    LayoutBuilder, LayoutVolume, SpatialLayout, VolumeId, VolumeKind, DEFAULT_SAMPLER_SEED,
    DEFAULT_SAMPLING_ATTEMPTS,
};
