// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for Labyrinth tools (config, settings, sessions).
//! Keeps CLI and future front-ends thin.

#![forbid(unsafe_code)]

pub mod config;
pub mod session;
pub mod settings;
