// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persisted maze and agent settings.

use labyrinth_core::math::Vec3;
use labyrinth_maze::{ContactPolicy, DEFAULT_SAMPLING_ATTEMPTS};
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Config key the settings are stored under.
pub const SETTINGS_KEY: &str = "maze";

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 0x00c0_ffee;

/// Everything needed to generate a maze and walk an agent through it.
///
/// Missing fields in a stored file take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeSettings {
    /// Grid width in cells.
    pub width: u16,
    /// Grid height in cells.
    pub height: u16,
    /// Generator seed.
    pub seed: u64,
    /// Agent box half extent per axis.
    pub agent_half_extent: [f32; 3],
    /// Walking speed in cells per second.
    pub walk_speed: f32,
    /// Extra obstacles scattered over open cells.
    pub obstacles: usize,
    /// Named triggers scattered over open cells.
    pub triggers: usize,
    /// How collided flags are cleared.
    pub contact_policy: ContactPolicy,
    /// Retry budget for random open-cell sampling.
    pub sampling_attempts: u32,
}

impl Default for MazeSettings {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            seed: DEFAULT_SEED,
            agent_half_extent: [0.2, 0.2, 0.2],
            walk_speed: 2.0,
            obstacles: 10,
            triggers: 0,
            contact_policy: ContactPolicy::Latch,
            sampling_attempts: DEFAULT_SAMPLING_ATTEMPTS,
        }
    }
}

impl MazeSettings {
    /// Agent half extent as a vector.
    pub fn half_extent(&self) -> Vec3 {
        Vec3::from(self.agent_half_extent)
    }

    /// Rejects values the generator or resolver cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(invalid(
                "width/height",
                format!("{}x{} has a zero dimension", self.width, self.height),
            ));
        }
        if let Some(bad) =
            self.agent_half_extent.iter().find(|h| !h.is_finite() || **h <= 0.0)
        {
            return Err(invalid("agent_half_extent", format!("{bad} is not a positive size")));
        }
        if !self.walk_speed.is_finite() || self.walk_speed < 0.0 {
            return Err(invalid("walk_speed", format!("{} is not a usable speed", self.walk_speed)));
        }
        if self.sampling_attempts == 0 {
            return Err(invalid("sampling_attempts", "must allow at least one attempt".into()));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
