// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use labyrinth_app_core::settings::MazeSettings;
use labyrinth_maze::ContactPolicy;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate, inspect and walk seeded mazes")]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) overrides: Overrides,

    /// Directory holding `maze.json` (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub(crate) config_dir: Option<PathBuf>,

    /// Ignore stored settings and start from defaults
    #[arg(long, global = true)]
    pub(crate) no_config: bool,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) cmd: Command,
}

/// Per-run overrides applied on top of stored settings.
#[derive(Args, Debug, Default)]
pub(crate) struct Overrides {
    /// Grid width in cells
    #[arg(long, global = true)]
    pub(crate) width: Option<u16>,
    /// Grid height in cells
    #[arg(long, global = true)]
    pub(crate) height: Option<u16>,
    /// Generator seed
    #[arg(long, global = true)]
    pub(crate) seed: Option<u64>,
    /// Extra obstacles to scatter
    #[arg(long, global = true)]
    pub(crate) obstacles: Option<usize>,
    /// Named triggers to scatter
    #[arg(long, global = true)]
    pub(crate) triggers: Option<usize>,
    /// Walking speed in cells per second
    #[arg(long, global = true)]
    pub(crate) speed: Option<f32>,
    /// How collided flags clear
    #[arg(long, global = true, value_enum)]
    pub(crate) policy: Option<PolicyArg>,
}

impl Overrides {
    pub(crate) fn apply(&self, settings: &mut MazeSettings) {
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(seed) = self.seed {
            settings.seed = seed;
        }
        if let Some(obstacles) = self.obstacles {
            settings.obstacles = obstacles;
        }
        if let Some(triggers) = self.triggers {
            settings.triggers = triggers;
        }
        if let Some(speed) = self.speed {
            settings.walk_speed = speed;
        }
        if let Some(policy) = self.policy {
            settings.contact_policy = policy.into();
        }
    }
}

#[derive(ValueEnum, Debug, Copy, Clone)]
pub(crate) enum PolicyArg {
    /// Flags stay set until reset
    Latch,
    /// Flags clear once the agent moves off
    Clear,
}

impl From<PolicyArg> for ContactPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Latch => Self::Latch,
            PolicyArg::Clear => Self::ClearOnSeparation,
        }
    }
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Print the generated grid as ASCII
    Show,
    /// List every collision volume of the layout
    Layout {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Walk an agent through the maze and report each step
    Walk {
        /// Number of steps
        #[arg(long, default_value_t = 20)]
        steps: u32,
        /// Seconds per step
        #[arg(long, default_value_t = 0.1)]
        dt: f32,
        /// Initial heading in degrees about +Y (0 faces +Z)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        heading: f32,
        /// Heading change per step in degrees
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        turn: f32,
        /// Emit one JSON object per step
        #[arg(long)]
        json: bool,
    },
    /// Inspect or persist settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub(crate) enum ConfigAction {
    /// Print the effective settings as JSON
    Show,
    /// Store the effective settings
    Save,
    /// Print the settings file location
    Path,
}
