// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Labyrinth CLI
//!
//! Generates seeded mazes, lists their collision volumes and walks an agent
//! through them with the sliding resolver.

#![forbid(unsafe_code)]

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use labyrinth_app_core::config::ConfigService;
use labyrinth_app_core::settings::{MazeSettings, SETTINGS_KEY};
use labyrinth_config_fs::FsConfigStore;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, ConfigAction};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = open_config(&cli);
    let mut settings: MazeSettings = match (&config, cli.no_config) {
        (Some(service), false) => service
            .load_or_default(SETTINGS_KEY)
            .context("loading stored settings")?,
        _ => MazeSettings::default(),
    };
    cli.overrides.apply(&mut settings);
    settings.validate().context("invalid settings")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.cmd {
        Command::Show => commands::show(&mut out, &settings),
        Command::Layout { json } => commands::layout(&mut out, &settings, json),
        Command::Walk { steps, dt, heading, turn, json } => {
            let plan = commands::WalkPlan { steps, dt, heading, turn, json };
            commands::walk(&mut out, &settings, &plan)
        }
        Command::Config { action } => match action {
            ConfigAction::Show => commands::config_show(&mut out, &settings),
            ConfigAction::Save => {
                let service = config.context("no config directory available")?;
                service.save(SETTINGS_KEY, &settings).context("saving settings")?;
                commands::config_path(&mut out, service.store())
            }
            ConfigAction::Path => {
                let service = config.context("no config directory available")?;
                commands::config_path(&mut out, service.store())
            }
        },
    }
}

/// Opens the settings store; failures degrade to running without one.
fn open_config(cli: &Cli) -> Option<ConfigService<FsConfigStore>> {
    let store = match &cli.config_dir {
        Some(dir) => FsConfigStore::at(dir),
        None => FsConfigStore::new(),
    };
    match store {
        Ok(store) => Some(ConfigService::new(store)),
        Err(err) => {
            warn!(%err, "config store unavailable; using defaults");
            None
        }
    }
}
