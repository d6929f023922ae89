// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Subcommand implementations. Each writes to the given sink.

use std::io::Write;

use anyhow::Result;
use comfy_table::Table;
use labyrinth_app_core::session::MazeSession;
use labyrinth_app_core::settings::MazeSettings;
use labyrinth_config_fs::FsConfigStore;
use labyrinth_maze::{generate, SpatialLayout, VolumeKind};
use serde::Serialize;
use tracing::info;

pub(crate) struct WalkPlan {
    pub(crate) steps: u32,
    pub(crate) dt: f32,
    pub(crate) heading: f32,
    pub(crate) turn: f32,
    pub(crate) json: bool,
}

#[derive(Serialize)]
struct VolumeRow<'a> {
    id: usize,
    kind: &'static str,
    name: &'a str,
    min: [f32; 3],
    max: [f32; 3],
}

#[derive(Serialize)]
struct StepRow {
    step: u32,
    position: [f32; 3],
    blocked: bool,
    free_axes: [bool; 3],
    contacts: Vec<String>,
}

fn kind_label(kind: VolumeKind) -> &'static str {
    match kind {
        VolumeKind::Wall => "wall",
        VolumeKind::Boundary => "boundary",
        VolumeKind::Floor => "floor",
        VolumeKind::Obstacle => "obstacle",
        VolumeKind::Trigger => "trigger",
    }
}

pub(crate) fn show(out: &mut impl Write, settings: &MazeSettings) -> Result<()> {
    let grid = generate(settings.width, settings.height, settings.seed)?;
    write!(out, "{grid}")?;
    writeln!(
        out,
        "{}x{} seed={} open={} blocked={}",
        grid.width(),
        grid.height(),
        settings.seed,
        grid.open_count(),
        grid.blocked_count()
    )?;
    Ok(())
}

pub(crate) fn layout(out: &mut impl Write, settings: &MazeSettings, json: bool) -> Result<()> {
    let session = MazeSession::new(settings.clone())?;
    let layout: &SpatialLayout = session.layout();
    let rows: Vec<VolumeRow<'_>> = layout
        .iter()
        .map(|(id, entry)| {
            let b = entry.volume().local_box();
            VolumeRow {
                id: id.index(),
                kind: kind_label(entry.kind()),
                name: entry.volume().name(),
                min: b.min().to_array(),
                max: b.max().to_array(),
            }
        })
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &rows)?;
        writeln!(out)?;
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["id", "kind", "name", "min", "max"]);
    for row in &rows {
        table.add_row(vec![
            row.id.to_string(),
            row.kind.to_owned(),
            row.name.to_owned(),
            format!("{:?}", row.min),
            format!("{:?}", row.max),
        ]);
    }
    writeln!(out, "{table}")?;
    writeln!(out, "{} volumes", rows.len())?;
    Ok(())
}

pub(crate) fn walk(out: &mut impl Write, settings: &MazeSettings, plan: &WalkPlan) -> Result<()> {
    let mut session = MazeSession::new(settings.clone())?;
    session.set_heading(plan.heading.to_radians());
    let turn = plan.turn.to_radians();
    let start = session.position().to_array();
    if !plan.json {
        writeln!(out, "start {start:?}")?;
    }

    for step in 1..=plan.steps {
        let report = session.step(plan.dt);
        session.turn(turn);
        let contacts: Vec<String> = report
            .new_contacts
            .iter()
            .filter_map(|&id| session.layout().get(id))
            .map(|entry| match entry.volume().name() {
                "" => kind_label(entry.kind()).to_owned(),
                name => name.to_owned(),
            })
            .collect();
        let row = StepRow {
            step,
            position: report.resolution.position.to_array(),
            blocked: report.resolution.blocked(),
            free_axes: report.resolution.free_axes.to_array(),
            contacts,
        };
        if plan.json {
            serde_json::to_writer(&mut *out, &row)?;
            writeln!(out)?;
        } else {
            let flag = if row.blocked { " blocked" } else { "" };
            writeln!(out, "{:>4} {:?}{flag}", row.step, row.position)?;
            for name in &row.contacts {
                writeln!(out, "     hit {name}")?;
            }
        }
    }

    let collided = session.layout().collided_ids().len();
    info!(steps = plan.steps, collided, "walk finished");
    if !plan.json {
        writeln!(out, "end {:?} collided={collided}", session.position().to_array())?;
    }
    Ok(())
}

pub(crate) fn config_show(out: &mut impl Write, settings: &MazeSettings) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, settings)?;
    writeln!(out)?;
    Ok(())
}

pub(crate) fn config_path(out: &mut impl Write, store: &FsConfigStore) -> Result<()> {
    writeln!(out, "{}", store.path_for(labyrinth_app_core::settings::SETTINGS_KEY).display())?;
    Ok(())
}
