// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Static collision volumes derived from a [`CellGrid`].
//!
//! Coordinates: cell `(x, y)` is centred on world `(x, 0, y)` and spans one
//! unit; walls occupy `y ∈ [-0.5, 0.5]` and the floor slab sits below them.

use labyrinth_core::math::{Mat4, Prng, Vec3};
use labyrinth_geom::{Aabb, BoundingVolume};
use tracing::{debug, info};

use crate::error::LayoutError;
use crate::grid::CellGrid;

/// Default retry budget for open-cell rejection sampling.
pub const DEFAULT_SAMPLING_ATTEMPTS: u32 = 4096;

/// Default seed of the layout's private sampling PRNG.
pub const DEFAULT_SAMPLER_SEED: u64 = 0x6c61_6279_7269_6e74;

const HALF_CELL: f32 = 0.5;
const WALL_BOTTOM: f32 = -0.5;
const WALL_TOP: f32 = 0.5;
const FLOOR_BOTTOM: f32 = -2.0;
const SCATTER_LOW: Vec3 = Vec3::new(-0.2, 0.0, -0.2);
const SCATTER_HIGH: Vec3 = Vec3::new(0.2, 1.0, 0.5);
const TRIGGER_HALF_EXTENTS: Vec3 = Vec3::new(0.25, 0.5, 0.25);

/// Index of a volume inside its [`SpatialLayout`], in insertion order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VolumeId(usize);

impl VolumeId {
    /// Position in [`SpatialLayout::volumes`].
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Role of a volume in the layout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VolumeKind {
    /// Merged run of wall faces.
    Wall,
    /// Outer boundary strip along the negative-x edge.
    Boundary,
    /// Floor slab under the whole grid.
    Floor,
    /// Extra obstacle placed during the build.
    Obstacle,
    /// Named trigger: records contacts but never blocks movement.
    Trigger,
}

impl VolumeKind {
    /// `true` for kinds that take part in the sliding response.
    pub const fn blocks(self) -> bool {
        !matches!(self, Self::Trigger)
    }
}

/// A volume together with its role.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutVolume {
    kind: VolumeKind,
    volume: BoundingVolume,
}

impl LayoutVolume {
    /// Role of the volume.
    pub fn kind(&self) -> VolumeKind {
        self.kind
    }

    /// The volume itself.
    pub fn volume(&self) -> &BoundingVolume {
        &self.volume
    }
}

/// Single open-cell run along one grid line.
#[derive(Debug, Default)]
struct Run {
    start: Option<u16>,
}

impl Run {
    /// Feeds cell `i`; returns `(start, end)` when an active run closes at `i`.
    fn step(&mut self, i: u16, face: bool) -> Option<(u16, u16)> {
        match (self.start, face) {
            (None, true) => {
                self.start = Some(i);
                None
            }
            (Some(start), false) => {
                self.start = None;
                Some((start, i - 1))
            }
            _ => None,
        }
    }

    /// Closes a run still active at the end of the line.
    fn flush(&mut self, last: u16) -> Option<(u16, u16)> {
        self.start.take().map(|start| (start, last))
    }
}

/// Box spanning cells `(x0, z0)..=(x1, z1)`, inset half a cell on each side.
fn cell_span(x0: u16, z0: u16, x1: u16, z1: u16) -> BoundingVolume {
    BoundingVolume::new(
        Vec3::new(f32::from(x0) - HALF_CELL, WALL_BOTTOM, f32::from(z0) - HALF_CELL),
        Vec3::new(f32::from(x1) + HALF_CELL, WALL_TOP, f32::from(z1) + HALF_CELL),
    )
}

/// Local centre of cell `(x, y)` on the walking plane.
fn cell_center(x: u16, y: u16) -> Vec3 {
    Vec3::new(f32::from(x), 0.0, f32::from(y))
}

/// Emits one box per maximal run of open cells that face a blocked neighbour.
///
/// Rows are scanned for faces toward `y + 1` ("front") and `y - 1` ("back"),
/// columns for faces toward `x + 1` and `x - 1`. Neighbours outside the grid
/// count as blocked.
fn merge_walls(grid: &CellGrid) -> Vec<BoundingVolume> {
    let (width, height) = (grid.width(), grid.height());
    let open = |x: u16, y: u16| !grid.is_blocked_at(i32::from(x), i32::from(y));
    let mut out = Vec::new();

    for y in 0..height {
        let (mut front, mut back) = (Run::default(), Run::default());
        let (yi, row) = (i32::from(y), |(x0, x1): (u16, u16)| cell_span(x0, y, x1, y));
        for x in 0..width {
            let xi = i32::from(x);
            let cell_open = open(x, y);
            if let Some(span) = front.step(x, cell_open && grid.is_blocked_at(xi, yi + 1)) {
                out.push(row(span));
            }
            if let Some(span) = back.step(x, cell_open && grid.is_blocked_at(xi, yi - 1)) {
                out.push(row(span));
            }
        }
        out.extend(front.flush(width - 1).map(row));
        out.extend(back.flush(width - 1).map(row));
    }

    for x in 0..width {
        let (mut front, mut back) = (Run::default(), Run::default());
        let (xi, column) = (i32::from(x), |(y0, y1): (u16, u16)| cell_span(x, y0, x, y1));
        for y in 0..height {
            let yi = i32::from(y);
            let cell_open = open(x, y);
            if let Some(span) = front.step(y, cell_open && grid.is_blocked_at(xi + 1, yi)) {
                out.push(column(span));
            }
            if let Some(span) = back.step(y, cell_open && grid.is_blocked_at(xi - 1, yi)) {
                out.push(column(span));
            }
        }
        out.extend(front.flush(height - 1).map(column));
        out.extend(back.flush(height - 1).map(column));
    }

    debug!(walls = out.len(), cells = grid.cell_count(), "merged wall runs");
    out
}

fn sample_open_cell(
    grid: &CellGrid,
    open_cells: usize,
    prng: &mut Prng,
    max_attempts: u32,
) -> Result<(u16, u16), LayoutError> {
    if open_cells == 0 {
        return Err(LayoutError::NoOpenCell);
    }
    for _ in 0..max_attempts {
        let index = prng.next_index(grid.cell_count());
        if grid.is_open_index(index) {
            if let Some(cell) = grid.coords(index) {
                return Ok(cell);
            }
        }
    }
    Err(LayoutError::SamplingExhausted { attempts: max_attempts })
}

/// Accumulates volumes for a [`SpatialLayout`].
///
/// [`LayoutBuilder::new`] emits the merged walls, the outer boundary and the
/// floor; obstacles and triggers can be appended before [`LayoutBuilder::build`]
/// freezes the set.
#[derive(Debug, Clone)]
pub struct LayoutBuilder {
    grid: CellGrid,
    open_cells: usize,
    volumes: Vec<LayoutVolume>,
    sampler: Prng,
    max_attempts: u32,
}

impl LayoutBuilder {
    /// Starts a layout for `grid` with walls, boundary and floor in place.
    pub fn new(grid: CellGrid) -> Self {
        let width = f32::from(grid.width());
        let height = f32::from(grid.height());
        let mut volumes: Vec<LayoutVolume> = merge_walls(&grid)
            .into_iter()
            .map(|volume| LayoutVolume { kind: VolumeKind::Wall, volume })
            .collect();
        volumes.push(LayoutVolume {
            kind: VolumeKind::Boundary,
            volume: BoundingVolume::new(
                Vec3::new(-1.0 - HALF_CELL, WALL_BOTTOM, -HALF_CELL),
                Vec3::new(-HALF_CELL, WALL_TOP, height + HALF_CELL),
            ),
        });
        volumes.push(LayoutVolume {
            kind: VolumeKind::Floor,
            volume: BoundingVolume::new(
                Vec3::new(-HALF_CELL, FLOOR_BOTTOM, -HALF_CELL),
                Vec3::new(width + HALF_CELL, WALL_BOTTOM, height + HALF_CELL),
            ),
        });
        Self {
            open_cells: grid.open_count(),
            grid,
            volumes,
            sampler: Prng::from_seed_u64(DEFAULT_SAMPLER_SEED),
            max_attempts: DEFAULT_SAMPLING_ATTEMPTS,
        }
    }

    /// Reseeds the PRNG used for scattering and open-cell sampling.
    pub fn with_sampler_seed(mut self, seed: u64) -> Self {
        self.sampler = Prng::from_seed_u64(seed);
        self
    }

    /// Sets the rejection-sampling retry budget (at least one attempt).
    pub fn with_sampling_budget(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    fn push(&mut self, kind: VolumeKind, volume: BoundingVolume) -> VolumeId {
        let id = VolumeId(self.volumes.len());
        self.volumes.push(LayoutVolume { kind, volume });
        id
    }

    /// Appends an unnamed obstacle spanning corners `a` and `b`.
    pub fn push_obstacle(&mut self, a: Vec3, b: Vec3) -> VolumeId {
        self.push(VolumeKind::Obstacle, BoundingVolume::new(a, b))
    }

    /// Appends a named trigger spanning corners `a` and `b`.
    ///
    /// An empty name is replaced with `trigger-<id>` so the volume never
    /// classifies as an obstacle.
    pub fn push_trigger(&mut self, name: impl Into<String>, a: Vec3, b: Vec3) -> VolumeId {
        let mut name = name.into();
        if name.is_empty() {
            name = format!("trigger-{}", self.volumes.len());
        }
        self.push(VolumeKind::Trigger, BoundingVolume::named(a, b, name))
    }

    /// Places `count` small obstacles on random open cells.
    pub fn scatter_obstacles(&mut self, count: usize) -> Result<Vec<VolumeId>, LayoutError> {
        let mut ids = Vec::with_capacity(count);
        for _ in 0..count {
            let (x, y) = self.sample()?;
            let pos = cell_center(x, y);
            ids.push(self.push_obstacle(pos.add(&SCATTER_LOW), pos.add(&SCATTER_HIGH)));
        }
        Ok(ids)
    }

    /// Places `count` triggers named `button-<n>` on random open cells.
    pub fn scatter_triggers(&mut self, count: usize) -> Result<Vec<VolumeId>, LayoutError> {
        let mut ids = Vec::with_capacity(count);
        for n in 0..count {
            let (x, y) = self.sample()?;
            let pos = cell_center(x, y);
            ids.push(self.push_trigger(
                format!("button-{n}"),
                pos.sub(&TRIGGER_HALF_EXTENTS),
                pos.add(&TRIGGER_HALF_EXTENTS),
            ));
        }
        Ok(ids)
    }

    fn sample(&mut self) -> Result<(u16, u16), LayoutError> {
        sample_open_cell(&self.grid, self.open_cells, &mut self.sampler, self.max_attempts)
    }

    /// Freezes the volume set.
    pub fn build(self) -> SpatialLayout {
        info!(
            width = self.grid.width(),
            height = self.grid.height(),
            volumes = self.volumes.len(),
            open_cells = self.open_cells,
            "spatial layout built"
        );
        SpatialLayout {
            grid: self.grid,
            open_cells: self.open_cells,
            volumes: self.volumes,
            placement: Mat4::identity(),
            sampler: self.sampler,
            max_attempts: self.max_attempts,
        }
    }
}

/// Frozen set of static volumes derived from a grid.
///
/// No volume is added, removed or reshaped after [`LayoutBuilder::build`].
/// What may still change: per-volume collided flags, the placement transform
/// and the state of the private sampling PRNG.
#[derive(Debug, Clone)]
pub struct SpatialLayout {
    grid: CellGrid,
    open_cells: usize,
    volumes: Vec<LayoutVolume>,
    placement: Mat4,
    sampler: Prng,
    max_attempts: u32,
}

impl SpatialLayout {
    /// Builds a layout with only walls, boundary and floor.
    pub fn build(grid: CellGrid) -> Self {
        LayoutBuilder::new(grid).build()
    }

    /// Starts a builder for `grid`.
    pub fn builder(grid: CellGrid) -> LayoutBuilder {
        LayoutBuilder::new(grid)
    }

    /// Source grid.
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// All volumes in insertion order.
    pub fn volumes(&self) -> &[LayoutVolume] {
        &self.volumes
    }

    /// Number of volumes.
    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    /// `true` when the layout holds no volume (never the case after a build).
    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    /// Volume by id.
    pub fn get(&self, id: VolumeId) -> Option<&LayoutVolume> {
        self.volumes.get(id.0)
    }

    /// Volumes paired with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (VolumeId, &LayoutVolume)> + '_ {
        self.volumes.iter().enumerate().map(|(i, v)| (VolumeId(i), v))
    }

    /// Ids of every volume of `kind`.
    pub fn ids_of(&self, kind: VolumeKind) -> impl Iterator<Item = VolumeId> + '_ {
        self.iter().filter(move |(_, v)| v.kind == kind).map(|(id, _)| id)
    }

    /// Transform placing the layout in world space.
    pub fn placement(&self) -> Mat4 {
        self.placement
    }

    /// Replaces the placement transform.
    pub fn set_placement(&mut self, placement: Mat4) {
        self.placement = placement;
    }

    /// World-space box of volume `id`.
    pub fn world_box(&self, id: VolumeId) -> Option<Aabb> {
        self.get(id).map(|v| v.volume.world_box(&self.placement))
    }

    /// A uniformly random open cell, found by bounded rejection sampling.
    pub fn random_open_cell(&mut self) -> Result<(u16, u16), LayoutError> {
        sample_open_cell(&self.grid, self.open_cells, &mut self.sampler, self.max_attempts)
    }

    /// World-space centre of a random open cell.
    pub fn random_open_position(&mut self) -> Result<Vec3, LayoutError> {
        let (x, y) = self.random_open_cell()?;
        Ok(self.placement.transform_point(&cell_center(x, y)))
    }

    /// Translates the layout so a random open cell sits at `anchor`.
    ///
    /// Returns the chosen cell.
    pub fn anchor_random_cell(&mut self, anchor: Vec3) -> Result<(u16, u16), LayoutError> {
        let (x, y) = self.random_open_cell()?;
        self.placement = Mat4::translation_by(anchor.sub(&cell_center(x, y)));
        info!(x, y, anchor = ?anchor.to_array(), "layout anchored");
        Ok((x, y))
    }

    /// Sets the collided flag of `id`; `true` only on a false→true edge.
    ///
    /// Unknown ids are ignored and report `false`.
    pub fn set_collided(&mut self, id: VolumeId, collided: bool) -> bool {
        self.volumes.get_mut(id.0).is_some_and(|v| v.volume.set_collided(collided))
    }

    /// Collided flag of `id`; unknown ids read `false`.
    pub fn is_collided(&self, id: VolumeId) -> bool {
        self.get(id).is_some_and(|v| v.volume.is_collided())
    }

    /// Ids of every volume currently flagged collided.
    pub fn collided_ids(&self) -> Vec<VolumeId> {
        self.iter().filter(|(_, v)| v.volume.is_collided()).map(|(id, _)| id).collect()
    }

    /// Clears every collided flag; returns how many were set.
    pub fn reset_contacts(&mut self) -> usize {
        let mut cleared = 0;
        for entry in &mut self.volumes {
            if entry.volume.is_collided() {
                entry.volume.set_collided(false);
                cleared += 1;
            }
        }
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_closes_on_first_non_face_cell() {
        let mut run = Run::default();
        assert_eq!(run.step(0, false), None);
        assert_eq!(run.step(1, true), None);
        assert_eq!(run.step(2, true), None);
        assert_eq!(run.step(3, false), Some((1, 2)));
        assert_eq!(run.flush(9), None);
        assert_eq!(run.step(4, true), None);
        assert_eq!(run.flush(9), Some((4, 9)));
    }

    #[test]
    fn cell_span_is_inset_half_a_cell() {
        let b = cell_span(1, 2, 3, 2).local_box();
        assert_eq!(b.min().to_array(), [0.5, -0.5, 1.5]);
        assert_eq!(b.max().to_array(), [3.5, 0.5, 2.5]);
    }

    #[test]
    fn origin_cell_span_resolves_tie_toward_negative_corner() {
        let b = cell_span(0, 0, 0, 0).local_box();
        assert_eq!(b.min().to_array(), [-0.5, -0.5, -0.5]);
        assert_eq!(b.max().to_array(), [0.5, 0.5, 0.5]);
    }
}
