// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! Sliding response, trigger handling and contact policies.

use labyrinth_core::math::{Mat4, Vec3};
use labyrinth_geom::{Aabb, AxisMask};
use labyrinth_maze::{
    generate, CellGrid, CollisionResolver, ContactPolicy, LayoutBuilder, SpatialLayout, VolumeId,
};
use proptest::prelude::*;

const HALF: Vec3 = Vec3::new(0.2, 0.2, 0.2);

fn approx(a: Vec3, b: [f32; 3]) -> bool {
    a.to_array().iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-5)
}

/// Open 4x4 grid with one extra single-cell obstacle over cell (2, 2).
fn room_with_pillar() -> (SpatialLayout, VolumeId) {
    let mut builder = LayoutBuilder::new(CellGrid::open(4, 4).unwrap());
    let pillar = builder.push_obstacle(Vec3::new(1.5, -0.5, 1.5), Vec3::new(2.5, 0.5, 2.5));
    (builder.build(), pillar)
}

#[test]
fn walking_into_a_pillar_zeroes_only_the_approach_axis() {
    let (mut layout, pillar) = room_with_pillar();
    let resolver = CollisionResolver::default();
    let start = Vec3::new(1.0, 0.0, 2.0);

    let end = resolver.resolve(&mut layout, start, Vec3::new(1.0, 0.0, 0.0), HALF);
    assert!(approx(end, [1.0, 0.0, 2.0]));
    assert!(layout.is_collided(pillar));

    // A diagonal step keeps sliding along Z.
    let end = resolver.resolve(&mut layout, start, Vec3::new(1.0, 0.0, 0.1), HALF);
    assert!(approx(end, [1.0, 0.0, 2.1]));
}

#[test]
fn unobstructed_step_returns_the_projection() {
    let (mut layout, pillar) = room_with_pillar();
    let resolver = CollisionResolver::default();
    let step = resolver.probe(&layout, Vec3::new(1.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -0.2), HALF);
    assert!(step.obstacles.is_empty());
    assert!(!step.blocked());
    assert_eq!(step.position, step.projected);
    assert_eq!(step.free_axes, AxisMask::ALL);

    resolver.resolve(&mut layout, Vec3::new(1.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -0.2), HALF);
    assert!(!layout.is_collided(pillar));
}

#[test]
fn probe_leaves_flags_untouched() {
    let (layout, pillar) = room_with_pillar();
    let step = CollisionResolver::default().probe(
        &layout,
        Vec3::new(1.0, 0.0, 2.0),
        Vec3::new(1.0, 0.0, 0.0),
        HALF,
    );
    assert_eq!(step.obstacles, vec![pillar]);
    assert_eq!(step.free_axes, AxisMask::new(false, true, true));
    assert!(step.blocked());
    assert!(!layout.is_collided(pillar));
}

#[test]
fn outer_wall_stops_the_agent_at_the_edge() {
    let mut layout = SpatialLayout::build(CellGrid::open(4, 4).unwrap());
    let resolver = CollisionResolver::default();
    let start = Vec3::new(1.0, 0.0, 1.0);
    let end = resolver.resolve(&mut layout, start, Vec3::new(-0.5, 0.0, 0.0), HALF);
    assert!(approx(end, [1.0, 0.0, 1.0]));
    assert_eq!(layout.collided_ids().len(), 1);
}

/// Open 6x6 grid with an east wall and a north wall meeting at (3, 3).
fn inside_corner() -> (SpatialLayout, VolumeId, VolumeId) {
    let mut builder = LayoutBuilder::new(CellGrid::open(6, 6).unwrap());
    let east = builder.push_obstacle(Vec3::new(2.5, -0.5, 1.0), Vec3::new(3.5, 0.5, 3.0));
    let north = builder.push_obstacle(Vec3::new(1.0, -0.5, 2.5), Vec3::new(3.5, 0.5, 3.5));
    (builder.build(), east, north)
}

#[test]
fn corner_hit_keeps_only_axes_free_for_every_wall() {
    let (layout, east, north) = inside_corner();
    let start = Vec3::new(2.0, 0.0, 2.0);
    let before = Aabb::from_center_half_extents(start, HALF);

    // Each wall alone would let one axis through.
    let east_box = layout.world_box(east).unwrap();
    let north_box = layout.world_box(north).unwrap();
    assert_eq!(east_box.overlaps(&before), AxisMask::new(false, true, true));
    assert_eq!(north_box.overlaps(&before), AxisMask::new(true, true, false));

    let step =
        CollisionResolver::default().probe(&layout, start, Vec3::new(0.5, 0.0, 0.5), HALF);
    assert_eq!(step.obstacles, vec![east, north]);
    assert_eq!(step.free_axes, AxisMask::new(false, true, false));
    assert!(approx(step.position, [2.0, 0.0, 2.0]));
}

#[test]
fn single_wall_near_a_corner_still_slides() {
    let (layout, east, _) = inside_corner();
    let step = CollisionResolver::default().probe(
        &layout,
        Vec3::new(2.0, 0.0, 2.0),
        Vec3::new(0.5, 0.0, 0.1),
        HALF,
    );
    assert_eq!(step.obstacles, vec![east]);
    assert_eq!(step.free_axes, AxisMask::new(false, true, true));
    assert!(approx(step.position, [2.0, 0.0, 2.1]));
}

#[test]
fn triggers_flag_without_blocking() {
    let mut builder = LayoutBuilder::new(CellGrid::open(4, 4).unwrap());
    let button = builder.push_trigger(
        "button-0",
        Vec3::new(1.75, -0.5, 1.75),
        Vec3::new(2.25, 0.5, 2.25),
    );
    let mut layout = builder.build();
    let resolver = CollisionResolver::new(ContactPolicy::Latch);

    let step = resolver.resolve_detailed(
        &mut layout,
        Vec3::new(1.0, 0.0, 2.0),
        Vec3::new(1.0, 0.0, 0.0),
        HALF,
    );
    assert_eq!(step.triggers, vec![button]);
    assert!(step.obstacles.is_empty());
    assert!(approx(step.position, [2.0, 0.0, 2.0]));
    assert!(layout.is_collided(button));
}

#[test]
fn latch_keeps_flags_after_separation() {
    let (mut layout, pillar) = room_with_pillar();
    let resolver = CollisionResolver::new(ContactPolicy::Latch);
    let start = Vec3::new(1.0, 0.0, 2.0);

    let hit = resolver.probe(&layout, start, Vec3::new(1.0, 0.0, 0.0), HALF);
    assert_eq!(resolver.record_contacts(&mut layout, &hit), vec![pillar]);
    // Already set: no second rising edge.
    assert!(resolver.record_contacts(&mut layout, &hit).is_empty());

    resolver.resolve(&mut layout, start, Vec3::new(0.0, 0.0, -0.3), HALF);
    assert!(layout.is_collided(pillar));
    assert_eq!(layout.reset_contacts(), 1);
}

#[test]
fn clear_on_separation_drops_flags_once_apart() {
    let (mut layout, pillar) = room_with_pillar();
    let resolver = CollisionResolver::new(ContactPolicy::ClearOnSeparation);
    let start = Vec3::new(1.0, 0.0, 2.0);

    resolver.resolve(&mut layout, start, Vec3::new(1.0, 0.0, 0.0), HALF);
    assert!(layout.is_collided(pillar));

    resolver.resolve(&mut layout, start, Vec3::new(0.0, 0.0, -0.3), HALF);
    assert!(!layout.is_collided(pillar));
    assert!(layout.collided_ids().is_empty());
}

#[test]
fn placement_moves_the_volumes_with_it() {
    let (mut layout, pillar) = room_with_pillar();
    layout.set_placement(Mat4::translation(10.0, 0.0, 0.0));
    let resolver = CollisionResolver::default();

    // The old pillar location is empty space now.
    let free = resolver.probe(&layout, Vec3::new(1.0, 0.0, 2.0), Vec3::new(1.0, 0.0, 0.0), HALF);
    assert!(!free.obstacles.contains(&pillar));

    let start = Vec3::new(11.0, 0.0, 2.0);
    let end = resolver.resolve(&mut layout, start, Vec3::new(1.0, 0.0, 0.0), HALF);
    assert!(approx(end, [11.0, 0.0, 2.0]));
}

fn displacement() -> impl Strategy<Value = Vec3> {
    (-1.0f32..1.0, -0.1f32..0.1, -1.0f32..1.0).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn sliding_keeps_only_axes_that_overlapped_every_hit(
        seed in any::<u64>(),
        pick in any::<u64>(),
        jitter in (-0.3f32..0.3, -0.3f32..0.3),
        step in displacement(),
    ) {
        let grid = generate(12, 12, seed).unwrap();
        let layout = LayoutBuilder::new(grid).with_sampler_seed(pick).build();
        let cells: Vec<_> = layout.grid().open_cells().collect();
        prop_assume!(!cells.is_empty());
        let len = u64::try_from(cells.len()).unwrap();
        let (cx, cy) = cells[usize::try_from(pick % len).unwrap()];
        let position = Vec3::new(f32::from(cx) + jitter.0, 0.0, f32::from(cy) + jitter.1);

        let out = CollisionResolver::default().probe(&layout, position, step, HALF);
        let before = Aabb::from_center_half_extents(position, HALF);

        if out.obstacles.is_empty() {
            prop_assert_eq!(out.position, out.projected);
        }
        for axis in 0..3 {
            let overlapped: Vec<bool> = out
                .obstacles
                .iter()
                .map(|&id| layout.world_box(id).unwrap().overlaps(&before).get(axis))
                .collect();
            if out.free_axes.get(axis) {
                prop_assert!(overlapped.iter().all(|&o| o));
                prop_assert_eq!(out.position.component(axis), out.projected.component(axis));
            } else {
                prop_assert!(overlapped.iter().any(|&o| !o));
                prop_assert_eq!(out.position.component(axis), position.component(axis));
            }
        }
    }
}
