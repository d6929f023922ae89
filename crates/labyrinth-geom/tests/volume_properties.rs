// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! Property tests for bounding-volume queries: symmetry, self-overlap and
//! constructor order independence.

use labyrinth_core::math::Vec3;
use labyrinth_geom::{Aabb, AxisMask, BoundingVolume};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f32> {
    (-1.0e3f32..1.0e3).prop_filter("finite", |v| v.is_finite())
}

fn point() -> impl Strategy<Value = Vec3> {
    prop::array::uniform3(coord()).prop_map(Vec3::from)
}

fn sorted_box() -> impl Strategy<Value = Aabb> {
    (point(), prop::array::uniform3(0.01f32..50.0))
        .prop_map(|(center, half)| Aabb::from_center_half_extents(center, Vec3::from(half)))
}

proptest! {
    #[test]
    fn overlap_is_symmetric(a in point(), b in point(), c in point(), d in point()) {
        let va = BoundingVolume::new(a, b);
        let vb = BoundingVolume::new(c, d);
        prop_assert_eq!(va.has_overlap(&vb), vb.has_overlap(&va));
        prop_assert_eq!(va.overlaps(&vb), vb.overlaps(&va));
    }

    #[test]
    fn positive_extent_overlaps_itself(v in sorted_box()) {
        prop_assert_eq!(v.overlaps(&v), AxisMask::ALL);
        prop_assert!(v.has_overlap(&v));
        prop_assert_eq!(v.contains(&v), AxisMask::ALL);
    }

    #[test]
    fn constructor_argument_order_is_irrelevant(a in point(), b in point()) {
        let forward = BoundingVolume::new(a, b);
        let backward = BoundingVolume::new(b, a);
        prop_assert_eq!(forward.local_box(), backward.local_box());
    }
}

#[test]
fn nested_box_is_contained_but_not_containing() {
    let outer = BoundingVolume::new(Vec3::new(-2.0, -2.0, -2.0), Vec3::new(2.0, 2.0, 2.0));
    let inner = BoundingVolume::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
    assert_eq!(outer.contains(&inner), AxisMask::ALL);
    assert_eq!(inner.contains(&outer), AxisMask::NONE);
    assert!(outer.has_overlap(&inner));
}
