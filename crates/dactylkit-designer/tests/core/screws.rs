use dactylkit_core::Point3;
use dactylkit_designer::screws::{hole_shape, holes, insert_shape, inserts, screw_locations};
use dactylkit_designer::shape::Node;
use dactylkit_designer::{
    CornerLocation, DesignerError, Direction, ScrewAnchor, ScrewParams, WallPointId,
    WallSequencer,
};

use crate::support::flat_grid;

#[test]
fn test_location_is_anchor_on_floor_plus_nudge() {
    let grid = flat_grid(3, 3, &[]);
    let sequence = WallSequencer::new(&grid).sequence().expect("sequence");
    let id = WallPointId::corner("k_0_0", CornerLocation::TopLeft, Direction::Up);
    let anchor = sequence.find(&id).expect("point").anchor.origin();

    let locations =
        screw_locations(&sequence, &[ScrewAnchor::new(id, 2.8, -0.5)]).expect("locations");
    assert_eq!(locations.len(), 1);
    let expected = Point3::new(anchor.x + 2.8, anchor.y - 0.5, 0.0);
    assert!((locations[0] - expected).norm() < 1e-9);
}

#[test]
fn test_unknown_anchor_is_an_error() {
    let grid = flat_grid(3, 3, &[]);
    let sequence = WallSequencer::new(&grid).sequence().expect("sequence");
    let id = WallPointId::corner("k_1_1", CornerLocation::TopLeft, Direction::Up);
    let err = screw_locations(&sequence, &[ScrewAnchor::new(id, 0.0, 0.0)])
        .expect_err("interior key has no wall point");
    assert!(matches!(err, DesignerError::ScrewAnchorNotFound { .. }));
}

#[test]
fn test_insert_is_drilled() {
    let insert = insert_shape(&ScrewParams::default());
    assert!(matches!(insert.node(), Node::Difference { .. }));
}

#[test]
fn test_hole_stops_inside_the_boss() {
    let params = ScrewParams::default();
    match hole_shape(&params).node() {
        Node::Cylinder { height, center: true, .. } => {
            let (bottom, top) = (-height / 2.0, height / 2.0);
            assert!(bottom < 0.0, "hole must pass through the floor");
            assert!(top < params.height, "hole top {top} breaks through the boss");
        }
        other => panic!("expected centered cylinder, got {other:?}"),
    }
}

#[test]
fn test_one_boss_and_hole_per_location() {
    let params = ScrewParams::default();
    let locations = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)];
    for shape in [inserts(&params, &locations), holes(&params, &locations)] {
        match shape.node() {
            Node::Union(children) => assert_eq!(children.len(), 2),
            other => panic!("expected union, got {other:?}"),
        }
    }
    assert!(inserts(&params, &[]).is_empty());
}
