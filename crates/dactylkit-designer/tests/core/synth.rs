use dactylkit_core::{GeometryError, Point3, TransformList};
use dactylkit_designer::shape::Node;
use dactylkit_designer::wall::synth::ring_links;
use dactylkit_designer::{
    DesignerError, Direction, WallParams, WallPoint, WallSequencer, WallSynthesizer,
};

use crate::support::flat_grid;

#[test]
fn test_wall_closes_the_ring() {
    let grid = flat_grid(3, 4, &[(2, 3)]);
    let sequence = WallSequencer::new(&grid).sequence().expect("sequence");
    let n = sequence.len();
    let wall = WallSynthesizer::default().build(&sequence).expect("wall");

    assert_eq!(wall.slices.len(), n);
    assert_eq!(wall.links.len(), n);
    assert!(wall.links.contains(&(n - 1, 0)));
    match wall.shape.node() {
        Node::Union(children) => assert_eq!(children.len(), 2 * n),
        other => panic!("expected union, got {other:?}"),
    }
}

#[test]
fn test_debug_slices_skip_hulling() {
    let grid = flat_grid(2, 3, &[]);
    let sequence = WallSequencer::new(&grid).sequence().expect("sequence");
    let params = WallParams {
        debug_slices: true,
        ..WallParams::default()
    };
    let wall = WallSynthesizer::new(params).build(&sequence).expect("wall");
    assert!(wall.links.is_empty());
    match wall.shape.node() {
        Node::Union(children) => {
            assert_eq!(children.len(), 2 * sequence.len());
            assert!(children.iter().all(|c| matches!(c.node(), Node::Hull(_))));
        }
        other => panic!("expected union, got {other:?}"),
    }
}

#[test]
fn test_extra_width_thickens_slice() {
    let synth = WallSynthesizer::default();
    let thin = WallPoint::new(TransformList::new(), Direction::Left);
    let thick = thin.clone().with_extra(0.0, 1.0);
    let a = synth.slice(&thin).expect("thin");
    let b = synth.slice(&thick).expect("thick");
    assert_eq!(a.outer, b.outer);
    assert!((a.inward - b.inward).norm() < 1e-12);
}

#[test]
fn test_extra_distance_pushes_out() {
    let synth = WallSynthesizer::default();
    let base = WallPoint::new(TransformList::new(), Direction::Down);
    let further = base.clone().with_extra(0.5, 0.0);
    let a = synth.slice(&base).expect("base").outer;
    let b = synth.slice(&further).expect("further").outer;
    assert!(b.y < a.y);
}

#[test]
fn test_inset_frame_is_applied_in_anchor_frame() {
    let synth = WallSynthesizer::default();
    let anchor = TransformList::new().rotate_z(90.0).translate(5.0, 5.0, 0.0);
    let point = WallPoint::new(anchor, Direction::Right);
    let slice = synth.slice(&point).expect("slice");
    // Local +X is world +Y after the quarter turn
    assert!(slice.outer.y > 5.0);
    assert!((slice.inward.y + 1.0).abs() < 1e-9);
}

#[test]
fn test_vertical_outward_direction_is_rejected() {
    let synth = WallSynthesizer::default();
    let sample = Point3::new(0.0, 0.0, synth.params().post_offset_z);
    let flat = WallPoint::new(TransformList::new(), Direction::Up);
    let local = synth.inset_frame(&flat).apply(sample) - sample;

    // Roll the anchor until the outward step is vertical
    let roll = local.y.atan2(local.z).to_degrees();
    let rolled = WallPoint::new(TransformList::new().rotate_x(roll), Direction::Up);
    match synth.slice(&rolled) {
        Err(DesignerError::Geometry(GeometryError::DegenerateVector { .. })) => {}
        other => panic!("expected degenerate vector, got {:?}", other.map(|s| s.outer)),
    }
}

#[test]
fn test_ring_links_for_small_rings() {
    assert!(ring_links(0).is_empty());
    assert_eq!(ring_links(2), vec![(0, 1), (1, 0)]);
}
