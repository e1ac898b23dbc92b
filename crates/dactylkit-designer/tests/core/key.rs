use dactylkit_core::constants::{SWITCH_HORIZONTAL_OFFSET, SWITCH_TIP_OFFSET};
use dactylkit_core::{Point3, Transform};
use dactylkit_designer::{CornerLocation, Edge, Key};
use proptest::prelude::*;

fn close(a: Point3<f64>, b: Point3<f64>) -> bool {
    (a - b).norm() < 1e-6
}

fn tilted_key() -> Key {
    let mut key = Key::at("tilted", 12.0, -7.0, 30.0);
    key.configure(|k| {
        k.pose.rx = 12.0;
        k.pose.ry = -15.0;
        k.pose.rz = 8.0;
    });
    key
}

#[test]
fn test_unpadded_corners_form_square() {
    let key = tilted_key();
    let [tl, tr, br, bl] = key.corners(0.0).map(|t| t.origin());
    let side = 2.0 * SWITCH_HORIZONTAL_OFFSET;

    assert!(((tr - tl).norm() - side).abs() < 1e-6);
    assert!(((br - tr).norm() - side).abs() < 1e-6);
    assert!(((bl - br).norm() - side).abs() < 1e-6);
    assert!(((br - tl).norm() - side * 2f64.sqrt()).abs() < 1e-6);

    let center = Point3::from((tl.coords + tr.coords + br.coords + bl.coords) / 4.0);
    assert!(close(center, key.middle().origin()));
}

#[test]
fn test_corner_offset_pulls_inward() {
    let key = tilted_key();
    let outer = key.corner(CornerLocation::TopLeft, 0.0).origin();
    let inner = key.corner(CornerLocation::TopLeft, 1.0).origin();
    let center = key.middle().origin();
    assert!((outer - center).norm() > (inner - center).norm());
    assert!((((outer - inner).norm()) - 2f64.sqrt()).abs() < 1e-6);
}

#[test]
fn test_left_padding_moves_only_left_corners() {
    let d = 2.5;
    let key = tilted_key();
    let mut padded = tilted_key();
    padded.extra_width_left = d;

    let frame = key.switch_transforms();
    let local_left = frame.clone().translate_front(-1.0, 0.0, 0.0).origin() - frame.origin();

    for location in [CornerLocation::TopLeft, CornerLocation::BottomLeft] {
        let moved = padded.corner(location, 0.0).origin() - key.corner(location, 0.0).origin();
        assert!((moved - local_left * d).norm() < 1e-6, "{location:?} moved {moved:?}");
    }
    for location in [CornerLocation::TopRight, CornerLocation::BottomRight] {
        assert!(close(
            padded.corner(location, 0.0).origin(),
            key.corner(location, 0.0).origin()
        ));
    }
}

#[test]
fn test_midpoint_is_average_of_corners() {
    let mut key = tilted_key();
    key.extra_width_right = 3.0;
    key.extra_z = 2.0;
    let mid = key.edge_midpoint(Edge::Right).origin();
    let a = key.top_right().origin();
    let b = key.bottom_right().origin();
    assert!(close(mid, Point3::from((a.coords + b.coords) / 2.0)));
}

#[test]
fn test_extra_z_lowers_corners_in_key_frame() {
    let mut key = Key::at("flat", 0.0, 0.0, 0.0);
    key.disable_switch_z_offset = true;
    key.extra_z = 4.0;
    assert!((key.top_left().origin().z + 4.0).abs() < 1e-9);
}

#[test]
fn test_switch_frame_sits_below_tip() {
    let key = Key::at("tip", 0.0, 0.0, 0.0);
    assert!(close(key.middle().origin(), Point3::new(0.0, 0.0, -SWITCH_TIP_OFFSET)));
}

#[test]
fn test_local_transforms_apply_before_pose() {
    let mut key = Key::at("k", 10.0, 0.0, 0.0);
    key.pose.rz = 90.0;
    key.add_transform(Transform::translate(1.0, 0.0, 0.0));
    // Offset along local X, which the pose turns onto world Y
    assert!(close(key.position(), Point3::new(10.0, 1.0, 0.0)));
}

#[test]
fn test_pose_edits_are_visible_immediately() {
    let mut key = Key::at("k", 0.0, 0.0, 0.0);
    let before = key.position();
    key.configure(|k| {
        k.pose.x += 5.0;
    });
    assert!(close(key.position(), Point3::new(before.x + 5.0, before.y, before.z)));
}

proptest! {
    #[test]
    fn padding_widens_plate_by_exactly_its_amount(
        top in 0.0..8.0f64,
        right in 0.0..8.0f64,
        bottom in 0.0..8.0f64,
        left in 0.0..8.0f64,
    ) {
        let mut key = tilted_key();
        key.extra_width_top = top;
        key.extra_width_right = right;
        key.extra_width_bottom = bottom;
        key.extra_width_left = left;

        let [tl, tr, _, bl] = key.corners(0.0).map(|t| t.origin());
        let side = 2.0 * SWITCH_HORIZONTAL_OFFSET;
        prop_assert!(((tr - tl).norm() - (side + left + right)).abs() < 1e-6);
        prop_assert!(((bl - tl).norm() - (side + top + bottom)).abs() < 1e-6);
    }

    #[test]
    fn padding_leaves_the_plate_centre_alone(pad in 0.0..8.0f64) {
        let plain = tilted_key();
        let mut padded = tilted_key();
        padded.set_extra_width(pad);
        prop_assert!(close(padded.middle().origin(), plain.middle().origin()));
    }
}
