use dactylkit_designer::screws::screw_locations;
use dactylkit_designer::{default_origin, splice, KeyData, SequencerOptions, WallSequencer};

fn data() -> KeyData {
    KeyData::new(default_origin()).expect("layout")
}

#[test]
fn test_seam_points_exist_in_both_rings() {
    let data = data();
    let seam = data.seam();
    for options in [
        SequencerOptions::default(),
        SequencerOptions {
            round_corners: false,
            ..SequencerOptions::default()
        },
        SequencerOptions {
            round_corners: true,
            dense: true,
            ..SequencerOptions::default()
        },
    ] {
        let bowl = WallSequencer::with_options(&data.bowl, options).sequence().expect("bowl");
        let thumb = WallSequencer::with_options(&data.thumb, options).sequence().expect("thumb");
        assert!(bowl.position(&seam.exit).is_some());
        assert!(bowl.position(&seam.reentry).is_some());
        assert!(thumb.position(&seam.entry).is_some());
        assert!(thumb.position(&seam.branch_exit).is_some());

        let spliced = splice(&bowl, &thumb, &seam).expect("splice");
        let locations = screw_locations(&spliced, &data.screw_anchors()).expect("screws");
        assert_eq!(locations.len(), 5);
        assert!(locations.iter().all(|p| p.z == 0.0));
    }
}

#[test]
fn test_bowl_ring_bridges_both_missing_corners() {
    let data = data();
    let ids = WallSequencer::new(&data.bowl).sequence().expect("bowl").ids();
    // 5x6 perimeter, one extra point per missing corner, one closing point
    // per populated corner
    assert_eq!(ids.len(), 2 * (5 + 6) - 4 + 2 + 2);
    for filler in [
        "key_0_0_top_left_left",
        "key_0_5_top_right_up",
        "key_3_5_bottom_right_right",
        "key_4_4_bottom_right_right",
        "key_4_4_bottom_right_down",
        "key_4_1_bottom_left_down",
        "key_3_0_bottom_left_down",
        "key_3_0_bottom_left_left",
    ] {
        assert!(ids.iter().any(|id| id == filler), "missing {filler}");
    }
}

#[test]
fn test_home_row_anchor_position() {
    let data = data();
    let anchor = data.key("key_2_3").expect("anchor");
    // Before the plate offset the anchor sits at origin + published position
    let mut raw = anchor.clone();
    raw.local_transforms = Default::default();
    let p = raw.position();
    assert!((p.x - (26.40 - 20.0)).abs() < 1e-9);
    assert!((p.y - (50.32 - 40.0)).abs() < 1e-9);
    assert!((p.z - (17.87 - 5.0 + 3.0)).abs() < 1e-9);
}

#[test]
fn test_column_neighbours_are_evenly_spaced() {
    let data = data();
    // Spacing is measured between switch tips, above the lowered plate frames
    let tip = |r: isize, c: isize| {
        data.bowl
            .get_key(r, c)
            .expect("bowl key")
            .transforms()
            .translate_front(0.0, 0.0, 10.0)
            .origin()
    };
    for c in 0..6 {
        let home = tip(2, c);
        let above = tip(1, c);
        let spacing = (above - home).norm();
        assert!(spacing > 18.0 && spacing < 18.05, "column {c}: {spacing}");
    }
}

#[test]
fn test_thumb_fills_missing_bowl_corner() {
    let data = data();
    let thumb = data.key("key_thumb_0_0").expect("thumb anchor");
    assert_eq!(thumb.parent_name.as_deref(), Some("key_4_4"));
    let neighbour = data.key("key_4_4").expect("key_4_4").position();
    let distance = (thumb.position() - neighbour).norm();
    assert!(distance > 15.0 && distance < 30.0, "{distance}");
}

#[test]
fn test_thumb_web_fans_under_last_bowl_row() {
    use dactylkit_designer::shape::Node;

    let web = data().connect_thumb().expect("thumb web");
    let Node::Union(children) = web.node() else {
        panic!("expected union, got {:?}", web.node());
    };
    // Key-to-key connectors hull four posts; only the fan hulls three
    let triangles = children
        .iter()
        .filter(|child| matches!(child.node(), Node::Hull(posts) if posts.len() == 3))
        .count();
    assert_eq!(triangles, 2);
}
