use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use dactylkit_designer::{GenerationOptions, Generator, OutputOptions, WallParams};

fn read_all(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    fs::read_dir(dir)
        .expect("output dir")
        .map(|entry| {
            let entry = entry.expect("entry");
            (
                entry.file_name().to_string_lossy().into_owned(),
                fs::read(entry.path()).expect("file"),
            )
        })
        .collect()
}

#[test]
fn test_run_writes_every_product() {
    let dir = tempfile::tempdir().expect("tempdir");
    let options = GenerationOptions::default().with_output_dir(dir.path());
    let report = Generator::new(options).run().expect("run");

    let names: Vec<String> = report
        .artifacts
        .iter()
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();
    assert_eq!(
        names,
        vec![
            "validate_01_bowl_keys.scad",
            "validate_02_bowl_grid.scad",
            "validate_03_bowl_walls.scad",
            "product_left.scad",
            "product_right.scad",
            "product_left_bottom.scad",
            "product_right_bottom.scad",
        ]
    );
    assert!(report.artifacts.iter().all(|p| p.exists()));
    assert_eq!(report.screw_locations.len(), 5);
    assert_eq!(report.key_count, 34);
    assert!(report.wall_points > 20);
}

#[test]
fn test_run_is_deterministic() {
    let first = tempfile::tempdir().expect("first");
    let second = tempfile::tempdir().expect("second");
    Generator::new(GenerationOptions::default().with_output_dir(first.path()))
        .run()
        .expect("first run");
    Generator::new(GenerationOptions::default().with_output_dir(second.path()))
        .run()
        .expect("second run");

    let a = read_all(first.path());
    let b = read_all(second.path());
    assert_eq!(a.keys().collect::<Vec<_>>(), b.keys().collect::<Vec<_>>());
    for (name, bytes) in &a {
        assert!(bytes == &b[name], "{name} differs between runs");
    }
}

#[test]
fn test_right_half_is_mirrored_left() {
    let dir = tempfile::tempdir().expect("tempdir");
    Generator::new(GenerationOptions::default().with_output_dir(dir.path()))
        .run()
        .expect("run");
    let left = fs::read_to_string(dir.path().join("product_left.scad")).expect("left");
    let right = fs::read_to_string(dir.path().join("product_right.scad")).expect("right");
    assert!(right.contains("mirror([1.0000, 0.0000, 0.0000])"));
    assert!(right.len() > left.len());
}

#[test]
fn test_minimal_output_with_debug_walls() {
    let dir = tempfile::tempdir().expect("tempdir");
    let options = GenerationOptions {
        output: OutputOptions {
            output_dir: dir.path().to_path_buf(),
            intermediate_artifacts: false,
            mirrored_half: false,
            bottom_plate: false,
            add_caps: true,
        },
        wall: WallParams {
            debug_slices: true,
            ..WallParams::default()
        },
        ..GenerationOptions::default()
    };
    let report = Generator::new(options).run().expect("run");
    assert_eq!(report.artifacts.len(), 1);
    assert!(dir.path().join("product_left.scad").exists());
    assert!(!dir.path().join("validate_01_bowl_keys.scad").exists());
}

#[test]
fn test_default_wall_turns_populated_corners() {
    let generator = Generator::new(GenerationOptions::default());
    let data = generator.key_data().expect("layout");
    let ids = generator.wall_sequence(&data).expect("wall").ids();
    for id in [
        "key_0_0_top_left_left",
        "key_0_0_top_left_up",
        "key_0_5_top_right_up",
        "key_0_5_top_right_right",
        "key_thumb_1_0_bottom_left_down",
        "key_thumb_1_0_bottom_left_left",
    ] {
        assert!(ids.iter().any(|x| x == id), "missing {id}");
    }
}
