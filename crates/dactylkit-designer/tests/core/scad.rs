use std::fs;

use dactylkit_designer::{hull, ScadRenderer, Shape};

fn sample() -> Shape {
    hull([
        Shape::cube(0.1, 0.1, 0.1).translate(1.0, -2.0, 3.5),
        Shape::cylinder(5.0, 2.2, 30).rotate(0.0, -15.0, 0.0),
    ])
    .projection()
    .linear_extrude(1.5)
    .mirror_x()
}

#[test]
fn test_write_creates_parent_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("sample.scad");
    sample().write_to_file(&path).expect("write");
    let text = fs::read_to_string(&path).expect("read back");
    assert_eq!(text, ScadRenderer::default().render(&sample()));
}

#[test]
fn test_output_has_no_run_specific_content() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = dir.path().join("a.scad");
    let b = dir.path().join("b.scad");
    sample().write_to_file(&a).expect("write a");
    sample().write_to_file(&b).expect("write b");
    assert_eq!(fs::read(&a).expect("a"), fs::read(&b).expect("b"));
}

#[test]
fn test_operations_are_named() {
    let text = ScadRenderer::default().render(&sample());
    for op in ["mirror(", "linear_extrude(height = 1.5000)", "projection(cut = false)", "hull()", "rotate([0.0000, -15.0000, 0.0000])"] {
        assert!(text.contains(op), "missing {op}");
    }
}

#[test]
fn test_precision_is_configurable() {
    let text = ScadRenderer::new(2).render(&Shape::cube(1.0 / 3.0, 1.0, 1.0));
    assert!(text.contains("cube([0.33, 1.00, 1.00], center = true);"));
}
