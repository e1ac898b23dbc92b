//! Plate webbing between neighbouring keys.
//!
//! Every connector is a convex hull of small posts placed at key corners.

use dactylkit_core::constants::SWITCH_THICKNESS;
use dactylkit_core::TransformList;

use crate::grid::KeyGrid;
use crate::key::Key;
use crate::shape::{hull, union_all, ApplyShape, Shape};

/// Thin post spanning the plate thickness, top flush with the key plane
pub fn post_connector() -> Shape {
    Shape::cube(0.01, 0.01, SWITCH_THICKNESS).translate_z(-SWITCH_THICKNESS / 2.0)
}

fn posts(connector: &Shape, anchors: &[TransformList]) -> Shape {
    hull(anchors.iter().map(|t| t.apply_shape(connector)))
}

/// Web between a key and the key to its right
pub fn connect_horizontal(left: &Key, right: &Key, connector: &Shape, offset: f64) -> Shape {
    use crate::grid::CornerLocation::*;
    posts(
        connector,
        &[
            left.corner(TopRight, offset),
            left.corner(BottomRight, offset),
            right.corner(TopLeft, offset),
            right.corner(BottomLeft, offset),
        ],
    )
}

/// Web between a key and the key below it
pub fn connect_vertical(top: &Key, bottom: &Key, connector: &Shape, offset: f64) -> Shape {
    use crate::grid::CornerLocation::*;
    posts(
        connector,
        &[
            top.corner(BottomLeft, offset),
            top.corner(BottomRight, offset),
            bottom.corner(TopLeft, offset),
            bottom.corner(TopRight, offset),
        ],
    )
}

/// Fill the gap where four keys meet
pub fn connect_diagonal(
    top_left: &Key,
    top_right: &Key,
    bottom_right: &Key,
    bottom_left: &Key,
    connector: &Shape,
    offset: f64,
) -> Shape {
    use crate::grid::CornerLocation::*;
    posts(
        connector,
        &[
            top_left.corner(BottomRight, offset),
            top_right.corner(BottomLeft, offset),
            bottom_right.corner(TopLeft, offset),
            bottom_left.corner(TopRight, offset),
        ],
    )
}

/// Hull of a connector at three anchors
pub fn tri(a: &TransformList, b: &TransformList, c: &TransformList, connector: &Shape) -> Shape {
    posts(connector, &[a.clone(), b.clone(), c.clone()])
}

/// A triangle from `center` to every consecutive pair of `rim`
pub fn tri_fan(center: &TransformList, rim: &[TransformList], connector: &Shape) -> Shape {
    union_all(rim.windows(2).map(|w| tri(center, &w[0], &w[1], connector)))
}

/// Webbing between every pair of horizontally, vertically and diagonally
/// adjacent keys of a grid. Missing keys simply produce no webbing.
pub fn connect_grid_internal(grid: &KeyGrid) -> Shape {
    let connector = post_connector();
    let mut shapes = Vec::new();
    for r in 0..grid.num_rows() as isize {
        for c in 0..grid.num_columns() as isize {
            let Some(key) = grid.get_key(r, c) else {
                continue;
            };
            if let Some(right) = grid.get_key_located_right(r, c) {
                shapes.push(connect_horizontal(key, right, &connector, 0.0));
            }
            if let Some(below) = grid.get_key_located_down(r, c) {
                shapes.push(connect_vertical(key, below, &connector, 0.0));
            }
            if let (Some(right), Some(below_right), Some(below)) = (
                grid.get_key_located_right(r, c),
                grid.get_key_located_down_right(r, c),
                grid.get_key_located_down(r, c),
            ) {
                shapes.push(connect_diagonal(
                    key,
                    right,
                    below_right,
                    below,
                    &connector,
                    0.0,
                ));
            }
        }
    }
    union_all(shapes)
}
