use dactylkit_designer::{CornerLocation, DesignerError, Key, KeyGrid, Neighbor};

use crate::support::flat_grid;

#[test]
fn test_corner_holes_are_reported() {
    let grid = flat_grid(5, 6, &[(4, 0), (4, 5)]);
    let corners = grid.get_key_corners();
    assert!(!corners[0].is_missing());
    assert!(!corners[1].is_missing());
    assert!(corners[2].is_missing());
    assert!(corners[3].is_missing());
    assert!(corners[2].is_same(4, 5));
    assert_eq!(corners[3].location, CornerLocation::BottomLeft);
}

#[test]
fn test_neighbours_of_missing_corner() {
    let grid = flat_grid(5, 6, &[(4, 5)]);
    let corner = grid.corner_bottom_right();
    let up = grid.get_key_next_to(&corner, Neighbor::Up).map(|k| k.name.as_str());
    let left = grid.get_key_next_to(&corner, Neighbor::Left).map(|k| k.name.as_str());
    assert_eq!(up, Some("k_3_5"));
    assert_eq!(left, Some("k_4_4"));
    assert!(grid.get_key_next_to(&corner, Neighbor::Right).is_none());
}

#[test]
fn test_rows_and_columns_keep_holes() {
    let grid = flat_grid(3, 3, &[(1, 1)]);
    assert_eq!(grid.row(1).iter().filter(|k| k.is_none()).count(), 1);
    assert_eq!(grid.column(1).len(), 3);
    assert!(grid.row(7).is_empty());
    assert!(grid.column(7).is_empty());
    assert_eq!(grid.keys().len(), 8);
}

#[test]
fn test_get_key_mut_edits_grid() {
    let mut grid = flat_grid(2, 2, &[]);
    if let Some(key) = grid.get_key_mut(1, 1) {
        key.extra_width_bottom = 5.0;
    }
    assert_eq!(grid.get_key(1, 1).map(|k| k.extra_width_bottom), Some(5.0));
    assert!(grid.get_key_mut(2, 2).is_none());
}

#[test]
fn test_non_rectangular_grid_is_an_error() {
    let rows = vec![
        vec![Some(Key::new("a")), Some(Key::new("b"))],
        vec![Some(Key::new("c")), Some(Key::new("d"))],
        vec![Some(Key::new("e"))],
    ];
    let err = KeyGrid::new(rows).expect_err("ragged grid");
    assert!(matches!(err, DesignerError::NonRectangularGrid { row: 2, .. }));
}
