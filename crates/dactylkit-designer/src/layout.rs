//! # Layout
//!
//! Key positions for one half of the keyboard.
//!
//! The bowl is a 5x6 grid whose bottom corners are empty. Every bowl key is
//! placed relative to the home row key `key_2_3`; keys above and below the
//! home row sit on an arc of their column's radius so neighbouring switch
//! tops are [`BOWL_KEY_SPACING`] apart. The thumb cluster is a full 2x3 grid
//! hanging off the bowl's bottom right, its first key filling the bowl's
//! missing bottom-right corner:
//!
//! ```text
//! ctrl      alt     home      key_thumb_0_0  key_thumb_0_1  key_thumb_0_2
//! backspace delete  end       key_thumb_1_0  key_thumb_1_1  key_thumb_1_2
//! ```

use dactylkit_core::{Transform, TransformList};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::connect::{
    connect_diagonal, connect_grid_internal, connect_horizontal, connect_vertical, post_connector,
    tri_fan,
};
use crate::error::{DesignerError, Result};
use crate::grid::{CornerLocation, KeyGrid};
use crate::key::Key;
use crate::screws::ScrewAnchor;
use crate::shape::{union_all, Shape};
use crate::wall::{Direction, Seam, WallPointId};

/// Straight-line distance between neighbouring switch tops in a column
pub const BOWL_KEY_SPACING: f64 = 18.0;

/// Arc radius per bowl column, pinky to index
pub const COLUMN_RADII: [f64; 6] = [70.0, 70.0, 65.0, 55.0, 70.0, 65.0];

/// The top key of the middle finger column sits on a flatter arc
const TOP_MIDDLE_FINGER_RADIUS: f64 = 55.0 + 15.0;

/// Tilt of the whole bowl about Y
const BOWL_TILT_Y: f64 = -15.0;

/// Keys are measured from the switch tip; bowl frames are lowered to the plate
const SWITCH_TOP_Z_OFFSET: f64 = 10.0;

const BOWL_ROWS: usize = 5;
const BOWL_COLUMNS: usize = 6;

/// Where the layout starts in world space
pub fn default_origin() -> TransformList {
    TransformList::new().translate(-20.0, -40.0, 3.0)
}

/// Which way a column key leaves its parent along the arc
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    Up,
    Down,
}

/// Degrees to start the arc search from for radii used in the default layout
fn precomputed_degrees(radius: f64) -> Option<f64> {
    [(50.0, 20.740), (55.0, 18.840), (60.0, 17.26), (65.0, 15.920), (70.0, 14.780)]
        .into_iter()
        .find(|(r, _)| *r == radius)
        .map(|(_, degrees)| degrees)
}

/// A key rotated about the X axis through a point `radius` below it, far
/// enough that its origin has moved just over [`BOWL_KEY_SPACING`]
pub fn x_axis_rotated_key(radius: f64, direction: RotationDirection) -> Result<Key> {
    if radius * 2.0 <= BOWL_KEY_SPACING {
        return Err(DesignerError::invalid_layout(format!(
            "arc radius {radius} cannot span {BOWL_KEY_SPACING}mm"
        )));
    }
    let sign = match direction {
        RotationDirection::Up => 1.0,
        RotationDirection::Down => -1.0,
    };

    let mut degrees = precomputed_degrees(radius).unwrap_or(1.0);
    while degrees < 180.0 {
        let arc = TransformList::new()
            .translate_z(-radius)
            .rotate_x(sign * degrees)
            .translate_z(radius);
        if arc.origin().coords.norm() > BOWL_KEY_SPACING {
            let mut key = Key::default();
            key.local_transforms = arc;
            return Ok(key);
        }
        degrees += 0.01;
    }
    Err(DesignerError::invalid_layout(format!(
        "no arc step found for radius {radius}"
    )))
}

fn arc_key(name: &str, radius: f64, direction: RotationDirection, parent: &Key) -> Result<Key> {
    let mut key = x_axis_rotated_key(radius, direction)?;
    key.configure(|k| {
        k.name = name.to_string();
        k.set_parent(parent);
    });
    Ok(key)
}

fn placed_key(name: &str, parent: &Key, x: f64, y: f64, z: f64, ry: f64) -> Key {
    let mut key = Key::new(name);
    key.configure(|k| {
        k.set_parent(parent);
        k.set_position(x, y, z);
        k.pose.ry = ry;
    });
    key
}

/// Padding added around the outside of the bowl
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BowlPadding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
}

impl Default for BowlPadding {
    fn default() -> Self {
        Self {
            left: 4.0,
            right: 4.0,
            top: 2.0,
        }
    }
}

/// Every key of one half
#[derive(Debug, Clone)]
pub struct KeyData {
    pub origin: TransformList,
    pub bowl: KeyGrid,
    pub thumb: KeyGrid,
}

impl KeyData {
    pub fn new(origin: TransformList) -> Result<Self> {
        let mut bowl = build_bowl(&origin)?;
        for key in bowl.keys_mut() {
            key.add_transform(Transform::translate(0.0, 0.0, -SWITCH_TOP_Z_OFFSET));
            key.disable_switch_z_offset = true;
        }

        let corner_neighbour = bowl
            .get_key(BOWL_ROWS as isize - 1, BOWL_COLUMNS as isize - 2)
            .ok_or_else(|| DesignerError::invalid_layout("bowl is missing key_4_4"))?;
        let mut thumb = build_thumb(corner_neighbour)?;
        for key in thumb.keys_mut() {
            key.disable_switch_z_offset = true;
        }
        pad_thumb(&mut thumb);

        debug!(
            "Layout has {} bowl keys and {} thumb keys",
            bowl.keys().len(),
            thumb.keys().len()
        );
        Ok(Self {
            origin,
            bowl,
            thumb,
        })
    }

    /// Pad the outer columns and top row of the bowl
    pub fn apply_bowl_padding(&mut self, padding: &BowlPadding) {
        for key in self.bowl.column_mut(0) {
            key.extra_width_left = padding.left;
        }
        let last = self.bowl.num_columns() - 1;
        for key in self.bowl.column_mut(last) {
            key.extra_width_right = padding.right;
        }
        for key in self.bowl.row_mut(0) {
            key.extra_width_top = padding.top;
        }
    }

    /// Thumb keys first, then bowl keys row-major
    pub fn all_keys(&self) -> Vec<&Key> {
        let mut keys = self.thumb.keys();
        keys.extend(self.bowl.keys());
        keys
    }

    pub fn key(&self, name: &str) -> Option<&Key> {
        self.bowl.find(name).or_else(|| self.thumb.find(name))
    }

    fn require(&self, name: &str) -> Result<&Key> {
        self.key(name)
            .ok_or_else(|| DesignerError::invalid_layout(format!("layout has no key {name}")))
    }

    /// Where the thumb ring joins the bowl ring
    pub fn seam(&self) -> Seam {
        Seam {
            exit: WallPointId::corner("key_3_5", CornerLocation::BottomRight, Direction::Right),
            entry: WallPointId::corner("key_thumb_0_1", CornerLocation::TopLeft, Direction::Up),
            branch_exit: WallPointId::corner(
                "key_thumb_1_0",
                CornerLocation::BottomLeft,
                Direction::Left,
            ),
            reentry: WallPointId::corner("key_4_4", CornerLocation::BottomRight, Direction::Down),
        }
    }

    /// Bottom plate screw positions, as wall points plus a floor nudge
    pub fn screw_anchors(&self) -> Vec<ScrewAnchor> {
        vec![
            ScrewAnchor::new(
                WallPointId::corner("key_0_0", CornerLocation::TopLeft, Direction::Up),
                2.8,
                -0.5,
            ),
            ScrewAnchor::new(
                WallPointId::corner("key_0_5", CornerLocation::TopRight, Direction::Right),
                4.0,
                -15.5,
            ),
            ScrewAnchor::new(
                WallPointId::corner("key_thumb_0_1", CornerLocation::TopLeft, Direction::Up),
                0.0,
                -0.9,
            ),
            ScrewAnchor::new(
                WallPointId::corner("key_thumb_1_0", CornerLocation::BottomLeft, Direction::Left),
                1.5,
                3.5,
            ),
            ScrewAnchor::new(
                WallPointId::corner("key_3_0", CornerLocation::BottomLeft, Direction::Left),
                3.2,
                0.0,
            ),
        ]
    }

    /// Plate webbing inside the thumb cluster and across to the bowl
    pub fn connect_thumb(&self) -> Result<Shape> {
        let connector = post_connector();
        let thumb_anchor = self.require("key_thumb_0_0")?;
        let above = self.require("key_3_5")?;
        let left = self.require("key_4_4")?;
        let above_left = self.require("key_3_4")?;
        let below = self.require("key_thumb_1_0")?;
        Ok(union_all([
            connect_grid_internal(&self.thumb),
            connect_vertical(above, thumb_anchor, &connector, 0.0),
            connect_horizontal(left, thumb_anchor, &connector, 0.0),
            connect_diagonal(above_left, above, thumb_anchor, left, &connector, 0.0),
            // Slash from the bowl's last row down to the lower thumb row
            tri_fan(
                &left.bottom_right(),
                &[
                    thumb_anchor.bottom_left(),
                    below.top_left(),
                    below.bottom_left(),
                ],
                &connector,
            ),
        ]))
    }

    /// Pocket for the controller holder behind the top row
    pub fn holder_cutout(&self) -> Result<Shape> {
        let corner = self.require("key_0_4")?.top_left().origin();
        Ok(Shape::cube(29.0, 20.0, 12.5)
            .translate_z(6.0)
            .translate(corner.x + 17.5, corner.y, -0.5))
    }
}

fn build_bowl(origin: &TransformList) -> Result<KeyGrid> {
    let mut key_2_3 = Key::new("key_2_3");
    key_2_3.configure(|k| {
        k.set_parent_transforms(origin.clone());
        k.set_position(26.40, 50.32, 17.87 - 5.0);
        k.pose.ry = BOWL_TILT_Y;
    });
    let key_2_4 = placed_key("key_2_4", &key_2_3, 19.938, -0.950, 5.249 + 5.0, -5.0);
    let key_2_5 = placed_key("key_2_5", &key_2_4, 20.0, -1.310, 3.305, -4.0);
    let key_2_2 = placed_key("key_2_2", &key_2_3, -19.571, -0.090, 5.430, 5.0);
    let key_2_1 = placed_key("key_2_1", &key_2_2, -20.887, -6.170, 5.358 + 10.0, 0.0);
    let key_2_0 = placed_key("key_2_0", &key_2_1, -20.887, 0.0, 0.0, 0.0);

    let home = [key_2_0, key_2_1, key_2_2, key_2_3, key_2_4, key_2_5];
    let mut rows: Vec<Vec<Option<Key>>> = vec![Vec::with_capacity(BOWL_COLUMNS); BOWL_ROWS];

    for (c, home_key) in home.into_iter().enumerate() {
        let radius = COLUMN_RADII[c];
        let top_radius = if c == 3 { TOP_MIDDLE_FINGER_RADIUS } else { radius };

        let key_1 = arc_key(&format!("key_1_{c}"), radius, RotationDirection::Up, &home_key)?;
        let key_0 = arc_key(&format!("key_0_{c}"), top_radius, RotationDirection::Up, &key_1)?;
        let key_3 = arc_key(&format!("key_3_{c}"), radius, RotationDirection::Down, &home_key)?;
        let key_4 = if c == 0 || c == BOWL_COLUMNS - 1 {
            None
        } else {
            Some(arc_key(&format!("key_4_{c}"), radius, RotationDirection::Down, &key_3)?)
        };

        rows[0].push(Some(key_0));
        rows[1].push(Some(key_1));
        rows[2].push(Some(home_key));
        rows[3].push(Some(key_3));
        rows[4].push(key_4);
    }
    KeyGrid::new(rows)
}

fn build_thumb(corner_neighbour: &Key) -> Result<KeyGrid> {
    let mut anchor = Key::new("key_thumb_0_0");
    anchor.configure(|k| {
        k.set_parent(corner_neighbour);
        k.set_position(21.0, -4.0, 2.0);
        k.pose.rz = -10.0;
    });
    let key_0_1 = placed_key("key_thumb_0_1", &anchor, 19.5, 0.0, 0.0, 0.0);
    let key_0_2 = placed_key("key_thumb_0_2", &key_0_1, 19.5, 0.0, 0.0, 0.0);
    let key_1_0 = placed_key("key_thumb_1_0", &anchor, 0.0, -19.5, 0.0, 0.0);
    let key_1_1 = placed_key("key_thumb_1_1", &key_0_1, 0.0, -19.5, 0.0, 0.0);
    let key_1_2 = placed_key("key_thumb_1_2", &key_0_2, 0.0, -19.5, 0.0, 0.0);
    KeyGrid::new(vec![
        vec![Some(anchor), Some(key_0_1), Some(key_0_2)],
        vec![Some(key_1_0), Some(key_1_1), Some(key_1_2)],
    ])
}

fn pad_thumb(thumb: &mut KeyGrid) {
    for key in thumb.row_mut(1) {
        key.extra_width_bottom = 3.0;
    }
    let last = thumb.num_columns() - 1;
    for key in thumb.column_mut(last) {
        key.extra_width_right = 3.0;
    }
    for key in thumb.row_mut(0).skip(1) {
        key.extra_width_top = 3.0;
    }
}
