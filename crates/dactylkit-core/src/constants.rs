//! Physical dimensions of switches, caps and the case plate.
//!
//! All sizes in mm.

/// Width of the square switch cutout.
pub const SWITCH_WIDTH: f64 = 14.4;
/// Thickness of the switch plate.
pub const SWITCH_THICKNESS: f64 = 4.0;
/// Plate material left around each cutout.
pub const WALL_WIDTH: f64 = 2.0;

/// Distance from a key's center to the nominal corner post along X or Y.
pub const SWITCH_HORIZONTAL_OFFSET: f64 = SWITCH_WIDTH / 2.0 + WALL_WIDTH;

/// Distance between the top of the switch plate and the tip of the switch stem.
pub const SWITCH_TIP_OFFSET: f64 = 10.0;

pub const DSA_HEIGHT: f64 = 8.0;
pub const SA_HEIGHT: f64 = 12.5;
/// Height of the taller side of an SA edge cap. The short side is [`SA_HEIGHT`].
pub const SA_EDGE_HEIGHT: f64 = 13.7;
pub const DSA_TOP_SIZE: f64 = 13.2;
pub const DSA_BOTTOM_SIZE: f64 = 18.4;
/// Size half way up a DSA cap, used to shape the cap body.
pub const DSA_HALF_SIZE: f64 = 16.2;
pub const SA_HALF_SIZE: f64 = 17.2;

pub const SA_TALL_HEIGHT: f64 = 14.0;
pub const SA_TALL_EDGE_HEIGHT: f64 = 16.5;
