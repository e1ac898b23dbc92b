//! Switch plate and keycap solids for a [`Key`].

use dactylkit_core::constants::{
    DSA_BOTTOM_SIZE, DSA_HALF_SIZE, DSA_HEIGHT, DSA_TOP_SIZE, SA_EDGE_HEIGHT, SA_HALF_SIZE,
    SA_HEIGHT, SA_TALL_EDGE_HEIGHT, SA_TALL_HEIGHT, SWITCH_THICKNESS, SWITCH_WIDTH, WALL_WIDTH,
};

use crate::key::{Key, KeyType, SaEdgeType};
use crate::shape::{hull, union_all, ApplyShape, Shape};

/// Height of the cap's bottom edge above the plate with the switch at rest
const CAP_REST_HEIGHT: f64 = 6.6;
const SLAB: f64 = 0.01;
const NUB_RADIUS: f64 = 1.0;
const NUB_LENGTH: f64 = 2.75;

impl Key {
    fn plate_size(&self) -> (f64, f64) {
        (
            SWITCH_WIDTH + 2.0 * WALL_WIDTH + self.extra_width_left + self.extra_width_right,
            SWITCH_WIDTH + 2.0 * WALL_WIDTH + self.extra_width_top + self.extra_width_bottom,
        )
    }

    /// Switch plate in the key's local frame, top surface at z = 0
    pub fn local_switch_shape(&self) -> Shape {
        let (width, depth) = self.plate_size();
        let height = SWITCH_THICKNESS + self.extra_z;
        let body = Shape::cube(width, depth, height).translate(
            (self.extra_width_right - self.extra_width_left) / 2.0,
            (self.extra_width_top - self.extra_width_bottom) / 2.0,
            -height / 2.0,
        );
        let hole = Shape::cube(SWITCH_WIDTH, SWITCH_WIDTH, height * 3.0);
        let plate = body.subtract(&hole);
        if !self.add_side_nub {
            return plate;
        }
        let nub = Shape::cylinder(NUB_LENGTH, NUB_RADIUS, 30).rotate(90.0, 0.0, 0.0);
        union_all([
            plate,
            nub.translate(SWITCH_WIDTH / 2.0, 0.0, -SWITCH_THICKNESS / 2.0),
            nub.translate(-SWITCH_WIDTH / 2.0, 0.0, -SWITCH_THICKNESS / 2.0),
        ])
    }

    /// Switch plate in world space
    pub fn switch_shape(&self) -> Shape {
        self.switch_transforms().apply_shape(&self.local_switch_shape())
    }

    fn cap_profile(&self) -> (f64, f64, f64) {
        match self.key_type {
            KeyType::Dsa => (DSA_HEIGHT, DSA_HEIGHT, DSA_HALF_SIZE),
            KeyType::Sa => (SA_HEIGHT, SA_HEIGHT, SA_HALF_SIZE),
            KeyType::SaEdge => (SA_HEIGHT, SA_EDGE_HEIGHT, SA_HALF_SIZE),
            KeyType::SaTallEdge => (SA_TALL_HEIGHT, SA_TALL_EDGE_HEIGHT, SA_HALF_SIZE),
        }
    }

    /// Keycap in the key's switch frame
    pub fn local_cap_shape(&self) -> Shape {
        let (height, edge_height, half_size) = self.cap_profile();
        let bottom = Shape::cube(DSA_BOTTOM_SIZE, DSA_BOTTOM_SIZE, SLAB);
        let middle = Shape::cube(half_size, half_size, SLAB).translate_z(height / 2.0);

        let rise = edge_height - height;
        let top = if rise.abs() < f64::EPSILON {
            Shape::cube(DSA_TOP_SIZE, DSA_TOP_SIZE, SLAB).translate_z(height)
        } else {
            // Tilt the top so the lip side sits at the edge height.
            let tilt = (rise / DSA_TOP_SIZE).atan().to_degrees();
            let (rx, ry, rz) = match self.sa_edge_type {
                SaEdgeType::Top => (tilt, 0.0, 0.0),
                SaEdgeType::Bottom => (-tilt, 0.0, 0.0),
                SaEdgeType::Right => (0.0, -tilt, 0.0),
                SaEdgeType::Left => (0.0, tilt, 0.0),
            };
            Shape::cube(DSA_TOP_SIZE, DSA_TOP_SIZE, SLAB)
                .rotate(rx, ry, rz)
                .translate_z(height + rise / 2.0)
        };
        hull([bottom, middle, top]).translate_z(CAP_REST_HEIGHT)
    }

    pub fn cap_shape(&self) -> Shape {
        self.switch_transforms().apply_shape(&self.local_cap_shape())
    }

    /// Clearance swept by the cap, extended `vertical_length` above it
    pub fn inverse_cap_shape(&self, vertical_length: f64) -> Shape {
        let (height, _, _) = self.cap_profile();
        let footprint = Shape::cube(DSA_BOTTOM_SIZE, DSA_BOTTOM_SIZE, SLAB);
        let sweep = hull([
            footprint.clone(),
            footprint.translate_z(height + vertical_length),
        ])
        .translate_z(CAP_REST_HEIGHT);
        self.switch_transforms().apply_shape(&sweep)
    }
}
