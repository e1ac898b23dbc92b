//! Screw inserts that hold the bottom plate on.
//!
//! Boss positions are taken from named wall points: the point's anchor is
//! projected to the floor and nudged so the boss sits inside the wall.

use dactylkit_core::Point3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DesignerError, Result};
use crate::shape::{union_all, Shape};
use crate::wall::{WallPointId, WallSequence};

/// Boss and hole dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrewParams {
    /// Height of the insert boss
    pub height: f64,
    /// Radius of the screw hole
    pub hole_radius: f64,
    /// Material around the hole
    pub boss_wall: f64,
    /// Cylinder facets
    pub segments: u32,
}

impl Default for ScrewParams {
    fn default() -> Self {
        Self {
            height: 5.0,
            hole_radius: 2.2,
            boss_wall: 1.65,
            segments: 30,
        }
    }
}

/// Where to put one boss
#[derive(Debug, Clone, PartialEq)]
pub struct ScrewAnchor {
    pub id: WallPointId,
    /// World-space XY offset from the anchor
    pub nudge_x: f64,
    pub nudge_y: f64,
}

impl ScrewAnchor {
    pub fn new(id: WallPointId, nudge_x: f64, nudge_y: f64) -> Self {
        Self {
            id,
            nudge_x,
            nudge_y,
        }
    }
}

/// Floor positions of every anchor, in the order given
pub fn screw_locations(
    sequence: &WallSequence,
    anchors: &[ScrewAnchor],
) -> Result<Vec<Point3<f64>>> {
    anchors
        .iter()
        .map(|anchor| {
            let point = sequence
                .find(&anchor.id)
                .ok_or_else(|| DesignerError::ScrewAnchorNotFound {
                    id: anchor.id.to_string(),
                })?;
            let p = point.anchor.origin();
            let location = Point3::new(p.x + anchor.nudge_x, p.y + anchor.nudge_y, 0.0);
            debug!("Screw insert at {} -> {:?}", anchor.id, location);
            Ok(location)
        })
        .collect()
}

/// Solid boss with the hole already drilled through
pub fn insert_shape(params: &ScrewParams) -> Shape {
    let outer = Shape::cylinder(params.height, params.hole_radius + params.boss_wall, params.segments)
        .translate_z(params.height / 2.0);
    outer.subtract(&hole_shape(params))
}

/// Hole centered on the floor: through the bottom plate, blind inside the boss
pub fn hole_shape(params: &ScrewParams) -> Shape {
    Shape::cylinder(params.height + 2.0, params.hole_radius, params.segments)
}

/// All bosses, placed
pub fn inserts(params: &ScrewParams, locations: &[Point3<f64>]) -> Shape {
    let boss = insert_shape(params);
    union_all(locations.iter().map(|p| boss.translate_to(*p)))
}

/// All holes, placed
pub fn holes(params: &ScrewParams, locations: &[Point3<f64>]) -> Shape {
    let hole = hole_shape(params);
    union_all(locations.iter().map(|p| hole.translate_to(*p)))
}
