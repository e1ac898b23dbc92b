//! Wall solid from a ring of wall points.
//!
//! Every point becomes a slice: a post at the anchor hulled to a short bar
//! further out, tilted down and away from the plate, and the same bar hulled
//! to its own shadow on the floor. Neighbouring slices are hulled layer by
//! layer, including the last slice back to the first.

use dactylkit_core::{GeometryError, Point3, TransformList, Vector3};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{Direction, WallPoint, WallSequence};
use crate::connect::post_connector;
use crate::error::Result;
use crate::shape::{hull, union_all, ApplyShape, Shape};

const BAR_SIZE: f64 = 0.1;
const FLOOR_SLAB: f64 = 0.1;

/// Wall dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallParams {
    /// How far the wall sits out from its anchor, before per-point extras
    pub base_distance: f64,
    /// Wall thickness, before per-point extras
    pub base_width: f64,
    /// Downward tilt of the wall top, degrees
    pub tilt_degrees: f64,
    /// Offset below the anchor, in its own frame, used to measure the outward direction
    pub post_offset_z: f64,
    /// Emit slices without hulling neighbours together
    pub debug_slices: bool,
}

impl Default for WallParams {
    fn default() -> Self {
        Self {
            base_distance: 4.8,
            base_width: 3.3,
            tilt_degrees: 20.0,
            post_offset_z: -4.0,
            debug_slices: false,
        }
    }
}

/// The two solids one wall point contributes
#[derive(Debug, Clone)]
pub struct WallSlice {
    /// Anchor post to the outer bar, then outer bar to the floor
    pub layers: [Shape; 2],
    /// Outer end of the top bar
    pub outer: Point3<f64>,
    /// Horizontal unit vector pointing back towards the plate
    pub inward: Vector3<f64>,
}

/// Result of synthesising a ring
#[derive(Debug, Clone)]
pub struct Wall {
    pub slices: Vec<WallSlice>,
    /// Slice index pairs that were hulled together
    pub links: Vec<(usize, usize)>,
    pub shape: Shape,
}

/// Consecutive index pairs around a ring of `n`, closing back to 0
pub fn ring_links(n: usize) -> Vec<(usize, usize)> {
    if n < 2 {
        return Vec::new();
    }
    (0..n).map(|i| (i, (i + 1) % n)).collect()
}

#[derive(Debug, Clone, Default)]
pub struct WallSynthesizer {
    params: WallParams,
}

impl WallSynthesizer {
    pub fn new(params: WallParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &WallParams {
        &self.params
    }

    /// Frame of the outer wall top: pushed out along the point's direction
    /// and tilted down, in the anchor's own frame
    pub fn inset_frame(&self, point: &WallPoint) -> TransformList {
        let d = self.params.base_distance + point.extra_distance;
        let tilt = self.params.tilt_degrees;
        let step = match point.direction {
            Direction::Up => TransformList::new().translate(0.0, d, 0.0).rotate_x(-tilt),
            Direction::Down => TransformList::new().translate(0.0, -d, 0.0).rotate_x(tilt),
            Direction::Left => TransformList::new().translate(-d, 0.0, 0.0).rotate_y(-tilt),
            Direction::Right => TransformList::new().translate(d, 0.0, 0.0).rotate_y(tilt),
        };
        point.anchor.clone().append_front(&step)
    }

    pub fn slice(&self, point: &WallPoint) -> Result<WallSlice> {
        let tip = Point3::new(0.0, 0.0, self.params.post_offset_z);
        let inset = self.inset_frame(point);
        let p = point.anchor.apply(tip);
        let outer = inset.apply(tip);

        let mut out_v = outer - p;
        out_v.z = 0.0;
        let out_v = out_v.try_normalize(1e-9).ok_or_else(|| GeometryError::DegenerateVector {
            context: match &point.id {
                Some(id) => format!("outward direction of wall point {id}"),
                None => "outward direction of an unnamed wall point".to_string(),
            },
        })?;
        let inward = -out_v;

        let width = self.params.base_width + point.extra_width;
        let bar = Shape::cube(BAR_SIZE, BAR_SIZE, BAR_SIZE);
        let top = hull([
            bar.translate_to(outer),
            bar.translate_to(outer + inward * width),
        ]);
        let floor = top
            .projection()
            .linear_extrude(FLOOR_SLAB)
            .translate_z(FLOOR_SLAB / 2.0);

        let post = point.anchor.apply_shape(&post_connector());
        Ok(WallSlice {
            layers: [hull([post, top.clone()]), hull([top, floor])],
            outer,
            inward,
        })
    }

    pub fn build(&self, sequence: &WallSequence) -> Result<Wall> {
        let slices = sequence
            .iter()
            .map(|p| self.slice(p))
            .collect::<Result<Vec<_>>>()?;

        if self.params.debug_slices {
            info!("Debug walls: emitting {} raw slices", slices.len());
            let shape = union_all(slices.iter().flat_map(|s| s.layers.iter().cloned()));
            return Ok(Wall {
                slices,
                links: Vec::new(),
                shape,
            });
        }

        let links = ring_links(slices.len());
        let shape = union_all(links.iter().flat_map(|&(a, b)| {
            let (first, second) = (&slices[a], &slices[b]);
            (0..2).map(move |j| hull([first.layers[j].clone(), second.layers[j].clone()]))
        }));
        debug!("Built wall from {} slices", slices.len());
        Ok(Wall {
            slices,
            links,
            shape,
        })
    }
}
