//! # Key
//!
//! A key is a coordinate frame plus the parameters that shape its switch
//! plate and cap. Its world pose is resolved on demand from three parts,
//! applied in this order:
//!
//! 1. `local_transforms`, extra steps applied before the pose (arc rotations,
//!    plate z offsets)
//! 2. `pose`, the editable position and orientation relative to the parent
//! 3. the parent's resolved chain, captured when the parent is assigned
//!
//! Corner and midpoint anchors are derived from the switch frame, padded by
//! the per-side extra widths and lowered by `extra_z`.

use std::fmt;

use dactylkit_core::constants::{SWITCH_HORIZONTAL_OFFSET, SWITCH_TIP_OFFSET};
use dactylkit_core::{Point3, Pose, Transform, TransformList, Vector3};
use serde::{Deserialize, Serialize};

use crate::grid::CornerLocation;

/// Cap profile used when drawing caps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyType {
    #[default]
    Dsa,
    Sa,
    SaEdge,
    SaTallEdge,
}

/// Side that carries the raised lip of an SA edge cap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaEdgeType {
    #[default]
    Top,
    Right,
    Bottom,
    Left,
}

/// A side of a key's switch plate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// The two corners bounding this edge, clockwise
    pub fn corners(self) -> (CornerLocation, CornerLocation) {
        match self {
            Edge::Top => (CornerLocation::TopLeft, CornerLocation::TopRight),
            Edge::Right => (CornerLocation::TopRight, CornerLocation::BottomRight),
            Edge::Bottom => (CornerLocation::BottomRight, CornerLocation::BottomLeft),
            Edge::Left => (CornerLocation::BottomLeft, CornerLocation::TopLeft),
        }
    }
}

/// A named point on a key that wall points attach to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Landmark {
    Corner(CornerLocation),
    Middle(Edge),
}

impl Landmark {
    pub fn tag(self) -> &'static str {
        match self {
            Landmark::Corner(c) => c.tag(),
            Landmark::Middle(Edge::Top) => "middle_top",
            Landmark::Middle(Edge::Right) => "middle_right",
            Landmark::Middle(Edge::Bottom) => "middle_bottom",
            Landmark::Middle(Edge::Left) => "middle_left",
        }
    }
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One key of the layout
#[derive(Debug, Clone, PartialEq)]
pub struct Key {
    pub name: String,
    /// Name of the key whose frame this one was placed in, if any
    pub parent_name: Option<String>,
    parent: TransformList,
    /// Editable placement relative to the parent
    pub pose: Pose,
    /// Steps applied before the pose
    pub local_transforms: TransformList,

    pub extra_width_top: f64,
    pub extra_width_right: f64,
    pub extra_width_bottom: f64,
    pub extra_width_left: f64,
    /// Lowers the corner anchors below the plate surface
    pub extra_z: f64,

    pub add_side_nub: bool,
    /// Treat the key origin as the plate surface rather than the switch tip
    pub disable_switch_z_offset: bool,
    pub key_type: KeyType,
    pub sa_edge_type: SaEdgeType,
}

impl Default for Key {
    fn default() -> Self {
        Self {
            name: String::new(),
            parent_name: None,
            parent: TransformList::new(),
            pose: Pose::default(),
            local_transforms: TransformList::new(),
            extra_width_top: 0.0,
            extra_width_right: 0.0,
            extra_width_bottom: 0.0,
            extra_width_left: 0.0,
            extra_z: 0.0,
            add_side_nub: true,
            disable_switch_z_offset: false,
            key_type: KeyType::default(),
            sa_edge_type: SaEdgeType::default(),
        }
    }
}

impl Key {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Key at a fixed position with no parent
    pub fn at(name: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            pose: Pose::at(x, y, z),
            ..Self::new(name)
        }
    }

    /// Run a configuration closure against this key
    pub fn configure(&mut self, f: impl FnOnce(&mut Key)) -> &mut Self {
        f(self);
        self
    }

    /// Place this key in `parent`'s frame. The parent's chain is resolved
    /// now; later edits to the parent are not seen.
    pub fn set_parent(&mut self, parent: &Key) -> &mut Self {
        self.parent = parent.transforms();
        self.parent_name = Some(parent.name.clone());
        self
    }

    /// Place this key in an arbitrary frame, such as the layout origin
    pub fn set_parent_transforms(&mut self, parent: TransformList) -> &mut Self {
        self.parent = parent;
        self.parent_name = None;
        self
    }

    pub fn parent_transforms(&self) -> &TransformList {
        &self.parent
    }

    pub fn set_position(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.pose.x = x;
        self.pose.y = y;
        self.pose.z = z;
        self
    }

    /// Add a step applied before everything else
    pub fn add_transform(&mut self, transform: Transform) -> &mut Self {
        self.local_transforms.push_front(transform);
        self
    }

    /// Apply the same padding on every side
    pub fn set_extra_width(&mut self, width: f64) -> &mut Self {
        self.extra_width_top = width;
        self.extra_width_right = width;
        self.extra_width_bottom = width;
        self.extra_width_left = width;
        self
    }

    /// Full chain from the key's local frame to world space
    pub fn transforms(&self) -> TransformList {
        self.local_transforms
            .then(&self.pose.to_list())
            .then(&self.parent)
    }

    /// Chain from the switch plate surface to world space
    pub fn switch_transforms(&self) -> TransformList {
        let chain = self.transforms();
        if self.disable_switch_z_offset {
            chain
        } else {
            chain.translate_front(0.0, 0.0, -SWITCH_TIP_OFFSET)
        }
    }

    /// World position of the key's frame origin
    pub fn position(&self) -> Point3<f64> {
        self.transforms().origin()
    }

    fn corner_offset(&self, location: CornerLocation, offset: f64) -> Vector3<f64> {
        let h = SWITCH_HORIZONTAL_OFFSET;
        let (sx, sy, pad_x, pad_y) = match location {
            CornerLocation::TopLeft => (-1.0, 1.0, self.extra_width_left, self.extra_width_top),
            CornerLocation::TopRight => (1.0, 1.0, self.extra_width_right, self.extra_width_top),
            CornerLocation::BottomRight => {
                (1.0, -1.0, self.extra_width_right, self.extra_width_bottom)
            }
            CornerLocation::BottomLeft => {
                (-1.0, -1.0, self.extra_width_left, self.extra_width_bottom)
            }
        };
        Vector3::new(
            sx * (h + pad_x - offset),
            sy * (h + pad_y - offset),
            -self.extra_z,
        )
    }

    /// Corner anchor, pulled towards the center by `offset`
    pub fn corner(&self, location: CornerLocation, offset: f64) -> TransformList {
        let v = self.corner_offset(location, offset);
        self.switch_transforms().translate_front(v.x, v.y, v.z)
    }

    pub fn top_left(&self) -> TransformList {
        self.corner(CornerLocation::TopLeft, 0.0)
    }

    pub fn top_right(&self) -> TransformList {
        self.corner(CornerLocation::TopRight, 0.0)
    }

    pub fn bottom_right(&self) -> TransformList {
        self.corner(CornerLocation::BottomRight, 0.0)
    }

    pub fn bottom_left(&self) -> TransformList {
        self.corner(CornerLocation::BottomLeft, 0.0)
    }

    /// All four corners, clockwise from top-left
    pub fn corners(&self, offset: f64) -> [TransformList; 4] {
        CornerLocation::CLOCKWISE.map(|location| self.corner(location, offset))
    }

    /// Anchor half way between the two corners of `edge`
    pub fn edge_midpoint(&self, edge: Edge) -> TransformList {
        let (a, b) = edge.corners();
        let mid = (self.corner_offset(a, 0.0) + self.corner_offset(b, 0.0)) / 2.0;
        self.switch_transforms().translate_front(mid.x, mid.y, mid.z)
    }

    /// Center of the switch plate surface
    pub fn middle(&self) -> TransformList {
        self.switch_transforms()
    }

    pub fn landmark(&self, landmark: Landmark) -> TransformList {
        match landmark {
            Landmark::Corner(location) => self.corner(location, 0.0),
            Landmark::Middle(edge) => self.edge_midpoint(edge),
        }
    }
}
