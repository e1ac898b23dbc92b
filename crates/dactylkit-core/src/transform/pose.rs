use serde::{Deserialize, Serialize};

use super::{Transform, TransformList};

/// Editable position + orientation of a key relative to its parent.
///
/// This is the "current" transform a key's configuration closure tunes in
/// place. It is expanded into tagged transforms (rotate X, Y, Z, then
/// translate) whenever the key's chain is resolved, so edits are always
/// visible to later queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Rotation about X in degrees
    pub rx: f64,
    /// Rotation about Y in degrees
    pub ry: f64,
    /// Rotation about Z in degrees
    pub rz: f64,
}

impl Pose {
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            ..Self::default()
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Expand into a chain. Zero components are skipped.
    pub fn to_list(&self) -> TransformList {
        let candidates = [
            Transform::rotate_x(self.rx),
            Transform::rotate_y(self.ry),
            Transform::rotate_z(self.rz),
            Transform::translate(self.x, self.y, self.z),
        ];
        TransformList::from_transforms(candidates.into_iter().filter(|t| !t.is_identity()))
    }
}
