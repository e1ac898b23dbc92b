//! # Transform Module
//!
//! Single affine operations and the chains built from them.
//!
//! A [`Transform`] is one tagged operation: a translation or a rotation about
//! one principal axis. A [`TransformList`] applies its transforms in order,
//! first element first, so the last element is the one closest to world
//! space. A key's world pose is its local list followed by its parent's full
//! list.
//!
//! Rotations are in degrees and follow the right-hand rule, matching the
//! `rotate([x, y, z])` convention of the geometry kernel.

mod list;
mod pose;

pub use list::TransformList;
pub use pose::Pose;

use nalgebra::{Point3, Rotation3, Unit, Vector3};
use serde::{Deserialize, Serialize};

/// Principal axis used by rotations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn unit(self) -> Unit<Vector3<f64>> {
        match self {
            Axis::X => Vector3::x_axis(),
            Axis::Y => Vector3::y_axis(),
            Axis::Z => Vector3::z_axis(),
        }
    }
}

/// A single affine operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Translate by the given offset
    Translate(Vector3<f64>),
    /// Rotate about a principal axis through the origin, in degrees
    Rotate { axis: Axis, degrees: f64 },
}

impl Transform {
    pub fn translate(x: f64, y: f64, z: f64) -> Self {
        Transform::Translate(Vector3::new(x, y, z))
    }

    pub fn rotate_x(degrees: f64) -> Self {
        Transform::Rotate {
            axis: Axis::X,
            degrees,
        }
    }

    pub fn rotate_y(degrees: f64) -> Self {
        Transform::Rotate {
            axis: Axis::Y,
            degrees,
        }
    }

    pub fn rotate_z(degrees: f64) -> Self {
        Transform::Rotate {
            axis: Axis::Z,
            degrees,
        }
    }

    /// True when applying this transform leaves every point in place
    pub fn is_identity(&self) -> bool {
        match self {
            Transform::Translate(v) => v.x == 0.0 && v.y == 0.0 && v.z == 0.0,
            Transform::Rotate { degrees, .. } => *degrees == 0.0,
        }
    }

    /// The rotation part of this transform (identity for translations)
    pub fn rotation(&self) -> Rotation3<f64> {
        match self {
            Transform::Translate(_) => Rotation3::identity(),
            Transform::Rotate { axis, degrees } => {
                Rotation3::from_axis_angle(&axis.unit(), degrees.to_radians())
            }
        }
    }

    pub fn apply_point(&self, p: Point3<f64>) -> Point3<f64> {
        match self {
            Transform::Translate(v) => p + v,
            Transform::Rotate { .. } => self.rotation() * p,
        }
    }

    /// Apply to a direction. Translations do not move vectors.
    pub fn apply_vector(&self, v: Vector3<f64>) -> Vector3<f64> {
        match self {
            Transform::Translate(_) => v,
            Transform::Rotate { .. } => self.rotation() * v,
        }
    }
}
