//! # dactylkit Core
//!
//! Core types shared by every dactylkit crate:
//! - the transform engine ([`Transform`], [`Pose`], [`TransformList`]) used to
//!   chain key coordinate frames from the grid origin out to world space
//! - switch and wall dimensions shared by the key model and the wall builder
//! - [`GeometryError`], raised when a direction cannot be derived

pub mod constants;
pub mod error;
pub mod transform;

pub use error::{GeometryError, Result};
pub use transform::{Axis, Pose, Transform, TransformList};

pub use nalgebra::{Point3, Vector3};
