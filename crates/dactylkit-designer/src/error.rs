//! Error types for layout, wall tracing and case generation

use dactylkit_core::GeometryError;
use thiserror::Error;

use crate::grid::{CornerLocation, Neighbor};

/// Designer error type
#[derive(Error, Debug)]
pub enum DesignerError {
    /// A grid needs at least one row and one column
    #[error("Grid has no keys")]
    EmptyGrid,

    /// Every row of a grid must have the same number of columns
    #[error("Grid row {row} has {found} columns, expected {expected}")]
    NonRectangularGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Wall tracing needs distinct corners on every edge
    #[error("A {rows}x{columns} grid is too small to trace a wall around")]
    GridTooSmall { rows: usize, columns: usize },

    /// A missing corner's filler points need both of its edge neighbours
    #[error("Missing {corner} corner at ({row}, {column}) has no {neighbor} neighbour")]
    MissingNeighbor {
        corner: CornerLocation,
        neighbor: Neighbor,
        row: usize,
        column: usize,
    },

    /// A seam references a wall point that neither sequence produced
    #[error("Seam point '{id}' not found in the {sequence} sequence")]
    SeamPointNotFound { id: String, sequence: &'static str },

    /// A screw anchor names a wall point the final ring does not contain
    #[error("Screw anchor '{id}' is not a point of the wall")]
    ScrewAnchorNotFound { id: String },

    /// The main sequence must leave before it re-enters
    #[error("Seam exit '{exit}' does not come before re-entry '{reentry}'")]
    InvalidSeam { exit: String, reentry: String },

    /// Layout data could not be turned into keys
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DesignerError {
    pub fn invalid_layout(msg: impl Into<String>) -> Self {
        DesignerError::InvalidLayout(msg.into())
    }
}

/// Result type for designer operations
pub type Result<T> = std::result::Result<T, DesignerError>;
