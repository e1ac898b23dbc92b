//! Error handling for dactylkit core
//!
//! Geometry errors raised while deriving directions from transform chains.
//! Higher layers wrap them in their own error enums.

use thiserror::Error;

/// Geometry error type
///
/// Raised when a computation would produce an undefined direction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A vector that must be normalised has (near) zero length
    #[error("Degenerate vector while computing {context}")]
    DegenerateVector {
        /// What was being computed.
        context: String,
    },
}

/// Result type for geometry computations
pub type Result<T> = std::result::Result<T, GeometryError>;
