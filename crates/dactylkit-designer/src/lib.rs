//! # dactylkit Designer
//!
//! Turns a key layout into the solids of an ergonomic keyboard case.
//!
//! ## Core Components
//!
//! ### Layout
//! - **Key**: a coordinate frame with switch plate, cap and corner anchors
//! - **KeyGrid**: rows x columns of optional keys with neighbour lookup
//! - **KeyData**: the bowl and thumb cluster of one keyboard half
//!
//! ### Case Geometry
//! - **Connectors**: plate webbing between neighbouring keys
//! - **Walls**: perimeter tracing, seam splicing and wall synthesis
//! - **Screws**: bottom plate bosses anchored to wall points
//!
//! ### Output
//! - **Shape**: solid geometry tree
//! - **ScadRenderer**: deterministic OpenSCAD writer
//! - **Generator**: the end-to-end pipeline
//!
//! ## Architecture
//!
//! ```text
//! KeyData (bowl + thumb grids)
//!   ├── Switch plates, caps, webbing
//!   └── WallSequencer ──> splice ──> WallSynthesizer
//!                                      └── Screw anchors
//!
//! Generator
//!   └── Shape tree ──> ScadRenderer ──> product_*.scad
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dactylkit_designer::{GenerationOptions, Generator};
//!
//! let options = GenerationOptions::default().with_output_dir("out");
//! let report = Generator::new(options).run()?;
//! println!("wrote {} files", report.artifacts.len());
//! ```

pub mod connect;
pub mod error;
pub mod grid;
pub mod key;
pub mod layout;
pub mod pipeline;
pub mod scad_renderer;
pub mod screws;
pub mod shape;
pub mod switch;
pub mod wall;

pub use error::{DesignerError, Result};
pub use grid::{CornerLocation, GridCorner, KeyGrid, Neighbor};
pub use key::{Edge, Key, KeyType, Landmark, SaEdgeType};
pub use layout::{default_origin, x_axis_rotated_key, BowlPadding, KeyData, RotationDirection};
pub use pipeline::{
    CaseGeometry, GenerationContext, GenerationOptions, GenerationReport, Generator, OutputOptions,
};
pub use scad_renderer::ScadRenderer;
pub use screws::{ScrewAnchor, ScrewParams};
pub use shape::{hull, union_all, ApplyShape, Shape};
pub use wall::{
    splice, Direction, Seam, SequencerOptions, Wall, WallParams, WallPoint, WallPointId,
    WallSequence, WallSequencer, WallSlice, WallSynthesizer,
};
