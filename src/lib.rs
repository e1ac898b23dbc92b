//! # dactylkit
//!
//! Generates the case of a split ergonomic keyboard: a curved "bowl" of
//! switch plates, a thumb cluster, the wall traced around both, screw
//! bosses and a bottom plate. Output is OpenSCAD source.
//!
//! ## Architecture
//!
//! 1. **dactylkit-core** - transform chains, poses, shared constants, errors
//! 2. **dactylkit-designer** - keys, grids, wall tracing, case geometry, pipeline
//! 3. **dactylkit-settings** - configuration files
//! 4. **dactylkit** - command line front end

pub mod cli;

pub use dactylkit_core::{GeometryError, Pose, TransformList};
pub use dactylkit_designer::{
    GenerationOptions, GenerationReport, Generator, KeyData, WallSequence,
};
pub use dactylkit_settings::{GeneratorConfig, SettingsError};

pub use cli::Args;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Pretty stdout output filtered by `RUST_LOG`, INFO and above by default.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
