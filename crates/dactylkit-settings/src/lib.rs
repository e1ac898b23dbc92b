//! dactylkit Settings Crate
//!
//! Loads, validates and saves the generator configuration.

pub mod config;
pub mod error;

pub use config::{BottomPlateSettings, GeneratorConfig, WallSettings, CONFIG_FILE_NAME};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
