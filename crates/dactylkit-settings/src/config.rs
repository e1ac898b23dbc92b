//! Generator configuration
//!
//! One file, in TOML or JSON, with a section per pipeline concern. Every
//! section falls back to its defaults, so an empty file is a valid config.

use std::path::{Path, PathBuf};

use dactylkit_designer::{
    BowlPadding, GenerationOptions, OutputOptions, ScrewParams, SequencerOptions, WallParams,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

pub const CONFIG_FILE_NAME: &str = "config.toml";
const APP_DIR: &str = "dactylkit";

/// Wall shape and tracing settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallSettings {
    pub base_distance: f64,
    pub base_width: f64,
    pub tilt_degrees: f64,
    pub post_offset_z: f64,
    /// Add edge midpoints to every wall segment
    pub dense: bool,
    pub round_corners: bool,
    /// Skip hulling neighbouring slices
    pub debug_slices: bool,
}

impl Default for WallSettings {
    fn default() -> Self {
        let params = WallParams::default();
        let sequencer = SequencerOptions::default();
        Self {
            base_distance: params.base_distance,
            base_width: params.base_width,
            tilt_degrees: params.tilt_degrees,
            post_offset_z: params.post_offset_z,
            dense: sequencer.dense,
            round_corners: sequencer.round_corners,
            debug_slices: params.debug_slices,
        }
    }
}

impl WallSettings {
    pub fn params(&self) -> WallParams {
        WallParams {
            base_distance: self.base_distance,
            base_width: self.base_width,
            tilt_degrees: self.tilt_degrees,
            post_offset_z: self.post_offset_z,
            debug_slices: self.debug_slices,
        }
    }

    pub fn sequencer(&self) -> SequencerOptions {
        SequencerOptions {
            dense: self.dense,
            round_corners: self.round_corners,
            ..SequencerOptions::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BottomPlateSettings {
    pub thickness: f64,
}

impl Default for BottomPlateSettings {
    fn default() -> Self {
        Self { thickness: 1.5 }
    }
}

/// Complete generator configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub output: OutputOptions,
    pub wall: WallSettings,
    pub bowl_padding: BowlPadding,
    pub screws: ScrewParams,
    pub bottom_plate: BottomPlateSettings,
}

fn check_positive(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(key, value))
    }
}

fn check_non_negative(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(key, value))
    }
}

fn format_of(path: &Path) -> ConfigResult<&'static str> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok("toml"),
        Some("json") => Ok("json"),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/dactylkit`
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// `<config dir>/dactylkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format_of(path)? {
            "json" => serde_json::from_str(&content)?,
            _ => toml::from_str(&content)?,
        };

        config.validate()?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, otherwise the default file if it exists, otherwise defaults
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Ok(default) if default.exists() => Self::load_from_file(&default),
            _ => {
                debug!("No configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            "json" => serde_json::to_string_pretty(self)?,
            _ => toml::to_string_pretty(self)
                .map_err(|e| SettingsError::SaveError(format!("Failed to serialize config: {e}")))?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;
        debug!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// The config as TOML, for `--print-config`
    pub fn to_toml(&self) -> SettingsResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| SettingsError::SaveError(format!("Failed to serialize config: {e}")))
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.output.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingKey("output.output_dir".to_string()));
        }

        check_positive("wall.base_distance", self.wall.base_distance)?;
        check_positive("wall.base_width", self.wall.base_width)?;
        if !(0.0..90.0).contains(&self.wall.tilt_degrees) {
            return Err(ConfigError::out_of_range(
                "wall.tilt_degrees",
                self.wall.tilt_degrees,
            ));
        }
        if !self.wall.post_offset_z.is_finite() {
            return Err(ConfigError::out_of_range(
                "wall.post_offset_z",
                self.wall.post_offset_z,
            ));
        }

        check_non_negative("bowl_padding.left", self.bowl_padding.left)?;
        check_non_negative("bowl_padding.right", self.bowl_padding.right)?;
        check_non_negative("bowl_padding.top", self.bowl_padding.top)?;

        check_positive("screws.height", self.screws.height)?;
        check_positive("screws.hole_radius", self.screws.hole_radius)?;
        check_positive("screws.boss_wall", self.screws.boss_wall)?;
        if self.screws.segments < 3 {
            return Err(ConfigError::out_of_range(
                "screws.segments",
                self.screws.segments,
            ));
        }

        check_positive("bottom_plate.thickness", self.bottom_plate.thickness)?;
        Ok(())
    }

    /// Options for a generator run
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            output: self.output.clone(),
            wall: self.wall.params(),
            sequencer: self.wall.sequencer(),
            bowl_padding: self.bowl_padding,
            screws: self.screws,
            bottom_plate_thickness: self.bottom_plate.thickness,
        }
    }
}
