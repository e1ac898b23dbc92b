//! Command line arguments

use std::path::PathBuf;

use clap::Parser;
use dactylkit_settings::GeneratorConfig;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

/// Generate an ergonomic keyboard case as OpenSCAD files
#[derive(Parser, Debug, Default)]
#[command(author, version = LONG_VERSION, about, long_about = None)]
pub struct Args {
    /// Configuration file (.toml or .json); defaults to the user config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory the .scad files are written to
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Emit unjoined wall slices instead of the hulled wall
    #[arg(long)]
    pub debug_walls: bool,

    /// Add edge midpoints to every wall segment
    #[arg(long)]
    pub dense_walls: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Flags given on the command line win over the config file
    pub fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(dir) = &self.output_dir {
            config.output.output_dir = dir.clone();
        }
        if self.debug_walls {
            config.wall.debug_slices = true;
        }
        if self.dense_walls {
            config.wall.dense = true;
        }
    }
}
