//! # Generation pipeline
//!
//! Builds both halves of the case and writes them out:
//!
//! 1. switch plates (and optionally caps) of every bowl key
//! 2. bowl plate webbing
//! 3. bowl and thumb wall rings, spliced and turned into the wall solid
//! 4. thumb plates and webbing
//! 5. screw bosses at named wall points
//! 6. negative shapes (screw holes, controller pocket) subtracted
//! 7. left half, mirrored right half and the bottom plates written to disk
//!
//! Steps 1 to 3 can each dump a `validate_0N_*.scad` snapshot. State that
//! later steps need (screw positions, shapes to subtract, written files) is
//! carried in an explicit [`GenerationContext`].

use std::path::PathBuf;

use dactylkit_core::{Point3, TransformList};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::connect::connect_grid_internal;
use crate::error::Result;
use crate::key::Key;
use crate::layout::{default_origin, BowlPadding, KeyData};
use crate::screws::{holes, inserts, screw_locations, ScrewParams};
use crate::shape::{hull, union_all, Shape};
use crate::wall::{
    splice, SequencerOptions, WallParams, WallSequence, WallSequencer, WallSynthesizer,
};

/// Which files to produce and where
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    pub output_dir: PathBuf,
    /// Write the validate_0N snapshots
    pub intermediate_artifacts: bool,
    /// Also write the mirrored right half
    pub mirrored_half: bool,
    pub bottom_plate: bool,
    /// Draw keycaps on the plates
    pub add_caps: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("out"),
            intermediate_artifacts: true,
            mirrored_half: true,
            bottom_plate: true,
            add_caps: false,
        }
    }
}

/// Everything the generator needs
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    pub output: OutputOptions,
    pub wall: WallParams,
    pub sequencer: SequencerOptions,
    pub bowl_padding: BowlPadding,
    pub screws: ScrewParams,
    /// Bottom plate thickness
    pub bottom_plate_thickness: f64,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            output: OutputOptions::default(),
            wall: WallParams::default(),
            sequencer: SequencerOptions::default(),
            bowl_padding: BowlPadding::default(),
            screws: ScrewParams::default(),
            bottom_plate_thickness: 1.5,
        }
    }
}

impl GenerationOptions {
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output.output_dir = dir.into();
        self
    }
}

/// State handed from one pipeline step to the next
#[derive(Debug, Clone, Default)]
pub struct GenerationContext {
    pub screw_locations: Vec<Point3<f64>>,
    /// Subtracted from the finished case
    pub negative_shapes: Vec<Shape>,
    /// Files written so far, in order
    pub artifacts: Vec<PathBuf>,
    pub wall_points: usize,
}

impl GenerationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold another step's results into this one
    pub fn merge(&mut self, other: GenerationContext) {
        self.screw_locations.extend(other.screw_locations);
        self.negative_shapes.extend(other.negative_shapes);
        self.artifacts.extend(other.artifacts);
        self.wall_points += other.wall_points;
    }
}

/// What a run produced
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub artifacts: Vec<PathBuf>,
    pub wall_points: usize,
    pub screw_locations: Vec<Point3<f64>>,
    pub key_count: usize,
}

/// Geometry of one finished half, before anything is written
#[derive(Debug, Clone)]
pub struct CaseGeometry {
    pub case: Shape,
    pub bottom_plate: Shape,
}

pub struct Generator {
    options: GenerationOptions,
    origin: TransformList,
}

impl Generator {
    pub fn new(options: GenerationOptions) -> Self {
        Self {
            options,
            origin: default_origin(),
        }
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Layout with the configured padding applied
    pub fn key_data(&self) -> Result<KeyData> {
        let mut data = KeyData::new(self.origin.clone())?;
        data.apply_bowl_padding(&self.options.bowl_padding);
        Ok(data)
    }

    /// The spliced bowl + thumb wall ring
    pub fn wall_sequence(&self, data: &KeyData) -> Result<WallSequence> {
        let bowl = WallSequencer::with_options(&data.bowl, self.options.sequencer).sequence()?;
        let thumb = WallSequencer::with_options(&data.thumb, self.options.sequencer).sequence()?;
        splice(&bowl, &thumb, &data.seam())
    }

    fn plates<'a>(&self, keys: impl IntoIterator<Item = &'a Key>) -> Vec<Shape> {
        let mut shapes = Vec::new();
        for key in keys {
            shapes.push(key.switch_shape());
            if self.options.output.add_caps {
                shapes.push(key.cap_shape().color("red"));
            }
        }
        shapes
    }

    fn snapshot(&self, ctx: &mut GenerationContext, name: &str, shapes: &[Shape]) -> Result<()> {
        if !self.options.output.intermediate_artifacts {
            return Ok(());
        }
        let path = self.options.output.output_dir.join(name);
        union_all(shapes.iter().cloned()).write_to_file(&path)?;
        ctx.artifacts.push(path);
        Ok(())
    }

    /// Build one half without writing the final products
    pub fn build(&self, data: &KeyData, ctx: &mut GenerationContext) -> Result<CaseGeometry> {
        let mut shapes = self.plates(data.bowl.keys());
        self.snapshot(ctx, "validate_01_bowl_keys.scad", &shapes)?;

        shapes.push(connect_grid_internal(&data.bowl));
        self.snapshot(ctx, "validate_02_bowl_grid.scad", &shapes)?;

        let sequence = self.wall_sequence(data)?;
        let wall = WallSynthesizer::new(self.options.wall).build(&sequence)?;
        ctx.wall_points = sequence.len();
        shapes.push(wall.shape);
        self.snapshot(ctx, "validate_03_bowl_walls.scad", &shapes)?;

        shapes.extend(self.plates(data.thumb.keys()));
        shapes.push(data.connect_thumb()?);

        let mut screws = GenerationContext::new();
        screws.screw_locations = screw_locations(&sequence, &data.screw_anchors())?;
        ctx.merge(screws);
        shapes.push(inserts(&self.options.screws, &ctx.screw_locations));

        let screw_holes = holes(&self.options.screws, &ctx.screw_locations);
        ctx.negative_shapes.push(screw_holes.clone());
        ctx.negative_shapes.push(data.holder_cutout()?);

        let case = union_all(shapes).subtract(&union_all(ctx.negative_shapes.iter().cloned()));

        let footprint = std::iter::once(case.clone())
            .chain(data.all_keys().into_iter().map(|k| hull([k.switch_shape()])));
        let bottom_plate = union_all(footprint)
            .projection()
            .linear_extrude(self.options.bottom_plate_thickness)
            .subtract(&screw_holes);

        Ok(CaseGeometry { case, bottom_plate })
    }

    fn write(&self, ctx: &mut GenerationContext, name: &str, shape: &Shape) -> Result<()> {
        let path = self.options.output.output_dir.join(name);
        shape.write_to_file(&path)?;
        info!("Wrote {}", path.display());
        ctx.artifacts.push(path);
        Ok(())
    }

    /// Run the whole pipeline
    pub fn run(&self) -> Result<GenerationReport> {
        info!(
            "Generating case into {}",
            self.options.output.output_dir.display()
        );
        let data = self.key_data()?;
        let mut ctx = GenerationContext::new();
        let geometry = self.build(&data, &mut ctx)?;

        self.write(&mut ctx, "product_left.scad", &geometry.case)?;
        if self.options.output.mirrored_half {
            self.write(&mut ctx, "product_right.scad", &geometry.case.mirror_x())?;
        }
        if self.options.output.bottom_plate {
            self.write(&mut ctx, "product_left_bottom.scad", &geometry.bottom_plate)?;
            if self.options.output.mirrored_half {
                self.write(
                    &mut ctx,
                    "product_right_bottom.scad",
                    &geometry.bottom_plate.mirror_x(),
                )?;
            }
        }

        debug!("Generation context: {} negative shapes", ctx.negative_shapes.len());
        Ok(GenerationReport {
            artifacts: ctx.artifacts,
            wall_points: ctx.wall_points,
            screw_locations: ctx.screw_locations,
            key_count: data.all_keys().len(),
        })
    }
}
