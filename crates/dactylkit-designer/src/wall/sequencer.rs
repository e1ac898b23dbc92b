//! Perimeter walk that turns a key grid into a wall point ring.
//!
//! Edges are visited clockwise: top (left to right), right (top to bottom),
//! bottom (right to left), left (bottom to top). Each edge starts at its
//! corner cell and stops before the next corner, which belongs to the next
//! edge. A cell contributes its leading corner in the edge's outward
//! direction, plus its edge midpoint when the sequence is dense. Holes along
//! an edge are skipped.
//!
//! A hole at a grid corner is bridged with filler points taken from the two
//! keys that flank it:
//!
//! 1. the key on the previous edge closes that edge at its corner nearest the hole
//! 2. the key on this edge gets a bridging point facing the previous edge,
//!    pushed slightly further out and thicker so the wall wraps the hole
//! 3. the same corner of the key on this edge, facing this edge. That key's
//!    own corner point is then not repeated.
//!
//! When the key on this edge is also the edge's closing corner the third
//! filler is left out, since the next edge starts there.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{Direction, WallPoint, WallSequence};
use crate::error::{DesignerError, Result};
use crate::grid::{GridCorner, KeyGrid};
use crate::key::{Key, Landmark};

/// Sequencer tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequencerOptions {
    /// Add each key's edge midpoint after its corner point
    pub dense: bool,
    /// Emit a closing point for the previous edge at every populated grid corner,
    /// so the hull turns the corner instead of cutting across it
    pub round_corners: bool,
    /// Extra thickness for corner and filler points
    pub corner_extra_width: f64,
    /// Extra outward distance for the bridging filler
    pub bridge_extra_distance: f64,
    /// Extra thickness for the bridging filler
    pub bridge_extra_width: f64,
}

impl Default for SequencerOptions {
    fn default() -> Self {
        Self {
            dense: false,
            round_corners: true,
            corner_extra_width: 0.5,
            bridge_extra_distance: 0.5,
            bridge_extra_width: 0.75,
        }
    }
}

/// Walks a grid's perimeter
pub struct WallSequencer<'a> {
    grid: &'a KeyGrid,
    options: SequencerOptions,
}

impl<'a> WallSequencer<'a> {
    pub fn new(grid: &'a KeyGrid) -> Self {
        Self::with_options(grid, SequencerOptions::default())
    }

    pub fn with_options(grid: &'a KeyGrid, options: SequencerOptions) -> Self {
        Self { grid, options }
    }

    /// Cells of the edge facing `direction`, starting at its corner and
    /// stopping before the next one
    fn edge_cells(&self, direction: Direction) -> Vec<(usize, usize)> {
        let last_row = self.grid.num_rows() - 1;
        let last_column = self.grid.num_columns() - 1;
        match direction {
            Direction::Up => (0..last_column).map(|c| (0, c)).collect(),
            Direction::Right => (0..last_row).map(|r| (r, last_column)).collect(),
            Direction::Down => (1..=last_column).rev().map(|c| (last_row, c)).collect(),
            Direction::Left => (1..=last_row).rev().map(|r| (r, 0)).collect(),
        }
    }

    fn emit_cell(&self, out: &mut WallSequence, key: &Key, direction: Direction) {
        out.push(WallPoint::on_key(
            key,
            Landmark::Corner(direction.leading_corner()),
            direction,
        ));
        self.emit_midpoint(out, key, direction);
    }

    fn emit_midpoint(&self, out: &mut WallSequence, key: &Key, direction: Direction) {
        if self.options.dense {
            out.push(WallPoint::on_key(
                key,
                Landmark::Middle(direction.edge()),
                direction,
            ));
        }
    }

    fn emit_corner(&self, out: &mut WallSequence, key: &Key, direction: Direction) {
        let landmark = Landmark::Corner(direction.leading_corner());
        if self.options.round_corners {
            let width = self.options.corner_extra_width;
            out.push(
                WallPoint::on_key(key, landmark, direction.previous()).with_extra(0.0, width),
            );
            out.push(WallPoint::on_key(key, landmark, direction).with_extra(0.0, width));
        } else {
            out.push(WallPoint::on_key(key, landmark, direction));
        }
        self.emit_midpoint(out, key, direction);
    }

    /// Fillers for a hole at `corner`. Returns how many edge cells were consumed.
    fn emit_missing_corner(
        &self,
        out: &mut WallSequence,
        corner: &GridCorner<'_>,
        direction: Direction,
        edge_len: usize,
    ) -> Result<usize> {
        let previous = direction.previous();
        let missing = |neighbor| DesignerError::MissingNeighbor {
            corner: corner.location,
            neighbor,
            row: corner.row,
            column: corner.column,
        };

        let back = previous.walk().opposite();
        let prev_key = self
            .grid
            .get_key_next_to(corner, back)
            .ok_or_else(|| missing(back))?;
        let forward = direction.walk();
        let next_key = self
            .grid
            .get_key_next_to(corner, forward)
            .ok_or_else(|| missing(forward))?;

        debug!(
            "Bridging missing {} corner between {} and {}",
            corner.location, prev_key.name, next_key.name
        );

        let landmark = Landmark::Corner(direction.leading_corner());
        let width = self.options.corner_extra_width;
        out.push(WallPoint::on_key(prev_key, landmark, previous).with_extra(0.0, width));
        out.push(
            WallPoint::on_key(next_key, landmark, previous).with_extra(
                self.options.bridge_extra_distance,
                self.options.bridge_extra_width,
            ),
        );

        // next_key is the closing corner of this edge; the next edge handles it
        if edge_len < 2 {
            return Ok(1);
        }
        out.push(WallPoint::on_key(next_key, landmark, direction).with_extra(0.0, width));
        self.emit_midpoint(out, next_key, direction);
        Ok(2)
    }

    /// Walk the perimeter once and return the ring of wall points
    pub fn sequence(&self) -> Result<WallSequence> {
        let rows = self.grid.num_rows();
        let columns = self.grid.num_columns();
        if rows < 2 || columns < 2 {
            return Err(DesignerError::GridTooSmall { rows, columns });
        }

        let corners = self.grid.get_key_corners();
        let mut out = WallSequence::new();

        for (corner, direction) in corners.iter().zip(Direction::CLOCKWISE) {
            let before = out.len();
            let cells = self.edge_cells(direction);

            let consumed = match corner.key {
                Some(key) => {
                    self.emit_corner(&mut out, key, direction);
                    1
                }
                None => self.emit_missing_corner(&mut out, corner, direction, cells.len())?,
            };

            for &(r, c) in cells.iter().skip(consumed) {
                if let Some(key) = self.grid.get_key(r as isize, c as isize) {
                    self.emit_cell(&mut out, key, direction);
                }
            }

            if out.len() == before {
                warn!("Edge facing {} produced no wall points", direction);
            }
        }

        debug!(
            "Sequenced {} wall points around a {}x{} grid",
            out.len(),
            rows,
            columns
        );
        Ok(out)
    }
}
