//! # Walls
//!
//! The case wall is described by an ordered ring of [`WallPoint`]s that runs
//! clockwise around the outside of the key plates. The pipeline is:
//!
//! 1. [`sequencer`] walks a [`KeyGrid`](crate::grid::KeyGrid)'s perimeter and
//!    emits points, bridging holes at the grid corners with filler points
//! 2. [`seam`] splices a second grid's ring into the first at named points
//! 3. [`synth`] turns each point into a wall slice and hulls neighbouring
//!    slices into the wall solid

pub mod seam;
pub mod sequencer;
pub mod synth;

use std::fmt;

use dactylkit_core::TransformList;

use crate::grid::{CornerLocation, Neighbor};
use crate::key::{Edge, Key, Landmark};

pub use seam::{splice, Seam};
pub use sequencer::{SequencerOptions, WallSequencer};
pub use synth::{Wall, WallParams, WallSlice, WallSynthesizer};

/// Outward direction a wall point extrudes in, in the key's own frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Perimeter edges in walking order
    pub const CLOCKWISE: [Direction; 4] =
        [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    pub fn previous(self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Right => Direction::Up,
            Direction::Down => Direction::Right,
            Direction::Left => Direction::Down,
        }
    }

    /// Corner a cell on this edge contributes, the one met first when walking clockwise
    pub fn leading_corner(self) -> CornerLocation {
        match self {
            Direction::Up => CornerLocation::TopLeft,
            Direction::Right => CornerLocation::TopRight,
            Direction::Down => CornerLocation::BottomRight,
            Direction::Left => CornerLocation::BottomLeft,
        }
    }

    /// Key edge facing this direction
    pub fn edge(self) -> Edge {
        match self {
            Direction::Up => Edge::Top,
            Direction::Right => Edge::Right,
            Direction::Down => Edge::Bottom,
            Direction::Left => Edge::Left,
        }
    }

    /// Grid step taken while walking the edge facing this direction
    pub fn walk(self) -> Neighbor {
        match self {
            Direction::Up => Neighbor::Right,
            Direction::Right => Neighbor::Down,
            Direction::Down => Neighbor::Left,
            Direction::Left => Neighbor::Up,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Stable name of a wall point, used to address seams and screw anchors
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WallPointId {
    pub key: String,
    pub landmark: Landmark,
    pub direction: Direction,
}

impl WallPointId {
    pub fn new(key: impl Into<String>, landmark: Landmark, direction: Direction) -> Self {
        Self {
            key: key.into(),
            landmark,
            direction,
        }
    }

    pub fn corner(key: impl Into<String>, corner: CornerLocation, direction: Direction) -> Self {
        Self::new(key, Landmark::Corner(corner), direction)
    }
}

impl fmt::Display for WallPointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.key, self.landmark, self.direction)
    }
}

/// An anchor on the outside of the plate and the direction the wall leaves it in
#[derive(Debug, Clone, PartialEq)]
pub struct WallPoint {
    pub anchor: TransformList,
    pub direction: Direction,
    /// Added to the base outward distance
    pub extra_distance: f64,
    /// Added to the base wall thickness
    pub extra_width: f64,
    pub id: Option<WallPointId>,
}

impl WallPoint {
    pub fn new(anchor: TransformList, direction: Direction) -> Self {
        Self {
            anchor,
            direction,
            extra_distance: 0.0,
            extra_width: 0.0,
            id: None,
        }
    }

    /// Point at a landmark of `key`, named after it
    pub fn on_key(key: &Key, landmark: Landmark, direction: Direction) -> Self {
        Self {
            id: Some(WallPointId::new(key.name.clone(), landmark, direction)),
            ..Self::new(key.landmark(landmark), direction)
        }
    }

    pub fn with_extra(mut self, extra_distance: f64, extra_width: f64) -> Self {
        self.extra_distance = extra_distance;
        self.extra_width = extra_width;
        self
    }

    pub fn has_id(&self, id: &WallPointId) -> bool {
        self.id.as_ref() == Some(id)
    }
}

/// An ordered, cyclic list of wall points
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WallSequence {
    points: Vec<WallPoint>,
}

impl WallSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: WallPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[WallPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WallPoint> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<WallPoint> {
        self.points
    }

    /// Index of the point named `id`
    pub fn position(&self, id: &WallPointId) -> Option<usize> {
        self.points.iter().position(|p| p.has_id(id))
    }

    pub fn find(&self, id: &WallPointId) -> Option<&WallPoint> {
        self.position(id).map(|i| &self.points[i])
    }

    /// Names of every point, in order. Unnamed points are skipped.
    pub fn ids(&self) -> Vec<String> {
        self.points
            .iter()
            .filter_map(|p| p.id.as_ref().map(ToString::to_string))
            .collect()
    }
}

impl FromIterator<WallPoint> for WallSequence {
    fn from_iter<I: IntoIterator<Item = WallPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WallSequence {
    type Item = &'a WallPoint;
    type IntoIter = std::slice::Iter<'a, WallPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
