//! # Key Grid
//!
//! Rectangular rows x columns arrangement of optional keys. Holes are
//! `None`. Lookups take signed indices so callers can look past the edges
//! and simply get `None` back.

use std::fmt;

use tracing::debug;

use crate::error::{DesignerError, Result};
use crate::key::Key;

/// Corner of a key or of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerLocation {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl CornerLocation {
    pub const CLOCKWISE: [CornerLocation; 4] = [
        CornerLocation::TopLeft,
        CornerLocation::TopRight,
        CornerLocation::BottomRight,
        CornerLocation::BottomLeft,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            CornerLocation::TopLeft => "top_left",
            CornerLocation::TopRight => "top_right",
            CornerLocation::BottomRight => "bottom_right",
            CornerLocation::BottomLeft => "bottom_left",
        }
    }
}

impl fmt::Display for CornerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One of the eight cells around a grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Neighbor {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Neighbor {
    /// Row and column step towards this neighbour
    pub fn offset(self) -> (isize, isize) {
        match self {
            Neighbor::Up => (-1, 0),
            Neighbor::Down => (1, 0),
            Neighbor::Left => (0, -1),
            Neighbor::Right => (0, 1),
            Neighbor::UpLeft => (-1, -1),
            Neighbor::UpRight => (-1, 1),
            Neighbor::DownLeft => (1, -1),
            Neighbor::DownRight => (1, 1),
        }
    }

    pub fn opposite(self) -> Neighbor {
        match self {
            Neighbor::Up => Neighbor::Down,
            Neighbor::Down => Neighbor::Up,
            Neighbor::Left => Neighbor::Right,
            Neighbor::Right => Neighbor::Left,
            Neighbor::UpLeft => Neighbor::DownRight,
            Neighbor::UpRight => Neighbor::DownLeft,
            Neighbor::DownLeft => Neighbor::UpRight,
            Neighbor::DownRight => Neighbor::UpLeft,
        }
    }
}

impl fmt::Display for Neighbor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Neighbor::Up => "up",
            Neighbor::Down => "down",
            Neighbor::Left => "left",
            Neighbor::Right => "right",
            Neighbor::UpLeft => "up-left",
            Neighbor::UpRight => "up-right",
            Neighbor::DownLeft => "down-left",
            Neighbor::DownRight => "down-right",
        };
        f.write_str(name)
    }
}

/// One of a grid's four corner cells. `key` is `None` when the corner is a hole.
#[derive(Debug, Clone, Copy)]
pub struct GridCorner<'a> {
    pub key: Option<&'a Key>,
    pub location: CornerLocation,
    pub row: usize,
    pub column: usize,
}

impl GridCorner<'_> {
    pub fn is_same(&self, row: usize, column: usize) -> bool {
        self.row == row && self.column == column
    }

    pub fn is_missing(&self) -> bool {
        self.key.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct KeyGrid {
    rows: Vec<Vec<Option<Key>>>,
    columns: usize,
}

impl KeyGrid {
    /// Build a grid. Every row must have the same, non-zero length.
    pub fn new(rows: Vec<Vec<Option<Key>>>) -> Result<Self> {
        let columns = rows.first().map(Vec::len).unwrap_or(0);
        if columns == 0 {
            return Err(DesignerError::EmptyGrid);
        }
        if let Some((row, found)) = rows
            .iter()
            .enumerate()
            .map(|(i, r)| (i, r.len()))
            .find(|(_, len)| *len != columns)
        {
            return Err(DesignerError::NonRectangularGrid {
                row,
                expected: columns,
                found,
            });
        }
        debug!("Created {}x{} key grid", rows.len(), columns);
        Ok(Self { rows, columns })
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns
    }

    fn index(&self, row: isize, column: isize) -> Option<(usize, usize)> {
        let r = usize::try_from(row).ok()?;
        let c = usize::try_from(column).ok()?;
        (r < self.num_rows() && c < self.columns).then_some((r, c))
    }

    pub fn get_key(&self, row: isize, column: isize) -> Option<&Key> {
        let (r, c) = self.index(row, column)?;
        self.rows[r][c].as_ref()
    }

    pub fn get_key_mut(&mut self, row: isize, column: isize) -> Option<&mut Key> {
        let (r, c) = self.index(row, column)?;
        self.rows[r][c].as_mut()
    }

    /// Key one step from (`row`, `column`) towards `neighbor`
    pub fn get_key_located(&self, row: isize, column: isize, neighbor: Neighbor) -> Option<&Key> {
        let (dr, dc) = neighbor.offset();
        self.get_key(row + dr, column + dc)
    }

    pub fn get_key_located_up(&self, row: isize, column: isize) -> Option<&Key> {
        self.get_key_located(row, column, Neighbor::Up)
    }

    pub fn get_key_located_down(&self, row: isize, column: isize) -> Option<&Key> {
        self.get_key_located(row, column, Neighbor::Down)
    }

    pub fn get_key_located_left(&self, row: isize, column: isize) -> Option<&Key> {
        self.get_key_located(row, column, Neighbor::Left)
    }

    pub fn get_key_located_right(&self, row: isize, column: isize) -> Option<&Key> {
        self.get_key_located(row, column, Neighbor::Right)
    }

    pub fn get_key_located_up_left(&self, row: isize, column: isize) -> Option<&Key> {
        self.get_key_located(row, column, Neighbor::UpLeft)
    }

    pub fn get_key_located_up_right(&self, row: isize, column: isize) -> Option<&Key> {
        self.get_key_located(row, column, Neighbor::UpRight)
    }

    pub fn get_key_located_down_left(&self, row: isize, column: isize) -> Option<&Key> {
        self.get_key_located(row, column, Neighbor::DownLeft)
    }

    pub fn get_key_located_down_right(&self, row: isize, column: isize) -> Option<&Key> {
        self.get_key_located(row, column, Neighbor::DownRight)
    }

    /// Neighbour lookup starting from a grid corner descriptor
    pub fn get_key_next_to(&self, corner: &GridCorner<'_>, neighbor: Neighbor) -> Option<&Key> {
        self.get_key_located(corner.row as isize, corner.column as isize, neighbor)
    }

    fn corner(&self, location: CornerLocation) -> GridCorner<'_> {
        let last_row = self.num_rows() - 1;
        let last_column = self.columns - 1;
        let (row, column) = match location {
            CornerLocation::TopLeft => (0, 0),
            CornerLocation::TopRight => (0, last_column),
            CornerLocation::BottomRight => (last_row, last_column),
            CornerLocation::BottomLeft => (last_row, 0),
        };
        GridCorner {
            key: self.rows[row][column].as_ref(),
            location,
            row,
            column,
        }
    }

    pub fn corner_top_left(&self) -> GridCorner<'_> {
        self.corner(CornerLocation::TopLeft)
    }

    pub fn corner_top_right(&self) -> GridCorner<'_> {
        self.corner(CornerLocation::TopRight)
    }

    pub fn corner_bottom_right(&self) -> GridCorner<'_> {
        self.corner(CornerLocation::BottomRight)
    }

    pub fn corner_bottom_left(&self) -> GridCorner<'_> {
        self.corner(CornerLocation::BottomLeft)
    }

    /// The four grid corners, clockwise from top-left
    pub fn get_key_corners(&self) -> [GridCorner<'_>; 4] {
        CornerLocation::CLOCKWISE.map(|location| self.corner(location))
    }

    /// Cells of row `r`, left to right
    pub fn row(&self, r: usize) -> Vec<Option<&Key>> {
        self.rows
            .get(r)
            .map(|row| row.iter().map(Option::as_ref).collect())
            .unwrap_or_default()
    }

    /// Cells of column `c`, top to bottom
    pub fn column(&self, c: usize) -> Vec<Option<&Key>> {
        if c >= self.columns {
            return Vec::new();
        }
        self.rows.iter().map(|row| row[c].as_ref()).collect()
    }

    /// Populated keys of row `r`
    pub fn row_mut(&mut self, r: usize) -> impl Iterator<Item = &mut Key> {
        self.rows
            .get_mut(r)
            .into_iter()
            .flat_map(|row| row.iter_mut().flatten())
    }

    /// Populated keys of column `c`
    pub fn column_mut(&mut self, c: usize) -> impl Iterator<Item = &mut Key> {
        self.rows.iter_mut().filter_map(move |row| row.get_mut(c)?.as_mut())
    }

    /// All populated keys, row-major
    pub fn keys(&self) -> Vec<&Key> {
        self.rows.iter().flat_map(|row| row.iter().flatten()).collect()
    }

    pub fn keys_mut(&mut self) -> impl Iterator<Item = &mut Key> {
        self.rows.iter_mut().flat_map(|row| row.iter_mut().flatten())
    }

    pub fn find(&self, name: &str) -> Option<&Key> {
        self.keys().into_iter().find(|k| k.name == name)
    }

    /// Row and column of the key called `name`
    pub fn position_of(&self, name: &str) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|cell| cell.as_ref().is_some_and(|k| k.name == name))
                .map(|c| (r, c))
        })
    }
}
