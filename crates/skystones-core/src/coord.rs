//! Grid coordinates for the 4x4 board.
//!
//! This module provides the coordinate types used throughout the engine:
//! - `Position`: a 1-based (row, col) cell, with `"row.col"` notation
//! - `Direction`: the four cardinal facings of a card and their offsets
//! - `Quadrant`: the four 2x2 corners of the board
//!
//! Rows grow downward (row 1 is the top edge) and columns grow to the right.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side length of the board
pub const BOARD_SIZE: usize = 4;

/// Cardinal facing of a card edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward row 1
    North,
    /// Toward the last row
    South,
    /// Toward the last column
    East,
    /// Toward column 1
    West,
}

impl Direction {
    /// All directions in capture-resolution order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The facing on the other side of a shared edge
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// (row, col) step taken when moving one cell in this direction
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

impl FromStr for Direction {
    type Err = GameError;

    /// Accepts compass names as well as the up/down/left/right and
    /// top/bottom naming used by older card sheets.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "up" | "top" => Ok(Direction::North),
            "south" | "down" | "bottom" => Ok(Direction::South),
            "east" | "right" => Ok(Direction::East),
            "west" | "left" => Ok(Direction::West),
            _ => Err(GameError::UnknownDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A board cell, 1-based.
///
/// A `Position` may hold any values; use [`Position::is_valid`] or the
/// board's checks to reject cells outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether both coordinates are in `1..=BOARD_SIZE`
    pub const fn is_valid(&self) -> bool {
        self.row >= 1 && self.row <= BOARD_SIZE && self.col >= 1 && self.col <= BOARD_SIZE
    }

    /// The adjacent cell in `direction`, or `None` past the board edge
    pub fn neighbor(&self, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.offset();
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if row < 1 || col < 1 {
            return None;
        }
        let pos = Position::new(row as usize, col as usize);
        pos.is_valid().then_some(pos)
    }

    /// Index into a row-major cell array. Caller guarantees validity.
    pub(crate) const fn index(&self) -> usize {
        (self.row - 1) * BOARD_SIZE + (self.col - 1)
    }

    /// Every cell on the board, row-major
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=BOARD_SIZE).flat_map(|row| (1..=BOARD_SIZE).map(move |col| Position::new(row, col)))
    }

    /// Which quadrant this cell belongs to
    pub fn quadrant(&self) -> Result<Quadrant, GameError> {
        if !self.is_valid() {
            return Err(GameError::OutOfRange {
                row: self.row,
                col: self.col,
            });
        }
        let half = BOARD_SIZE / 2;
        let top = self.row <= half;
        let left = self.col <= half;
        Ok(match (top, left) {
            (true, true) => Quadrant::TopLeft,
            (true, false) => Quadrant::TopRight,
            (false, true) => Quadrant::BottomLeft,
            (false, false) => Quadrant::BottomRight,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.row, self.col)
    }
}

impl FromStr for Position {
    type Err = GameError;

    /// Parse `"row.col"`, e.g. `"3.4"`. Range is not checked here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_error =
            || GameError::FormatError(format!("expected 'row.col' with integers, got '{s}'"));

        let mut parts = s.split('.');
        let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format_error());
        };
        let row = row.trim().parse().map_err(|_| format_error())?;
        let col = col.trim().parse().map_err(|_| format_error())?;
        Ok(Position::new(row, col))
    }
}

/// One of the four 2x2 corners of the board.
///
/// ```text
///   1 | 2
///  -------
///   3 | 4
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quadrant {
    TopLeft = 1,
    TopRight = 2,
    BottomLeft = 3,
    BottomRight = 4,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Look up a quadrant by its numeric id (1..=4)
    pub fn from_id(id: u8) -> Result<Self, GameError> {
        match id {
            1 => Ok(Quadrant::TopLeft),
            2 => Ok(Quadrant::TopRight),
            3 => Ok(Quadrant::BottomLeft),
            4 => Ok(Quadrant::BottomRight),
            _ => Err(GameError::InvalidQuadrant(id)),
        }
    }

    pub const fn id(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Quadrant::TopLeft => "top-left",
            Quadrant::TopRight => "top-right",
            Quadrant::BottomLeft => "bottom-left",
            Quadrant::BottomRight => "bottom-right",
        }
    }

    /// The cells of this quadrant, row-major
    pub fn cells(self) -> [Position; 4] {
        let half = BOARD_SIZE / 2;
        let (row0, col0) = match self {
            Quadrant::TopLeft => (1, 1),
            Quadrant::TopRight => (1, half + 1),
            Quadrant::BottomLeft => (half + 1, 1),
            Quadrant::BottomRight => (half + 1, half + 1),
        };
        [
            Position::new(row0, col0),
            Position::new(row0, col0 + 1),
            Position::new(row0 + 1, col0),
            Position::new(row0 + 1, col0 + 1),
        ]
    }
}
