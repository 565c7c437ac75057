//! Common types for Reversi: board coordinates, players, occupancy and board errors.

use core::fmt;
use serde::{Deserialize, Serialize};

/// A single addressable board position.
///
/// Fields are private so a cell cannot be altered after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    row: usize,
    col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn row(&self) -> usize {
        self.row
    }

    pub const fn col(&self) -> usize {
        self.col
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The occupancy value this player's discs have on the board.
    pub const fn disc(self) -> Occupancy {
        match self {
            Player::One => Occupancy::PlayerOne,
            Player::Two => Occupancy::PlayerTwo,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "player one"),
            Player::Two => write!(f, "player two"),
        }
    }
}

/// Contents of a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Occupancy {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Occupancy {
    /// The player owning a disc here, if any.
    pub const fn owner(self) -> Option<Player> {
        match self {
            Occupancy::Empty => None,
            Occupancy::PlayerOne => Some(Player::One),
            Occupancy::PlayerTwo => Some(Player::Two),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Requested dimensions are odd or outside the supported range.
    InvalidDimensions { rows: usize, cols: usize },
    /// Row or column index is outside the board.
    OutOfBounds { row: usize, col: usize },
    /// The target cell already holds a disc.
    Occupied { row: usize, col: usize },
    /// Placing here would not flip any opposing disc.
    NoFlips { row: usize, col: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidDimensions { rows, cols } => {
                write!(f, "Invalid board dimensions: {}x{}", rows, cols)
            }
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is outside the board", row, col)
            }
            BoardError::Occupied { row, col } => {
                write!(f, "Cell ({}, {}) is already occupied", row, col)
            }
            BoardError::NoFlips { row, col } => {
                write!(f, "Move at ({}, {}) flips no discs", row, col)
            }
        }
    }
}

impl std::error::Error for BoardError {}
