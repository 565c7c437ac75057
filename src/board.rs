//! Reversi board: disc placement, flipping and legal-move rules.

use core::fmt;

use crate::common::{BoardError, Cell, Occupancy, Player};
use crate::config::{DEFAULT_COLS, DEFAULT_ROWS, MAX_DIMENSION, MIN_DIMENSION};

/// The eight compass directions as (row, col) steps.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Occupancy>,
}

impl Board {
    /// Create an empty board. Both dimensions must be even and within
    /// `MIN_DIMENSION..=MAX_DIMENSION`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let valid = |n: usize| (MIN_DIMENSION..=MAX_DIMENSION).contains(&n) && n % 2 == 0;
        if !valid(rows) || !valid(cols) {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Occupancy::Empty; rows * cols],
        })
    }

    /// A standard 8x8 board with the four starting discs in place.
    pub fn standard() -> Self {
        let mut board = Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cells: vec![Occupancy::Empty; DEFAULT_ROWS * DEFAULT_COLS],
        };
        board.initialize();
        board
    }

    /// Clear the board and place the four centre discs.
    pub fn initialize(&mut self) {
        self.cells.fill(Occupancy::Empty);
        let (r, c) = (self.rows / 2, self.cols / 2);
        self.set(r - 1, c - 1, Occupancy::PlayerOne);
        self.set(r, c, Occupancy::PlayerOne);
        self.set(r - 1, c, Occupancy::PlayerTwo);
        self.set(r, c - 1, Occupancy::PlayerTwo);
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Occupancy, BoardError> {
        if !self.contains(row, col) {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(self.cells[row * self.cols + col])
    }

    fn set(&mut self, row: usize, col: usize, value: Occupancy) {
        self.cells[row * self.cols + col] = value;
    }

    /// Discs that `player` would flip by placing at (row, col).
    ///
    /// Returns an empty list when the cell is occupied; errors only when it is out of bounds.
    pub fn flips(&self, row: usize, col: usize, player: Player) -> Result<Vec<Cell>, BoardError> {
        if self.get(row, col)? != Occupancy::Empty {
            return Ok(Vec::new());
        }
        let mine = player.disc();
        let theirs = player.opponent().disc();
        let mut flipped = Vec::new();
        for (dr, dc) in DIRECTIONS {
            let mut run = Vec::new();
            let mut r = row as isize + dr;
            let mut c = col as isize + dc;
            while r >= 0 && c >= 0 && self.contains(r as usize, c as usize) {
                let here = self.cells[r as usize * self.cols + c as usize];
                if here == theirs {
                    run.push(Cell::new(r as usize, c as usize));
                } else {
                    // a run only counts when capped by our own disc
                    if here == mine {
                        flipped.append(&mut run);
                    }
                    break;
                }
                r += dr;
                c += dc;
            }
        }
        Ok(flipped)
    }

    /// True if `player` may place a disc at (row, col).
    pub fn is_legal(&self, row: usize, col: usize, player: Player) -> bool {
        self.flips(row, col, player)
            .map(|f| !f.is_empty())
            .unwrap_or(false)
    }

    /// All legal moves for `player`, in row-major order.
    pub fn legal_moves(&self, player: Player) -> Vec<Cell> {
        (0..self.rows)
            .flat_map(|r| (0..self.cols).map(move |c| Cell::new(r, c)))
            .filter(|cell| self.is_legal(cell.row(), cell.col(), player))
            .collect()
    }

    pub fn has_legal_move(&self, player: Player) -> bool {
        (0..self.rows).any(|r| (0..self.cols).any(|c| self.is_legal(r, c, player)))
    }

    /// Place a disc for `player` and flip the captured discs, returning how many flipped.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<usize, BoardError> {
        if self.get(row, col)? != Occupancy::Empty {
            return Err(BoardError::Occupied { row, col });
        }
        let flipped = self.flips(row, col, player)?;
        if flipped.is_empty() {
            return Err(BoardError::NoFlips { row, col });
        }
        let disc = player.disc();
        self.set(row, col, disc);
        for cell in &flipped {
            self.set(cell.row(), cell.col(), disc);
        }
        Ok(flipped.len())
    }

    /// Number of cells holding `value`.
    pub fn count(&self, value: Occupancy) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }

    pub fn empty_count(&self) -> usize {
        self.count(Occupancy::Empty)
    }

    /// The game ends once neither side can move.
    pub fn is_over(&self) -> bool {
        !self.has_legal_move(Player::One) && !self.has_legal_move(Player::Two)
    }

    /// Player with more discs, `None` on a tie.
    pub fn winner(&self) -> Option<Player> {
        let one = self.count(Occupancy::PlayerOne);
        let two = self.count(Occupancy::PlayerTwo);
        match one.cmp(&two) {
            core::cmp::Ordering::Greater => Some(Player::One),
            core::cmp::Ordering::Less => Some(Player::Two),
            core::cmp::Ordering::Equal => None,
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{} {{", self.rows, self.cols)?;
        for r in 0..self.rows {
            write!(f, "  ")?;
            for c in 0..self.cols {
                let ch = match self.cells[r * self.cols + c] {
                    Occupancy::Empty => '.',
                    Occupancy::PlayerOne => 'X',
                    Occupancy::PlayerTwo => 'O',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
