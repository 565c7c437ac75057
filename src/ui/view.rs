//! Derived view state for the board display.
//!
//! A [`BoardView`] is rebuilt from a [`BoardSnapshot`] in full on every refresh. Nothing
//! is patched incrementally, so the view can never drift from the model.

use crate::common::{Cell, Occupancy};
use crate::config::{EMPTY_GLYPH, PLAYER_ONE_GLYPH, PLAYER_TWO_GLYPH};
use crate::game::{BoardSnapshot, GameStatus};

pub const STARTING_TEXT: &str = "Starting game...";
pub const YOUR_TURN_TEXT: &str = "Your Turn";
pub const WAITING_TEXT: &str = "Waiting for other player...";
pub const WON_TEXT: &str = "You won!";
pub const LOST_TEXT: &str = "You lost!";
pub const TIED_TEXT: &str = "Tie game!";

/// Image shown in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Marker {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Marker {
    pub fn glyph(self) -> &'static str {
        match self {
            Marker::Empty => EMPTY_GLYPH,
            Marker::PlayerOne => PLAYER_ONE_GLYPH,
            Marker::PlayerTwo => PLAYER_TWO_GLYPH,
        }
    }
}

impl From<Occupancy> for Marker {
    fn from(value: Occupancy) -> Self {
        match value {
            Occupancy::Empty => Marker::Empty,
            Occupancy::PlayerOne => Marker::PlayerOne,
            Occupancy::PlayerTwo => Marker::PlayerTwo,
        }
    }
}

/// Visible state of one grid element. The cell is fixed when the grid is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    cell: Cell,
    pub marker: Marker,
    pub enabled: bool,
}

impl CellView {
    pub fn cell(&self) -> Cell {
        self.cell
    }
}

/// Status line text for a snapshot.
pub fn status_text(status: GameStatus, my_turn: bool) -> &'static str {
    match status {
        GameStatus::InProgress if my_turn => YOUR_TURN_TEXT,
        GameStatus::InProgress => WAITING_TEXT,
        GameStatus::Won => WON_TEXT,
        GameStatus::Lost => LOST_TEXT,
        GameStatus::Tied => TIED_TEXT,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    rows: usize,
    cols: usize,
    cells: Vec<CellView>,
    moves_left: usize,
    moves_left_text: String,
    status_text: &'static str,
}

impl BoardView {
    /// Build a grid matching the snapshot's dimensions. Every cell starts empty and disabled.
    pub fn new(snapshot: &impl BoardSnapshot) -> Self {
        let (rows, cols) = (snapshot.rows(), snapshot.cols());
        let cells = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| Cell::new(r, c)))
            .map(|cell| CellView {
                cell,
                marker: Marker::Empty,
                enabled: false,
            })
            .collect();
        Self {
            rows,
            cols,
            cells,
            moves_left: 0,
            moves_left_text: moves_left_label(0),
            status_text: STARTING_TEXT,
        }
    }

    /// Recompute every cell, the moves-left label and the status text from `snapshot`.
    ///
    /// Panics if a grid cell falls outside the snapshot; the grid and the model must agree
    /// on dimensions for the whole session.
    pub fn refresh(&mut self, snapshot: &impl BoardSnapshot) {
        let my_turn = snapshot.is_my_turn();
        for view in self.cells.iter_mut() {
            assert!(
                snapshot.contains(view.cell),
                "cell {} outside the {}x{} board",
                view.cell,
                snapshot.rows(),
                snapshot.cols()
            );
            let occupancy = snapshot.contents(view.cell);
            view.marker = Marker::from(occupancy);
            view.enabled = occupancy == Occupancy::Empty && snapshot.is_valid_move(view.cell) && my_turn;
        }
        self.moves_left = snapshot.moves_left();
        self.moves_left_text = moves_left_label(self.moves_left);
        self.status_text = status_text(snapshot.status(), my_turn);
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Panics if `cell` is outside the grid.
    pub fn cell(&self, cell: Cell) -> &CellView {
        assert!(
            cell.row() < self.rows && cell.col() < self.cols,
            "cell {} outside the {}x{} grid",
            cell,
            self.rows,
            self.cols
        );
        &self.cells[cell.row() * self.cols + cell.col()]
    }

    /// False for cells outside the grid.
    pub fn is_enabled(&self, cell: Cell) -> bool {
        cell.row() < self.rows && cell.col() < self.cols && self.cell(cell).enabled
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[CellView] {
        &self.cells
    }

    pub fn row(&self, row: usize) -> &[CellView] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn moves_left(&self) -> usize {
        self.moves_left
    }

    pub fn moves_left_text(&self) -> &str {
        &self.moves_left_text
    }

    pub fn status_text(&self) -> &'static str {
        self.status_text
    }
}

fn moves_left_label(n: usize) -> String {
    format!("Moves Left {}", n)
}
