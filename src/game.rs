use parking_lot::{Mutex, RwLock, RwLockReadGuard};

use crate::{
    board::Board,
    common::{BoardError, Cell, Occupancy, Player},
};

/// Current status of a game, from the local player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
    Tied,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Read-only queries a view needs from the game state.
///
/// `GameState` is the production implementation; the seam lets views be driven by
/// hand-built snapshots.
pub trait BoardSnapshot {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    /// Occupancy of `cell`. Panics if the cell is outside the board.
    fn contents(&self, cell: Cell) -> Occupancy;
    /// Whether the local player may place a disc at `cell`.
    fn is_valid_move(&self, cell: Cell) -> bool;
    fn is_my_turn(&self) -> bool;
    fn moves_left(&self) -> usize;
    fn status(&self) -> GameStatus;

    fn contains(&self, cell: Cell) -> bool {
        cell.row() < self.rows() && cell.col() < self.cols()
    }
}

/// Snapshot of one client's view of the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    me: Player,
    my_turn: bool,
    status: GameStatus,
    turn: u64,
    last_error: Option<String>,
    closed: bool,
}

impl GameState {
    pub fn new(board: Board, me: Player) -> Self {
        Self {
            board,
            me,
            my_turn: false,
            status: GameStatus::InProgress,
            turn: 0,
            last_error: None,
            closed: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Which seat this client plays.
    pub fn me(&self) -> Player {
        self.me
    }

    /// Number of times the server has asked this client to move.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Reason attached to the most recent rejected move or session error.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// True once the session has ended abnormally; no further updates will arrive.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl BoardSnapshot for GameState {
    fn rows(&self) -> usize {
        self.board.rows()
    }

    fn cols(&self) -> usize {
        self.board.cols()
    }

    fn contents(&self, cell: Cell) -> Occupancy {
        match self.board.get(cell.row(), cell.col()) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }

    fn is_valid_move(&self, cell: Cell) -> bool {
        self.board.is_legal(cell.row(), cell.col(), self.me)
    }

    /// Never true once the game has finished.
    fn is_my_turn(&self) -> bool {
        self.my_turn && self.status == GameStatus::InProgress
    }

    fn moves_left(&self) -> usize {
        self.board.empty_count()
    }

    fn status(&self) -> GameStatus {
        self.status
    }
}

type Observer = Box<dyn Fn() + Send + Sync>;

/// Shared, observable game state.
///
/// The network client is the only writer. Every mutation notifies all observers after
/// the write lock has been released, in mutation order. Observers run on the mutating
/// thread and must not call back into `subscribe`.
pub struct GameModel {
    state: RwLock<GameState>,
    observers: Mutex<Vec<Observer>>,
}

impl GameModel {
    pub fn new(rows: usize, cols: usize, me: Player) -> Result<Self, BoardError> {
        Ok(Self::from_state(GameState::new(Board::new(rows, cols)?, me)))
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state: RwLock::new(state),
            observers: Mutex::new(Vec::new()),
        }
    }

    /// Register a callback invoked after every mutation.
    pub fn subscribe<F>(&self, observer: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.observers.lock().push(Box::new(observer));
    }

    /// Borrow the current state. Hold the guard briefly; writers wait on it.
    pub fn read(&self) -> RwLockReadGuard<'_, GameState> {
        self.state.read()
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> GameState {
        self.state.read().clone()
    }

    fn update<R>(&self, f: impl FnOnce(&mut GameState) -> R) -> R {
        let result = {
            let mut state = self.state.write();
            f(&mut state)
        };
        self.notify();
        result
    }

    fn notify(&self) {
        for observer in self.observers.lock().iter() {
            observer();
        }
    }

    /// Place the starting discs and begin play.
    pub fn initialize_game(&self) {
        self.update(|s| {
            s.board.initialize();
            s.status = GameStatus::InProgress;
            s.my_turn = false;
            s.last_error = None;
        });
    }

    /// The server is waiting for this client's move.
    pub fn request_move(&self) {
        self.update(|s| {
            s.my_turn = true;
            s.turn += 1;
        });
    }

    /// A move has been sent; no further input until the server asks again.
    pub fn end_turn(&self) {
        self.update(|s| s.my_turn = false);
    }

    /// Apply a move confirmed by the server.
    pub fn move_made(&self, row: usize, col: usize, player: Player) -> Result<usize, BoardError> {
        self.update(|s| {
            s.my_turn = false;
            let result = s.board.place(row, col, player);
            match &result {
                Ok(_) => s.last_error = None,
                Err(e) => s.last_error = Some(e.to_string()),
            }
            result
        })
    }

    pub fn move_rejected(&self, reason: impl Into<String>) {
        let reason = reason.into();
        self.update(|s| s.last_error = Some(reason));
    }

    pub fn finish(&self, status: GameStatus) {
        self.update(|s| {
            s.status = status;
            s.my_turn = false;
        });
    }

    /// Record a session-level failure and close the session. The board stays where it was.
    pub fn close_with_error(&self, reason: impl Into<String>) {
        let reason = reason.into();
        self.update(|s| {
            s.my_turn = false;
            s.last_error = Some(reason);
            s.closed = true;
        });
    }
}
