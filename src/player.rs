use crate::{common::Cell, game::GameState};

/// Interface implemented by automated players.
pub trait Strategy: Send {
    /// Choose the next move for the local player, or `None` if there is none.
    fn choose(&mut self, state: &GameState) -> Option<Cell>;
}
