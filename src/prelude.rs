//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, BoardSnapshot, Cell, GameModel, GameState, GameStatus, Occupancy, Player,
};

pub use crate::client::{MoveSender, NetworkClient};
pub use crate::ui::{BoardView, ClientUi, InputDispatcher, MoveSubmitter, UiEvent};

pub use crate::transport::{in_memory::InMemoryTransport, tcp::TcpTransport, Transport};
