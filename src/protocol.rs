use serde::{Deserialize, Serialize};

use crate::common::Player;

/// Wire protocol version. Peers with a different version are refused at handshake.
pub const PROTOCOL_VERSION: u32 = 1;

/// Messages exchanged between a client and the referee server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// Client opens the session.
    Handshake { version: u32 },
    /// Server accepts the client, fixing board size and seat for the session.
    Connect {
        version: u32,
        rows: u8,
        cols: u8,
        player: Player,
    },
    /// Server asks the receiving client to play.
    MakeMove,
    /// Client places a disc.
    Move { row: u8, col: u8 },
    /// Server confirms a move by either player.
    MoveMade { row: u8, col: u8, player: Player },
    /// Server refused the client's last move; a fresh `MakeMove` follows.
    MoveRejected { row: u8, col: u8, reason: String },
    GameWon,
    GameLost,
    GameTied,
    /// Fatal session error; the sender closes the connection afterwards.
    Error { reason: String },
}
