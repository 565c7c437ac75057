mod board;
pub mod client;
mod common;
mod config;
mod game;
mod logging;
mod player;
mod player_ai;
pub mod protocol;
pub mod server;
pub mod transport;
pub mod ui;

pub mod prelude;

pub use board::*;
pub use client::{MoveSender, NetworkClient};
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::{init_logging, init_quiet_logging};
pub use player::*;
pub use player_ai::*;
pub use protocol::*;
pub use server::{run_session, Referee, SessionSummary};
pub use transport::{in_memory::InMemoryTransport, tcp::TcpTransport, Transport};
