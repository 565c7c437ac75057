use serde::Serialize;

use crate::{
    board::Board,
    common::{Occupancy, Player},
    protocol::{Message, PROTOCOL_VERSION},
    transport::Transport,
};

/// Outcome of a refereed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub winner: Option<Player>,
    pub player_one_discs: usize,
    pub player_two_discs: usize,
    pub moves_played: usize,
    pub moves_rejected: usize,
}

/// Authoritative referee for one game between two connected clients.
///
/// The first transport plays `Player::One` and moves first.
pub struct Referee<T: Transport> {
    board: Board,
    peers: [T; 2],
}

fn seat(player: Player) -> usize {
    match player {
        Player::One => 0,
        Player::Two => 1,
    }
}

impl<T: Transport> Referee<T> {
    pub fn new(one: T, two: T, rows: usize, cols: usize) -> anyhow::Result<Self> {
        let mut board = Board::new(rows, cols).map_err(|e| anyhow::anyhow!(e))?;
        board.initialize();
        Ok(Self {
            board,
            peers: [one, two],
        })
    }

    fn peer(&mut self, player: Player) -> &mut T {
        &mut self.peers[seat(player)]
    }

    async fn handshake(&mut self, player: Player) -> anyhow::Result<()> {
        let rows = self.board.rows() as u8;
        let cols = self.board.cols() as u8;
        let peer = self.peer(player);
        match peer.recv().await? {
            Message::Handshake { version } if version == PROTOCOL_VERSION => {
                peer.send(Message::Connect {
                    version: PROTOCOL_VERSION,
                    rows,
                    cols,
                    player,
                })
                .await
            }
            Message::Handshake { version } => {
                log::warn!(
                    "[Referee] Handshake protocol version mismatch from {}: expected {}, got {}",
                    player,
                    PROTOCOL_VERSION,
                    version
                );
                let reason = format!("unsupported protocol version {}", version);
                let _ = peer.send(Message::Error { reason }).await;
                Err(anyhow::anyhow!(
                    "Protocol version mismatch in Handshake: expected {}, got {}",
                    PROTOCOL_VERSION,
                    version
                ))
            }
            other => {
                log::warn!("[Referee] Expected Handshake from {}, got {:?}", player, other);
                Err(anyhow::anyhow!("Expected Handshake, got unexpected message (closing session)"))
            }
        }
    }

    async fn broadcast(&mut self, msg: Message) -> anyhow::Result<()> {
        for peer in self.peers.iter_mut() {
            peer.send(msg.clone()).await?;
        }
        Ok(())
    }

    /// Ask `player` for moves until one is legal, then apply and broadcast it.
    /// Returns the number of rejected attempts.
    async fn take_turn(&mut self, player: Player) -> anyhow::Result<usize> {
        let mut rejected = 0;
        loop {
            self.peer(player).send(Message::MakeMove).await?;
            let (row, col) = match self.peer(player).recv().await? {
                Message::Move { row, col } => (row, col),
                other => {
                    log::warn!("[Referee] Expected Move from {}, got {:?}", player, other);
                    let reason = "expected a move".to_string();
                    let _ = self.peer(player).send(Message::Error { reason }).await;
                    return Err(anyhow::anyhow!("Expected Move, got unexpected message (closing session)"));
                }
            };
            match self.board.place(row as usize, col as usize, player) {
                Ok(flipped) => {
                    log::debug!("[Referee] {} plays ({}, {}), flips {}", player, row, col, flipped);
                    self.broadcast(Message::MoveMade { row, col, player }).await?;
                    return Ok(rejected);
                }
                Err(e) => {
                    log::info!("[Referee] rejecting move ({}, {}) from {}: {}", row, col, player, e);
                    rejected += 1;
                    self.peer(player)
                        .send(Message::MoveRejected {
                            row,
                            col,
                            reason: e.to_string(),
                        })
                        .await?;
                }
            }
        }
    }

    /// Run the whole game and report the final position.
    pub async fn run(mut self) -> anyhow::Result<SessionSummary> {
        self.handshake(Player::One).await?;
        self.handshake(Player::Two).await?;

        let mut current = Player::One;
        let mut moves_played = 0;
        let mut moves_rejected = 0;
        while !self.board.is_over() {
            if !self.board.has_legal_move(current) {
                log::debug!("[Referee] {} has no move and passes", current);
                current = current.opponent();
                continue;
            }
            moves_rejected += self.take_turn(current).await?;
            moves_played += 1;
            current = current.opponent();
        }

        let winner = self.board.winner();
        for player in [Player::One, Player::Two] {
            let verdict = match winner {
                None => Message::GameTied,
                Some(w) if w == player => Message::GameWon,
                Some(_) => Message::GameLost,
            };
            self.peer(player).send(verdict).await?;
        }

        let summary = SessionSummary {
            winner,
            player_one_discs: self.board.count(Occupancy::PlayerOne),
            player_two_discs: self.board.count(Occupancy::PlayerTwo),
            moves_played,
            moves_rejected,
        };
        log::info!("[Referee] game over: {:?}", summary);
        Ok(summary)
    }
}

/// Referee a full game between two transports on a `rows` x `cols` board.
pub async fn run_session<T: Transport>(
    one: T,
    two: T,
    rows: usize,
    cols: usize,
) -> anyhow::Result<SessionSummary> {
    Referee::new(one, two, rows, cols)?.run().await
}
