use std::sync::Arc;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::{
    common::Cell,
    game::{BoardSnapshot, GameModel, GameStatus},
    protocol::{Message, PROTOCOL_VERSION},
    transport::Transport,
    ui::dispatcher::MoveSubmitter,
};

/// Fire-and-forget handle for submitting moves to a running [`NetworkClient`].
#[derive(Clone)]
pub struct MoveSender {
    tx: UnboundedSender<Cell>,
}

impl MoveSubmitter for MoveSender {
    fn submit_move(&self, row: usize, col: usize) {
        if self.tx.send(Cell::new(row, col)).is_err() {
            log::debug!("[NetworkClient] session closed, dropping move ({}, {})", row, col);
        }
    }
}

/// Client side of a session: owns the transport and is the only writer of the model.
pub struct NetworkClient {
    transport: Box<dyn Transport>,
    model: Arc<GameModel>,
    moves: UnboundedReceiver<Cell>,
}

impl NetworkClient {
    /// Handshake with the server and build the model it describes.
    pub async fn connect(
        mut transport: Box<dyn Transport>,
    ) -> anyhow::Result<(Self, Arc<GameModel>, MoveSender)> {
        transport
            .send(Message::Handshake {
                version: PROTOCOL_VERSION,
            })
            .await?;

        let (rows, cols, player) = match transport.recv().await? {
            Message::Connect {
                version,
                rows,
                cols,
                player,
            } if version == PROTOCOL_VERSION => (rows, cols, player),
            Message::Connect { version, .. } => {
                log::warn!(
                    "[NetworkClient] Handshake protocol version mismatch: expected {}, server sent {}",
                    PROTOCOL_VERSION,
                    version
                );
                return Err(anyhow::anyhow!(
                    "Protocol version mismatch in Connect: expected {}, got {}",
                    PROTOCOL_VERSION,
                    version
                ));
            }
            Message::Error { reason } => {
                return Err(anyhow::anyhow!("Server refused connection: {}", reason));
            }
            other => {
                log::warn!("[NetworkClient] Expected Connect, got {:?}", other);
                return Err(anyhow::anyhow!("Expected Connect, got unexpected message (closing session)"));
            }
        };

        let model = Arc::new(
            GameModel::new(rows as usize, cols as usize, player).map_err(|e| anyhow::anyhow!(e))?,
        );
        log::info!("[NetworkClient] connected as {} on a {}x{} board", player, rows, cols);

        let (tx, moves) = unbounded_channel();
        let client = Self {
            transport,
            model: Arc::clone(&model),
            moves,
        };
        Ok((client, model, MoveSender { tx }))
    }

    /// Process server messages until the game ends, returning the final status.
    ///
    /// Errors are also recorded in the model so observers see them.
    pub async fn run(mut self) -> anyhow::Result<GameStatus> {
        let result = self.process().await;
        if let Err(e) = &result {
            log::error!("[NetworkClient] session ended: {}", e);
            self.model.close_with_error(e.to_string());
        }
        result
    }

    async fn process(&mut self) -> anyhow::Result<GameStatus> {
        loop {
            match self.transport.recv().await? {
                Message::MakeMove => {
                    // anything queued before the server asked is a stale click
                    while let Ok(stale) = self.moves.try_recv() {
                        log::debug!("[NetworkClient] discarding stale move {}", stale);
                    }
                    self.model.request_move();
                    let Some(cell) = self.moves.recv().await else {
                        log::info!("[NetworkClient] front end closed, leaving session");
                        return Ok(self.model.read().status());
                    };
                    self.model.end_turn();
                    let (row, col) = wire_coords(cell)?;
                    self.transport.send(Message::Move { row, col }).await?;
                }
                Message::MoveMade { row, col, player } => {
                    self.model
                        .move_made(row as usize, col as usize, player)
                        .map_err(|e| anyhow::anyhow!("Server confirmed an illegal move: {}", e))?;
                }
                Message::MoveRejected { row, col, reason } => {
                    log::info!("[NetworkClient] move ({}, {}) rejected: {}", row, col, reason);
                    self.model.move_rejected(reason);
                }
                Message::GameWon => return Ok(self.finish(GameStatus::Won)),
                Message::GameLost => return Ok(self.finish(GameStatus::Lost)),
                Message::GameTied => return Ok(self.finish(GameStatus::Tied)),
                Message::Error { reason } => {
                    return Err(anyhow::anyhow!("Server error: {}", reason));
                }
                other => {
                    log::warn!("[NetworkClient] Unexpected message during play: {:?}", other);
                    return Err(anyhow::anyhow!("Unexpected message during play (closing session)"));
                }
            }
        }
    }

    fn finish(&self, status: GameStatus) -> GameStatus {
        log::info!("[NetworkClient] game over: {:?}", status);
        self.model.finish(status);
        status
    }
}

fn wire_coords(cell: Cell) -> anyhow::Result<(u8, u8)> {
    let row = u8::try_from(cell.row()).map_err(|_| anyhow::anyhow!("row {} out of range", cell.row()))?;
    let col = u8::try_from(cell.col()).map_err(|_| anyhow::anyhow!("col {} out of range", cell.col()))?;
    Ok((row, col))
}
