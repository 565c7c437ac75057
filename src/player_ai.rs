use std::sync::Arc;

use rand::{rngs::SmallRng, seq::IndexedRandom, SeedableRng};
use tokio::sync::mpsc::unbounded_channel;

use crate::{
    common::Cell,
    game::{BoardSnapshot, GameModel, GameState, GameStatus},
    player::Strategy,
    ui::dispatcher::{InputDispatcher, MoveSubmitter},
};

/// Picks uniformly among the legal moves.
pub struct RandomBot {
    rng: SmallRng,
}

impl RandomBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomBot {
    fn choose(&mut self, state: &GameState) -> Option<Cell> {
        let moves = state.board().legal_moves(state.me());
        moves.choose(&mut self.rng).copied()
    }
}

/// Takes the move that flips the most discs, breaking ties at random.
pub struct GreedyBot {
    rng: SmallRng,
}

impl GreedyBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for GreedyBot {
    fn choose(&mut self, state: &GameState) -> Option<Cell> {
        let board = state.board();
        let scored: Vec<(Cell, usize)> = board
            .legal_moves(state.me())
            .into_iter()
            .map(|cell| {
                let flips = board
                    .flips(cell.row(), cell.col(), state.me())
                    .map(|f| f.len())
                    .unwrap_or(0);
                (cell, flips)
            })
            .collect();
        let best = scored.iter().map(|&(_, n)| n).max()?;
        let top: Vec<Cell> = scored
            .into_iter()
            .filter(|&(_, n)| n == best)
            .map(|(cell, _)| cell)
            .collect();
        top.choose(&mut self.rng).copied()
    }
}

enum Step {
    Done(GameStatus),
    Wait,
    Play(u64, Option<Cell>),
}

fn next_step<P: Strategy>(model: &GameModel, strategy: &mut P, last_turn: Option<u64>) -> Step {
    let state = model.read();
    if state.status().is_terminal() || state.is_closed() {
        return Step::Done(state.status());
    }
    if !state.is_my_turn() || last_turn == Some(state.turn()) {
        return Step::Wait;
    }
    Step::Play(state.turn(), strategy.choose(&state))
}

/// Headless front end: plays `strategy` through an [`InputDispatcher`] until the game ends.
///
/// Like the terminal UI it only reacts to model notifications, and it plays at most
/// once per server request.
pub async fn run_bot<S, P>(model: Arc<GameModel>, submitter: S, mut strategy: P) -> GameStatus
where
    S: MoveSubmitter,
    P: Strategy,
{
    let (tx, mut rx) = unbounded_channel();
    let notifier = tx.clone();
    model.subscribe(move || {
        let _ = notifier.send(());
    });
    let _ = tx.send(());
    drop(tx);

    let dispatcher = InputDispatcher::new(submitter);
    let mut last_turn = None;
    while rx.recv().await.is_some() {
        match next_step(&model, &mut strategy, last_turn) {
            Step::Done(status) => return status,
            Step::Wait => {}
            Step::Play(turn, choice) => {
                last_turn = Some(turn);
                match choice {
                    Some(cell) => dispatcher.dispatch(cell),
                    None => log::warn!("[Bot] asked to move with no legal move available"),
                }
            }
        }
    }
    model.read().status()
}
