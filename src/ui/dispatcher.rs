use crate::common::Cell;

/// Outbound side of the session: accepts a move and returns immediately.
///
/// The result, accepted or not, is observed later through the model.
pub trait MoveSubmitter {
    fn submit_move(&self, row: usize, col: usize);
}

impl<S: MoveSubmitter + ?Sized> MoveSubmitter for Box<S> {
    fn submit_move(&self, row: usize, col: usize) {
        (**self).submit_move(row, col)
    }
}

/// Turns an activated grid cell into a move submission.
///
/// No legality check happens here; an illegal or stale move is refused by the server.
pub struct InputDispatcher<S: MoveSubmitter> {
    submitter: S,
}

impl<S: MoveSubmitter> InputDispatcher<S> {
    pub fn new(submitter: S) -> Self {
        Self { submitter }
    }

    pub fn dispatch(&self, cell: Cell) {
        log::debug!("[InputDispatcher] submitting move {}", cell);
        self.submitter.submit_move(cell.row(), cell.col());
    }
}
