use std::sync::Arc;
use std::thread::{self, ThreadId};

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::common::Cell;
use crate::game::GameModel;
use crate::ui::dispatcher::{InputDispatcher, MoveSubmitter};
use crate::ui::view::BoardView;

/// Work posted to the UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// The model changed; re-derive the view from its current state.
    BoardChanged,
    /// The user activated a grid cell.
    Activate(Cell),
    Quit,
}

/// Sending half of the UI event queue. Safe to use from any thread.
#[derive(Clone)]
pub struct UiQueue {
    tx: UnboundedSender<UiEvent>,
}

impl UiQueue {
    /// Returns false if the UI has gone away.
    pub fn post(&self, event: UiEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// UI-thread state: the view, the dispatcher and the queue that feeds them.
///
/// Model notifications only post [`UiEvent::BoardChanged`]; the view is refreshed when
/// the owning thread calls [`ClientUi::pump`].
pub struct ClientUi<S: MoveSubmitter> {
    model: Arc<GameModel>,
    view: BoardView,
    dispatcher: InputDispatcher<S>,
    queue: UiQueue,
    events: UnboundedReceiver<UiEvent>,
    owner: ThreadId,
    refreshes: u64,
    running: bool,
}

impl<S: MoveSubmitter> ClientUi<S> {
    /// Build the grid from the model's dimensions and subscribe to its changes.
    ///
    /// The calling thread becomes the UI-owning thread.
    pub fn new(model: Arc<GameModel>, submitter: S) -> Self {
        let (tx, events) = unbounded_channel();
        let queue = UiQueue { tx };
        let view = BoardView::new(&*model.read());

        let notifier = queue.clone();
        model.subscribe(move || {
            notifier.post(UiEvent::BoardChanged);
        });
        // pick up whatever happened before the subscription existed
        queue.post(UiEvent::BoardChanged);

        Self {
            model,
            view,
            dispatcher: InputDispatcher::new(submitter),
            queue,
            events,
            owner: thread::current().id(),
            refreshes: 0,
            running: true,
        }
    }

    pub fn queue(&self) -> UiQueue {
        self.queue.clone()
    }

    pub fn view(&self) -> &BoardView {
        &self.view
    }

    /// Number of refreshes applied so far.
    pub fn refreshes(&self) -> u64 {
        self.refreshes
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Apply all queued events in order. Returns false once `Quit` has been handled.
    pub fn pump(&mut self) -> bool {
        while let Ok(event) = self.events.try_recv() {
            self.handle(event);
        }
        self.running
    }

    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::BoardChanged => self.refresh(),
            UiEvent::Activate(cell) => {
                self.activate(cell);
            }
            UiEvent::Quit => self.running = false,
        }
    }

    fn refresh(&mut self) {
        debug_assert_eq!(
            thread::current().id(),
            self.owner,
            "view refreshed off the UI thread"
        );
        let state = self.model.read();
        self.view.refresh(&*state);
        self.refreshes += 1;
    }

    /// Submit a move for `cell` if the current view has it enabled.
    pub fn activate(&mut self, cell: Cell) -> bool {
        if !self.view.is_enabled(cell) {
            log::debug!("[ClientUi] ignoring activation of disabled cell {}", cell);
            return false;
        }
        self.dispatcher.dispatch(cell);
        true
    }
}
