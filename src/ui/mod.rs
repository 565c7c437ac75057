//! Client-side presentation: derived view state, input dispatch and the UI event queue.
//!
//! Everything here except [`UiQueue`] belongs to the single UI-owning thread.

pub mod dispatcher;
pub mod event_loop;
pub mod terminal;
pub mod view;

pub use dispatcher::{InputDispatcher, MoveSubmitter};
pub use event_loop::{ClientUi, UiEvent, UiQueue};
pub use view::{status_text, BoardView, CellView, Marker};
