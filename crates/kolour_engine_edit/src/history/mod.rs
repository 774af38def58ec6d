//! Undo/redo history.
//!
//! Commands are pushed onto the undo list by `add_command`. Undo moves the
//! next command to the redo list, redo moves it back. After every change the
//! lists are trimmed to the configured [`HistoryLimits`].

mod command_history;
pub use command_history::*;

mod editor_history;
pub use editor_history::*;

mod limits;
pub use limits::*;

mod restored_position;
pub use restored_position::*;
