mod context;
pub use context::*;

mod view;
pub use view::*;

mod macro_command;
pub use macro_command::*;

use kolour_engine::{command_size::SizeType, Result};

/// Lets the history recognise a command without downcasting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandType {
    Unknown,
    /// Installs a selection border that has no content.
    CreateSelectionBorder,
    /// Installs a selection that already carries content.
    CreateSelection,
    DestroySelection,
    SelectionContent,
    MoveSelection,
    ResizeScaleSelection,
    SelectionTransparency,
    TextEdit,
    Macro,
}

/// A reversible unit of document mutation.
///
/// `execute` runs before the first `unexecute` and the two alternate from
/// then on. Running `execute` again after `unexecute` must reproduce the
/// exact same pixels and selection.
pub trait Command: Send + Sync {
    /// Localized name shown in the undo and redo entries.
    fn name(&self) -> String;

    /// Approximate memory held by the command, used to bound the history.
    fn size(&self) -> SizeType;

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()>;

    fn unexecute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()>;

    fn command_type(&self) -> CommandType {
        CommandType::Unknown
    }
}

impl std::fmt::Debug for dyn Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name())
            .field("type", &self.command_type())
            .field("size", &self.size())
            .finish()
    }
}
