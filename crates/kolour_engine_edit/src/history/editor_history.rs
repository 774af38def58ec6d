use kolour_engine::Result;

use super::{CommandHistory, HistoryLimits};
use crate::{Command, CommandContext, CommandType};

/// The part of the active tool the history needs to know about.
pub trait ShapeTool {
    /// True while a drag is in progress that has not reached the history.
    fn has_begun_shape(&self) -> bool;

    /// Drops the in-progress shape.
    fn cancel_shape(&mut self);
}

/// Command history of a main window.
///
/// Undo and redo first cancel a shape the tool is still drawing, and
/// consecutive content-less selection borders share one history slot.
#[derive(Default)]
pub struct EditorCommandHistory {
    history: CommandHistory,
}

impl EditorCommandHistory {
    pub fn new(limits: HistoryLimits) -> Self {
        Self {
            history: CommandHistory::new(limits),
        }
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut CommandHistory {
        &mut self.history
    }

    pub fn add_command(&mut self, command: Box<dyn Command>, execute: bool, ctx: &mut CommandContext<'_>) -> Result<()> {
        self.history.add_command(command, execute, ctx)
    }

    /// Records a selection create command.
    ///
    /// A border-only create directly following another border-only create
    /// replaces it instead of taking a new slot. Neither touches document
    /// pixels so dropping the older one loses nothing.
    pub fn add_create_selection_command(&mut self, mut command: Box<dyn Command>, execute: bool, ctx: &mut CommandContext<'_>) -> Result<()> {
        let replaces_border = command.command_type() == CommandType::CreateSelectionBorder
            && self
                .history
                .next_undo_command()
                .is_some_and(|cmd| cmd.command_type() == CommandType::CreateSelectionBorder);

        if !replaces_border {
            return self.history.add_command(command, execute, ctx);
        }

        if execute {
            command.execute(ctx)?;
        }
        log::debug!("replace selection border with '{}'", command.name());
        self.history.clear_redo();
        self.history.invalidate_redo_position();
        self.history.set_next_undo_command(command);
        Ok(())
    }

    fn cancels_shape(tool: Option<&mut dyn ShapeTool>) -> bool {
        match tool {
            Some(tool) if tool.has_begun_shape() => {
                log::debug!("cancel shape in progress instead of undo/redo");
                tool.cancel_shape();
                true
            }
            _ => false,
        }
    }

    /// Cancels a shape in progress; only undoes if there was none.
    pub fn undo(&mut self, tool: Option<&mut dyn ShapeTool>, ctx: &mut CommandContext<'_>) -> Result<()> {
        if Self::cancels_shape(tool) {
            return Ok(());
        }
        self.history.undo(ctx)
    }

    pub fn redo(&mut self, tool: Option<&mut dyn ShapeTool>, ctx: &mut CommandContext<'_>) -> Result<()> {
        if Self::cancels_shape(tool) {
            return Ok(());
        }
        self.history.redo(ctx)
    }

    pub fn undo_up_to_number(&mut self, count: usize, tool: Option<&mut dyn ShapeTool>, ctx: &mut CommandContext<'_>) -> Result<()> {
        if Self::cancels_shape(tool) {
            return Ok(());
        }
        self.history.undo_up_to_number(count, ctx)
    }

    pub fn redo_up_to_number(&mut self, count: usize, tool: Option<&mut dyn ShapeTool>, ctx: &mut CommandContext<'_>) -> Result<()> {
        if Self::cancels_shape(tool) {
            return Ok(());
        }
        self.history.redo_up_to_number(count, ctx)
    }
}
