use i18n_embed_fl::fl;
use kolour_engine::{command_size::SizeType, Result};

use super::{apply_edits, edits_size, revert_edits, text_selection, TextEdit};
use crate::{Command, CommandContext, CommandType, TextCursor};

/// Deletes characters left of the cursor, joining lines at column 0.
pub struct TextBackspaceCommand {
    cursor: TextCursor,
    end_cursor: TextCursor,
    edits: Vec<TextEdit>,
}

impl TextBackspaceCommand {
    pub fn new(cursor: TextCursor, ctx: &mut CommandContext<'_>) -> Result<Self> {
        let mut cmd = Self {
            cursor,
            end_cursor: cursor,
            edits: Vec::new(),
        };
        cmd.add_backspace(ctx)?;
        Ok(cmd)
    }

    /// A backspace at the very start of the box changes nothing.
    pub fn add_backspace(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        let at = self.end_cursor;
        let selection = text_selection(ctx)?;
        let edit = if at.col > 0 {
            let removed = selection.remove_text(at.row, at.col - 1, 1)?;
            let ch = removed.chars().next().unwrap_or_default();
            self.end_cursor = TextCursor::new(at.row, at.col - 1);
            TextEdit::RemovedChar { row: at.row, col: at.col - 1, ch }
        } else if at.row > 0 {
            let col = selection.line_len(at.row - 1);
            selection.join_line(at.row - 1)?;
            self.end_cursor = TextCursor::new(at.row - 1, col);
            TextEdit::JoinedLines { row: at.row - 1, col }
        } else {
            return Ok(());
        };
        self.edits.push(edit);
        ctx.environment.set_text_cursor(self.end_cursor);
        ctx.update_selection_region();
        Ok(())
    }
}

impl Command for TextBackspaceCommand {
    fn name(&self) -> String {
        fl!(crate::LANGUAGE_LOADER, "command-text-backspace")
    }

    fn size(&self) -> SizeType {
        edits_size(&self.edits)
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        apply_edits(ctx, &self.edits, self.end_cursor)
    }

    fn unexecute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        revert_edits(ctx, &self.edits, self.cursor)
    }

    fn command_type(&self) -> CommandType {
        CommandType::TextEdit
    }
}
