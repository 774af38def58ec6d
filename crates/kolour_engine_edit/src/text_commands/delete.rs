use i18n_embed_fl::fl;
use kolour_engine::{command_size::SizeType, Result};

use super::{apply_edits, edits_size, revert_edits, text_selection, TextEdit};
use crate::{Command, CommandContext, CommandType, TextCursor};

/// Deletes characters right of the cursor, joining lines at line end.
pub struct TextDeleteCommand {
    cursor: TextCursor,
    edits: Vec<TextEdit>,
}

impl TextDeleteCommand {
    pub fn new(cursor: TextCursor, ctx: &mut CommandContext<'_>) -> Result<Self> {
        let mut cmd = Self { cursor, edits: Vec::new() };
        cmd.add_delete(ctx)?;
        Ok(cmd)
    }

    /// A delete at the very end of the box changes nothing.
    pub fn add_delete(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        let at = self.cursor;
        let selection = text_selection(ctx)?;
        let edit = if at.col < selection.line_len(at.row) {
            let removed = selection.remove_text(at.row, at.col, 1)?;
            let ch = removed.chars().next().unwrap_or_default();
            TextEdit::RemovedChar { row: at.row, col: at.col, ch }
        } else if at.row + 1 < selection.line_count() {
            selection.join_line(at.row)?;
            TextEdit::JoinedLines { row: at.row, col: at.col }
        } else {
            return Ok(());
        };
        self.edits.push(edit);
        ctx.environment.set_text_cursor(self.cursor);
        ctx.update_selection_region();
        Ok(())
    }
}

impl Command for TextDeleteCommand {
    fn name(&self) -> String {
        fl!(crate::LANGUAGE_LOADER, "command-text-delete")
    }

    fn size(&self) -> SizeType {
        edits_size(&self.edits)
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        apply_edits(ctx, &self.edits, self.cursor)
    }

    fn unexecute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        revert_edits(ctx, &self.edits, self.cursor)
    }

    fn command_type(&self) -> CommandType {
        CommandType::TextEdit
    }
}
