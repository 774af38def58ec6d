use i18n_embed_fl::fl;
use kolour_engine::{command_size, command_size::SizeType, Result};

use super::text_selection;
use crate::{Command, CommandContext, CommandType, TextCursor};

/// Typing into a text box.
pub struct TextInsertCommand {
    cursor: TextCursor,
    new_text: String,
}

impl TextInsertCommand {
    /// Inserts `text` at `cursor` right away.
    pub fn new(cursor: TextCursor, text: &str, ctx: &mut CommandContext<'_>) -> Result<Self> {
        let mut cmd = Self {
            cursor,
            new_text: String::new(),
        };
        cmd.add_text(text, ctx)?;
        Ok(cmd)
    }

    fn end_cursor(&self) -> TextCursor {
        TextCursor::new(self.cursor.row, self.cursor.col + self.new_text.chars().count())
    }

    /// Appends `text` after what this command already typed.
    pub fn add_text(&mut self, text: &str, ctx: &mut CommandContext<'_>) -> Result<()> {
        let at = self.end_cursor();
        text_selection(ctx)?.insert_text(at.row, at.col, text)?;
        self.new_text.push_str(text);
        ctx.environment.set_text_cursor(self.end_cursor());
        ctx.update_selection_region();
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.new_text
    }
}

impl Command for TextInsertCommand {
    fn name(&self) -> String {
        fl!(crate::LANGUAGE_LOADER, "command-text-write")
    }

    fn size(&self) -> SizeType {
        command_size::string_size(&self.new_text)
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        text_selection(ctx)?.insert_text(self.cursor.row, self.cursor.col, &self.new_text)?;
        ctx.environment.set_text_cursor(self.end_cursor());
        ctx.update_selection_region();
        Ok(())
    }

    fn unexecute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        text_selection(ctx)?.remove_text(self.cursor.row, self.cursor.col, self.new_text.chars().count())?;
        ctx.environment.set_text_cursor(self.cursor);
        ctx.update_selection_region();
        Ok(())
    }

    fn command_type(&self) -> CommandType {
        CommandType::TextEdit
    }
}
