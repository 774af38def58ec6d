use i18n_embed_fl::fl;
use kolour_engine::{command_size::SizeType, Result};

use super::text_selection;
use crate::{Command, CommandContext, CommandType, TextCursor};

/// Breaks lines at the cursor.
pub struct TextEnterCommand {
    cursor: TextCursor,
    num_enters: usize,
}

impl TextEnterCommand {
    pub fn new(cursor: TextCursor, ctx: &mut CommandContext<'_>) -> Result<Self> {
        let mut cmd = Self { cursor, num_enters: 0 };
        cmd.add_enter(ctx)?;
        Ok(cmd)
    }

    /// The n-th enter splits at the start of the line the previous one created.
    fn split_point(&self, index: usize) -> TextCursor {
        if index == 0 {
            self.cursor
        } else {
            TextCursor::new(self.cursor.row + index, 0)
        }
    }

    pub fn add_enter(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        let at = self.split_point(self.num_enters);
        text_selection(ctx)?.split_line(at.row, at.col)?;
        self.num_enters += 1;
        ctx.environment.set_text_cursor(TextCursor::new(self.cursor.row + self.num_enters, 0));
        ctx.update_selection_region();
        Ok(())
    }

    pub fn num_enters(&self) -> usize {
        self.num_enters
    }
}

impl Command for TextEnterCommand {
    fn name(&self) -> String {
        fl!(crate::LANGUAGE_LOADER, "command-text-new-line")
    }

    fn size(&self) -> SizeType {
        0
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        let selection = text_selection(ctx)?;
        for i in 0..self.num_enters {
            let at = self.split_point(i);
            selection.split_line(at.row, at.col)?;
        }
        ctx.environment.set_text_cursor(TextCursor::new(self.cursor.row + self.num_enters, 0));
        ctx.update_selection_region();
        Ok(())
    }

    fn unexecute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        let selection = text_selection(ctx)?;
        for i in (0..self.num_enters).rev() {
            selection.join_line(self.cursor.row + i)?;
        }
        ctx.environment.set_text_cursor(self.cursor);
        ctx.update_selection_region();
        Ok(())
    }

    fn command_type(&self) -> CommandType {
        CommandType::TextEdit
    }
}
