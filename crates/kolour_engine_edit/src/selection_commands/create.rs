use kolour_engine::{command_size::SizeType, EngineError, Result, Selection};

use super::{install_selection, sync_environment};
use crate::{Command, CommandContext, CommandType, TextCursor};

/// Installs a selection, with or without content.
pub struct SelectionCreateCommand {
    name: String,
    from_selection: Selection,
    text_cursor: TextCursor,
    prior_text_cursor: Option<TextCursor>,
}

impl SelectionCreateCommand {
    pub fn new(name: impl Into<String>, selection: Selection) -> Self {
        Self {
            name: name.into(),
            from_selection: selection,
            text_cursor: TextCursor::default(),
            prior_text_cursor: None,
        }
    }

    /// Cursor placed inside a text box when it is created.
    pub fn with_text_cursor(mut self, cursor: TextCursor) -> Self {
        self.text_cursor = cursor;
        self
    }

    pub fn from_selection(&self) -> &Selection {
        &self.from_selection
    }

    pub fn set_from_selection(&mut self, selection: Selection) {
        self.from_selection = selection;
    }
}

impl Command for SelectionCreateCommand {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> SizeType {
        self.from_selection.size()
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        sync_environment(ctx.environment, &self.from_selection);
        if self.from_selection.is_text() {
            self.prior_text_cursor = Some(ctx.environment.text_cursor());
            ctx.environment.set_text_cursor(self.text_cursor);
        }
        install_selection(ctx, self.from_selection.clone())?;
        ctx.environment.notify_something_below_cursor_changed();
        Ok(())
    }

    fn unexecute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        let Some(selection) = ctx.document.selection() else {
            log::warn!("'{}' unexecuted without a selection", self.name);
            return Ok(());
        };
        if selection.has_content() {
            return Err(EngineError::invariant(format!(
                "'{}' unexecuted while the {} still has content",
                self.name,
                selection.kind()
            )));
        }

        ctx.update_selection_region();
        ctx.document.selection_delete();
        if self.from_selection.is_text() {
            if let Some(cursor) = self.prior_text_cursor {
                ctx.environment.set_text_cursor(cursor);
            }
        }
        ctx.environment.notify_something_below_cursor_changed();
        Ok(())
    }

    fn command_type(&self) -> CommandType {
        if self.from_selection.has_content() {
            CommandType::CreateSelection
        } else {
            CommandType::CreateSelectionBorder
        }
    }
}
