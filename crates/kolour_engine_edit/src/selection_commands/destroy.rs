use kolour_engine::{command_size, command_size::SizeType, EngineError, Image, Result, Selection};

use super::{install_selection, sync_environment};
use crate::{Command, CommandContext, CommandType, TextCursor};

/// Removes the selection, optionally flattening it onto the document first.
pub struct SelectionDestroyCommand {
    name: String,
    push_onto_document: bool,
    old_selection: Option<Selection>,
    old_document_image: Option<Image>,
    text_cursor: TextCursor,
}

impl SelectionDestroyCommand {
    pub fn new(name: impl Into<String>, push_onto_document: bool) -> Self {
        Self {
            name: name.into(),
            push_onto_document,
            old_selection: None,
            old_document_image: None,
            text_cursor: TextCursor::default(),
        }
    }

    pub fn push_onto_document(&self) -> bool {
        self.push_onto_document
    }
}

impl Command for SelectionDestroyCommand {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> SizeType {
        command_size::optional_selection_size(self.old_selection.as_ref()) + command_size::optional_image_size(self.old_document_image.as_ref())
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        let selection = ctx.document.selection().ok_or(EngineError::NoSelection)?.clone();
        let rect = selection.bounding_rect();
        self.text_cursor = ctx.environment.text_cursor();

        if self.push_onto_document && selection.has_content() {
            self.old_document_image = Some(ctx.document.get_image_at(rect));
            ctx.document.selection_push_onto_document(true)?;
        } else {
            ctx.document.selection_delete();
        }
        self.old_selection = Some(selection);

        ctx.update_region(rect);
        ctx.environment.notify_something_below_cursor_changed();
        Ok(())
    }

    fn unexecute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        let old_selection = self
            .old_selection
            .clone()
            .ok_or_else(|| EngineError::invariant(format!("'{}' unexecuted before execute", self.name)))?;

        // The user may have started a selection of the other family meanwhile.
        if let Some(current) = ctx.document.selection() {
            if current.is_same_family(&old_selection) {
                if current.has_content() {
                    return Err(EngineError::invariant(format!(
                        "'{}' unexecuted while the {} already has content",
                        self.name,
                        current.kind()
                    )));
                }
            } else {
                let rect = current.bounding_rect();
                if current.has_content() {
                    ctx.document.selection_push_onto_document(true)?;
                } else {
                    ctx.document.selection_delete();
                }
                ctx.update_region(rect);
            }
        }

        if let Some(image) = &self.old_document_image {
            ctx.document.set_image_at(image, old_selection.top_left());
        }

        sync_environment(ctx.environment, &old_selection);
        ctx.environment.set_text_cursor(self.text_cursor);
        install_selection(ctx, old_selection)?;
        ctx.environment.notify_something_below_cursor_changed();
        Ok(())
    }

    fn command_type(&self) -> CommandType {
        CommandType::DestroySelection
    }
}
