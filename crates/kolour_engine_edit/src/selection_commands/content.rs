use kolour_engine::{command_size::SizeType, Color, EngineError, ImageSelection, Result, Selection, TextSelection};

use super::install_selection;
use crate::{Command, CommandContext, CommandType, TextCursor};

/// The border may have been removed or replaced by another content-less one
/// since the create command ran. Anything carrying content is a bug.
fn check_border_state(ctx: &CommandContext<'_>, name: &str) -> Result<()> {
    match ctx.document.selection() {
        Some(selection) if selection.has_content() => Err(EngineError::invariant(format!(
            "'{name}' executed while the {} already has content",
            selection.kind()
        ))),
        Some(_) => Ok(()),
        None => {
            log::debug!("'{name}' re-establishes a removed border");
            Ok(())
        }
    }
}

/// Lifts the document pixels under an image border into the selection.
///
/// The vacated area is filled with the background color. Undo paints the
/// content back opaquely and leaves the border.
pub struct ImageSelectionPullFromDocumentCommand {
    name: String,
    border: ImageSelection,
    background: Color,
}

impl ImageSelectionPullFromDocumentCommand {
    pub fn new(name: impl Into<String>, border: ImageSelection, background: Color) -> Result<Self> {
        if border.has_content() {
            return Err(EngineError::SelectionHasContent);
        }
        Ok(Self {
            name: name.into(),
            border,
            background,
        })
    }

    pub fn border(&self) -> &ImageSelection {
        &self.border
    }
}

impl Command for ImageSelectionPullFromDocumentCommand {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> SizeType {
        self.border.size()
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        check_border_state(ctx, &self.name)?;
        ctx.with_queued_updates(|ctx| {
            ctx.environment.set_image_selection_transparency(*self.border.transparency());
            install_selection(ctx, self.border.clone().into())?;
            ctx.document.image_selection_pull_from_document(self.background)?;
            ctx.update_selection_region();
            Ok(())
        })?;
        ctx.environment.notify_something_below_cursor_changed();
        Ok(())
    }

    fn unexecute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        let has_content = ctx.document.image_selection().is_some_and(ImageSelection::has_content);
        if !has_content {
            return Err(EngineError::invariant(format!("'{}' unexecuted without image content", self.name)));
        }
        ctx.with_queued_updates(|ctx| {
            let rect = ctx.document.selection_copy_onto_document(false)?;
            if let Some(selection) = ctx.document.selection_mut() {
                selection.delete_content();
            }
            ctx.update_region(rect);
            Ok(())
        })?;
        ctx.environment.notify_something_below_cursor_changed();
        Ok(())
    }

    fn command_type(&self) -> CommandType {
        CommandType::SelectionContent
    }
}

/// Turns a text border into a text box holding one empty line.
pub struct TextSelectionGiveContentCommand {
    name: String,
    border: TextSelection,
}

impl TextSelectionGiveContentCommand {
    pub fn new(name: impl Into<String>, border: TextSelection) -> Result<Self> {
        if border.has_content() {
            return Err(EngineError::SelectionHasContent);
        }
        Ok(Self { name: name.into(), border })
    }
}

impl Command for TextSelectionGiveContentCommand {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> SizeType {
        self.border.size()
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        check_border_state(ctx, &self.name)?;
        let selection = self.border.clone().with_lines(vec![String::new()]);
        ctx.environment.set_text_style(selection.text_style().clone());
        install_selection(ctx, Selection::Text(selection))?;
        ctx.environment.set_text_cursor(TextCursor::default());
        ctx.environment.notify_something_below_cursor_changed();
        Ok(())
    }

    fn unexecute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        let Some(selection) = ctx.document.text_selection_mut().filter(|sel| sel.has_content()) else {
            return Err(EngineError::invariant(format!("'{}' unexecuted without text content", self.name)));
        };
        selection.delete_content();
        ctx.update_selection_region();
        ctx.environment.set_text_cursor(TextCursor::default());
        ctx.environment.notify_something_below_cursor_changed();
        Ok(())
    }

    fn command_type(&self) -> CommandType {
        CommandType::SelectionContent
    }
}
