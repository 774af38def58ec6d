use i18n_embed_fl::fl;
use kolour_engine::{command_size, command_size::SizeType, Color, Image, Result, Selection};

use crate::{Command, CommandContext, TextCursor};

/// Clears the floating selection, or the whole image if nothing floats.
///
/// Image content is filled with the background color inside its border and
/// a text box is emptied to a single line.
pub struct ClearCommand {
    background: Color,
    old_selection: Option<Selection>,
    old_image: Option<Image>,
    old_text_cursor: TextCursor,
}

impl ClearCommand {
    pub fn new(background: Color) -> Self {
        Self {
            background,
            old_selection: None,
            old_image: None,
            old_text_cursor: TextCursor::default(),
        }
    }
}

impl Command for ClearCommand {
    fn name(&self) -> String {
        fl!(crate::LANGUAGE_LOADER, "command-clear")
    }

    fn size(&self) -> SizeType {
        command_size::optional_selection_size(self.old_selection.as_ref()) + command_size::optional_image_size(self.old_image.as_ref())
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        self.old_selection = None;
        self.old_image = None;
        self.old_text_cursor = ctx.environment.text_cursor();

        match ctx.document.selection_mut() {
            Some(selection) if selection.has_content() => {
                self.old_selection = Some(selection.clone());
                match selection {
                    Selection::Image(sel) => sel.fill_content(self.background),
                    Selection::Text(sel) => {
                        sel.set_lines(vec![String::new()]);
                        ctx.environment.set_text_cursor(TextCursor::default());
                    }
                }
                ctx.update_selection_region();
            }
            _ => {
                self.old_image = Some(ctx.document.image().clone());
                ctx.document.fill(self.background);
                let rect = ctx.document.rect();
                ctx.update_region(rect);
            }
        }
        Ok(())
    }

    fn unexecute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        if let Some(selection) = &self.old_selection {
            ctx.document.set_selection(selection.clone())?;
            ctx.environment.set_text_cursor(self.old_text_cursor);
            ctx.update_selection_region();
        }
        if let Some(image) = &self.old_image {
            ctx.document.set_image(image.clone());
            let rect = ctx.document.rect();
            ctx.update_region(rect);
        }
        Ok(())
    }
}
