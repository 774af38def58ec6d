use i18n_embed_fl::fl;
use kolour_engine::{command_size::SizeType, ImageSelectionTransparency, Result};

use crate::{Command, CommandContext, CommandType};

/// Switches the image selection transparency of the tool settings and of the
/// active image selection.
pub struct SelectionTransparencyCommand {
    old_transparency: ImageSelectionTransparency,
    new_transparency: ImageSelectionTransparency,
}

impl SelectionTransparencyCommand {
    pub fn new(old_transparency: ImageSelectionTransparency, new_transparency: ImageSelectionTransparency) -> Self {
        Self {
            old_transparency,
            new_transparency,
        }
    }

    fn apply(transparency: ImageSelectionTransparency, ctx: &mut CommandContext<'_>) {
        ctx.environment.set_image_selection_transparency(transparency);
        if let Some(selection) = ctx.document.image_selection_mut() {
            selection.set_transparency(transparency);
            ctx.update_selection_region();
        }
    }
}

impl Command for SelectionTransparencyCommand {
    fn name(&self) -> String {
        fl!(crate::LANGUAGE_LOADER, "command-selection-transparency")
    }

    fn size(&self) -> SizeType {
        0
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        Self::apply(self.new_transparency, ctx);
        Ok(())
    }

    fn unexecute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        Self::apply(self.old_transparency, ctx);
        Ok(())
    }

    fn command_type(&self) -> CommandType {
        CommandType::SelectionTransparency
    }
}
