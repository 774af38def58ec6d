use i18n_embed_fl::fl;
use kolour_engine::{command_size, command_size::SizeType, Result, TextStyle};

use crate::{Command, CommandContext, CommandType};

/// Changes the text style of the tool settings and the active text box.
pub struct TextChangeStyleCommand {
    old_style: TextStyle,
    new_style: TextStyle,
}

impl TextChangeStyleCommand {
    pub fn new(old_style: TextStyle, new_style: TextStyle) -> Self {
        Self { old_style, new_style }
    }

    fn apply(style: &TextStyle, ctx: &mut CommandContext<'_>) {
        ctx.environment.set_text_style(style.clone());
        if let Some(selection) = ctx.document.text_selection_mut() {
            selection.set_text_style(style.clone());
            ctx.update_selection_region();
        }
    }
}

impl Command for TextChangeStyleCommand {
    fn name(&self) -> String {
        fl!(crate::LANGUAGE_LOADER, "command-text-change-style")
    }

    fn size(&self) -> SizeType {
        command_size::string_size(&self.old_style.font_family) + command_size::string_size(&self.new_style.font_family)
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        Self::apply(&self.new_style, ctx);
        Ok(())
    }

    fn unexecute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        Self::apply(&self.old_style, ctx);
        Ok(())
    }

    fn command_type(&self) -> CommandType {
        CommandType::TextEdit
    }
}
