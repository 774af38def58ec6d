use i18n_embed_fl::fl;
use kolour_engine::{command_size::SizeType, Result};

use crate::{Command, CommandContext, CommandType};

/// Groups commands into a single undo step.
///
/// Children execute front to back and unexecute back to front.
pub struct MacroCommand {
    name: String,
    commands: Vec<Box<dyn Command>>,
}

impl MacroCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commands: Vec::new(),
        }
    }

    pub fn add_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn command_names(&self) -> Vec<String> {
        self.commands.iter().map(|cmd| cmd.name()).collect()
    }
}

impl Default for MacroCommand {
    fn default() -> Self {
        Self::new(fl!(crate::LANGUAGE_LOADER, "command-macro-default"))
    }
}

impl Command for MacroCommand {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> SizeType {
        self.commands.iter().map(|cmd| cmd.size()).sum()
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        ctx.with_queued_updates(|ctx| {
            for cmd in &mut self.commands {
                cmd.execute(ctx)?;
            }
            Ok(())
        })
    }

    fn unexecute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        ctx.with_queued_updates(|ctx| {
            for cmd in self.commands.iter_mut().rev() {
                cmd.unexecute(ctx)?;
            }
            Ok(())
        })
    }

    fn command_type(&self) -> CommandType {
        CommandType::Macro
    }
}
