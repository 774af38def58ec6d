use std::collections::VecDeque;

use kolour_engine::{command_size::SizeType, Result};

use super::{HistoryLimits, RestoredPosition};
use crate::{Command, CommandContext};

/// Undo and redo lists with count and byte based trimming.
///
/// The front of each list is the next command to act on. Both lists together
/// form one timeline: the back of the undo list is the oldest command, the
/// back of the redo list the one furthest in the future.
pub struct CommandHistory {
    undo_list: VecDeque<Box<dyn Command>>,
    redo_list: VecDeque<Box<dyn Command>>,
    restored_position: RestoredPosition,
    limits: HistoryLimits,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(HistoryLimits::default())
    }
}

impl CommandHistory {
    pub fn new(limits: HistoryLimits) -> Self {
        Self {
            undo_list: VecDeque::new(),
            redo_list: VecDeque::new(),
            restored_position: RestoredPosition::Clean,
            limits: limits.normalized(),
        }
    }

    pub fn limits(&self) -> HistoryLimits {
        self.limits
    }

    /// Applies new limits and trims right away.
    pub fn set_limits(&mut self, limits: HistoryLimits) {
        self.limits = limits.normalized();
        self.trim_command_lists();
    }

    pub fn restored_position(&self) -> RestoredPosition {
        self.restored_position
    }

    pub fn is_document_modified(&self) -> bool {
        !self.restored_position.is_clean()
    }

    /// Executes `command` if requested and records it.
    ///
    /// Forward history is dropped. A command that fails to execute is not
    /// recorded.
    pub fn add_command(&mut self, mut command: Box<dyn Command>, execute: bool, ctx: &mut CommandContext<'_>) -> Result<()> {
        if execute {
            command.execute(ctx)?;
        }
        log::debug!("add command '{}' (size {})", command.name(), command.size());
        self.undo_list.push_front(command);
        self.clear_redo();
        self.restored_position = self.restored_position.after_add();
        self.trim_command_lists();
        Ok(())
    }

    pub fn undo(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        let result = self.undo_internal(ctx);
        self.trim_command_lists();
        result
    }

    pub fn redo(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        let result = self.redo_internal(ctx);
        self.trim_command_lists();
        result
    }

    pub fn undo_up_to_number(&mut self, count: usize, ctx: &mut CommandContext<'_>) -> Result<()> {
        let result = (0..count).try_for_each(|_| self.undo_internal(ctx));
        self.trim_command_lists();
        result
    }

    pub fn redo_up_to_number(&mut self, count: usize, ctx: &mut CommandContext<'_>) -> Result<()> {
        let result = (0..count).try_for_each(|_| self.redo_internal(ctx));
        self.trim_command_lists();
        result
    }

    fn undo_internal(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        let Some(mut command) = self.undo_list.pop_front() else {
            return Ok(());
        };
        log::debug!("undo '{}'", command.name());
        let result = command.unexecute(ctx);
        if let Err(err) = &result {
            log::error!("undo of '{}' failed: {}", command.name(), err);
        }
        self.redo_list.push_front(command);
        self.set_restored_position(self.restored_position.after_undo());
        result
    }

    fn redo_internal(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        let Some(mut command) = self.redo_list.pop_front() else {
            return Ok(());
        };
        log::debug!("redo '{}'", command.name());
        let result = command.execute(ctx);
        if let Err(err) = &result {
            log::error!("redo of '{}' failed: {}", command.name(), err);
        }
        self.undo_list.push_front(command);
        self.set_restored_position(self.restored_position.after_redo());
        result
    }

    fn set_restored_position(&mut self, position: RestoredPosition) {
        if position.is_clean() && !self.restored_position.is_clean() {
            log::debug!("document restored to saved state");
        }
        self.restored_position = position;
    }

    /// The current position becomes the saved baseline.
    pub fn document_saved(&mut self) {
        self.restored_position = RestoredPosition::Clean;
    }

    pub fn clear(&mut self) {
        log::debug!("clear history");
        self.undo_list.clear();
        self.redo_list.clear();
        self.restored_position = RestoredPosition::Clean;
    }

    pub(crate) fn clear_redo(&mut self) {
        self.redo_list.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_list.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_list.is_empty()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.undo_list.front().map(|cmd| cmd.name())
    }

    pub fn redo_description(&self) -> Option<String> {
        self.redo_list.front().map(|cmd| cmd.name())
    }

    /// Names for the undo drop-down, most recent first.
    pub fn undo_command_names(&self, max: usize) -> Vec<String> {
        self.undo_list.iter().take(max).map(|cmd| cmd.name()).collect()
    }

    pub fn redo_command_names(&self, max: usize) -> Vec<String> {
        self.redo_list.iter().take(max).map(|cmd| cmd.name()).collect()
    }

    pub fn next_undo_command(&self) -> Option<&dyn Command> {
        self.undo_list.front().map(|cmd| &**cmd)
    }

    pub fn next_redo_command(&self) -> Option<&dyn Command> {
        self.redo_list.front().map(|cmd| &**cmd)
    }

    /// Replaces the next undo command in place, or pushes it if the undo
    /// list is empty. The restored position is left alone.
    pub fn set_next_undo_command(&mut self, command: Box<dyn Command>) {
        match self.undo_list.front_mut() {
            Some(front) => *front = command,
            None => self.undo_list.push_front(command),
        }
        self.trim_command_lists();
    }

    /// Redo state was dropped without going through `add_command`.
    pub(crate) fn invalidate_redo_position(&mut self) {
        if matches!(self.restored_position, RestoredPosition::StepsFromClean(steps) if steps > 0) {
            self.restored_position = RestoredPosition::Unreachable;
        }
    }

    pub fn undo_len(&self) -> usize {
        self.undo_list.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_list.len()
    }

    pub fn len(&self) -> usize {
        self.undo_list.len() + self.redo_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn total_size(&self) -> SizeType {
        self.undo_list.iter().chain(self.redo_list.iter()).map(|cmd| cmd.size()).sum()
    }

    /// Evicts the oldest commands while the history is over its count or byte
    /// budget, never going below `min_limit` and never evicting the most
    /// recent command.
    fn trim_command_lists(&mut self) {
        let min_limit = self.limits.min_limit.max(1) as usize;
        let max_limit = self.limits.max_limit.max(1) as usize;
        let mut total_size = self.total_size();
        let mut evicted = 0;

        loop {
            let count = self.len();
            if count <= min_limit || count <= 1 {
                break;
            }
            if count <= max_limit && total_size <= self.limits.max_size_limit {
                break;
            }
            let command = if self.undo_list.len() > 1 {
                self.undo_list.pop_back()
            } else {
                self.redo_list.pop_back()
            };
            let Some(command) = command else {
                break;
            };
            log::trace!("trim '{}' (size {})", command.name(), command.size());
            total_size -= command.size();
            evicted += 1;
        }

        if evicted > 0 {
            log::debug!("trimmed {evicted} command(s), {} left using {total_size} bytes", self.len());
            self.restored_position = self.restored_position.after_trim(self.undo_list.len(), self.redo_list.len());
        }
    }
}
