use kolour_engine::{Document, Result};

use crate::{Command, CommandContext, EditorCommandHistory, Environment, HistoryLimits, ShapeTool, ViewUpdateQueue};

/// Trait for types that support undo/redo operations
pub trait UndoState {
    fn undo_description(&self) -> Option<String>;

    fn can_undo(&self) -> bool;

    fn undo(&mut self) -> Result<()>;

    fn redo_description(&self) -> Option<String>;

    fn can_redo(&self) -> bool;

    fn redo(&mut self) -> Result<()>;
}

/// A document together with its tool environment, view queue and history.
#[derive(Default)]
pub struct EditState {
    document: Document,
    environment: Environment,
    view: ViewUpdateQueue,
    history: EditorCommandHistory,
}

impl EditState {
    pub fn new(document: Document) -> Self {
        Self::with_limits(document, HistoryLimits::default())
    }

    pub fn with_limits(document: Document, limits: HistoryLimits) -> Self {
        Self {
            document,
            environment: Environment::default(),
            view: ViewUpdateQueue::new(),
            history: EditorCommandHistory::new(limits),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    pub fn view(&self) -> &ViewUpdateQueue {
        &self.view
    }

    pub fn history(&self) -> &EditorCommandHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut EditorCommandHistory {
        &mut self.history
    }

    /// Context for driving a command outside of the history, e.g. while a
    /// tool is still dragging.
    pub fn context(&mut self) -> CommandContext<'_> {
        CommandContext::new(&mut self.document, &mut self.environment, &mut self.view)
    }

    pub fn add_command(&mut self, command: Box<dyn Command>, execute: bool) -> Result<()> {
        let mut ctx = CommandContext::new(&mut self.document, &mut self.environment, &mut self.view);
        self.history.add_command(command, execute, &mut ctx)
    }

    pub fn add_create_selection_command(&mut self, command: Box<dyn Command>, execute: bool) -> Result<()> {
        let mut ctx = CommandContext::new(&mut self.document, &mut self.environment, &mut self.view);
        self.history.add_create_selection_command(command, execute, &mut ctx)
    }

    pub fn undo_with_tool(&mut self, tool: Option<&mut dyn ShapeTool>) -> Result<()> {
        let mut ctx = CommandContext::new(&mut self.document, &mut self.environment, &mut self.view);
        self.history.undo(tool, &mut ctx)
    }

    pub fn redo_with_tool(&mut self, tool: Option<&mut dyn ShapeTool>) -> Result<()> {
        let mut ctx = CommandContext::new(&mut self.document, &mut self.environment, &mut self.view);
        self.history.redo(tool, &mut ctx)
    }

    pub fn undo_up_to_number(&mut self, count: usize) -> Result<()> {
        let mut ctx = CommandContext::new(&mut self.document, &mut self.environment, &mut self.view);
        self.history.undo_up_to_number(count, None, &mut ctx)
    }

    pub fn redo_up_to_number(&mut self, count: usize) -> Result<()> {
        let mut ctx = CommandContext::new(&mut self.document, &mut self.environment, &mut self.view);
        self.history.redo_up_to_number(count, None, &mut ctx)
    }

    pub fn document_saved(&mut self) {
        self.history.history_mut().document_saved();
    }

    pub fn is_modified(&self) -> bool {
        self.history.history().is_document_modified()
    }

    pub fn undo_stack_len(&self) -> usize {
        self.history.history().undo_len()
    }

    pub fn redo_stack_len(&self) -> usize {
        self.history.history().redo_len()
    }
}

impl UndoState for EditState {
    fn undo_description(&self) -> Option<String> {
        self.history.history().undo_description()
    }

    fn can_undo(&self) -> bool {
        self.history.history().can_undo()
    }

    fn undo(&mut self) -> Result<()> {
        self.undo_with_tool(None)
    }

    fn redo_description(&self) -> Option<String> {
        self.history.history().redo_description()
    }

    fn can_redo(&self) -> bool {
        self.history.history().can_redo()
    }

    fn redo(&mut self) -> Result<()> {
        self.redo_with_tool(None)
    }
}
