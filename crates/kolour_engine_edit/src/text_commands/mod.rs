//! Editing the lines of the active text box.
//!
//! Every command performs its first edit when it is constructed, so the tool
//! adds it to the history without executing it. Further keystrokes of the
//! same kind are merged into the command with its `add_*` method.

use kolour_engine::{EngineError, Result, TextSelection};

mod insert;
pub use insert::*;

mod enter;
pub use enter::*;

mod backspace;
pub use backspace::*;

mod delete;
pub use delete::*;

mod change_style;
pub use change_style::*;

use crate::{CommandContext, TextCursor};

/// One recorded change to the text lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TextEdit {
    /// `ch` was removed at `row`, `col`.
    RemovedChar { row: usize, col: usize, ch: char },
    /// Line `row + 1` was appended to line `row`, which had `col` characters.
    JoinedLines { row: usize, col: usize },
}

impl TextEdit {
    fn apply(&self, selection: &mut TextSelection) -> Result<()> {
        match self {
            TextEdit::RemovedChar { row, col, .. } => selection.remove_text(*row, *col, 1).map(|_| ()),
            TextEdit::JoinedLines { row, .. } => selection.join_line(*row),
        }
    }

    fn revert(&self, selection: &mut TextSelection) -> Result<()> {
        match self {
            TextEdit::RemovedChar { row, col, ch } => selection.insert_text(*row, *col, ch.encode_utf8(&mut [0; 4])),
            TextEdit::JoinedLines { row, col } => selection.split_line(*row, *col),
        }
    }
}

pub(crate) fn text_selection<'a>(ctx: &'a mut CommandContext<'_>) -> Result<&'a mut TextSelection> {
    let selection = ctx.document.text_selection_mut().ok_or(EngineError::NoSelection)?;
    if !selection.has_content() {
        return Err(EngineError::SelectionHasNoContent);
    }
    Ok(selection)
}

pub(crate) fn apply_edits(ctx: &mut CommandContext<'_>, edits: &[TextEdit], cursor: TextCursor) -> Result<()> {
    let selection = text_selection(ctx)?;
    for edit in edits {
        edit.apply(selection)?;
    }
    ctx.environment.set_text_cursor(cursor);
    ctx.update_selection_region();
    Ok(())
}

pub(crate) fn revert_edits(ctx: &mut CommandContext<'_>, edits: &[TextEdit], cursor: TextCursor) -> Result<()> {
    let selection = text_selection(ctx)?;
    for edit in edits.iter().rev() {
        edit.revert(selection)?;
    }
    ctx.environment.set_text_cursor(cursor);
    ctx.update_selection_region();
    Ok(())
}

pub(crate) fn edits_size(edits: &[TextEdit]) -> kolour_engine::command_size::SizeType {
    (edits.len() * std::mem::size_of::<TextEdit>()) as kolour_engine::command_size::SizeType
}
