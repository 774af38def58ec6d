//! Commands driving a selection through its lifecycle.
//!
//! ```text
//! no selection --create--> border --pull / give content--> floating
//! floating --move / resize / transparency / text edits--> floating
//! floating or border --destroy--> no selection
//! ```

use i18n_embed_fl::fl;
use kolour_engine::Selection;

mod create;
pub use create::*;

mod destroy;
pub use destroy::*;

mod content;
pub use content::*;

mod move_command;
pub use move_command::*;

mod resize_scale;
pub use resize_scale::*;

mod timer;
pub use timer::*;

mod transparency;
pub use transparency::*;

use crate::{CommandContext, Environment};

pub fn create_command_name(selection: &Selection) -> String {
    if selection.is_text() {
        fl!(crate::LANGUAGE_LOADER, "command-text-create")
    } else {
        fl!(crate::LANGUAGE_LOADER, "command-selection-create")
    }
}

/// Name of a destroy that flattens the selection.
pub fn deselect_command_name(selection: &Selection) -> String {
    if selection.is_text() {
        fl!(crate::LANGUAGE_LOADER, "command-text-finish")
    } else {
        fl!(crate::LANGUAGE_LOADER, "command-selection-deselect")
    }
}

/// Name of a destroy that discards the selection.
pub fn delete_command_name(selection: &Selection) -> String {
    if selection.is_text() {
        fl!(crate::LANGUAGE_LOADER, "command-text-delete-box")
    } else {
        fl!(crate::LANGUAGE_LOADER, "command-selection-delete")
    }
}

pub fn move_command_name(selection: &Selection) -> String {
    if selection.is_text() {
        fl!(crate::LANGUAGE_LOADER, "command-text-move")
    } else {
        fl!(crate::LANGUAGE_LOADER, "command-selection-move")
    }
}

pub fn smear_command_name() -> String {
    fl!(crate::LANGUAGE_LOADER, "command-selection-smear")
}

/// Makes the tool settings match a selection that is about to become active.
pub(crate) fn sync_environment(environment: &mut Environment, selection: &Selection) {
    match selection {
        Selection::Image(sel) => environment.set_image_selection_transparency(*sel.transparency()),
        Selection::Text(sel) => environment.set_text_style(sel.text_style().clone()),
    }
}

/// Replaces the document selection and repaints both the old and new area.
pub(crate) fn install_selection(ctx: &mut CommandContext<'_>, selection: Selection) -> kolour_engine::Result<()> {
    ctx.update_selection_region();
    ctx.document.set_selection(selection)?;
    ctx.update_selection_region();
    Ok(())
}
