#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]
//! Reversible editing on top of `kolour_engine`.
//!
//! Every document mutation is a [`Command`]. Commands are recorded by the
//! [`CommandHistory`], which bounds memory use and tracks the distance to the
//! last saved state.

mod command;
pub use command::*;

pub mod history;
pub use history::{CommandHistory, EditorCommandHistory, HistoryLimits, RestoredPosition, ShapeTool};

pub mod selection_commands;
pub mod text_commands;
pub mod effect_commands;

mod edit_state;
pub use edit_state::*;

use i18n_embed::{
    fluent::{fluent_language_loader, FluentLanguageLoader},
    DesktopLanguageRequester,
};
use rust_embed::RustEmbed;

pub use kolour_engine::{
    command_size, Color, Document, EngineError, Image, ImageSelection, ImageSelectionShape, ImageSelectionTransparency, Position, Rectangle, Result,
    Selection, SelectionKind, Size, TextEffects, TextSelection, TextStyle,
};

#[derive(RustEmbed)]
#[folder = "i18n"] // path to the compiled localization resources
struct Localizations;

use once_cell::sync::Lazy;
pub static LANGUAGE_LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let loader = fluent_language_loader!();
    let requested_languages = DesktopLanguageRequester::requested_languages();
    let _result = i18n_embed::select(&loader, &Localizations, &requested_languages);
    loader
});
