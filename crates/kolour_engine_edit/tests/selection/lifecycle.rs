use kolour_engine_edit::{
    selection_commands::{create_command_name, move_command_name, ImageSelectionPullFromDocumentCommand, SelectionCreateCommand, SelectionMoveCommand},
    Color, Command, EditState, EngineError, Image, ImageSelection, MacroCommand, Position, Rectangle, Selection, UndoState,
};
use pretty_assertions::assert_eq;

use crate::helpers::{checker_document, init_logging, Fixture};

fn create_border(state: &mut EditState, border: &ImageSelection) {
    let selection = Selection::from(border.clone());
    let cmd = SelectionCreateCommand::new(create_command_name(&selection), selection);
    state.add_create_selection_command(Box::new(cmd), true).unwrap();
}

fn content(state: &EditState) -> Option<Image> {
    state.document().image_selection().and_then(|sel| sel.base_image().cloned())
}

#[test]
fn test_pull_move_undo_scenario() {
    init_logging();
    let mut state = EditState::new(checker_document(40, 30));
    let original = state.document().image().clone();
    let rect = Rectangle::from(5, 5, 10, 8);
    let border = ImageSelection::rectangular(rect);

    create_border(&mut state, &border);
    assert!(!state.document().selection().unwrap().has_content());

    let pull = ImageSelectionPullFromDocumentCommand::new("Selection: Create", border, Color::WHITE).unwrap();
    state.add_command(Box::new(pull), true).unwrap();
    let pulled = content(&state).unwrap();
    assert_eq!(pulled, original.copy(rect));
    assert_eq!(state.document().get_image_at(rect), Image::new(10, 8, Color::WHITE));

    let name = move_command_name(state.document().selection().unwrap());
    let mut mv = SelectionMoveCommand::new(name, state.document()).unwrap();
    mv.move_to(Position::new(15, 15), false, &mut state.context()).unwrap();
    mv.finalize();
    state.add_command(Box::new(mv), false).unwrap();
    assert_eq!(state.document().selection().unwrap().top_left(), Position::new(15, 15));

    state.undo().unwrap();
    assert_eq!(state.document().selection().unwrap().top_left(), Position::new(5, 5));
    assert_eq!(content(&state), Some(pulled.clone()));

    state.undo().unwrap();
    let selection = state.document().selection().unwrap();
    assert!(!selection.has_content());
    assert_eq!(selection.bounding_rect(), rect);
    assert_eq!(state.document().image(), &original);

    state.undo().unwrap();
    assert!(state.document().selection().is_none());
    assert_eq!(state.document().image(), &original);

    state.redo_up_to_number(3).unwrap();
    assert_eq!(state.document().selection().unwrap().top_left(), Position::new(15, 15));
    assert_eq!(content(&state), Some(pulled));
    assert_eq!(state.document().get_image_at(rect), Image::new(10, 8, Color::WHITE));
}

#[test]
fn test_create_and_pull_as_macro() {
    init_logging();
    let mut state = EditState::new(checker_document(40, 30));
    let original = state.document().clone();
    let border = ImageSelection::elliptical(Rectangle::from(2, 2, 12, 9));

    let selection = Selection::from(border.clone());
    let mut cmd = MacroCommand::new(create_command_name(&selection));
    cmd.add_command(Box::new(SelectionCreateCommand::new(create_command_name(&selection), selection)));
    cmd.add_command(Box::new(ImageSelectionPullFromDocumentCommand::new("pull", border, Color::WHITE).unwrap()));
    state.add_command(Box::new(cmd), true).unwrap();

    let floating = state.document().image_selection().unwrap();
    assert!(floating.has_content());
    // Corners lie outside the ellipse and stay on the document.
    assert_eq!(state.document().image().pixel((2, 2)), original.image().pixel((2, 2)));
    assert_eq!(state.document().image().pixel((8, 6)), Some(Color::WHITE));

    state.undo().unwrap();
    assert_eq!(state.document(), &original);
}

#[test]
fn test_pull_rejects_border_with_content() {
    let floating = ImageSelection::rectangular(Rectangle::from(0, 0, 2, 2))
        .with_base_image(Image::new(2, 2, Color::RED))
        .unwrap();
    assert!(matches!(
        ImageSelectionPullFromDocumentCommand::new("pull", floating, Color::WHITE),
        Err(EngineError::SelectionHasContent)
    ));
}

#[test]
fn test_pull_tolerates_missing_border() {
    let mut fixture = Fixture::new();
    let border = ImageSelection::rectangular(Rectangle::from(1, 1, 3, 3));
    let mut pull = ImageSelectionPullFromDocumentCommand::new("pull", border, Color::BLACK).unwrap();

    pull.execute(&mut fixture.ctx()).unwrap();
    assert!(fixture.document.selection().unwrap().has_content());
    assert_eq!(fixture.document.image().pixel((2, 2)), Some(Color::BLACK));

    pull.unexecute(&mut fixture.ctx()).unwrap();
    assert!(!fixture.document.selection().unwrap().has_content());
    assert_eq!(fixture.document.image().pixel((2, 2)), Some(Color::WHITE));
}

#[test]
fn test_pull_over_floating_selection_is_invariant_violation() {
    let mut fixture = Fixture::new();
    let floating = ImageSelection::rectangular(Rectangle::from(0, 0, 2, 2))
        .with_base_image(Image::new(2, 2, Color::RED))
        .unwrap();
    fixture.document.set_selection(floating.into()).unwrap();

    let mut pull = ImageSelectionPullFromDocumentCommand::new("pull", ImageSelection::rectangular(Rectangle::from(5, 5, 2, 2)), Color::WHITE).unwrap();
    assert!(pull.execute(&mut fixture.ctx()).unwrap_err().is_invariant_violation());
}

#[test]
fn test_unexecute_create_with_content_is_invariant_violation() {
    let mut fixture = Fixture::new();
    let border = ImageSelection::rectangular(Rectangle::from(1, 1, 4, 4));
    let mut create = SelectionCreateCommand::new("create", border.clone().into());
    let mut pull = ImageSelectionPullFromDocumentCommand::new("pull", border, Color::WHITE).unwrap();

    create.execute(&mut fixture.ctx()).unwrap();
    pull.execute(&mut fixture.ctx()).unwrap();
    assert!(create.unexecute(&mut fixture.ctx()).unwrap_err().is_invariant_violation());

    pull.unexecute(&mut fixture.ctx()).unwrap();
    create.unexecute(&mut fixture.ctx()).unwrap();
    assert!(fixture.document.selection().is_none());
}

#[test]
fn test_unexecute_create_without_selection_is_tolerated() {
    let mut fixture = Fixture::new();
    let mut create = SelectionCreateCommand::new("create", ImageSelection::rectangular(Rectangle::from(1, 1, 4, 4)).into());
    create.execute(&mut fixture.ctx()).unwrap();
    fixture.document.selection_delete();
    create.unexecute(&mut fixture.ctx()).unwrap();
}

#[test]
fn test_create_syncs_environment() {
    let mut fixture = Fixture::new();
    let transparency = kolour_engine_edit::ImageSelectionTransparency::transparent(Color::RED, 0.1);
    let border = ImageSelection::rectangular(Rectangle::from(1, 1, 4, 4)).with_transparency(transparency);
    let mut create = SelectionCreateCommand::new("create", border.into());
    let notifications = fixture.environment.something_below_cursor_changes();

    create.execute(&mut fixture.ctx()).unwrap();
    assert_eq!(fixture.environment.image_selection_transparency(), transparency);
    assert_eq!(fixture.environment.something_below_cursor_changes(), notifications + 1);
}
