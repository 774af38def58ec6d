use kolour_engine_edit::{
    selection_commands::{create_command_name, SelectionCreateCommand},
    Color, Image, ImageSelection, Rectangle, Selection, UndoState,
};
use pretty_assertions::assert_eq;

use crate::helpers::{create_test_state, PaintCommand};

fn border(rect: Rectangle) -> Box<SelectionCreateCommand> {
    let selection = Selection::from(ImageSelection::rectangular(rect));
    Box::new(SelectionCreateCommand::new(create_command_name(&selection), selection))
}

#[test]
fn test_consecutive_borders_share_one_slot() {
    let mut state = create_test_state();
    state.add_create_selection_command(border(Rectangle::from(0, 0, 5, 5)), true).unwrap();
    state.add_create_selection_command(border(Rectangle::from(10, 10, 8, 8)), true).unwrap();

    assert_eq!(state.undo_stack_len(), 1);
    assert_eq!(state.document().selection().map(Selection::bounding_rect), Some(Rectangle::from(10, 10, 8, 8)));

    state.undo().unwrap();
    assert!(state.document().selection().is_none());
    assert!(!state.can_undo());
}

#[test]
fn test_floating_create_gets_own_slot() {
    let mut state = create_test_state();
    state.add_create_selection_command(border(Rectangle::from(0, 0, 5, 5)), true).unwrap();

    let floating = ImageSelection::rectangular(Rectangle::from(1, 1, 2, 2))
        .with_base_image(Image::new(2, 2, Color::RED))
        .unwrap();
    let selection = Selection::from(floating);
    let cmd = SelectionCreateCommand::new(create_command_name(&selection), selection);
    state.add_create_selection_command(Box::new(cmd), true).unwrap();
    assert_eq!(state.undo_stack_len(), 2);
}

#[test]
fn test_other_command_between_borders() {
    let mut state = create_test_state();
    state.add_create_selection_command(border(Rectangle::from(0, 0, 5, 5)), true).unwrap();
    state.add_command(Box::new(PaintCommand::new(Rectangle::from(20, 20, 2, 2), Color::RED)), true).unwrap();
    state.add_create_selection_command(border(Rectangle::from(3, 3, 5, 5)), true).unwrap();
    assert_eq!(state.undo_stack_len(), 3);
}

#[test]
fn test_collapse_drops_redo() {
    let mut state = create_test_state();
    state.add_create_selection_command(border(Rectangle::from(0, 0, 5, 5)), true).unwrap();
    state.add_command(Box::new(PaintCommand::new(Rectangle::from(20, 20, 2, 2), Color::RED)), true).unwrap();
    state.undo().unwrap();
    assert_eq!(state.redo_stack_len(), 1);

    state.add_create_selection_command(border(Rectangle::from(1, 1, 5, 5)), true).unwrap();
    assert_eq!(state.undo_stack_len(), 1);
    assert_eq!(state.redo_stack_len(), 0);
    assert_eq!(state.undo_description(), Some("Selection: Create".to_string()));
}
