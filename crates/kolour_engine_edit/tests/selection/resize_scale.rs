use std::{sync::Arc, time::Duration};

use kolour_engine_edit::{
    selection_commands::{ImageSelectionPullFromDocumentCommand, ManualClock, SelectionCreateCommand, SelectionResizeScaleCommand},
    Color, Command, Document, EditState, Image, ImageSelection, Position, Rectangle, Selection, SelectionKind, TextSelection, TextStyle, UndoState,
};
use pretty_assertions::assert_eq;

use crate::helpers::{checker_document, create_test_state};

fn checker_image() -> Image {
    checker_document(4, 4).image().clone()
}

fn state_with(selection: Selection) -> EditState {
    let mut state = create_test_state();
    state
        .add_create_selection_command(Box::new(SelectionCreateCommand::new("Selection: Paste", selection)), true)
        .unwrap();
    state
}

fn floating_checker() -> EditState {
    let selection = ImageSelection::rectangular(Rectangle::from(0, 0, 4, 4))
        .with_base_image(checker_image())
        .unwrap();
    state_with(selection.into())
}

fn content(state: &EditState) -> Image {
    state.document().image_selection().and_then(|sel| sel.base_image()).cloned().unwrap()
}

#[test]
fn test_smooth_scale_waits_for_idle_drag() {
    let mut state = floating_checker();
    let clock = Arc::new(ManualClock::new());
    let mut cmd = SelectionResizeScaleCommand::with_clock(state.document(), clock.clone()).unwrap();

    cmd.resize(8, 8, true, &mut state.context()).unwrap();
    assert_eq!(content(&state), checker_image().scaled(8, 8, false));
    assert!(cmd.smooth_scale_pending());

    clock.advance(Duration::from_millis(100));
    cmd.resize(12, 6, true, &mut state.context()).unwrap();

    clock.advance(Duration::from_millis(150));
    assert!(!cmd.fire_smooth_scale_if_due(&mut state.context()).unwrap());
    assert_eq!(content(&state), checker_image().scaled(12, 6, false));

    clock.advance(Duration::from_millis(60));
    assert!(cmd.fire_smooth_scale_if_due(&mut state.context()).unwrap());
    assert_eq!(content(&state), checker_image().scaled(12, 6, true));
    assert!(!cmd.smooth_scale_pending());

    clock.advance(Duration::from_secs(1));
    assert!(!cmd.fire_smooth_scale_if_due(&mut state.context()).unwrap());
}

#[test]
fn test_finalize_runs_pending_rescale() {
    let mut state = floating_checker();
    let clock = Arc::new(ManualClock::new());
    let mut cmd = SelectionResizeScaleCommand::with_clock(state.document(), clock).unwrap();

    cmd.resize(10, 7, true, &mut state.context()).unwrap();
    cmd.finalize(&mut state.context()).unwrap();
    assert!(!cmd.smooth_scale_pending());
    assert_eq!(content(&state), checker_image().scaled(10, 7, true));
}

#[test]
fn test_unchanged_resize_is_skipped() {
    let mut state = floating_checker();
    let mut cmd = SelectionResizeScaleCommand::new(state.document()).unwrap();
    let repaints = state.view().repaint_count();
    cmd.resize(4, 4, false, &mut state.context()).unwrap();
    assert_eq!(state.view().repaint_count(), repaints);
}

#[test]
fn test_image_resize_is_clamped_to_one_pixel() {
    let mut state = floating_checker();
    let mut cmd = SelectionResizeScaleCommand::new(state.document()).unwrap();
    cmd.resize(0, -3, false, &mut state.context()).unwrap();
    let selection = state.document().selection().unwrap();
    assert_eq!((selection.width(), selection.height()), (1, 1));
}

#[test]
fn test_undo_redo_swaps_selection() {
    let mut state = floating_checker();
    let original = state.document().selection().cloned().unwrap();
    let mut cmd = SelectionResizeScaleCommand::new(state.document()).unwrap();
    cmd.resize_and_move_to(8, 6, Position::new(10, 10), false, &mut state.context()).unwrap();
    let resized = state.document().selection().cloned().unwrap();
    assert_eq!(resized.bounding_rect(), Rectangle::from(10, 10, 8, 6));
    assert_eq!(cmd.name(), "Selection: Smooth Scale");

    state.add_command(Box::new(cmd), false).unwrap();
    state.undo().unwrap();
    assert_eq!(state.document().selection(), Some(&original));
    state.redo().unwrap();
    assert_eq!(state.document().selection(), Some(&resized));
}

#[test]
fn test_text_box_resize_keeps_text() {
    let style = TextStyle::default();
    let text = TextSelection::new(Rectangle::from(2, 2, 30, 25), style.clone()).with_lines(vec!["one".to_string(), "two".to_string()]);
    let mut state = state_with(text.into());
    let mut cmd = SelectionResizeScaleCommand::new(state.document()).unwrap();
    assert_eq!(cmd.name(), "Text: Resize Box");

    cmd.resize(1, 1, false, &mut state.context()).unwrap();
    let resized = state.document().text_selection().unwrap();
    assert_eq!(resized.rect(), Rectangle::from(2, 2, 7, 2 + style.line_height()));
    assert_eq!(resized.text(), "one\ntwo");

    state.add_command(Box::new(cmd), false).unwrap();
    state.undo().unwrap();
    assert_eq!(state.document().text_selection().unwrap().rect(), Rectangle::from(2, 2, 30, 25));
}

#[test]
fn test_scaled_border_stays_empty() {
    let mut state = state_with(ImageSelection::elliptical(Rectangle::from(0, 0, 6, 6)).into());
    let mut cmd = SelectionResizeScaleCommand::new(state.document()).unwrap();
    assert_eq!(cmd.name(), "Selection: Resize/Scale");
    cmd.resize(12, 12, false, &mut state.context()).unwrap();
    let selection = state.document().selection().unwrap();
    assert!(!selection.has_content());
    assert_eq!(selection.bounding_rect(), Rectangle::from(0, 0, 12, 12));
    assert_eq!(state.document().image(), &Image::new(40, 30, Color::WHITE));
}

#[test]
fn test_resized_ellipse_keeps_its_corners_on_the_document() {
    let mut state = EditState::new(Document::new(40, 30, Color::BLUE));
    let border = ImageSelection::elliptical(Rectangle::from(0, 0, 6, 6));
    state
        .add_create_selection_command(Box::new(SelectionCreateCommand::new("Selection: Create", border.into())), true)
        .unwrap();

    let mut cmd = SelectionResizeScaleCommand::new(state.document()).unwrap();
    cmd.resize(12, 12, false, &mut state.context()).unwrap();
    state.add_command(Box::new(cmd), false).unwrap();

    let resized = state.document().image_selection().cloned().unwrap();
    assert_eq!(resized.kind(), SelectionKind::EllipticalImage);
    assert!(!resized.contains(Position::new(0, 0)));

    let pull = ImageSelectionPullFromDocumentCommand::new("Selection: Create", resized, Color::WHITE).unwrap();
    state.add_command(Box::new(pull), true).unwrap();
    assert_eq!(state.document().image().pixel((0, 0)), Some(Color::BLUE));
    assert_eq!(state.document().image().pixel((6, 6)), Some(Color::WHITE));
}
