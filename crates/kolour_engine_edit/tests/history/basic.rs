use kolour_engine_edit::{Color, CommandHistory, HistoryLimits, Rectangle, ShapeTool, UndoState};
use pretty_assertions::assert_eq;

use crate::helpers::{call_log, create_test_state, FailingCommand, Fixture, PaintCommand, RecordingCommand};

#[test]
fn test_undo_stack_initially_empty() {
    let state = create_test_state();
    assert_eq!(state.undo_stack_len(), 0);
    assert_eq!(state.redo_stack_len(), 0);
    assert!(!state.can_undo());
    assert!(!state.can_redo());
    assert!(!state.is_modified());
}

#[test]
fn test_undo_redo_restores_pixels() {
    let mut state = create_test_state();
    let a = Rectangle::from(0, 0, 10, 10);
    let b = Rectangle::from(5, 5, 10, 10);

    state.add_command(Box::new(PaintCommand::new(a, Color::RED)), true).unwrap();
    let after_a = state.document().clone();
    state.add_command(Box::new(PaintCommand::new(b, Color::BLUE)), true).unwrap();
    let after_b = state.document().clone();

    state.undo().unwrap();
    assert_eq!(state.document(), &after_a);
    assert_eq!(state.document().image().pixel((7, 7)), Some(Color::RED));

    state.redo().unwrap();
    assert_eq!(state.document(), &after_b);
    assert_eq!(state.document().image().pixel((7, 7)), Some(Color::BLUE));
}

#[test]
fn test_new_command_clears_redo() {
    let mut state = create_test_state();
    let rect = Rectangle::from(0, 0, 4, 4);
    state.add_command(Box::new(PaintCommand::new(rect, Color::RED)), true).unwrap();
    state.add_command(Box::new(PaintCommand::new(rect, Color::GREEN)), true).unwrap();
    state.undo().unwrap();
    state.undo().unwrap();
    assert_eq!(state.redo_stack_len(), 2);

    state.add_command(Box::new(PaintCommand::new(rect, Color::BLUE)), true).unwrap();
    assert_eq!(state.redo_stack_len(), 0);
    assert_eq!(state.undo_stack_len(), 1);
    assert!(!state.can_redo());
}

#[test]
fn test_undo_on_empty_history_is_noop() {
    let mut fixture = Fixture::new();
    let mut history = CommandHistory::default();
    history.undo(&mut fixture.ctx()).unwrap();
    history.redo(&mut fixture.ctx()).unwrap();
    assert!(history.is_empty());
}

#[test]
fn test_add_without_execute() {
    let log = call_log();
    let mut fixture = Fixture::new();
    let mut history = CommandHistory::default();

    history.add_command(RecordingCommand::boxed("A", 1, &log), false, &mut fixture.ctx()).unwrap();
    assert!(log.lock().is_empty());

    history.undo(&mut fixture.ctx()).unwrap();
    history.redo(&mut fixture.ctx()).unwrap();
    assert_eq!(*log.lock(), vec!["unexecute A", "execute A"]);
}

#[test]
fn test_failed_undo_still_moves_command() {
    let mut fixture = Fixture::new();
    let mut history = CommandHistory::default();
    history.add_command(Box::new(FailingCommand), true, &mut fixture.ctx()).unwrap();

    let err = history.undo(&mut fixture.ctx()).unwrap_err();
    assert!(err.is_invariant_violation());
    assert_eq!(history.undo_len(), 0);
    assert_eq!(history.redo_len(), 1);
}

#[test]
fn test_descriptions_and_names() {
    let log = call_log();
    let mut fixture = Fixture::new();
    let mut history = CommandHistory::new(HistoryLimits::new(1, 100, 1000));
    for name in ["A", "B", "C", "D"] {
        history.add_command(RecordingCommand::boxed(name, 1, &log), true, &mut fixture.ctx()).unwrap();
    }
    history.undo(&mut fixture.ctx()).unwrap();

    assert_eq!(history.undo_description(), Some("C".to_string()));
    assert_eq!(history.redo_description(), Some("D".to_string()));
    assert_eq!(history.undo_command_names(2), vec!["C", "B"]);
    assert_eq!(history.redo_command_names(10), vec!["D"]);
    assert_eq!(history.next_undo_command().map(|cmd| cmd.name()), Some("C".to_string()));
    assert_eq!(history.total_size(), 4);
}

#[test]
fn test_undo_up_to_number() {
    let log = call_log();
    let mut fixture = Fixture::new();
    let mut history = CommandHistory::default();
    for name in ["A", "B", "C"] {
        history.add_command(RecordingCommand::boxed(name, 1, &log), false, &mut fixture.ctx()).unwrap();
    }

    history.undo_up_to_number(2, &mut fixture.ctx()).unwrap();
    assert_eq!(history.undo_len(), 1);
    assert_eq!(history.redo_command_names(10), vec!["B", "C"]);

    history.redo_up_to_number(5, &mut fixture.ctx()).unwrap();
    assert_eq!(history.undo_len(), 3);
    assert_eq!(*log.lock(), vec!["unexecute C", "unexecute B", "execute B", "execute C"]);
}

struct DraggingTool {
    begun: bool,
    cancelled: usize,
}

impl ShapeTool for DraggingTool {
    fn has_begun_shape(&self) -> bool {
        self.begun
    }

    fn cancel_shape(&mut self) {
        self.begun = false;
        self.cancelled += 1;
    }
}

#[test]
fn test_undo_cancels_shape_first() {
    let mut state = create_test_state();
    state.add_command(Box::new(PaintCommand::new(Rectangle::from(0, 0, 4, 4), Color::RED)), true).unwrap();

    let mut tool = DraggingTool { begun: true, cancelled: 0 };
    state.undo_with_tool(Some(&mut tool)).unwrap();
    assert_eq!(tool.cancelled, 1);
    assert_eq!(state.undo_stack_len(), 1);

    state.undo_with_tool(Some(&mut tool)).unwrap();
    assert_eq!(tool.cancelled, 1);
    assert_eq!(state.undo_stack_len(), 0);

    tool.begun = true;
    state.redo_with_tool(Some(&mut tool)).unwrap();
    assert_eq!(tool.cancelled, 2);
    assert_eq!(state.redo_stack_len(), 1);
}
