use kolour_engine_edit::{command_size::SizeType, CommandHistory, HistoryLimits, RestoredPosition};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::helpers::{call_log, Fixture, RecordingCommand};

fn add_all(history: &mut CommandHistory, fixture: &mut Fixture, commands: &[(&str, SizeType)]) {
    let log = call_log();
    for (name, size) in commands {
        history.add_command(RecordingCommand::boxed(name, *size, &log), true, &mut fixture.ctx()).unwrap();
    }
}

#[test]
fn test_byte_budget_evicts_oldest_first() {
    let mut fixture = Fixture::new();
    let mut history = CommandHistory::new(HistoryLimits::new(2, 100, 100));
    add_all(&mut history, &mut fixture, &[("A", 60), ("B", 60)]);
    assert_eq!(history.len(), 2);

    add_all(&mut history, &mut fixture, &[("C", 60)]);
    assert_eq!(history.undo_command_names(10), vec!["C", "B"]);
    // The minimum count wins over the byte budget.
    assert_eq!(history.total_size(), 120);
}

#[test]
fn test_byte_budget_with_min_limit_one() {
    let mut fixture = Fixture::new();
    let mut history = CommandHistory::new(HistoryLimits::new(1, 100, 100));
    add_all(&mut history, &mut fixture, &[("A", 60), ("B", 60), ("C", 60)]);
    assert_eq!(history.undo_command_names(10), vec!["C"]);
    assert_eq!(history.total_size(), 60);
}

#[test]
fn test_most_recent_command_survives_oversize() {
    let mut fixture = Fixture::new();
    let mut history = CommandHistory::new(HistoryLimits::new(1, 100, 100));
    add_all(&mut history, &mut fixture, &[("small", 10), ("huge", 500)]);
    assert_eq!(history.undo_command_names(10), vec!["huge"]);
}

#[test]
fn test_count_limit() {
    let mut fixture = Fixture::new();
    let mut history = CommandHistory::new(HistoryLimits::new(1, 3, 1_000_000));
    add_all(&mut history, &mut fixture, &[("A", 1), ("B", 1), ("C", 1), ("D", 1), ("E", 1)]);
    assert_eq!(history.undo_command_names(10), vec!["E", "D", "C"]);
}

#[test]
fn test_trim_spills_into_redo_list() {
    let mut fixture = Fixture::new();
    let mut history = CommandHistory::new(HistoryLimits::new(1, 3, 1_000_000));
    add_all(&mut history, &mut fixture, &[("A", 1), ("B", 1), ("C", 1)]);
    history.undo(&mut fixture.ctx()).unwrap();
    history.undo(&mut fixture.ctx()).unwrap();

    history.set_limits(HistoryLimits::new(1, 2, 1_000_000));
    assert_eq!(history.undo_command_names(10), vec!["A"]);
    assert_eq!(history.redo_command_names(10), vec!["B"]);

    history.set_limits(HistoryLimits::new(1, 1, 1_000_000));
    assert_eq!(history.undo_command_names(10), vec!["A"]);
    assert!(!history.can_redo());
}

#[test]
fn test_trim_keeps_next_redo_when_undo_is_empty() {
    let mut fixture = Fixture::new();
    let mut history = CommandHistory::new(HistoryLimits::new(1, 3, 1_000_000));
    add_all(&mut history, &mut fixture, &[("A", 1), ("B", 1), ("C", 1)]);
    history.undo_up_to_number(3, &mut fixture.ctx()).unwrap();

    history.set_limits(HistoryLimits::new(1, 1, 1_000_000));
    assert_eq!(history.redo_command_names(10), vec!["A"]);
}

#[test]
fn test_trim_past_saved_state_is_unreachable() {
    let mut fixture = Fixture::new();
    let mut history = CommandHistory::new(HistoryLimits::new(1, 2, 1_000_000));
    add_all(&mut history, &mut fixture, &[("A", 1), ("B", 1)]);
    assert_eq!(history.restored_position(), RestoredPosition::StepsFromClean(-2));

    add_all(&mut history, &mut fixture, &[("C", 1)]);
    assert_eq!(history.restored_position(), RestoredPosition::Unreachable);
    assert!(history.is_document_modified());
}

#[derive(Debug, Clone)]
enum Op {
    Add(SizeType),
    Undo,
    Redo,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0 as SizeType..700).prop_map(Op::Add),
        1 => Just(Op::Undo),
        1 => Just(Op::Redo),
    ]
}

proptest! {
    #[test]
    fn test_budget_holds_for_any_sequence(
        min_limit in 1i32..6,
        max_limit in 1i32..12,
        max_size in 1 as SizeType..2000,
        ops in prop::collection::vec(op_strategy(), 0..150),
    ) {
        let mut fixture = Fixture::new();
        let log = call_log();
        let mut history = CommandHistory::new(HistoryLimits::new(min_limit, max_limit, max_size));
        let limits = history.limits();

        for (i, op) in ops.iter().enumerate() {
            let mut ctx = fixture.ctx();
            match op {
                Op::Add(size) => {
                    let name = format!("cmd{i}");
                    history.add_command(RecordingCommand::boxed(&name, *size, &log), true, &mut ctx).unwrap();
                    prop_assert_eq!(history.undo_command_names(1), vec![name]);
                    prop_assert!(!history.can_redo());
                }
                Op::Undo => history.undo(&mut ctx).unwrap(),
                Op::Redo => history.redo(&mut ctx).unwrap(),
            }

            let count = history.len();
            let within_budget = count <= limits.max_limit as usize && history.total_size() <= limits.max_size_limit;
            prop_assert!(
                within_budget || count <= limits.min_limit as usize,
                "step {}: {} commands using {} bytes",
                i,
                count,
                history.total_size()
            );
        }
    }
}
