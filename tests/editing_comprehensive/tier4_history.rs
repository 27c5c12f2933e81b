//! Tier 4: undo/redo over whole-state snapshots.

use proptest::prelude::*;
use tracegraph::{EditState, Editor, EditorConfig, PathEnd, ProtectionIndex, Weight};

use crate::test_utils::{nodes, path_ids, square};

#[test]
fn undo_each_step_restores_previous_state() {
    let mut ed = nodes(3);
    let mut states = vec![ed.snapshot()];

    ed.add_edge("N1", "N2").unwrap();
    states.push(ed.snapshot());
    ed.add_edge("N2", "N3").unwrap();
    states.push(ed.snapshot());
    ed.set_edge_weight("N2", "N3", "1/3").unwrap();
    states.push(ed.snapshot());
    ed.begin_path("N1").unwrap();
    states.push(ed.snapshot());
    ed.shortest_path_extend("N3").unwrap();
    states.push(ed.snapshot());

    let last = states.pop().unwrap();
    while let Some(expected) = states.pop() {
        assert!(ed.undo());
        assert_eq!(ed.snapshot(), expected);
    }
    // back past the fixture's node placements
    while ed.undo() {}
    assert_eq!(ed.graph().node_count(), 0);

    while ed.redo() {}
    assert_eq!(ed.snapshot(), last);
}

#[test]
fn redo_after_undo_restores_state_before_undo() {
    let mut ed = square();
    ed.remove_node("N3").unwrap();
    let before_undo = ed.snapshot();
    assert!(ed.undo());
    assert_eq!(ed.graph().node_count(), 4);
    assert!(ed.redo());
    assert_eq!(ed.snapshot(), before_undo);
}

#[test]
fn undo_restores_session_and_rebuilds_protection() {
    let mut ed = square();
    ed.begin_path("N1").unwrap();
    ed.adjacent_extend("N2").unwrap();
    ed.exit_editing();
    ed.delete_path("P1").unwrap();
    assert!(!ed.protection().is_node_protected("N1"));

    assert!(ed.undo());
    assert_eq!(path_ids(&ed, "P1"), vec!["N1", "N2"]);
    assert!(ed.protection().is_edge_protected("N2", "N1"));
    assert_eq!(ed.edit_state(), &EditState::Idle);

    assert!(ed.undo());
    assert_eq!(
        ed.edit_state(),
        &EditState::EndpointSelected {
            path_id: "P1".into(),
            end: PathEnd::Last
        }
    );
    assert_eq!(path_ids(&ed, "P1"), vec!["N1"]);
}

#[test]
fn failed_operations_leave_no_history() {
    let mut ed = square();
    let depth = ed.history().depths();
    let _ = ed.remove_node("N9");
    let _ = ed.adjacent_extend("N2");
    let _ = ed.set_edge_weight("N1", "N3", 2.0);
    assert_eq!(ed.history().depths(), depth);
}

#[test]
fn nothing_to_undo_or_redo() {
    let mut ed = Editor::default();
    assert!(!ed.undo());
    assert!(!ed.redo());
    ed.add_node(1.0, 1.0).unwrap();
    assert!(!ed.redo());
}

#[test]
fn bounded_history_drops_oldest() {
    let config = EditorConfig {
        history_limit: Some(2),
        ..EditorConfig::default()
    };
    let mut ed = Editor::new(config).unwrap();
    for _ in 0..4 {
        ed.add_node(0.0, 0.0).unwrap();
    }
    assert!(ed.undo());
    assert!(ed.undo());
    assert!(!ed.undo());
    assert_eq!(ed.graph().node_count(), 2);
}

#[test]
fn restored_weights_stay_normalized() {
    let mut ed = square();
    ed.step_edge_weight("N1", "N2", tracegraph::StepDirection::Down).unwrap();
    ed.step_edge_weight("N1", "N2", tracegraph::StepDirection::Down).unwrap();
    assert!(ed.undo());
    assert_eq!(ed.graph().find_edge("N1", "N2").unwrap().weight, Weight::unit_fraction(2));
}

// =============================================================================
// Random operation sequences
// =============================================================================

#[derive(Debug, Clone)]
enum Step {
    Place(u8, u8),
    Connect(usize, usize),
    Remove(usize),
    Begin(usize),
    Grow(usize),
    Exit,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (any::<u8>(), any::<u8>()).prop_map(|(x, y)| Step::Place(x, y)),
        3 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Step::Connect(a, b)),
        1 => any::<usize>().prop_map(Step::Remove),
        1 => any::<usize>().prop_map(Step::Begin),
        2 => any::<usize>().prop_map(Step::Grow),
        1 => Just(Step::Exit),
    ]
}

fn pick(ed: &Editor, i: usize) -> String {
    match ed.graph().nodes() {
        [] => "N0".to_string(),
        all => all[i % all.len()].id.clone(),
    }
}

fn apply(ed: &mut Editor, step: &Step) {
    let _ = match step {
        Step::Place(x, y) => ed.add_node(f64::from(*x), f64::from(*y)).map(drop),
        Step::Connect(a, b) => {
            let (a, b) = (pick(ed, *a), pick(ed, *b));
            ed.add_edge(&a, &b).map(drop)
        }
        Step::Remove(a) => {
            let a = pick(ed, *a);
            ed.remove_node(&a).map(drop)
        }
        Step::Begin(a) => {
            let a = pick(ed, *a);
            ed.begin_path(&a).map(drop)
        }
        Step::Grow(a) => {
            let a = pick(ed, *a);
            ed.shortest_path_extend(&a).map(drop)
        }
        Step::Exit => {
            ed.exit_editing();
            Ok(())
        }
    };
}

proptest! {
    #[test]
    fn undo_all_then_redo_all(steps in prop::collection::vec(step(), 1..40)) {
        let mut ed = Editor::default();
        let initial = ed.snapshot();
        for s in &steps {
            apply(&mut ed, s);
        }
        let end = ed.snapshot();
        while ed.undo() {
            prop_assert_eq!(ed.protection(), &ProtectionIndex::rebuild(ed.paths()));
        }
        prop_assert_eq!(ed.snapshot(), initial);
        while ed.redo() {}
        prop_assert_eq!(ed.snapshot(), end);
    }
}
