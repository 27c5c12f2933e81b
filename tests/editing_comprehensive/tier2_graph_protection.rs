//! Tier 2: graph store operations and path protection.

use tracegraph::{Editor, EdgeKey, ErrorKind, TraceError, Weight};

use crate::test_utils::{nodes, path_ids, square};

#[test]
fn add_edge_is_idempotent() {
    let mut ed = nodes(2);
    assert!(ed.add_edge("N1", "N2").unwrap());
    ed.set_edge_weight("N1", "N2", 4.0).unwrap();
    assert!(!ed.add_edge("N1", "N2").unwrap());
    assert!(!ed.add_edge("N2", "N1").unwrap());
    assert_eq!(ed.graph().edge_count(), 1);
    assert_eq!(ed.graph().find_edge("N1", "N2").unwrap().weight, Weight::integer(4));
}

#[test]
fn self_loops_are_ignored() {
    let mut ed = nodes(1);
    assert!(!ed.add_edge("N1", "N1").unwrap());
    assert_eq!(ed.graph().edge_count(), 0);
}

#[test]
fn edge_lookup_is_symmetric() {
    let mut ed = nodes(3);
    ed.add_edge("N3", "N1").unwrap();
    assert_eq!(EdgeKey::new("N1", "N3"), EdgeKey::new("N3", "N1"));
    assert_eq!(ed.graph().find_edge("N1", "N3"), ed.graph().find_edge("N3", "N1"));
    assert!(ed.graph().has_edge("N1", "N3"));
}

#[test]
fn generated_ids_skip_taken_ones() {
    let mut ed = nodes(3);
    ed.remove_node("N3").unwrap();
    assert_eq!(ed.add_node(1.0, 1.0).unwrap().id, "N4");
    ed.remove_node("N1").unwrap();
    assert_eq!(ed.add_node(2.0, 2.0).unwrap().id, "N5");
}

#[test]
fn remove_node_takes_incident_edges() {
    let mut ed = square();
    ed.remove_node("N1").unwrap();
    assert_eq!(ed.graph().edge_count(), 2);
    assert!(ed.graph().incident_edges("N1").next().is_none());
}

#[test]
fn every_path_pair_is_protected_until_deleted() {
    let mut ed = square();
    ed.begin_path("N1").unwrap();
    ed.adjacent_extend("N2").unwrap();
    ed.adjacent_extend("N3").unwrap();
    ed.exit_editing();

    let ids = path_ids(&ed, "P1");
    for pair in ids.windows(2) {
        let (u, v) = (&pair[0], &pair[1]);
        assert_eq!(ed.remove_node(u).unwrap_err().kind(), ErrorKind::ProtectedEntity);
        assert_eq!(ed.remove_edge(v, u).unwrap_err().kind(), ErrorKind::ProtectedEntity);
    }
    assert_eq!(ed.graph().node_count(), 4);

    ed.delete_path("P1").unwrap();
    ed.remove_edge("N2", "N3").unwrap();
    ed.remove_node("N2").unwrap();
    assert!(!ed.protection().is_node_protected("N1"));
}

#[test]
fn protection_error_lists_every_blocking_path() {
    let mut ed = square();
    ed.begin_path("N1").unwrap();
    ed.adjacent_extend("N2").unwrap();
    ed.exit_editing();
    ed.begin_path("N2").unwrap();
    ed.adjacent_extend("N1").unwrap();
    ed.exit_editing();
    ed.rename_path("P2", "Return").unwrap();

    let err = ed.remove_edge("N1", "N2").unwrap_err();
    match &err {
        TraceError::ProtectedEntity { paths, .. } => {
            assert_eq!(paths, &vec!["Path 1".to_string(), "Return".to_string()])
        }
        other => panic!("Expected ProtectedEntity, got {:?}", other),
    }
    assert_eq!(err.to_string(), "Edge N1-N2 used in saved paths: Path 1, Return");
}

#[test]
fn duplicate_labels_each_block_removal() {
    let mut ed = square();
    for _ in 0..2 {
        ed.begin_path("N2").unwrap();
        ed.exit_editing();
    }
    ed.delete_path("P1").unwrap();
    // numbered from the current count, so P3 repeats P2's label
    assert_eq!(ed.begin_path("N2").unwrap().path_id, "P3");
    ed.exit_editing();
    let labels: Vec<_> = ed.paths().paths().iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, ["Path 2", "Path 2"]);

    let err = ed.remove_node("N2").unwrap_err();
    match &err {
        TraceError::ProtectedEntity { paths, .. } => assert_eq!(paths.len(), 2),
        other => panic!("Expected ProtectedEntity, got {:?}", other),
    }
    assert_eq!(err.to_string(), "Node N2 used in saved paths: Path 2, Path 2");
}

#[test]
fn toggle_edge_respects_protection() {
    let mut ed = nodes(2);
    assert!(ed.toggle_edge("N1", "N2").unwrap());
    ed.begin_path("N1").unwrap();
    ed.adjacent_extend("N2").unwrap();
    ed.exit_editing();
    assert_eq!(ed.toggle_edge("N2", "N1").unwrap_err().kind(), ErrorKind::ProtectedEntity);
    ed.delete_path("P1").unwrap();
    assert!(!ed.toggle_edge("N2", "N1").unwrap());
}

#[test]
fn unknown_entities_are_not_found() {
    let mut ed = Editor::default();
    assert_eq!(ed.remove_node("N1").unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(ed.add_edge("N1", "N2").unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(ed.remove_edge("N1", "N2").unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(ed.delete_path("P1").unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn shortest_route_prefers_cheaper_direct_edge() {
    let ed = square();
    let route = ed.shortest_route("N1", "N4").unwrap();
    assert_eq!(route.node_ids, vec!["N1", "N4"]);
    assert_eq!(route.cost, 3.0);
    assert_eq!(route.hops(), 1);
}

#[test]
fn shortest_route_uses_fractional_weights() {
    let mut ed = square();
    ed.set_edge_weight("N3", "N4", "1/2").unwrap();
    let route = ed.shortest_route("N1", "N4").unwrap();
    assert_eq!(route.node_ids, vec!["N1", "N2", "N3", "N4"]);
    assert_eq!(route.cost, 2.5);
    assert_eq!(ed.shortest_route("N2", "N2").unwrap().node_ids, vec!["N2"]);
}
