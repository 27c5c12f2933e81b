//! Tier 5: import/export of interchange documents.

use serde_json::json;
use tracegraph::{Dimensions, EditState, Editor, ErrorKind, ProjectDocument, Weight};

use crate::test_utils::{path_ids, square};

fn import(value: serde_json::Value) -> Result<Editor, tracegraph::TraceError> {
    let mut ed = Editor::default();
    ed.import_json(&value.to_string())?;
    Ok(ed)
}

#[test]
fn export_then_import_preserves_project() {
    let mut ed = Editor::default();
    ed.load_image(640, 480).unwrap();
    for i in 0..4 {
        ed.add_node(10.0 * i as f64, 5.0).unwrap();
    }
    ed.add_edge("N1", "N2").unwrap();
    ed.add_edge("N2", "N3").unwrap();
    ed.set_edge_weight("N2", "N3", "1/4").unwrap();
    ed.rename_node("N2", "Bridge").unwrap();
    ed.begin_path("N1").unwrap();
    ed.shortest_path_extend("N3").unwrap();
    ed.exit_editing();
    ed.toggle_path_visibility("P1").unwrap();
    let json = ed.export_json().unwrap();

    let mut back = Editor::default();
    let report = back.import_json(&json).unwrap();
    assert_eq!((report.nodes, report.edges, report.paths), (4, 2, 1));
    assert_eq!(report.dimensions, Dimensions::new(640, 480));
    assert_eq!(back.graph().nodes(), ed.graph().nodes());
    assert_eq!(back.graph().edges(), ed.graph().edges());
    assert_eq!(back.paths().paths(), ed.paths().paths());
    assert_eq!(path_ids(&back, "P1"), vec!["N1", "N2", "N3"]);
    assert!(!back.paths().get("P1").unwrap().visible);
}

#[test]
fn document_shape_uses_camel_case() {
    let mut ed = Editor::default();
    ed.load_image(100, 80).unwrap();
    ed.add_node(1.0, 2.0).unwrap();
    ed.add_node(3.0, 4.0).unwrap();
    ed.add_edge("N1", "N2").unwrap();
    ed.set_edge_weight("N1", "N2", "1/2").unwrap();
    ed.begin_path("N1").unwrap();
    ed.adjacent_extend("N2").unwrap();

    let doc: serde_json::Value = serde_json::from_str(&ed.export_json().unwrap()).unwrap();
    assert_eq!(doc["imageWidth"], 100);
    assert_eq!(doc["imageHeight"], 80);
    assert_eq!(doc["nodes"][0], json!({ "id": "N1", "label": "N1", "x": 1.0, "y": 2.0 }));
    assert_eq!(doc["edges"][0]["weight"], 0.5);
    assert_eq!(doc["paths"][0]["pathId"], "P1");
    assert_eq!(doc["paths"][0]["nodeIds"], json!(["N1", "N2"]));
    assert_eq!(doc["paths"][0]["visible"], true);
}

#[test]
fn whole_weights_export_as_integers() {
    let mut ed = Editor::default();
    ed.load_image(100, 80).unwrap();
    for x in [1.0, 2.0, 3.0] {
        ed.add_node(x, 1.0).unwrap();
    }
    ed.add_edge("N1", "N2").unwrap();
    ed.add_edge("N2", "N3").unwrap();
    ed.set_edge_weight("N1", "N2", 3.0).unwrap();

    let doc: serde_json::Value = serde_json::from_str(&ed.export_json().unwrap()).unwrap();
    assert_eq!(doc["edges"][0]["weight"], json!(3));
    assert_eq!(doc["edges"][1]["weight"], json!(1));
    assert!(doc["edges"][0]["weight"].is_u64());
}

#[test]
fn missing_dimensions_fail_validation() {
    for doc in [
        json!({ "imageHeight": 10 }),
        json!({ "imageWidth": 10 }),
        json!({ "imageWidth": 0, "imageHeight": 10 }),
        json!({ "imageWidth": 10.5, "imageHeight": 10 }),
    ] {
        let err = import(doc.clone()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValidationError, "{}", doc);
    }
    let err = Editor::default().import_json("not json").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValidationError);
}

#[test]
fn missing_collections_default_to_empty() {
    let ed = import(json!({ "imageWidth": 20, "imageHeight": 10 })).unwrap();
    assert_eq!(ed.graph().node_count(), 0);
    assert!(ed.paths().is_empty());
    assert_eq!(ed.expected_image(), Some(Dimensions::new(20, 10)));
}

#[test]
fn imported_weights_are_normalized() {
    let ed = import(json!({
        "imageWidth": 10, "imageHeight": 10,
        "nodes": [
            { "id": "N1", "x": 1, "y": 1 },
            { "id": "N2", "x": 2, "y": 2 },
            { "id": "N3", "x": 3, "y": 3 },
            { "id": "N4", "x": 4, "y": 4 }
        ],
        "edges": [
            { "a": "N1", "b": "N2", "weight": 2.7 },
            { "a": "N2", "b": "N3", "weight": "1/3" },
            { "a": "N3", "b": "N4", "weight": -5 },
            { "a": "N4", "b": "N1" }
        ]
    }))
    .unwrap();
    let w = |a: &str, b: &str| ed.graph().find_edge(a, b).unwrap().weight;
    assert_eq!(w("N1", "N2"), Weight::integer(3));
    assert_eq!(w("N2", "N3"), Weight::unit_fraction(3));
    assert_eq!(w("N3", "N4"), Weight::ONE);
    assert_eq!(w("N4", "N1"), Weight::ONE);
    assert_eq!(ed.graph().node("N3").unwrap().label, "N3");
}

#[test]
fn inconsistent_documents_are_rejected() {
    let base = |nodes: serde_json::Value, edges: serde_json::Value, paths: serde_json::Value| {
        json!({ "imageWidth": 10, "imageHeight": 10, "nodes": nodes, "edges": edges, "paths": paths })
    };
    let two = json!([{ "id": "N1", "x": 1, "y": 1 }, { "id": "N2", "x": 2, "y": 2 }]);
    let cases = [
        base(json!([{ "id": "N1", "x": 1, "y": 1 }, { "id": "N1", "x": 2, "y": 2 }]), json!([]), json!([])),
        base(two.clone(), json!([{ "a": "N1", "b": "N7" }]), json!([])),
        base(two.clone(), json!([{ "a": "N1", "b": "N1" }]), json!([])),
        base(two.clone(), json!([]), json!([{ "pathId": "P1", "nodeIds": ["N1", "N2"] }])),
        base(two.clone(), json!([]), json!([{ "pathId": "P1", "nodeIds": [] }])),
        base(two, json!([]), json!([{ "pathId": "P1", "nodeIds": ["N9"] }])),
    ];
    for doc in cases {
        let err = ProjectDocument::from_value(doc.clone()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValidationError, "{}", doc);
    }
}

#[test]
fn import_resets_session_history_and_counters() {
    let mut ed = square();
    ed.begin_path("N1").unwrap();
    ed.import_json(
        &json!({
            "imageWidth": 50, "imageHeight": 50,
            "nodes": [{ "id": "N7", "x": 1, "y": 1 }, { "id": "N12", "x": 2, "y": 2 }],
            "edges": [{ "a": "N7", "b": "N12" }],
            "paths": [{ "pathId": "P4", "label": "Ridge", "nodeIds": ["N7", "N12"] }]
        })
        .to_string(),
    )
    .unwrap();

    assert_eq!(ed.edit_state(), &EditState::Idle);
    assert!(!ed.history().can_undo());
    assert!(!ed.history().can_redo());
    assert!(ed.protection().is_node_protected("N12"));
    assert_eq!(ed.add_node(5.0, 5.0).unwrap().id, "N13");
    assert_eq!(ed.begin_path("N13").unwrap().path_id, "P5");
}

#[test]
fn largest_imported_ids_exhaust_the_counters() {
    let mut ed = import(json!({
        "imageWidth": 50, "imageHeight": 50,
        "nodes": [
            { "id": "N18446744073709551615", "x": 1, "y": 1 },
            { "id": "N2", "x": 2, "y": 2 }
        ],
        "edges": [{ "a": "N2", "b": "N18446744073709551615" }],
        "paths": [{ "pathId": "P18446744073709551615", "nodeIds": ["N2"] }]
    }))
    .unwrap();
    let before = ed.snapshot();

    let err = ed.add_node(5.0, 5.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    let err = ed.begin_path("N2").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert_eq!(ed.snapshot(), before);
    assert!(!ed.history().can_undo());

    // existing entities stay editable
    ed.remove_edge("N2", "N18446744073709551615").unwrap();
    ed.remove_node("N18446744073709551615").unwrap();
    assert_eq!(ed.graph().node_count(), 1);
}

#[test]
fn imported_paths_need_endpoint_selection() {
    let mut ed = import(json!({
        "imageWidth": 50, "imageHeight": 50,
        "nodes": [
            { "id": "N1", "x": 1, "y": 1 },
            { "id": "N2", "x": 2, "y": 2 },
            { "id": "N3", "x": 3, "y": 3 }
        ],
        "edges": [{ "a": "N1", "b": "N2" }, { "a": "N2", "b": "N3" }],
        "paths": [{ "pathId": "P1", "nodeIds": ["N1", "N2"] }]
    }))
    .unwrap();
    ed.activate_path("P1").unwrap();
    assert_eq!(ed.adjacent_extend("N3").unwrap_err().kind(), ErrorKind::InvalidState);
    ed.select_endpoint("N2").unwrap();
    ed.adjacent_extend("N3").unwrap();
    assert_eq!(ed.paths().get("P1").unwrap().node_ids, vec!["N1", "N2", "N3"]);
}

#[test]
fn export_needs_known_dimensions() {
    let ed = square();
    assert_eq!(ed.export_json().unwrap_err().kind(), ErrorKind::InvalidState);
}

#[test]
fn dimension_mismatch_is_a_warning() {
    let mut ed = import(json!({ "imageWidth": 800, "imageHeight": 600, "nodes": [{ "id": "N1", "x": 1, "y": 1 }] })).unwrap();
    let mismatch = ed.load_image(1024, 768).unwrap().unwrap();
    assert_eq!(mismatch.actual, Dimensions::new(1024, 768));
    assert_eq!(ed.graph().node_count(), 1);
    assert!(ed.load_image(800, 600).unwrap().is_none());
}
