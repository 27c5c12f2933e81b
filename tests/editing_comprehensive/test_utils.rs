//! Shared fixtures for the editing suite.

use tracegraph::Editor;

/// Editor with nodes N1..Nn placed on a horizontal line and no edges.
pub fn nodes(n: usize) -> Editor {
    let mut ed = Editor::default();
    for i in 0..n {
        ed.add_node(10.0 * i as f64, 0.0).unwrap();
    }
    ed
}

/// Connect `a`-`b` and set its weight.
pub fn connect(ed: &mut Editor, a: &str, b: &str, weight: &str) {
    ed.add_edge(a, b).unwrap();
    ed.set_edge_weight(a, b, weight).unwrap();
}

/// Editor holding the A,B,C,D square used by the routing checks:
/// N1-N2 = 1, N2-N3 = 1, N3-N4 = 5, N1-N4 = 3.
pub fn square() -> Editor {
    let mut ed = nodes(4);
    connect(&mut ed, "N1", "N2", "1");
    connect(&mut ed, "N2", "N3", "1");
    connect(&mut ed, "N3", "N4", "5");
    connect(&mut ed, "N1", "N4", "3");
    ed
}

/// Node ids of a path.
pub fn path_ids(ed: &Editor, path_id: &str) -> Vec<String> {
    ed.paths()
        .get(path_id)
        .map(|p| p.node_ids.clone())
        .unwrap_or_default()
}
