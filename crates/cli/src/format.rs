//! Plain-text rendering of command outputs.

use tracegraph_core::{Edge, Node};
use tracegraph_engine::{EditState, ExtendOutcome, PathEnd, PathStats};
use tracegraph_executor::{Output, Status};

/// Render an output for the terminal.
pub fn render(output: &Output) -> String {
    match output {
        Output::Unit => "OK".to_string(),
        Output::Bool(b) => format!("({})", b),
        Output::Node(n) => node_line(n),
        Output::Edge(e) => edge_line(e),
        Output::Weight(w) => format!("weight {}", w),
        Output::Moved { x, y } => format!("({}, {})", x, y),
        Output::Path(p) => format!("{} '{}': {}", p.path_id, p.label, p.node_ids.join(" -> ")),
        Output::Endpoint(end) => format!("growing from the {} end", end_name(*end)),
        Output::State(s) => state_line(s),
        Output::Extended(ExtendOutcome::Appended { added }) => format!("+ {}", added.join(" ")),
        Output::Extended(ExtendOutcome::Truncated { removed }) => format!("- {}", removed.join(" ")),
        Output::Extended(ExtendOutcome::Unchanged) => "(unchanged)".to_string(),
        Output::Stepped(true) => "OK".to_string(),
        Output::Stepped(false) => "(nothing to do)".to_string(),
        Output::ImageLoaded(_) => "OK".to_string(),
        Output::Imported(r) => format!(
            "imported {} nodes, {} edges, {} paths ({})",
            r.nodes, r.edges, r.paths, r.dimensions
        ),
        Output::Json(json) => json.clone(),
        Output::Route(r) => format!("{} (cost {})", r.node_ids.join(" -> "), r.cost),
        Output::Nodes(nodes) => listing(nodes.iter().map(node_line)),
        Output::Edges(edges) => listing(edges.iter().map(edge_line)),
        Output::Paths(paths) => listing(paths.iter().map(path_line)),
        Output::Status(s) => status_block(s),
    }
}

/// Short prompt suffix for the session state.
pub fn prompt_for(state: &EditState) -> String {
    match state {
        EditState::Idle => "tracegraph> ".to_string(),
        EditState::AwaitingEndpointSelection { path_id } => format!("tracegraph[{}]> ", path_id),
        EditState::EndpointSelected { path_id, end } => {
            format!("tracegraph[{}:{}]> ", path_id, end_name(*end))
        }
    }
}

fn end_name(end: PathEnd) -> &'static str {
    match end {
        PathEnd::First => "first",
        PathEnd::Last => "last",
    }
}

fn node_line(n: &Node) -> String {
    if n.label == n.id {
        format!("{} ({}, {})", n.id, n.x, n.y)
    } else {
        format!("{} '{}' ({}, {})", n.id, n.label, n.x, n.y)
    }
}

fn edge_line(e: &Edge) -> String {
    format!("{} - {} [{}]", e.a, e.b, e.weight)
}

fn path_line(p: &PathStats) -> String {
    let hidden = if p.visible { "" } else { " hidden" };
    format!(
        "{} '{}' nodes={} edges={} weight={}{}",
        p.path_id, p.label, p.nodes, p.edges, p.total_weight, hidden
    )
}

fn state_line(s: &EditState) -> String {
    match s {
        EditState::Idle => "idle".to_string(),
        EditState::AwaitingEndpointSelection { path_id } => {
            format!("editing {}, select an end", path_id)
        }
        EditState::EndpointSelected { path_id, end } => {
            format!("editing {} from the {} end", path_id, end_name(*end))
        }
    }
}

fn listing(lines: impl Iterator<Item = String>) -> String {
    let lines: Vec<String> = lines.collect();
    if lines.is_empty() {
        "(empty)".to_string()
    } else {
        lines.join("\n")
    }
}

fn status_block(s: &Status) -> String {
    let dims = |d: Option<tracegraph_core::Dimensions>| match d {
        Some(d) => d.to_string(),
        None => "-".to_string(),
    };
    format!(
        "nodes: {}\nedges: {}\npaths: {}\nstate: {}\nundo: {}  redo: {}\nimage: {}  document: {}",
        s.nodes,
        s.edges,
        s.paths,
        state_line(&s.state),
        s.undo_depth,
        s.redo_depth,
        dims(s.image),
        dims(s.expected_image)
    )
}
