//! Graph command handlers.

use tracegraph_core::{RawWeight, StepDirection};
use tracegraph_engine::Editor;

use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle AddNode command.
pub fn add_node(ed: &mut Editor, x: f64, y: f64) -> Result<Output> {
    let node = convert_result(ed.add_node(x, y))?;
    Ok(Output::Node(node))
}

/// Handle RemoveNode command.
pub fn remove_node(ed: &mut Editor, id: String) -> Result<Output> {
    let node = convert_result(ed.remove_node(&id))?;
    Ok(Output::Node(node))
}

/// Handle MoveNode command.
pub fn move_node(ed: &mut Editor, id: String, x: f64, y: f64) -> Result<Output> {
    let (x, y) = convert_result(ed.move_node(&id, x, y))?;
    Ok(Output::Moved { x, y })
}

/// Handle RenameNode command.
pub fn rename_node(ed: &mut Editor, id: String, label: String) -> Result<Output> {
    let changed = convert_result(ed.rename_node(&id, &label))?;
    Ok(Output::Bool(changed))
}

/// Handle AddEdge command. Reports whether an edge was created.
pub fn add_edge(ed: &mut Editor, a: String, b: String) -> Result<Output> {
    let created = convert_result(ed.add_edge(&a, &b))?;
    Ok(Output::Bool(created))
}

/// Handle RemoveEdge command.
pub fn remove_edge(ed: &mut Editor, a: String, b: String) -> Result<Output> {
    let edge = convert_result(ed.remove_edge(&a, &b))?;
    Ok(Output::Edge(edge))
}

/// Handle ToggleEdge command. Reports whether the nodes end up connected.
pub fn toggle_edge(ed: &mut Editor, a: String, b: String) -> Result<Output> {
    let connected = convert_result(ed.toggle_edge(&a, &b))?;
    Ok(Output::Bool(connected))
}

/// Handle SetEdgeWeight command.
pub fn set_edge_weight(ed: &mut Editor, a: String, b: String, weight: RawWeight) -> Result<Output> {
    let weight = convert_result(ed.set_edge_weight(&a, &b, weight))?;
    Ok(Output::Weight(weight))
}

/// Handle StepEdgeWeight command.
pub fn step_edge_weight(
    ed: &mut Editor,
    a: String,
    b: String,
    direction: StepDirection,
) -> Result<Output> {
    let weight = convert_result(ed.step_edge_weight(&a, &b, direction))?;
    Ok(Output::Weight(weight))
}

/// Handle ListNodes command.
pub fn list_nodes(ed: &Editor) -> Result<Output> {
    Ok(Output::Nodes(ed.graph().nodes().to_vec()))
}

/// Handle ListEdges command.
pub fn list_edges(ed: &Editor) -> Result<Output> {
    Ok(Output::Edges(ed.graph().edges().to_vec()))
}

/// Handle ShortestRoute command.
pub fn shortest_route(ed: &Editor, from: String, to: String) -> Result<Output> {
    let route = convert_result(ed.shortest_route(&from, &to))?;
    Ok(Output::Route(route))
}
