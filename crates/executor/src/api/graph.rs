//! Graph operations on the Project API surface.

use tracegraph_core::{Edge, Node, RawWeight, StepDirection, Weight};
use tracegraph_engine::Route;

use super::Project;
use crate::{Command, Error, Output, Result};

impl Project {
    // =========================================================================
    // Nodes
    // =========================================================================

    /// Place a node.
    pub fn add_node(&mut self, x: f64, y: f64) -> Result<Node> {
        match self.executor.execute(Command::AddNode { x, y })? {
            Output::Node(node) => Ok(node),
            _ => Err(Error::unexpected_output("AddNode")),
        }
    }

    /// Delete a node and its incident edges.
    pub fn remove_node(&mut self, id: &str) -> Result<Node> {
        match self.executor.execute(Command::RemoveNode { id: id.to_string() })? {
            Output::Node(node) => Ok(node),
            _ => Err(Error::unexpected_output("RemoveNode")),
        }
    }

    /// Move a node; returns the stored coordinates.
    pub fn move_node(&mut self, id: &str, x: f64, y: f64) -> Result<(f64, f64)> {
        match self.executor.execute(Command::MoveNode {
            id: id.to_string(),
            x,
            y,
        })? {
            Output::Moved { x, y } => Ok((x, y)),
            _ => Err(Error::unexpected_output("MoveNode")),
        }
    }

    /// Relabel a node.
    pub fn rename_node(&mut self, id: &str, label: &str) -> Result<bool> {
        match self.executor.execute(Command::RenameNode {
            id: id.to_string(),
            label: label.to_string(),
        })? {
            Output::Bool(changed) => Ok(changed),
            _ => Err(Error::unexpected_output("RenameNode")),
        }
    }

    // =========================================================================
    // Edges
    // =========================================================================

    /// Connect two nodes; returns whether an edge was created.
    pub fn add_edge(&mut self, a: &str, b: &str) -> Result<bool> {
        match self.executor.execute(Command::AddEdge {
            a: a.to_string(),
            b: b.to_string(),
        })? {
            Output::Bool(created) => Ok(created),
            _ => Err(Error::unexpected_output("AddEdge")),
        }
    }

    /// Disconnect two nodes.
    pub fn remove_edge(&mut self, a: &str, b: &str) -> Result<Edge> {
        match self.executor.execute(Command::RemoveEdge {
            a: a.to_string(),
            b: b.to_string(),
        })? {
            Output::Edge(edge) => Ok(edge),
            _ => Err(Error::unexpected_output("RemoveEdge")),
        }
    }

    /// Flip a connection; returns whether the nodes end up connected.
    pub fn toggle_edge(&mut self, a: &str, b: &str) -> Result<bool> {
        match self.executor.execute(Command::ToggleEdge {
            a: a.to_string(),
            b: b.to_string(),
        })? {
            Output::Bool(connected) => Ok(connected),
            _ => Err(Error::unexpected_output("ToggleEdge")),
        }
    }

    /// Set an edge weight from a number or a `"1/k"` string.
    pub fn set_edge_weight(&mut self, a: &str, b: &str, weight: impl Into<RawWeight>) -> Result<Weight> {
        match self.executor.execute(Command::SetEdgeWeight {
            a: a.to_string(),
            b: b.to_string(),
            weight: weight.into(),
        })? {
            Output::Weight(w) => Ok(w),
            _ => Err(Error::unexpected_output("SetEdgeWeight")),
        }
    }

    /// Move an edge weight one step along the scale.
    pub fn step_edge_weight(&mut self, a: &str, b: &str, direction: StepDirection) -> Result<Weight> {
        match self.executor.execute(Command::StepEdgeWeight {
            a: a.to_string(),
            b: b.to_string(),
            direction,
        })? {
            Output::Weight(w) => Ok(w),
            _ => Err(Error::unexpected_output("StepEdgeWeight")),
        }
    }

    /// Cheapest route between two nodes.
    pub fn shortest_route(&mut self, from: &str, to: &str) -> Result<Route> {
        match self.executor.execute(Command::ShortestRoute {
            from: from.to_string(),
            to: to.to_string(),
        })? {
            Output::Route(route) => Ok(route),
            _ => Err(Error::unexpected_output("ShortestRoute")),
        }
    }
}
