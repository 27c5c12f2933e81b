//! Commands accepted by the executor.

use serde::{Deserialize, Serialize};
use tracegraph_core::{RawWeight, StepDirection};

/// Every editor operation, as data.
///
/// Serialized with a `"command"` tag so scripts can drive the editor as
/// JSON lines:
///
/// ```json
/// {"command": "add_node", "x": 10.0, "y": 20.0}
/// {"command": "set_edge_weight", "a": "N1", "b": "N2", "weight": "1/3"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    // =========================================================================
    // Graph
    // =========================================================================
    /// Place a node.
    AddNode { x: f64, y: f64 },
    /// Delete a node and its edges.
    RemoveNode { id: String },
    /// Move a node.
    MoveNode { id: String, x: f64, y: f64 },
    /// Relabel a node.
    RenameNode { id: String, label: String },
    /// Connect two nodes.
    AddEdge { a: String, b: String },
    /// Disconnect two nodes.
    RemoveEdge { a: String, b: String },
    /// Connect or disconnect two nodes.
    ToggleEdge { a: String, b: String },
    /// Set an edge weight.
    SetEdgeWeight { a: String, b: String, weight: RawWeight },
    /// Move an edge weight one step.
    StepEdgeWeight { a: String, b: String, direction: StepDirection },

    // =========================================================================
    // Paths
    // =========================================================================
    /// Start a path.
    BeginPath { start: String },
    /// Make a path active (or leave editing if it already is).
    ActivatePath { path_id: String },
    /// Choose the growth end.
    SelectEndpoint { node: String },
    /// Drop the growth end.
    DeselectEndpoint,
    /// Grow by one edge or truncate.
    AdjacentExtend { target: String },
    /// Grow along the cheapest route or truncate.
    ShortestPathExtend { target: String },
    /// Stop editing.
    ExitEditing,
    /// Delete a path.
    DeletePath { path_id: String },
    /// Relabel a path.
    RenamePath { path_id: String, label: String },
    /// Show or hide a path.
    SetPathVisible { path_id: String, visible: bool },
    /// Flip a path's visibility.
    TogglePathVisibility { path_id: String },

    // =========================================================================
    // History and project
    // =========================================================================
    /// Step back.
    Undo,
    /// Step forward.
    Redo,
    /// Empty the project.
    ClearProject,
    /// Record the reference image size.
    LoadImage { width: u32, height: u32 },
    /// Replace the project with a JSON document.
    ImportJson { json: String },
    /// Render the project as JSON.
    ExportJson,

    // =========================================================================
    // Queries
    // =========================================================================
    /// Cheapest route between two nodes.
    ShortestRoute { from: String, to: String },
    /// All nodes.
    ListNodes,
    /// All edges.
    ListEdges,
    /// All paths with their figures.
    ListPaths,
    /// Counts, session state and history depth.
    Status,
}

impl Command {
    /// Stable command name, as used in the serialized tag.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddNode { .. } => "add_node",
            Command::RemoveNode { .. } => "remove_node",
            Command::MoveNode { .. } => "move_node",
            Command::RenameNode { .. } => "rename_node",
            Command::AddEdge { .. } => "add_edge",
            Command::RemoveEdge { .. } => "remove_edge",
            Command::ToggleEdge { .. } => "toggle_edge",
            Command::SetEdgeWeight { .. } => "set_edge_weight",
            Command::StepEdgeWeight { .. } => "step_edge_weight",
            Command::BeginPath { .. } => "begin_path",
            Command::ActivatePath { .. } => "activate_path",
            Command::SelectEndpoint { .. } => "select_endpoint",
            Command::DeselectEndpoint => "deselect_endpoint",
            Command::AdjacentExtend { .. } => "adjacent_extend",
            Command::ShortestPathExtend { .. } => "shortest_path_extend",
            Command::ExitEditing => "exit_editing",
            Command::DeletePath { .. } => "delete_path",
            Command::RenamePath { .. } => "rename_path",
            Command::SetPathVisible { .. } => "set_path_visible",
            Command::TogglePathVisibility { .. } => "toggle_path_visibility",
            Command::Undo => "undo",
            Command::Redo => "redo",
            Command::ClearProject => "clear_project",
            Command::LoadImage { .. } => "load_image",
            Command::ImportJson { .. } => "import_json",
            Command::ExportJson => "export_json",
            Command::ShortestRoute { .. } => "shortest_route",
            Command::ListNodes => "list_nodes",
            Command::ListEdges => "list_edges",
            Command::ListPaths => "list_paths",
            Command::Status => "status",
        }
    }
}
