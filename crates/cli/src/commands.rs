//! Shell line grammar.
//!
//! Each input line is split with shell quoting rules and parsed by clap, so
//! `help` and `<command> --help` come for free.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracegraph_core::{RawWeight, StepDirection};
use tracegraph_executor::Command;

#[derive(Parser, Debug)]
#[command(
    name = "tracegraph",
    no_binary_name = true,
    disable_version_flag = true,
    subcommand_required = true
)]
struct Line {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Place a node at X Y
    AddNode {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Delete a node and its edges
    RemoveNode { id: String },
    /// Move a node to X Y
    MoveNode {
        id: String,
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Relabel a node
    RenameNode { id: String, label: String },
    /// Connect two nodes
    AddEdge { a: String, b: String },
    /// Disconnect two nodes
    RemoveEdge { a: String, b: String },
    /// Connect or disconnect two nodes
    ToggleEdge { a: String, b: String },
    /// Set an edge weight, e.g. 3 or 1/4
    SetWeight { a: String, b: String, weight: String },
    /// Step an edge weight up or down the scale
    StepWeight {
        a: String,
        b: String,
        #[arg(value_parser = parse_direction)]
        direction: StepDirection,
    },

    /// Start a path at a node
    BeginPath { start: String },
    /// Edit a path (again to stop)
    Activate { path_id: String },
    /// Pick the end of the active path to grow from
    SelectEnd { node: String },
    /// Forget the selected end
    Deselect,
    /// Grow by one edge, or cut back to a node on the path
    Extend { target: String },
    /// Grow along the cheapest route, or cut back
    ExtendShortest { target: String },
    /// Stop editing
    Exit,
    /// Delete a path
    DeletePath { path_id: String },
    /// Relabel a path
    RenamePath { path_id: String, label: String },
    /// Make a path visible
    ShowPath { path_id: String },
    /// Hide a path
    HidePath { path_id: String },
    /// Flip a path's visibility
    TogglePath { path_id: String },

    /// Undo the last change
    Undo,
    /// Redo the last undone change
    Redo,
    /// Remove every node, edge and path
    Clear,
    /// Record the reference image size
    Image { width: u32, height: u32 },
    /// Open a project document
    Import { file: PathBuf },
    /// Save the project document (prints it without FILE)
    Export { file: Option<PathBuf> },

    /// Cheapest route between two nodes
    Route { from: String, to: String },
    /// List nodes
    Nodes,
    /// List edges
    Edges,
    /// List paths
    Paths,
    /// Show counts, session state and history depth
    Status,
    /// Run a command given as JSON, e.g. '{"command":"undo"}'
    Raw { json: String },
    /// Leave the shell
    Quit,
}

/// What one line asks the shell to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Hand a command to the executor.
    Run(Command),
    /// Read a document from disk and import it.
    Import(PathBuf),
    /// Export, to a file or to stdout.
    Export(Option<PathBuf>),
    /// Leave the shell.
    Quit,
}

/// Why a line produced no [`Step`].
#[derive(Debug, Clone, PartialEq)]
pub enum LineError {
    /// The user asked for help; print to stdout.
    Help(String),
    /// The line did not parse.
    Invalid(String),
}

/// Parse one input line. Blank lines and `#` comments give `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Step>, LineError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let words = shlex::split(trimmed)
        .ok_or_else(|| LineError::Invalid("unbalanced quotes".to_string()))?;
    let parsed = Line::try_parse_from(words).map_err(|e| match e.kind() {
        clap::error::ErrorKind::DisplayHelp
        | clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            LineError::Help(e.render().to_string())
        }
        _ => LineError::Invalid(e.render().to_string()),
    })?;
    Ok(Some(step_of(parsed.action)?))
}

fn step_of(action: Action) -> Result<Step, LineError> {
    let cmd = match action {
        Action::AddNode { x, y } => Command::AddNode { x, y },
        Action::RemoveNode { id } => Command::RemoveNode { id },
        Action::MoveNode { id, x, y } => Command::MoveNode { id, x, y },
        Action::RenameNode { id, label } => Command::RenameNode { id, label },
        Action::AddEdge { a, b } => Command::AddEdge { a, b },
        Action::RemoveEdge { a, b } => Command::RemoveEdge { a, b },
        Action::ToggleEdge { a, b } => Command::ToggleEdge { a, b },
        Action::SetWeight { a, b, weight } => Command::SetEdgeWeight {
            a,
            b,
            weight: RawWeight::Text(weight),
        },
        Action::StepWeight { a, b, direction } => Command::StepEdgeWeight { a, b, direction },
        Action::BeginPath { start } => Command::BeginPath { start },
        Action::Activate { path_id } => Command::ActivatePath { path_id },
        Action::SelectEnd { node } => Command::SelectEndpoint { node },
        Action::Deselect => Command::DeselectEndpoint,
        Action::Extend { target } => Command::AdjacentExtend { target },
        Action::ExtendShortest { target } => Command::ShortestPathExtend { target },
        Action::Exit => Command::ExitEditing,
        Action::DeletePath { path_id } => Command::DeletePath { path_id },
        Action::RenamePath { path_id, label } => Command::RenamePath { path_id, label },
        Action::ShowPath { path_id } => Command::SetPathVisible {
            path_id,
            visible: true,
        },
        Action::HidePath { path_id } => Command::SetPathVisible {
            path_id,
            visible: false,
        },
        Action::TogglePath { path_id } => Command::TogglePathVisibility { path_id },
        Action::Undo => Command::Undo,
        Action::Redo => Command::Redo,
        Action::Clear => Command::ClearProject,
        Action::Image { width, height } => Command::LoadImage { width, height },
        Action::Import { file } => return Ok(Step::Import(file)),
        Action::Export { file } => return Ok(Step::Export(file)),
        Action::Route { from, to } => Command::ShortestRoute { from, to },
        Action::Nodes => Command::ListNodes,
        Action::Edges => Command::ListEdges,
        Action::Paths => Command::ListPaths,
        Action::Status => Command::Status,
        Action::Raw { json } => serde_json::from_str(&json)
            .map_err(|e| LineError::Invalid(format!("raw command: {}", e)))?,
        Action::Quit => return Ok(Step::Quit),
    };
    Ok(Step::Run(cmd))
}

fn parse_direction(s: &str) -> Result<StepDirection, String> {
    match s.to_ascii_lowercase().as_str() {
        "up" | "+" => Ok(StepDirection::Up),
        "down" | "-" => Ok(StepDirection::Down),
        other => Err(format!("expected up or down, got '{}'", other)),
    }
}
