//! Command dispatch.

use tracegraph_engine::Editor;

use crate::handlers::{graph, paths, project};
use crate::notify::{Level, Notice, Notifier, TracingNotifier};
use crate::{Command, Output, Result};

/// Runs [`Command`]s against one [`Editor`].
///
/// Failures are returned to the caller and also forwarded to the notifier
/// with their kind; dimension-mismatch warnings go to the notifier only.
pub struct Executor {
    editor: Editor,
    notifier: Box<dyn Notifier>,
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(Editor::default())
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("editor", &self.editor)
            .finish_non_exhaustive()
    }
}

impl Executor {
    /// Executor reporting through `tracing`.
    pub fn new(editor: Editor) -> Self {
        Self::with_notifier(editor, TracingNotifier)
    }

    /// Executor reporting through a custom sink.
    pub fn with_notifier(editor: Editor, notifier: impl Notifier + 'static) -> Self {
        Self {
            editor,
            notifier: Box::new(notifier),
        }
    }

    /// Read access to the editor.
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Execute a command.
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        let name = cmd.name();
        let result = dispatch(&mut self.editor, cmd);
        match &result {
            Ok(output) => {
                if let Some(message) = warning_of(output) {
                    self.notifier.notify(Notice {
                        level: Level::Warning,
                        kind: None,
                        command: name,
                        message,
                    });
                }
            }
            Err(e) => {
                tracing::debug!(target: "tracegraph::executor", command = name, error = %e, "Command failed");
                self.notifier.notify(Notice {
                    level: Level::Error,
                    kind: Some(e.kind()),
                    command: name,
                    message: e.to_string(),
                });
            }
        }
        result
    }
}

fn warning_of(output: &Output) -> Option<String> {
    match output {
        Output::ImageLoaded(Some(m)) => Some(format!("Warning: {}.", m)),
        Output::Imported(report) => report.mismatch.map(|m| format!("Warning: {}.", m)),
        _ => None,
    }
}

fn dispatch(ed: &mut Editor, cmd: Command) -> Result<Output> {
    match cmd {
        // Graph
        Command::AddNode { x, y } => graph::add_node(ed, x, y),
        Command::RemoveNode { id } => graph::remove_node(ed, id),
        Command::MoveNode { id, x, y } => graph::move_node(ed, id, x, y),
        Command::RenameNode { id, label } => graph::rename_node(ed, id, label),
        Command::AddEdge { a, b } => graph::add_edge(ed, a, b),
        Command::RemoveEdge { a, b } => graph::remove_edge(ed, a, b),
        Command::ToggleEdge { a, b } => graph::toggle_edge(ed, a, b),
        Command::SetEdgeWeight { a, b, weight } => graph::set_edge_weight(ed, a, b, weight),
        Command::StepEdgeWeight { a, b, direction } => {
            graph::step_edge_weight(ed, a, b, direction)
        }

        // Paths
        Command::BeginPath { start } => paths::begin_path(ed, start),
        Command::ActivatePath { path_id } => paths::activate_path(ed, path_id),
        Command::SelectEndpoint { node } => paths::select_endpoint(ed, node),
        Command::DeselectEndpoint => paths::deselect_endpoint(ed),
        Command::AdjacentExtend { target } => paths::adjacent_extend(ed, target),
        Command::ShortestPathExtend { target } => paths::shortest_path_extend(ed, target),
        Command::ExitEditing => paths::exit_editing(ed),
        Command::DeletePath { path_id } => paths::delete_path(ed, path_id),
        Command::RenamePath { path_id, label } => paths::rename_path(ed, path_id, label),
        Command::SetPathVisible { path_id, visible } => {
            paths::set_path_visible(ed, path_id, visible)
        }
        Command::TogglePathVisibility { path_id } => paths::toggle_path_visibility(ed, path_id),

        // History and project
        Command::Undo => project::undo(ed),
        Command::Redo => project::redo(ed),
        Command::ClearProject => project::clear_project(ed),
        Command::LoadImage { width, height } => project::load_image(ed, width, height),
        Command::ImportJson { json } => project::import_json(ed, json),
        Command::ExportJson => project::export_json(ed),

        // Queries
        Command::ShortestRoute { from, to } => graph::shortest_route(ed, from, to),
        Command::ListNodes => graph::list_nodes(ed),
        Command::ListEdges => graph::list_edges(ed),
        Command::ListPaths => paths::list_paths(ed),
        Command::Status => project::status(ed),
    }
}
