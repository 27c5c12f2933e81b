//! Path editing on the Project API surface.

use tracegraph_core::Path;
use tracegraph_engine::{EditState, ExtendOutcome, PathEnd, PathStats};

use super::Project;
use crate::{Command, Error, Output, Result};

impl Project {
    /// Start a path at `start`.
    pub fn begin_path(&mut self, start: &str) -> Result<Path> {
        match self.executor.execute(Command::BeginPath {
            start: start.to_string(),
        })? {
            Output::Path(path) => Ok(path),
            _ => Err(Error::unexpected_output("BeginPath")),
        }
    }

    /// Make a path active, or leave editing if it already is.
    pub fn activate_path(&mut self, path_id: &str) -> Result<EditState> {
        match self.executor.execute(Command::ActivatePath {
            path_id: path_id.to_string(),
        })? {
            Output::State(state) => Ok(state),
            _ => Err(Error::unexpected_output("ActivatePath")),
        }
    }

    /// Choose the growth end of the active path.
    pub fn select_endpoint(&mut self, node: &str) -> Result<PathEnd> {
        match self.executor.execute(Command::SelectEndpoint {
            node: node.to_string(),
        })? {
            Output::Endpoint(end) => Ok(end),
            _ => Err(Error::unexpected_output("SelectEndpoint")),
        }
    }

    /// Grow by one edge or truncate.
    pub fn adjacent_extend(&mut self, target: &str) -> Result<ExtendOutcome> {
        match self.executor.execute(Command::AdjacentExtend {
            target: target.to_string(),
        })? {
            Output::Extended(outcome) => Ok(outcome),
            _ => Err(Error::unexpected_output("AdjacentExtend")),
        }
    }

    /// Grow along the cheapest route or truncate.
    pub fn shortest_path_extend(&mut self, target: &str) -> Result<ExtendOutcome> {
        match self.executor.execute(Command::ShortestPathExtend {
            target: target.to_string(),
        })? {
            Output::Extended(outcome) => Ok(outcome),
            _ => Err(Error::unexpected_output("ShortestPathExtend")),
        }
    }

    /// Stop editing.
    pub fn exit_editing(&mut self) -> Result<()> {
        match self.executor.execute(Command::ExitEditing)? {
            Output::State(_) => Ok(()),
            _ => Err(Error::unexpected_output("ExitEditing")),
        }
    }

    /// Delete a path.
    pub fn delete_path(&mut self, path_id: &str) -> Result<Path> {
        match self.executor.execute(Command::DeletePath {
            path_id: path_id.to_string(),
        })? {
            Output::Path(path) => Ok(path),
            _ => Err(Error::unexpected_output("DeletePath")),
        }
    }

    /// Relabel a path.
    pub fn rename_path(&mut self, path_id: &str, label: &str) -> Result<bool> {
        match self.executor.execute(Command::RenamePath {
            path_id: path_id.to_string(),
            label: label.to_string(),
        })? {
            Output::Bool(changed) => Ok(changed),
            _ => Err(Error::unexpected_output("RenamePath")),
        }
    }

    /// Flip a path's visibility; returns the new value.
    pub fn toggle_path_visibility(&mut self, path_id: &str) -> Result<bool> {
        match self.executor.execute(Command::TogglePathVisibility {
            path_id: path_id.to_string(),
        })? {
            Output::Bool(visible) => Ok(visible),
            _ => Err(Error::unexpected_output("TogglePathVisibility")),
        }
    }

    /// Figures for every path.
    pub fn list_paths(&mut self) -> Result<Vec<PathStats>> {
        match self.executor.execute(Command::ListPaths)? {
            Output::Paths(stats) => Ok(stats),
            _ => Err(Error::unexpected_output("ListPaths")),
        }
    }
}
