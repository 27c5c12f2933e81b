//! History, image and file operations on the Project API surface.

use std::path::Path as FsPath;

use tracegraph_engine::{DimensionMismatch, ImportReport};

use super::Project;
use crate::{Command, Error, Output, Result};

impl Project {
    /// Step back one mutation; false when there is nothing to undo.
    pub fn undo(&mut self) -> Result<bool> {
        match self.executor.execute(Command::Undo)? {
            Output::Stepped(stepped) => Ok(stepped),
            _ => Err(Error::unexpected_output("Undo")),
        }
    }

    /// Re-apply an undone mutation; false when there is nothing to redo.
    pub fn redo(&mut self) -> Result<bool> {
        match self.executor.execute(Command::Redo)? {
            Output::Stepped(stepped) => Ok(stepped),
            _ => Err(Error::unexpected_output("Redo")),
        }
    }

    /// Empty the project, keeping the image.
    pub fn clear(&mut self) -> Result<()> {
        match self.executor.execute(Command::ClearProject)? {
            Output::Unit => Ok(()),
            _ => Err(Error::unexpected_output("ClearProject")),
        }
    }

    /// Record the reference image size.
    pub fn load_image(&mut self, width: u32, height: u32) -> Result<Option<DimensionMismatch>> {
        match self.executor.execute(Command::LoadImage { width, height })? {
            Output::ImageLoaded(mismatch) => Ok(mismatch),
            _ => Err(Error::unexpected_output("LoadImage")),
        }
    }

    /// Replace the project with a JSON document.
    pub fn import_json(&mut self, json: &str) -> Result<ImportReport> {
        match self.executor.execute(Command::ImportJson {
            json: json.to_string(),
        })? {
            Output::Imported(report) => Ok(report),
            _ => Err(Error::unexpected_output("ImportJson")),
        }
    }

    /// The project as pretty-printed JSON.
    pub fn export_json(&mut self) -> Result<String> {
        match self.executor.execute(Command::ExportJson)? {
            Output::Json(json) => Ok(json),
            _ => Err(Error::unexpected_output("ExportJson")),
        }
    }

    /// Import a project file.
    pub fn load_file(&mut self, path: impl AsRef<FsPath>) -> Result<ImportReport> {
        let text = std::fs::read_to_string(path.as_ref())?;
        self.import_json(&text)
    }

    /// Export the project to a file.
    pub fn save_file(&mut self, path: impl AsRef<FsPath>) -> Result<()> {
        let json = self.export_json()?;
        std::fs::write(path.as_ref(), json)?;
        tracing::info!(target: "tracegraph::executor", path = %path.as_ref().display(), "Project saved");
        Ok(())
    }
}
