//! History, lifecycle and status command handlers.

use tracegraph_engine::Editor;

use crate::convert::convert_result;
use crate::output::Status;
use crate::{Output, Result};

/// Handle Undo command.
pub fn undo(ed: &mut Editor) -> Result<Output> {
    Ok(Output::Stepped(ed.undo()))
}

/// Handle Redo command.
pub fn redo(ed: &mut Editor) -> Result<Output> {
    Ok(Output::Stepped(ed.redo()))
}

/// Handle ClearProject command.
pub fn clear_project(ed: &mut Editor) -> Result<Output> {
    convert_result(ed.clear_project())?;
    Ok(Output::Unit)
}

/// Handle LoadImage command.
pub fn load_image(ed: &mut Editor, width: u32, height: u32) -> Result<Output> {
    let mismatch = convert_result(ed.load_image(width, height))?;
    Ok(Output::ImageLoaded(mismatch))
}

/// Handle ImportJson command.
pub fn import_json(ed: &mut Editor, json: String) -> Result<Output> {
    let report = convert_result(ed.import_json(&json))?;
    Ok(Output::Imported(report))
}

/// Handle ExportJson command.
pub fn export_json(ed: &Editor) -> Result<Output> {
    let json = convert_result(ed.export_json())?;
    Ok(Output::Json(json))
}

/// Handle Status command.
pub fn status(ed: &Editor) -> Result<Output> {
    let (undo_depth, redo_depth) = ed.history().depths();
    Ok(Output::Status(Status {
        nodes: ed.graph().node_count(),
        edges: ed.graph().edge_count(),
        paths: ed.paths().len(),
        state: ed.edit_state().clone(),
        undo_depth,
        redo_depth,
        image: ed.image(),
        expected_image: ed.expected_image(),
    }))
}
