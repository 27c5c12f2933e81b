//! Path and edit-session command handlers.

use tracegraph_engine::Editor;

use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle BeginPath command.
pub fn begin_path(ed: &mut Editor, start: String) -> Result<Output> {
    let path = convert_result(ed.begin_path(&start))?;
    Ok(Output::Path(path))
}

/// Handle ActivatePath command.
pub fn activate_path(ed: &mut Editor, path_id: String) -> Result<Output> {
    let state = convert_result(ed.activate_path(&path_id))?;
    Ok(Output::State(state))
}

/// Handle SelectEndpoint command.
pub fn select_endpoint(ed: &mut Editor, node: String) -> Result<Output> {
    let end = convert_result(ed.select_endpoint(&node))?;
    Ok(Output::Endpoint(end))
}

/// Handle DeselectEndpoint command.
pub fn deselect_endpoint(ed: &mut Editor) -> Result<Output> {
    convert_result(ed.deselect_endpoint())?;
    Ok(Output::State(ed.edit_state().clone()))
}

/// Handle AdjacentExtend command.
pub fn adjacent_extend(ed: &mut Editor, target: String) -> Result<Output> {
    let outcome = convert_result(ed.adjacent_extend(&target))?;
    Ok(Output::Extended(outcome))
}

/// Handle ShortestPathExtend command.
pub fn shortest_path_extend(ed: &mut Editor, target: String) -> Result<Output> {
    let outcome = convert_result(ed.shortest_path_extend(&target))?;
    Ok(Output::Extended(outcome))
}

/// Handle ExitEditing command.
pub fn exit_editing(ed: &mut Editor) -> Result<Output> {
    ed.exit_editing();
    Ok(Output::State(ed.edit_state().clone()))
}

/// Handle DeletePath command.
pub fn delete_path(ed: &mut Editor, path_id: String) -> Result<Output> {
    let path = convert_result(ed.delete_path(&path_id))?;
    Ok(Output::Path(path))
}

/// Handle RenamePath command.
pub fn rename_path(ed: &mut Editor, path_id: String, label: String) -> Result<Output> {
    let changed = convert_result(ed.rename_path(&path_id, &label))?;
    Ok(Output::Bool(changed))
}

/// Handle SetPathVisible command.
pub fn set_path_visible(ed: &mut Editor, path_id: String, visible: bool) -> Result<Output> {
    let changed = convert_result(ed.set_path_visible(&path_id, visible))?;
    Ok(Output::Bool(changed))
}

/// Handle TogglePathVisibility command. Reports the new visibility.
pub fn toggle_path_visibility(ed: &mut Editor, path_id: String) -> Result<Output> {
    let visible = convert_result(ed.toggle_path_visibility(&path_id))?;
    Ok(Output::Bool(visible))
}

/// Handle ListPaths command.
pub fn list_paths(ed: &Editor) -> Result<Output> {
    Ok(Output::Paths(ed.all_path_stats()))
}
