//! Interactive path-edit state machine.
//!
//! ```text
//!            begin(S)                      select_endpoint(T)
//!   Idle ───────────────► EndpointSelected ◄────────────────── AwaitingEndpointSelection
//!    ▲                         │   ▲  extend / truncate              ▲        │
//!    │          exit           │   └─────────┘                       │        │
//!    └─────────────────────────┴───────── deselect_endpoint ─────────┘        │
//!    └────────────────────────────────────── exit ────────────────────────────┘
//! ```
//!
//! The growth end is tracked as [`PathEnd`], never as a raw array index, so
//! truncating toward the front keeps the same logical end active.

use serde::{Deserialize, Serialize};
use tracegraph_core::{Path, TraceError, TraceResult};

use crate::graph::GraphStore;

/// Which end of a path is eligible for growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathEnd {
    /// `node_ids[0]`.
    First,
    /// `node_ids[len - 1]`.
    Last,
}

impl PathEnd {
    /// Node id at this end of `path`.
    pub fn node_of<'p>(&self, path: &'p Path) -> Option<&'p str> {
        match self {
            PathEnd::First => path.first(),
            PathEnd::Last => path.last(),
        }
    }

    /// Array index of this end in `path`.
    pub fn index_in(&self, path: &Path) -> usize {
        match self {
            PathEnd::First => 0,
            PathEnd::Last => path.len().saturating_sub(1),
        }
    }
}

/// State of the edit session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum EditState {
    /// No path is being edited.
    #[default]
    Idle,
    /// A path is active but no growth end is chosen.
    #[serde(rename_all = "camelCase")]
    AwaitingEndpointSelection {
        /// Active path.
        path_id: String,
    },
    /// Ready to extend or truncate from `end`.
    #[serde(rename_all = "camelCase")]
    EndpointSelected {
        /// Active path.
        path_id: String,
        /// Growth end.
        end: PathEnd,
    },
}

impl EditState {
    /// The path being edited, if any.
    pub fn active_path_id(&self) -> Option<&str> {
        match self {
            EditState::Idle => None,
            EditState::AwaitingEndpointSelection { path_id }
            | EditState::EndpointSelected { path_id, .. } => Some(path_id),
        }
    }

    /// The selected growth end, if any.
    pub fn active_end(&self) -> Option<PathEnd> {
        match self {
            EditState::EndpointSelected { end, .. } => Some(*end),
            _ => None,
        }
    }
}

/// What an extend call did to the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtendOutcome {
    /// Nodes were added at the active end, listed in walk order away from it.
    Appended {
        /// New node ids.
        added: Vec<String>,
    },
    /// The path was cut back to an existing node, which is now the active end.
    Truncated {
        /// Dropped node ids.
        removed: Vec<String>,
    },
    /// The target already was the active end.
    Unchanged,
}

impl ExtendOutcome {
    /// Did the path change?
    pub fn is_change(&self) -> bool {
        !matches!(self, ExtendOutcome::Unchanged)
    }
}

/// Session bookkeeping: which path is active and which end grows.
#[derive(Debug, Clone, Default)]
pub struct PathEditSession {
    state: EditState,
}

impl PathEditSession {
    /// A session in `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// True in `Idle`.
    pub fn is_idle(&self) -> bool {
        self.state == EditState::Idle
    }

    /// The path being edited, if any.
    pub fn active_path_id(&self) -> Option<&str> {
        self.state.active_path_id()
    }

    /// Overwrite the state (snapshot restore).
    pub(crate) fn set_state(&mut self, state: EditState) {
        self.state = state;
    }

    /// Idle → EndpointSelected on a freshly created one-node path.
    ///
    /// Both ends coincide, so growth starts at the tail and the path reads
    /// from its start node.
    pub fn begin(&mut self, path_id: &str) -> TraceResult<()> {
        if !self.is_idle() {
            return Err(TraceError::invalid_state(
                "Exit the current path before starting a new one.",
            ));
        }
        self.state = EditState::EndpointSelected {
            path_id: path_id.to_string(),
            end: PathEnd::Last,
        };
        Ok(())
    }

    /// Make `path_id` active with no end selected, from any state.
    pub fn activate(&mut self, path_id: &str) {
        self.state = EditState::AwaitingEndpointSelection {
            path_id: path_id.to_string(),
        };
    }

    /// Choose the growth end by clicking one of the path's endpoints.
    ///
    /// Allowed while awaiting a selection and, to switch ends, while an end
    /// is already selected. A click on any other node fails with
    /// `InvalidEndpointSelection` and leaves the state alone.
    pub fn select_endpoint(&mut self, path: &Path, node_id: &str) -> TraceResult<PathEnd> {
        match self.active_path_id() {
            Some(active) if active == path.path_id => {}
            Some(_) => {
                return Err(TraceError::invalid_state(
                    "Endpoint belongs to a path that is not being edited.",
                ))
            }
            None => return Err(TraceError::invalid_state("No path is being edited.")),
        }
        let end = if path.last() == Some(node_id) {
            PathEnd::Last
        } else if path.first() == Some(node_id) {
            PathEnd::First
        } else {
            return Err(TraceError::InvalidEndpointSelection {
                node: node_id.to_string(),
            });
        };
        self.state = EditState::EndpointSelected {
            path_id: path.path_id.clone(),
            end,
        };
        Ok(end)
    }

    /// EndpointSelected → AwaitingEndpointSelection.
    pub fn deselect_endpoint(&mut self) -> TraceResult<()> {
        match &self.state {
            EditState::Idle => Err(TraceError::invalid_state("No path is being edited.")),
            EditState::AwaitingEndpointSelection { .. } => Ok(()),
            EditState::EndpointSelected { path_id, .. } => {
                self.state = EditState::AwaitingEndpointSelection {
                    path_id: path_id.clone(),
                };
                Ok(())
            }
        }
    }

    /// Back to `Idle` from any state. The path itself is untouched.
    pub fn exit(&mut self) {
        self.state = EditState::Idle;
    }

    /// Active path and growth end, or `InvalidState`.
    pub fn require_endpoint(&self) -> TraceResult<(&str, PathEnd)> {
        match &self.state {
            EditState::EndpointSelected { path_id, end } => Ok((path_id, *end)),
            EditState::AwaitingEndpointSelection { .. } => Err(TraceError::invalid_state(
                "Select an active endpoint before continuing.",
            )),
            EditState::Idle => Err(TraceError::invalid_state("No path is being edited.")),
        }
    }
}

// =============================================================================
// Path growth
// =============================================================================

/// Index of `target` nearest to the active end, if the path visits it.
fn nearest_occurrence(path: &Path, end: PathEnd, target: &str) -> Option<usize> {
    match end {
        PathEnd::First => path.node_ids.iter().position(|n| n == target),
        PathEnd::Last => path.node_ids.iter().rposition(|n| n == target),
    }
}

/// Cut the path back so the node at `pos` becomes the active end.
fn truncate_to(path: &mut Path, end: PathEnd, pos: usize) -> ExtendOutcome {
    let removed: Vec<String> = match end {
        PathEnd::First => path.node_ids.drain(..pos).collect(),
        PathEnd::Last => path.node_ids.drain(pos + 1..).collect(),
    };
    if removed.is_empty() {
        ExtendOutcome::Unchanged
    } else {
        ExtendOutcome::Truncated { removed }
    }
}

/// Attach `segment` (walk order away from the active end) at `end`.
fn splice(path: &mut Path, end: PathEnd, segment: Vec<String>) -> ExtendOutcome {
    match end {
        PathEnd::First => {
            let mut ids: Vec<String> = segment.iter().rev().cloned().collect();
            ids.append(&mut path.node_ids);
            path.node_ids = ids;
        }
        PathEnd::Last => path.node_ids.extend(segment.iter().cloned()),
    }
    ExtendOutcome::Appended { added: segment }
}

fn prepare<'p>(graph: &GraphStore, path: &'p Path, end: PathEnd, target: &str) -> TraceResult<&'p str> {
    if !graph.contains_node(target) {
        return Err(TraceError::node_not_found(target));
    }
    end.node_of(path)
        .ok_or_else(|| TraceError::invalid_state(format!("Path {} is empty.", path.path_id)))
}

/// Grow by one edge, or truncate if `target` is already on the path.
///
/// Fails with `InvalidAppend` when the active end and `target` share no
/// edge; the path is unchanged on failure.
pub fn adjacent_extend(
    graph: &GraphStore,
    path: &mut Path,
    end: PathEnd,
    target: &str,
) -> TraceResult<ExtendOutcome> {
    let from = prepare(graph, path, end, target)?.to_string();
    if let Some(pos) = nearest_occurrence(path, end, target) {
        return Ok(truncate_to(path, end, pos));
    }
    if !graph.has_edge(&from, target) {
        return Err(TraceError::InvalidAppend {
            from,
            to: target.to_string(),
        });
    }
    Ok(splice(path, end, vec![target.to_string()]))
}

/// Grow along the cheapest route to `target`, or truncate if it is already
/// on the path.
///
/// The route is searched over every edge of the graph. Fails with `NoRoute`
/// when `target` is unreachable; the path is unchanged on failure.
pub fn shortest_path_extend(
    graph: &GraphStore,
    path: &mut Path,
    end: PathEnd,
    target: &str,
) -> TraceResult<ExtendOutcome> {
    let from = prepare(graph, path, end, target)?.to_string();
    if let Some(pos) = nearest_occurrence(path, end, target) {
        return Ok(truncate_to(path, end, pos));
    }
    let route = graph
        .shortest_path(&from, target)
        .ok_or_else(|| TraceError::NoRoute {
            from: from.clone(),
            to: target.to_string(),
        })?;
    let segment: Vec<String> = route.node_ids.into_iter().skip(1).collect();
    Ok(splice(path, end, segment))
}
