//! Whole-state undo/redo.
//!
//! Every mutating editor operation records the state it started from. Undo
//! swaps the current state with the newest recorded one and pushes the
//! current state onto the redo stack; redo does the reverse. Recording a new
//! snapshot drops the redo stack.

use std::collections::VecDeque;

use serde::Serialize;
use tracegraph_core::{Edge, Node, Path};

use crate::session::EditState;

/// A deep copy of everything undo restores.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Nodes in store order.
    pub nodes: Vec<Node>,
    /// Edges in store order.
    pub edges: Vec<Edge>,
    /// Paths in creation order.
    pub paths: Vec<Path>,
    /// Edit session state at capture time.
    pub edit_state: EditState,
}

/// Undo and redo stacks of [`Snapshot`]s.
#[derive(Debug, Clone, Default)]
pub struct SnapshotHistory {
    undo: VecDeque<Snapshot>,
    redo: Vec<Snapshot>,
    limit: Option<usize>,
}

impl SnapshotHistory {
    /// Unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// History keeping at most `limit` undo steps; `None` is unbounded.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Record the state preceding a mutation.
    pub fn record(&mut self, before: Snapshot) {
        self.undo.push_back(before);
        self.redo.clear();
        if let Some(limit) = self.limit {
            while self.undo.len() > limit {
                self.undo.pop_front();
            }
        }
    }

    /// Step back: returns the state to restore, stashing `current` for redo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.undo.pop_back()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Step forward: returns the state to restore, stashing `current` for undo.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo.pop()?;
        self.undo.push_back(current);
        Some(next)
    }

    /// Is there anything to undo?
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Is there anything to redo?
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// `(undo, redo)` stack depths.
    pub fn depths(&self) -> (usize, usize) {
        (self.undo.len(), self.redo.len())
    }

    /// Drop both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
