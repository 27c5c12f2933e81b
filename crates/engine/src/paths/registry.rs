//! Registry of named paths.
//!
//! A path is an ordered sequence of node ids. The registry only stores
//! them; keeping consecutive pairs joined by graph edges is the job of the
//! edit session and the import validator that write here.

use tracegraph_core::{EdgeKey, Path, TraceError, TraceResult};

use crate::graph::keys::IdAllocator;

/// Named ordered node-id sequences, in creation order.
#[derive(Debug, Clone)]
pub struct PathRegistry {
    paths: Vec<Path>,
    ids: IdAllocator,
    label_prefix: String,
}

impl Default for PathRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PathRegistry {
    /// Empty registry generating `P<n>` ids and `Path <n>` labels.
    pub fn new() -> Self {
        Self::with_prefixes("P", "Path")
    }

    /// Empty registry with custom id and label prefixes.
    pub fn with_prefixes(id_prefix: &str, label_prefix: &str) -> Self {
        Self {
            paths: Vec::new(),
            ids: IdAllocator::new(id_prefix),
            label_prefix: label_prefix.to_string(),
        }
    }

    /// All paths, in creation order.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Number of paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// True when there are no paths.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Look up a path.
    pub fn get(&self, path_id: &str) -> Option<&Path> {
        self.paths.iter().find(|p| p.path_id == path_id)
    }

    /// Look up a path, failing with `PathNotFound`.
    pub fn require(&self, path_id: &str) -> TraceResult<&Path> {
        self.get(path_id)
            .ok_or_else(|| TraceError::path_not_found(path_id))
    }

    pub(crate) fn get_mut(&mut self, path_id: &str) -> TraceResult<&mut Path> {
        self.paths
            .iter_mut()
            .find(|p| p.path_id == path_id)
            .ok_or_else(|| TraceError::path_not_found(path_id))
    }

    /// Start a one-node path at `start` and return a copy of it.
    ///
    /// The caller checks that `start` exists.
    pub fn create(&mut self, start: &str) -> TraceResult<Path> {
        let paths = &self.paths;
        let path_id = self.ids.allocate(|id| paths.iter().any(|p| p.path_id == id))?;
        let path = Path {
            label: format!("{} {}", self.label_prefix, self.paths.len() + 1),
            path_id,
            node_ids: vec![start.to_string()],
            visible: true,
        };
        self.paths.push(path.clone());
        tracing::debug!(target: "tracegraph::paths", path_id = %path.path_id, start = %start, "Path created");
        Ok(path)
    }

    /// Remove a path.
    pub fn delete(&mut self, path_id: &str) -> TraceResult<Path> {
        let pos = self
            .paths
            .iter()
            .position(|p| p.path_id == path_id)
            .ok_or_else(|| TraceError::path_not_found(path_id))?;
        let path = self.paths.remove(pos);
        tracing::debug!(target: "tracegraph::paths", path_id = %path_id, "Path deleted");
        Ok(path)
    }

    /// Set a path's label. A blank label reverts to the path id.
    ///
    /// Returns whether the label changed.
    pub fn rename(&mut self, path_id: &str, label: &str) -> TraceResult<bool> {
        let path = self.get_mut(path_id)?;
        let label = match label.trim() {
            "" => path.path_id.clone(),
            trimmed => trimmed.to_string(),
        };
        if path.label == label {
            return Ok(false);
        }
        path.label = label;
        Ok(true)
    }

    /// Show or hide a path. Returns whether visibility changed.
    pub fn set_visible(&mut self, path_id: &str, visible: bool) -> TraceResult<bool> {
        let path = self.get_mut(path_id)?;
        let changed = path.visible != visible;
        path.visible = visible;
        Ok(changed)
    }

    /// Flip visibility; returns the new value.
    pub fn toggle_visible(&mut self, path_id: &str) -> TraceResult<bool> {
        let path = self.get_mut(path_id)?;
        path.visible = !path.visible;
        Ok(path.visible)
    }

    /// Paths that visit `node_id`.
    pub fn paths_using_node<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a Path> + 'a {
        self.paths.iter().filter(move |p| p.contains(node_id))
    }

    /// Paths that walk the edge `key`.
    pub fn paths_using_edge<'a>(&'a self, key: &'a EdgeKey) -> impl Iterator<Item = &'a Path> + 'a {
        self.paths.iter().filter(move |p| p.uses_edge(key))
    }

    /// Replace every path (snapshot restore, import).
    pub fn replace(&mut self, paths: Vec<Path>) {
        self.paths = paths;
    }

    /// Resume id allocation above the largest `P<n>` currently stored.
    pub fn resume_ids(&mut self) {
        self.ids.resume_after(self.paths.iter().map(|p| p.path_id.as_str()));
    }

    /// Drop every path and restart ids at 1.
    pub fn clear(&mut self) {
        self.paths.clear();
        self.ids.reset();
    }
}
