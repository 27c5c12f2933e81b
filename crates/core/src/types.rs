//! Overlay data model: nodes, weighted undirected edges, and paths.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::weight::Weight;

/// A labeled point in image space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique id (`N<n>` when generated).
    pub id: String,
    /// Display label; defaults to the id.
    pub label: String,
    /// Horizontal image coordinate.
    pub x: f64,
    /// Vertical image coordinate.
    pub y: f64,
}

impl Node {
    /// Create a node whose label is its id.
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            x,
            y,
        }
    }
}

/// Weighted undirected connection between two distinct nodes.
///
/// `a`/`b` keep the order the edge was created with, but every comparison
/// goes through [`EdgeKey`], which ignores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint.
    pub a: String,
    /// Second endpoint.
    pub b: String,
    /// Normalized weight (default 1).
    #[serde(default)]
    pub weight: Weight,
}

impl Edge {
    /// Create an edge with weight 1.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            weight: Weight::ONE,
        }
    }

    /// Order-independent key of this edge.
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(&self.a, &self.b)
    }

    /// Does this edge join `u` and `v` (in either order)?
    pub fn connects(&self, u: &str, v: &str) -> bool {
        (self.a == u && self.b == v) || (self.a == v && self.b == u)
    }

    /// Is `id` one of the endpoints?
    pub fn touches(&self, id: &str) -> bool {
        self.a == id || self.b == id
    }

    /// The endpoint opposite `id`, if `id` is an endpoint.
    pub fn opposite(&self, id: &str) -> Option<&str> {
        if self.a == id {
            Some(&self.b)
        } else if self.b == id {
            Some(&self.a)
        } else {
            None
        }
    }
}

/// Order-independent identity of an unordered node pair.
///
/// `EdgeKey::new(a, b) == EdgeKey::new(b, a)` for all `a`, `b`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey {
    lo: String,
    hi: String,
}

impl EdgeKey {
    /// Build the key for the pair `{a, b}`.
    pub fn new(a: &str, b: &str) -> Self {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        Self {
            lo: lo.to_string(),
            hi: hi.to_string(),
        }
    }

    /// Endpoints in canonical (sorted) order.
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.lo, &self.hi)
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.lo, self.hi)
    }
}

fn default_visible() -> bool {
    true
}

/// A named, ordered, edge-connected sequence of node ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Path {
    /// Unique id (`P<n>` when generated).
    pub path_id: String,
    /// Display label.
    pub label: String,
    /// Ordered node ids; consecutive ids are joined by graph edges.
    pub node_ids: Vec<String>,
    /// Whether the path is drawn.
    #[serde(default = "default_visible")]
    pub visible: bool,
}

impl Path {
    /// Number of nodes in the path.
    pub fn len(&self) -> usize {
        self.node_ids.len()
    }

    /// True when the path has no nodes.
    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    /// Number of edges the path walks.
    pub fn edge_count(&self) -> usize {
        self.node_ids.len().saturating_sub(1)
    }

    /// First node id.
    pub fn first(&self) -> Option<&str> {
        self.node_ids.first().map(String::as_str)
    }

    /// Last node id.
    pub fn last(&self) -> Option<&str> {
        self.node_ids.last().map(String::as_str)
    }

    /// Index of the first occurrence of `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.node_ids.iter().position(|n| n == id)
    }

    /// Does the path visit `id`?
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Keys of every consecutive pair, in walk order.
    pub fn edge_keys(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        self.node_ids.windows(2).map(|w| EdgeKey::new(&w[0], &w[1]))
    }

    /// Does the path walk the edge `{u, v}`?
    pub fn uses_edge(&self, key: &EdgeKey) -> bool {
        self.edge_keys().any(|k| &k == key)
    }
}

/// Pixel dimensions of the reference image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Create dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Is `(x, y)` inside `[0, width] × [0, height]`?
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=f64::from(self.width)).contains(&x) && (0.0..=f64::from(self.height)).contains(&y)
    }

    /// Clamp `(x, y)` into the image.
    pub fn clamp(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x.clamp(0.0, f64::from(self.width)),
            y.clamp(0.0, f64::from(self.height)),
        )
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
