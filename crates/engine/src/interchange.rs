//! JSON interchange document.
//!
//! ```json
//! {
//!   "imageWidth": 1920,
//!   "imageHeight": 1080,
//!   "nodes": [{ "id": "N1", "label": "N1", "x": 10, "y": 20 }],
//!   "edges": [{ "a": "N1", "b": "N2", "weight": 1 }],
//!   "paths": [{ "pathId": "P1", "label": "Path 1", "nodeIds": ["N1", "N2"], "visible": true }]
//! }
//! ```
//!
//! Incoming documents are parsed into loosely typed raw records first and
//! then checked against every graph and path invariant, so a document that
//! deserializes is always safe to load.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracegraph_core::{Dimensions, Edge, EdgeKey, Node, Path, RawWeight, TraceError, TraceResult, Weight};

use crate::graph::keys::validate_id;

/// A validated project document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawDocument")]
pub struct ProjectDocument {
    /// Reference image width in pixels.
    pub image_width: u32,
    /// Reference image height in pixels.
    pub image_height: u32,
    /// Nodes in store order.
    pub nodes: Vec<Node>,
    /// Edges with normalized weights.
    pub edges: Vec<Edge>,
    /// Paths in creation order.
    pub paths: Vec<Path>,
}

impl ProjectDocument {
    /// Parse and validate JSON text.
    pub fn from_json(text: &str) -> TraceResult<Self> {
        serde_json::from_str(text).map_err(|e| TraceError::validation(e.to_string()))
    }

    /// Validate an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> TraceResult<Self> {
        serde_json::from_value(value).map_err(|e| TraceError::validation(e.to_string()))
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> TraceResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Declared image dimensions.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.image_width, self.image_height)
    }
}

// =============================================================================
// Raw records
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument {
    image_width: Option<f64>,
    image_height: Option<f64>,
    #[serde(default)]
    nodes: Option<Vec<RawNode>>,
    #[serde(default)]
    edges: Option<Vec<RawEdge>>,
    #[serde(default)]
    paths: Option<Vec<RawPath>>,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    id: String,
    label: Option<String>,
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize)]
struct RawEdge {
    a: String,
    b: String,
    weight: Option<RawWeight>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPath {
    path_id: String,
    label: Option<String>,
    node_ids: Vec<String>,
    visible: Option<bool>,
}

fn dimension(name: &str, value: Option<f64>) -> TraceResult<u32> {
    let value = value.ok_or_else(|| TraceError::validation(format!("missing {}", name)))?;
    if value.fract() != 0.0 || value < 1.0 || value > f64::from(u32::MAX) {
        return Err(TraceError::validation(format!(
            "{} must be a positive integer, got {}",
            name, value
        )));
    }
    Ok(value as u32)
}

fn label_or_id(label: Option<String>, id: &str) -> String {
    match label {
        Some(l) if !l.trim().is_empty() => l,
        _ => id.to_string(),
    }
}

impl TryFrom<RawDocument> for ProjectDocument {
    type Error = TraceError;

    fn try_from(raw: RawDocument) -> TraceResult<Self> {
        let image_width = dimension("imageWidth", raw.image_width)?;
        let image_height = dimension("imageHeight", raw.image_height)?;

        let mut node_ids = HashSet::new();
        let mut nodes = Vec::new();
        for n in raw.nodes.unwrap_or_default() {
            validate_id("node", &n.id)?;
            if !node_ids.insert(n.id.clone()) {
                return Err(TraceError::validation(format!("duplicate node id {}", n.id)));
            }
            if !n.x.is_finite() || !n.y.is_finite() {
                return Err(TraceError::validation(format!(
                    "node {} has non-finite coordinates",
                    n.id
                )));
            }
            nodes.push(Node {
                label: label_or_id(n.label, &n.id),
                id: n.id,
                x: n.x,
                y: n.y,
            });
        }

        let mut edge_keys = HashSet::new();
        let mut edges = Vec::new();
        for e in raw.edges.unwrap_or_default() {
            for end in [&e.a, &e.b] {
                if !node_ids.contains(end) {
                    return Err(TraceError::validation(format!(
                        "edge {}-{} references unknown node {}",
                        e.a, e.b, end
                    )));
                }
            }
            if e.a == e.b {
                return Err(TraceError::validation(format!("self-loop on node {}", e.a)));
            }
            if !edge_keys.insert(EdgeKey::new(&e.a, &e.b)) {
                return Err(TraceError::validation(format!("duplicate edge {}-{}", e.a, e.b)));
            }
            let weight = e.weight.map(|w| w.normalize()).unwrap_or(Weight::ONE);
            edges.push(Edge {
                a: e.a,
                b: e.b,
                weight,
            });
        }

        let mut path_ids = HashSet::new();
        let mut paths = Vec::new();
        for p in raw.paths.unwrap_or_default() {
            validate_id("path", &p.path_id)?;
            if !path_ids.insert(p.path_id.clone()) {
                return Err(TraceError::validation(format!("duplicate path id {}", p.path_id)));
            }
            if p.node_ids.is_empty() {
                return Err(TraceError::validation(format!("path {} has no nodes", p.path_id)));
            }
            if let Some(missing) = p.node_ids.iter().find(|id| !node_ids.contains(*id)) {
                return Err(TraceError::validation(format!(
                    "path {} references unknown node {}",
                    p.path_id, missing
                )));
            }
            if let Some(w) = p
                .node_ids
                .windows(2)
                .find(|w| !edge_keys.contains(&EdgeKey::new(&w[0], &w[1])))
            {
                return Err(TraceError::validation(format!(
                    "path {} steps {}-{} without an edge",
                    p.path_id, w[0], w[1]
                )));
            }
            paths.push(Path {
                label: label_or_id(p.label, &p.path_id),
                path_id: p.path_id,
                node_ids: p.node_ids,
                visible: p.visible.unwrap_or(true),
            });
        }

        Ok(Self {
            image_width,
            image_height,
            nodes,
            edges,
            paths,
        })
    }
}
