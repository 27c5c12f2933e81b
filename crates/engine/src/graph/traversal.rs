//! Weighted shortest routes over the whole graph.
//!
//! Dijkstra with an O(V²) selection loop; graphs here are interactive-sized,
//! so a heap buys nothing. Every edge is considered, not only edges already
//! walked by a path.
//!
//! Tie-breaking is deterministic: among equal-cost frontier nodes the one
//! discovered first is settled first, and a node's predecessor is only
//! replaced by a strictly cheaper one. Discovery order follows store order.

use super::adjacency::AdjacencyIndex;
use super::GraphStore;

/// Trait for graph algorithms that run against the current store.
pub trait GraphAlgorithm {
    /// The result type of this algorithm.
    type Output;
    /// Execute the algorithm on the given graph.
    fn execute(&self, graph: &GraphStore) -> Self::Output;
}

/// A minimum-cost node sequence between two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Node ids from start to target, both included.
    pub node_ids: Vec<String>,
    /// Sum of edge weights along the route.
    pub cost: f64,
}

impl Route {
    /// Number of edges in the route.
    pub fn hops(&self) -> usize {
        self.node_ids.len().saturating_sub(1)
    }
}

/// Shortest-route query from `start` to `target`.
#[derive(Debug, Clone)]
pub struct ShortestPath<'a> {
    /// Route origin.
    pub start: &'a str,
    /// Route destination.
    pub target: &'a str,
}

impl<'a> ShortestPath<'a> {
    /// Build a query.
    pub fn new(start: &'a str, target: &'a str) -> Self {
        Self { start, target }
    }
}

impl GraphAlgorithm for ShortestPath<'_> {
    type Output = Option<Route>;

    fn execute(&self, graph: &GraphStore) -> Option<Route> {
        let adjacency = AdjacencyIndex::from_graph(graph);
        dijkstra(&adjacency, self.start, self.target)
    }
}

impl GraphStore {
    /// Minimum-total-weight route from `start` to `target`, or `None` when
    /// either node is missing or the target is unreachable.
    pub fn shortest_path(&self, start: &str, target: &str) -> Option<Route> {
        ShortestPath::new(start, target).execute(self)
    }
}

fn dijkstra(adj: &AdjacencyIndex, start: &str, target: &str) -> Option<Route> {
    let s = adj.index_of(start)?;
    let t = adj.index_of(target)?;
    if s == t {
        return Some(Route {
            node_ids: vec![start.to_string()],
            cost: 0.0,
        });
    }

    let n = adj.len();
    let mut dist = vec![f64::INFINITY; n];
    let mut discovered = vec![usize::MAX; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut seq = 0usize;

    dist[s] = 0.0;
    discovered[s] = seq;

    loop {
        let next = (0..n)
            .filter(|&i| !settled[i] && dist[i].is_finite())
            .min_by(|&i, &j| {
                dist[i]
                    .total_cmp(&dist[j])
                    .then(discovered[i].cmp(&discovered[j]))
            });
        let Some(u) = next else { break };
        if u == t {
            break;
        }
        settled[u] = true;

        for &(v, w) in adj.neighbors(u) {
            if settled[v] {
                continue;
            }
            let candidate = dist[u] + w;
            if candidate < dist[v] {
                if !dist[v].is_finite() {
                    seq += 1;
                    discovered[v] = seq;
                }
                dist[v] = candidate;
                prev[v] = Some(u);
            }
        }
    }

    if !dist[t].is_finite() {
        return None;
    }

    let mut node_ids = vec![adj.id(t).to_string()];
    let mut cursor = t;
    while let Some(p) = prev[cursor] {
        node_ids.push(adj.id(p).to_string());
        cursor = p;
    }
    node_ids.reverse();

    Some(Route {
        node_ids,
        cost: dist[t],
    })
}
