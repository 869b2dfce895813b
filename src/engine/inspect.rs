//! Read-only views of a graph: description, statistics, exported elements.

use std::collections::HashMap;

use serde::Serialize;

use crate::graph::GraphStore;
use crate::types::{Side, VertexId};

/// Summary of a graph's size and modes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Description {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of edges.
    pub edge_count: usize,
    /// Whether edge order matters.
    pub is_directed: bool,
    /// True when at least one edge carries a weight.
    pub is_weighted: bool,
}

impl std::fmt::Display for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vertices: {} Edges: {} Directed: {} Weighted: {}",
            self.vertex_count,
            self.edge_count,
            yes_no(self.is_directed),
            yes_no(self.is_weighted)
        )
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Description plus degree figures and bipartite side counts.
#[derive(Debug, Clone, Serialize)]
pub struct GraphStats {
    /// Size and modes.
    #[serde(flatten)]
    pub description: Description,
    /// Mean number of edges per vertex.
    pub average_degree: f64,
    /// Largest number of edges on one vertex.
    pub max_degree: usize,
    /// Vertices with no edges.
    pub isolated_vertices: usize,
    /// Vertices on the letter side of bipartite generation.
    pub left_side: usize,
    /// Vertices on the number side of bipartite generation.
    pub right_side: usize,
}

/// A vertex as handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VertexElement {
    pub id: VertexId,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
}

/// An edge as handed to a renderer; the label is the weight or empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeElement {
    pub id: String,
    pub source: VertexId,
    pub target: VertexId,
    pub label: String,
}

/// Snapshot of every vertex and edge.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Elements {
    pub directed: bool,
    pub vertices: Vec<VertexElement>,
    pub edges: Vec<EdgeElement>,
}

/// Derives read-only information from a graph.
pub struct GraphInspector;

impl GraphInspector {
    /// Size and mode summary.
    pub fn describe(graph: &GraphStore) -> Description {
        Description {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            is_directed: graph.is_directed(),
            is_weighted: graph.edges().iter().any(|e| e.weight.is_some()),
        }
    }

    /// Description plus degree statistics.
    pub fn stats(graph: &GraphStore) -> GraphStats {
        let mut by_vertex: HashMap<&str, usize> =
            graph.vertices().iter().map(|v| (v.as_str(), 0)).collect();
        for edge in graph.edges() {
            for end in [&edge.source, &edge.target] {
                if let Some(d) = by_vertex.get_mut(end.as_str()) {
                    *d += 1;
                }
            }
        }
        let degrees: Vec<usize> = by_vertex.into_values().collect();
        let vertex_count = degrees.len();
        // Each edge contributes to two degrees.
        let average_degree = if vertex_count > 0 {
            (2 * graph.edge_count()) as f64 / vertex_count as f64
        } else {
            0.0
        };

        GraphStats {
            description: Self::describe(graph),
            average_degree,
            max_degree: degrees.iter().copied().max().unwrap_or(0),
            isolated_vertices: degrees.iter().filter(|&&d| d == 0).count(),
            left_side: graph.side_count(Side::Left),
            right_side: graph.side_count(Side::Right),
        }
    }

    /// Every vertex and edge, in insertion order.
    pub fn export(graph: &GraphStore) -> Elements {
        let vertices = graph
            .vertices()
            .iter()
            .map(|id| VertexElement {
                id: id.clone(),
                label: id.clone(),
                side: graph.side(id),
            })
            .collect();

        let edges = graph
            .edges()
            .iter()
            .map(|e| EdgeElement {
                id: e.element_id(),
                source: e.source.clone(),
                target: e.target.clone(),
                label: e.weight.map(|w| w.to_string()).unwrap_or_default(),
            })
            .collect();

        Elements {
            directed: graph.is_directed(),
            vertices,
            edges,
        }
    }
}
