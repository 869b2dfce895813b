//! Fluent API for building GraphStore instances.

use crate::types::{Edge, GraphResult, VertexId, Weight};

use super::GraphStore;

/// Fluent builder for constructing a GraphStore.
///
/// Vertices named by `link` are created on first mention, in order.
pub struct GraphBuilder {
    directed: bool,
    weighted: bool,
    vertices: Vec<VertexId>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create a builder for an undirected, unweighted graph.
    pub fn new() -> Self {
        Self {
            directed: false,
            weighted: false,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Make the graph directed.
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Put the graph in weighted mode.
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    fn ensure_vertex(&mut self, id: &str) {
        if !self.vertices.iter().any(|v| v == id) {
            self.vertices.push(id.to_string());
        }
    }

    /// Add an isolated vertex.
    pub fn vertex(mut self, id: &str) -> Self {
        self.ensure_vertex(id);
        self
    }

    /// Add an edge, creating missing endpoints.
    pub fn link(mut self, source: &str, target: &str) -> Self {
        self.ensure_vertex(source);
        self.ensure_vertex(target);
        self.edges.push(Edge::new(source, target));
        self
    }

    /// Add a weighted edge, creating missing endpoints.
    pub fn link_weighted(mut self, source: &str, target: &str, weight: Weight) -> Self {
        self.ensure_vertex(source);
        self.ensure_vertex(target);
        self.edges.push(Edge::weighted(source, target, weight));
        self
    }

    /// Add a path through the given vertices.
    pub fn path(mut self, ids: &[&str]) -> Self {
        for pair in ids.windows(2) {
            self = self.link(pair[0], pair[1]);
        }
        self
    }

    /// Build the final GraphStore.
    pub fn build(self) -> GraphResult<GraphStore> {
        GraphStore::from_parts(self.vertices, self.edges, self.directed, self.weighted)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
