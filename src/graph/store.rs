//! Core graph structure: vertices and edges with mode flags and weight memory.

use std::collections::{HashMap, HashSet};

use crate::types::{
    next_letter_id, Edge, GraphError, GraphResult, Side, VertexId, Weight, DEFAULT_WEIGHT,
};

/// The mutable graph edited by a session.
///
/// Vertices and edges keep insertion order, which is also the neighbour
/// order every algorithm sees. Two mode flags shape the graph:
/// `directed` decides whether edge order matters, `weighted` decides whether
/// edges carry weights. While weighted, every edge has a weight; while
/// unweighted, none has.
pub struct GraphStore {
    /// All vertex ids, in insertion order.
    vertices: Vec<VertexId>,
    /// All edges, in insertion order.
    edges: Vec<Edge>,
    /// Neighbour index: successors when directed, both endpoints otherwise.
    adjacency: HashMap<VertexId, Vec<VertexId>>,
    /// Position in `edges` of each edge, keyed by its endpoint pair
    /// (sorted when undirected).
    edge_index: HashMap<(VertexId, VertexId), usize>,
    /// Whether edge order matters.
    directed: bool,
    /// Whether edges carry weights.
    weighted: bool,
    /// Last known weight per stored (source, target) pair.
    weight_memory: HashMap<(VertexId, VertexId), Weight>,
    /// Side of each vertex created by bipartite generation.
    sides: HashMap<VertexId, Side>,
}

impl GraphStore {
    /// Create a new empty graph.
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            adjacency: HashMap::new(),
            edge_index: HashMap::new(),
            directed,
            weighted,
            weight_memory: HashMap::new(),
            sides: HashMap::new(),
        }
    }

    /// Create from pre-existing data (used by builder and reader).
    ///
    /// Edge endpoints must be listed in `vertices`. In weighted mode, edges
    /// without a weight get the default one.
    pub fn from_parts(
        vertices: Vec<VertexId>,
        edges: Vec<Edge>,
        directed: bool,
        weighted: bool,
    ) -> GraphResult<Self> {
        let mut graph = Self::new(directed, weighted);
        for id in vertices {
            graph.add_vertex_named(&id)?;
        }
        for edge in edges {
            graph.add_edge(&edge.source, &edge.target, edge.weight)?;
        }
        Ok(graph)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether edge order matters.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Whether the graph is in weighted mode.
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Get all vertex ids (insertion order).
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Get all edges (insertion order).
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Does the vertex exist?
    pub fn contains_vertex(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Vertices reachable over one edge: successors when directed.
    pub fn neighbors(&self, id: &str) -> &[VertexId] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of edges touching the vertex, in either direction.
    pub fn degree(&self, id: &str) -> usize {
        if self.directed {
            self.edges.iter().filter(|e| e.touches(id)).count()
        } else {
            self.neighbors(id).len()
        }
    }

    fn edge_key(&self, u: &str, v: &str) -> (VertexId, VertexId) {
        if self.directed || u <= v {
            (u.to_string(), v.to_string())
        } else {
            (v.to_string(), u.to_string())
        }
    }

    fn edge_position(&self, u: &str, v: &str) -> Option<usize> {
        self.edge_index.get(&self.edge_key(u, v)).copied()
    }

    /// Find the edge joining `u` and `v` under the current directedness.
    pub fn find_edge(&self, u: &str, v: &str) -> Option<&Edge> {
        self.edge_position(u, v).map(|pos| &self.edges[pos])
    }

    /// Is there an edge joining `u` and `v` under the current directedness?
    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        self.edge_index.contains_key(&self.edge_key(u, v))
    }

    /// Weight of the edge joining `u` and `v`, if it has one.
    pub fn weight(&self, u: &str, v: &str) -> Option<Weight> {
        self.find_edge(u, v).and_then(|e| e.weight)
    }

    /// Weight remembered for the pair, looked up as `(u, v)` then `(v, u)`.
    pub fn remembered_weight(&self, u: &str, v: &str) -> Option<Weight> {
        self.weight_memory
            .get(&(u.to_string(), v.to_string()))
            .or_else(|| self.weight_memory.get(&(v.to_string(), u.to_string())))
            .copied()
    }

    /// Side of a vertex created by bipartite generation.
    pub fn side(&self, id: &str) -> Option<Side> {
        self.sides.get(id).copied()
    }

    /// Number of vertices on the given side.
    pub fn side_count(&self, side: Side) -> usize {
        self.sides.values().filter(|&&s| s == side).count()
    }

    /// Put an existing vertex on a bipartite side.
    pub fn set_side(&mut self, id: &str, side: Side) -> GraphResult<()> {
        if !self.contains_vertex(id) {
            return Err(GraphError::InvalidVertex(id.to_string()));
        }
        self.sides.insert(id.to_string(), side);
        Ok(())
    }

    /// Add a vertex with the next free letter id, returns the id.
    pub fn add_vertex(&mut self) -> GraphResult<VertexId> {
        let id = next_letter_id(self.vertices.iter().map(String::as_str))?;
        self.insert_vertex(id.clone());
        Ok(id)
    }

    /// Add a vertex with a caller-chosen id.
    pub fn add_vertex_named(&mut self, id: &str) -> GraphResult<()> {
        if id.trim().is_empty() {
            return Err(GraphError::InvalidVertex(id.to_string()));
        }
        if id.contains(',') {
            return Err(GraphError::UnsupportedOperation(format!(
                "vertex id {:?} contains ','",
                id
            )));
        }
        if self.contains_vertex(id) {
            return Err(GraphError::DuplicateVertex(id.to_string()));
        }
        self.insert_vertex(id.to_string());
        Ok(())
    }

    /// Add a vertex to the smaller bipartite side (left on ties).
    ///
    /// Left ids are letters, right ids are numbers counted from `"1"`.
    pub fn add_bipartite_vertex(&mut self) -> GraphResult<(VertexId, Side)> {
        let left = self.side_count(Side::Left);
        let right = self.side_count(Side::Right);

        let (id, side) = if left <= right {
            let left_ids = self
                .sides
                .iter()
                .filter(|(_, s)| **s == Side::Left)
                .map(|(id, _)| id.as_str());
            let mut id = next_letter_id(left_ids)?;
            while self.contains_vertex(&id) {
                id = next_letter_id([id.as_str()])?;
            }
            (id, Side::Left)
        } else {
            let mut n = right + 1;
            while self.contains_vertex(&n.to_string()) {
                n += 1;
            }
            (n.to_string(), Side::Right)
        };

        self.insert_vertex(id.clone());
        self.sides.insert(id.clone(), side);
        Ok((id, side))
    }

    fn insert_vertex(&mut self, id: VertexId) {
        log::debug!("add vertex {}", id);
        self.adjacency.insert(id.clone(), Vec::new());
        self.vertices.push(id);
    }

    /// Remove a vertex and all its edges, returns the removed edges.
    pub fn remove_vertex(&mut self, id: &str) -> GraphResult<Vec<Edge>> {
        let pos = self
            .vertices
            .iter()
            .position(|v| v == id)
            .ok_or_else(|| GraphError::InvalidVertex(id.to_string()))?;
        self.vertices.remove(pos);
        self.sides.remove(id);

        let (removed, kept): (Vec<Edge>, Vec<Edge>) =
            self.edges.drain(..).partition(|e| e.touches(id));
        self.edges = kept;
        self.weight_memory.retain(|(s, t), _| s != id && t != id);

        log::debug!("remove vertex {} with {} edges", id, removed.len());
        self.rebuild_indexes();
        Ok(removed)
    }

    /// Add an edge between two existing vertices.
    ///
    /// In weighted mode a missing weight defaults to 1. In unweighted mode a
    /// supplied weight is remembered rather than attached. Two vertices on
    /// the same bipartite side cannot be joined.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: Option<Weight>) -> GraphResult<()> {
        if !self.contains_vertex(u) {
            return Err(GraphError::InvalidVertex(u.to_string()));
        }
        if !self.contains_vertex(v) {
            return Err(GraphError::InvalidVertex(v.to_string()));
        }
        if u == v {
            return Err(GraphError::UnsupportedOperation(format!(
                "self-loop on vertex {:?}",
                u
            )));
        }
        if let (Some(su), Some(sv)) = (self.side(u), self.side(v)) {
            if su == sv {
                return Err(GraphError::UnsupportedOperation(format!(
                    "{:?} and {:?} are both on the {} side",
                    u, v, su
                )));
            }
        }
        if self.has_edge(u, v) {
            return Err(GraphError::DuplicateEdge {
                from: u.to_string(),
                to: v.to_string(),
            });
        }

        let weight = if self.weighted {
            Some(weight.unwrap_or(DEFAULT_WEIGHT))
        } else {
            if let Some(w) = weight {
                self.weight_memory.insert((u.to_string(), v.to_string()), w);
            }
            None
        };

        log::debug!("add edge {} -> {} (weight {:?})", u, v, weight);
        let key = self.edge_key(u, v);
        self.edge_index.insert(key, self.edges.len());
        self.edges.push(Edge {
            source: u.to_string(),
            target: v.to_string(),
            weight,
        });
        self.link_neighbors(u, v);
        Ok(())
    }

    /// Remove the edge joining `u` and `v`. Returns `false` if there was none.
    pub fn remove_edge(&mut self, u: &str, v: &str) -> bool {
        let Some(pos) = self.edge_position(u, v) else {
            log::warn!("remove edge {} -> {}: no such edge", u, v);
            return false;
        };

        let removed = self.edges.remove(pos);
        self.weight_memory
            .remove(&(removed.source.clone(), removed.target.clone()));
        self.weight_memory
            .remove(&(removed.target.clone(), removed.source.clone()));

        log::debug!("remove edge {}", removed);
        self.unlink_neighbors(&removed.source, &removed.target);
        self.reindex_edges();
        true
    }

    /// Set the weight of an existing edge.
    ///
    /// The graph switches to weighted mode and every other edge lacking a
    /// weight is backfilled with 1.
    pub fn set_weight(&mut self, u: &str, v: &str, weight: Weight) -> GraphResult<()> {
        let pos = self
            .edge_position(u, v)
            .ok_or_else(|| GraphError::EdgeNotFound {
                from: u.to_string(),
                to: v.to_string(),
            })?;

        self.edges[pos].weight = Some(weight);
        let mut backfilled = 0;
        for edge in self.edges.iter_mut() {
            if edge.weight.is_none() {
                edge.weight = Some(DEFAULT_WEIGHT);
                backfilled += 1;
            }
        }
        self.weighted = true;

        log::debug!(
            "set weight {} -> {} = {} (backfilled {})",
            u,
            v,
            weight,
            backfilled
        );
        Ok(())
    }

    /// Switch directedness, keeping every vertex and edge.
    ///
    /// Going directed turns each edge into `source -> target` as stored.
    /// Going undirected keeps the first of any pair of opposite edges and
    /// drops the other, so the round trip is lossy. Returns the number of
    /// dropped edges.
    pub fn set_directed(&mut self, directed: bool) -> usize {
        if self.directed == directed {
            return 0;
        }
        self.directed = directed;

        let mut dropped = 0;
        if !directed {
            let mut seen: HashSet<(VertexId, VertexId)> = HashSet::new();
            let mut kept: Vec<Edge> = Vec::with_capacity(self.edges.len());
            for edge in std::mem::take(&mut self.edges) {
                if seen.insert(self.edge_key(&edge.source, &edge.target)) {
                    kept.push(edge);
                } else {
                    log::warn!("coalesced opposite edge {}", edge);
                    self.weight_memory.remove(&(edge.source, edge.target));
                    dropped += 1;
                }
            }
            self.edges = kept;
        }

        log::debug!("directed = {} ({} edges dropped)", directed, dropped);
        self.rebuild_indexes();
        dropped
    }

    /// Switch weighting mode.
    ///
    /// Turning weights off moves each weight into weight memory. Turning them
    /// on restores remembered weights and defaults the rest to 1.
    pub fn set_weighted(&mut self, weighted: bool) {
        if self.weighted == weighted {
            return;
        }
        self.weighted = weighted;

        if weighted {
            let restored: Vec<Weight> = self
                .edges
                .iter()
                .map(|e| {
                    self.remembered_weight(&e.source, &e.target)
                        .unwrap_or(DEFAULT_WEIGHT)
                })
                .collect();
            for (edge, w) in self.edges.iter_mut().zip(restored) {
                edge.weight = Some(w);
            }
        } else {
            for edge in self.edges.iter_mut() {
                if let Some(w) = edge.weight.take() {
                    self.weight_memory
                        .insert((edge.source.clone(), edge.target.clone()), w);
                }
            }
        }
        log::debug!("weighted = {}", weighted);
    }

    fn link_neighbors(&mut self, source: &str, target: &str) {
        if let Some(list) = self.adjacency.get_mut(source) {
            list.push(target.to_string());
        }
        if !self.directed {
            if let Some(list) = self.adjacency.get_mut(target) {
                list.push(source.to_string());
            }
        }
    }

    fn unlink_neighbors(&mut self, source: &str, target: &str) {
        let mut ends = vec![(source, target)];
        if !self.directed {
            ends.push((target, source));
        }
        for (from, to) in ends {
            if let Some(list) = self.adjacency.get_mut(from) {
                if let Some(i) = list.iter().position(|n| n == to) {
                    list.remove(i);
                }
            }
        }
    }

    /// Recompute edge positions after the edge list shifted.
    fn reindex_edges(&mut self) {
        let keys: Vec<(VertexId, VertexId)> = self
            .edges
            .iter()
            .map(|e| self.edge_key(&e.source, &e.target))
            .collect();
        self.edge_index = keys.into_iter().zip(0..).collect();
    }

    /// Rebuild the neighbour and edge indexes from the current edge list.
    fn rebuild_indexes(&mut self) {
        self.adjacency.clear();
        for id in &self.vertices {
            self.adjacency.insert(id.clone(), Vec::new());
        }
        for i in 0..self.edges.len() {
            let (source, target) = (self.edges[i].source.clone(), self.edges[i].target.clone());
            self.link_neighbors(&source, &target);
        }
        self.reindex_edges();
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new(false, false)
    }
}
