//! Graph traversal algorithms (BFS, DFS).

use std::collections::{BTreeSet, HashSet, VecDeque};

use serde::Serialize;

use crate::types::{GraphError, GraphResult, VertexId};

use super::GraphStore;

/// Which frontier discipline a traversal used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TraversalOrder {
    /// First-in-first-out frontier.
    Breadth,
    /// Last-in-first-out frontier.
    Depth,
}

impl TraversalOrder {
    /// Return a human-readable name for this order.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Breadth => "bfs",
            Self::Depth => "dfs",
        }
    }
}

/// Output of a traversal, enough to drive vertex and edge highlighting.
#[derive(Debug, Clone, Serialize)]
pub struct Traversal {
    /// How the graph was walked.
    pub order: TraversalOrder,
    /// Start vertex.
    pub start: VertexId,
    /// Visited vertices in visit order, no duplicates.
    pub visited: Vec<VertexId>,
    /// Discovery edges in the order they were taken, as `(from, to)`.
    pub tree_edges: Vec<(VertexId, VertexId)>,
    /// Every edge examined from a visited vertex toward one not yet visited,
    /// tree edges included. Undirected graphs list both orientations.
    pub traversed: BTreeSet<(VertexId, VertexId)>,
}

impl Traversal {
    fn new(order: TraversalOrder, start: &str) -> Self {
        Self {
            order,
            start: start.to_string(),
            visited: Vec::new(),
            tree_edges: Vec::new(),
            traversed: BTreeSet::new(),
        }
    }

    fn mark_traversed(&mut self, from: &str, to: &str, directed: bool) {
        self.traversed.insert((from.to_string(), to.to_string()));
        if !directed {
            self.traversed.insert((to.to_string(), from.to_string()));
        }
    }

    /// Was the edge `from -> to` traversed? Either orientation matches when undirected.
    pub fn traversed_edge(&self, from: &str, to: &str) -> bool {
        self.traversed.contains(&(from.to_string(), to.to_string()))
    }
}

/// Breadth-first search from `start` over the reachable component.
///
/// A vertex counts as visited when dequeued. Each vertex enters the queue
/// at most once; the edge that first reached it is the tree edge. Edges to
/// vertices still waiting in the queue are marked traversed as well.
pub fn bfs(graph: &GraphStore, start: &str) -> GraphResult<Traversal> {
    if !graph.contains_vertex(start) {
        return Err(GraphError::InvalidVertex(start.to_string()));
    }

    let directed = graph.is_directed();
    let mut result = Traversal::new(TraversalOrder::Breadth, start);
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queued: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    queued.insert(start);
    queue.push_back(start);

    while let Some(vertex) = queue.pop_front() {
        visited.insert(vertex);
        result.visited.push(vertex.to_string());

        for neighbor in graph.neighbors(vertex) {
            if visited.contains(neighbor.as_str()) {
                continue;
            }
            result.mark_traversed(vertex, neighbor, directed);
            if queued.insert(neighbor.as_str()) {
                result
                    .tree_edges
                    .push((vertex.to_string(), neighbor.to_string()));
                queue.push_back(neighbor.as_str());
            }
        }
    }

    log::debug!("bfs from {} visited {}", start, result.visited.len());
    Ok(result)
}

/// Depth-first search from `start` over the reachable component.
///
/// Uses an explicit stack. A vertex counts as visited when popped; copies
/// pushed before that are skipped. Neighbours are pushed in reverse so the
/// first-inserted neighbour is expanded first. Every unvisited neighbour
/// examined marks its edge traversed; the edge a vertex is popped through
/// is its tree edge.
pub fn dfs(graph: &GraphStore, start: &str) -> GraphResult<Traversal> {
    if !graph.contains_vertex(start) {
        return Err(GraphError::InvalidVertex(start.to_string()));
    }

    let directed = graph.is_directed();
    let mut result = Traversal::new(TraversalOrder::Depth, start);
    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack: Vec<(&str, Option<&str>)> = vec![(start, None)];

    while let Some((vertex, parent)) = stack.pop() {
        if !visited.insert(vertex) {
            continue;
        }
        result.visited.push(vertex.to_string());
        if let Some(parent) = parent {
            result
                .tree_edges
                .push((parent.to_string(), vertex.to_string()));
        }

        for neighbor in graph.neighbors(vertex).iter().rev() {
            if !visited.contains(neighbor.as_str()) {
                result.mark_traversed(vertex, neighbor, directed);
                stack.push((neighbor.as_str(), Some(vertex)));
            }
        }
    }

    log::debug!("dfs from {} visited {}", start, result.visited.len());
    Ok(result)
}
