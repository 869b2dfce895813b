//! Maximum-cardinality matching by augmenting paths over a residual graph.
//!
//! This is the textbook bipartite augmenting-path procedure run on general
//! graphs. Without blossom contraction it is not guaranteed optimal on graphs
//! with odd cycles, and vertices of degree one never start a search, so a
//! pendant edge whose other end has no further edges stays unmatched.
//!
//! A search may also run back into its own unmatched start vertex, for
//! example `C -> A (mate B) -> C` on a triangle. That counts as a path: `C`
//! and `A` are relinked and `B` loses its partner, leaving the pair count
//! unchanged.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use crate::types::{GraphError, GraphResult, VertexId};

use super::GraphStore;

/// A matching: each matched vertex maps to its partner, both ways.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Matching {
    /// Partner of every matched vertex.
    pub mates: BTreeMap<VertexId, VertexId>,
    /// Number of augmentation passes run, including the final idle one.
    pub passes: usize,
}

impl Matching {
    /// Number of matched pairs.
    pub fn size(&self) -> usize {
        self.mates.len() / 2
    }

    /// Partner of `vertex`, if matched.
    pub fn mate(&self, vertex: &str) -> Option<&str> {
        self.mates.get(vertex).map(String::as_str)
    }

    /// Is `u`-`v` one of the matched pairs?
    pub fn contains_pair(&self, u: &str, v: &str) -> bool {
        self.mate(u) == Some(v)
    }

    /// Matched pairs, each listed once with the smaller id first.
    pub fn pairs(&self) -> Vec<(VertexId, VertexId)> {
        self.mates
            .iter()
            .filter(|(u, v)| u < v)
            .map(|(u, v)| (u.clone(), v.clone()))
            .collect()
    }
}

/// Edges of the graph not currently in the matching, as neighbour lists.
struct Residual<'g> {
    adjacency: HashMap<&'g str, Vec<&'g str>>,
}

impl<'g> Residual<'g> {
    /// Edges are taken vertex by vertex, each vertex's edges in neighbour
    /// order, skipping edges already listed from their other end. The
    /// search is order-sensitive, so this order is part of the result.
    fn build(graph: &'g GraphStore, mates: &HashMap<&'g str, &'g str>) -> Self {
        let mut adjacency: HashMap<&'g str, Vec<&'g str>> = HashMap::new();
        let mut done: HashSet<&'g str> = HashSet::new();
        for u in graph.vertices() {
            let u = u.as_str();
            for v in graph.neighbors(u) {
                let v = v.as_str();
                if done.contains(v) || mates.get(u) == Some(&v) {
                    continue;
                }
                adjacency.entry(u).or_default().push(v);
                adjacency.entry(v).or_default().push(u);
            }
            done.insert(u);
        }
        Self { adjacency }
    }

    fn contains(&self, vertex: &str) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn neighbors(&self, vertex: &str) -> &[&'g str] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// One level of the augmenting-path search.
struct Frame<'g> {
    vertex: &'g str,
    cursor: usize,
    /// Neighbour of the parent frame whose partner is `vertex`.
    entered_via: Option<&'g str>,
}

/// Match `u` with `v`, unlinking the previous partners of both.
fn link<'g>(mates: &mut HashMap<&'g str, &'g str>, u: &'g str, v: &'g str) {
    for x in [u, v] {
        if let Some(old) = mates.remove(x) {
            if mates.get(old) == Some(&x) {
                mates.remove(old);
            }
        }
    }
    mates.insert(u, v);
    mates.insert(v, u);
}

/// Search for an augmenting path from `start` and apply it if found.
///
/// `visited` is shared by every search within one pass.
fn augment<'g>(
    start: &'g str,
    residual: &Residual<'g>,
    mates: &mut HashMap<&'g str, &'g str>,
    visited: &mut HashSet<&'g str>,
) -> bool {
    if visited.contains(start) || !residual.contains(start) {
        return false;
    }
    visited.insert(start);

    let mut stack = vec![Frame {
        vertex: start,
        cursor: 0,
        entered_via: None,
    }];

    loop {
        let next = {
            let Some(frame) = stack.last_mut() else {
                return false;
            };
            let candidate = residual.neighbors(frame.vertex).get(frame.cursor).copied();
            if candidate.is_some() {
                frame.cursor += 1;
            }
            candidate
        };

        let Some(v) = next else {
            stack.pop();
            continue;
        };

        match mates.get(v).copied() {
            None => {
                // Flip the path, deepest pair first.
                let mut target = v;
                while let Some(frame) = stack.pop() {
                    link(mates, frame.vertex, target);
                    match frame.entered_via {
                        Some(via) => target = via,
                        None => break,
                    }
                }
                return true;
            }
            Some(mate) => {
                if visited.contains(mate) || !residual.contains(mate) {
                    continue;
                }
                visited.insert(mate);
                stack.push(Frame {
                    vertex: mate,
                    cursor: 0,
                    entered_via: Some(v),
                });
            }
        }
    }
}

/// Compute a matching of the undirected graph.
///
/// Each pass rebuilds the residual graph and tries to augment from every
/// unmatched vertex of degree greater than one. Passes repeat until one
/// leaves the number of matched pairs unchanged. The graph is not modified.
pub fn maximum_matching(graph: &GraphStore) -> GraphResult<Matching> {
    if graph.is_directed() {
        return Err(GraphError::UnsupportedOperation(
            "maximum matching is only defined for undirected graphs".to_string(),
        ));
    }

    let mut mates: HashMap<&str, &str> = HashMap::new();
    let mut passes = 0;

    loop {
        let residual = Residual::build(graph, &mates);
        let mut visited: HashSet<&str> = HashSet::new();
        let before = mates.len() / 2;

        for u in graph.vertices() {
            let u = u.as_str();
            if !mates.contains_key(u) && graph.neighbors(u).len() > 1 {
                augment(u, &residual, &mut mates, &mut visited);
            }
        }
        passes += 1;

        if mates.len() / 2 <= before {
            break;
        }
    }

    let mates: BTreeMap<VertexId, VertexId> = mates
        .into_iter()
        .map(|(u, v)| (u.to_string(), v.to_string()))
        .collect();
    log::debug!("matching: {} pairs in {} passes", mates.len() / 2, passes);

    Ok(Matching { mates, passes })
}
