//! Reads edge-list files into a graph.

use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

use crate::graph::GraphStore;
use crate::types::error::{GraphError, GraphResult};
use crate::types::{Edge, Side, VertexId, Weight};

/// Modes applied to a freshly loaded graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Build a directed graph.
    pub directed: bool,
    /// Force weighted mode even if no line carries a weight.
    pub weighted: bool,
    /// Put alphabetic ids on the left side and every other id on the
    /// right side. Lines joining two ids of the same side are rejected.
    pub bipartite: bool,
}

/// Side an id lands on when loading a bipartite graph.
pub fn side_for_id(id: &str) -> Side {
    if !id.is_empty() && id.chars().all(char::is_alphabetic) {
        Side::Left
    } else {
        Side::Right
    }
}

/// Reader for edge-list text.
///
/// Blank lines and lines starting with `#` are skipped. Each other line is
/// `u,v` or `u,v,weight` with an integer weight. A graph with at least one
/// weighted line is loaded in weighted mode, the rest of its edges getting
/// weight 1. A repeated edge updates the weight of the first occurrence.
pub struct EdgeListReader {
    options: LoadOptions,
}

impl EdgeListReader {
    /// Create a reader with the given load options.
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    /// Read an edge-list file into a GraphStore.
    pub fn read_from_file(&self, path: &Path) -> GraphResult<GraphStore> {
        let contents = std::fs::read_to_string(path)?;
        let graph = self.parse(&contents)?;
        log::info!(
            "loaded {} vertices and {} edges from {}",
            graph.vertex_count(),
            graph.edge_count(),
            path.display()
        );
        Ok(graph)
    }

    /// Read from any reader into a GraphStore.
    pub fn read_from(&self, reader: &mut impl Read) -> GraphResult<GraphStore> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        self.parse(&contents)
    }

    /// Parse edge-list text held in memory.
    pub fn parse(&self, contents: &str) -> GraphResult<GraphStore> {
        let LoadOptions {
            directed,
            weighted,
            bipartite,
        } = self.options;
        let mut vertices: Vec<VertexId> = Vec::new();
        let mut seen: HashSet<VertexId> = HashSet::new();
        let mut edges: Vec<Edge> = Vec::new();
        let mut positions: HashMap<(VertexId, VertexId), usize> = HashMap::new();
        let mut any_weight = false;

        for (index, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line_no = index + 1;
            let (source, target, weight) = parse_line(line, line_no)?;
            if bipartite && side_for_id(&source) == side_for_id(&target) {
                return Err(GraphError::MalformedInput {
                    line: line_no,
                    reason: format!(
                        "{:?} and {:?} are both on the {} side",
                        source,
                        target,
                        side_for_id(&source)
                    ),
                });
            }
            any_weight |= weight.is_some();

            let key = if directed || source <= target {
                (source.clone(), target.clone())
            } else {
                (target.clone(), source.clone())
            };
            if let Some(&pos) = positions.get(&key) {
                log::warn!("line {}: repeated edge {},{}", line_no, source, target);
                if weight.is_some() {
                    edges[pos].weight = weight;
                }
                continue;
            }
            positions.insert(key, edges.len());

            for id in [&source, &target] {
                if seen.insert(id.clone()) {
                    vertices.push(id.clone());
                }
            }
            edges.push(Edge {
                source,
                target,
                weight,
            });
        }

        let mut graph = GraphStore::new(directed, weighted || any_weight);
        for id in &vertices {
            graph.add_vertex_named(id)?;
            if bipartite {
                graph.set_side(id, side_for_id(id))?;
            }
        }
        for edge in edges {
            graph.add_edge(&edge.source, &edge.target, edge.weight)?;
        }
        Ok(graph)
    }
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self::new(LoadOptions::default())
    }
}

/// Parse one non-blank, non-comment line.
fn parse_line(line: &str, line_no: usize) -> GraphResult<(String, String, Option<Weight>)> {
    let malformed = |reason: String| GraphError::MalformedInput {
        line: line_no,
        reason,
    };

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 2 || fields.len() > 3 {
        return Err(malformed(format!(
            "expected 2 or 3 comma-separated fields, found {}",
            fields.len()
        )));
    }
    if fields[0].is_empty() || fields[1].is_empty() {
        return Err(malformed("empty vertex id".to_string()));
    }
    if fields[0] == fields[1] {
        return Err(malformed(format!("self-loop on {:?}", fields[0])));
    }

    let weight = match fields.get(2) {
        Some(raw) => Some(
            raw.parse::<Weight>()
                .map_err(|_| malformed(format!("weight {:?} is not an integer", raw)))?,
        ),
        None => None,
    };

    Ok((fields[0].to_string(), fields[1].to_string(), weight))
}
