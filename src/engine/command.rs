//! Commands a caller can issue against a session, and their outcomes.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::graph::{Matching, Traversal};
use crate::types::{GraphError, Side, VertexId, Weight};

use super::inspect::{Description, Elements, GraphStats};

/// One request against a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    AddVertex,
    AddVertexNamed { id: VertexId },
    AddBipartiteVertex,
    RemoveVertex { id: VertexId },
    AddEdge {
        source: VertexId,
        target: VertexId,
        #[serde(default)]
        weight: Option<Weight>,
    },
    RemoveEdge { source: VertexId, target: VertexId },
    SetWeight {
        source: VertexId,
        target: VertexId,
        weight: Weight,
    },
    SetDirected { directed: bool },
    SetWeighted { weighted: bool },
    Bfs { start: VertexId },
    Dfs { start: VertexId },
    MaximumMatching,
    Describe,
    Stats,
    Export,
    Load {
        #[serde(default)]
        path: Option<PathBuf>,
    },
    Save {
        #[serde(default)]
        path: Option<PathBuf>,
    },
}

/// Shell command names with a short description, for help output.
pub const COMMANDS: &[(&str, &str)] = &[
    ("add-vertex [id]", "Add a vertex (next letter when no id)"),
    ("add-bipartite-vertex", "Add a vertex to the smaller bipartite side"),
    ("remove-vertex <id>", "Remove a vertex and its edges"),
    ("add-edge <u> <v> [w]", "Add an edge"),
    ("remove-edge <u> <v>", "Remove an edge"),
    ("set-weight <u> <v> <w>", "Set an edge weight"),
    ("directed on|off", "Switch directedness"),
    ("weighted on|off", "Switch weighting"),
    ("bfs <start>", "Breadth-first search"),
    ("dfs <start>", "Depth-first search"),
    ("match", "Maximum matching"),
    ("describe", "Vertex/edge counts and modes"),
    ("stats", "Degree statistics"),
    ("export", "All vertices and edges"),
    ("load [path]", "Replace the graph from an edge list"),
    ("save [path]", "Write the edge list"),
];

fn parse_flag(raw: &str) -> Result<bool, GraphError> {
    match raw.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(GraphError::InvalidCommand(format!(
            "expected on/off, got {:?}",
            raw
        ))),
    }
}

fn parse_weight(raw: &str) -> Result<Weight, GraphError> {
    raw.parse()
        .map_err(|_| GraphError::InvalidCommand(format!("weight {:?} is not an integer", raw)))
}

impl FromStr for Command {
    type Err = GraphError;

    /// Parse a shell line such as `add-edge A B 3`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = tokens.split_first() else {
            return Err(GraphError::InvalidCommand("empty command".to_string()));
        };

        let usage = |text: &str| GraphError::InvalidCommand(format!("usage: {text}"));

        let command = match (name, args) {
            ("add-vertex", []) => Command::AddVertex,
            ("add-vertex", [id]) => Command::AddVertexNamed { id: id.to_string() },
            ("add-vertex", _) => return Err(usage("add-vertex [id]")),
            ("add-bipartite-vertex", []) => Command::AddBipartiteVertex,
            ("remove-vertex", [id]) => Command::RemoveVertex { id: id.to_string() },
            ("remove-vertex", _) => return Err(usage("remove-vertex <id>")),
            ("add-edge", [u, v]) => Command::AddEdge {
                source: u.to_string(),
                target: v.to_string(),
                weight: None,
            },
            ("add-edge", [u, v, w]) => Command::AddEdge {
                source: u.to_string(),
                target: v.to_string(),
                weight: Some(parse_weight(w)?),
            },
            ("add-edge", _) => return Err(usage("add-edge <u> <v> [w]")),
            ("remove-edge", [u, v]) => Command::RemoveEdge {
                source: u.to_string(),
                target: v.to_string(),
            },
            ("remove-edge", _) => return Err(usage("remove-edge <u> <v>")),
            ("set-weight" | "weight", [u, v, w]) => Command::SetWeight {
                source: u.to_string(),
                target: v.to_string(),
                weight: parse_weight(w)?,
            },
            ("set-weight" | "weight", _) => return Err(usage("set-weight <u> <v> <w>")),
            ("directed", [flag]) => Command::SetDirected {
                directed: parse_flag(flag)?,
            },
            ("weighted", [flag]) => Command::SetWeighted {
                weighted: parse_flag(flag)?,
            },
            ("bfs", [start]) => Command::Bfs {
                start: start.to_string(),
            },
            ("dfs", [start]) => Command::Dfs {
                start: start.to_string(),
            },
            ("match" | "matching", []) => Command::MaximumMatching,
            ("describe" | "info", []) => Command::Describe,
            ("stats", []) => Command::Stats,
            ("export", []) => Command::Export,
            ("load", []) => Command::Load { path: None },
            ("load", [path]) => Command::Load {
                path: Some(PathBuf::from(path)),
            },
            ("save", []) => Command::Save { path: None },
            ("save", [path]) => Command::Save {
                path: Some(PathBuf::from(path)),
            },
            _ => {
                return Err(GraphError::InvalidCommand(format!(
                    "unknown command or arguments: {:?}",
                    line.trim()
                )))
            }
        };
        Ok(command)
    }
}

/// Result of a command.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    VertexAdded {
        id: VertexId,
        #[serde(skip_serializing_if = "Option::is_none")]
        side: Option<Side>,
    },
    VertexRemoved {
        id: VertexId,
        removed_edges: usize,
    },
    EdgeAdded {
        source: VertexId,
        target: VertexId,
    },
    EdgeRemoved {
        source: VertexId,
        target: VertexId,
        removed: bool,
    },
    WeightSet {
        source: VertexId,
        target: VertexId,
        weight: Weight,
    },
    ModeChanged {
        directed: bool,
        weighted: bool,
        dropped_edges: usize,
    },
    Traversal(Traversal),
    Matching(Matching),
    Description(Description),
    Stats(GraphStats),
    Elements(Elements),
    Loaded {
        path: PathBuf,
        vertices: usize,
        edges: usize,
    },
    Saved {
        path: PathBuf,
        edges: usize,
    },
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VertexAdded { id, side: None } => write!(f, "Added vertex {}", id),
            Self::VertexAdded {
                id,
                side: Some(side),
            } => write!(f, "Added vertex {} ({} side)", id, side),
            Self::VertexRemoved { id, removed_edges } => {
                write!(f, "Removed vertex {} and {} edges", id, removed_edges)
            }
            Self::EdgeAdded { source, target } => write!(f, "Added edge {}-{}", source, target),
            Self::EdgeRemoved {
                source,
                target,
                removed: true,
            } => write!(f, "Removed edge {}-{}", source, target),
            Self::EdgeRemoved { source, target, .. } => {
                write!(f, "No edge {}-{} to remove", source, target)
            }
            Self::WeightSet {
                source,
                target,
                weight,
            } => write!(f, "Weight of {}-{} is now {}", source, target, weight),
            Self::ModeChanged {
                directed,
                weighted,
                dropped_edges,
            } => {
                write!(f, "Directed: {} Weighted: {}", directed, weighted)?;
                if *dropped_edges > 0 {
                    write!(f, " ({} opposite edges merged)", dropped_edges)?;
                }
                Ok(())
            }
            Self::Traversal(t) => write!(
                f,
                "{} from {}: {}",
                t.order.name().to_uppercase(),
                t.start,
                t.visited.join(", ")
            ),
            Self::Matching(m) => {
                let pairs: Vec<String> = m
                    .pairs()
                    .iter()
                    .map(|(u, v)| format!("{}-{}", u, v))
                    .collect();
                write!(f, "Matching of size {}: {}", m.size(), pairs.join(", "))
            }
            Self::Description(d) => write!(f, "{}", d),
            Self::Stats(s) => write!(
                f,
                "{} Avg degree: {:.2} Max degree: {} Isolated: {}",
                s.description, s.average_degree, s.max_degree, s.isolated_vertices
            ),
            Self::Elements(e) => {
                let vertices: Vec<&str> = e.vertices.iter().map(|v| v.id.as_str()).collect();
                let edges: Vec<&str> = e.edges.iter().map(|x| x.id.as_str()).collect();
                write!(
                    f,
                    "Vertices: {}\nEdges: {}",
                    vertices.join(" "),
                    edges.join(" ")
                )
            }
            Self::Loaded {
                path,
                vertices,
                edges,
            } => write!(
                f,
                "Loaded {} vertices and {} edges from {}",
                vertices,
                edges,
                path.display()
            ),
            Self::Saved { path, edges } => {
                write!(f, "Saved {} edges to {}", edges, path.display())
            }
        }
    }
}
