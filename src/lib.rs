//! Graph workbench: an editable graph with traversal and matching.
//!
//! A session owns one mutable graph that switches between directed and
//! undirected, weighted and unweighted modes. Read-side algorithms (BFS, DFS,
//! maximum matching, statistics) run over the current graph, and the graph
//! is loaded from and saved to a comma-separated edge list.

pub mod cli;
pub mod config;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::WorkbenchConfig;
pub use engine::{Command, Description, Elements, GraphInspector, GraphStats, Outcome, Workbench};
pub use format::{EdgeListReader, EdgeListWriter, LoadOptions};
pub use graph::{bfs, dfs, maximum_matching, GraphBuilder, GraphStore, Matching, Traversal};
pub use types::{
    Edge, GraphError, GraphResult, Side, VertexId, Weight, DEFAULT_WEIGHT, FIRST_VERTEX_ID,
};
