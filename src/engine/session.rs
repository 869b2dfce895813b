//! A single editing session: one graph, one command at a time.

use std::path::{Path, PathBuf};

use crate::config::WorkbenchConfig;
use crate::format::{EdgeListReader, EdgeListWriter, LoadOptions};
use crate::graph::{bfs, dfs, maximum_matching, GraphStore, Matching, Traversal};
use crate::types::{Edge, GraphResult, Side, VertexId, Weight};

use super::command::{Command, Outcome};
use super::inspect::{Description, Elements, GraphInspector, GraphStats};

/// Owns the graph being edited and runs commands against it.
///
/// Every mutating operation takes `&mut self`, so a caller sharing a session
/// across threads has to put it behind its own lock.
pub struct Workbench {
    graph: GraphStore,
    config: WorkbenchConfig,
}

impl Workbench {
    /// Start a session with an empty graph in the configured modes.
    pub fn new(config: WorkbenchConfig) -> Self {
        Self {
            graph: GraphStore::new(config.directed, config.weighted),
            config,
        }
    }

    /// Start a session around an existing graph.
    pub fn with_graph(graph: GraphStore, config: WorkbenchConfig) -> Self {
        Self { graph, config }
    }

    /// The current graph.
    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    /// The session configuration.
    pub fn config(&self) -> &WorkbenchConfig {
        &self.config
    }

    pub fn add_vertex(&mut self) -> GraphResult<VertexId> {
        self.graph.add_vertex()
    }

    pub fn add_vertex_named(&mut self, id: &str) -> GraphResult<()> {
        self.graph.add_vertex_named(id)
    }

    pub fn add_bipartite_vertex(&mut self) -> GraphResult<(VertexId, Side)> {
        self.graph.add_bipartite_vertex()
    }

    pub fn remove_vertex(&mut self, id: &str) -> GraphResult<Vec<Edge>> {
        self.graph.remove_vertex(id)
    }

    pub fn add_edge(&mut self, u: &str, v: &str, weight: Option<Weight>) -> GraphResult<()> {
        self.graph.add_edge(u, v, weight)
    }

    pub fn remove_edge(&mut self, u: &str, v: &str) -> bool {
        self.graph.remove_edge(u, v)
    }

    pub fn set_weight(&mut self, u: &str, v: &str, weight: Weight) -> GraphResult<()> {
        self.graph.set_weight(u, v, weight)
    }

    /// Switch directedness; returns the number of merged opposite edges.
    pub fn set_directed(&mut self, directed: bool) -> usize {
        self.graph.set_directed(directed)
    }

    pub fn set_weighted(&mut self, weighted: bool) {
        self.graph.set_weighted(weighted)
    }

    pub fn bfs(&self, start: &str) -> GraphResult<Traversal> {
        bfs(&self.graph, start)
    }

    pub fn dfs(&self, start: &str) -> GraphResult<Traversal> {
        dfs(&self.graph, start)
    }

    /// Matching of the current graph. The graph is left untouched.
    pub fn maximum_matching(&self) -> GraphResult<Matching> {
        maximum_matching(&self.graph)
    }

    pub fn describe(&self) -> Description {
        GraphInspector::describe(&self.graph)
    }

    pub fn stats(&self) -> GraphStats {
        GraphInspector::stats(&self.graph)
    }

    pub fn export(&self) -> Elements {
        GraphInspector::export(&self.graph)
    }

    fn resolve_path(&self, path: Option<&Path>) -> PathBuf {
        path.map(Path::to_path_buf)
            .unwrap_or_else(|| self.config.data_file.clone())
    }

    /// Replace the graph with the contents of an edge-list file.
    ///
    /// The new graph keeps the session's directedness and takes bipartite
    /// sides from the configuration. Weight memory starts empty. On error the
    /// current graph is kept.
    pub fn load(&mut self, path: Option<&Path>) -> GraphResult<PathBuf> {
        let path = self.resolve_path(path);
        let reader = EdgeListReader::new(LoadOptions {
            directed: self.graph.is_directed(),
            weighted: false,
            bipartite: self.config.bipartite,
        });
        self.graph = reader.read_from_file(&path)?;
        Ok(path)
    }

    /// Replace the graph with edge-list text held in memory.
    pub fn load_contents(&mut self, contents: &str, options: LoadOptions) -> GraphResult<()> {
        self.graph = EdgeListReader::new(options).parse(contents)?;
        Ok(())
    }

    /// Write the edge list. Weights are not written.
    pub fn save(&self, path: Option<&Path>) -> GraphResult<PathBuf> {
        let path = self.resolve_path(path);
        EdgeListWriter::write_to_file(&self.graph, &path)?;
        Ok(path)
    }

    /// Run one command.
    pub fn execute(&mut self, command: Command) -> GraphResult<Outcome> {
        log::debug!("execute {:?}", command);
        let outcome = match command {
            Command::AddVertex => Outcome::VertexAdded {
                id: self.add_vertex()?,
                side: None,
            },
            Command::AddVertexNamed { id } => {
                self.add_vertex_named(&id)?;
                Outcome::VertexAdded { id, side: None }
            }
            Command::AddBipartiteVertex => {
                let (id, side) = self.add_bipartite_vertex()?;
                Outcome::VertexAdded {
                    id,
                    side: Some(side),
                }
            }
            Command::RemoveVertex { id } => {
                let removed = self.remove_vertex(&id)?;
                Outcome::VertexRemoved {
                    id,
                    removed_edges: removed.len(),
                }
            }
            Command::AddEdge {
                source,
                target,
                weight,
            } => {
                self.add_edge(&source, &target, weight)?;
                Outcome::EdgeAdded { source, target }
            }
            Command::RemoveEdge { source, target } => {
                let removed = self.remove_edge(&source, &target);
                Outcome::EdgeRemoved {
                    source,
                    target,
                    removed,
                }
            }
            Command::SetWeight {
                source,
                target,
                weight,
            } => {
                self.set_weight(&source, &target, weight)?;
                Outcome::WeightSet {
                    source,
                    target,
                    weight,
                }
            }
            Command::SetDirected { directed } => {
                let dropped_edges = self.set_directed(directed);
                self.mode_changed(dropped_edges)
            }
            Command::SetWeighted { weighted } => {
                self.set_weighted(weighted);
                self.mode_changed(0)
            }
            Command::Bfs { start } => Outcome::Traversal(self.bfs(&start)?),
            Command::Dfs { start } => Outcome::Traversal(self.dfs(&start)?),
            Command::MaximumMatching => Outcome::Matching(self.maximum_matching()?),
            Command::Describe => Outcome::Description(self.describe()),
            Command::Stats => Outcome::Stats(self.stats()),
            Command::Export => Outcome::Elements(self.export()),
            Command::Load { path } => {
                let path = self.load(path.as_deref())?;
                Outcome::Loaded {
                    path,
                    vertices: self.graph.vertex_count(),
                    edges: self.graph.edge_count(),
                }
            }
            Command::Save { path } => {
                let path = self.save(path.as_deref())?;
                Outcome::Saved {
                    path,
                    edges: self.graph.edge_count(),
                }
            }
        };
        Ok(outcome)
    }

    fn mode_changed(&self, dropped_edges: usize) -> Outcome {
        Outcome::ModeChanged {
            directed: self.graph.is_directed(),
            weighted: self.graph.is_weighted(),
            dropped_edges,
        }
    }
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new(WorkbenchConfig::default())
    }
}
