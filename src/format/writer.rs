//! Writes a graph as an edge list.

use std::io::Write;
use std::path::Path;

use crate::graph::GraphStore;
use crate::types::error::GraphResult;

/// Writer for edge-list text.
///
/// Emits one `source,target` line per edge in stored order. Weights and
/// isolated vertices are not written.
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Write a complete GraphStore to an edge-list file.
    pub fn write_to_file(graph: &GraphStore, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(graph, &mut writer)?;
        writer.flush()?;
        log::info!("saved {} edges to {}", graph.edge_count(), path.display());
        Ok(())
    }

    /// Write a complete GraphStore to any writer.
    pub fn write_to(graph: &GraphStore, writer: &mut impl Write) -> GraphResult<()> {
        for edge in graph.edges() {
            writeln!(writer, "{},{}", edge.source, edge.target)?;
        }
        Ok(())
    }

    /// Render the edge list as a string.
    pub fn to_text(graph: &GraphStore) -> String {
        graph
            .edges()
            .iter()
            .map(|e| format!("{},{}\n", e.source, e.target))
            .collect()
    }
}
