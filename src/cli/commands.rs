//! CLI command implementations.

use std::path::Path;

use crate::engine::GraphInspector;
use crate::format::{EdgeListReader, LoadOptions};
use crate::graph::{bfs, dfs, maximum_matching, TraversalOrder};
use crate::types::GraphResult;

fn print_json(value: &impl serde::Serialize, pretty: bool) {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    println!("{}", text.unwrap_or_default());
}

/// Display size, modes and degree figures of an edge-list file.
pub fn cmd_info(path: &Path, options: LoadOptions, json: bool) -> GraphResult<()> {
    let graph = EdgeListReader::new(options).read_from_file(path)?;
    let stats = GraphInspector::stats(&graph);

    if json {
        print_json(&stats, true);
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", stats.description.vertex_count);
        println!("Edges: {}", stats.description.edge_count);
        println!(
            "Directed: {}",
            if stats.description.is_directed { "yes" } else { "no" }
        );
        println!(
            "Weighted: {}",
            if stats.description.is_weighted { "yes" } else { "no" }
        );
        println!("Avg degree: {:.2}", stats.average_degree);
        println!("Max degree: {}", stats.max_degree);
        println!("Isolated vertices: {}", stats.isolated_vertices);
        if stats.left_side + stats.right_side > 0 {
            println!("Sides: {} left, {} right", stats.left_side, stats.right_side);
        }
    }
    Ok(())
}

/// Run BFS or DFS from a vertex of an edge-list file.
pub fn cmd_traverse(
    path: &Path,
    start: &str,
    order: TraversalOrder,
    directed: bool,
    json: bool,
) -> GraphResult<()> {
    let graph = EdgeListReader::new(LoadOptions {
        directed,
        ..LoadOptions::default()
    })
    .read_from_file(path)?;

    let result = match order {
        TraversalOrder::Breadth => bfs(&graph, start)?,
        TraversalOrder::Depth => dfs(&graph, start)?,
    };

    if json {
        print_json(&result, true);
    } else {
        println!(
            "{} from {}: {}",
            order.name().to_uppercase(),
            start,
            result.visited.join(", ")
        );
        for (from, to) in &result.tree_edges {
            let arrow = if directed { "->" } else { "--" };
            println!("  {} {} {}", from, arrow, to);
        }
    }
    Ok(())
}

/// Compute a maximum matching of an edge-list file.
pub fn cmd_match(path: &Path, json: bool) -> GraphResult<()> {
    let graph = EdgeListReader::default().read_from_file(path)?;
    let matching = maximum_matching(&graph)?;

    if json {
        print_json(&matching, true);
    } else {
        println!("Matching size: {}", matching.size());
        for (u, v) in matching.pairs() {
            println!("  {} -- {}", u, v);
        }
    }
    Ok(())
}

/// Export vertices and edges as JSON elements.
pub fn cmd_export(path: &Path, options: LoadOptions, pretty: bool) -> GraphResult<()> {
    let graph = EdgeListReader::new(options).read_from_file(path)?;
    print_json(&GraphInspector::export(&graph), pretty);
    Ok(())
}
