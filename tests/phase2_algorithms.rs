//! Phase 2 tests: traversal, matching, and inspection.

use std::collections::{BTreeSet, HashSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use graph_workbench::engine::GraphInspector;
use graph_workbench::format::EdgeListReader;
use graph_workbench::graph::{bfs, dfs, maximum_matching, GraphBuilder, GraphStore, Matching};
use graph_workbench::types::GraphError;

// ==================== Helper ====================

fn pair(u: &str, v: &str) -> (String, String) {
    (u.to_string(), v.to_string())
}

/// Size of a maximum matching by exhaustive search over the edge list.
fn brute_force_matching(edges: &[(String, String)], used: &mut HashSet<String>, from: usize) -> usize {
    let mut best = 0;
    for i in from..edges.len() {
        let (u, v) = &edges[i];
        if used.contains(u) || used.contains(v) {
            continue;
        }
        used.insert(u.clone());
        used.insert(v.clone());
        best = best.max(1 + brute_force_matching(edges, used, i + 1));
        used.remove(u);
        used.remove(v);
    }
    best
}

/// Check that every pair is an edge and no vertex is used twice.
fn assert_valid_matching(graph: &GraphStore, matching: &Matching) {
    for (u, v) in &matching.mates {
        assert_eq!(
            matching.mate(v),
            Some(u.as_str()),
            "mapping is not symmetric for {} -> {}",
            u,
            v
        );
        assert!(graph.has_edge(u, v), "{}-{} is not an edge", u, v);
    }
}

fn random_graph(rng: &mut StdRng, vertex_count: usize, density: f64) -> GraphStore {
    let ids: Vec<String> = (0..vertex_count)
        .map(|i| char::from(b'A' + i as u8).to_string())
        .collect();
    let mut builder = GraphBuilder::new();
    for id in &ids {
        builder = builder.vertex(id);
    }
    for i in 0..vertex_count {
        for j in (i + 1)..vertex_count {
            if rng.gen_bool(density) {
                builder = builder.link(&ids[i], &ids[j]);
            }
        }
    }
    builder.build().unwrap()
}

// ==================== BFS Tests ====================

#[test]
fn test_bfs_path() {
    let graph = GraphBuilder::new().path(&["A", "B", "C"]).build().unwrap();
    let result = bfs(&graph, "A").unwrap();

    assert_eq!(result.visited, ["A", "B", "C"]);
    assert_eq!(result.tree_edges, vec![pair("A", "B"), pair("B", "C")]);
    assert!(result.traversed_edge("A", "B"));
    assert!(result.traversed_edge("B", "A"));
    assert!(result.traversed_edge("B", "C"));
    assert!(result.traversed_edge("C", "B"));
    assert_eq!(result.traversed.len(), 4);
}

#[test]
fn test_bfs_level_order() {
    let graph = GraphBuilder::new()
        .link("A", "B")
        .link("A", "C")
        .link("B", "D")
        .link("C", "D")
        .build()
        .unwrap();
    let result = bfs(&graph, "A").unwrap();

    assert_eq!(result.visited, ["A", "B", "C", "D"]);
    assert_eq!(
        result.tree_edges,
        vec![pair("A", "B"), pair("A", "C"), pair("B", "D")]
    );
    // D was still queued when C was expanded.
    assert!(result.traversed_edge("C", "D"));
    assert_eq!(result.traversed.len(), 8);
}

#[test]
fn test_bfs_marks_every_edge_of_triangle() {
    let graph = EdgeListReader::default().parse("B,C\nA,C\nA,B\n").unwrap();
    let result = bfs(&graph, "B").unwrap();

    assert_eq!(result.visited, ["B", "C", "A"]);
    assert_eq!(result.tree_edges, vec![pair("B", "C"), pair("B", "A")]);
    let expected: BTreeSet<(String, String)> = [
        pair("A", "B"),
        pair("B", "A"),
        pair("A", "C"),
        pair("C", "A"),
        pair("B", "C"),
        pair("C", "B"),
    ]
    .into_iter()
    .collect();
    assert_eq!(result.traversed, expected);
}

#[test]
fn test_bfs_directed_marks_edges_to_queued_vertices() {
    let graph = GraphBuilder::new()
        .directed(true)
        .link("A", "B")
        .link("A", "C")
        .link("B", "C")
        .link("C", "A")
        .build()
        .unwrap();
    let result = bfs(&graph, "A").unwrap();

    assert_eq!(result.tree_edges, vec![pair("A", "B"), pair("A", "C")]);
    assert!(result.traversed_edge("B", "C"));
    assert!(!result.traversed_edge("C", "B"));
    // A is already visited when C is expanded.
    assert!(!result.traversed_edge("C", "A"));
    assert_eq!(result.traversed.len(), 3);
}

#[test]
fn test_bfs_stays_in_component() {
    let graph = GraphBuilder::new()
        .link("A", "B")
        .link("C", "D")
        .vertex("E")
        .build()
        .unwrap();
    let result = bfs(&graph, "A").unwrap();
    assert_eq!(result.visited, ["A", "B"]);

    let result = bfs(&graph, "E").unwrap();
    assert_eq!(result.visited, ["E"]);
    assert!(result.traversed.is_empty());
}

#[test]
fn test_bfs_directed_follows_successors() {
    let graph = GraphBuilder::new()
        .directed(true)
        .link("A", "B")
        .link("C", "A")
        .build()
        .unwrap();
    let result = bfs(&graph, "A").unwrap();

    assert_eq!(result.visited, ["A", "B"]);
    assert!(result.traversed_edge("A", "B"));
    assert!(!result.traversed_edge("B", "A"));
}

#[test]
fn test_traversal_invalid_start() {
    let graph = GraphBuilder::new().link("A", "B").build().unwrap();
    assert!(matches!(bfs(&graph, "Q"), Err(GraphError::InvalidVertex(_))));
    assert!(matches!(dfs(&graph, "Q"), Err(GraphError::InvalidVertex(_))));
}

// ==================== DFS Tests ====================

#[test]
fn test_dfs_path() {
    let graph = GraphBuilder::new().path(&["A", "B", "C"]).build().unwrap();
    let result = dfs(&graph, "A").unwrap();

    assert_eq!(result.visited, ["A", "B", "C"]);
    assert!(result.traversed_edge("A", "B"));
    assert!(result.traversed_edge("B", "C"));
    assert!(result.traversed_edge("C", "B"));
}

#[test]
fn test_dfs_goes_deep_first() {
    let graph = GraphBuilder::new()
        .link("A", "B")
        .link("A", "C")
        .link("B", "D")
        .link("C", "D")
        .build()
        .unwrap();
    let result = dfs(&graph, "A").unwrap();

    assert_eq!(result.visited, ["A", "B", "D", "C"]);
    assert_eq!(
        result.tree_edges,
        vec![pair("A", "B"), pair("B", "D"), pair("D", "C")]
    );
}

#[test]
fn test_dfs_marks_every_edge_of_triangle() {
    let graph = EdgeListReader::default().parse("B,C\nA,C\nA,B\n").unwrap();
    let result = dfs(&graph, "B").unwrap();

    assert_eq!(result.visited, ["B", "C", "A"]);
    assert_eq!(result.tree_edges, vec![pair("B", "C"), pair("C", "A")]);
    assert!(result.traversed_edge("B", "A"));
    assert!(result.traversed_edge("A", "B"));
    assert_eq!(result.traversed.len(), 6);
}

#[test]
fn test_dfs_visits_each_vertex_once_in_cycle() {
    let graph = GraphBuilder::new()
        .path(&["A", "B", "C", "D", "A"])
        .link("A", "C")
        .build()
        .unwrap();
    let result = dfs(&graph, "B").unwrap();

    let unique: HashSet<&String> = result.visited.iter().collect();
    assert_eq!(result.visited.len(), 4);
    assert_eq!(unique.len(), 4);
    assert_eq!(result.tree_edges.len(), 3);
}

#[test]
fn test_traversal_does_not_mutate() {
    let graph = GraphBuilder::new().path(&["A", "B", "C"]).build().unwrap();
    let before = graph.edges().to_vec();
    bfs(&graph, "A").unwrap();
    dfs(&graph, "C").unwrap();
    assert_eq!(graph.edges(), before.as_slice());
}

// ==================== Matching Tests ====================

#[test]
fn test_matching_four_cycle() {
    let graph = GraphBuilder::new()
        .path(&["A", "B", "C", "D", "A"])
        .build()
        .unwrap();
    let matching = maximum_matching(&graph).unwrap();

    assert_eq!(matching.size(), 2);
    assert!(matching.contains_pair("A", "B"));
    assert!(matching.contains_pair("B", "A"));
    assert!(matching.contains_pair("C", "D"));
    assert!(matching.contains_pair("D", "C"));
    assert_eq!(matching.pairs(), vec![pair("A", "B"), pair("C", "D")]);
}

#[test]
fn test_matching_star() {
    let graph = GraphBuilder::new()
        .link("A", "B")
        .link("A", "C")
        .link("A", "D")
        .build()
        .unwrap();
    let matching = maximum_matching(&graph).unwrap();

    assert_eq!(matching.size(), 1);
    assert_eq!(matching.mate("A"), Some("B"));
}

#[test]
fn test_matching_path_of_four() {
    let graph = GraphBuilder::new()
        .path(&["A", "B", "C", "D"])
        .build()
        .unwrap();
    let matching = maximum_matching(&graph).unwrap();

    assert_eq!(matching.size(), 2);
    assert!(matching.contains_pair("B", "A"));
    assert!(matching.contains_pair("C", "D"));
}

#[test]
fn test_matching_triangle() {
    let graph = GraphBuilder::new()
        .path(&["A", "B", "C", "A"])
        .build()
        .unwrap();
    let matching = maximum_matching(&graph).unwrap();

    assert_eq!(matching.size(), 1);
    assert_valid_matching(&graph, &matching);
}

#[test]
fn test_matching_skips_degree_one_starts() {
    // Both endpoints have degree one, so no search ever starts.
    let graph = GraphBuilder::new()
        .link("A", "B")
        .link("C", "D")
        .build()
        .unwrap();
    let matching = maximum_matching(&graph).unwrap();
    assert_eq!(matching.size(), 0);
    assert_eq!(matching.passes, 1);
}

#[test]
fn test_matching_follows_vertex_grouped_edge_order() {
    let graph = EdgeListReader::default()
        .parse("A,D\nC,B\nE,D\nA,C\nF,C\nF,B\n")
        .unwrap();
    let matching = maximum_matching(&graph).unwrap();

    assert_eq!(matching.size(), 3);
    assert_eq!(
        matching.pairs(),
        vec![pair("A", "C"), pair("B", "F"), pair("D", "E")]
    );
}

#[test]
fn test_matching_search_returning_to_start() {
    // In the first pass C reaches A, whose mate B leads back to C; the
    // relink keeps one pair. The second pass settles on A-B.
    let graph = GraphBuilder::new()
        .path(&["A", "B", "C", "A"])
        .build()
        .unwrap();
    let matching = maximum_matching(&graph).unwrap();

    assert_eq!(matching.pairs(), vec![pair("A", "B")]);
    assert_eq!(matching.mate("C"), None);
    assert_eq!(matching.passes, 2);
}

#[test]
fn test_matching_rejects_directed() {
    let graph = GraphBuilder::new()
        .directed(true)
        .link("A", "B")
        .build()
        .unwrap();
    assert!(matches!(
        maximum_matching(&graph),
        Err(GraphError::UnsupportedOperation(_))
    ));
}

#[test]
fn test_matching_is_a_pure_query() {
    let graph = GraphBuilder::new()
        .path(&["A", "B", "C", "D", "A"])
        .build()
        .unwrap();
    let before = graph.edges().to_vec();
    maximum_matching(&graph).unwrap();

    assert_eq!(graph.edges(), before.as_slice());
    assert!(!GraphInspector::describe(&graph).is_weighted);
}

#[test]
fn test_matching_against_brute_force() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for round in 0..200 {
        let vertex_count = rng.gen_range(2..=7);
        let graph = random_graph(&mut rng, vertex_count, 0.45);
        let matching = maximum_matching(&graph).unwrap();
        assert_valid_matching(&graph, &matching);

        let edges: Vec<(String, String)> = graph
            .edges()
            .iter()
            .map(|e| (e.source.clone(), e.target.clone()))
            .collect();
        let optimum = brute_force_matching(&edges, &mut HashSet::new(), 0);
        assert!(
            matching.size() <= optimum,
            "round {}: heuristic {} exceeds optimum {}",
            round,
            matching.size(),
            optimum
        );
    }
}

#[test]
fn test_matching_optimal_on_even_cycles() {
    for n in [4usize, 6, 8] {
        let ids: Vec<String> = (0..n)
            .map(|i| char::from(b'A' + i as u8).to_string())
            .collect();
        let mut path: Vec<&str> = ids.iter().map(String::as_str).collect();
        path.push(ids[0].as_str());
        let graph = GraphBuilder::new().path(&path).build().unwrap();

        let matching = maximum_matching(&graph).unwrap();
        assert_eq!(matching.size(), n / 2, "cycle of {}", n);
    }
}

// ==================== Inspector Tests ====================

#[test]
fn test_describe_counts_and_modes() {
    let mut graph = GraphBuilder::new()
        .path(&["A", "B", "C"])
        .vertex("D")
        .build()
        .unwrap();
    let description = GraphInspector::describe(&graph);
    assert_eq!(description.vertex_count, 4);
    assert_eq!(description.edge_count, 2);
    assert!(!description.is_directed);
    assert!(!description.is_weighted);

    graph.set_weight("A", "B", 2).unwrap();
    graph.set_directed(true);
    let description = GraphInspector::describe(&graph);
    assert!(description.is_directed);
    assert!(description.is_weighted);
}

#[test]
fn test_describe_weighted_needs_an_edge() {
    let mut graph = GraphStore::new(false, true);
    graph.add_vertex().unwrap();
    assert!(graph.is_weighted());
    assert!(!GraphInspector::describe(&graph).is_weighted);
}

#[test]
fn test_describe_display() {
    let graph = GraphBuilder::new().link("A", "B").build().unwrap();
    assert_eq!(
        GraphInspector::describe(&graph).to_string(),
        "Vertices: 2 Edges: 1 Directed: no Weighted: no"
    );
}

#[test]
fn test_stats_degrees() {
    let graph = GraphBuilder::new()
        .link("A", "B")
        .link("A", "C")
        .link("A", "D")
        .vertex("E")
        .build()
        .unwrap();
    let stats = GraphInspector::stats(&graph);

    assert_eq!(stats.max_degree, 3);
    assert_eq!(stats.isolated_vertices, 1);
    assert!((stats.average_degree - 6.0 / 5.0).abs() < f64::EPSILON);
}

#[test]
fn test_export_elements() {
    let graph = GraphBuilder::new()
        .weighted(true)
        .link_weighted("A", "B", 5)
        .build()
        .unwrap();
    let elements = GraphInspector::export(&graph);

    assert_eq!(elements.vertices.len(), 2);
    assert_eq!(elements.vertices[0].id, "A");
    assert_eq!(elements.edges[0].id, "A-B");
    assert_eq!(elements.edges[0].label, "5");
}
