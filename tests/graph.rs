use flight_routes::graphs::{
    graph_functions::{all_edges, neighbors, sample_flight_network},
    hash_graph::HashGraph,
    Graph, WeightedEdge,
};

#[test]
fn unknown_vertex_has_no_edges() {
    let graph = sample_flight_network();

    assert_eq!(graph.edges(99).len(), 0);
    assert!(neighbors(&graph, 99).is_empty());
    assert!(!graph.contains_vertex(99));
}

#[test]
fn insertion_keys_both_endpoints() {
    let mut graph = HashGraph::new();
    graph.add_edge_bidirectional(7, 8, 3);

    // The head-only vertex must be an adjacency key of its own.
    assert!(graph.contains_vertex(7));
    assert!(graph.contains_vertex(8));
    assert_eq!(graph.number_of_vertices(), 2);

    let back_edges = graph.edges(8).collect::<Vec<_>>();
    assert_eq!(back_edges, vec![WeightedEdge::new(8, 7, 3)]);
}

#[test]
fn duplicate_insertions_append_parallel_edges() {
    let mut graph = HashGraph::new();
    graph.add_edge_bidirectional(1, 2, 5);
    graph.add_edge_bidirectional(1, 2, 5);

    assert_eq!(graph.edges(1).len(), 2);
    assert_eq!(graph.edges(2).len(), 2);
    assert_eq!(graph.number_of_edges(), 4);
}

#[test]
fn every_edge_has_a_symmetric_back_entry() {
    let graph = sample_flight_network();

    for edge in all_edges(&graph) {
        assert!(
            graph
                .edges(edge.head)
                .any(|back_edge| back_edge == edge.reversed()),
            "missing back entry for {:?}",
            edge
        );
    }
}

#[test]
fn sample_network_shape() {
    let graph = sample_flight_network();

    assert_eq!(graph.number_of_vertices(), 4);
    // Five undirected flights, stored as ten directed entries.
    assert_eq!(graph.number_of_edges(), 10);

    let mut vertices = graph.vertices();
    vertices.sort_unstable();
    assert_eq!(vertices, vec![1, 2, 3, 4]);
}
