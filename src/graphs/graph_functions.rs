use ahash::{HashSet, HashSetExt};
use itertools::Itertools;
use rand::prelude::*;

use super::{hash_graph::HashGraph, path::Path, Graph, VertexId, Weight, WeightedEdge};

pub fn all_edges(graph: &dyn Graph) -> Vec<WeightedEdge> {
    graph
        .vertices()
        .iter()
        .sorted()
        .flat_map(|&vertex| graph.edges(vertex))
        .collect()
}

pub fn neighbors(graph: &dyn Graph, vertex: VertexId) -> HashSet<VertexId> {
    graph.edges(vertex).map(|edge| edge.head).collect()
}

/// The five-flight demo network: cities 1 to 4, cheapest route from 1 to 4 is
/// 1 -> 2 -> 3 -> 4 with weight 10.
pub fn sample_flight_network() -> HashGraph {
    HashGraph::from_edges(&[
        WeightedEdge::new(1, 2, 5),
        WeightedEdge::new(1, 3, 10),
        WeightedEdge::new(2, 3, 3),
        WeightedEdge::new(2, 4, 8),
        WeightedEdge::new(3, 4, 2),
    ])
}

/// Random (source, target) pairs drawn from the graph's vertices, for
/// cross-checking solvers against each other.
pub fn random_shortest_path_requests(
    graph: &dyn Graph,
    number_of_requests: u32,
    rng: &mut impl Rng,
) -> Vec<(VertexId, VertexId)> {
    let vertices = graph.vertices();
    (0..number_of_requests)
        .map(|_| {
            let source = *vertices.choose(rng).unwrap();
            let target = *vertices.choose(rng).unwrap();
            (source, target)
        })
        .collect()
}

/// Exhaustive minimum weight over all simple paths. Exponential, only usable
/// on small graphs; serves as the reference the solver is validated against.
pub fn brute_force_shortest_path_weight(
    graph: &dyn Graph,
    source: VertexId,
    target: VertexId,
) -> Option<Weight> {
    if !graph.contains_vertex(source) || !graph.contains_vertex(target) {
        return None;
    }

    let mut visited = HashSet::new();
    visited.insert(source);

    fn explore(
        graph: &dyn Graph,
        current: VertexId,
        target: VertexId,
        weight: Weight,
        visited: &mut HashSet<VertexId>,
    ) -> Option<Weight> {
        if current == target {
            return Some(weight);
        }

        let mut best = None;
        for edge in graph.edges(current) {
            if !visited.insert(edge.head) {
                continue;
            }
            if let Some(total) = explore(graph, edge.head, target, weight + edge.weight, visited) {
                if best.map_or(true, |b| total < b) {
                    best = Some(total);
                }
            }
            visited.remove(&edge.head);
        }
        best
    }

    explore(graph, source, target, 0, &mut visited)
}

/// Checks that a solver answer is consistent with the graph and an expected
/// weight: endpoints match the request, consecutive vertices are connected,
/// hop weights sum to the reported total.
pub fn validate_path(
    graph: &dyn Graph,
    source: VertexId,
    target: VertexId,
    expected_weight: Option<Weight>,
    path: &Option<Path>,
) -> Result<(), String> {
    let path = match (path, expected_weight) {
        (Some(path), Some(_)) => path,
        (None, None) => return Ok(()),
        (Some(_), None) => return Err("a path was found where there should be none".to_string()),
        (None, Some(_)) => return Err("no path is found but there should be one".to_string()),
    };

    if path.vertices.first() != Some(&source) {
        return Err("first vertex of path is not the requested source".to_string());
    }
    if path.vertices.last() != Some(&target) {
        return Err("last vertex of path is not the requested target".to_string());
    }

    // The cheapest parallel edge counts for each hop.
    let mut true_weight: Weight = 0;
    for (&tail, &head) in path.vertices.iter().tuple_windows() {
        match graph
            .edges(tail)
            .filter(|edge| edge.head == head)
            .map(|edge| edge.weight)
            .min()
        {
            Some(weight) => true_weight += weight,
            None => return Err(format!("no edge between {} and {} found", tail, head)),
        }
    }

    if path.weight != true_weight {
        return Err("path weight does not match the sum of its hops".to_string());
    }
    if Some(path.weight) != expected_weight {
        return Err("wrong path weight".to_string());
    }

    Ok(())
}
