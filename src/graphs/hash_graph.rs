use std::slice::Iter;

use ahash::{HashMap, HashMapExt};
use serde::{Deserialize, Serialize};

use super::{Graph, TaillessEdge, VertexId, Weight, WeightedEdge};

/// Adjacency-list graph keyed by vertex id. Vertex ids do not need to be
/// contiguous, which fits networks where cities carry external identifiers.
#[derive(Clone, Serialize, Deserialize)]
pub struct HashGraph {
    adjacency: HashMap<VertexId, Vec<TaillessEdge>>,
}

impl Default for HashGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl HashGraph {
    pub fn new() -> HashGraph {
        HashGraph {
            adjacency: HashMap::new(),
        }
    }

    /// Builds a graph from edges, inserting each one bidirectionally.
    pub fn from_edges(edges: &[WeightedEdge]) -> HashGraph {
        let mut graph = HashGraph::new();
        edges.iter().for_each(|edge| {
            graph.add_edge_bidirectional(edge.tail, edge.head, edge.weight);
        });
        graph
    }
}

impl Graph for HashGraph {
    fn number_of_vertices(&self) -> u32 {
        self.adjacency.len() as u32
    }

    fn number_of_edges(&self) -> u32 {
        self.adjacency.values().map(Vec::len).sum::<usize>() as u32
    }

    fn vertices(&self) -> Vec<VertexId> {
        self.adjacency.keys().copied().collect()
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    fn edges(&self, tail: VertexId) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        // Struct is needed as tail would otherwise not live long enough.
        struct EdgeIterator<'a> {
            edge_iter: Iter<'a, TaillessEdge>,
            tail: VertexId,
        }

        impl<'a> Iterator for EdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                self.edge_iter
                    .next()
                    .map(|tailless_edge| tailless_edge.set_tail(self.tail))
            }
        }

        impl<'a> ExactSizeIterator for EdgeIterator<'a> {
            fn len(&self) -> usize {
                self.edge_iter.len()
            }
        }

        let edge_iter = self
            .adjacency
            .get(&tail)
            .map(|edges| edges.iter())
            .unwrap_or_default();

        Box::new(EdgeIterator { edge_iter, tail })
    }

    fn add_edge_bidirectional(&mut self, tail: VertexId, head: VertexId, weight: Weight) {
        self.adjacency
            .entry(tail)
            .or_default()
            .push(TaillessEdge { head, weight });
        self.adjacency
            .entry(head)
            .or_default()
            .push(TaillessEdge { head: tail, weight });
    }
}
