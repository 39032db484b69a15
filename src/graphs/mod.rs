use serde::{Deserialize, Serialize};

pub mod graph_functions;
pub mod hash_graph;
pub mod path;

pub type VertexId = u32;

/// Flight weight (distance, cost, time). Unsigned on purpose: Dijkstra
/// requires non-negative weights, so negative values are unrepresentable.
pub type Weight = u32;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub tail: VertexId,
    pub head: VertexId,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(tail: VertexId, head: VertexId, weight: Weight) -> WeightedEdge {
        WeightedEdge { tail, head, weight }
    }

    pub fn reversed(&self) -> WeightedEdge {
        WeightedEdge {
            tail: self.head,
            head: self.tail,
            weight: self.weight,
        }
    }

    pub fn remove_tail(&self) -> TaillessEdge {
        TaillessEdge {
            head: self.head,
            weight: self.weight,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaillessEdge {
    pub head: VertexId,
    pub weight: Weight,
}

impl TaillessEdge {
    pub fn set_tail(&self, tail: VertexId) -> WeightedEdge {
        WeightedEdge {
            tail,
            head: self.head,
            weight: self.weight,
        }
    }
}

pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    /// Number of directed adjacency entries. An undirected insertion
    /// contributes two.
    fn number_of_edges(&self) -> u32 {
        self.vertices()
            .iter()
            .map(|&vertex| self.edges(vertex).len() as u32)
            .sum::<u32>()
    }

    /// All vertices that appear as adjacency keys, in no particular order.
    fn vertices(&self) -> Vec<VertexId>;

    fn contains_vertex(&self, vertex: VertexId) -> bool;

    /// Outgoing edges of `tail`. A vertex that was never inserted yields an
    /// empty iterator, not a panic.
    fn edges(&self, tail: VertexId) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_>;

    /// Inserts the undirected connection tail <-> head. Both endpoints become
    /// adjacency keys, so a vertex referenced as a neighbor is always
    /// reachable as a key. Parallel edges are kept, not deduplicated.
    fn add_edge_bidirectional(&mut self, tail: VertexId, head: VertexId, weight: Weight);
}
