use ahash::{HashMap, HashMapExt};

use crate::graphs::{path::Path, VertexId, Weight};

/// Distance and predecessor bookkeeping for a single Dijkstra run. Both maps
/// are sparse: a vertex absent from `distances` has distance infinity, a
/// vertex absent from `predecessors` has none (the source, or undiscovered).
pub struct DijkstraData {
    distances: HashMap<VertexId, Weight>,
    predecessors: HashMap<VertexId, VertexId>,
}

impl Default for DijkstraData {
    fn default() -> Self {
        Self::new()
    }
}

impl DijkstraData {
    pub fn new() -> DijkstraData {
        DijkstraData {
            distances: HashMap::new(),
            predecessors: HashMap::new(),
        }
    }

    pub fn get_distance(&self, vertex: VertexId) -> Option<Weight> {
        self.distances.get(&vertex).copied()
    }

    pub fn set_distance(&mut self, vertex: VertexId, distance: Weight) {
        self.distances.insert(vertex, distance);
    }

    pub fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(&vertex).copied()
    }

    pub fn set_predecessor(&mut self, vertex: VertexId, predecessor: VertexId) {
        self.predecessors.insert(vertex, predecessor);
    }

    /// Traces predecessors back from `target` and reverses the collected
    /// vertices into source-to-target order. Returns `None` if `target` was
    /// never reached.
    pub fn get_path(&self, target: VertexId) -> Option<Path> {
        let weight = self.get_distance(target)?;

        let mut vertices = vec![target];

        let mut predecessor = target;
        while let Some(new_predecessor) = self.get_predecessor(predecessor) {
            predecessor = new_predecessor;
            vertices.push(predecessor);
        }

        vertices.reverse();

        Some(Path { vertices, weight })
    }
}
