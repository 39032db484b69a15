use serde::{Deserialize, Serialize};

use super::{VertexId, Weight};

/// A route through the network, source first, target last, with the total
/// weight of all hops. A route from a vertex to itself has one vertex and
/// weight zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<VertexId>,
    pub weight: Weight,
}

pub trait PathFinding: Send + Sync {
    /// Returns a minimum-weight route, or `None` if `target` cannot be
    /// reached from `source`. A vertex unknown to the graph is unreachable.
    fn shortest_path(&self, source: VertexId, target: VertexId) -> Option<Path>;

    fn shortest_path_weight(&self, source: VertexId, target: VertexId) -> Option<Weight> {
        self.shortest_path(source, target).map(|path| path.weight)
    }
}
