use ahash::{HashSet, HashSetExt};

use super::{dijkstra_data::DijkstraData, queue::VertexDistanceQueue};
use crate::graphs::{
    path::{Path, PathFinding},
    Graph, VertexId, Weight,
};

/// Label-setting shortest-path solver over an owned graph.
pub struct Dijkstra {
    pub graph: Box<dyn Graph>,
}

impl PathFinding for Dijkstra {
    fn shortest_path(&self, source: VertexId, target: VertexId) -> Option<Path> {
        shortest_path(&*self.graph, source, target)
    }
}

pub fn shortest_path(graph: &dyn Graph, source: VertexId, target: VertexId) -> Option<Path> {
    // Vertices without any edge are not part of the network.
    if !graph.contains_vertex(source) || !graph.contains_vertex(target) {
        return None;
    }

    let data = dijkstra_single_pair(graph, source, target);
    data.get_path(target)
}

pub fn shortest_path_weight(
    graph: &dyn Graph,
    source: VertexId,
    target: VertexId,
) -> Option<Weight> {
    shortest_path(graph, source, target).map(|path| path.weight)
}

/// Runs Dijkstra from `source`, stopping as soon as `target` is expanded.
/// Once a vertex is popped at its final distance its label is settled, so
/// expanding the target finalizes the shortest distance to it.
pub fn dijkstra_single_pair(
    graph: &dyn Graph,
    source: VertexId,
    target: VertexId,
) -> DijkstraData {
    let mut data = DijkstraData::new();
    let mut expanded = HashSet::new();
    let mut queue = VertexDistanceQueue::new();

    data.set_distance(source, 0);
    queue.insert(source, 0);

    while let Some(tail) = queue.pop() {
        // Stale entry, the vertex was already expanded at a smaller distance.
        if !expanded.insert(tail) {
            continue;
        }
        if tail == target {
            break;
        }

        // Every queued vertex had its distance set before insertion.
        let distance_tail = data.get_distance(tail).unwrap();

        for edge in graph.edges(tail) {
            let current_distance_head = data.get_distance(edge.head).unwrap_or(Weight::MAX);
            let alternative_distance_head = distance_tail + edge.weight;
            if alternative_distance_head < current_distance_head {
                data.set_distance(edge.head, alternative_distance_head);
                data.set_predecessor(edge.head, tail);
                queue.insert(edge.head, alternative_distance_head);
            }
        }
    }

    data
}
