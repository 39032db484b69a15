use std::{cmp::Reverse, collections::BinaryHeap};

use crate::graphs::{VertexId, Weight};

/// Min-priority frontier of (distance, vertex) entries. Distances are never
/// decreased in place; improvements insert a duplicate entry and stale pops
/// are skipped by the caller.
pub struct VertexDistanceQueue {
    heap: BinaryHeap<Reverse<(Weight, VertexId)>>,
}

impl Default for VertexDistanceQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexDistanceQueue {
    pub fn new() -> VertexDistanceQueue {
        VertexDistanceQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn insert(&mut self, vertex: VertexId, distance: Weight) {
        self.heap.push(Reverse((distance, vertex)));
    }

    /// Removes and returns the vertex with the smallest distance, or `None`
    /// if the frontier is exhausted.
    pub fn pop(&mut self) -> Option<VertexId> {
        let Reverse((_distance, vertex)) = self.heap.pop()?;

        Some(vertex)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
