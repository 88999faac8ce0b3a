use std::{cmp::Reverse, collections::BinaryHeap};

use crate::types::EdgeId;

/// Min-queue of edges for the cascading pruning passes.
///
/// Entries are never updated nor removed: an edge that became irrelevant is
/// left in the queue and has to be checked again once popped. The insertion
/// sequence breaks ties so two edges with the same priority never compare
/// equal and are popped in the order they were pushed.
pub(crate) struct CascadeQueue<P>
where
    P: Ord,
{
    heap: BinaryHeap<Reverse<(P, u64, EdgeId)>>,
    sequence: u64,
}

impl<P> CascadeQueue<P>
where
    P: Ord,
{
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            sequence: 0,
        }
    }

    pub fn push(&mut self, edge: EdgeId, priority: P) {
        self.heap.push(Reverse((priority, self.sequence, edge)));
        self.sequence += 1;
    }

    pub fn pop(&mut self) -> Option<EdgeId> {
        self.heap.pop().map(|Reverse((_, _, edge))| edge)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
