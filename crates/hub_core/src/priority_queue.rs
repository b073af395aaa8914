use std::collections::BinaryHeap;

use crate::constants::Weight;
use crate::graph::HubIndex;

/// Priority queue implementation using a binary heap.
/// The heap is a min heap, so the item with the smallest distance is always at the top.
/// Items with equal distance are ordered by their sequence number, lowest first.
#[derive(Debug, Default)]
pub struct PriorityQueue {
    heap: BinaryHeap<HeapItem>,
}

impl PriorityQueue {
    pub fn new() -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, item: HeapItem) {
        self.heap.push(item);
    }

    pub fn pop(&mut self) -> Option<HeapItem> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[derive(Copy, Clone, Debug)]
pub struct HeapItem {
    pub distance: Weight,
    pub seq: u64,
    pub hub: HubIndex,
}

impl HeapItem {
    pub fn new(distance: Weight, seq: u64, hub: HubIndex) -> Self {
        HeapItem { distance, seq, hub }
    }
}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.seq == other.seq
    }
}

impl Eq for HeapItem {}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed, so the smallest element is at the top of the heap
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
