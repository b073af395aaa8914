//! Candidate sets for the shortest path search.
//!
//! A frontier holds the hubs that have been reached but are not settled yet.
//! Both implementations hand out the hub with the smallest distance and, among
//! equal distances, the hub that entered the frontier first. A search therefore
//! produces the same paths no matter which frontier it runs on.
use std::fmt;

use clap::ValueEnum;

use crate::{
    constants::Weight,
    graph::{Hub, HubIndex},
    priority_queue::{HeapItem, PriorityQueue},
};

/// Selects the frontier a [`HubMap`](crate::graph::HubMap) is built with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FrontierStrategy {
    /// Scan all candidates for the minimum, O(frontier) per step
    #[default]
    #[value(name = "scan")]
    LinearScan,
    /// Binary heap with lazy deletion of outdated entries
    #[value(name = "heap")]
    BinaryHeap,
}

impl fmt::Display for FrontierStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontierStrategy::LinearScan => write!(f, "scan"),
            FrontierStrategy::BinaryHeap => write!(f, "heap"),
        }
    }
}

pub(crate) trait Frontier {
    /// Adds `hub` or records that its distance improved to `distance`.
    fn push(&mut self, hub: HubIndex, distance: Weight);

    fn contains(&self, hub: HubIndex) -> bool;

    /// Removes the hub with the smallest distance, the earliest added one on ties.
    fn pop_min(&mut self, hubs: &[Hub]) -> Option<HubIndex>;
}

pub(crate) struct LinearFrontier {
    members: Vec<HubIndex>,
    in_frontier: Vec<bool>,
}

impl LinearFrontier {
    pub(crate) fn new(num_hubs: usize) -> Self {
        LinearFrontier {
            members: Vec::new(),
            in_frontier: vec![false; num_hubs],
        }
    }
}

impl Frontier for LinearFrontier {
    fn push(&mut self, hub: HubIndex, _distance: Weight) {
        // Distances are read at selection time, position is all that is kept
        if !self.in_frontier[hub.index()] {
            self.in_frontier[hub.index()] = true;
            self.members.push(hub);
        }
    }

    fn contains(&self, hub: HubIndex) -> bool {
        self.in_frontier[hub.index()]
    }

    fn pop_min(&mut self, hubs: &[Hub]) -> Option<HubIndex> {
        let mut min: Option<(usize, Weight)> = None;
        for (pos, hub) in self.members.iter().enumerate() {
            let distance = hubs[hub.index()].distance();
            if min.map_or(true, |(_, min_distance)| distance < min_distance) {
                min = Some((pos, distance));
            }
        }

        let (pos, _) = min?;
        let hub = self.members.remove(pos);
        self.in_frontier[hub.index()] = false;
        Some(hub)
    }
}

pub(crate) struct HeapFrontier {
    queue: PriorityQueue,
    /// Sequence number of hubs currently in the frontier
    seq: Vec<Option<u64>>,
    next_seq: u64,
}

impl HeapFrontier {
    pub(crate) fn new(num_hubs: usize) -> Self {
        HeapFrontier {
            queue: PriorityQueue::new(),
            seq: vec![None; num_hubs],
            next_seq: 0,
        }
    }
}

impl Frontier for HeapFrontier {
    fn push(&mut self, hub: HubIndex, distance: Weight) {
        // A hub keeps the sequence number it entered with, like a position in the scan
        let seq = match self.seq[hub.index()] {
            Some(seq) => seq,
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.seq[hub.index()] = Some(seq);
                seq
            }
        };
        self.queue.push(HeapItem::new(distance, seq, hub));
    }

    fn contains(&self, hub: HubIndex) -> bool {
        self.seq[hub.index()].is_some()
    }

    fn pop_min(&mut self, hubs: &[Hub]) -> Option<HubIndex> {
        while let Some(HeapItem { distance, hub, .. }) = self.queue.pop() {
            // Already settled, or superseded by an entry with a smaller distance
            if self.seq[hub.index()].is_none() || distance > hubs[hub.index()].distance() {
                continue;
            }
            self.seq[hub.index()] = None;
            return Some(hub);
        }
        None
    }
}
