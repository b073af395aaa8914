use std::fmt;

use crate::{constants::Weight, graph::Hub};

/// Route from the source of a [`HubMap`](crate::graph::HubMap) to a destination.
///
/// `hubs` is empty and `distance` is [`UNREACHABLE`](crate::constants::UNREACHABLE)
/// if the destination cannot be reached.
#[derive(Debug, PartialEq, Clone)]
pub struct ShortestPath<'a> {
    pub hubs: Vec<&'a Hub>,
    pub distance: Weight,
}

impl<'a> ShortestPath<'a> {
    pub fn new(hubs: Vec<&'a Hub>, distance: Weight) -> Self {
        ShortestPath { hubs, distance }
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.hubs.iter().map(|hub| hub.name()).collect()
    }

    pub fn is_reachable(&self) -> bool {
        !self.hubs.is_empty()
    }
}

impl fmt::Display for ShortestPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_reachable() {
            return write!(f, "unreachable");
        }
        write!(f, "{} ({:.3})", self.names().join(" -> "), self.distance)
    }
}
