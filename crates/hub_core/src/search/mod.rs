//! Shortest path search over a [`HubMap`](crate::graph::HubMap).
pub mod dijkstra;
pub mod frontier;
pub mod shortest_path;

pub use frontier::FrontierStrategy;
pub use shortest_path::ShortestPath;

#[cfg(test)]
use crate::{constants::Weight, error::HubMapError};

#[cfg(test)]
pub(crate) fn assert_no_path(path: Result<ShortestPath, HubMapError>) {
    let path = path.expect("destination should exist");
    assert!(path.hubs.is_empty());
    assert_eq!(path.distance, crate::constants::UNREACHABLE);
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<&str>,
    expected_distance: Weight,
    path: Result<ShortestPath, HubMapError>,
) {
    let path = path.expect("destination should exist");
    assert_eq!(expected_path, path.names());
    approx::assert_abs_diff_eq!(expected_distance, path.distance, epsilon = 1e-9);
}
