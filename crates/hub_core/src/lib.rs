//! Crate to compute shortest paths in hub networks.
//!
//! Hubs are named points with integer coordinates, links between them are
//! undirected and as long as the straight line between their end points.
//! Building a [`HubMap`] runs Dijkstra's algorithm from the start hub, so
//! every path can be looked up afterwards.
//!
//! # Basic usage
//! ```no_run
//! use hub_core::prelude::*;
//! use std::path::Path;
//!
//! // Path to network file
//! let path = Path::new("path/to/network.txt");
//!
//! // Read the network and compute all paths starting at hub "A"
//! let g = HubMap::from_path(path, "A").expect("Failed to build hub map");
//!
//! // Look up the path to hub "C"
//! let sp = g.find_path("C").expect("Unknown hub");
//! println!("{}", sp);
//!```
//! [`HubMap`]: crate::graph::HubMap
pub(crate) mod collections;
pub mod constants;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod priority_queue;
pub mod search;
pub mod statistics;
pub mod util;
