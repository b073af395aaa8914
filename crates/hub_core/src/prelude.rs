//! Re-exports of the most commonly used items in `hub_core`.
pub use crate::search;
pub use crate::search::{FrontierStrategy, ShortestPath};

pub use crate::constants::{Weight, UNREACHABLE};
pub use crate::error::HubMapError;
pub use crate::graph::hub_index;
pub use crate::graph::{Hub, HubIndex, HubMap};

pub use hub_reader::{HubDef, HubNetwork, Link};
