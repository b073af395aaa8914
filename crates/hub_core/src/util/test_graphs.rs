use std::path::{Path, PathBuf};

use hub_reader::{HubDef, HubNetwork, Link};

use crate::graph::HubMap;

/// Path of a network file in the reader's `test_data` directory
pub fn test_data(file: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../hub_reader/test_data")
        .join(file)
}

/// Builds a map from `(name, x, y)` hubs and `(name, name)` links.
///
/// **Panics** if the map cannot be built
pub fn map_from(hubs: &[(&str, i32, i32)], links: &[(&str, &str)], start: &str) -> HubMap {
    let hubs = hubs
        .iter()
        .map(|(name, x, y)| HubDef::new(*name, *x, *y))
        .collect();
    let links = links.iter().map(|(a, b)| Link::new(*a, *b)).collect();

    HubMap::new(hubs, links, start).unwrap()
}

pub fn generate_line_graph() -> HubMap {
    // A(0,0) - B(3,4) - C(6,8)    D(100,100)
    map_from(
        &[("A", 0, 0), ("B", 3, 4), ("C", 6, 8), ("D", 100, 100)],
        &[("A", "B"), ("B", "C")],
        "A",
    )
}

pub fn campus_network() -> HubNetwork {
    //         Gym ------- Dorm
    //       /     \      /
    // Library-Quad-Lab -
    //       \     /
    //         Cafe
    // Office sits on top of Quad, Annex has no links
    let mut network = HubNetwork::new();

    network.add_hub("Library", 0, 0);
    network.add_hub("Gym", 4, 3);
    network.add_hub("Lab", 8, 0);
    network.add_hub("Cafe", 4, -3);
    network.add_hub("Dorm", 12, 3);
    network.add_hub("Quad", 4, 0);
    network.add_hub("Annex", 20, 20);
    network.add_hub("Office", 4, 0);

    network.add_link("Library", "Gym");
    network.add_link("Library", "Cafe");
    network.add_link("Library", "Quad");
    network.add_link("Gym", "Lab");
    network.add_link("Cafe", "Lab");
    network.add_link("Quad", "Lab");
    network.add_link("Lab", "Dorm");
    network.add_link("Gym", "Dorm");
    network.add_link("Quad", "Office");

    network
}

pub fn generate_campus_graph() -> HubMap {
    HubMap::from_network(&campus_network(), "Library").unwrap()
}

/// `width` x `height` grid with `spacing` between neighbouring hubs.
///
/// Hubs are called `x:y` and linked to their right and lower neighbour.
pub fn grid_network(width: usize, height: usize, spacing: i32) -> HubNetwork {
    let mut network = HubNetwork::new();
    let name = |x: usize, y: usize| format!("{}:{}", x, y);

    for y in 0..height {
        for x in 0..width {
            network.add_hub(name(x, y), x as i32 * spacing, y as i32 * spacing);
        }
    }

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                network.add_link(name(x, y), name(x + 1, y));
            }
            if y + 1 < height {
                network.add_link(name(x, y), name(x, y + 1));
            }
        }
    }

    network
}

pub fn generate_grid_graph(width: usize, height: usize) -> HubMap {
    HubMap::from_network(&grid_network(width, height, 10), "0:0").unwrap()
}
