use std::path::Path;

use anyhow::Context;
use hub_reader::*;
use rustc_hash::FxHashSet;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let now = std::time::Instant::now();
    // Read path to file from command line
    let path = std::env::args()
        .nth(1)
        .context("No path to network file given")?;

    let network = HubNetwork::from_path(Path::new(&path))
        .with_context(|| format!("Could not read network {}", path))?;

    let elapsed = now.elapsed();

    let names: FxHashSet<&str> = network
        .get_hubs()
        .iter()
        .map(|hub| hub.name.as_str())
        .collect();
    let dangling = network
        .get_links()
        .iter()
        .filter(|link| !names.contains(link.a.as_str()) || !names.contains(link.b.as_str()))
        .count();

    println!(
        "Finished reading network in {}.{:03} seconds",
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );
    println!(
        "Network has {} hubs and {} links ({} referencing unknown hubs)",
        network.get_hubs().len(),
        network.get_links().len(),
        dangling
    );
    Ok(())
}
