use anyhow::Context;
use hub_core::prelude::*;
use hub_core::util::cli;
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse();

    let network = HubNetwork::from_path(&cfg.network_file)
        .with_context(|| format!("Could not read network {}", cfg.network_file.display()))?;
    let (hubs, links) = network.into_parts();

    let g = HubMap::with_strategy(hubs, links, &cfg.start, cfg.strategy)
        .context("Could not build hub map")?;

    if cfg.print_links {
        print!("{}", g);
    }

    match cfg.destination {
        Some(destination) => {
            let sp = g.find_path(&destination)?;
            println!("{}", sp);
        }
        None => {
            for hub in g.hubs_sorted() {
                let sp = g.find_path(hub.name())?;
                println!("{}: {}", hub, sp);
            }
        }
    }

    info!("{}", g.stats());
    Ok(())
}
