//! Interactive shell to query the shortest paths of a hub network
use std::path::{Path, PathBuf};

use hub_core::prelude::*;
use hub_core::statistics::{average_degree, isolated_hubs};
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::Repl;
use thiserror::Error;

#[derive(Debug, Error)]
enum ReplError {
    #[error(transparent)]
    Repl(#[from] reedline_repl_rs::Error),

    #[error(transparent)]
    HubMap(#[from] HubMapError),

    #[error("missing argument `{0}`")]
    MissingArgument(&'static str),

    #[error("usage: repl <network file> <start hub> [--heap]")]
    Usage,
}

type Result<T> = std::result::Result<T, ReplError>;

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let g = &context.graph;
    Ok(Some(format!(
        "Network has {} hubs and {} links ({} dropped)\n\
         Source: {}, {} hubs reachable, {} without links\n\
         Average degree: {:.2}, frontier: {}\n\
         {}",
        g.num_hubs(),
        g.num_links(),
        g.dangling_links(),
        g.source(),
        g.reachable_count(),
        isolated_hubs(g),
        average_degree(g),
        g.strategy(),
        g.stats()
    )))
}

/// List all hubs with their distance from the source
fn hubs(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let mut out = String::new();
    for hub in context.graph.hubs_sorted() {
        let (x, y) = hub.location();
        out.push_str(&format!("{} ({}, {}): {:.3}\n", hub, x, y, hub.distance()));
    }
    Ok(Some(out.trim_end().to_string()))
}

fn links(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(context.graph.to_string().trim_end().to_string()))
}

fn path(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let dst = args
        .get_one::<String>("dst")
        .ok_or(ReplError::MissingArgument("dst"))?;

    let sp = context.graph.find_path(dst)?;
    if !sp.is_reachable() {
        return Ok(Some(format!("No path from {} to {}", context.graph.source(), dst)));
    }

    let mut out = String::new();
    for hub in sp.hubs.iter() {
        out.push_str(&format!("{}\t{:.3}\n", hub, hub.distance()));
    }
    out.push_str(&format!("Distance: {:.3}", sp.distance));
    Ok(Some(out))
}

/// Rebuild the map from another start hub
fn source(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let start = args
        .get_one::<String>("start")
        .ok_or(ReplError::MissingArgument("start"))?;

    context.graph = context.build(start)?;
    Ok(Some(format!(
        "{} hubs reachable from {}. {}",
        context.graph.reachable_count(),
        start,
        context.graph.stats()
    )))
}

fn measure(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::Rng;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);
    let hubs = context.network.get_hubs();
    if hubs.is_empty() {
        return Ok(Some("Network has no hubs".to_string()));
    }

    // Build the map from n random start hubs
    let mut rng = rand::thread_rng();
    let mut res = String::new();
    for _ in 0..n {
        let start = hubs[rng.gen_range(0..hubs.len())].name.clone();
        let g = context.build(&start)?;
        res.push_str(&format!(
            "{}: {} hubs settled in {:?}\n",
            start,
            g.stats().hubs_settled,
            g.stats().duration
        ));
    }

    Ok(Some(res.trim_end().to_string()))
}

struct Context {
    network: HubNetwork,
    strategy: FrontierStrategy,
    graph: HubMap,
}

impl Context {
    fn new(network: HubNetwork, start: &str, strategy: FrontierStrategy) -> Result<Self> {
        let (hubs, links) = network.clone().into_parts();
        let graph = HubMap::with_strategy(hubs, links, start, strategy)?;
        Ok(Self {
            network,
            strategy,
            graph,
        })
    }

    fn build(&self, start: &str) -> Result<HubMap> {
        let (hubs, links) = self.network.clone().into_parts();
        Ok(HubMap::with_strategy(hubs, links, start, self.strategy)?)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Init Graph
    let mut args = std::env::args().skip(1);
    let (Some(network_file), Some(start)) = (args.next(), args.next()) else {
        return Err(ReplError::Usage);
    };
    let strategy = match args.next().as_deref() {
        Some("--heap") => FrontierStrategy::BinaryHeap,
        _ => FrontierStrategy::LinearScan,
    };

    let network = HubNetwork::from_path(Path::new(&network_file)).map_err(HubMapError::from)?;
    let context = Context::new(network, &start, strategy)?;

    let mut repl = Repl::new(context)
        .with_name("Hubs")
        .with_version("v0.1.0")
        .with_description("Simple REPL to query shortest paths in a hub network")
        .with_banner("Welcome to Hubs")
        .with_history(PathBuf::from(".hub_history"), 100)
        .with_command(Command::new("info").about("Print network info"), info)
        .with_command(
            Command::new("hubs").about("List all hubs with their distance from the source"),
            hubs,
        )
        .with_command(
            Command::new("links").about("List all hubs with their linked hubs"),
            links,
        )
        .with_command(
            Command::new("path")
                .arg(
                    Arg::new("dst")
                        .required(true)
                        .help("Name of the destination hub"),
                )
                .about("Print the shortest path from the source to a hub"),
            path,
        )
        .with_command(
            Command::new("source")
                .arg(
                    Arg::new("start")
                        .required(true)
                        .help("Name of the new source hub"),
                )
                .about("Compute all shortest paths from another source hub"),
            source,
        )
        .with_command(
            Command::new("measure")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random source hubs"),
                )
                .about("Measure `n` shortest path computations from random sources"),
            measure,
        );

    Ok(repl.run()?)
}
