use std::path::PathBuf;

use clap::Parser;

use crate::search::FrontierStrategy;

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// Path to the network file
    network_file: String,

    /// Name of the hub all paths start at
    start: String,

    /// Destination hub. If not set the paths to all hubs are printed
    destination: Option<String>,

    /// Frontier used by the shortest path search
    #[arg(short, long, value_enum, default_value_t = FrontierStrategy::default())]
    frontier: FrontierStrategy,

    /// Print every hub with its linked hubs
    #[arg(short, long, default_value = "false")]
    links: bool,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub network_file: PathBuf,
    pub start: String,
    pub destination: Option<String>,
    pub strategy: FrontierStrategy,
    pub print_links: bool,
}

pub fn parse() -> Cfg {
    let cli = Cli::parse();

    Cfg {
        network_file: PathBuf::from(cli.network_file),
        start: cli.start,
        destination: cli.destination,
        strategy: cli.frontier,
        print_links: cli.links,
    }
}
