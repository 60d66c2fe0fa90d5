//! HEXPATH CLI - Command-line interface
//!
//! Commands:
//! - path: Shortest route between two cells on a map
//! - distance: Hex distance between two cells
//! - neighbors: The six neighbors of a cell
//! - inspect: Summarize a map file

mod geometry;
mod inspect;
mod path_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hexpath")]
#[command(about = "Hex grid geometry and pathfinding")]
struct Cli {
    /// Log search details (same as RUST_LOG=debug)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest route between two cells
    Path(path_cmd::PathArgs),
    /// Hex distance between two cells
    Distance(geometry::DistanceArgs),
    /// List the neighbors of a cell
    Neighbors(geometry::NeighborsArgs),
    /// Summarize a map file
    Inspect(inspect::InspectArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Path(args) => path_cmd::run(args),
        Commands::Distance(args) => geometry::run_distance(args),
        Commands::Neighbors(args) => geometry::run_neighbors(args),
        Commands::Inspect(args) => inspect::run(args),
    }
}
