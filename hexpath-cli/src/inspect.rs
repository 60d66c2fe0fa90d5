//! Inspect command - summarize a map file

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use hexpath_core::World;

use crate::path_cmd::load_world;

#[derive(Args)]
pub struct InspectArgs {
    /// Map JSON file (built-in 5x5 map if omitted)
    #[arg(long, value_name = "FILE")]
    pub map: Option<PathBuf>,

    /// Output summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Summary of one world
#[derive(Debug, serde::Serialize)]
struct MapSummary {
    name: String,
    cols: [i32; 2],
    rows: [i32; 2],
    cells: usize,
    tiles: usize,
    blocked: usize,
}

pub fn run(args: InspectArgs) -> Result<()> {
    let world = load_world(args.map.as_ref())?;
    let summary = summarize(&world);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Map:     {}", summary.name);
        println!("Columns: {}..{}", summary.cols[0], summary.cols[1]);
        println!("Rows:    {}..{}", summary.rows[0], summary.rows[1]);
        println!("Cells:   {}", summary.cells);
        println!("Tiles:   {} ({} blocked)", summary.tiles, summary.blocked);
    }
    Ok(())
}

fn summarize(world: &World) -> MapSummary {
    let bounds = world.grid().bounds();
    MapSummary {
        name: world.name().to_string(),
        cols: [bounds.cols.start, bounds.cols.end],
        rows: [bounds.rows.start, bounds.rows.end],
        cells: world.grid().len(),
        tiles: world.tiles().len(),
        blocked: world.blocked_tiles(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_default() {
        let summary = summarize(&World::default());
        assert_eq!(summary.name, "default");
        assert_eq!(summary.cols, [0, 5]);
        assert_eq!(summary.cells, 25);
        assert_eq!(summary.blocked, 0);
    }
}
