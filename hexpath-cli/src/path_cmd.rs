//! Path command - shortest route between two cells
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_world(), run_search(), report_route()
//! - Level 4: formatting utilities

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hexpath_core::{MapConfig, OffsetCoord, PathSearch, World, DEFAULT_STEP_COST};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PathArgs {
    /// Map JSON file (built-in 5x5 map if omitted)
    #[arg(long, value_name = "FILE")]
    pub map: Option<PathBuf>,

    /// Start cell as col,row
    #[arg(long, allow_hyphen_values = true)]
    pub from: OffsetCoord,

    /// Goal cell as col,row
    #[arg(long, allow_hyphen_values = true)]
    pub to: OffsetCoord,

    /// Price cells with the map's terrain costs instead of a flat cost
    #[arg(long)]
    pub terrain: bool,

    /// Output result as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run path command
pub fn run(args: PathArgs) -> Result<()> {
    let world = load_world(args.map.as_ref())?;

    tracing::info!(
        "Searching {} -> {} on '{}'{}",
        args.from,
        args.to,
        world.name(),
        if args.terrain { " (terrain costs)" } else { "" }
    );

    let search = run_search(&world, &args);
    report_route(&search, &args, &mut std::io::stdout().lock())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Load a world from a map file, or the built-in map
pub fn load_world(map: Option<&PathBuf>) -> Result<World> {
    match map {
        Some(path) => {
            let config = MapConfig::load(path)
                .with_context(|| format!("Failed to load map: {}", path.display()))?;
            World::from_config(&config)
        }
        None => World::from_config(&MapConfig::default()),
    }
}

fn run_search(world: &World, args: &PathArgs) -> PathSearch {
    if args.terrain {
        world.find_terrain_path(args.from, args.to)
    } else {
        world
            .path_finder()
            .with_min_step_cost(DEFAULT_STEP_COST)
            .search(args.from, args.to, |_| DEFAULT_STEP_COST)
    }
}

fn report_route(search: &PathSearch, args: &PathArgs, out: &mut impl Write) -> Result<()> {
    if args.json {
        print_json_route(search, args, out)
    } else {
        print_text_route(search, args, out)
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Render a route as "a -> b -> c"
pub fn format_route(start: OffsetCoord, path: &[OffsetCoord]) -> String {
    std::iter::once(start)
        .chain(path.iter().copied())
        .map(|c| format!("({})", c))
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn print_json_route(search: &PathSearch, args: &PathArgs, out: &mut impl Write) -> Result<()> {
    #[derive(serde::Serialize)]
    struct JsonOutput<'a> {
        from: OffsetCoord,
        to: OffsetCoord,
        found: bool,
        cost: Option<f32>,
        expanded: usize,
        path: &'a [OffsetCoord],
    }

    let output = JsonOutput {
        from: args.from,
        to: args.to,
        found: search.is_found(),
        cost: search.cost,
        expanded: search.expanded,
        path: &search.path,
    };

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize route")?;
    writeln!(out, "{}", json)?;
    Ok(())
}

fn print_text_route(search: &PathSearch, args: &PathArgs, out: &mut impl Write) -> Result<()> {
    match search.cost {
        Some(cost) => {
            writeln!(out, "Route: {}", format_route(args.from, &search.path))?;
            writeln!(out, "Steps: {}", search.path.len())?;
            writeln!(out, "Cost:  {:.1}", cost)?;
        }
        None => writeln!(out, "No route from ({}) to ({})", args.from, args.to)?,
    }
    writeln!(out, "Expanded: {}", search.expanded)?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
