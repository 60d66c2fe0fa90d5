//! Geometry commands - distance and neighbors, no map required

use anyhow::Result;
use clap::Args;

use hexpath_core::{offset_to_cube, Direction, OffsetCoord};

#[derive(Args)]
pub struct DistanceArgs {
    /// First cell as col,row
    #[arg(long, allow_hyphen_values = true)]
    pub from: OffsetCoord,

    /// Second cell as col,row
    #[arg(long, allow_hyphen_values = true)]
    pub to: OffsetCoord,
}

#[derive(Args)]
pub struct NeighborsArgs {
    /// Cell as col,row
    #[arg(long, allow_hyphen_values = true)]
    pub at: OffsetCoord,
}

/// Print the hex distance between two cells
pub fn run_distance(args: DistanceArgs) -> Result<()> {
    let a = offset_to_cube(args.from);
    let b = offset_to_cube(args.to);
    println!("({}) = cube {}", args.from, a);
    println!("({}) = cube {}", args.to, b);
    println!("Distance: {}", a.distance_to(b));
    Ok(())
}

/// Print the six neighbors of a cell in direction order
pub fn run_neighbors(args: NeighborsArgs) -> Result<()> {
    println!("({}) = cube {}", args.at, offset_to_cube(args.at));
    for line in neighbor_lines(args.at) {
        println!("  {}", line);
    }
    Ok(())
}

fn neighbor_lines(cell: OffsetCoord) -> Vec<String> {
    Direction::ALL
        .iter()
        .map(|&d| format!("{:<12} ({})", d.name(), cell.neighbor(d)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_lines() {
        let lines = neighbor_lines(OffsetCoord::new(0, 0));
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "right        (1,0)");
        assert_eq!(lines[3], "left         (-1,0)");
    }
}
