//! HEXPATH Core - Hex grid model and pathfinding
//!
//! This crate provides the grid core for tile-based strategy maps:
//! - Cube coordinates and the six hex directions
//! - Offset (col, row) <-> cube conversion
//! - Per-cell grid state with typed out-of-bounds errors
//! - Passability and distance queries over an injected tile layer
//! - Weighted A* search
//! - JSON map files

pub mod cube;
pub mod offset;
pub mod error;
pub mod state;
pub mod tiles;
pub mod query;
pub mod path;
pub mod config;
pub mod world;

// Re-exports for convenient access
pub use cube::{CubeCoord, Direction, CUBE_DIRECTIONS};
pub use offset::{cube_to_offset, offset_to_cube, OffsetCoord, ParseOffsetError, MAX_COORD};
pub use error::GridError;
pub use state::{CellState, GridBounds, GridState, UnitId};
pub use tiles::{Passability, TerrainCosts, TileKind, TileMap, TileSource, DEFAULT_STEP_COST};
pub use query::{distance, offset_distance, GridQuery};
pub use path::{PathFinder, PathSearch};
pub use config::MapConfig;
pub use world::World;
