//! World - the grid core as seen by the presentation layer
//!
//! Owns the dynamic grid state together with the tile layer and rules,
//! and exposes placement, queries and path search over them.

use crate::config::MapConfig;
use crate::cube::CubeCoord;
use crate::error::Result;
use crate::offset::OffsetCoord;
use crate::path::{PathFinder, PathSearch};
use crate::query::GridQuery;
use crate::state::{GridBounds, GridState, UnitId};
use crate::tiles::{Passability, TerrainCosts, TileKind, TileMap, TileSource};

#[derive(Clone, Debug)]
pub struct World {
    name: String,
    grid: GridState,
    tiles: TileMap,
    passability: Passability,
    terrain: TerrainCosts,
}

impl World {
    /// Assemble from explicit parts
    pub fn new(bounds: GridBounds, tiles: TileMap, passability: Passability, terrain: TerrainCosts) -> Self {
        let grid = GridState::new(bounds);
        Self { name: "unnamed".to_string(), grid, tiles, passability, terrain }
    }

    /// Build the tile layer from a map file; bounds are the tiles' bounding box
    pub fn from_config(config: &MapConfig) -> anyhow::Result<Self> {
        let tiles = config.tile_map()?;
        let bounds = config.bounds_of(&tiles);
        let mut world = Self::new(bounds, tiles, config.passability(), config.terrain_costs());
        world.name = config.name.clone();
        tracing::info!(
            "Initialized world '{}': {} cells, {} tiles",
            world.name,
            world.grid.len(),
            world.tiles.len()
        );
        Ok(world)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn tiles(&self) -> &TileMap {
        &self.tiles
    }

    pub fn terrain(&self) -> &TerrainCosts {
        &self.terrain
    }

    pub fn query(&self) -> GridQuery<'_, TileMap> {
        GridQuery::new(&self.grid, &self.tiles, &self.passability)
    }

    pub fn path_finder(&self) -> PathFinder<'_, TileMap> {
        PathFinder::new(self.query())
    }

    /// Put `unit` on `cell`, returning the unit it replaced
    pub fn place_occupant(&mut self, cell: OffsetCoord, unit: UnitId) -> Result<Option<UnitId>> {
        self.grid.place_occupant(cell, unit).inspect_err(|e| {
            tracing::warn!("Rejected placement of unit {}: {}", unit.0, e);
        })
    }

    pub fn remove_occupant(&mut self, cell: OffsetCoord) -> Result<Option<UnitId>> {
        self.grid.remove_occupant(cell)
    }

    pub fn occupant(&self, cell: OffsetCoord) -> Result<Option<UnitId>> {
        self.grid.occupant(cell)
    }

    pub fn distance(&self, a: OffsetCoord, b: OffsetCoord) -> i32 {
        self.query().offset_distance(a, b)
    }

    pub fn cube_distance(&self, a: CubeCoord, b: CubeCoord) -> i32 {
        self.query().distance(a, b)
    }

    pub fn is_impassable(&self, cell: OffsetCoord) -> bool {
        self.query().is_impassable(cell)
    }

    pub fn in_bounds(&self, cell: OffsetCoord) -> bool {
        self.grid.in_bounds(cell)
    }

    /// Shortest route at a uniform cost of 10 per cell
    pub fn find_path(&self, start: OffsetCoord, goal: OffsetCoord) -> Vec<OffsetCoord> {
        self.path_finder().find_path(start, goal)
    }

    pub fn find_path_with<F>(&self, start: OffsetCoord, goal: OffsetCoord, cost_fn: F) -> Vec<OffsetCoord>
    where
        F: Fn(OffsetCoord) -> f32,
    {
        self.path_finder().find_path_with(start, goal, cost_fn)
    }

    /// Search priced by the world's terrain costs
    pub fn find_terrain_path(&self, start: OffsetCoord, goal: OffsetCoord) -> PathSearch {
        let tiles = &self.tiles;
        let terrain = &self.terrain;
        self.path_finder()
            .with_min_step_cost(terrain.min_cost())
            .search(start, goal, |cell| terrain.cell_cost(tiles, cell))
    }

    /// Number of cells with a tile that cannot be entered
    pub fn blocked_tiles(&self) -> usize {
        let query = self.query();
        self.tiles
            .iter()
            .filter(|&(cell, _)| query.is_impassable(cell))
            .count()
    }

    pub fn has_tile(&self, cell: OffsetCoord) -> bool {
        self.tiles.has_tile(cell)
    }
}

impl Default for World {
    fn default() -> Self {
        let tiles = TileMap::filled(5, 5, &TileKind::new("plain"));
        let bounds = GridBounds::new(0..5, 0..5);
        let mut world = Self::new(bounds, tiles, Passability::open(), TerrainCosts::default());
        world.name = "default".to_string();
        world
    }
}
