//! Read-only queries over grid state and the tile layer

use crate::cube::CubeCoord;
use crate::offset::{cube_to_offset, OffsetCoord};
use crate::state::GridState;
use crate::tiles::{Passability, TileSource};

/// Distance between two cube cells
pub fn distance(a: CubeCoord, b: CubeCoord) -> i32 {
    a.distance_to(b)
}

/// Distance between two offset cells
pub fn offset_distance(a: OffsetCoord, b: OffsetCoord) -> i32 {
    a.distance_to(b)
}

/// Passability and bounds checks against one grid
pub struct GridQuery<'a, T: TileSource + ?Sized> {
    grid: &'a GridState,
    tiles: &'a T,
    passability: &'a Passability,
}

impl<'a, T: TileSource + ?Sized> Clone for GridQuery<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: TileSource + ?Sized> Copy for GridQuery<'a, T> {}

impl<'a, T: TileSource + ?Sized> GridQuery<'a, T> {
    pub fn new(grid: &'a GridState, tiles: &'a T, passability: &'a Passability) -> Self {
        Self { grid, tiles, passability }
    }

    pub fn grid(&self) -> &'a GridState {
        self.grid
    }

    pub fn tiles(&self) -> &'a T {
        self.tiles
    }

    pub fn distance(&self, a: CubeCoord, b: CubeCoord) -> i32 {
        distance(a, b)
    }

    pub fn offset_distance(&self, a: OffsetCoord, b: OffsetCoord) -> i32 {
        offset_distance(a, b)
    }

    /// Whether the grid has a `CellState` for `cell`
    pub fn in_bounds(&self, cell: OffsetCoord) -> bool {
        self.grid.in_bounds(cell)
    }

    pub fn has_tile(&self, cell: OffsetCoord) -> bool {
        self.tiles.has_tile(cell)
    }

    /// No tile at all, or a tile whose kind is blocked
    pub fn is_impassable(&self, cell: OffsetCoord) -> bool {
        match self.tiles.tile_at(cell) {
            None => true,
            Some(kind) => !self.passability.is_passable(kind),
        }
    }

    pub fn is_impassable_cube(&self, cube: CubeCoord) -> bool {
        self.is_impassable(cube_to_offset(cube))
    }

    /// Neighbors of `cell` that can be entered, in direction order
    pub fn passable_neighbors(&self, cell: OffsetCoord) -> impl Iterator<Item = OffsetCoord> + '_ {
        cell.neighbors().into_iter().filter(move |&n| !self.is_impassable(n))
    }
}
