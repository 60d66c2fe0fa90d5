//! Tile presence, tile kinds and per-kind rules
//!
//! Which cells have a tile, and what kind, is owned by the rendered map.
//! The core only sees it through `TileSource`.

use crate::offset::OffsetCoord;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Movement cost of a cell when no terrain rule applies
pub const DEFAULT_STEP_COST: f32 = 10.0;

/// Named tile type ("plain", "forest", ...)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileKind(pub String);

impl TileKind {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Answers "is there a tile here, and of what kind"
pub trait TileSource {
    fn tile_at(&self, cell: OffsetCoord) -> Option<&TileKind>;

    fn has_tile(&self, cell: OffsetCoord) -> bool {
        self.tile_at(cell).is_some()
    }
}

/// In-memory tile layer
#[derive(Clone, Debug, Default)]
pub struct TileMap {
    tiles: FxHashMap<OffsetCoord, TileKind>,
}

impl TileMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill every cell of a `cols` x `rows` rectangle starting at (0, 0)
    pub fn filled(cols: i32, rows: i32, kind: &TileKind) -> Self {
        let mut map = Self::new();
        for row in 0..rows {
            for col in 0..cols {
                map.set(OffsetCoord::new(col, row), kind.clone());
            }
        }
        map
    }

    /// Set a tile, returning the previous kind
    pub fn set(&mut self, cell: OffsetCoord, kind: TileKind) -> Option<TileKind> {
        self.tiles.insert(cell, kind)
    }

    pub fn remove(&mut self, cell: OffsetCoord) -> Option<TileKind> {
        self.tiles.remove(&cell)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (OffsetCoord, &TileKind)> {
        self.tiles.iter().map(|(&c, k)| (c, k))
    }

    /// Smallest (min, max) inclusive corners covering every tile
    pub fn extent(&self) -> Option<(OffsetCoord, OffsetCoord)> {
        let mut cells = self.tiles.keys();
        let first = *cells.next()?;
        Some(cells.fold((first, first), |(lo, hi), c| {
            (
                OffsetCoord::new(lo.col.min(c.col), lo.row.min(c.row)),
                OffsetCoord::new(hi.col.max(c.col), hi.row.max(c.row)),
            )
        }))
    }
}

impl TileSource for TileMap {
    fn tile_at(&self, cell: OffsetCoord) -> Option<&TileKind> {
        self.tiles.get(&cell)
    }
}

/// Per-kind passability; kinds not listed are passable
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Passability {
    blocked: FxHashSet<TileKind>,
}

impl Passability {
    /// Every tile passable
    pub fn open() -> Self {
        Self::default()
    }

    pub fn blocking<I>(kinds: I) -> Self
    where
        I: IntoIterator<Item = TileKind>,
    {
        Self { blocked: kinds.into_iter().collect() }
    }

    pub fn set_blocked(&mut self, kind: TileKind, blocked: bool) {
        if blocked {
            self.blocked.insert(kind);
        } else {
            self.blocked.remove(&kind);
        }
    }

    pub fn is_passable(&self, kind: &TileKind) -> bool {
        !self.blocked.contains(kind)
    }
}

/// Per-kind movement cost, used as a path search cost function
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainCosts {
    pub default_cost: f32,
    #[serde(default)]
    pub costs: FxHashMap<TileKind, f32>,
}

impl Default for TerrainCosts {
    fn default() -> Self {
        Self { default_cost: DEFAULT_STEP_COST, costs: FxHashMap::default() }
    }
}

impl TerrainCosts {
    pub fn with_cost(mut self, kind: TileKind, cost: f32) -> Self {
        self.costs.insert(kind, cost);
        self
    }

    /// Smallest cost any cell can have, never below zero
    pub fn min_cost(&self) -> f32 {
        self.costs
            .values()
            .copied()
            .fold(self.default_cost, f32::min)
            .max(0.0)
    }

    pub fn cost_of(&self, kind: &TileKind) -> f32 {
        self.costs.get(kind).copied().unwrap_or(self.default_cost)
    }

    /// Cost of entering `cell`; cells without a tile cost the default
    pub fn cell_cost<T: TileSource + ?Sized>(&self, tiles: &T, cell: OffsetCoord) -> f32 {
        tiles.tile_at(cell).map_or(self.default_cost, |k| self.cost_of(k))
    }
}
