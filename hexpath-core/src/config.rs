//! MapConfig - map file definition
//!
//! A map file lays tiles out as text, one string per grid row:
//!
//! ```json
//! {
//!   "name": "ford",
//!   "origin": { "col": 0, "row": 0 },
//!   "rows": ["..~..", ".#~..", "....."],
//!   "legend": { ".": "plain", "#": "rock", "~": "river" },
//!   "impassable": ["rock"],
//!   "costs": { "river": 30.0 }
//! }
//! ```
//!
//! Character `j` of line `i` is cell `(origin.col + j, origin.row + i)`.
//! A space leaves the cell without a tile. Every tile must land within
//! `MAX_COORD` of the origin of the coordinate system.

use crate::error::GridError;
use crate::offset::{OffsetCoord, MAX_COORD};
use crate::state::GridBounds;
use crate::tiles::{Passability, TerrainCosts, TileKind, TileMap, DEFAULT_STEP_COST};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Range;
use std::path::Path;

/// Map layout plus the per-kind rules that apply to it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub origin: OffsetCoord,
    pub rows: Vec<String>,
    pub legend: BTreeMap<char, TileKind>,
    #[serde(default)]
    pub impassable: Vec<TileKind>,
    #[serde(default)]
    pub costs: BTreeMap<TileKind, f32>,
    #[serde(default = "default_step_cost")]
    pub default_cost: f32,
    #[serde(default = "default_layers")]
    pub layers: Range<i32>,
}

fn default_name() -> String {
    "unnamed".to_string()
}

fn default_step_cost() -> f32 {
    DEFAULT_STEP_COST
}

fn default_layers() -> Range<i32> {
    0..1
}

impl MapConfig {
    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: MapConfig = serde_json::from_str(content)?;
        // Surface bad symbols at load time rather than first use
        config.tile_map()?;
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build the tile layer from `rows` and `legend`
    pub fn tile_map(&self) -> Result<TileMap, GridError> {
        let mut map = TileMap::new();
        for (line, text) in self.rows.iter().enumerate() {
            for (column, symbol) in text.chars().enumerate() {
                if symbol == ' ' {
                    continue;
                }
                let kind = self
                    .legend
                    .get(&symbol)
                    .ok_or(GridError::UnknownSymbol { symbol, line, column })?;
                map.set(self.cell_at(line, column)?, kind.clone());
            }
        }
        Ok(map)
    }

    /// Cell under character `column` of line `line`
    fn cell_at(&self, line: usize, column: usize) -> Result<OffsetCoord, GridError> {
        let shift = |base: i32, by: usize| i32::try_from(by).ok().and_then(|by| base.checked_add(by));
        shift(self.origin.col, column)
            .zip(shift(self.origin.row, line))
            .map(|(col, row)| OffsetCoord::new(col, row))
            .filter(|cell| cell.is_addressable())
            .ok_or(GridError::Unaddressable { line, column })
    }

    /// Bounding box of the tiles in `map`
    pub fn bounds_of(&self, map: &TileMap) -> GridBounds {
        match map.extent() {
            Some((lo, hi)) => GridBounds {
                cols: lo.col..hi.col + 1,
                rows: lo.row..hi.row + 1,
                layers: self.layers.clone(),
            },
            None => GridBounds {
                cols: self.origin.col..self.origin.col,
                rows: self.origin.row..self.origin.row,
                layers: self.layers.clone(),
            },
        }
    }

    pub fn passability(&self) -> Passability {
        Passability::blocking(self.impassable.iter().cloned())
    }

    pub fn terrain_costs(&self) -> TerrainCosts {
        TerrainCosts {
            default_cost: self.default_cost,
            costs: self.costs.iter().map(|(k, &v)| (k.clone(), v)).collect(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            origin: OffsetCoord::new(0, 0),
            rows: vec![".....".to_string(); 5],
            legend: BTreeMap::from([('.', TileKind::new("plain"))]),
            impassable: Vec::new(),
            costs: BTreeMap::new(),
            default_cost: DEFAULT_STEP_COST,
            layers: default_layers(),
        }
    }
}
