//! Per-cell dynamic grid state

use crate::error::{GridError, Result};
use crate::offset::OffsetCoord;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Handle to a unit owned by the presentation layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u32);

/// Rectangular region of valid cells, as half-open ranges
///
/// `layers` is the z extent of the rendered map. It does not add cells of
/// its own: any non-empty layer range contributes each (col, row) once,
/// an empty one leaves the grid empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    pub cols: Range<i32>,
    pub rows: Range<i32>,
    #[serde(default = "default_layers")]
    pub layers: Range<i32>,
}

fn default_layers() -> Range<i32> {
    0..1
}

impl GridBounds {
    /// Flat bounds with the usual single layer
    pub fn new(cols: Range<i32>, rows: Range<i32>) -> Self {
        Self { cols, rows, layers: default_layers() }
    }

    pub fn is_empty(&self) -> bool {
        self.cols.is_empty() || self.rows.is_empty() || self.layers.is_empty()
    }

    pub fn contains(&self, cell: OffsetCoord) -> bool {
        !self.layers.is_empty() && self.cols.contains(&cell.col) && self.rows.contains(&cell.row)
    }

    /// Every cell inside the bounds, row-major
    pub fn cells(&self) -> impl Iterator<Item = OffsetCoord> + '_ {
        let layers = !self.layers.is_empty();
        self.rows
            .clone()
            .filter(move |_| layers)
            .flat_map(move |row| self.cols.clone().map(move |col| OffsetCoord::new(col, row)))
    }
}

/// Mutable data attached to one cell
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellState {
    pub occupant: Option<UnitId>,
}

impl CellState {
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}

/// One `CellState` per in-bounds cell, fixed in size after construction
#[derive(Clone, Debug)]
pub struct GridState {
    bounds: GridBounds,
    cells: FxHashMap<OffsetCoord, CellState>,
}

impl GridState {
    /// Allocate an empty cell for every coordinate inside `bounds`
    pub fn new(bounds: GridBounds) -> Self {
        let cells: FxHashMap<_, _> = bounds.cells().map(|c| (c, CellState::default())).collect();
        Self { bounds, cells }
    }

    pub fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, cell: OffsetCoord) -> bool {
        self.cells.contains_key(&cell)
    }

    pub fn cell(&self, cell: OffsetCoord) -> Result<&CellState> {
        self.cells.get(&cell).ok_or(GridError::OutOfBounds { coord: cell })
    }

    pub fn cell_mut(&mut self, cell: OffsetCoord) -> Result<&mut CellState> {
        self.cells.get_mut(&cell).ok_or(GridError::OutOfBounds { coord: cell })
    }

    pub fn occupant(&self, cell: OffsetCoord) -> Result<Option<UnitId>> {
        Ok(self.cell(cell)?.occupant)
    }

    /// Put `unit` on `cell`, returning whatever was there before
    pub fn place_occupant(&mut self, cell: OffsetCoord, unit: UnitId) -> Result<Option<UnitId>> {
        Ok(self.cell_mut(cell)?.occupant.replace(unit))
    }

    /// Clear `cell`, returning the unit that was on it
    pub fn remove_occupant(&mut self, cell: OffsetCoord) -> Result<Option<UnitId>> {
        Ok(self.cell_mut(cell)?.occupant.take())
    }

    /// Occupied cells, row-major
    pub fn occupied(&self) -> Vec<(OffsetCoord, UnitId)> {
        let mut out: Vec<_> = self
            .cells
            .iter()
            .filter_map(|(&c, s)| s.occupant.map(|u| (c, u)))
            .collect();
        out.sort();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridState {
        GridState::new(GridBounds::new(0..4, -1..2))
    }

    #[test]
    fn test_one_cell_per_coordinate() {
        let g = grid();
        assert_eq!(g.len(), 12);
        assert!(g.in_bounds(OffsetCoord::new(0, -1)));
        assert!(g.in_bounds(OffsetCoord::new(3, 1)));
        assert!(!g.in_bounds(OffsetCoord::new(4, 0)));
        assert!(!g.in_bounds(OffsetCoord::new(0, 2)));
    }

    #[test]
    fn test_layers_collapse() {
        let deep = GridState::new(GridBounds { cols: 0..2, rows: 0..2, layers: -3..3 });
        assert_eq!(deep.len(), 4);

        let none = GridState::new(GridBounds { cols: 0..2, rows: 0..2, layers: 0..0 });
        assert!(none.is_empty());
        assert!(!none.bounds().contains(OffsetCoord::new(0, 0)));
    }

    #[test]
    fn test_place_and_remove() {
        let mut g = grid();
        let at = OffsetCoord::new(1, 0);
        assert_eq!(g.place_occupant(at, UnitId(7)), Ok(None));
        assert_eq!(g.place_occupant(at, UnitId(8)), Ok(Some(UnitId(7))));
        assert_eq!(g.occupant(at), Ok(Some(UnitId(8))));
        assert_eq!(g.occupied(), vec![(at, UnitId(8))]);
        assert_eq!(g.remove_occupant(at), Ok(Some(UnitId(8))));
        assert!(!g.cell(at).unwrap().is_occupied());
    }

    #[test]
    fn test_out_of_bounds_is_reported() {
        let mut g = grid();
        let outside = OffsetCoord::new(9, 9);
        assert_eq!(
            g.place_occupant(outside, UnitId(1)),
            Err(GridError::OutOfBounds { coord: outside })
        );
        assert!(g.occupant(outside).is_err());
        assert!(g.remove_occupant(outside).is_err());
        assert_eq!(g.len(), 12);
    }
}
