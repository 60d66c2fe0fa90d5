//! Offset grid coordinates and conversion to/from cube space
//!
//! The rendered map stores cells by (col, row) with rows growing upward.
//! Conversion flips the row sign and applies the odd-row offset transform,
//! so odd rows (after flipping) are shifted half a cell.

use crate::cube::{CubeCoord, Direction};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest |col| or |row| the coordinate math accepts
///
/// Cube components reach 1.5x the offset magnitude and distances subtract
/// two of them, which keeps all coordinate arithmetic inside `i32`.
pub const MAX_COORD: i32 = 1 << 28;

/// Column/row position on the rendered grid
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct OffsetCoord {
    // Field order gives row-major ordering
    pub row: i32,
    pub col: i32,
}

impl OffsetCoord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { row, col }
    }

    /// Whether both components are within `MAX_COORD`
    pub const fn is_addressable(self) -> bool {
        self.col.abs() <= MAX_COORD && self.row.abs() <= MAX_COORD
    }

    pub fn to_cube(self) -> CubeCoord {
        offset_to_cube(self)
    }

    /// Get neighbor in direction
    pub fn neighbor(self, direction: Direction) -> OffsetCoord {
        cube_to_offset(offset_to_cube(self).neighbor(direction))
    }

    /// All six neighbors, in `Direction::ALL` order
    pub fn neighbors(self) -> [OffsetCoord; 6] {
        offset_to_cube(self).neighbors().map(cube_to_offset)
    }

    /// Hex distance between two offset cells
    pub fn distance_to(self, other: OffsetCoord) -> i32 {
        offset_to_cube(self).distance_to(offset_to_cube(other))
    }
}

/// Offset (col, row) to cube
pub fn offset_to_cube(cell: OffsetCoord) -> CubeCoord {
    let row = -cell.row;
    // row - (row & 1) is always even, so the division is exact for negatives too
    let q = cell.col - (row - (row & 1)) / 2;
    CubeCoord::from_axial(q, row)
}

/// Cube to offset (col, row); inverse of `offset_to_cube`
pub fn cube_to_offset(cube: CubeCoord) -> OffsetCoord {
    let (q, r) = (cube.q(), cube.r());
    OffsetCoord::new(q + (r - (r & 1)) / 2, -r)
}

impl From<OffsetCoord> for CubeCoord {
    fn from(cell: OffsetCoord) -> Self {
        offset_to_cube(cell)
    }
}

impl From<CubeCoord> for OffsetCoord {
    fn from(cube: CubeCoord) -> Self {
        cube_to_offset(cube)
    }
}

impl From<(i32, i32)> for OffsetCoord {
    fn from((col, row): (i32, i32)) -> Self {
        OffsetCoord::new(col, row)
    }
}

impl fmt::Display for OffsetCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.col, self.row)
    }
}

/// Error parsing a `"col,row"` string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseOffsetError {
    #[error("expected \"col,row\", got {0:?}")]
    Syntax(String),

    #[error("cell {0} is beyond the supported range of +/-{max}", max = MAX_COORD)]
    OutOfRange(OffsetCoord),
}

impl FromStr for OffsetCoord {
    type Err = ParseOffsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseOffsetError::Syntax(s.to_string());
        let (col, row) = s.split_once(',').ok_or_else(err)?;
        let col = col.trim().parse().map_err(|_| err())?;
        let row = row.trim().parse().map_err(|_| err())?;
        let cell = OffsetCoord::new(col, row);
        if !cell.is_addressable() {
            return Err(ParseOffsetError::OutOfRange(cell));
        }
        Ok(cell)
    }
}
