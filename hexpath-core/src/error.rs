//! Error types for grid access and map building

use crate::offset::OffsetCoord;

/// Errors reported by the grid core
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("cell {coord} is outside the grid bounds")]
    OutOfBounds { coord: OffsetCoord },

    #[error("unknown tile symbol {symbol:?} at line {line}, column {column}")]
    UnknownSymbol { symbol: char, line: usize, column: usize },

    #[error("tile at line {line}, column {column} lies beyond the supported coordinate range")]
    Unaddressable { line: usize, column: usize },
}

pub type Result<T> = std::result::Result<T, GridError>;
