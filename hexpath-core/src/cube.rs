//! Cube coordinates and the six hex directions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Cube hex coordinates
///
/// Valid cells satisfy `x + y + z == 0`. The invariant is not enforced:
/// any integer triple can be constructed, and the arithmetic operators
/// preserve it only when both operands already satisfy it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CubeCoord {
    pub const ORIGIN: CubeCoord = CubeCoord::new(0, 0, 0);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Build from axial (q, r); s is derived.
    pub const fn from_axial(q: i32, r: i32) -> Self {
        Self::new(q, r, -q - r)
    }

    pub const fn x(&self) -> i32 {
        self.x
    }

    pub const fn y(&self) -> i32 {
        self.y
    }

    pub const fn z(&self) -> i32 {
        self.z
    }

    /// Axial alias for `x`
    pub const fn q(&self) -> i32 {
        self.x
    }

    /// Axial alias for `y`
    pub const fn r(&self) -> i32 {
        self.y
    }

    /// Axial alias for `z`
    pub const fn s(&self) -> i32 {
        self.z
    }

    /// Whether `x + y + z == 0`
    pub const fn is_valid(&self) -> bool {
        self.x + self.y + self.z == 0
    }

    /// Distance from the origin
    pub fn length(&self) -> i32 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }

    /// Distance between two cells: the largest component of the difference
    pub fn distance_to(&self, other: CubeCoord) -> i32 {
        (*self - other).length()
    }

    /// Get neighbor in direction
    pub fn neighbor(&self, direction: Direction) -> CubeCoord {
        *self + direction.unit()
    }

    /// All six neighbors, in `Direction::ALL` order
    pub fn neighbors(&self) -> [CubeCoord; 6] {
        Direction::ALL.map(|d| self.neighbor(d))
    }
}

impl Add for CubeCoord {
    type Output = CubeCoord;

    fn add(self, rhs: CubeCoord) -> CubeCoord {
        CubeCoord::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for CubeCoord {
    type Output = CubeCoord;

    fn sub(self, rhs: CubeCoord) -> CubeCoord {
        CubeCoord::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for CubeCoord {
    type Output = CubeCoord;

    fn neg(self) -> CubeCoord {
        CubeCoord::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for CubeCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// One of the six steps between adjacent cells
///
/// The discriminant is the index into `CUBE_DIRECTIONS`; searches walk the
/// directions in this order, so it also fixes neighbor expansion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Right = 0,
    TopRight = 1,
    TopLeft = 2,
    Left = 3,
    BottomLeft = 4,
    BottomRight = 5,
}

/// Unit vectors indexed by `Direction as usize`
pub const CUBE_DIRECTIONS: [CubeCoord; 6] = [
    CubeCoord::new(1, 0, -1),  // Right
    CubeCoord::new(1, -1, 0),  // TopRight
    CubeCoord::new(0, -1, 1),  // TopLeft
    CubeCoord::new(-1, 0, 1),  // Left
    CubeCoord::new(-1, 1, 0),  // BottomLeft
    CubeCoord::new(0, 1, -1),  // BottomRight
];

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Right,
        Direction::TopRight,
        Direction::TopLeft,
        Direction::Left,
        Direction::BottomLeft,
        Direction::BottomRight,
    ];

    /// Fixed unit vector for this direction
    pub const fn unit(self) -> CubeCoord {
        CUBE_DIRECTIONS[self as usize]
    }

    pub const fn opposite(self) -> Direction {
        Direction::ALL[(self as usize + 3) % 6]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::TopRight => "top_right",
            Direction::TopLeft => "top_left",
            Direction::Left => "left",
            Direction::BottomLeft => "bottom_left",
            Direction::BottomRight => "bottom_right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
