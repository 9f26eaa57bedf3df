use std::ops::{Add, Sub};

/// A cell coordinate on the half-grid. Coordinates are signed so that
/// offsets may step outside the board; bounds are checked by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rotates a unit direction by 90 degrees: `(dx, dy) -> (-dy, dx)`.
    pub const fn rotated(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    /// `self + rhs`, or `None` if either coordinate overflows.
    pub fn checked_add(self, rhs: Position) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(rhs.x)?,
            y: self.y.checked_add(rhs.y)?,
        })
    }

    pub const fn scaled(self, factor: i32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Initial run directions, indexed by `random % 4`: up, down, right, left.
pub const RUN_DIRECTIONS: [Position; 4] = [
    Position::new(0, -1),
    Position::new(0, 1),
    Position::new(1, 0),
    Position::new(-1, 0),
];
