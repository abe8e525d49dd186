//! Common types for the rules engine: cell states, orientations, attack
//! outcomes and board errors.

use std::fmt;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Water,
    Island,
    Ship,
    Hit,
    Miss,
}

impl Cell {
    /// Symbol used when rendering the grid.
    pub fn symbol(self) -> char {
        match self {
            Cell::Water => '~',
            Cell::Island => 'I',
            Cell::Ship => 'S',
            Cell::Hit => 'X',
            Cell::Miss => 'O',
        }
    }
}

/// Direction a ship extends from its origin cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Towards increasing column.
    Horizontal,
    /// Towards increasing row.
    Vertical,
    /// Row and column both increase by one per step.
    Diagonal,
}

impl Orientation {
    /// Parse the `h`/`v`/`d` placement letter. Anything else is rejected.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'h' => Some(Orientation::Horizontal),
            'v' => Some(Orientation::Vertical),
            'd' => Some(Orientation::Diagonal),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
            Orientation::Diagonal => 'd',
        }
    }

    /// Row and column increment for one step along the ship.
    pub(crate) fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::Diagonal => (1, 1),
        }
    }
}

/// Result of resolving one shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    Hit,
    Miss,
    /// The cell was already hit, already missed, or is an island.
    AlreadyAttacked,
    OutOfBounds,
}

impl AttackOutcome {
    /// `true` for the outcomes that finish a plain attack.
    pub fn is_resolved(self) -> bool {
        matches!(self, AttackOutcome::Hit | AttackOutcome::Miss)
    }
}

/// Errors returned by placement on a [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Part of the ship would lie outside the board.
    OutOfBounds,
    /// A cell on the path is not open water (ship or island).
    Occupied,
    /// Orientation letter is not one of `h`, `v`, `d`.
    InvalidOrientation,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::Occupied => write!(f, "Ship placement overlaps a ship or an island"),
            BoardError::InvalidOrientation => write!(f, "Orientation must be h, v or d"),
        }
    }
}

impl std::error::Error for BoardError {}
