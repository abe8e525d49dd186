//! The square grid of cell states, ship placement and shot resolution.

use std::fmt;

use log::trace;
use rand::Rng;

use crate::engine::common::{AttackOutcome, BoardError, Cell, Orientation};
use crate::engine::config::{BOARD_SIZE, ISLAND_DROPS};

/// A `BOARD_SIZE` x `BOARD_SIZE` matrix of cells.
///
/// The same type is used for a player's own board and for the observed grid
/// tracking what that player knows about the opponent.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

/// Convert signed coordinates to indices, or `None` when off the board.
pub fn index(row: i32, col: i32) -> Option<(usize, usize)> {
    let n = BOARD_SIZE as i32;
    if (0..n).contains(&row) && (0..n).contains(&col) {
        Some((row as usize, col as usize))
    } else {
        None
    }
}

impl Grid {
    /// All water.
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::Water; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The Shattered Sea map: open water with a random scatter of islands.
    pub fn shattered_sea<R: Rng>(rng: &mut R) -> Self {
        let mut grid = Grid::new();
        let drops = rng.random_range(ISLAND_DROPS);
        for _ in 0..drops {
            let r = rng.random_range(0..BOARD_SIZE);
            let c = rng.random_range(0..BOARD_SIZE);
            grid.cells[r][c] = Cell::Island;
        }
        trace!("scattered {} island drops", drops);
        grid
    }

    /// Copy of this grid keeping only its islands; everything else is water.
    pub fn islands_only(&self) -> Self {
        let mut grid = Grid::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                if cell == Cell::Island {
                    grid.cells[r][c] = Cell::Island;
                }
            }
        }
        grid
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> {
        self.cells.iter()
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == state).count()
    }

    /// `true` once no `Ship` cell is left.
    pub fn all_ships_sunk(&self) -> bool {
        self.count(Cell::Ship) == 0
    }

    /// Check a ship of `length` starting at (`row`, `col`).
    ///
    /// Every cell on the path must be on the board and hold water. A
    /// zero-length ship has an empty path and always passes.
    pub fn check_placement(
        &self,
        row: i32,
        col: i32,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let (dr, dc) = orientation.step();
        for i in 0..length as i64 {
            let r = row as i64 + i * dr as i64;
            let c = col as i64 + i * dc as i64;
            let n = BOARD_SIZE as i64;
            if !(0..n).contains(&r) || !(0..n).contains(&c) {
                return Err(BoardError::OutOfBounds);
            }
            if self.cells[r as usize][c as usize] != Cell::Water {
                return Err(BoardError::Occupied);
            }
        }
        Ok(())
    }

    /// Whether [`Grid::place`] would accept this ship. Never mutates.
    pub fn validate(&self, row: i32, col: i32, length: usize, orientation: Orientation) -> bool {
        self.check_placement(row, col, length, orientation).is_ok()
    }

    /// Validate and then write `Ship` on every cell of the path.
    pub fn place(
        &mut self,
        row: i32,
        col: i32,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        self.check_placement(row, col, length, orientation)?;
        let (dr, dc) = orientation.step();
        // checked above: row and col are non-negative when length > 0
        for i in 0..length {
            self.cells[row as usize + i * dr][col as usize + i * dc] = Cell::Ship;
        }
        Ok(())
    }

    /// Shoot at an in-bounds cell of this (defender) grid, mirroring the
    /// result into `observed`.
    pub(crate) fn strike(&mut self, observed: &mut Grid, row: usize, col: usize) -> AttackOutcome {
        let outcome = match self.cells[row][col] {
            Cell::Ship => Cell::Hit,
            Cell::Water => Cell::Miss,
            Cell::Hit | Cell::Miss | Cell::Island => return AttackOutcome::AlreadyAttacked,
        };
        self.cells[row][col] = outcome;
        observed.cells[row][col] = outcome;
        if outcome == Cell::Hit {
            AttackOutcome::Hit
        } else {
            AttackOutcome::Miss
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{")?;
        for row in &self.cells {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            writeln!(f, "  {}", line)?;
        }
        write!(f, "}}")
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new()
    }
}

/// Resolve a single shot at (`row`, `col`) of `defender`.
///
/// `Hit` and `Miss` update both grids. `AlreadyAttacked` and `OutOfBounds`
/// leave them untouched.
pub fn resolve_attack(defender: &mut Grid, observed: &mut Grid, row: i32, col: i32) -> AttackOutcome {
    match index(row, col) {
        Some((r, c)) => defender.strike(observed, r, c),
        None => AttackOutcome::OutOfBounds,
    }
}
