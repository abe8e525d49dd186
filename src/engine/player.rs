use crate::engine::board::{resolve_attack, Grid};
use crate::engine::captain::{Captain, PowerUp, PowerUpError};
use crate::engine::common::AttackOutcome;
use crate::engine::power::{self, Line, Probe};

/// One side of a match: the chosen captain, their board, what they have
/// learned about the opponent and the state of their power-up.
///
/// Choosing another captain means building a new `Player`; the power-up
/// gate is never reset on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    captain: Captain,
    board: Grid,
    observed: Grid,
    power_up: PowerUp,
}

impl Player {
    /// Fresh player whose board carries the islands of the shared `map`.
    pub fn new(captain: Captain, map: &Grid) -> Self {
        Self {
            captain,
            board: map.islands_only(),
            observed: Grid::new(),
            power_up: PowerUp::for_captain(captain),
        }
    }

    pub fn captain(&self) -> Captain {
        self.captain
    }

    pub fn name(&self) -> &'static str {
        self.captain.name()
    }

    pub fn fleet(&self) -> &'static [usize] {
        self.captain.fleet()
    }

    pub fn board(&self) -> &Grid {
        &self.board
    }

    /// Mutable board, used during the placement phase.
    pub fn board_mut(&mut self) -> &mut Grid {
        &mut self.board
    }

    pub fn observed(&self) -> &Grid {
        &self.observed
    }

    pub fn power_up(&self) -> &PowerUp {
        &self.power_up
    }

    pub fn power_up_mut(&mut self) -> &mut PowerUp {
        &mut self.power_up
    }

    pub fn all_ships_sunk(&self) -> bool {
        self.board.all_ships_sunk()
    }

    /// Fire one shot at `opponent`.
    pub fn attack(&mut self, opponent: &mut Player, row: i32, col: i32) -> AttackOutcome {
        resolve_attack(&mut opponent.board, &mut self.observed, row, col)
    }

    /// Area search effect. The gate must already have been opened.
    pub fn area_search(&mut self, opponent: &mut Player, row: i32, col: i32) -> Vec<Probe> {
        power::area_search(&mut opponent.board, &mut self.observed, row, col)
    }

    /// Line search effect. The gate must already have been opened; an
    /// invalid axis or index refunds it.
    pub fn line_search(
        &mut self,
        opponent: &mut Player,
        axis: char,
        index: i32,
    ) -> Result<Vec<Probe>, PowerUpError> {
        match Line::parse(axis, index) {
            Some(line) => Ok(power::line_search(&mut opponent.board, &mut self.observed, line)),
            None => {
                self.power_up.refund();
                Err(PowerUpError::InvalidTarget)
            }
        }
    }
}
