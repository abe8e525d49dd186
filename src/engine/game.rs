use log::debug;

use crate::engine::board::Grid;
use crate::engine::captain::Captain;
use crate::engine::player::Player;

/// Classic turns are untimed, blitz turns run against a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Classic,
    Blitz,
}

impl Mode {
    pub fn from_menu(choice: i32) -> Option<Self> {
        match choice {
            1 => Some(Mode::Classic),
            2 => Some(Mode::Blitz),
            _ => None,
        }
    }

    pub fn is_timed(self) -> bool {
        self == Mode::Blitz
    }
}

/// Shared map both boards start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapKind {
    /// All water.
    OpenSeas,
    /// Randomly scattered islands.
    ShatteredSea,
}

impl MapKind {
    pub fn from_menu(choice: i32) -> Option<Self> {
        match choice {
            1 => Some(MapKind::OpenSeas),
            2 => Some(MapKind::ShatteredSea),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            MapKind::OpenSeas => "The Open Seas",
            MapKind::ShatteredSea => "The Shattered Sea",
        }
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Index of the winning player.
    Won(usize),
}

/// Two players, the mode, and whose turn it is.
#[derive(Debug, Clone)]
pub struct Match {
    players: [Player; 2],
    mode: Mode,
    active: usize,
    turns: usize,
    status: GameStatus,
}

impl Match {
    /// Both boards get the islands of `map`, so island layout is identical.
    pub fn new(map: &Grid, captains: [Captain; 2], mode: Mode) -> Self {
        Self {
            players: captains.map(|c| Player::new(c, map)),
            mode,
            active: 0,
            turns: 0,
            status: GameStatus::InProgress,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Completed turns so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn player(&self, index: usize) -> &Player {
        &self.players[index]
    }

    pub fn player_mut(&mut self, index: usize) -> &mut Player {
        &mut self.players[index]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &Player {
        &self.players[self.active]
    }

    pub fn opponent(&self) -> &Player {
        &self.players[1 - self.active]
    }

    /// Active player and opponent, both mutable.
    pub fn sides_mut(&mut self) -> (&mut Player, &mut Player) {
        let [first, second] = &mut self.players;
        if self.active == 0 {
            (first, second)
        } else {
            (second, first)
        }
    }

    /// Close the active player's turn. Declares them the winner if the
    /// opponent has no ship cells left, otherwise hands the turn over.
    pub fn end_turn(&mut self) -> GameStatus {
        if self.status != GameStatus::InProgress {
            return self.status;
        }
        self.turns += 1;
        if self.opponent().all_ships_sunk() {
            self.status = GameStatus::Won(self.active);
            debug!("player {} wins after {} turns", self.active + 1, self.turns);
        } else {
            self.active = 1 - self.active;
        }
        self.status
    }
}
