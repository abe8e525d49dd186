//! Match orchestration: setup menus, fleet placement for both players, then
//! alternating turns until one side has no ships left.

use std::thread;

use log::debug;
use rand::rngs::SmallRng;

use crate::deadline::{Deadline, Prompter, ReadError};
use crate::engine::{
    BoardError, Captain, GameConfig, GameStatus, Grid, MapKind, Match, Mode, Orientation, Player,
};
use crate::events::{Entry, EventLog};
use crate::input::InputSource;
use crate::turn::{TurnController, TurnEnd};
use crate::ui;

/// Summary of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchReport {
    /// Index (0 or 1) of the winning player.
    pub winner: usize,
    pub captain: Captain,
    pub turns: usize,
    /// Turns that ended because the blitz deadline passed.
    pub timeouts: usize,
}

/// Owns the collaborators a match needs: input, event log, config and the
/// map RNG.
pub struct Session<I> {
    input: I,
    events: EventLog,
    config: GameConfig,
    rng: SmallRng,
}

impl<I: InputSource> Session<I> {
    pub fn new(input: I, events: EventLog, config: GameConfig, rng: SmallRng) -> Self {
        Self {
            input,
            events,
            config,
            rng,
        }
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Setup followed by play.
    pub fn run(&mut self) -> Result<MatchReport, ReadError> {
        let mut game = self.setup()?;
        self.play(&mut game)
    }

    /// Map, captains, mode, then both fleets.
    pub fn setup(&mut self) -> Result<Match, ReadError> {
        self.events.record(Entry::new("game initialized"));
        ui::print_title();
        ui::print_rules(self.config.turn_limit);

        let map = self.select_map()?;
        let captains = [self.select_captain()?, self.select_captain()?];
        let mode = self.select_mode()?;
        let mut game = Match::new(&map, captains, mode);

        for index in 0..2 {
            self.place_fleet(game.player_mut(index))?;
            println!("Ships placed please switch players");
            self.handover();
        }
        Ok(game)
    }

    fn select_map(&mut self) -> Result<Grid, ReadError> {
        let mut prompt = Prompter::untimed(&mut self.input);
        let kind = loop {
            println!("Select a map:");
            println!("1. The Open Seas (All water)");
            println!("2. The Shattered Sea (Random islands)");
            match MapKind::from_menu(prompt.ask_int("Enter your choice: ")?) {
                Some(kind) => break kind,
                None => println!("Invalid choice. Please select again."),
            }
        };
        let map = match kind {
            MapKind::OpenSeas => Grid::new(),
            MapKind::ShatteredSea => Grid::shattered_sea(&mut self.rng),
        };
        println!("You have selected the map '{}'", kind.title());
        let message = format!("the {} map was chosen", kind.title().trim_start_matches("The "));
        self.events.record(Entry::new(&message));
        println!("Here is the selected map:");
        ui::print_grid(&map);
        println!();
        Ok(map)
    }

    fn select_captain(&mut self) -> Result<Captain, ReadError> {
        let mut prompt = Prompter::untimed(&mut self.input);
        ui::print_captain_menu();
        let captain = loop {
            match Captain::from_menu(prompt.ask_int("Enter your choice: ")?) {
                Some(captain) => break captain,
                None => println!("Invalid choice, please pick again (1, 2, or 3)."),
            }
        };
        println!("{} has been chosen as captain!", captain.name());
        self.events.record(Entry::new("chosen captain").by(captain.name()));
        Ok(captain)
    }

    fn select_mode(&mut self) -> Result<Mode, ReadError> {
        let mut prompt = Prompter::untimed(&mut self.input);
        let mode = loop {
            println!("Select game mode:");
            println!("1. Classic Battleship");
            println!("2. Blitz Battleship");
            match Mode::from_menu(prompt.ask_int("Enter your choice: ")?) {
                Some(mode) => break mode,
                None => println!("Invalid choice. Please select again."),
            }
        };
        match mode {
            Mode::Classic => {
                println!("You have selected 'Classic Battleship' mode.");
                self.events.record(Entry::new("classic mode was selected"));
            }
            Mode::Blitz => {
                println!("You have selected 'Blitz Battleship' mode.");
                self.events.record(Entry::new("blitz mode was selected"));
            }
        }
        println!();
        Ok(mode)
    }

    /// Prompt for every ship of the player's fleet until each one fits.
    /// Placement has no timer.
    pub fn place_fleet(&mut self, player: &mut Player) -> Result<(), ReadError> {
        let mut prompt = Prompter::untimed(&mut self.input);
        let name = player.name();
        println!("{}, place your ships on the grid.", name);
        ui::print_grid(player.board());
        for (i, &length) in player.fleet().iter().enumerate() {
            let text = format!(
                "Enter starting coordinates to place ship {} of length {} (row and column), and direction (h/v/d): ",
                i + 1,
                length
            );
            loop {
                let (row, col, direction) = prompt.ask_placement(&text)?;
                let placed = Orientation::from_char(direction)
                    .ok_or(BoardError::InvalidOrientation)
                    .and_then(|o| player.board_mut().place(row, col, length, o));
                match placed {
                    Ok(()) => {
                        self.events
                            .record(Entry::new("placed ship").by(name).at(row, col).facing(direction));
                        ui::print_grid(player.board());
                        break;
                    }
                    Err(e) => {
                        debug!("{} placement rejected: {}", name, e);
                        println!("Invalid position or already occupied. Try again.");
                    }
                }
            }
        }
        Ok(())
    }

    /// Alternate turns until a winner is declared.
    pub fn play(&mut self, game: &mut Match) -> Result<MatchReport, ReadError> {
        let mut timeouts = 0;
        loop {
            let deadline = match game.mode() {
                Mode::Blitz => Deadline::starting_now(self.config.turn_limit),
                Mode::Classic => Deadline::unbounded(),
            };
            let active = game.active();
            println!("{}'s turn:", active.name());
            ui::print_turn_view(active.board(), active.observed());

            let (attacker, defender) = game.sides_mut();
            let end = TurnController::new(&mut self.input, deadline, &mut self.events)
                .run(attacker, defender)?;
            if end == TurnEnd::TimedOut {
                timeouts += 1;
            }

            println!("Updated Grid:");
            ui::print_observed(game.active().observed());

            if let GameStatus::Won(winner) = game.end_turn() {
                let name = game.player(winner).name();
                println!("{} wins! All opponent ships have been sunk.", name);
                self.events.record(Entry::new("has won the game").by(name));
                self.events.record(Entry::new("game is now terminated"));
                return Ok(MatchReport {
                    winner,
                    captain: game.player(winner).captain(),
                    turns: game.turns(),
                    timeouts,
                });
            }
            println!("Switching turns. Please hand device to other player...");
            self.handover();
        }
    }

    fn handover(&self) {
        if !self.config.handover_pause.is_zero() {
            thread::sleep(self.config.handover_pause);
        }
        if self.config.wipe_screen {
            ui::wipe_screen(100);
        }
    }
}
