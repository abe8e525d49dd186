//! One player's turn: choose attack or power-up, resolve it, and enforce the
//! blitz deadline at every prompt.

use log::debug;

use crate::deadline::{Deadline, Prompter, ReadError};
use crate::engine::{AttackOutcome, Player, PowerUp, PowerUpError, TRIPLE_ATTACK_SHOTS, BOARD_SIZE};
use crate::events::{Entry, EventLog};
use crate::input::InputSource;

/// How a turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEnd {
    /// An attack landed or a power-up went off.
    Completed,
    /// The blitz deadline passed first.
    TimedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    AwaitingAction,
    Attacking,
    PoweringUp,
}

pub struct TurnController<'a> {
    prompter: Prompter<'a>,
    events: &'a mut EventLog,
}

impl<'a> TurnController<'a> {
    pub fn new(input: &'a mut dyn InputSource, deadline: Deadline, events: &'a mut EventLog) -> Self {
        Self {
            prompter: Prompter::new(input, deadline),
            events,
        }
    }

    /// Play one turn of `attacker` against `defender`.
    ///
    /// Only a closed or failing input stream is an error; a passed deadline
    /// ends the turn with [`TurnEnd::TimedOut`].
    pub fn run(mut self, attacker: &mut Player, defender: &mut Player) -> Result<TurnEnd, ReadError> {
        match self.drive(attacker, defender) {
            Ok(()) => Ok(TurnEnd::Completed),
            Err(ReadError::TimedOut) => {
                println!("Time's up! Switching turns.");
                self.events.record(Entry::new("time limit reached, switching"));
                Ok(TurnEnd::TimedOut)
            }
            Err(e) => Err(e),
        }
    }

    fn drive(&mut self, attacker: &mut Player, defender: &mut Player) -> Result<(), ReadError> {
        let mut phase = Phase::AwaitingAction;
        loop {
            self.prompter.checkpoint()?;
            debug!("{} turn phase {:?}", attacker.name(), phase);
            phase = match phase {
                Phase::AwaitingAction => {
                    match self
                        .prompter
                        .ask_char("Enter 'a' to attack or 'p' to use your power-up: ")?
                    {
                        'a' => Phase::Attacking,
                        'p' => Phase::PoweringUp,
                        _ => {
                            println!("Invalid action. Try again.");
                            Phase::AwaitingAction
                        }
                    }
                }
                Phase::Attacking => {
                    if self.attack(attacker, defender)?.is_resolved() {
                        return Ok(());
                    }
                    Phase::AwaitingAction
                }
                Phase::PoweringUp => match self.power_up(attacker, defender)? {
                    Ok(()) => return Ok(()),
                    Err(e) => {
                        debug!("{} power-up failed: {}", attacker.name(), e);
                        Phase::AwaitingAction
                    }
                },
            };
        }
    }

    /// Prompt for one coordinate and fire at it.
    fn attack(&mut self, attacker: &mut Player, defender: &mut Player) -> Result<AttackOutcome, ReadError> {
        let name = attacker.name();
        self.events.record(Entry::new("chose attack").by(name));
        let prompt = format!("{}, enter coordinates to attack (row and column): ", name);
        let (row, col) = self.prompter.ask_coord(&prompt)?;
        let outcome = attacker.attack(defender, row, col);
        match outcome {
            AttackOutcome::Hit => {
                println!("It's a hit!");
                self.events.record(Entry::new("successful hit").by(name).at(row, col));
            }
            AttackOutcome::Miss => {
                println!("You missed.");
                self.events.record(Entry::new("unsuccessful hit").by(name).at(row, col));
            }
            AttackOutcome::AlreadyAttacked => {
                println!("You already attacked this position. Try again.")
            }
            AttackOutcome::OutOfBounds => println!("Invalid coordinates. Try again."),
        }
        Ok(outcome)
    }

    /// Gate, then run the captain's power-up. The inner error keeps the
    /// turn alive.
    fn power_up(
        &mut self,
        attacker: &mut Player,
        defender: &mut Player,
    ) -> Result<Result<(), PowerUpError>, ReadError> {
        let name = attacker.name();
        if let Err(e) = attacker.power_up_mut().begin() {
            println!("{}, you have already used your power-up.", name);
            return Ok(Err(e));
        }
        println!("{} is using their power-up!", name);
        let message = format!("using power-up {}", attacker.power_up().name());
        self.events.record(Entry::new(&message).by(name));

        match *attacker.power_up() {
            PowerUp::AreaSearch { .. } => {
                self.area_search(attacker, defender)?;
                Ok(Ok(()))
            }
            PowerUp::LineSearch { .. } => self.line_search(attacker, defender),
            PowerUp::TripleAttack { .. } => {
                // a timed-out volley still counts as a use
                let volley = self.triple_attack(attacker, defender);
                attacker.power_up_mut().complete();
                volley?;
                println!(
                    "You can use this powerup {} more times.",
                    attacker.power_up().remaining()
                );
                Ok(Ok(()))
            }
        }
    }

    fn area_search(&mut self, attacker: &mut Player, defender: &mut Player) -> Result<(), ReadError> {
        let (row, col) = self
            .prompter
            .ask_coord("Enter the center coordinates to search in a 1 radius area (row and column): ")?;
        self.events
            .record(Entry::new("searching in a 1 radius area").by(attacker.name()).at(row, col));
        for probe in attacker.area_search(defender, row, col) {
            report_probe(probe.row, probe.col, probe.outcome);
        }
        Ok(())
    }

    fn line_search(
        &mut self,
        attacker: &mut Player,
        defender: &mut Player,
    ) -> Result<Result<(), PowerUpError>, ReadError> {
        let axis = self
            .prompter
            .ask_char("Enter 'r' to search an entire row or 'c' to search an entire column: ")?;
        let prompt = format!(
            "Enter the index of the row or column to search (0 to {}): ",
            BOARD_SIZE - 1
        );
        let index = self.prompter.ask_int(&prompt)?;
        match attacker.line_search(defender, axis, index) {
            Ok(probes) => {
                for probe in probes {
                    report_probe(probe.row, probe.col, probe.outcome);
                }
                Ok(Ok(()))
            }
            Err(e) => {
                println!("Invalid choice or index.");
                Ok(Err(e))
            }
        }
    }

    /// Three plain attacks in a row. Each one re-prompts until it lands on
    /// a fresh in-bounds cell.
    fn triple_attack(&mut self, attacker: &mut Player, defender: &mut Player) -> Result<(), ReadError> {
        for shot in 0..TRIPLE_ATTACK_SHOTS {
            println!("{} of {} attacks remaining", TRIPLE_ATTACK_SHOTS - shot, TRIPLE_ATTACK_SHOTS);
            while !self.attack(attacker, defender)?.is_resolved() {
                self.prompter.checkpoint()?;
            }
        }
        Ok(())
    }
}

fn report_probe(row: usize, col: usize, outcome: AttackOutcome) {
    match outcome {
        AttackOutcome::Hit => println!("Hit found at ({}, {})!", row, col),
        _ => println!("Miss at ({}, {})", row, col),
    }
}
