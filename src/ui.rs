//! Text rendering: grids, banners and the rules screen.

use std::fmt;
use std::time::Duration;

use crate::engine::{Captain, Grid, BOARD_SIZE};

const MARGIN: &str = "         ";
const RULE: &str = "________________________________________";

const TITLE: &str = r"
    ____        __  __  __          __    _
   / __ )____ _/ /_/ /_/ /__  _____/ /_  (_)___
  / __  / __ `/ __/ __/ / _ \/ ___/ __ \/ / __ \
 / /_/ / /_/ / /_/ /_/ /  __(__  ) / / / / /_/ /
/_____/\__,_/\__/\__/_/\___/____/_/ /_/_/ .___/
                                       /_/";

const OPPONENT_BANNER: &str = r"
 ________________________________________
|  __   __   __   __        ___      ___ |
| /  \ |__) |__) /  \ |\ | |__  |\ |  |  |
| \__/ |    |    \__/ | \| |___ | \|  |  |
|________________________________________|";

const YOU_BANNER: &str = r"
 ________________________________________
|                  __                    |
|             \ / /  \ |  |              |
|              |  \__/ \__/              |
|________________________________________|";

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE)?;
        write!(f, "  {}", MARGIN)?;
        for c in 0..BOARD_SIZE {
            write!(f, "{} ", c)?;
        }
        writeln!(f)?;
        for (r, row) in self.rows().enumerate() {
            write!(f, "{}{} ", MARGIN, r)?;
            for cell in row {
                write!(f, "{} ", cell.symbol())?;
            }
            writeln!(f)?;
        }
        write!(f, "{}", RULE)
    }
}

pub fn print_grid(grid: &Grid) {
    println!("{}", grid);
}

pub fn print_title() {
    println!("{}", TITLE);
}

pub fn print_rules(turn_limit: Duration) {
    println!("Welcome to Battleship! Here are the rules:");
    println!("1. Players take turns to place their ships on the grid.");
    println!("2. Each player has a set of ships to place, with different lengths.");
    println!("3. Players take turns attacking the opponent's grid, trying to hit ships.");
    println!("4. Each captain has a special power-up: Jenkins and Ironsides once per match, Steven three times.");
    println!("5. The first player to sink all opponent ships wins the game.");
    println!(
        "6. In Blitz Battleship mode, players have only {} seconds per turn.",
        turn_limit.as_secs()
    );
    println!();
}

pub fn print_captain_menu() {
    println!("Choose your captain:");
    for (i, captain) in Captain::ALL.iter().enumerate() {
        let fleet: Vec<String> = captain.fleet().iter().map(|l| l.to_string()).collect();
        println!(
            "{}. {} ({} ships: {})",
            i + 1,
            captain.title(),
            fleet.len(),
            fleet.join(",")
        );
    }
}

/// Own board, then the observed grid of the opponent.
pub fn print_turn_view(own: &Grid, observed: &Grid) {
    println!("{}", YOU_BANNER);
    print_grid(own);
    println!("{}", OPPONENT_BANNER);
    print_grid(observed);
}

pub fn print_observed(observed: &Grid) {
    println!("{}", OPPONENT_BANNER);
    print_grid(observed);
}

/// Push previous output off screen before the next player looks.
pub fn wipe_screen(lines: usize) {
    print!("{}", "\n".repeat(lines));
}
