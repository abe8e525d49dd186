//! Rules engine: boards, placement, shot resolution, captains and their
//! power-ups, and match state. Nothing in here touches the console or the
//! clock.

pub mod board;
pub mod captain;
pub mod common;
pub mod config;
pub mod game;
pub mod player;
pub mod power;

pub use board::{index, resolve_attack, Grid};
pub use captain::{Captain, PowerUp, PowerUpError};
pub use common::{AttackOutcome, BoardError, Cell, Orientation};
pub use config::*;
pub use game::{GameStatus, MapKind, Match, Mode};
pub use player::Player;
pub use power::{area_search, line_search, Line, Probe};
