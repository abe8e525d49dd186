use std::ops::RangeInclusive;
use std::time::Duration;

/// Width and height of every board.
pub const BOARD_SIZE: usize = 10;

/// Per-turn budget in blitz mode.
pub const BLITZ_TIME_LIMIT: Duration = Duration::from_secs(10);

/// Pause given to hand the device to the other player.
pub const HANDOVER_PAUSE: Duration = Duration::from_secs(5);

/// Number of island drops on the Shattered Sea map. Drops may land on the
/// same cell twice.
pub const ISLAND_DROPS: RangeInclusive<usize> = 5..=19;

/// How many times Threeven Steven may fire a triple attack per match.
pub const TRIPLE_ATTACK_USES: u8 = 3;

/// Shots fired by one triple attack.
pub const TRIPLE_ATTACK_SHOTS: usize = 3;

pub const JENKINS_FLEET: [usize; 5] = [1, 2, 3, 4, 5];
pub const IRONSIDES_FLEET: [usize; 5] = [2, 2, 2, 4, 5];
pub const STEVEN_FLEET: [usize; 5] = [3, 3, 3, 3, 3];

/// Runtime knobs chosen by the binary. Tests build one with zero pauses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub turn_limit: Duration,
    pub handover_pause: Duration,
    /// Flood the terminal with newlines between players.
    pub wipe_screen: bool,
}

impl GameConfig {
    /// Configuration without pauses or screen wipes, for scripted matches.
    pub fn headless(turn_limit: Duration) -> Self {
        Self {
            turn_limit,
            handover_pause: Duration::ZERO,
            wipe_screen: false,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            turn_limit: BLITZ_TIME_LIMIT,
            handover_pause: HANDOVER_PAUSE,
            wipe_screen: true,
        }
    }
}
