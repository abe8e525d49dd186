//! Captain archetypes and the use-tracking state of their power-ups.

use std::fmt;

use log::debug;

use crate::engine::config::{IRONSIDES_FLEET, JENKINS_FLEET, STEVEN_FLEET, TRIPLE_ATTACK_USES};

/// The three playable captains. Each one fixes a fleet and a power-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Captain {
    /// Old Man Jenkins: area search.
    Jenkins,
    /// Old Ironsides: line search.
    Ironsides,
    /// Threeven Steven: triple attack.
    Steven,
}

impl Captain {
    pub const ALL: [Captain; 3] = [Captain::Jenkins, Captain::Ironsides, Captain::Steven];

    /// Short name used in prompts and the event log.
    pub fn name(self) -> &'static str {
        match self {
            Captain::Jenkins => "Jenkins",
            Captain::Ironsides => "Ironsides",
            Captain::Steven => "Steven",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Captain::Jenkins => "Old Man Jenkins",
            Captain::Ironsides => "Old Ironsides",
            Captain::Steven => "Threeven Steven",
        }
    }

    /// Ship lengths to place, in placement order.
    pub fn fleet(self) -> &'static [usize] {
        match self {
            Captain::Jenkins => &JENKINS_FLEET,
            Captain::Ironsides => &IRONSIDES_FLEET,
            Captain::Steven => &STEVEN_FLEET,
        }
    }

    /// Captain for a 1-based menu choice.
    pub fn from_menu(choice: i32) -> Option<Self> {
        match choice {
            1 => Some(Captain::Jenkins),
            2 => Some(Captain::Ironsides),
            3 => Some(Captain::Steven),
            _ => None,
        }
    }
}

impl fmt::Display for Captain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a power-up could not be used this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpError {
    /// No uses left.
    Exhausted,
    /// Target parameters were rejected and the use was refunded.
    InvalidTarget,
}

impl fmt::Display for PowerUpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerUpError::Exhausted => write!(f, "power-up has already been used"),
            PowerUpError::InvalidTarget => write!(f, "invalid choice or index"),
        }
    }
}

impl std::error::Error for PowerUpError {}

/// Power-up of a captain together with its gate.
///
/// Single-use variants flip `used` when the gate opens. The triple attack
/// counts completed invocations and closes after [`TRIPLE_ATTACK_USES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUp {
    AreaSearch { used: bool },
    LineSearch { used: bool },
    TripleAttack { uses: u8 },
}

impl PowerUp {
    pub fn for_captain(captain: Captain) -> Self {
        match captain {
            Captain::Jenkins => PowerUp::AreaSearch { used: false },
            Captain::Ironsides => PowerUp::LineSearch { used: false },
            Captain::Steven => PowerUp::TripleAttack { uses: 0 },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PowerUp::AreaSearch { .. } => "radius search",
            PowerUp::LineSearch { .. } => "row or column search",
            PowerUp::TripleAttack { .. } => "3 attacks",
        }
    }

    /// Invocations still allowed.
    pub fn remaining(&self) -> u8 {
        match *self {
            PowerUp::AreaSearch { used } | PowerUp::LineSearch { used } => u8::from(!used),
            PowerUp::TripleAttack { uses } => TRIPLE_ATTACK_USES.saturating_sub(uses),
        }
    }

    pub fn is_available(&self) -> bool {
        self.remaining() > 0
    }

    /// Open the gate for one invocation.
    ///
    /// Single-use variants are marked used immediately. The triple attack
    /// is only checked here and counted in [`PowerUp::complete`].
    pub fn begin(&mut self) -> Result<(), PowerUpError> {
        if !self.is_available() {
            debug!("{} rejected: exhausted", self.name());
            return Err(PowerUpError::Exhausted);
        }
        match self {
            PowerUp::AreaSearch { used } | PowerUp::LineSearch { used } => *used = true,
            PowerUp::TripleAttack { .. } => {}
        }
        Ok(())
    }

    /// Record a finished triple attack. No-op for the other variants.
    pub fn complete(&mut self) {
        if let PowerUp::TripleAttack { uses } = self {
            *uses = uses.saturating_add(1).min(TRIPLE_ATTACK_USES);
            debug!("triple attack used {}/{}", uses, TRIPLE_ATTACK_USES);
        }
    }

    /// Give back a use after rejected targeting. Only the line search refunds.
    pub fn refund(&mut self) {
        if let PowerUp::LineSearch { used } = self {
            *used = false;
            debug!("line search refunded");
        }
    }
}
