//! The two decisions available to the player on turn.

use serde::{Deserialize, Serialize};

/// Action taken by the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Roll the die again, risking the turn total.
    Roll,
    /// Bank the turn total and pass the turn.
    Hold,
}

impl Action {
    /// Pick the action from the two expected win probabilities.
    ///
    /// Rolling must be strictly better; a tie holds.
    pub fn choose(p_roll: f64, p_hold: f64) -> Self {
        if p_roll > p_hold {
            Action::Roll
        } else {
            Action::Hold
        }
    }

    /// Whether this action is [`Action::Roll`].
    pub fn is_roll(self) -> bool {
        self == Action::Roll
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Roll => write!(f, "roll"),
            Action::Hold => write!(f, "hold"),
        }
    }
}
