use super::Move;
use serde::Deserialize;
use serde::Serialize;

/// Result of a round from the player's perspective. Always computed
/// from a pair of moves, never stored.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl From<(Move, Move)> for Outcome {
    fn from((player, computer): (Move, Move)) -> Self {
        if player == computer {
            Self::Tie
        } else if player.beats() == computer {
            Self::Win
        } else {
            Self::Lose
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Win => "win",
                Self::Lose => "lose",
                Self::Tie => "tie",
            }
        )
    }
}
