use crate::game::Move;
use crate::game::Outcome;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayResponse {
    pub player_move: Move,
    pub computer_move: Move,
    pub outcome: Outcome,
}

impl From<(Move, Move)> for PlayResponse {
    fn from((player, computer): (Move, Move)) -> Self {
        Self {
            player_move: player,
            computer_move: computer,
            outcome: Outcome::from((player, computer)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn invalid_move() -> Self {
        Self {
            error: String::from("Invalid move. Use one of: rock, paper, scissors."),
        }
    }
}
