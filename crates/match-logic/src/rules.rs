//! Round resolution

use serde::{Deserialize, Serialize};
use crate::moves::{Move, Side};

/// Who took a single round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundWinner {
    Player,
    Opponent,
    Draw,
}

impl RoundWinner {
    pub fn side(self) -> Option<Side> {
        match self {
            RoundWinner::Player => Some(Side::Player),
            RoundWinner::Opponent => Some(Side::Opponent),
            RoundWinner::Draw => None,
        }
    }
}

impl From<Side> for RoundWinner {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => RoundWinner::Player,
            Side::Opponent => RoundWinner::Opponent,
        }
    }
}

/// Result of resolving one pair of moves
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub winner: RoundWinner,
    pub reason: String,
    /// Either side played bomb
    pub bomb_used: bool,
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Resolve the player's move `a` against the opponent's move `b`.
///
/// Total over all sixteen pairs. Precedence: double bomb, single bomb,
/// mirror, classic relation.
pub fn resolve(a: Move, b: Move) -> RoundOutcome {
    match (a, b) {
        (Move::Bomb, Move::Bomb) => RoundOutcome {
            winner: RoundWinner::Draw,
            reason: "Both players used bomb! It's a draw.".to_string(),
            bomb_used: true,
        },
        (Move::Bomb, other) => RoundOutcome {
            winner: RoundWinner::Player,
            reason: format!("BOOM! Your bomb obliterated the opponent's {}!", other),
            bomb_used: true,
        },
        (other, Move::Bomb) => RoundOutcome {
            winner: RoundWinner::Opponent,
            reason: format!("BOOM! Opponent's bomb obliterated your {}!", other),
            bomb_used: true,
        },
        (a, b) if a == b => RoundOutcome {
            winner: RoundWinner::Draw,
            reason: format!("Both chose {}. It's a draw!", a),
            bomb_used: false,
        },
        (a, b) if a.beats(b) => RoundOutcome {
            winner: RoundWinner::Player,
            reason: format!("{} beats {}!", capitalize(a.name()), b),
            bomb_used: false,
        },
        (a, b) => {
            // Distinct classic moves: exactly one direction of the relation holds.
            debug_assert!(b.beats(a), "no rule resolves {} vs {}", a, b);
            RoundOutcome {
                winner: RoundWinner::Opponent,
                reason: format!("{} beats {}!", capitalize(b.name()), a),
                bomb_used: false,
            }
        }
    }
}
