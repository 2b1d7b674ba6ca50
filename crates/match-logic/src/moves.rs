//! Move definitions and input normalization

use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// A move in Rock-Paper-Scissors-Plus
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    /// Beats every classic move, draws against another bomb. Once per side per match.
    Bomb,
}

impl Move {
    /// All four moves, in display order
    pub const ALL: [Move; 4] = [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb];

    /// The three moves that follow the classic beats relation
    pub const CLASSIC: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
        }
    }

    pub fn is_bomb(self) -> bool {
        self == Move::Bomb
    }

    /// Classic relation only: rock > scissors > paper > rock.
    /// Bomb never "beats" through this relation; `resolve` handles it first.
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }
}

impl core::fmt::Display for Move {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        normalize(input)
    }
}

/// One of the two participants in a match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Reasons a submitted move cannot be played.
///
/// Neither variant reaches the caller as an error: the match turns both
/// into a forfeit of the offending side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveError {
    /// Input does not name one of the four moves.
    InvalidMove { input: String },
    /// The side already spent its bomb this match.
    BombAlreadyUsed(Side),
}

impl core::fmt::Display for MoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveError::InvalidMove { input } => write!(
                f,
                "Invalid move '{}'. Choose: rock, paper, scissors, or bomb",
                input
            ),
            MoveError::BombAlreadyUsed(Side::Player) => {
                write!(f, "You've already used your bomb this game!")
            }
            MoveError::BombAlreadyUsed(Side::Opponent) => {
                write!(f, "Opponent already used its bomb this game!")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Lower-case and trim raw input, then match it against the four move names.
pub fn normalize(input: &str) -> Result<Move, MoveError> {
    let normalized = input.trim().to_lowercase();
    Move::ALL
        .into_iter()
        .find(|m| m.name() == normalized)
        .ok_or_else(|| MoveError::InvalidMove {
            input: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_names() {
        assert_eq!(normalize("rock"), Ok(Move::Rock));
        assert_eq!(normalize("paper"), Ok(Move::Paper));
        assert_eq!(normalize("scissors"), Ok(Move::Scissors));
        assert_eq!(normalize("bomb"), Ok(Move::Bomb));
    }

    #[test]
    fn test_normalize_case_and_whitespace() {
        assert_eq!(normalize("  ROCK \n"), Ok(Move::Rock));
        assert_eq!(normalize("\tBoMb"), Ok(Move::Bomb));
        assert_eq!("Scissors".parse::<Move>(), Ok(Move::Scissors));
    }

    #[test]
    fn test_normalize_rejects_unknown() {
        for input in ["", "   ", "lizard", "rocks", "r", "paper scissors"] {
            assert_eq!(
                normalize(input),
                Err(MoveError::InvalidMove { input: input.to_string() }),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_beats_is_classic_only() {
        assert!(Move::Rock.beats(Move::Scissors));
        assert!(Move::Scissors.beats(Move::Paper));
        assert!(Move::Paper.beats(Move::Rock));
        assert!(!Move::Scissors.beats(Move::Rock));
        for m in Move::ALL {
            assert!(!m.beats(m));
            assert!(!Move::Bomb.beats(m));
            assert!(!m.beats(Move::Bomb));
        }
    }

    #[test]
    fn test_error_messages() {
        let invalid = MoveError::InvalidMove { input: "lizard".to_string() };
        assert_eq!(
            invalid.to_string(),
            "Invalid move 'lizard'. Choose: rock, paper, scissors, or bomb"
        );
        assert_eq!(
            MoveError::BombAlreadyUsed(Side::Player).to_string(),
            "You've already used your bomb this game!"
        );
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Move::Scissors).unwrap(), "\"scissors\"");
        let m: Move = serde_json::from_str("\"bomb\"").unwrap();
        assert_eq!(m, Move::Bomb);
        assert_eq!(serde_json::to_string(&Side::Opponent).unwrap(), "\"opponent\"");
    }
}
