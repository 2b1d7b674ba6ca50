//! Match Logic for Rock-Paper-Scissors-Plus
//!
//! Referee core for a three-round match between a human player and a
//! scripted opponent, with a once-per-match bomb for each side.
//! This crate is compiled to:
//! - Native (for terminal front-ends)
//! - WASM (for browser front-ends)

mod moves;
mod rules;
mod random;
mod opponent;
mod game;

#[cfg(feature = "wasm")]
mod wasm;

/// Rounds in every match
pub const MAX_ROUNDS: u8 = 3;

pub use moves::{normalize, Move, MoveError, Side};
pub use rules::{resolve, RoundOutcome, RoundWinner};
pub use random::{RandomSource, SeededRng};
#[cfg(feature = "entropy")]
pub use random::EntropyRng;
pub use opponent::{opponent_move, BombOdds, Opponent, OpponentView, ScriptedOpponent, WeightedOpponent};
pub use game::{
    new_match, reset, run_match, snapshot, submit_move, Forfeit, MatchError, MatchSnapshot,
    MatchState, MatchStatus, MatchWinner, RoundRecord, RoundResult, Score, Turn,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_surface_plays_a_match() {
        let mut opponent = WeightedOpponent::with_odds(SeededRng::from_u64(1), BombOdds::never());
        let mut state = new_match();

        for input in ["rock", "Paper", "???"] {
            submit_move(&mut state, input, &mut opponent).unwrap();
        }

        let view = snapshot(&state);
        assert!(view.game_over);
        assert_eq!(view.history.len(), MAX_ROUNDS as usize);
        assert!(!view.opponent_bomb_used);
        assert_eq!(view.history[2].forfeit, Some(Side::Player));
        assert_eq!(
            submit_move(&mut state, "rock", &mut opponent).unwrap_err(),
            MatchError::MatchAlreadyComplete { winner: view.winner.unwrap() }
        );

        let state = reset(state);
        assert_eq!(snapshot(&state), MatchSnapshot::default());
    }
}
