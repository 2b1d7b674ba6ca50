//! Match state machine
//!
//! A match is `MAX_ROUNDS` rounds between the player and an [`Opponent`].
//! Every call to [`MatchState::submit_move`] consumes exactly one round:
//! an unplayable move is a forfeit, never an error. The only error is
//! submitting to a match that is already complete.

use serde::{Deserialize, Serialize};
use crate::moves::{normalize, Move, MoveError, Side};
use crate::opponent::{Opponent, OpponentView};
use crate::rules::{resolve, RoundOutcome, RoundWinner};
use crate::MAX_ROUNDS;

/// Final result of a complete match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchWinner {
    Player,
    Opponent,
    Tie,
}

impl MatchWinner {
    pub fn from_scores(player: u8, opponent: u8) -> Self {
        use core::cmp::Ordering;
        match player.cmp(&opponent) {
            Ordering::Greater => MatchWinner::Player,
            Ordering::Less => MatchWinner::Opponent,
            Ordering::Equal => MatchWinner::Tie,
        }
    }
}

impl core::fmt::Display for MatchWinner {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatchWinner::Player => write!(f, "player"),
            MatchWinner::Opponent => write!(f, "opponent"),
            MatchWinner::Tie => write!(f, "tie"),
        }
    }
}

/// Errors surfaced to the caller of a match
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchError {
    /// All rounds have been played; only a reset can continue.
    MatchAlreadyComplete { winner: MatchWinner },
}

impl core::fmt::Display for MatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatchError::MatchAlreadyComplete { winner } => write!(
                f,
                "match is already complete (winner: {}); reset to play again",
                winner
            ),
        }
    }
}

impl std::error::Error for MatchError {}

/// A round lost by one side because its move could not be played
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forfeit {
    /// The side that forfeited
    pub side: Side,
    pub cause: MoveError,
    /// The other side's move, if one was made before the forfeit
    pub other_move: Option<Move>,
}

impl Forfeit {
    pub fn winner(&self) -> RoundWinner {
        self.side.other().into()
    }

    pub fn reason(&self) -> String {
        self.cause.to_string()
    }
}

/// How a round ended
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    Played {
        player: Move,
        opponent: Move,
        outcome: RoundOutcome,
    },
    Forfeit(Forfeit),
}

impl RoundResult {
    pub fn winner(&self) -> RoundWinner {
        match self {
            RoundResult::Played { outcome, .. } => outcome.winner,
            RoundResult::Forfeit(forfeit) => forfeit.winner(),
        }
    }

    pub fn reason(&self) -> String {
        match self {
            RoundResult::Played { outcome, .. } => outcome.reason.clone(),
            RoundResult::Forfeit(forfeit) => forfeit.reason(),
        }
    }

    pub fn is_forfeit(&self) -> bool {
        matches!(self, RoundResult::Forfeit(_))
    }

    /// Moves actually thrown, as (player, opponent)
    fn moves(&self) -> (Option<Move>, Option<Move>) {
        match self {
            RoundResult::Played { player, opponent, .. } => (Some(*player), Some(*opponent)),
            RoundResult::Forfeit(Forfeit { side: Side::Player, other_move, .. }) => (None, *other_move),
            RoundResult::Forfeit(Forfeit { side: Side::Opponent, other_move, .. }) => (*other_move, None),
        }
    }
}

/// One entry of match history
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-indexed round number
    pub round: u8,
    /// `None` when the player forfeited
    pub player_move: Option<Move>,
    /// `None` when the round was a forfeit and the opponent threw nothing playable
    pub opponent_move: Option<Move>,
    pub winner: RoundWinner,
    pub reason: String,
    pub forfeit: Option<Side>,
}

/// Running score
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u8,
    pub opponent: u8,
}

impl core::fmt::Display for Score {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "You {} - {} Opponent", self.player, self.opponent)
    }
}

/// Read-only view of a match
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub round: u8,
    pub player_score: u8,
    pub opponent_score: u8,
    pub player_bomb_used: bool,
    pub opponent_bomb_used: bool,
    pub game_over: bool,
    pub winner: Option<MatchWinner>,
    pub history: Vec<RoundRecord>,
}

impl MatchSnapshot {
    pub fn player_can_bomb(&self) -> bool {
        !self.player_bomb_used
    }

    pub fn score(&self) -> Score {
        Score { player: self.player_score, opponent: self.opponent_score }
    }
}

/// Summary of where a match stands
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStatus {
    pub game_over: bool,
    pub winner: Option<MatchWinner>,
    pub final_score: Score,
    pub reason: String,
}

/// What one call to `submit_move` produced
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub result: RoundResult,
    pub state: MatchSnapshot,
}

/// Mutable state of a single match
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchState {
    round: u8,
    player_score: u8,
    opponent_score: u8,
    player_bomb_used: bool,
    opponent_bomb_used: bool,
    game_over: bool,
    winner: Option<MatchWinner>,
    history: Vec<RoundRecord>,
}

impl MatchState {
    pub fn new() -> Self {
        Self {
            history: Vec::with_capacity(MAX_ROUNDS as usize),
            ..Self::default()
        }
    }

    pub fn round(&self) -> u8 {
        self.round
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn winner(&self) -> Option<MatchWinner> {
        self.winner
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub fn score(&self) -> Score {
        Score { player: self.player_score, opponent: self.opponent_score }
    }

    /// Check a raw player move without touching the match
    pub fn validate(&self, input: &str) -> Result<Move, MoveError> {
        let chosen = normalize(input)?;
        if chosen.is_bomb() && self.player_bomb_used {
            return Err(MoveError::BombAlreadyUsed(Side::Player));
        }
        Ok(chosen)
    }

    /// Play one round.
    ///
    /// The opponent is consulted only when the player's move is playable.
    /// Nothing is mutated until the round is fully resolved.
    pub fn submit_move<O: Opponent + ?Sized>(
        &mut self,
        input: &str,
        opponent: &mut O,
    ) -> Result<Turn, MatchError> {
        if let Some(winner) = self.winner.filter(|_| self.game_over) {
            log::warn!("move {:?} submitted to a completed match", input);
            return Err(MatchError::MatchAlreadyComplete { winner });
        }

        let result = match self.validate(input) {
            Err(cause) => RoundResult::Forfeit(Forfeit {
                side: Side::Player,
                cause,
                other_move: None,
            }),
            Ok(player) => {
                let thrown = opponent.choose(self.opponent_view());
                if thrown.is_bomb() && self.opponent_bomb_used {
                    RoundResult::Forfeit(Forfeit {
                        side: Side::Opponent,
                        cause: MoveError::BombAlreadyUsed(Side::Opponent),
                        other_move: Some(player),
                    })
                } else {
                    RoundResult::Played {
                        player,
                        opponent: thrown,
                        outcome: resolve(player, thrown),
                    }
                }
            }
        };

        self.apply(&result);
        Ok(Turn { result, state: self.snapshot() })
    }

    fn opponent_view(&self) -> OpponentView {
        OpponentView {
            player_bomb_used: self.player_bomb_used,
            opponent_bomb_used: self.opponent_bomb_used,
            round_index: self.round,
        }
    }

    fn apply(&mut self, result: &RoundResult) {
        let (player_move, opponent_move) = result.moves();
        let winner = result.winner();

        self.round += 1;
        match winner {
            RoundWinner::Player => self.player_score += 1,
            RoundWinner::Opponent => self.opponent_score += 1,
            RoundWinner::Draw => {}
        }
        self.player_bomb_used |= player_move == Some(Move::Bomb);
        self.opponent_bomb_used |= opponent_move == Some(Move::Bomb);
        self.history.push(RoundRecord {
            round: self.round,
            player_move,
            opponent_move,
            winner,
            reason: result.reason(),
            forfeit: match result {
                RoundResult::Forfeit(forfeit) => Some(forfeit.side),
                RoundResult::Played { .. } => None,
            },
        });

        log::debug!(
            "round {}/{}: {:?} vs {:?} -> {:?} ({})",
            self.round,
            MAX_ROUNDS,
            player_move,
            opponent_move,
            winner,
            self.score()
        );

        if self.round == MAX_ROUNDS {
            let final_winner = MatchWinner::from_scores(self.player_score, self.opponent_score);
            self.game_over = true;
            self.winner = Some(final_winner);
            log::info!("match complete: {} ({})", final_winner, self.score());
        }
    }

    /// Discard the match and start over from round 0
    pub fn reset(&mut self) {
        *self = Self::new();
        log::info!("match reset");
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            round: self.round,
            player_score: self.player_score,
            opponent_score: self.opponent_score,
            player_bomb_used: self.player_bomb_used,
            opponent_bomb_used: self.opponent_bomb_used,
            game_over: self.game_over,
            winner: self.winner,
            history: self.history.clone(),
        }
    }

    pub fn status(&self) -> MatchStatus {
        let score = self.score();
        let reason = match self.winner.filter(|_| self.game_over) {
            Some(MatchWinner::Player) => format!("You won {}-{}!", score.player, score.opponent),
            Some(MatchWinner::Opponent) => format!("Opponent won {}-{}.", score.opponent, score.player),
            Some(MatchWinner::Tie) => format!("It's a tie at {}-{}!", score.player, score.opponent),
            None => format!("Round {} of {}", self.round + 1, MAX_ROUNDS),
        };
        MatchStatus {
            game_over: self.game_over,
            winner: self.winner,
            final_score: score,
            reason,
        }
    }
}

/// Start a fresh match
pub fn new_match() -> MatchState {
    MatchState::new()
}

pub fn submit_move<O: Opponent + ?Sized>(
    state: &mut MatchState,
    input: &str,
    opponent: &mut O,
) -> Result<Turn, MatchError> {
    state.submit_move(input, opponent)
}

/// Replace a match wholesale with a fresh one
pub fn reset(state: MatchState) -> MatchState {
    drop(state);
    log::info!("match reset");
    MatchState::new()
}

pub fn snapshot(state: &MatchState) -> MatchSnapshot {
    state.snapshot()
}

/// Play a fresh match from a list of raw inputs
///
/// # Returns
/// One [`Turn`] per input, or `MatchAlreadyComplete` if there are more
/// inputs than rounds.
pub fn run_match<S, O>(inputs: &[S], opponent: &mut O) -> Result<Vec<Turn>, MatchError>
where
    S: AsRef<str>,
    O: Opponent + ?Sized,
{
    let mut state = MatchState::new();
    inputs
        .iter()
        .map(|input| state.submit_move(input.as_ref(), opponent))
        .collect()
}
