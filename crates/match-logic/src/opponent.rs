//! Opponent move generation

use serde::{Deserialize, Serialize};
use crate::moves::Move;
use crate::random::RandomSource;

/// Percentage chance the opponent throws its bomb, by round index
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BombOdds {
    /// Round index 0
    pub opening: u8,
    /// Round index 1
    pub middle: u8,
    /// Round index 2, only while the player still holds a bomb
    pub finale: u8,
}

impl BombOdds {
    /// Save the bomb, then fire it late if the player is still armed
    pub fn standard() -> Self {
        Self { opening: 20, middle: 40, finale: 70 }
    }

    /// An opponent that never bombs
    pub fn never() -> Self {
        Self { opening: 0, middle: 0, finale: 0 }
    }
}

impl Default for BombOdds {
    fn default() -> Self {
        Self::standard()
    }
}

/// What the opponent is allowed to know when choosing a move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentView {
    pub player_bomb_used: bool,
    pub opponent_bomb_used: bool,
    /// 0-indexed round about to be played
    pub round_index: u8,
}

/// Weighted-random opponent move.
///
/// While the opponent still holds its bomb it may throw it: with
/// `odds.finale` in the last round if the player has not bombed yet,
/// otherwise with `odds.opening` / `odds.middle` in rounds 0 and 1.
/// Everything else is uniform over rock, paper and scissors.
pub fn opponent_move<R: RandomSource + ?Sized>(
    view: OpponentView,
    odds: &BombOdds,
    rng: &mut R,
) -> Move {
    if !view.opponent_bomb_used {
        let chance = match view.round_index {
            0 => Some(odds.opening),
            1 => Some(odds.middle),
            2 if !view.player_bomb_used => Some(odds.finale),
            _ => None,
        };
        if let Some(chance) = chance {
            if rng.next_percent() < chance {
                return Move::Bomb;
            }
        }
    }

    Move::CLASSIC[rng.next_range(Move::CLASSIC.len() as u32) as usize]
}

/// Anything that can pick the opponent's move for a round
pub trait Opponent {
    fn choose(&mut self, view: OpponentView) -> Move;
}

impl<O: Opponent + ?Sized> Opponent for &mut O {
    fn choose(&mut self, view: OpponentView) -> Move {
        (**self).choose(view)
    }
}

/// The default opponent: [`opponent_move`] over an injected random source
#[derive(Clone, Debug)]
pub struct WeightedOpponent<R> {
    rng: R,
    odds: BombOdds,
}

impl<R: RandomSource> WeightedOpponent<R> {
    pub fn new(rng: R) -> Self {
        Self::with_odds(rng, BombOdds::standard())
    }

    pub fn with_odds(rng: R, odds: BombOdds) -> Self {
        Self { rng, odds }
    }

    pub fn odds(&self) -> &BombOdds {
        &self.odds
    }
}

#[cfg(feature = "entropy")]
impl WeightedOpponent<crate::random::EntropyRng> {
    /// Standard odds over an OS-seeded generator
    pub fn from_entropy() -> Self {
        Self::new(crate::random::EntropyRng::new())
    }
}

impl<R: RandomSource> Opponent for WeightedOpponent<R> {
    fn choose(&mut self, view: OpponentView) -> Move {
        opponent_move(view, &self.odds, &mut self.rng)
    }
}

/// Plays a fixed sequence of moves, cycling when it runs out.
///
/// Ignores the bomb rules on purpose: a script that repeats bomb makes
/// the opponent forfeit, exactly as a player would.
#[derive(Clone, Debug)]
pub struct ScriptedOpponent {
    script: Vec<Move>,
    cursor: usize,
}

impl ScriptedOpponent {
    pub fn new(script: Vec<Move>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl Opponent for ScriptedOpponent {
    fn choose(&mut self, _view: OpponentView) -> Move {
        if self.script.is_empty() {
            return Move::Rock;
        }
        let chosen = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        chosen
    }
}
