//! Difficulty tiers and the automated-player driver.

use std::str::FromStr;

use blockade_core::Color;
use blockade_engine::{Board, CandidateMove, PieceRack};
use blockade_eval::EvalWeights;
use rand::Rng;
use thiserror::Error;

use crate::policy::{choose_greedy, choose_uniform};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Unknown tier names are configuration errors, rejected up front rather
/// than defaulted or retried.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
#[error("unknown difficulty `{0}`, expected easy, medium or hard")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(ParseDifficultyError(other.to_string())),
        }
    }
}

impl Difficulty {
    /// Scoring profile for the tier; `None` selects uniformly at random.
    pub fn weights(self) -> Option<EvalWeights> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(EvalWeights::balanced()),
            Difficulty::Hard => Some(EvalWeights::aggressive()),
        }
    }
}

/// An automated player: a color, a tier and the pieces it has left.
#[derive(Clone, Debug)]
pub struct BotPlayer {
    pub color: Color,
    pub difficulty: Difficulty,
    pub rack: PieceRack,
}

impl BotPlayer {
    pub fn new(color: Color, difficulty: Difficulty) -> Self {
        Self {
            color,
            difficulty,
            rack: PieceRack::new(),
        }
    }

    /// Pick a move without mutating anything. `None` means the bot has to
    /// pass this turn.
    pub fn select_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rng: &mut R,
    ) -> Option<CandidateMove> {
        match self.difficulty.weights() {
            None => choose_uniform(board, &self.rack, self.color, rng),
            Some(weights) => choose_greedy(board, &self.rack, self.color, &weights)
                .map(|scored| scored.candidate),
        }
    }

    /// Select a move, commit it to the board and retire the piece.
    /// Returns the move made, or `None` when the bot passed.
    pub fn take_turn<R: Rng + ?Sized>(
        &mut self,
        board: &mut Board,
        rng: &mut R,
    ) -> Option<CandidateMove> {
        let mv = self.select_move(board, rng)?;
        // Policies only return enumerated anchors, so validation for this
        // exact placement has already been paid for.
        board.place(&mv.shape, mv.row, mv.col, self.color);
        self.rack.mark_used(mv.piece_id);
        Some(mv)
    }
}

/// Final score for one player: squares placed minus squares still in hand.
pub fn final_score(rack: &PieceRack) -> i32 {
    let total: u32 = rack.pieces().iter().map(|p| p.area()).sum();
    let remaining = rack.remaining_area();
    (total - remaining) as i32 - remaining as i32
}
