//! Selection policies over the full legal-move enumeration.

use std::cmp::Ordering;

use blockade_core::Color;
use blockade_engine::{generate_moves, Board, CandidateMove, PieceRack};
use blockade_eval::{evaluate_move, EvalWeights};
use rand::Rng;

/// A candidate paired with its heuristic score.
#[derive(Clone, Debug)]
pub struct ScoredMove {
    pub candidate: CandidateMove,
    pub score: f32,
}

/// Uniform-random tier: any legal (piece, variation, anchor) triple, each
/// equally likely. `None` signals a forced pass.
pub fn choose_uniform<R: Rng + ?Sized>(
    board: &Board,
    rack: &PieceRack,
    color: Color,
    rng: &mut R,
) -> Option<CandidateMove> {
    let mut moves = generate_moves(board, rack, color);
    if moves.is_empty() {
        return None;
    }
    let pick = rng.random_range(0..moves.len());
    Some(moves.swap_remove(pick))
}

/// Greedy tiers: global argmax of the weighted score. Pieces are visited
/// largest-first (stable, so catalog order breaks ties) and the first
/// best-scoring move found is kept.
pub fn choose_greedy(
    board: &Board,
    rack: &PieceRack,
    color: Color,
    weights: &EvalWeights,
) -> Option<ScoredMove> {
    let mut pieces = rack.remaining_pieces();
    pieces.sort_by(|a, b| b.area().cmp(&a.area()));

    let mut best: Option<ScoredMove> = None;
    for piece in pieces {
        for variant in piece.variations() {
            for (row, col) in board.find_valid_moves(&variant, color) {
                let score = evaluate_move(board, &variant, row, col, color, weights);
                let improves = match &best {
                    Some(current) => score_cmp(score, current.score) == Ordering::Greater,
                    None => true,
                };
                if improves {
                    best = Some(ScoredMove {
                        candidate: CandidateMove {
                            piece_id: piece.id(),
                            shape: variant.clone(),
                            row,
                            col,
                        },
                        score,
                    });
                }
            }
        }
    }
    best
}

fn score_cmp(a: f32, b: f32) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
