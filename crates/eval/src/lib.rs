//! Blockade eval crate - placement scoring for the bot tiers.
//!
//! One formula, two weight profiles: piece size, pull toward the board
//! center, and the count of corners the move opens up for its color.

use blockade_core::{Color, Grid, PieceShape};
use blockade_engine::Board;

const DIAGONAL_OFFSETS: [(i16, i16); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[derive(Clone, Debug)]
pub struct EvalWeights {
    pub size: f32,
    pub center: f32,
    pub territory: f32,
}

impl EvalWeights {
    /// Mid-tier profile: mild size preference, center and territory on
    /// equal footing.
    pub fn balanced() -> Self {
        Self {
            size: 0.5,
            center: 1.0,
            territory: 1.0,
        }
    }

    /// Top-tier profile: same formula, stronger pull on every term.
    pub fn aggressive() -> Self {
        Self {
            size: 1.5,
            center: 2.0,
            territory: 2.0,
        }
    }
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self::balanced()
    }
}

/// Score a candidate placement for the acting color. Higher is better.
pub fn evaluate_move(
    board: &Board,
    piece: &PieceShape,
    row: i16,
    col: i16,
    color: Color,
    weights: &EvalWeights,
) -> f32 {
    let mut score = piece.area() as f32 * weights.size;

    let center = (board.size() / 2) as f32;
    let dr = row as f32 - center;
    let dc = col as f32 - center;
    score -= (dr * dr + dc * dc).sqrt() * weights.center;

    let preview = board.preview(piece, row, col, color);
    score += new_corner_count(&preview, piece, row, col, color) as f32 * weights.territory;

    score
}

/// Empty cells around the placement footprint that touch the color
/// diagonally in the previewed grid - the corners the move leaves open.
/// Scans the piece's bounding box expanded by one cell in each direction.
pub fn new_corner_count(
    preview: &Grid,
    piece: &PieceShape,
    row: i16,
    col: i16,
    color: Color,
) -> u32 {
    let size = preview.size() as i16;
    let row_end = (row + piece.height() as i16 + 1).min(size);
    let col_end = (col + piece.width() as i16 + 1).min(size);

    let mut corners = 0;
    for r in (row - 1).max(0)..row_end {
        for c in (col - 1).max(0)..col_end {
            if preview.tag(r as usize, c as usize) != 0 {
                continue;
            }
            let touches = DIAGONAL_OFFSETS.iter().any(|&(dr, dc)| {
                let (nr, nc) = (r + dr, c + dc);
                preview.in_bounds(nr, nc) && preview.tag(nr as usize, nc as usize) == color.id()
            });
            if touches {
                corners += 1;
            }
        }
    }
    corners
}
