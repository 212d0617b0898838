//! Piece shapes and the standard 21-piece catalog.
//!
//! A shape is a rectangular occupancy matrix with a stable identity that
//! survives rotation and mirroring - callers track used/unused per player
//! by that identity alone. Transforms always allocate a fresh shape.

use std::collections::HashSet;

use thiserror::Error;

pub const PIECE_COUNT: usize = 21;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum ShapeError {
    #[error("shape has no rows")]
    EmptyMatrix,
    #[error("shape rows have differing widths")]
    RaggedRows,
    #[error("shape has no occupied cells")]
    NoOccupiedCells,
}

#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct PieceShape {
    rows: Vec<Vec<bool>>,
    id: u8,
}

impl PieceShape {
    /// Build a shape from an occupancy matrix. Rejects an empty matrix,
    /// ragged rows and matrices with no occupied cell, so downstream code
    /// can index freely.
    pub fn new(rows: Vec<Vec<bool>>, id: u8) -> Result<PieceShape, ShapeError> {
        let width = rows.first().map(|row| row.len()).ok_or(ShapeError::EmptyMatrix)?;
        if width == 0 {
            return Err(ShapeError::EmptyMatrix);
        }
        if rows.iter().any(|row| row.len() != width) {
            return Err(ShapeError::RaggedRows);
        }
        if !rows.iter().flatten().any(|&filled| filled) {
            return Err(ShapeError::NoOccupiedCells);
        }
        Ok(PieceShape { rows, id })
    }

    /// Identity within the catalog, preserved across every transform.
    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.rows[row][col]
    }

    /// Occupied cells as (row, col) offsets from the shape's top-left.
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.rows.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &filled)| filled)
                .map(move |(j, _)| (i as i16, j as i16))
        })
    }

    /// Number of occupied cells.
    pub fn area(&self) -> u32 {
        self.rows.iter().flatten().filter(|&&filled| filled).count() as u32
    }

    /// 90 degrees clockwise: transpose, then reverse row order. Four
    /// applications give back the original geometry.
    pub fn rotate(&self) -> PieceShape {
        let h = self.height();
        let w = self.width();
        let mut rows = vec![vec![false; h]; w];
        for (i, row) in self.rows.iter().enumerate() {
            for (j, &filled) in row.iter().enumerate() {
                rows[j][h - 1 - i] = filled;
            }
        }
        PieceShape { rows, id: self.id }
    }

    /// Horizontal mirror. Two applications give back the original.
    pub fn flip(&self) -> PieceShape {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().rev().copied().collect())
            .collect();
        PieceShape { rows, id: self.id }
    }

    /// All 8 orientations: four rotations of the shape, then four
    /// rotations of its mirror. Symmetric shapes repeat geometries among
    /// the 8; no deduplication happens here.
    pub fn variations(&self) -> Vec<PieceShape> {
        let mut out = Vec::with_capacity(8);
        let mut current = self.clone();
        for _ in 0..4 {
            let next = current.rotate();
            out.push(current);
            current = next;
        }
        let mut current = self.flip();
        for _ in 0..4 {
            let next = current.rotate();
            out.push(current);
            current = next;
        }
        out
    }

    /// `variations()` with geometric duplicates removed, for callers that
    /// would otherwise pay to score the same placement twice.
    pub fn unique_variations(&self) -> Vec<PieceShape> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for variation in self.variations() {
            if seen.insert(variation.rows.clone()) {
                out.push(variation);
            }
        }
        out
    }
}

const DEFINITIONS: [&[&[u8]]; PIECE_COUNT] = [
    &[&[1]],
    &[&[1, 1]],
    &[&[1, 1, 1]],
    &[&[1, 1], &[1, 0]],
    &[&[1, 1, 1, 1]],
    &[&[1, 1], &[1, 1]],
    &[&[1, 1, 1], &[1, 0, 0]],
    &[&[1, 1, 0], &[0, 1, 1]],
    &[&[1, 1, 1], &[0, 1, 0]],
    &[&[1, 1, 1, 1, 1]],
    &[&[1, 1, 1, 1], &[1, 0, 0, 0]],
    &[&[0, 1, 1, 1], &[1, 1, 0, 0]],
    &[&[1, 1, 1], &[0, 1, 0], &[0, 1, 0]],
    &[&[1, 1, 0], &[0, 1, 0], &[0, 1, 1]],
    &[&[1, 1, 1], &[0, 1, 1]],
    &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 1]],
    &[&[1, 1, 1], &[1, 0, 0], &[1, 0, 0]],
    &[&[1, 1], &[0, 1], &[1, 1]],
    &[&[1, 0], &[1, 1], &[1, 0], &[1, 0]],
    &[&[0, 1, 0], &[1, 1, 1], &[0, 1, 0]],
    &[&[0, 1, 1], &[1, 1, 0], &[0, 1, 0]],
];

/// The standard piece set: monomino through pentominoes, ids equal to the
/// catalog index.
pub fn standard_set() -> Vec<PieceShape> {
    DEFINITIONS
        .iter()
        .enumerate()
        .map(|(id, rows)| {
            // Catalog entries are rectangular and non-blank by inspection.
            let rows = rows
                .iter()
                .map(|row| row.iter().map(|&cell| cell == 1).collect())
                .collect();
            PieceShape { rows, id: id as u8 }
        })
        .collect()
}
