//! Mutable board state: the grid plus both corner candidate sets.
//!
//! The corner sets are acceleration hints for the anchor sweep, never
//! proof of legality - every candidate is re-validated against the grid
//! before it is accepted, so stale frontier entries are harmless.

use blockade_core::{Color, Grid, PieceShape};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::PlacementError;

const EDGE_OFFSETS: [(i16, i16); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONAL_OFFSETS: [(i16, i16); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Board {
    grid: Grid,
    /// Extreme grid corners still open as first-move anchors. Shrinks as
    /// they are covered; never regrows.
    board_corners: FxHashSet<(i16, i16)>,
    /// Per-color empty cells known to touch that color diagonally.
    /// Entries are not retired when they later become invalid; queries
    /// re-check against the grid.
    frontier: [FxHashSet<(i16, i16)>; 4],
}

impl Default for Board {
    fn default() -> Self {
        Self::new(blockade_core::DEFAULT_SIZE)
    }
}

impl Board {
    pub fn new(size: usize) -> Self {
        let last = size as i16 - 1;
        let board_corners = [(0, 0), (0, last), (last, 0), (last, last)]
            .into_iter()
            .collect();
        Self {
            grid: Grid::new(size),
            board_corners,
            frontier: Default::default(),
        }
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Read-only view of the cells. Mutation goes through `place`/`commit`
    /// only, so the corner sets stay in step with the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn board_corners(&self) -> &FxHashSet<(i16, i16)> {
        &self.board_corners
    }

    pub fn frontier(&self, color: Color) -> &FxHashSet<(i16, i16)> {
        &self.frontier[color.index()]
    }

    /// Whether the color has placed anything yet. First placements answer
    /// to the board-corner rule instead of the frontier rule.
    pub fn has_placed(&self, color: Color) -> bool {
        !self.frontier[color.index()].is_empty()
    }

    fn same_color(&self, row: i16, col: i16, color: Color) -> bool {
        self.grid.in_bounds(row, col) && self.grid.tag(row as usize, col as usize) == color.id()
    }

    /// Typed legality check. `Ok(())` means `place` may be called with
    /// these exact arguments.
    pub fn check_move(
        &self,
        piece: &PieceShape,
        row: i16,
        col: i16,
        color: Color,
    ) -> Result<(), PlacementError> {
        let size = self.grid.size() as i16;
        if row < 0
            || col < 0
            || row + piece.height() as i16 > size
            || col + piece.width() as i16 > size
        {
            return Err(PlacementError::OutOfBounds { row, col });
        }

        let mut corner_contact = false;
        for (i, j) in piece.cells() {
            let (r, c) = (row + i, col + j);
            if !self.grid.is_empty(r as usize, c as usize) {
                return Err(PlacementError::Occupied { row: r, col: c });
            }
            for (dr, dc) in EDGE_OFFSETS {
                if self.same_color(r + dr, c + dc, color) {
                    return Err(PlacementError::EdgeContact { row: r, col: c });
                }
            }
            for (dr, dc) in DIAGONAL_OFFSETS {
                if self.same_color(r + dr, c + dc, color) {
                    corner_contact = true;
                }
            }
        }

        if !self.has_placed(color) {
            if piece
                .cells()
                .any(|(i, j)| self.board_corners.contains(&(row + i, col + j)))
            {
                return Ok(());
            }
            return Err(PlacementError::FirstMoveOffCorner);
        }
        if corner_contact {
            Ok(())
        } else {
            Err(PlacementError::NoCornerContact)
        }
    }

    /// Pure legality predicate; never mutates.
    pub fn is_valid_move(&self, piece: &PieceShape, row: i16, col: i16, color: Color) -> bool {
        self.check_move(piece, row, col, color).is_ok()
    }

    /// Write the piece into the grid and update both corner sets.
    ///
    /// Does not re-check legality: the caller must have confirmed the move
    /// via `check_move`/`is_valid_move` (the enumeration path already
    /// has). Use `commit` when that confirmation has not been paid for.
    pub fn place(&mut self, piece: &PieceShape, row: i16, col: i16, color: Color) {
        for (i, j) in piece.cells() {
            self.grid.set((row + i) as usize, (col + j) as usize, color);
        }
        // Second pass after all cells are written, so cells of this very
        // piece are never recorded as frontier corners.
        for (i, j) in piece.cells() {
            let (r, c) = (row + i, col + j);
            self.board_corners.remove(&(r, c));
            for (dr, dc) in DIAGONAL_OFFSETS {
                let (nr, nc) = (r + dr, c + dc);
                if self.grid.in_bounds(nr, nc) && self.grid.is_empty(nr as usize, nc as usize) {
                    self.frontier[color.index()].insert((nr, nc));
                }
            }
        }
    }

    /// Validate-then-place: the safe entry point for callers that have not
    /// already run `check_move`.
    pub fn commit(
        &mut self,
        piece: &PieceShape,
        row: i16,
        col: i16,
        color: Color,
    ) -> Result<(), PlacementError> {
        self.check_move(piece, row, col, color)?;
        self.place(piece, row, col, color);
        Ok(())
    }

    /// Copy of the grid with the piece overlaid if the move is legal,
    /// otherwise an unmodified copy. Never mutates the live board.
    pub fn preview(&self, piece: &PieceShape, row: i16, col: i16, color: Color) -> Grid {
        let mut copy = self.grid.clone();
        if self.is_valid_move(piece, row, col, color) {
            for (i, j) in piece.cells() {
                copy.set((row + i) as usize, (col + j) as usize, color);
            }
        }
        copy
    }

    /// Every anchor where the piece can legally go for this color.
    ///
    /// Seeds the sweep from the board corners before the color's first
    /// placement, from its frontier corners afterwards. Offsets cover the
    /// whole bounding box so the seed corner may line up with any occupied
    /// cell of the piece. Anchor order follows the sweep and is not part
    /// of the contract.
    pub fn find_valid_moves(&self, piece: &PieceShape, color: Color) -> Vec<(i16, i16)> {
        let h = piece.height() as i16;
        let w = piece.width() as i16;
        let mut anchors = Vec::new();

        if !self.has_placed(color) {
            for &(corner_row, corner_col) in &self.board_corners {
                for dr in (1 - h)..=0 {
                    for dc in (1 - w)..=0 {
                        let (row, col) = (corner_row + dr, corner_col + dc);
                        if self.is_valid_move(piece, row, col, color) {
                            anchors.push((row, col));
                        }
                    }
                }
            }
            return anchors;
        }

        // Neighboring frontier corners imply overlapping anchor ranges;
        // dedup before paying for validation.
        let mut visited = FxHashSet::default();
        for &(corner_row, corner_col) in &self.frontier[color.index()] {
            for dr in (1 - h)..=1 {
                for dc in (1 - w)..=1 {
                    let anchor = (corner_row + dr, corner_col + dc);
                    if visited.insert(anchor)
                        && self.is_valid_move(piece, anchor.0, anchor.1, color)
                    {
                        anchors.push(anchor);
                    }
                }
            }
        }
        anchors
    }

    /// True iff `find_valid_moves` would be non-empty.
    pub fn can_place(&self, piece: &PieceShape, color: Color) -> bool {
        !self.find_valid_moves(piece, color).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockade_core::standard_set;

    fn monomino() -> PieceShape {
        standard_set().swap_remove(0)
    }

    fn l_tromino() -> PieceShape {
        standard_set().swap_remove(3)
    }

    #[test]
    fn test_new_board_has_four_starting_corners() {
        let board = Board::default();
        let corners = board.board_corners();
        assert_eq!(corners.len(), 4);
        assert!(corners.contains(&(0, 0)));
        assert!(corners.contains(&(19, 19)));
    }

    #[test]
    fn test_first_move_must_cover_a_board_corner() {
        let board = Board::default();
        let piece = monomino();
        assert!(board.is_valid_move(&piece, 0, 0, Color::Blue));
        assert!(board.is_valid_move(&piece, 19, 19, Color::Blue));
        assert_eq!(
            board.check_move(&piece, 9, 9, Color::Blue),
            Err(PlacementError::FirstMoveOffCorner)
        );
    }

    #[test]
    fn test_l_tromino_opening_updates_grid_and_corners() {
        let mut board = Board::default();
        let piece = l_tromino();
        assert!(board.is_valid_move(&piece, 0, 0, Color::Blue));
        board.place(&piece, 0, 0, Color::Blue);

        let grid = board.grid();
        assert_eq!(grid.tag(0, 0), 1);
        assert_eq!(grid.tag(0, 1), 1);
        assert_eq!(grid.tag(1, 0), 1);
        assert_eq!(grid.tag(1, 1), 0);

        assert!(!board.board_corners().contains(&(0, 0)));
        let frontier = board.frontier(Color::Blue);
        assert!(frontier.contains(&(1, 1)));
        assert!(frontier.contains(&(1, 2)));
        assert!(frontier.contains(&(2, 1)));
        assert_eq!(frontier.len(), 3);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut board = Board::default();
        let piece = monomino();
        board.place(&piece, 0, 0, Color::Blue);
        assert_eq!(
            board.check_move(&piece, 0, 0, Color::Blue),
            Err(PlacementError::Occupied { row: 0, col: 0 })
        );
        assert_eq!(
            board.check_move(&piece, 0, 0, Color::Red),
            Err(PlacementError::Occupied { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_same_color_edge_contact_rejected() {
        let mut board = Board::default();
        board.place(&l_tromino(), 0, 0, Color::Blue);
        assert_eq!(
            board.check_move(&monomino(), 1, 1, Color::Blue),
            Err(PlacementError::EdgeContact { row: 1, col: 1 })
        );
    }

    #[test]
    fn test_diagonal_contact_accepted_for_followup() {
        let mut board = Board::default();
        board.place(&l_tromino(), 0, 0, Color::Blue);
        // (2, 1) touches (1, 0) diagonally and nothing blue by edge.
        assert!(board.is_valid_move(&monomino(), 2, 1, Color::Blue));
        // (3, 3) touches nothing blue at all.
        assert_eq!(
            board.check_move(&monomino(), 3, 3, Color::Blue),
            Err(PlacementError::NoCornerContact)
        );
    }

    #[test]
    fn test_cross_color_edge_contact_permitted() {
        let mut board = Board::new(4);
        board.place(&l_tromino(), 0, 0, Color::Blue);
        // Red's opening domino covers corner (0, 3) while sharing an edge
        // with blue at (0, 1)/(0, 2) - only same-color contact is banned.
        let domino = standard_set().swap_remove(1);
        assert!(board.is_valid_move(&domino, 0, 2, Color::Red));
        board.place(&domino, 0, 2, Color::Red);
        assert_eq!(board.grid().tag(0, 2), 2);
    }

    #[test]
    fn test_out_of_bounds_rejected_not_panicking() {
        let board = Board::default();
        let piece = l_tromino();
        assert_eq!(
            board.check_move(&piece, -1, 0, Color::Blue),
            Err(PlacementError::OutOfBounds { row: -1, col: 0 })
        );
        assert_eq!(
            board.check_move(&piece, 19, 19, Color::Blue),
            Err(PlacementError::OutOfBounds { row: 19, col: 19 })
        );
    }

    #[test]
    fn test_first_move_sweep_covers_all_surviving_corners() {
        let board = Board::default();
        let anchors = board.find_valid_moves(&monomino(), Color::Blue);
        assert_eq!(anchors.len(), 4);
        for corner in [(0, 0), (0, 19), (19, 0), (19, 19)] {
            assert!(anchors.contains(&corner));
        }
    }

    #[test]
    fn test_find_valid_moves_after_opening_all_touch_diagonally() {
        let mut board = Board::default();
        board.place(&l_tromino(), 0, 0, Color::Blue);
        let anchors = board.find_valid_moves(&monomino(), Color::Blue);
        assert!(!anchors.is_empty());
        for (row, col) in anchors {
            assert!(board.is_valid_move(&monomino(), row, col, Color::Blue));
        }
    }

    #[test]
    fn test_preview_overlays_only_legal_moves() {
        let board = Board::default();
        let piece = l_tromino();
        let legal = board.preview(&piece, 0, 0, Color::Blue);
        assert_eq!(legal.tag(0, 0), 1);
        assert_eq!(legal.tag(1, 0), 1);
        // Illegal anchor: plain copy, live board untouched either way.
        let illegal = board.preview(&piece, 9, 9, Color::Blue);
        assert_eq!(illegal, *board.grid());
        assert_eq!(board.grid().tag(0, 0), 0);
    }

    #[test]
    fn test_commit_validates_before_mutating() {
        let mut board = Board::default();
        let piece = l_tromino();
        assert_eq!(
            board.commit(&piece, 9, 9, Color::Blue),
            Err(PlacementError::FirstMoveOffCorner)
        );
        assert_eq!(*board.grid(), Grid::default());
        assert!(board.commit(&piece, 0, 0, Color::Blue).is_ok());
        assert_eq!(board.grid().tag(0, 0), 1);
    }

    #[test]
    fn test_can_place_goes_false_for_walled_in_color() {
        let mut board = Board::new(2);
        let square = standard_set().swap_remove(5);
        board.place(&square, 0, 0, Color::Blue);
        assert!(!board.can_place(&monomino(), Color::Blue));
        assert!(!board.can_place(&monomino(), Color::Red));
    }
}
