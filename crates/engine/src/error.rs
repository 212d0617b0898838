//! Typed placement failures.

use thiserror::Error;

/// Why a placement was rejected. `Board::check_move` reports the first
/// failure it finds in scan order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum PlacementError {
    #[error("piece does not fit on the board at ({row}, {col})")]
    OutOfBounds { row: i16, col: i16 },
    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: i16, col: i16 },
    #[error("cell ({row}, {col}) would share an edge with a same-color cell")]
    EdgeContact { row: i16, col: i16 },
    #[error("no diagonal contact with an existing same-color cell")]
    NoCornerContact,
    #[error("first placement must cover a starting corner of the board")]
    FirstMoveOffCorner,
}
