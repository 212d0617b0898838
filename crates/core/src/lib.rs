//! Blockade core crate - fundamental types for the placement engine.

mod color;
mod grid;
mod piece;

pub use color::Color;
pub use grid::{Grid, DEFAULT_SIZE};
pub use piece::{standard_set, PieceShape, ShapeError, PIECE_COUNT};
