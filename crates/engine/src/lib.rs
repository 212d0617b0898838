//! blockade-engine - placement rules, corner tracking and move enumeration.
//!
//! Owns the mutable board, the legality predicate and the per-turn
//! candidate sweep that the bot policies drive.

pub mod board;
pub mod error;
pub mod movegen;
pub mod rack;
pub mod state;

pub use board::Board;
pub use error::PlacementError;
pub use movegen::{generate_moves, has_any_move, CandidateMove};
pub use rack::PieceRack;
pub use state::GameState;
