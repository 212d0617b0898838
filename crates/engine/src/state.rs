//! Serializable whole-game snapshot for the save/load collaborator.
//!
//! Grid, corner sets and racks all round-trip exactly; turn sequencing
//! beyond the current player index stays outside the engine.

use serde::{Deserialize, Serialize};

use crate::{Board, PieceRack};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub current_player: u8,
    pub racks: Vec<PieceRack>,
}

impl GameState {
    pub fn new(size: usize, players: usize) -> Self {
        Self {
            board: Board::new(size),
            current_player: 0,
            racks: (0..players).map(|_| PieceRack::new()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(20, 4);
        assert_eq!(state.current_player, 0);
        assert_eq!(state.racks.len(), 4);
        assert_eq!(state.board.size(), 20);
    }

    #[test]
    fn test_clone_equality() {
        let state = GameState::new(20, 2);
        assert_eq!(state, state.clone());
    }
}
