//! Per-player piece inventory.
//!
//! Identity survives rotation and mirroring, so used/unused is tracked by
//! piece id alone. Serializes as the sorted list of unused ids; the
//! catalog itself is rebuilt on load.

use blockade_core::{standard_set, PieceShape, PIECE_COUNT};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PieceRack {
    pieces: Vec<PieceShape>,
    remaining: FxHashSet<u8>,
}

impl Default for PieceRack {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceRack {
    /// A fresh rack holding the full standard catalog.
    pub fn new() -> Self {
        let pieces = standard_set();
        let remaining = pieces.iter().map(|p| p.id()).collect();
        Self { pieces, remaining }
    }

    /// The full catalog, used and unused alike.
    pub fn pieces(&self) -> &[PieceShape] {
        &self.pieces
    }

    /// Unused pieces in catalog order.
    pub fn remaining_pieces(&self) -> Vec<&PieceShape> {
        self.pieces
            .iter()
            .filter(|p| self.remaining.contains(&p.id()))
            .collect()
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_unused(&self, id: u8) -> bool {
        self.remaining.contains(&id)
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Retire a piece after it has been placed. Returns false if it was
    /// already used (or the id is unknown).
    pub fn mark_used(&mut self, id: u8) -> bool {
        self.remaining.remove(&id)
    }

    /// Total squares still in hand - the penalty side of final scoring.
    pub fn remaining_area(&self) -> u32 {
        self.remaining_pieces().iter().map(|p| p.area()).sum()
    }
}

impl Serialize for PieceRack {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut ids: Vec<u8> = self.remaining.iter().copied().collect();
        ids.sort_unstable();
        ids.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PieceRack {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ids: Vec<u8> = Vec::deserialize(deserializer)?;
        if ids.iter().any(|&id| id as usize >= PIECE_COUNT) {
            return Err(serde::de::Error::custom("unknown piece id"));
        }
        Ok(PieceRack {
            pieces: standard_set(),
            remaining: ids.into_iter().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_rack_holds_full_catalog() {
        let rack = PieceRack::new();
        assert_eq!(rack.remaining_count(), PIECE_COUNT);
        assert_eq!(rack.remaining_area(), 89);
        assert!(!rack.is_exhausted());
    }

    #[test]
    fn test_mark_used_retires_once() {
        let mut rack = PieceRack::new();
        assert!(rack.mark_used(4));
        assert!(!rack.mark_used(4));
        assert!(!rack.is_unused(4));
        assert_eq!(rack.remaining_count(), PIECE_COUNT - 1);
        assert_eq!(rack.remaining_area(), 85);
    }

    #[test]
    fn test_remaining_pieces_keep_catalog_order() {
        let mut rack = PieceRack::new();
        rack.mark_used(0);
        rack.mark_used(7);
        let ids: Vec<u8> = rack.remaining_pieces().iter().map(|p| p.id()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert!(!ids.contains(&0));
        assert!(!ids.contains(&7));
    }
}
