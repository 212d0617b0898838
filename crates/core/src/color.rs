//! Player colors and their cell owner tags.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    Blue = 1,
    Red = 2,
    Green = 3,
    Yellow = 4,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Blue, Color::Red, Color::Green, Color::Yellow];

    /// Owner tag written into grid cells. 0 marks an empty cell, so tags
    /// run 1..=4.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Zero-based index for per-color tables.
    pub fn index(self) -> usize {
        self as usize - 1
    }

    pub fn from_id(id: u8) -> Option<Color> {
        match id {
            1 => Some(Color::Blue),
            2 => Some(Color::Red),
            3 => Some(Color::Green),
            4 => Some(Color::Yellow),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_match_owner_tags() {
        assert_eq!(Color::Blue.id(), 1);
        assert_eq!(Color::Yellow.id(), 4);
    }

    #[test]
    fn test_index_is_zero_based() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn test_from_id_round_trip() {
        for color in Color::ALL {
            assert_eq!(Color::from_id(color.id()), Some(color));
        }
        assert_eq!(Color::from_id(0), None);
        assert_eq!(Color::from_id(5), None);
    }
}
