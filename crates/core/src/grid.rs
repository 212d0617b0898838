//! Square owner-tag grid - plain storage, no placement rules.
//! Serializes as a row-major matrix of small integers so saved games
//! round-trip exactly.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Color;

pub const DEFAULT_SIZE: usize = 20;

/// size x size grid of owner tags. A tag, once set, is never cleared -
/// pieces are not removed in this game.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<u8>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Raw owner tag at (row, col): 0 is empty, 1..=4 a player color.
    #[inline]
    pub fn tag(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.size + col]
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        Color::from_id(self.tag(row, col))
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, color: Color) {
        self.cells[row * self.size + col] = color.id();
    }

    #[inline]
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.tag(row, col) == 0
    }

    #[inline]
    pub fn in_bounds(&self, row: i16, col: i16) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }
}

impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rows: Vec<&[u8]> = self.cells.chunks(self.size).collect();
        rows.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows: Vec<Vec<u8>> = Vec::deserialize(deserializer)?;
        let size = rows.len();
        if size == 0 {
            return Err(serde::de::Error::custom("expected a non-empty grid"));
        }
        let mut cells = Vec::with_capacity(size * size);
        for row in &rows {
            if row.len() != size {
                return Err(serde::de::Error::custom("expected a square grid"));
            }
            for &tag in row {
                if tag > 4 {
                    return Err(serde::de::Error::custom("owner tag out of range"));
                }
                cells.push(tag);
            }
        }
        Ok(Grid { size, cells })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for &tag in row {
                if tag == 0 {
                    write!(f, " .")?;
                } else {
                    write!(f, " {tag}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
