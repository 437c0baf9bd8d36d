//! Ships, their ids and the directions they extend in.

use alloc::vec::Vec;
use ::core::fmt;

use super::common::{BoardError, CellPos};

/// Direction a ship extends from its anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    N,
    E,
    S,
    W,
}

impl Orientation {
    /// Rotation order used by the rotate key.
    pub const ALL: [Orientation; 4] = [
        Orientation::N,
        Orientation::E,
        Orientation::S,
        Orientation::W,
    ];

    /// Column and row delta of one step in this direction.
    pub fn step(self) -> (isize, isize) {
        match self {
            Orientation::N => (0, -1),
            Orientation::E => (1, 0),
            Orientation::S => (0, 1),
            Orientation::W => (-1, 0),
        }
    }

    /// Next direction clockwise.
    pub fn rotated(self) -> Self {
        match self {
            Orientation::N => Orientation::E,
            Orientation::E => Orientation::S,
            Orientation::S => Orientation::W,
            Orientation::W => Orientation::N,
        }
    }
}

/// Stable identifier handed out by a board when a ship is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub u32);

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A ship occupying a run of cells, tracking how often it was hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    hits: usize,
    cells: Vec<CellPos>,
}

impl Ship {
    /// Create an unplaced ship of the given length.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            hits: 0,
            cells: Vec::new(),
        }
    }

    /// Record the cells this ship occupies, start cell first.
    ///
    /// The owning board writes the back-references into its cells.
    pub fn place(&mut self, cells: Vec<CellPos>) -> Result<(), BoardError> {
        if cells.len() != self.length {
            return Err(BoardError::InvalidPlacement {
                expected: self.length,
                got: cells.len(),
            });
        }
        self.cells = cells;
        Ok(())
    }

    /// Register one hit. Hits on an already sunk ship are rejected and
    /// return `false`, so `hits` never exceeds `length`.
    pub fn hit(&mut self) -> bool {
        if self.is_sunk() {
            return false;
        }
        self.hits += 1;
        true
    }

    pub fn is_sunk(&self) -> bool {
        self.hits >= self.length
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn cells(&self) -> &[CellPos] {
        &self.cells
    }

    pub fn contains(&self, pos: CellPos) -> bool {
        self.cells.contains(&pos)
    }
}
