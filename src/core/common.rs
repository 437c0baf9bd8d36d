//! Common types shared by the engine: player ids, grid positions and errors.

use ::core::fmt;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The seat across the table.
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Human-facing player number (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Column/row address of a cell on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPos {
    pub col: usize,
    pub row: usize,
}

impl CellPos {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// Errors returned by Board, Ship and Player operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// The requested cell is not on the board.
    OutOfBounds,
    /// Ship placement leaves the board.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// A ship of this length was already placed by the player.
    ShipAlreadyPlaced,
    /// Cell count handed to `Ship::place` does not match the ship length.
    InvalidPlacement { expected: usize, got: usize },
    /// The cell was already fired at.
    AlreadyFired,
    /// No ship is registered under the given id.
    UnknownShip,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Position is outside the board"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::InvalidPlacement { expected, got } => write!(
                f,
                "Invalid ship placement: expected {} cells, got {}",
                expected, got
            ),
            BoardError::AlreadyFired => write!(f, "Cell was already fired at"),
            BoardError::UnknownShip => write!(f, "Ship is not registered on this board"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Fatal configuration errors, raised before a match can begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    BoardSizeZero,
    CellSizeNotPositive,
    MinShipsNotPositive,
    MaxShipsExceedBoard { max: usize, board_size: usize },
    MinAboveMax { min: usize, max: usize },
    TurnSecondsZero,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BoardSizeZero => write!(f, "Board size must be at least 1"),
            ConfigError::CellSizeNotPositive => write!(f, "Cell size must be positive"),
            ConfigError::MinShipsNotPositive => {
                write!(f, "Minimum number of ships must be greater than zero")
            }
            ConfigError::MaxShipsExceedBoard { max, board_size } => write!(
                f,
                "Maximum number of ships ({}) exceeds the board size ({})",
                max, board_size
            ),
            ConfigError::MinAboveMax { min, max } => write!(
                f,
                "Minimum number of ships ({}) is above the maximum ({})",
                min, max
            ),
            ConfigError::TurnSecondsZero => write!(f, "Turn countdown must be at least 1 second"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
