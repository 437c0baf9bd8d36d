use super::common::CellPos;
use super::ship::ShipId;

/// Fired-state of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Hit,
    Miss,
}

/// What a shot at an empty cell struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shot {
    Hit(ShipId),
    Miss,
}

/// One square of a board. The ship reference is an id into the owning
/// board's ship registry, never an owning pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pos: CellPos,
    ship: Option<ShipId>,
    state: CellState,
}

impl Cell {
    pub fn new(col: usize, row: usize) -> Self {
        Self {
            pos: CellPos::new(col, row),
            ship: None,
            state: CellState::Empty,
        }
    }

    /// Fire at this cell. Returns `None` without touching anything unless
    /// the cell is still `Empty`, so a cell can only ever be struck once.
    pub fn fire(&mut self) -> Option<Shot> {
        if self.state != CellState::Empty {
            return None;
        }
        match self.ship {
            Some(id) => {
                self.state = CellState::Hit;
                Some(Shot::Hit(id))
            }
            None => {
                self.state = CellState::Miss;
                Some(Shot::Miss)
            }
        }
    }

    pub fn pos(&self) -> CellPos {
        self.pos
    }

    pub fn col(&self) -> usize {
        self.pos.col
    }

    pub fn row(&self) -> usize {
        self.pos.row
    }

    pub fn ship(&self) -> Option<ShipId> {
        self.ship
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub(crate) fn set_ship(&mut self, ship: Option<ShipId>) {
        self.ship = ship;
    }
}
