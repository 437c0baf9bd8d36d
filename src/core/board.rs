//! One player's grid of cells and the ships placed on it.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use ::core::fmt;

use super::cell::{Cell, CellState, Shot};
use super::common::{BoardError, CellPos};
use super::ship::{Orientation, Ship, ShipId};

/// Outcome of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub pos: CellPos,
    /// Ship that was struck, `None` on a miss.
    pub ship: Option<ShipId>,
    /// Whether this shot sank the struck ship.
    pub sunk: bool,
}

impl ShotReport {
    pub fn is_hit(&self) -> bool {
        self.ship.is_some()
    }
}

/// Square grid of cells plus the registry of ships placed on it.
#[derive(Clone, PartialEq)]
pub struct Board {
    size: usize,
    cell_size: f32,
    origin: (f32, f32),
    cells: Vec<Cell>,
    ships: BTreeMap<ShipId, Ship>,
    next_id: u32,
}

impl Board {
    /// Create an empty `size`×`size` board whose top-left corner sits at
    /// `origin` in pixel space.
    pub fn new(size: usize, cell_size: f32, origin: (f32, f32)) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                cells.push(Cell::new(col, row));
            }
        }
        Self {
            size,
            cell_size,
            origin,
            cells,
            ships: BTreeMap::new(),
            next_id: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn origin(&self) -> (f32, f32) {
        self.origin
    }

    fn index(&self, pos: CellPos) -> Option<usize> {
        if pos.col < self.size && pos.row < self.size {
            Some(pos.row * self.size + pos.col)
        } else {
            None
        }
    }

    pub fn cell(&self, pos: CellPos) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// All cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(&id)
    }

    pub fn ships(&self) -> impl Iterator<Item = (ShipId, &Ship)> {
        self.ships.iter().map(|(id, ship)| (*id, ship))
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    /// Ship occupying `pos`, if any.
    pub fn ship_at(&self, pos: CellPos) -> Option<(ShipId, &Ship)> {
        let id = self.cell(pos)?.ship()?;
        self.ships.get(&id).map(|ship| (id, ship))
    }

    /// Cells a ship of `length` would occupy when anchored at (`col`, `row`)
    /// facing `orientation`, start cell first.
    ///
    /// Fails as a whole if any step leaves the board or lands on a ship.
    pub fn placement_cells(
        &self,
        col: usize,
        row: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<Vec<CellPos>, BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidPlacement {
                expected: 1,
                got: 0,
            });
        }
        if length > self.size {
            return Err(BoardError::ShipOutOfBounds);
        }
        let (dc, dr) = orientation.step();
        let mut cells = Vec::with_capacity(length);
        for i in 0..length as isize {
            let c = col as isize + dc * i;
            let r = row as isize + dr * i;
            if c < 0 || r < 0 || c as usize >= self.size || r as usize >= self.size {
                return Err(BoardError::ShipOutOfBounds);
            }
            let pos = CellPos::new(c as usize, r as usize);
            if self.cell(pos).and_then(Cell::ship).is_some() {
                return Err(BoardError::ShipOverlaps);
            }
            cells.push(pos);
        }
        Ok(cells)
    }

    /// Validate and place a new ship, returning its freshly assigned id.
    /// Nothing changes when placement fails.
    pub fn place_ship(
        &mut self,
        col: usize,
        row: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<ShipId, BoardError> {
        let cells = self.placement_cells(col, row, length, orientation)?;
        let mut ship = Ship::new(length);
        ship.place(cells)?;

        let id = ShipId(self.next_id);
        self.next_id += 1;
        for pos in ship.cells() {
            if let Some(i) = self.index(*pos) {
                self.cells[i].set_ship(Some(id));
            }
        }
        log::debug!(
            "placed ship {} (length {}) at ({}, {}) facing {:?}",
            id,
            length,
            col,
            row,
            orientation
        );
        self.ships.insert(id, ship);
        Ok(id)
    }

    /// Take a ship off the board, clearing its cells.
    pub fn remove_ship(&mut self, id: ShipId) -> Result<Ship, BoardError> {
        let ship = self.ships.remove(&id).ok_or(BoardError::UnknownShip)?;
        for pos in ship.cells() {
            if let Some(i) = self.index(*pos) {
                self.cells[i].set_ship(None);
            }
        }
        Ok(ship)
    }

    /// Map a pixel position to the cell under it, if it lies on this board.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<&Cell> {
        let col = libm::floorf((x - self.origin.0) / self.cell_size);
        let row = libm::floorf((y - self.origin.1) / self.cell_size);
        if !(col >= 0.0 && row >= 0.0) {
            return None;
        }
        self.cell(CellPos::new(col as usize, row as usize))
    }

    /// Pixel centre of the cell at `pos`.
    pub fn cell_center(&self, pos: CellPos) -> (f32, f32) {
        (
            self.origin.0 + (pos.col as f32 + 0.5) * self.cell_size,
            self.origin.1 + (pos.row as f32 + 0.5) * self.cell_size,
        )
    }

    /// Fire at `pos`, dispatching a hit to the occupying ship.
    pub fn fire(&mut self, pos: CellPos) -> Result<ShotReport, BoardError> {
        let i = self.index(pos).ok_or(BoardError::OutOfBounds)?;
        match self.cells[i].fire() {
            None => Err(BoardError::AlreadyFired),
            Some(Shot::Miss) => Ok(ShotReport {
                pos,
                ship: None,
                sunk: false,
            }),
            Some(Shot::Hit(id)) => {
                let ship = self.ships.get_mut(&id).ok_or(BoardError::UnknownShip)?;
                let was_sunk = ship.is_sunk();
                ship.hit();
                Ok(ShotReport {
                    pos,
                    ship: Some(id),
                    sunk: !was_sunk && ship.is_sunk(),
                })
            }
        }
    }

    /// Number of cells already fired at.
    pub fn shots_taken(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.state() != CellState::Empty)
            .count()
    }

    /// `true` when every registered ship is sunk. Vacuously `true` on a
    /// board without ships.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.values().all(Ship::is_sunk)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  origin: {:?},\n  ships: {:?},\n  shots: {}\n}}",
            self.size,
            self.origin,
            self.ships,
            self.shots_taken()
        )
    }
}
