//! One side of the table: a board plus the setup-time facing.

use alloc::vec::Vec;

use super::board::{Board, ShotReport};
use super::common::{BoardError, PlayerId};
use super::ship::{Orientation, ShipId};

pub struct Player {
    id: PlayerId,
    board: Board,
    /// Ships this player placed, in placement order.
    placed: Vec<ShipId>,
    orientation: Orientation,
}

impl Player {
    pub fn new(id: PlayerId, board: Board) -> Self {
        Self {
            id,
            board,
            placed: Vec::new(),
            orientation: Orientation::N,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn placed_ships(&self) -> &[ShipId] {
        &self.placed
    }

    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// `true` if a ship of `length` is already on this player's board.
    pub fn has_length(&self, length: usize) -> bool {
        self.placed
            .iter()
            .filter_map(|id| self.board.ship(*id))
            .any(|ship| ship.length() == length)
    }

    /// Smallest length in `1..=ships_per_player` not placed yet.
    pub fn next_ship_length(&self, ships_per_player: usize) -> Option<usize> {
        (1..=ships_per_player).find(|len| !self.has_length(*len))
    }

    pub fn is_ready(&self, ships_per_player: usize) -> bool {
        self.placed.len() == ships_per_player
    }

    /// Place a ship of `length` anchored at the cell under the pixel
    /// position, facing the current orientation.
    pub fn place_ship_at(&mut self, x: f32, y: f32, length: usize) -> Result<ShipId, BoardError> {
        let pos = self.board.cell_at(x, y).ok_or(BoardError::OutOfBounds)?.pos();
        if self.has_length(length) {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let id = self
            .board
            .place_ship(pos.col, pos.row, length, self.orientation)?;
        self.placed.push(id);
        Ok(id)
    }

    /// Fire at the cell under the pixel position on this player's own
    /// board. Callers aim at the opponent's `Player`.
    pub fn fire_at(&mut self, x: f32, y: f32) -> Result<ShotReport, BoardError> {
        let pos = self.board.cell_at(x, y).ok_or(BoardError::OutOfBounds)?.pos();
        self.board.fire(pos)
    }

    /// Advance the facing through N, E, S, W.
    pub fn rotate_ship(&mut self) -> Orientation {
        self.orientation = self.orientation.rotated();
        self.orientation
    }

    /// Remove the ship under the pixel position. Returns whether a ship
    /// was removed.
    pub fn delete_ship_at(&mut self, x: f32, y: f32) -> bool {
        let id = match self.board.cell_at(x, y).and_then(|cell| cell.ship()) {
            Some(id) => id,
            None => return false,
        };
        if self.board.remove_ship(id).is_err() {
            return false;
        }
        self.placed.retain(|placed| *placed != id);
        log::debug!("{} removed ship {}", self.id, id);
        true
    }

    pub fn all_ships_sunk(&self) -> bool {
        self.board.all_ships_sunk()
    }
}
