use super::common::{ConfigError, PlayerId};

pub const BOARD_SIZE: usize = 10;
pub const CELL_SIZE: f32 = 50.0;
pub const BOARD_SEPARATION: f32 = 400.0;
pub const MIN_SHIPS: usize = 1;
pub const MAX_SHIPS: usize = 5;
pub const TURN_SECONDS: u32 = 20;
pub const RESOLVING_DELAY_MS: u64 = 2000;
pub const GAME_OVER_DELAY_MS: u64 = 2000;

/// Tunables recognised by the engine. Geometry fields are in pixels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct GameConfig {
    pub board_size: usize,
    pub cell_size: f32,
    pub board_separation: f32,
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub min_ships: usize,
    pub max_ships: usize,
    pub turn_seconds: u32,
    pub resolving_delay_ms: u64,
    pub game_over_delay_ms: u64,
    pub rotate_key: char,
    pub delete_key: char,
    pub pause_key: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            cell_size: CELL_SIZE,
            board_separation: BOARD_SEPARATION,
            canvas_width: 1600.0,
            canvas_height: 900.0,
            min_ships: MIN_SHIPS,
            max_ships: MAX_SHIPS,
            turn_seconds: TURN_SECONDS,
            resolving_delay_ms: RESOLVING_DELAY_MS,
            game_over_delay_ms: GAME_OVER_DELAY_MS,
            rotate_key: 'r',
            delete_key: 'x',
            pause_key: ' ',
        }
    }
}

impl GameConfig {
    /// Check geometry, ship bounds and turn length. Any error here is fatal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::BoardSizeZero);
        }
        if !(self.cell_size > 0.0) {
            return Err(ConfigError::CellSizeNotPositive);
        }
        if self.min_ships == 0 {
            return Err(ConfigError::MinShipsNotPositive);
        }
        if self.max_ships > self.board_size {
            return Err(ConfigError::MaxShipsExceedBoard {
                max: self.max_ships,
                board_size: self.board_size,
            });
        }
        if self.min_ships > self.max_ships {
            return Err(ConfigError::MinAboveMax {
                min: self.min_ships,
                max: self.max_ships,
            });
        }
        if self.turn_seconds == 0 {
            return Err(ConfigError::TurnSecondsZero);
        }
        Ok(())
    }

    /// Countdown length of one turn in milliseconds.
    pub fn turn_ms(&self) -> u64 {
        u64::from(self.turn_seconds) * 1000
    }

    /// Top-left pixel corner of the given player's board.
    ///
    /// Player 1 sits left of the canvas centre and player 2 right of it, each
    /// `board_separation` pixels away.
    pub fn board_origin(&self, owner: PlayerId) -> (f32, f32) {
        let half = self.board_size as f32 * self.cell_size / 2.0;
        let center_x = match owner {
            PlayerId::One => self.canvas_width / 2.0 - self.board_separation,
            PlayerId::Two => self.canvas_width / 2.0 + self.board_separation,
        };
        (center_x - half, self.canvas_height / 2.0 - half)
    }
}
