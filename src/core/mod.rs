//! Hot-seat battleship rules engine (no_std compatible)
//!
//! This module contains the cells, ships, boards and the turn coordinator.
//! It depends only on `alloc`, `log` and `libm`, and talks to the outside
//! world exclusively through the [`Presenter`] trait.

pub mod board;
pub mod cell;
pub mod common;
pub mod config;
pub mod game;
pub mod player;
pub mod presenter;
pub mod ship;
pub mod timer;

// Re-export commonly used types
pub use board::{Board, ShotReport};
pub use cell::{Cell, CellState, Shot};
pub use common::{BoardError, CellPos, ConfigError, PlayerId};
pub use config::*;
pub use game::{
    Coordinator, InputEvent, MatchSnapshot, Phase, Prompt, TurnEnd, NEXT_TURN_MESSAGE,
    NEXT_TURN_TITLE,
};
pub use player::Player;
pub use presenter::{Presenter, Sound, Variant};
pub use ship::{Orientation, Ship, ShipId};
pub use timer::TurnTimer;
