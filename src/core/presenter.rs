//! Seam between the rules engine and whatever draws, prompts and plays
//! sounds.
//!
//! The coordinator owns one `Presenter` and only ever talks to the outside
//! world through it. Prompts are requests: the answer is fed back into the
//! coordinator as an input event.

use super::board::Board;
use super::common::{CellPos, PlayerId};

/// Styling hint for transient notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    Info,
    Success,
    Danger,
}

/// Named sound cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Sound {
    Hit,
    Miss,
    Sunk,
}

pub trait Presenter {
    /// Draw one board. With `mask_ships` set, ships stay hidden until sunk.
    fn render_board(&mut self, owner: PlayerId, board: &Board, mask_ships: bool);

    fn render_label(&mut self, text: &str);

    fn render_timer(&mut self, remaining_seconds: u64);

    /// Highlight the cells a pending placement would occupy.
    fn render_ghost_preview(&mut self, owner: PlayerId, cells: &[CellPos]);

    /// Ask a yes/no question. Answered with `InputEvent::Confirm`.
    fn show_confirm(&mut self, title: &str, message: &str);

    /// Ask for a number in `min..=max`. Answered with `InputEvent::Choice`.
    fn show_choice(&mut self, min: usize, max: usize);

    fn notify(&mut self, message: &str, variant: Variant);

    fn play_sound(&mut self, sound: Sound);

    /// Leave the board for the game-over screen.
    fn navigate_to_game_over(&mut self, winner: Option<PlayerId>);

    /// Leave the match before it began.
    fn navigate_back(&mut self);
}
