#![cfg(feature = "std")]

//! Text front end: draws boards and prompts on a terminal.

use std::io::{self, Write};

use crate::core::{Board, CellPos, CellState, PlayerId, Presenter, Sound, Variant};

/// [`Presenter`] that writes plain-text frames to any writer.
pub struct TerminalPresenter<W: Write = io::Stdout> {
    out: W,
    ghost: Option<(PlayerId, Vec<CellPos>)>,
}

impl TerminalPresenter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out, ghost: None }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn glyph(&self, owner: PlayerId, board: &Board, pos: CellPos, mask_ships: bool) -> char {
        let cell = match board.cell(pos) {
            Some(cell) => cell,
            None => return ' ',
        };
        match cell.state() {
            CellState::Hit => return 'X',
            CellState::Miss => return 'o',
            CellState::Empty => {}
        }
        if let Some((ghost_owner, cells)) = &self.ghost {
            if *ghost_owner == owner && cells.contains(&pos) {
                return '+';
            }
        }
        let visible = cell
            .ship()
            .and_then(|id| board.ship(id))
            .map_or(false, |ship| !mask_ships || ship.is_sunk());
        if visible {
            'S'
        } else {
            '.'
        }
    }

    fn write_board(&mut self, owner: PlayerId, board: &Board, mask_ships: bool) -> io::Result<()> {
        let size = board.size();
        let mut header = String::from("     ");
        for c in 0..size {
            header.push(' ');
            header.push(column_label(c));
        }
        writeln!(self.out, "  {}{}", owner, if mask_ships { " (hidden)" } else { "" })?;
        writeln!(self.out, "{}", header)?;
        for r in 0..size {
            let mut line = format!("  {:>3}", r + 1);
            for c in 0..size {
                line.push(' ');
                line.push(self.glyph(owner, board, CellPos::new(c, r), mask_ships));
            }
            writeln!(self.out, "{}", line)?;
        }
        let sunk = board.ships().filter(|(_, ship)| ship.is_sunk()).count();
        writeln!(self.out, "  ships sunk: {}/{}", sunk, board.ship_count())?;
        writeln!(self.out)
    }
}

/// Letter shown above column `c` (A, B, ...).
pub fn column_label(c: usize) -> char {
    (b'A' + (c % 26) as u8) as char
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn render_board(&mut self, owner: PlayerId, board: &Board, mask_ships: bool) {
        let _ = self.write_board(owner, board, mask_ships);
    }

    fn render_label(&mut self, text: &str) {
        self.ghost = None;
        let _ = writeln!(self.out, "\n=== {} ===", text);
    }

    fn render_timer(&mut self, remaining_seconds: u64) {
        let _ = writeln!(self.out, "  Time: {}", remaining_seconds);
    }

    fn render_ghost_preview(&mut self, owner: PlayerId, cells: &[CellPos]) {
        self.ghost = Some((owner, cells.to_vec()));
    }

    fn show_confirm(&mut self, title: &str, message: &str) {
        let _ = writeln!(self.out, "[{}] {} (y/n)", title, message);
    }

    fn show_choice(&mut self, min: usize, max: usize) {
        let _ = writeln!(
            self.out,
            "[Number of Ships] Select number of ships for each player ({}-{}), or n to return",
            min, max
        );
    }

    fn notify(&mut self, message: &str, variant: Variant) {
        let tag = match variant {
            Variant::Info => "info",
            Variant::Success => "ok",
            Variant::Danger => "!!",
        };
        let _ = writeln!(self.out, "  [{}] {}", tag, message);
    }

    fn play_sound(&mut self, sound: Sound) {
        let cue = match sound {
            Sound::Hit => "*boom*",
            Sound::Miss => "*splash*",
            Sound::Sunk => "*glug glug*",
        };
        let _ = writeln!(self.out, "  {}", cue);
    }

    fn navigate_to_game_over(&mut self, winner: Option<PlayerId>) {
        let _ = match winner {
            Some(player) => writeln!(self.out, "\n*** {} wins! ***", player),
            None => writeln!(self.out, "\n*** Game Over ***"),
        };
    }

    fn navigate_back(&mut self) {
        let _ = writeln!(self.out, "Returning to the main menu.");
    }
}
