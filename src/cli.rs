#![cfg(feature = "std")]

//! Terminal command parsing and the stdin input source.

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::core::CellPos;
use crate::session::InputSource;
use crate::ui::column_label;

/// One line of terminal input, already parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place (setup) or fire (play) at a cell.
    Target(CellPos),
    Rotate,
    /// Remove the own ship covering a cell during setup.
    Delete(CellPos),
    Pause,
    Yes,
    No,
    /// Ship count answer.
    Count(usize),
    Quit,
}

/// Largest board whose columns can all be typed as a letter.
pub const MAX_BOARD_SIZE: usize = 26;

/// Reject boards the terminal cannot address.
pub fn check_board_size(board_size: usize) -> Result<(), String> {
    if board_size > MAX_BOARD_SIZE {
        return Err(format!(
            "Board size {} too large for the terminal - at most {} columns (A-Z)",
            board_size, MAX_BOARD_SIZE
        ));
    }
    Ok(())
}

/// Parse a coordinate such as `A5` or `j10` on a board of `board_size`.
pub fn parse_coord(input: &str, board_size: usize) -> Result<CellPos, String> {
    let input = input.trim();
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    let last = column_label(board_size.saturating_sub(1));
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-{}", col_ch, last));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= board_size {
        return Err(format!("Column '{}' out of bounds - must be A-{}", col_ch, last));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, board_size))?;
    if row == 0 || row > board_size {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, board_size));
    }
    Ok(CellPos::new(col, row - 1))
}

/// Parse one input line into a [`Command`].
pub fn parse_command(line: &str, board_size: usize) -> Result<Command, String> {
    let line = line.trim();
    let lower = line.to_ascii_lowercase();
    match lower.as_str() {
        "" => return Err("Empty input".to_string()),
        "y" | "yes" => return Ok(Command::Yes),
        "n" | "no" => return Ok(Command::No),
        "r" | "rotate" => return Ok(Command::Rotate),
        "p" | "pause" => return Ok(Command::Pause),
        "q" | "quit" => return Ok(Command::Quit),
        _ => {}
    }
    if let Ok(count) = lower.parse::<usize>() {
        return Ok(Command::Count(count));
    }
    if let Some(rest) = lower.strip_prefix("x ") {
        return parse_coord(rest, board_size).map(Command::Delete);
    }
    parse_coord(line, board_size).map(Command::Target)
}

/// Commands read line by line from standard input.
pub struct StdinInput {
    lines: Lines<BufReader<Stdin>>,
    board_size: usize,
}

impl StdinInput {
    pub fn new(board_size: usize) -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            board_size,
        }
    }
}

#[async_trait::async_trait]
impl InputSource for StdinInput {
    async fn next_command(&mut self) -> anyhow::Result<Option<Command>> {
        // `next_line` is cancel safe, so a session may drop this future on a tick.
        while let Some(line) = self.lines.next_line().await? {
            match parse_command(&line, self.board_size) {
                Ok(command) => return Ok(Some(command)),
                Err(e) => eprintln!("{}", e),
            }
        }
        Ok(None)
    }
}
