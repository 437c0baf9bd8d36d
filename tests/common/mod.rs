#![allow(dead_code)]

use hotseat_battleship::{
    Board, CellPos, Coordinator, GameConfig, PlayerId, Presenter, Sound, Variant,
};

/// One presenter call, as seen by the test double.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Board { owner: PlayerId, masked: bool },
    Label(String),
    Timer(u64),
    Ghost(PlayerId, Vec<CellPos>),
    Confirm(String, String),
    Choice(usize, usize),
    Notify(String, Variant),
    Sound(Sound),
    GameOver(Option<PlayerId>),
    Back,
}

/// Presenter that records every call in order.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
}

impl Recorder {
    pub fn take(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    pub fn confirms(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Confirm(..)))
            .count()
    }

    pub fn notified(&self, message: &str) -> bool {
        self.calls
            .iter()
            .any(|c| matches!(c, Call::Notify(m, _) if m == message))
    }

    pub fn sounds(&self) -> Vec<Sound> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Sound(s) => Some(*s),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for Recorder {
    fn render_board(&mut self, owner: PlayerId, _board: &Board, mask_ships: bool) {
        self.calls.push(Call::Board {
            owner,
            masked: mask_ships,
        });
    }

    fn render_label(&mut self, text: &str) {
        self.calls.push(Call::Label(text.to_string()));
    }

    fn render_timer(&mut self, remaining_seconds: u64) {
        self.calls.push(Call::Timer(remaining_seconds));
    }

    fn render_ghost_preview(&mut self, owner: PlayerId, cells: &[CellPos]) {
        self.calls.push(Call::Ghost(owner, cells.to_vec()));
    }

    fn show_confirm(&mut self, title: &str, message: &str) {
        self.calls
            .push(Call::Confirm(title.to_string(), message.to_string()));
    }

    fn show_choice(&mut self, min: usize, max: usize) {
        self.calls.push(Call::Choice(min, max));
    }

    fn notify(&mut self, message: &str, variant: Variant) {
        self.calls.push(Call::Notify(message.to_string(), variant));
    }

    fn play_sound(&mut self, sound: Sound) {
        self.calls.push(Call::Sound(sound));
    }

    fn navigate_to_game_over(&mut self, winner: Option<PlayerId>) {
        self.calls.push(Call::GameOver(winner));
    }

    fn navigate_back(&mut self) {
        self.calls.push(Call::Back);
    }
}

pub const DELAY_MS: u64 = 500;
pub const TURN_SECONDS: u32 = 10;

pub fn test_config() -> GameConfig {
    GameConfig {
        turn_seconds: TURN_SECONDS,
        resolving_delay_ms: DELAY_MS,
        game_over_delay_ms: DELAY_MS,
        ..GameConfig::default()
    }
}

/// A coordinator that has entered SETUP with `ships` ships per player.
pub fn game_in_setup(ships: usize) -> Coordinator<Recorder> {
    let mut game = Coordinator::new(test_config(), Recorder::default()).unwrap();
    game.begin();
    assert!(game.resolve_choice(Some(ships)));
    game.presenter_mut().take();
    game
}

/// Click the centre of (`col`, `row`) on `owner`'s board.
pub fn click(game: &mut Coordinator<Recorder>, owner: PlayerId, col: usize, row: usize) -> bool {
    let (x, y) = game.player(owner).board().cell_center(CellPos::new(col, row));
    game.handle_click(x, y)
}

pub fn hover(game: &mut Coordinator<Recorder>, owner: PlayerId, col: usize, row: usize) -> bool {
    let (x, y) = game.player(owner).board().cell_center(CellPos::new(col, row));
    game.handle_mouse_move(x, y)
}

/// Wait out the settle delay and confirm the hand-over.
pub fn hand_over(game: &mut Coordinator<Recorder>) {
    game.tick(DELAY_MS);
    assert!(game.resolve_confirm(true));
}

/// Place one length-1 ship per player, in column `col` of row 0, and start
/// the battle.
pub fn game_in_play_one_ship() -> Coordinator<Recorder> {
    let mut game = game_in_setup(1);
    assert!(click(&mut game, PlayerId::One, 0, 0));
    hand_over(&mut game);
    assert!(click(&mut game, PlayerId::Two, 0, 0));
    hand_over(&mut game);
    game.presenter_mut().take();
    game
}
