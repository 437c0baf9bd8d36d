//! Match lifecycle: INIT → SETUP → PLAY → GAME_OVER.
//!
//! The [`Coordinator`] owns both players and the injected [`Presenter`]. Every
//! external stimulus enters through [`Coordinator::dispatch`], which is also
//! the single place where input is refused while a turn is being resolved.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use super::board::Board;
use super::common::{CellPos, ConfigError, PlayerId};
use super::config::GameConfig;
use super::player::Player;
use super::presenter::{Presenter, Sound, Variant};
use super::timer::TurnTimer;

pub const NEXT_TURN_TITLE: &str = "Next turn";
pub const NEXT_TURN_MESSAGE: &str =
    "Please hand over the device to the next player and let them confirm";

/// Coarse lifecycle stage of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Init,
    Setup,
    Play,
    GameOver,
}

/// Everything the outside world can tell the coordinator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Click { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Key(char),
    Tick { elapsed_ms: u64 },
    Confirm(bool),
    Choice(Option<usize>),
}

/// Prompt the coordinator is currently waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Confirm,
    Choice { min: usize, max: usize },
}

/// Why a turn is being handed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEnd {
    Placement,
    Shot,
    Timeout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Settling { remaining_ms: u64 },
    AwaitingConfirm,
}

/// A turn outcome on display, waiting for the hand-over confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Resolution {
    end: TurnEnd,
    stage: Stage,
}

/// Serializable summary of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSnapshot {
    pub phase: Phase,
    pub current_player: PlayerId,
    pub ships_per_player: usize,
    pub resolving_turn: bool,
    pub remaining_seconds: u64,
    pub timer_running: bool,
    pub winner: Option<PlayerId>,
    pub ships_placed: [usize; 2],
    /// Shots fired by each player.
    pub shots_fired: [usize; 2],
}

pub struct Coordinator<P: Presenter> {
    config: GameConfig,
    presenter: P,
    players: [Player; 2],
    phase: Phase,
    current: PlayerId,
    ships_per_player: usize,
    timer: TurnTimer,
    resolution: Option<Resolution>,
    choosing: bool,
    pointer: Option<(f32, f32)>,
    hovered: Option<CellPos>,
    ghost: Vec<CellPos>,
    winner: Option<PlayerId>,
    navigate_in: Option<u64>,
    abandoned: bool,
}

impl<P: Presenter> Coordinator<P> {
    /// Build a match in `Init`. Fails if the configuration is unusable.
    pub fn new(config: GameConfig, presenter: P) -> Result<Self, ConfigError> {
        config.validate()?;
        let players = [PlayerId::One, PlayerId::Two].map(|id| {
            Player::new(
                id,
                Board::new(config.board_size, config.cell_size, config.board_origin(id)),
            )
        });
        let timer = TurnTimer::new(config.turn_ms());
        Ok(Self {
            config,
            presenter,
            players,
            phase: Phase::Init,
            current: PlayerId::One,
            ships_per_player: 0,
            timer,
            resolution: None,
            choosing: false,
            pointer: None,
            hovered: None,
            ghost: Vec::new(),
            winner: None,
            navigate_in: None,
            abandoned: false,
        })
    }

    /// Ask for the number of ships per player.
    pub fn begin(&mut self) {
        if self.phase != Phase::Init || self.choosing {
            return;
        }
        self.choosing = true;
        self.abandoned = false;
        self.presenter
            .show_choice(self.config.min_ships, self.config.max_ships);
    }

    /// Route one event. Returns `true` when it changed the match or
    /// produced output.
    pub fn dispatch(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Click { .. } | InputEvent::Move { .. } | InputEvent::Key(_)
                if self.input_blocked() =>
            {
                log::debug!(
                    "ignoring {:?} in {:?} (resolving: {})",
                    event,
                    self.phase,
                    self.is_resolving_turn()
                );
                false
            }
            InputEvent::Click { x, y } => {
                self.pointer = Some((x, y));
                match self.phase {
                    Phase::Setup => self.setup_click(x, y),
                    Phase::Play => self.play_click(x, y),
                    _ => false,
                }
            }
            InputEvent::Move { x, y } => {
                self.pointer = Some((x, y));
                self.hover(x, y)
            }
            InputEvent::Key(key) => self.key_press(key),
            InputEvent::Tick { elapsed_ms } => self.on_tick(elapsed_ms),
            InputEvent::Confirm(ok) => self.on_confirm(ok),
            InputEvent::Choice(value) => self.on_choice(value),
        }
    }

    pub fn handle_click(&mut self, x: f32, y: f32) -> bool {
        self.dispatch(InputEvent::Click { x, y })
    }

    pub fn handle_mouse_move(&mut self, x: f32, y: f32) -> bool {
        self.dispatch(InputEvent::Move { x, y })
    }

    pub fn handle_key_press(&mut self, key: char) -> bool {
        self.dispatch(InputEvent::Key(key))
    }

    pub fn tick(&mut self, elapsed_ms: u64) -> bool {
        self.dispatch(InputEvent::Tick { elapsed_ms })
    }

    pub fn resolve_confirm(&mut self, ok: bool) -> bool {
        self.dispatch(InputEvent::Confirm(ok))
    }

    pub fn resolve_choice(&mut self, value: Option<usize>) -> bool {
        self.dispatch(InputEvent::Choice(value))
    }

    fn input_blocked(&self) -> bool {
        self.resolution.is_some() || self.phase == Phase::GameOver
    }

    fn current_mut(&mut self) -> &mut Player {
        &mut self.players[self.current.index()]
    }

    // ---- setup ----

    fn setup_click(&mut self, x: f32, y: f32) -> bool {
        let ships = self.ships_per_player;
        let current = self.current;
        let player = self.current_mut();
        let length = match player.next_ship_length(ships) {
            Some(length) => length,
            None => return false,
        };
        if let Err(e) = player.place_ship_at(x, y, length) {
            log::debug!("{} placement at ({}, {}) rejected: {}", current, x, y, e);
            return false;
        }
        log::info!("{} placed a ship of length {}", current, length);
        self.ghost.clear();
        self.resolution = Some(Resolution {
            end: TurnEnd::Placement,
            stage: Stage::Settling {
                remaining_ms: self.config.resolving_delay_ms,
            },
        });
        self.settle(0);
        true
    }

    fn hover(&mut self, x: f32, y: f32) -> bool {
        if self.phase != Phase::Setup {
            return false;
        }
        let pos = match self.players[self.current.index()].board().cell_at(x, y) {
            Some(cell) => cell.pos(),
            None => return false,
        };
        self.hovered = Some(pos);
        self.refresh_ghost();
        true
    }

    fn refresh_ghost(&mut self) {
        let player = &self.players[self.current.index()];
        self.ghost = match (self.hovered, player.next_ship_length(self.ships_per_player)) {
            (Some(pos), Some(length)) => player
                .board()
                .placement_cells(pos.col, pos.row, length, player.orientation())
                .unwrap_or_default(),
            _ => Vec::new(),
        };
    }

    fn key_press(&mut self, key: char) -> bool {
        let key = key.to_ascii_lowercase();
        match self.phase {
            Phase::Setup if key == self.config.delete_key.to_ascii_lowercase() => {
                let (x, y) = match self.pointer {
                    Some(pointer) => pointer,
                    None => return false,
                };
                let deleted = self.current_mut().delete_ship_at(x, y);
                if deleted {
                    self.refresh_ghost();
                }
                deleted
            }
            Phase::Setup if key == self.config.rotate_key.to_ascii_lowercase() => {
                let facing = self.current_mut().rotate_ship();
                log::debug!("{} now faces {:?}", self.current, facing);
                self.refresh_ghost();
                true
            }
            Phase::Play if key == self.config.pause_key.to_ascii_lowercase() => {
                self.toggle_pause();
                true
            }
            _ => false,
        }
    }

    // ---- play ----

    fn play_click(&mut self, x: f32, y: f32) -> bool {
        let shooter = self.current;
        let target = &mut self.players[shooter.other().index()];
        let report = match target.fire_at(x, y) {
            Ok(report) => report,
            Err(e) => {
                log::debug!("{} shot at ({}, {}) rejected: {}", shooter, x, y, e);
                return false;
            }
        };
        let defeated =
            report.sunk && target.board().ship_count() > 0 && target.all_ships_sunk();
        self.resolution = Some(Resolution {
            end: TurnEnd::Shot,
            stage: Stage::Settling {
                remaining_ms: self.config.resolving_delay_ms,
            },
        });
        log::info!(
            "{} fired at ({}, {}): {}",
            shooter,
            report.pos.col,
            report.pos.row,
            if report.is_hit() { "hit" } else { "miss" }
        );

        if report.is_hit() {
            self.presenter.notify("Hit!", Variant::Success);
            self.presenter.play_sound(Sound::Hit);
        } else {
            self.presenter.notify("Miss!", Variant::Danger);
            self.presenter.play_sound(Sound::Miss);
        }

        if report.sunk {
            self.presenter.notify("Ship is sunk", Variant::Success);
            self.presenter.play_sound(Sound::Sunk);
            if defeated {
                self.presenter
                    .notify(&format!("{} Wins!", shooter), Variant::Success);
                self.finish(Some(shooter));
                return true;
            }
        }

        self.timer.pause();
        self.settle(0);
        true
    }

    fn toggle_pause(&mut self) {
        if self.timer.is_running() {
            self.timer.pause();
            self.presenter.notify("Paused", Variant::Info);
        } else {
            self.timer.resume();
            self.presenter.notify("Resumed", Variant::Success);
        }
    }

    fn time_out(&mut self) {
        log::info!("{} ran out of time", self.current);
        self.resolution = Some(Resolution {
            end: TurnEnd::Timeout,
            stage: Stage::AwaitingConfirm,
        });
        self.timer.pause();
        self.presenter.notify("Time up!", Variant::Danger);
        self.presenter.show_confirm(NEXT_TURN_TITLE, NEXT_TURN_MESSAGE);
    }

    // ---- time and prompts ----

    fn on_tick(&mut self, elapsed_ms: u64) -> bool {
        let mut changed = false;
        if self.phase == Phase::Play {
            self.timer.tick(elapsed_ms);
        }
        changed |= self.settle(elapsed_ms);

        if let Some(remaining) = self.navigate_in {
            if elapsed_ms >= remaining {
                self.navigate_in = None;
                self.presenter.navigate_to_game_over(self.winner);
                changed = true;
            } else {
                self.navigate_in = Some(remaining - elapsed_ms);
            }
        }

        if self.phase == Phase::Play && self.resolution.is_none() && self.timer.is_finished() {
            self.time_out();
            changed = true;
        }
        changed
    }

    /// Count down the settle delay of a resolving turn and raise the
    /// hand-over prompt once it has elapsed.
    fn settle(&mut self, elapsed_ms: u64) -> bool {
        let resolution = match self.resolution.as_mut() {
            Some(resolution) => resolution,
            None => return false,
        };
        let remaining = match resolution.stage {
            Stage::Settling { remaining_ms } => remaining_ms,
            Stage::AwaitingConfirm => return false,
        };
        if elapsed_ms < remaining {
            resolution.stage = Stage::Settling {
                remaining_ms: remaining - elapsed_ms,
            };
            return false;
        }
        resolution.stage = Stage::AwaitingConfirm;
        self.presenter.show_confirm(NEXT_TURN_TITLE, NEXT_TURN_MESSAGE);
        true
    }

    fn on_confirm(&mut self, ok: bool) -> bool {
        let resolution = match self.resolution {
            Some(resolution) if resolution.stage == Stage::AwaitingConfirm => resolution,
            _ => {
                log::debug!("ignoring confirmation with no prompt open");
                return false;
            }
        };
        if !ok {
            log::info!("{} declined the hand-over", self.current);
            self.finish(None);
            return true;
        }
        self.resolution = None;
        match resolution.end {
            TurnEnd::Placement => self.after_placement(),
            TurnEnd::Shot | TurnEnd::Timeout => {
                self.current = self.current.other();
                self.timer.reset(self.config.turn_ms());
                self.timer.resume();
                log::info!("{}'s turn", self.current);
            }
        }
        true
    }

    fn after_placement(&mut self) {
        let ships = self.ships_per_player;
        if self.players.iter().all(|p| p.is_ready(ships)) {
            self.start_play();
            return;
        }
        if !self.players[self.current.other().index()].is_ready(ships) {
            self.current = self.current.other();
            self.hovered = None;
        }
        self.ghost.clear();
        self.presenter
            .notify(&format!("{} place ship", self.current), Variant::Info);
    }

    fn start_play(&mut self) {
        log::info!("both fleets placed, battle begins");
        self.phase = Phase::Play;
        self.current = PlayerId::One;
        self.hovered = None;
        self.ghost.clear();
        self.presenter.notify("Battle begins!", Variant::Success);
        self.timer.start(self.config.turn_ms());
    }

    fn on_choice(&mut self, value: Option<usize>) -> bool {
        if self.phase != Phase::Init || !self.choosing {
            return false;
        }
        self.choosing = false;
        let (min, max) = (self.config.min_ships, self.config.max_ships);
        match value {
            None => {
                log::info!("ship count selection cancelled");
                self.abandoned = true;
                self.presenter.navigate_back();
            }
            Some(count) if (min..=max).contains(&count) => {
                self.ships_per_player = count;
                self.phase = Phase::Setup;
                log::info!("setup begins with {} ships per player", count);
                self.presenter
                    .notify(&format!("{} place ship", self.current), Variant::Info);
            }
            Some(count) => {
                log::debug!("ship count {} outside {}..={}", count, min, max);
                self.choosing = true;
                self.presenter.show_choice(min, max);
            }
        }
        true
    }

    fn finish(&mut self, winner: Option<PlayerId>) {
        self.phase = Phase::GameOver;
        self.resolution = None;
        self.timer.pause();
        self.winner = winner;
        match winner {
            Some(player) => {
                log::info!("game over, {} wins", player);
                if self.config.game_over_delay_ms == 0 {
                    self.presenter.navigate_to_game_over(winner);
                } else {
                    self.navigate_in = Some(self.config.game_over_delay_ms);
                }
            }
            None => log::info!("game over without a winner"),
        }
    }

    // ---- output ----

    /// Draw one frame through the presenter.
    pub fn render(&mut self) {
        let label = match self.phase {
            Phase::Init => return,
            Phase::Setup => format!("{}'s Setup", self.current),
            Phase::Play => format!("{}'s Turn", self.current),
            Phase::GameOver => String::from("Game Over"),
        };
        self.presenter.render_label(&label);
        if self.phase == Phase::Setup && self.resolution.is_none() {
            self.presenter.render_ghost_preview(self.current, &self.ghost);
        }
        for player in &self.players {
            self.presenter
                .render_board(player.id(), player.board(), player.id() != self.current);
        }
        if self.phase == Phase::Play {
            self.presenter.render_timer(self.timer.remaining_seconds());
        }
    }

    /// The prompt currently awaiting an answer, if any.
    pub fn awaiting(&self) -> Option<Prompt> {
        if self.choosing {
            return Some(Prompt::Choice {
                min: self.config.min_ships,
                max: self.config.max_ships,
            });
        }
        match self.resolution {
            Some(Resolution {
                stage: Stage::AwaitingConfirm,
                ..
            }) => Some(Prompt::Confirm),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            phase: self.phase,
            current_player: self.current,
            ships_per_player: self.ships_per_player,
            resolving_turn: self.is_resolving_turn(),
            remaining_seconds: self.timer.remaining_seconds(),
            timer_running: self.timer.is_running(),
            winner: self.winner,
            ships_placed: [self.players[0].placed_count(), self.players[1].placed_count()],
            shots_fired: [
                self.players[1].board().shots_taken(),
                self.players[0].board().shots_taken(),
            ],
        }
    }

    /// `true` once nothing more will happen: the match was abandoned at
    /// INIT, or it is over and the game-over navigation has fired.
    pub fn is_finished(&self) -> bool {
        match self.phase {
            Phase::Init => self.abandoned,
            Phase::GameOver => self.navigate_in.is_none(),
            _ => false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    pub fn ships_per_player(&self) -> usize {
        self.ships_per_player
    }

    pub fn is_resolving_turn(&self) -> bool {
        self.resolution.is_some()
    }

    /// Why the current turn is being handed over, while resolving.
    pub fn turn_end(&self) -> Option<TurnEnd> {
        self.resolution.map(|r| r.end)
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn timer(&self) -> &TurnTimer {
        &self.timer
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn ghost_cells(&self) -> &[CellPos] {
        &self.ghost
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
