#![cfg(feature = "std")]

//! Async driver that feeds a [`Coordinator`] from an input source and a
//! wall-clock ticker.

use tokio::time::{interval, Duration, Instant, MissedTickBehavior};

use crate::cli::Command;
use crate::core::{Coordinator, MatchSnapshot, Phase, Presenter, Prompt};

/// Source of player commands, e.g. a terminal or a scripted test feed.
#[async_trait::async_trait]
pub trait InputSource: Send {
    /// Next command, or `None` once the source is exhausted. Implementations
    /// must be cancel safe: the session drops pending calls on every tick.
    async fn next_command(&mut self) -> anyhow::Result<Option<Command>>;
}

pub struct Session<P: Presenter> {
    coordinator: Coordinator<P>,
    tick_period: Duration,
}

impl<P: Presenter> Session<P> {
    pub fn new(coordinator: Coordinator<P>, tick_period: Duration) -> Self {
        Self {
            coordinator,
            tick_period,
        }
    }

    pub fn coordinator(&self) -> &Coordinator<P> {
        &self.coordinator
    }

    pub fn into_coordinator(self) -> Coordinator<P> {
        self.coordinator
    }

    /// Translate a command into coordinator events. Returns whether anything
    /// changed.
    pub fn apply(&mut self, command: Command) -> bool {
        let c = &mut self.coordinator;
        let config = c.config().clone();
        match command {
            Command::Target(pos) => {
                let owner = match c.phase() {
                    Phase::Setup => c.current_player(),
                    Phase::Play => c.current_player().other(),
                    _ => return false,
                };
                let (x, y) = c.player(owner).board().cell_center(pos);
                let moved = c.handle_mouse_move(x, y);
                c.handle_click(x, y) || moved
            }
            Command::Delete(pos) => {
                if c.phase() != Phase::Setup {
                    return false;
                }
                let (x, y) = c.player(c.current_player()).board().cell_center(pos);
                let moved = c.handle_mouse_move(x, y);
                c.handle_key_press(config.delete_key) || moved
            }
            Command::Rotate => c.handle_key_press(config.rotate_key),
            Command::Pause => c.handle_key_press(config.pause_key),
            Command::Yes => c.resolve_confirm(true),
            Command::No => match c.awaiting() {
                Some(Prompt::Choice { .. }) => c.resolve_choice(None),
                _ => c.resolve_confirm(false),
            },
            Command::Count(count) => c.resolve_choice(Some(count)),
            Command::Quit => false,
        }
    }

    /// Play until the match finishes or the input runs dry.
    pub async fn run<I: InputSource>(&mut self, input: &mut I) -> anyhow::Result<MatchSnapshot> {
        self.coordinator.begin();
        let mut ticker = interval(self.tick_period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last = Instant::now();

        while !self.coordinator.is_finished() {
            tokio::select! {
                _ = ticker.tick() => {
                    let elapsed = Instant::now().duration_since(last).as_millis() as u64;
                    // advance by whole milliseconds only so no time is lost to rounding
                    last += Duration::from_millis(elapsed);
                    if self.coordinator.tick(elapsed) {
                        self.coordinator.render();
                    }
                }
                command = input.next_command() => {
                    match command? {
                        None | Some(Command::Quit) => {
                            log::info!("input closed, leaving the match");
                            break;
                        }
                        Some(command) => {
                            if self.apply(command) {
                                self.coordinator.render();
                            }
                        }
                    }
                }
            }
        }
        Ok(self.coordinator.snapshot())
    }
}
