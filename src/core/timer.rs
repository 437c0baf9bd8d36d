//! Pausable turn countdown driven by elapsed milliseconds.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnTimer {
    initial_ms: u64,
    remaining_ms: u64,
    running: bool,
}

impl TurnTimer {
    /// A stopped timer holding `initial_ms`.
    pub fn new(initial_ms: u64) -> Self {
        Self {
            initial_ms,
            remaining_ms: initial_ms,
            running: false,
        }
    }

    /// Restart from `ms` and run.
    pub fn start(&mut self, ms: u64) {
        self.initial_ms = ms;
        self.remaining_ms = ms;
        self.running = true;
    }

    /// Advance by `elapsed_ms` of wall-clock time if running.
    pub fn tick(&mut self, elapsed_ms: u64) {
        if self.running {
            self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        }
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Continue counting down. A finished timer stays stopped.
    pub fn resume(&mut self) {
        if self.remaining_ms == 0 {
            return;
        }
        self.running = true;
    }

    /// Set the remaining time without changing the running flag.
    pub fn reset(&mut self, ms: u64) {
        self.initial_ms = ms;
        self.remaining_ms = ms;
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_ms == 0
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn initial_ms(&self) -> u64 {
        self.initial_ms
    }

    /// Remaining whole seconds, rounded up as shown on screen.
    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_ms.div_ceil(1000)
    }
}
