#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod ui;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use cli::{parse_command, Command, StdinInput};
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use session::{InputSource, Session};
#[cfg(feature = "std")]
pub use ui::TerminalPresenter;
