//! Interactive players.
//!
//! - [`Lines`] — Fallible "read a line" capability
//! - [`Terminal`] — Real console input via dialoguer (requires `cli` feature)
//! - [`Script`] — Canned input for tests and replays
//! - [`Human`] — Validating, reprompting player over any [`Lines`]
mod human;
mod lines;
mod script;
#[cfg(feature = "cli")]
mod terminal;

pub use human::*;
pub use lines::*;
pub use script::*;
#[cfg(feature = "cli")]
pub use terminal::*;
