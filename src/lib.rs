//! Pig, the two-player dice game.
//!
//! Each turn a player rolls a die until they either roll a [`BUST`] or
//! decide to hold. Holding banks the turn total into their score; busting
//! forfeits it. The first player to reach [`WIN`] points wins.
//!
//! ## Modules
//!
//! - [`dice`] — Randomness source: fair and loaded dice
//! - [`gameplay`] — Seats, the turn state machine, events and the engine
//! - [`players`] — Interactive player over a fallible line source
pub mod dice;
pub mod gameplay;
pub mod players;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Banked scores and running turn totals.
pub type Score = u32;
/// Face value of a single die, also used for the number of sides.
pub type Pips = u32;
/// Seat index around the table (0 acts first).
pub type Position = usize;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Number of players at the table.
pub const N: usize = 2;
/// Sides on the die.
pub const SIDES: Pips = 6;
/// Face that forfeits the turn total.
pub const BUST: Pips = 1;
/// Score at or above which the acting player wins.
pub const WIN: Score = 100;

/// Rules shown once at startup.
pub const RULES: &str = r#"
Pig is a simple dice game.

Each turn, a player repeatedly rolls a die until either a 1 is rolled or the
player decides to "hold":

- If the player rolls a 1, they score nothing and it becomes the next player's
  turn.
- If the player rolls any other number, it is added to their turn total and the
  player's turn continues.
- If a player chooses to "hold", their turn total is added to their score, and
  it becomes the next player's turn.

The first player to score 100 or more points wins."#;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr so it never interleaves with the
/// game transcript on stdout.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}
