/// Supplies names and hold/roll decisions, and observes the game.
///
/// A single implementation may speak for every seat (hotseat play at one
/// terminal). Implementations handle their own input problems; the engine
/// trusts whatever comes back.
pub trait Player {
    /// Name for the seat at `position`. Must be non-empty and trimmed.
    fn name(&mut self, position: Position) -> String;
    /// Hold or roll again. Only asked after a successful roll, so
    /// `turn.can_hold()` is always true here.
    fn decide(&mut self, seat: &Seat, turn: &Turn) -> Decision;
    /// Receive notification of game events, in order.
    fn notify(&mut self, event: &Event);
}

use super::Decision;
use super::Event;
use super::Seat;
use super::Turn;
use crate::Position;
