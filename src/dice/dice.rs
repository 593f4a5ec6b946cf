use crate::Pips;

/// Source of die outcomes.
///
/// The engine only ever asks for a `SIDES`-sided roll, but implementations
/// must honor any positive side count.
pub trait Dice {
    /// Roll one die, returning a face in `1..=sides`.
    /// Panics if `sides` is zero.
    fn roll(&mut self, sides: Pips) -> Pips;
}
