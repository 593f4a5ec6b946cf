/// Where a turn stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Still rolling; the turn total is at risk.
    Rolling,
    /// Rolled a bust; the turn total is forfeit.
    Busted,
    /// Chose to hold; the turn total will be banked.
    Held,
}

/// One player's turn, from first roll until bust or hold.
///
/// Lives only as long as the turn itself. The running total is the sum of
/// successful rolls and drops to zero the moment a bust is rolled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    position: Position,
    total: Score,
    rolls: usize,
    phase: Phase,
}

impl Turn {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            total: 0,
            rolls: 0,
            phase: Phase::Rolling,
        }
    }
    pub fn position(&self) -> Position {
        self.position
    }
    pub fn total(&self) -> Score {
        self.total
    }
    /// Successful (non-bust) rolls so far.
    pub fn rolls(&self) -> usize {
        self.rolls
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn is_over(&self) -> bool {
        self.phase != Phase::Rolling
    }
    /// Only a successful roll earns the right to hold.
    pub fn can_hold(&self) -> bool {
        self.phase == Phase::Rolling && self.rolls > 0
    }
    /// What this turn contributes to the score once it is over.
    pub fn banked(&self) -> Score {
        match self.phase {
            Phase::Held => self.total,
            Phase::Busted => 0,
            Phase::Rolling => panic!("turn is still in progress"),
        }
    }
    pub fn roll(&mut self, pips: Pips) -> Phase {
        assert!(!self.is_over(), "turn is already over");
        if pips == BUST {
            self.total = 0;
            self.phase = Phase::Busted;
        } else {
            self.total += pips;
            self.rolls += 1;
        }
        self.phase
    }
    pub fn hold(&mut self) -> Phase {
        assert!(self.can_hold(), "cannot hold before a successful roll");
        self.phase = Phase::Held;
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SIDES;
    use crate::dice::Dice;
    use crate::dice::Fair;

    fn play(rolls: &[Pips]) -> Turn {
        let mut turn = Turn::new(0);
        rolls.iter().for_each(|r| {
            turn.roll(*r);
        });
        turn
    }

    #[test]
    fn single_bust_scores_nothing() {
        let turn = play(&[1]);
        assert_eq!(turn.phase(), Phase::Busted);
        assert_eq!(turn.banked(), 0);
    }
    #[test]
    fn hold_keeps_the_total() {
        let mut turn = play(&[5, 3]);
        assert_eq!(turn.hold(), Phase::Held);
        assert_eq!(turn.banked(), 8);
    }
    #[test]
    fn late_bust_forfeits_everything() {
        let mut turn = play(&[6, 6, 6, 6]);
        assert_eq!(turn.total(), 24);
        assert_eq!(turn.roll(1), Phase::Busted);
        assert_eq!(turn.total(), 0);
        assert_eq!(turn.banked(), 0);
        assert_eq!(turn.rolls(), 4);
    }
    #[test]
    fn total_bounded_by_successful_rolls() {
        let ref mut die = Fair::seeded(1234);
        for _ in 0..1_000 {
            let mut turn = Turn::new(1);
            while !turn.is_over() && turn.rolls() < 20 {
                turn.roll(die.roll(SIDES));
                let k = turn.rolls() as Score;
                assert!(turn.total() <= SIDES * k);
                assert!(turn.total() >= 2 * k || turn.is_over());
            }
            if turn.phase() == Phase::Busted {
                assert_eq!(turn.total(), 0);
            }
        }
    }
    #[test]
    fn cannot_hold_before_rolling() {
        assert!(!Turn::new(0).can_hold());
    }
    #[test]
    #[should_panic]
    fn hold_before_rolling() {
        Turn::new(0).hold();
    }
    #[test]
    #[should_panic]
    fn roll_after_bust() {
        play(&[1]).roll(4);
    }
    #[test]
    #[should_panic]
    fn roll_after_hold() {
        let mut turn = play(&[4]);
        turn.hold();
        turn.roll(4);
    }
    #[test]
    #[should_panic]
    fn banked_mid_turn() {
        play(&[4]).banked();
    }
}

use crate::BUST;
use crate::Pips;
use crate::Position;
use crate::Score;
