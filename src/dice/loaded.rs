use super::Dice;
use crate::Pips;
use std::collections::VecDeque;

/// Die that replays a fixed sequence of outcomes.
#[derive(Debug, Clone, Default)]
pub struct Loaded(VecDeque<Pips>);

impl Loaded {
    /// Outcomes not yet rolled.
    pub fn remaining(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<Pips>> for Loaded {
    fn from(rolls: Vec<Pips>) -> Self {
        Self(VecDeque::from(rolls))
    }
}

impl<const K: usize> From<[Pips; K]> for Loaded {
    fn from(rolls: [Pips; K]) -> Self {
        Self(VecDeque::from(rolls))
    }
}

impl Dice for Loaded {
    fn roll(&mut self, sides: Pips) -> Pips {
        assert!(sides > 0, "die must have at least one side");
        let pips = self.0.pop_front().expect("loaded die ran out of rolls");
        assert!((1..=sides).contains(&pips), "{} is not a face of a d{}", pips, sides);
        pips
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_in_order() {
        let mut die = Loaded::from([5, 3, 1]);
        assert_eq!(die.roll(6), 5);
        assert_eq!(die.roll(6), 3);
        assert_eq!(die.roll(6), 1);
        assert_eq!(die.remaining(), 0);
    }
    #[test]
    #[should_panic(expected = "ran out")]
    fn exhausted() {
        Loaded::default().roll(6);
    }
    #[test]
    #[should_panic]
    fn face_off_the_die() {
        Loaded::from([7]).roll(6);
    }
}
