use super::Dice;
use crate::Pips;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Uniform die backed by a small, fast PRNG.
/// Seeded exactly once at construction and never reseeded.
#[derive(Debug, Clone)]
pub struct Fair(SmallRng);

impl Fair {
    /// Reproducible die for replays and debugging.
    pub fn seeded(seed: u64) -> Self {
        log::debug!("seeding die with {}", seed);
        Self(SmallRng::seed_from_u64(seed))
    }
}

/// Seeds from the wall clock.
impl Default for Fair {
    fn default() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|t| t.as_nanos() as u64)
            .unwrap_or_default();
        Self::seeded(seed)
    }
}

impl Dice for Fair {
    fn roll(&mut self, sides: Pips) -> Pips {
        assert!(sides > 0, "die must have at least one side");
        self.0.random_range(1..=sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SIDES;

    #[test]
    fn rolls_stay_on_the_die() {
        let ref mut die = Fair::seeded(0xDEADBEEF);
        assert!((0..10_000).map(|_| die.roll(SIDES)).all(|r| (1..=SIDES).contains(&r)));
    }
    #[test]
    fn every_face_shows_up() {
        let ref mut die = Fair::seeded(7);
        let mut seen = [false; SIDES as usize];
        (0..10_000).for_each(|_| seen[die.roll(SIDES) as usize - 1] = true);
        assert!(seen.iter().all(|s| *s));
    }
    #[test]
    fn same_seed_same_rolls() {
        let mut a = Fair::seeded(42);
        let mut b = Fair::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.roll(SIDES), b.roll(SIDES));
        }
    }
    #[test]
    fn single_sided_die_always_shows_one() {
        let mut die = Fair::default();
        assert!((0..100).all(|_| die.roll(1) == 1));
    }
    #[test]
    #[should_panic]
    fn zero_sided_die_is_fatal() {
        Fair::seeded(0).roll(0);
    }
}
