/// A named player and their banked score.
///
/// Scores only change between turns, and only upward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    name: String,
    score: Score,
}

impl Seat {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn score(&self) -> Score {
        self.score
    }
    /// Score this seat would have after banking `total`.
    pub fn potential(&self, total: Score) -> Score {
        self.score + total
    }
    pub fn bank(&mut self, total: Score) {
        self.score += total;
    }
    pub fn reset(&mut self) {
        self.score = 0;
    }
    pub fn has_won(&self) -> bool {
        self.score >= WIN
    }
}

impl From<String> for Seat {
    fn from(name: String) -> Self {
        assert!(!name.trim().is_empty(), "seat needs a name");
        Self { name, score: 0 }
    }
}

impl From<&str> for Seat {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}


use crate::Score;
use crate::WIN;
