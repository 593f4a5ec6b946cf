/// Informational messages the engine emits after every transition.
/// Carries names rather than positions so it renders on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A player took a seat before the game.
    Seated { position: Position, name: String },
    /// A player's turn begins.
    TurnStart { position: Position, name: String },
    /// A successful roll and where it leaves the turn.
    Roll {
        name: String,
        pips: Pips,
        total: Score,
        potential: Score,
    },
    /// A bust ended the turn with nothing.
    Bust { name: String },
    /// A hold ended the turn with its total intact.
    Hold { name: String, total: Score },
    /// Banked score after a completed turn.
    Score { name: String, score: Score },
    /// The acting player crossed the threshold.
    Victory { name: String, score: Score },
}

impl Event {
    pub fn name(&self) -> &str {
        match self {
            Event::Seated { name, .. }
            | Event::TurnStart { name, .. }
            | Event::Roll { name, .. }
            | Event::Bust { name }
            | Event::Hold { name, .. }
            | Event::Score { name, .. }
            | Event::Victory { name, .. } => name,
        }
    }
    pub fn is_terminal(&self) -> bool {
        matches!(self, Event::Victory { .. })
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::Seated { position, name } => {
                write!(f, "Player {} name is {}.\n", position + 1, name.bold())
            }
            Event::TurnStart { name, .. } => {
                write!(f, "{}\n{}'s turn", "=".repeat(57), name.bold())
            }
            Event::Roll {
                name,
                pips,
                total,
                potential,
            } => write!(
                f,
                "{} rolled a {}, turn total of {}, potential score of {}",
                name,
                pips.to_string().green(),
                total,
                potential
            ),
            Event::Bust { name } => {
                write!(f, "{} rolled a {} and busted", name, BUST.to_string().red())
            }
            Event::Hold { name, total } => {
                write!(f, "{} holds with a turn total of {}", name, total)
            }
            Event::Score { name, score } => {
                write!(f, "{}'s current score is {}\n", name, score.to_string().yellow())
            }
            Event::Victory { name, score } => write!(
                f,
                "{}",
                format!("{} wins with a score of {}.", name, score).green().bold()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(event: Event) -> String {
        colored::control::set_override(false);
        event.to_string()
    }

    #[test]
    fn renders_roll() {
        let event = Event::Roll {
            name: "Ada".into(),
            pips: 5,
            total: 8,
            potential: 20,
        };
        assert_eq!(
            plain(event),
            "Ada rolled a 5, turn total of 8, potential score of 20"
        );
    }
    #[test]
    fn renders_bust() {
        let event = Event::Bust { name: "Ada".into() };
        assert_eq!(plain(event), "Ada rolled a 1 and busted");
    }
    #[test]
    fn renders_turn_start_with_separator() {
        let event = Event::TurnStart {
            position: 1,
            name: "Bob".into(),
        };
        let text = plain(event);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("=".repeat(57).as_str()));
        assert_eq!(lines.next(), Some("Bob's turn"));
    }
    #[test]
    fn renders_seating_one_based() {
        let event = Event::Seated {
            position: 0,
            name: "Ada".into(),
        };
        assert_eq!(plain(event), "Player 1 name is Ada.\n");
    }
    #[test]
    fn renders_score_and_victory() {
        let score = Event::Score {
            name: "Ada".into(),
            score: 99,
        };
        let victory = Event::Victory {
            name: "Ada".into(),
            score: 100,
        };
        assert_eq!(plain(score), "Ada's current score is 99\n");
        assert!(victory.is_terminal());
        assert_eq!(victory.name(), "Ada");
        assert_eq!(plain(victory), "Ada wins with a score of 100.");
    }
}

use crate::BUST;
use crate::Pips;
use crate::Position;
use crate::Score;
use colored::Colorize;
