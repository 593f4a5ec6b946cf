/// A person at the keyboard, speaking for every seat.
///
/// Keeps asking until it gets something usable: read failures and invalid
/// answers are reported and the same question is asked again.
#[derive(Debug, Default)]
pub struct Human<L>(L);

impl<L> Human<L>
where
    L: Lines,
{
    pub fn new(lines: L) -> Self {
        Self(lines)
    }
    pub fn lines(&self) -> &L {
        &self.0
    }
    pub fn into_lines(self) -> L {
        self.0
    }
}

impl<L> Player for Human<L>
where
    L: Lines,
{
    fn name(&mut self, position: Position) -> String {
        let prompt = format!("Enter name for player {}", position + 1);
        loop {
            match self.0.read(&prompt) {
                Err(e) => {
                    log::warn!("failed to read name for P{}: {}", position, e);
                    println!("Could not read player name. Error: {}", e);
                }
                Ok(name) if name.trim().is_empty() => println!("{}", "Name cannot be empty".red()),
                Ok(name) => return name.trim().to_string(),
            }
        }
    }
    fn decide(&mut self, _: &Seat, _: &Turn) -> Decision {
        loop {
            println!();
            match self.0.read("Would you like to [h]old or [r]oll?") {
                Err(e) => {
                    log::warn!("failed to read decision: {}", e);
                    println!("Could not read response. Error: {}", e);
                    println!("Please enter h for hold or r for roll");
                }
                Ok(response) => match Decision::try_from(response.as_str()) {
                    Ok(decision) => return decision,
                    Err(e) => {
                        log::debug!("{}", e);
                        println!(
                            "{}",
                            "Invalid response. Please enter h for hold or r for roll.\n".red()
                        );
                    }
                },
            }
        }
    }
    fn notify(&mut self, event: &Event) {
        match event {
            Event::Hold { .. } => log::debug!("{}", event),
            _ => println!("{}", event),
        }
    }
}


use super::Lines;
use crate::Position;
use crate::gameplay::Decision;
use crate::gameplay::Event;
use crate::gameplay::Player;
use crate::gameplay::Seat;
use crate::gameplay::Turn;
use colored::Colorize;
