/// Drives a game of Pig from seating to victory.
///
/// Owns the seats, the die and the player collaborator. Turns rotate
/// round-robin from position 0, and the win check runs for the acting seat
/// immediately after each turn is banked, so later seats in the same round
/// never get to act once someone has won.
#[derive(Debug)]
pub struct Engine<P, D> {
    seats: Vec<Seat>,
    player: P,
    dice: D,
    ticker: Position,
}

impl<P, D> Engine<P, D>
where
    P: Player,
    D: Dice,
{
    pub fn new(player: P, dice: D) -> Self {
        Self {
            seats: Vec::new(),
            player,
            dice,
            ticker: 0,
        }
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn player(&self) -> &P {
        &self.player
    }
    pub fn dice(&self) -> &D {
        &self.dice
    }
    /// Seat a player directly, bypassing the name prompt.
    pub fn sit(&mut self, name: impl Into<String>) {
        let name: String = name.into();
        let seat = Seat::from(name);
        log::debug!("[engine] seating {} at P{}", seat.name(), self.seats.len());
        self.seats.push(seat);
    }
    /// Ask the player for `count` names and seat them in order.
    pub fn seat(&mut self, count: usize) {
        for _ in 0..count {
            let position = self.seats.len();
            let name = self.player.name(position);
            self.sit(name.clone());
            self.player.notify(&Event::Seated { position, name });
        }
    }
    /// Play a full game from zero and return the winner's position.
    pub fn play(&mut self) -> Position {
        assert!(!self.seats.is_empty(), "cannot play without seats");
        log::info!("[engine] starting game with {} seats", self.seats.len());
        self.seats.iter_mut().for_each(Seat::reset);
        self.ticker = 0;
        self.contest()
    }
    /// Play one turn for the seat at `position`, returning the total it
    /// banks. The seat's score itself is not touched here.
    pub fn take_turn(&mut self, position: Position) -> Score {
        let ref mut turn = Turn::new(position);
        let name = self.seats[position].name().to_string();
        self.player.notify(&Event::TurnStart {
            position,
            name: name.clone(),
        });
        while !turn.is_over() {
            let pips = self.dice.roll(SIDES);
            log::debug!("[engine] P{} rolled {}", position, pips);
            match turn.roll(pips) {
                Phase::Busted => self.player.notify(&Event::Bust { name: name.clone() }),
                Phase::Rolling => {
                    self.player.notify(&Event::Roll {
                        name: name.clone(),
                        pips,
                        total: turn.total(),
                        potential: self.seats[position].potential(turn.total()),
                    });
                    self.ask(turn);
                }
                Phase::Held => unreachable!("rolling never holds"),
            }
        }
        turn.banked()
    }
}

impl<P, D> Engine<P, D>
where
    P: Player,
    D: Dice,
{
    fn contest(&mut self) -> Position {
        loop {
            let position = self.ticker;
            let total = self.take_turn(position);
            let seat = &mut self.seats[position];
            seat.bank(total);
            let name = seat.name().to_string();
            let score = seat.score();
            let won = seat.has_won();
            self.player.notify(&Event::Score {
                name: name.clone(),
                score,
            });
            if won {
                log::info!("[engine] P{} wins with {}", position, score);
                self.player.notify(&Event::Victory { name, score });
                return position;
            }
            self.ticker = (position + 1) % self.seats.len();
        }
    }
    fn ask(&mut self, turn: &mut Turn) {
        let decision = self.player.decide(&self.seats[turn.position()], turn);
        log::debug!("[engine] P{} chose {}", turn.position(), decision);
        if decision == Decision::Hold {
            turn.hold();
            self.player.notify(&Event::Hold {
                name: self.seats[turn.position()].name().to_string(),
                total: turn.total(),
            });
        }
    }
}


use super::Decision;
use super::Event;
use super::Phase;
use super::Player;
use super::Seat;
use super::Turn;
use crate::Position;
use crate::SIDES;
use crate::Score;
use crate::dice::Dice;
