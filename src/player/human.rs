use std::io::{BufRead, Write};

use crate::console::read_line;
use crate::deck::Deck;
use crate::error::GameError;
use crate::hand::Hand;
use crate::result::TurnOutcome;
use crate::table::Table;

use super::{Player, PlayerState};

/// A line typed at the card prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the card at this 0-based index.
    Play(usize),
    /// Leave the game.
    Exit,
}

impl Command {
    /// Token that ends the game.
    pub const EXIT: &'static str = "exit";

    /// Parses a 1-based card number or the exit token.
    ///
    /// Returns `None` for anything else, including numbers outside
    /// `1..=hand_len`.
    #[must_use]
    pub fn parse(line: &str, hand_len: usize) -> Option<Self> {
        let line = line.trim();
        if line == Self::EXIT {
            return Some(Self::Exit);
        }
        if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match line.parse::<usize>() {
            Ok(number) if (1..=hand_len).contains(&number) => Some(Self::Play(number - 1)),
            _ => None,
        }
    }
}

/// The human player, reading moves from `R`.
#[derive(Debug)]
pub struct Human<R> {
    state: PlayerState,
    input: R,
}

impl<R: BufRead> Human<R> {
    /// Name used in announcements and score lines.
    pub const NAME: &'static str = "Player";

    /// Creates a human player holding `hand`.
    pub const fn new(hand: Hand, input: R) -> Self {
        Self {
            state: PlayerState::new(Self::NAME, hand),
            input,
        }
    }

    /// Prompts until a valid command is typed.
    ///
    /// End of input counts as [`Command::Exit`]. Lines that are not valid
    /// UTF-8 are rejected like any other bad choice.
    fn read_command(&mut self, out: &mut dyn Write) -> Result<Command, GameError> {
        let hand_len = self.state.hand.len();
        loop {
            writeln!(out, "Choose a card to play (1-{hand_len}):")?;
            out.flush()?;

            let Some(line) = read_line(&mut self.input)? else {
                return Ok(Command::Exit);
            };
            if let Some(command) = Command::parse(&line, hand_len) {
                return Ok(command);
            }
        }
    }
}

impl<R: BufRead> Player for Human<R> {
    fn state(&self) -> &PlayerState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PlayerState {
        &mut self.state
    }

    fn turn(
        &mut self,
        table: &mut Table,
        deck: &mut Deck,
        out: &mut dyn Write,
    ) -> Result<TurnOutcome, GameError> {
        if !self.state.refill(deck) {
            return Ok(TurnOutcome::InvalidDraw);
        }
        writeln!(out, "Cards in hand: {}", self.state.hand.enumerated())?;

        let index = match self.read_command(out)? {
            Command::Exit => return Ok(TurnOutcome::Exit),
            Command::Play(index) => index,
        };
        let card = self
            .state
            .hand
            .remove_at(index)
            .ok_or(GameError::InvalidState)?;
        Ok(self.state.play(card, table, out)?)
    }
}
