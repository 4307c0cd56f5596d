use std::io::Write;

use rand::Rng;

use crate::card::join;
use crate::deck::Deck;
use crate::error::GameError;
use crate::hand::Hand;
use crate::result::TurnOutcome;
use crate::strategy;
use crate::table::Table;

use super::{Player, PlayerState};

/// The computer player. Card choice is made by [`strategy::decide`].
#[derive(Debug)]
pub struct Computer<G> {
    state: PlayerState,
    rng: G,
    show_hand: bool,
}

impl<G: Rng> Computer<G> {
    /// Name used in announcements and score lines.
    pub const NAME: &'static str = "Computer";

    /// Creates a computer player holding `hand`, breaking ties with `rng`.
    pub const fn new(hand: Hand, rng: G) -> Self {
        Self {
            state: PlayerState::new(Self::NAME, hand),
            rng,
            show_hand: true,
        }
    }

    /// Sets whether the hand is printed before each play.
    #[must_use]
    pub const fn with_show_hand(mut self, show: bool) -> Self {
        self.show_hand = show;
        self
    }
}

impl<G: Rng> Player for Computer<G> {
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
        if self.show_hand {
            writeln!(out, "{}", join(self.state.hand.cards()))?;
        }

        let card = strategy::choose_card(self.state.hand.cards(), table.top(), &mut self.rng)
            .ok_or(GameError::InvalidState)?;
        if !self.state.hand.remove(card) {
            return Err(GameError::InvalidState);
        }
        writeln!(out, "{} plays {card}", self.state.name())?;

        Ok(self.state.play(card, table, out)?)
    }
}
