//! Players and the rules of a single play.

use std::io::{self, Write};

use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::GameError;
use crate::hand::Hand;
use crate::result::TurnOutcome;
use crate::table::Table;

mod computer;
mod human;

pub use computer::Computer;
pub use human::{Command, Human};

/// Number of cards in a freshly dealt hand.
pub const HAND_SIZE: usize = 6;

/// Something that can take a turn at the table.
pub trait Player {
    /// Returns the player's hand and totals.
    fn state(&self) -> &PlayerState;

    /// Returns the player's hand and totals for modification.
    fn state_mut(&mut self) -> &mut PlayerState;

    /// Plays one card.
    ///
    /// An empty hand is first refilled from `deck`; if the deck cannot supply
    /// a full hand the turn ends with [`TurnOutcome::InvalidDraw`] and nothing
    /// is changed. Prompts and announcements are written to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    fn turn(
        &mut self,
        table: &mut Table,
        deck: &mut Deck,
        out: &mut dyn Write,
    ) -> Result<TurnOutcome, GameError>;
}

/// Hand and running totals of one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    name: &'static str,
    /// Cards in hand.
    pub hand: Hand,
    /// Points scored so far.
    pub score: u32,
    /// Cards captured so far.
    pub captured: Vec<Card>,
}

impl PlayerState {
    /// Creates a player with the given name and starting hand.
    #[must_use]
    pub const fn new(name: &'static str, hand: Hand) -> Self {
        Self {
            name,
            hand,
            score: 0,
            captured: Vec::new(),
        }
    }

    /// Returns the name used in announcements.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns how many cards this player has captured.
    #[must_use]
    pub fn captured_count(&self) -> usize {
        self.captured.len()
    }

    /// Draws a new hand if the current one is empty.
    ///
    /// Returns `false` when the hand is empty and the deck is short.
    pub(crate) fn refill(&mut self, deck: &mut Deck) -> bool {
        if !self.hand.is_empty() {
            return true;
        }
        match deck.draw(HAND_SIZE) {
            Ok(cards) => {
                debug!(player = self.name, remaining = deck.len(), "hand refilled");
                self.hand.add_cards(cards);
                true
            }
            Err(err) => {
                debug!(player = self.name, %err, "hand cannot be refilled");
                false
            }
        }
    }

    /// Places `card` (already taken out of the hand) on the table.
    ///
    /// If it matches the previous top card the whole pile is captured.
    pub(crate) fn play(
        &mut self,
        card: Card,
        table: &mut Table,
        out: &mut dyn Write,
    ) -> io::Result<TurnOutcome> {
        let wins = table.top().is_some_and(|top| card.matches(top));
        table.push(card);
        if !wins {
            return Ok(TurnOutcome::Continue);
        }

        let pile = table.take_all();
        let captured = pile.len();
        let points = self.collect(pile);
        writeln!(out, "{} wins cards", self.name)?;
        Ok(TurnOutcome::Won { points, captured })
    }

    /// Adds `cards` to the captured pile and scores them.
    ///
    /// Returns the points scored.
    pub(crate) fn collect(&mut self, cards: Vec<Card>) -> u32 {
        let points = crate::scoring::points(&cards);
        debug!(
            player = self.name,
            cards = cards.len(),
            points,
            "cards captured"
        );
        self.score += points;
        self.captured.extend(cards);
        points
    }
}
