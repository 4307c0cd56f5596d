//! The shared pile of cards in play.

use core::fmt;

use crate::card::Card;
use crate::scoring;

/// Cards on the table. The last card is the top card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    cards: Vec<Card>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a table holding `cards`, bottom first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Places a card on top of the pile.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Empties the pile and returns everything that was on it.
    pub fn take_all(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }

    /// Returns the point value of the pile.
    #[must_use]
    pub fn points(&self) -> u32 {
        scoring::points(&self.cards)
    }

    /// Returns the cards on the table, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards on the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Renders the status line printed after every turn.
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.top() {
            Some(top) => write!(
                f,
                "{} cards on the table, and the top card is {top}",
                self.cards.len()
            ),
            None => f.write_str("No cards on the table"),
        }
    }
}
