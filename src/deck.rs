//! The draw pile.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DrawError;

/// A single 52-card deck.
///
/// Cards are drawn from the front, so the deck order is the order in which
/// cards come out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck in reset order.
    #[must_use]
    pub fn new() -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
        };
        deck.reset();
        deck
    }

    /// Creates a deck holding exactly `cards`, front first.
    ///
    /// Useful for arranging a known game.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Rebuilds the full deck, rank by rank, discarding the current contents.
    pub fn reset(&mut self) {
        self.cards.clear();
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                self.cards.push(Card::new(rank, suit));
            }
        }
        debug!(cards = self.cards.len(), "deck reset");
    }

    /// Randomly permutes the deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        debug!(cards = self.cards.len(), "deck shuffled");
    }

    /// Removes `count` cards from the front of the deck and returns them in
    /// deck order.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InvalidCount`] if `count` is outside `1..=52`, and
    /// [`DrawError::InsufficientCards`] if the deck holds fewer than `count`
    /// cards. The deck is left untouched on error.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, DrawError> {
        if !(1..=DECK_SIZE).contains(&count) {
            return Err(DrawError::InvalidCount);
        }
        if count > self.cards.len() {
            return Err(DrawError::InsufficientCards);
        }
        Ok(self.cards.drain(..count).collect())
    }

    /// Parses a typed count and draws that many cards.
    ///
    /// Only plain ASCII digits are accepted; signs, spaces inside the number
    /// and anything else yield [`DrawError::InvalidCount`].
    ///
    /// # Errors
    ///
    /// Same as [`Deck::draw`].
    pub fn draw_input(&mut self, input: &str) -> Result<Vec<Card>, DrawError> {
        let input = input.trim();
        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DrawError::InvalidCount);
        }
        // Overflowing digit strings are out of range anyway.
        let count = input.parse().map_err(|_| DrawError::InvalidCount)?;
        self.draw(count)
    }

    /// Returns the remaining cards, front first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
