//! Player hands.

use core::fmt;

use crate::card::Card;

/// A player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards`.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds freshly drawn cards to the end of the hand.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Removes and returns the card at `index` (0-based).
    pub fn remove_at(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Removes the first card equal to `card`.
    ///
    /// Returns whether a card was removed.
    pub fn remove(&mut self, card: Card) -> bool {
        let Some(index) = self.cards.iter().position(|held| *held == card) else {
            return false;
        };
        self.cards.remove(index);
        true
    }

    /// Returns the card at `index` (0-based).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns a view that renders the hand as `1)A♦ 2)7♣ ...`.
    #[must_use]
    pub const fn enumerated(&self) -> Enumerated<'_> {
        Enumerated(self)
    }
}

/// Numbered rendering of a [`Hand`], as shown to the human player.
#[derive(Debug, Clone, Copy)]
pub struct Enumerated<'a>(&'a Hand);

impl fmt::Display for Enumerated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.0.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}){card}", index + 1)?;
        }
        Ok(())
    }
}
