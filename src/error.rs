//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The requested count is not a number in `1..=52`.
    #[error("Invalid number of cards.")]
    InvalidCount,
    /// The deck holds fewer cards than requested.
    #[error("The remaining cards are insufficient to meet the request.")]
    InsufficientCards,
}

/// Errors that can occur when parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input was empty.
    #[error("empty card")]
    Empty,
    /// Rank was not one of `A 2-10 J Q K`.
    #[error("invalid rank")]
    InvalidRank,
    /// Suit was not one of the four suit symbols.
    #[error("invalid suit")]
    InvalidSuit,
}

/// Errors that can stop a game.
#[derive(Debug, Error)]
pub enum GameError {
    /// Dealing failed.
    #[error("deal failed: {0}")]
    Draw(#[from] DrawError),
    /// Reading input or writing output failed.
    #[error("console i/o failed")]
    Io(#[from] std::io::Error),
    /// The game has already been played.
    #[error("invalid game state for this action")]
    InvalidState,
}
