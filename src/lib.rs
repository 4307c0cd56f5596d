//! The Indigo card game: a human against the computer, played on the console.
//!
//! Four cards start on the table and each player holds six. Players take
//! turns placing a card on the table; a card that matches the top card by
//! rank or suit captures the whole pile. Aces, tens and face cards are worth
//! a point each, and whoever captured more cards gets three extra points at
//! the end.
//!
//! The crate provides a [`Game`] type that runs the whole game, the
//! [`strategy`] the computer plays by, and the [`Deck`] with its inspection
//! [`menu`].
//!
//! # Example
//!
//! ```no_run
//! use std::io;
//!
//! use indigo::{Game, GameOptions, Seat};
//!
//! let options = GameOptions::default().with_first(Seat::Computer);
//! let stdin = io::stdin();
//! let mut game = Game::new(options, 42, stdin.lock(), io::stdout())?;
//! game.play()?;
//! # Ok::<(), indigo::GameError>(())
//! ```

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod menu;
pub mod options;
pub mod player;
pub mod result;
pub mod scoring;
pub mod strategy;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use console::prompt_first;
pub use deck::Deck;
pub use error::{DrawError, GameError, ParseCardError};
pub use game::{EndReason, Game, GameState, Seat};
pub use hand::Hand;
pub use options::GameOptions;
pub use player::{Command, Computer, HAND_SIZE, Human, Player, PlayerState};
pub use result::{GameResult, TurnOutcome};
pub use table::Table;
