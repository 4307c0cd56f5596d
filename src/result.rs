//! Turn outcomes and final game results.

use crate::game::{EndReason, Seat};

/// What happened during a single turn.
///
/// None of these are errors; the engine inspects them to drive the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A card was played onto the table.
    Continue,
    /// The played card captured the table.
    Won {
        /// Points scored by the capture.
        points: u32,
        /// Number of cards captured, including the played card.
        captured: usize,
    },
    /// The human asked to leave the game.
    Exit,
    /// The hand was empty and the deck could not refill it.
    InvalidDraw,
}

/// Final totals once a game has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// Why the game ended.
    pub reason: EndReason,
    /// The human's score.
    pub player_score: u32,
    /// The computer's score.
    pub computer_score: u32,
    /// Cards captured by the human.
    pub player_cards: usize,
    /// Cards captured by the computer.
    pub computer_cards: usize,
    /// Who received the end-of-game bonus (`None` if the human quit).
    pub bonus: Option<Seat>,
}
