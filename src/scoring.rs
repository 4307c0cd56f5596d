//! Point counting and the end-of-game bonus.

use crate::card::Card;
use crate::game::Seat;

/// Extra points for the player holding the most captured cards at the end.
pub const FINAL_BONUS: u32 = 3;

/// Counts the scoring cards (A, 10, J, Q, K) in `cards`.
#[must_use]
pub fn points(cards: &[Card]) -> u32 {
    cards.iter().filter(|card| card.rank.is_scoring()).count() as u32
}

/// Returns who receives [`FINAL_BONUS`].
///
/// Strictly more captured cards wins; a tie goes to whoever moved first.
#[must_use]
pub fn bonus_recipient(first: Seat, player_cards: usize, computer_cards: usize) -> Seat {
    match player_cards.cmp(&computer_cards) {
        core::cmp::Ordering::Greater => Seat::Player,
        core::cmp::Ordering::Less => Seat::Computer,
        core::cmp::Ordering::Equal => first,
    }
}
