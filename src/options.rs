//! Game configuration options.

use crate::game::Seat;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use indigo::{GameOptions, Seat};
///
/// let options = GameOptions::default()
///     .with_first(Seat::Computer)
///     .with_show_computer_hand(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Who plays first. Also wins the end-of-game bonus on a tie.
    pub first: Seat,
    /// Whether the computer prints its hand before each play.
    pub show_computer_hand: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            first: Seat::Player,
            show_computer_hand: true,
        }
    }
}

impl GameOptions {
    /// Sets who plays first.
    ///
    /// # Example
    ///
    /// ```
    /// use indigo::{GameOptions, Seat};
    ///
    /// let options = GameOptions::default().with_first(Seat::Computer);
    /// assert_eq!(options.first, Seat::Computer);
    /// ```
    #[must_use]
    pub const fn with_first(mut self, first: Seat) -> Self {
        self.first = first;
        self
    }

    /// Sets whether the computer prints its hand.
    ///
    /// # Example
    ///
    /// ```
    /// use indigo::GameOptions;
    ///
    /// let options = GameOptions::default().with_show_computer_hand(false);
    /// assert!(!options.show_computer_hand);
    /// ```
    #[must_use]
    pub const fn with_show_computer_hand(mut self, show: bool) -> Self {
        self.show_computer_hand = show;
        self
    }
}
