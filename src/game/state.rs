//! Game state types.

/// One of the two places at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The human player.
    Player,
    /// The computer player.
    Computer,
}

impl Seat {
    /// Returns the other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Computer,
            Self::Computer => Self::Player,
        }
    }
}

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Cards are dealt and play has not started.
    Dealt,
    /// Players are taking turns.
    InProgress,
    /// The game has ended.
    Over(EndReason),
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The human typed `exit`. No final scoring was applied.
    Exit,
    /// Every card has been played and the game was scored.
    DeckExhausted,
}
