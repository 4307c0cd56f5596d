//! Card types.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits, in deck order.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Hearts, Self::Spades, Self::Clubs];

    /// Returns the symbol used when printing the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
            Self::Clubs => '♣',
        }
    }

    const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '♦' => Some(Self::Diamonds),
            '♥' => Some(Self::Hearts),
            '♠' => Some(Self::Spades),
            '♣' => Some(Self::Clubs),
            _ => None,
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks, in deck order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the printed form of the rank.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Returns whether a card of this rank is worth a point when captured.
    #[must_use]
    pub const fn is_scoring(self) -> bool {
        matches!(
            self,
            Self::Ace | Self::Ten | Self::Jack | Self::Queen | Self::King
        )
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rank| rank.label() == label)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns whether this card can capture a pile topped by `top`.
    ///
    /// A card matches when it shares either the rank or the suit.
    #[must_use]
    pub fn matches(&self, top: &Self) -> bool {
        self.rank == top.rank || self.suit == top.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// Parses the displayed form of a card, such as `10♣` or `Q♥`.
///
/// The game itself never reads cards as text; this is a convenience for
/// setting up known layouts, for example a stacked deck.
///
/// ```
/// use indigo::{Card, Deck, ParseCardError};
///
/// let cards = "A♦ 10♣ Q♥"
///     .split_whitespace()
///     .map(str::parse)
///     .collect::<Result<Vec<Card>, ParseCardError>>()?;
/// let mut deck = Deck::from_cards(cards);
/// assert_eq!(deck.draw(1)?[0].to_string(), "A♦");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let symbol = chars.next_back().ok_or(ParseCardError::Empty)?;
        let suit = Suit::from_symbol(symbol).ok_or(ParseCardError::InvalidSuit)?;
        let rank = Rank::from_label(chars.as_str()).ok_or(ParseCardError::InvalidRank)?;
        Ok(Self::new(rank, suit))
    }
}

/// Writes cards separated by single spaces.
pub(crate) fn join(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
