//! How the computer picks a card.
//!
//! The rules are tried in order and the first one that applies decides:
//!
//! 1. A single card in hand is played.
//! 2. With a top card and exactly one matching card, that card is played.
//! 3. With an empty table, a card is picked from the whole hand.
//! 4. With a top card but no matching card, a card is picked from the whole hand.
//! 5. With several matching cards, a card is picked from the matching cards.
//!
//! "Picked" means: uniformly among the cards that share a suit with another
//! card of the set, else among those sharing a rank, else among the whole set.

use core::hash::Hash;
use std::collections::HashMap;

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::trace;

use crate::card::Card;

/// Which rule produced a [`Decision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Only one card was in hand.
    SingleCard,
    /// Exactly one card could capture the table.
    SingleCandidate,
    /// The table was empty.
    EmptyTable,
    /// No card could capture the table.
    NoCandidates,
    /// Several cards could capture the table.
    MultipleCandidates,
}

/// Which subset a random pick was made from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// No random pick was needed.
    Forced,
    /// Cards sharing a suit with another card of the set.
    SameSuit,
    /// Cards sharing a rank with another card of the set.
    SameRank,
    /// The whole set.
    Any,
}

/// A card chosen by [`decide`], with the reasoning behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// The card to play.
    pub card: Card,
    /// The rule that applied.
    pub rule: Rule,
    /// The subset the card was picked from.
    pub tier: Tier,
}

/// Chooses the card to play from `hand` given the table's `top` card.
///
/// Returns `None` only when the hand is empty.
pub fn decide<R: Rng + ?Sized>(
    hand: &[Card],
    top: Option<&Card>,
    rng: &mut R,
) -> Option<Decision> {
    if let [card] = hand {
        return Some(forced(*card, Rule::SingleCard));
    }

    let decision = match top {
        None => pick(hand, Rule::EmptyTable, rng),
        Some(top) => {
            let candidates: Vec<Card> = hand
                .iter()
                .filter(|card| card.matches(top))
                .copied()
                .collect();
            match candidates.as_slice() {
                [card] => Some(forced(*card, Rule::SingleCandidate)),
                [] => pick(hand, Rule::NoCandidates, rng),
                _ => pick(&candidates, Rule::MultipleCandidates, rng),
            }
        }
    };

    if let Some(decision) = &decision {
        trace!(
            card = %decision.card,
            rule = ?decision.rule,
            tier = ?decision.tier,
            "computer decision"
        );
    }
    decision
}

/// Convenience wrapper around [`decide`] returning only the card.
pub fn choose_card<R: Rng + ?Sized>(
    hand: &[Card],
    top: Option<&Card>,
    rng: &mut R,
) -> Option<Card> {
    decide(hand, top, rng).map(|decision| decision.card)
}

const fn forced(card: Card, rule: Rule) -> Decision {
    Decision {
        card,
        rule,
        tier: Tier::Forced,
    }
}

fn pick<R: Rng + ?Sized>(cards: &[Card], rule: Rule, rng: &mut R) -> Option<Decision> {
    let same_suit = sharing(cards, |card| card.suit);
    let (pool, tier) = if same_suit.is_empty() {
        let same_rank = sharing(cards, |card| card.rank);
        if same_rank.is_empty() {
            (cards.to_vec(), Tier::Any)
        } else {
            (same_rank, Tier::SameRank)
        }
    } else {
        (same_suit, Tier::SameSuit)
    };

    pool.choose(rng).map(|&card| Decision { card, rule, tier })
}

/// Returns the cards whose `key` occurs at least twice in `cards`, in their
/// original order.
fn sharing<K: Eq + Hash>(cards: &[Card], key: impl Fn(&Card) -> K) -> Vec<Card> {
    let mut counts: HashMap<K, usize> = HashMap::new();
    for card in cards {
        *counts.entry(key(card)).or_default() += 1;
    }
    cards
        .iter()
        .filter(|card| counts.get(&key(*card)).is_some_and(|&count| count > 1))
        .copied()
        .collect()
}
