//! Card, deck, hand and table tests.

mod common;

use std::collections::HashSet;

use common::{card, cards};
use indigo::scoring::{self, FINAL_BONUS};
use indigo::{Card, DECK_SIZE, Deck, DrawError, Hand, ParseCardError, Rank, Seat, Suit, Table};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn card_display_and_parse() {
    let ten = Card::new(Rank::Ten, Suit::Clubs);
    assert_eq!(ten.to_string(), "10♣");
    assert_eq!("10♣".parse::<Card>().unwrap(), ten);
    assert_eq!(card("A♦"), Card::new(Rank::Ace, Suit::Diamonds));
    assert_eq!(card("Q♥"), Card::new(Rank::Queen, Suit::Hearts));
    assert_eq!(card(" 7♠ "), Card::new(Rank::Seven, Suit::Spades));

    assert_eq!("".parse::<Card>().unwrap_err(), ParseCardError::Empty);
    assert_eq!("1♣".parse::<Card>().unwrap_err(), ParseCardError::InvalidRank);
    assert_eq!("♣".parse::<Card>().unwrap_err(), ParseCardError::InvalidRank);
    assert_eq!("10C".parse::<Card>().unwrap_err(), ParseCardError::InvalidSuit);
}

#[test]
fn card_matching_and_scoring_ranks() {
    let top = card("5♠");
    assert!(card("5♦").matches(&top));
    assert!(card("K♠").matches(&top));
    assert!(!card("K♥").matches(&top));

    let scoring: Vec<Rank> = Rank::ALL.into_iter().filter(|r| r.is_scoring()).collect();
    assert_eq!(
        scoring,
        [Rank::Ace, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King]
    );
}

#[test]
fn reset_builds_ordered_full_deck() {
    let mut deck = Deck::from_cards(cards("2♣ 3♣"));
    deck.reset();

    assert_eq!(deck.len(), DECK_SIZE);
    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    assert_eq!(&deck.cards()[..5], cards("A♦ A♥ A♠ A♣ 2♦").as_slice());
    assert_eq!(deck.cards().last(), Some(&card("K♣")));
}

#[test]
fn draw_takes_cards_from_the_front() {
    let mut deck = Deck::new();
    let drawn = deck.draw_input("4").unwrap();

    assert_eq!(drawn, cards("A♦ A♥ A♠ A♣"));
    assert_eq!(deck.len(), 48);
    assert_eq!(deck.cards().first(), Some(&card("2♦")));
}

#[test]
fn count_bounds_are_checked_before_deck_size() {
    let mut deck = Deck::new();
    deck.draw(4).unwrap();
    let before = deck.clone();

    assert_eq!(deck.draw_input("53"), Err(DrawError::InvalidCount));
    assert_eq!(deck.draw_input("49"), Err(DrawError::InsufficientCards));
    assert_eq!(deck.draw(0), Err(DrawError::InvalidCount));
    assert_eq!(deck.draw(60), Err(DrawError::InvalidCount));
    assert_eq!(deck, before);

    assert_eq!(deck.draw(48).unwrap().len(), 48);
    assert!(deck.is_empty());
    assert_eq!(deck.draw(1), Err(DrawError::InsufficientCards));
}

#[test]
fn draw_input_rejects_non_numbers() {
    let mut deck = Deck::new();
    for input in ["", "abc", "-1", "+4", "4.0", "4 4", "99999999999999999999999"] {
        assert_eq!(deck.draw_input(input), Err(DrawError::InvalidCount), "{input:?}");
    }
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.draw_input(" 2\n").unwrap().len(), 2);
}

#[test]
fn draw_error_messages() {
    assert_eq!(DrawError::InvalidCount.to_string(), "Invalid number of cards.");
    assert_eq!(
        DrawError::InsufficientCards.to_string(),
        "The remaining cards are insufficient to meet the request."
    );
}

#[test]
fn shuffle_is_a_seeded_permutation() {
    let mut first = Deck::new();
    let mut second = Deck::new();
    first.shuffle(&mut ChaCha8Rng::seed_from_u64(11));
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(11));

    assert_eq!(first, second);
    assert_ne!(first, Deck::new());

    let shuffled: HashSet<Card> = first.cards().iter().copied().collect();
    let ordered: HashSet<Card> = Deck::new().cards().iter().copied().collect();
    assert_eq!(shuffled, ordered);
}

#[test]
fn hand_removal_and_numbering() {
    let mut hand = Hand::from_cards(cards("A♦ 7♣ 7♣ Q♥"));
    assert_eq!(hand.enumerated().to_string(), "1)A♦ 2)7♣ 3)7♣ 4)Q♥");

    assert!(hand.remove(card("7♣")));
    assert_eq!(hand.cards(), cards("A♦ 7♣ Q♥").as_slice());
    assert!(!hand.remove(card("K♠")));

    assert_eq!(hand.remove_at(2), Some(card("Q♥")));
    assert_eq!(hand.remove_at(5), None);
    assert_eq!(hand.len(), 2);

    hand.add_cards(cards("2♥ 3♥"));
    assert_eq!(hand.get(3), Some(card("3♥")));
    assert_eq!(Hand::new().enumerated().to_string(), "");
}

#[test]
fn table_status_line() {
    let mut table = Table::new();
    assert_eq!(table.to_string(), "No cards on the table");
    assert_eq!(table.top(), None);

    table.push(card("J♦"));
    table.push(card("4♥"));
    assert_eq!(
        table.to_string(),
        "2 cards on the table, and the top card is 4♥"
    );
    assert_eq!(table.points(), 1);

    let taken = table.take_all();
    assert_eq!(taken, cards("J♦ 4♥"));
    assert!(table.is_empty());
}

#[test]
fn point_values() {
    assert_eq!(scoring::points(&cards("A♦ 10♣ J♥ Q♠ K♦ 2♣ 9♥")), 5);
    assert_eq!(scoring::points(&[]), 0);
    assert_eq!(scoring::points(Deck::new().cards()), 20);
}

#[test]
fn bonus_goes_to_more_cards_then_first_mover() {
    assert_eq!(FINAL_BONUS, 3);
    assert_eq!(scoring::bonus_recipient(Seat::Player, 27, 25), Seat::Player);
    assert_eq!(scoring::bonus_recipient(Seat::Player, 20, 32), Seat::Computer);
    assert_eq!(scoring::bonus_recipient(Seat::Computer, 26, 26), Seat::Computer);
    assert_eq!(scoring::bonus_recipient(Seat::Player, 26, 26), Seat::Player);
}
