//! Computer card choice tests.

mod common;

use std::collections::HashSet;

use common::{card, cards};
use indigo::Card;
use indigo::strategy::{Rule, Tier, choose_card, decide};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Collects every card `decide` picks over a range of seeds.
fn picks(hand: &[Card], top: Option<&Card>) -> HashSet<Card> {
    (0..200)
        .filter_map(|seed| choose_card(hand, top, &mut ChaCha8Rng::seed_from_u64(seed)))
        .collect()
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(3)
}

#[test]
fn single_card_is_always_played() {
    let hand = cards("7♦");
    for top in [None, Some(card("7♠")), Some(card("2♣"))] {
        let decision = decide(&hand, top.as_ref(), &mut rng()).unwrap();
        assert_eq!(decision.card, card("7♦"));
        assert_eq!(decision.rule, Rule::SingleCard);
        assert_eq!(decision.tier, Tier::Forced);
    }
}

#[test]
fn empty_hand_has_no_decision() {
    assert_eq!(decide(&[], Some(&card("5♠")), &mut rng()), None);
    assert_eq!(choose_card(&[], None, &mut rng()), None);
}

#[test]
fn single_matching_card_is_played() {
    let hand = cards("2♥ 3♣ 4♠ 4♣");
    let decision = decide(&hand, Some(&card("9♥")), &mut rng()).unwrap();
    assert_eq!(decision.card, card("2♥"));
    assert_eq!(decision.rule, Rule::SingleCandidate);
}

#[test]
fn empty_table_prefers_shared_suits() {
    let hand = cards("2♥ 7♥ 3♣ 3♠");
    let decision = decide(&hand, None, &mut rng()).unwrap();
    assert_eq!(decision.rule, Rule::EmptyTable);
    assert_eq!(decision.tier, Tier::SameSuit);
    assert_eq!(picks(&hand, None), cards("2♥ 7♥").into_iter().collect());
}

#[test]
fn empty_table_falls_back_to_shared_ranks() {
    let hand = cards("4♥ 4♣ 8♠ J♦");
    let decision = decide(&hand, None, &mut rng()).unwrap();
    assert_eq!(decision.tier, Tier::SameRank);
    assert_eq!(picks(&hand, None), cards("4♥ 4♣").into_iter().collect());
}

#[test]
fn empty_table_without_groups_picks_from_whole_hand() {
    let hand = cards("4♥ 5♣ 8♠ J♦");
    let decision = decide(&hand, None, &mut rng()).unwrap();
    assert_eq!(decision.tier, Tier::Any);
    assert_eq!(picks(&hand, None), hand.iter().copied().collect());
}

#[test]
fn no_matching_card_uses_whole_hand_tiers() {
    let top = card("2♦");
    let hand = cards("3♥ 9♥ 5♣ 7♠");
    let decision = decide(&hand, Some(&top), &mut rng()).unwrap();
    assert_eq!(decision.rule, Rule::NoCandidates);
    assert_eq!(decision.tier, Tier::SameSuit);
    assert_eq!(picks(&hand, Some(&top)), cards("3♥ 9♥").into_iter().collect());

    let hand = cards("3♥ 5♣ 7♠");
    let decision = decide(&hand, Some(&top), &mut rng()).unwrap();
    assert_eq!(decision.rule, Rule::NoCandidates);
    assert_eq!(decision.tier, Tier::Any);
}

#[test]
fn several_rank_matches_never_play_the_outsider() {
    let top = card("5♠");
    let hand = cards("5♦ 5♣ K♥");
    let decision = decide(&hand, Some(&top), &mut rng()).unwrap();
    assert_eq!(decision.rule, Rule::MultipleCandidates);
    assert_eq!(decision.tier, Tier::SameRank);
    assert_eq!(picks(&hand, Some(&top)), cards("5♦ 5♣").into_iter().collect());
}

#[test]
fn several_matches_prefer_shared_suit_among_candidates() {
    let top = card("Q♠");
    let hand = cards("3♠ Q♥ 8♠ Q♦ 2♥");
    let decision = decide(&hand, Some(&top), &mut rng()).unwrap();
    assert_eq!(decision.rule, Rule::MultipleCandidates);
    assert_eq!(decision.tier, Tier::SameSuit);
    assert_eq!(picks(&hand, Some(&top)), cards("3♠ 8♠").into_iter().collect());
}

#[test]
fn several_unrelated_matches_pick_any_candidate() {
    let top = card("5♠");
    // 2♥ shares a suit with 9♥ in hand but is not a candidate.
    let hand = cards("5♦ 9♠ 2♥ 9♥");
    let decision = decide(&hand, Some(&top), &mut rng()).unwrap();
    assert_eq!(decision.rule, Rule::MultipleCandidates);
    assert_eq!(decision.tier, Tier::Any);
    assert_eq!(picks(&hand, Some(&top)), cards("5♦ 9♠").into_iter().collect());
}
