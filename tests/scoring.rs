//! Hand scoring and Hi-Lo count tests.

#![allow(clippy::float_cmp)]

use bjledger::{Card, CountIndex, count_cards, is_bust, is_soft, score};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn cards(labels: &[&str]) -> Vec<Card> {
    labels.iter().map(|label| label.parse().unwrap()).collect()
}

fn random_cards(rng: &mut ChaCha8Rng, len: usize) -> Vec<Card> {
    (0..len)
        .map(|_| Card::ALL[rng.random_range(0..Card::ALL.len())])
        .collect()
}

#[test]
fn score_literal_cases() {
    assert_eq!(score(&[]), 0);
    assert_eq!(score(&cards(&["A"])), 11);
    assert_eq!(score(&cards(&["A", "A"])), 12);
    assert_eq!(score(&cards(&["A", "K"])), 21);
    assert_eq!(score(&cards(&["A", "A", "9"])), 21);
    assert_eq!(score(&cards(&["K", "Q", "2"])), 22);
    assert_eq!(score(&cards(&["A", "6", "9"])), 16);
    assert_eq!(score(&cards(&["A", "A", "A", "A"])), 14);
    assert_eq!(score(&cards(&["10", "J", "Q", "K"])), 40);
}

#[test]
fn soft_and_bust_flags() {
    assert!(is_soft(&cards(&["A", "6"])));
    assert!(!is_soft(&cards(&["A", "6", "9"])));
    assert!(!is_soft(&cards(&["K", "7"])));
    assert!(is_bust(&cards(&["K", "Q", "2"])));
    assert!(!is_bust(&cards(&["A", "A", "9"])));
}

#[test]
fn score_downgrades_only_the_aces_needed() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..500 {
        let len = rng.random_range(0..8);
        let mut hand = random_cards(&mut rng, len);

        let aces = hand.iter().filter(|card| card.is_ace()).count() as u32;
        let hard: u32 = hand
            .iter()
            .map(|card| if card.is_ace() { 1 } else { card.value() })
            .sum();
        let expected = if aces > 0 && hard + 10 <= 21 {
            hard + 10
        } else {
            hard
        };
        assert_eq!(score(&hand), expected, "hand {hand:?}");

        hand.sort_by_key(|card| !card.is_ace());
        assert_eq!(score(&hand), expected, "aces first {hand:?}");
        hand.sort_by_key(|card| card.is_ace());
        assert_eq!(score(&hand), expected, "aces last {hand:?}");
    }
}

#[test]
fn card_labels_parse_and_display() {
    for card in Card::ALL {
        assert_eq!(card.to_string().parse::<Card>(), Ok(card));
    }
    assert_eq!("k".parse::<Card>(), Ok(Card::King));
    assert_eq!(" 10 ".parse::<Card>(), Ok(Card::Ten));
    assert!("1".parse::<Card>().is_err());
    assert!("11".parse::<Card>().is_err());
    assert!("".parse::<Card>().is_err());
}

#[test]
fn hi_lo_contributions() {
    let low = cards(&["2", "3", "4", "5", "6"]);
    let neutral = cards(&["7", "8", "9"]);
    let high = cards(&["10", "J", "Q", "K", "A"]);

    assert!(low.iter().all(|card| card.hi_lo() == 1));
    assert!(neutral.iter().all(|card| card.hi_lo() == 0));
    assert!(high.iter().all(|card| card.hi_lo() == -1));

    let full_deck: Vec<Card> = Card::ALL.iter().flat_map(|&card| [card; 4]).collect();
    assert_eq!(count_cards(&full_deck, 6).running_count, 0);
}

#[test]
fn fresh_shoe_count() {
    let index = CountIndex::fresh(6);
    assert_eq!(index.running_count, 0);
    assert_eq!(index.observed, 0);
    assert_eq!(index.decks_consumed, 1.0);
    assert_eq!(index.true_count, Some(0.0));
    assert_eq!(index.decks_remaining(6), 5.0);
}

#[test]
fn low_and_high_card_cancel() {
    let index = count_cards(&cards(&["2", "K"]), 6);
    assert_eq!(index.running_count, 0);
    assert_eq!(index.observed, 2);
}

#[test]
fn true_count_divides_by_decks_remaining() {
    let index = count_cards(&[Card::Five; 10], 6);
    assert_eq!(index.running_count, 10);
    assert_eq!(index.true_count, Some(2.0));

    // Two full decks of neutral cards plus four low cards.
    let mut observed = vec![Card::Eight; 100];
    observed.extend([Card::Two; 4]);
    let index = count_cards(&observed, 6);
    assert_eq!(index.decks_consumed, 2.0);
    assert_eq!(index.true_count, Some(1.0));
}

#[test]
fn true_count_unavailable_without_decks_remaining() {
    assert_eq!(count_cards(&[Card::Two], 1).true_count, None);
    assert_eq!(count_cards(&[Card::Two], 0).true_count, None);

    let observed = vec![Card::Three; 52 * 3];
    let index = count_cards(&observed, 2);
    assert_eq!(index.running_count, 156);
    assert_eq!(index.true_count, None);
}

#[test]
fn running_count_ignores_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut observed = random_cards(&mut rng, 80);
    let expected = count_cards(&observed, 6);

    for _ in 0..20 {
        observed.shuffle(&mut rng);
        assert_eq!(count_cards(&observed, 6), expected);
    }
}
