//! Card model tests.

use core::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

use handshuffle::{Card, DECK_SIZE, Rank, Suit};

#[test]
fn suit_orders_before_rank() {
    let ace_clubs = Card::new(Suit::Clubs, Rank::Ace);
    let ace_spades = Card::new(Suit::Spades, Rank::Ace);
    let king_clubs = Card::new(Suit::Clubs, Rank::King);

    assert_eq!(ace_clubs.cmp(&ace_spades), Ordering::Less);
    assert_eq!(ace_clubs.cmp(&king_clubs), Ordering::Less);
    assert_eq!(ace_clubs.cmp(&ace_clubs), Ordering::Equal);
    assert_eq!(
        Card::new(Suit::Diamonds, Rank::Ace).cmp(&Card::new(Suit::Spades, Rank::Two)),
        Ordering::Greater
    );
}

#[test]
fn ranks_run_from_ace_down_to_two() {
    assert!(Rank::Ace < Rank::King);
    assert!(Rank::Three < Rank::Two);
    assert!(Rank::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(Suit::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(DECK_SIZE, 52);
}

#[test]
fn equality_is_structural() {
    assert_eq!(
        Card::new(Suit::Clubs, Rank::Ace),
        Card::new(Suit::Clubs, Rank::Ace)
    );
    assert_ne!(
        Card::new(Suit::Clubs, Rank::Ace),
        Card::new(Suit::Diamonds, Rank::Ace)
    );
}

#[test]
fn display_uses_rank_of_suit() {
    assert_eq!(Card::new(Suit::Clubs, Rank::Ace).to_string(), "ACE_OF_CLUBS");
    assert_eq!(
        Card::new(Suit::Hearts, Rank::Knave).to_string(),
        "KNAVE_OF_HEARTS"
    );
    assert_eq!(
        Card::new(Suit::Diamonds, Rank::Two).to_string(),
        "TWO_OF_DIAMONDS"
    );
}

#[test]
fn equal_cards_collapse_in_sets() {
    let eight = Card::new(Suit::Hearts, Rank::Eight);
    let seven = Card::new(Suit::Hearts, Rank::Seven);

    let mut sorted = BTreeSet::new();
    sorted.insert(eight);
    sorted.insert(seven);
    assert_eq!(sorted.len(), 2);
    sorted.insert(Card::new(Suit::Hearts, Rank::Eight));
    assert_eq!(sorted.len(), 2);

    let hashed: HashSet<Card> = [eight, seven, Card::new(Suit::Hearts, Rank::Eight)]
        .into_iter()
        .collect();
    assert_eq!(hashed.len(), 2);
}
