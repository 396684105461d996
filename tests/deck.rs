//! Deck container and shuffle entry point tests.

use std::collections::HashSet;

use handshuffle::{
    Card, DECK_SIZE, Dealer, Deck, Rank, ShuffleError, ShuffleOptions, ShuffleStyle, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn new_deck_is_full_and_ordered() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);
    assert!(!deck.has_duplicates());

    let expected: Vec<Card> = Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
        .collect();
    assert_eq!(deck.as_slice(), expected.as_slice());
    assert_eq!(Deck::default(), deck);
}

#[test]
fn equality_follows_contents_and_order() {
    assert_eq!(Deck::new(), Deck::new());

    let mut missing = Deck::new();
    assert_eq!(missing.remove(0), Some(Card::new(Suit::Clubs, Rank::Ace)));
    assert_ne!(Deck::new(), missing);

    let mut extra = Deck::new();
    extra.push(Card::new(Suit::Diamonds, Rank::Eight));
    assert_ne!(Deck::new(), extra);
    assert!(extra.has_duplicates());

    let decks: HashSet<Deck> = [Deck::new(), Deck::new(), extra].into_iter().collect();
    assert_eq!(decks.len(), 2);
}

#[test]
fn container_operations() {
    let mut deck = Deck::empty();
    assert!(deck.is_empty());
    assert_eq!(deck.remove(0), None);

    let queen = Card::new(Suit::Spades, Rank::Queen);
    let four = Card::new(Suit::Hearts, Rank::Four);
    deck.push(four);
    deck.insert(0, queen);
    assert_eq!(deck[0], queen);
    assert!(deck.contains(&four));

    assert!(deck.remove_card(&four));
    assert!(!deck.remove_card(&four));
    assert_eq!(deck.into_vec(), vec![queen]);
}

#[test]
fn display_lists_cards_without_spaces() {
    let deck: Deck = [
        Card::new(Suit::Clubs, Rank::Ace),
        Card::new(Suit::Hearts, Rank::Ten),
    ]
    .into_iter()
    .collect();
    assert_eq!(deck.to_string(), "[ACE_OF_CLUBS,TEN_OF_HEARTS]");
    assert_eq!(Deck::empty().to_string(), "[]");
    assert!(Deck::new().to_string().starts_with("[ACE_OF_CLUBS,KING_OF_CLUBS,"));
}

#[test]
fn shuffled_deck_differs_but_keeps_every_card() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut deck = Deck::new();
    deck.shuffle(&mut rng).unwrap();

    assert_ne!(deck, Deck::new());
    assert_eq!(deck.len(), DECK_SIZE);
    assert!(!deck.has_duplicates());

    deck.sort();
    assert_eq!(deck, Deck::new());
}

#[test]
fn shuffle_all_keeps_effects_before_an_error() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut deck = Deck::new();
    let styles = [
        ShuffleStyle::DEFAULT,
        ShuffleStyle::Hindu,
        ShuffleStyle::DEFAULT,
    ];

    let err = deck.shuffle_all(&styles, &mut rng).unwrap_err();
    assert_eq!(err, ShuffleError::Unimplemented("Hindu"));
    assert_ne!(deck, Deck::new());
    assert!(!deck.has_duplicates());
}

#[test]
fn invalid_options_leave_deck_untouched() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut deck = Deck::new();

    for precision in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
        let style = ShuffleStyle::overhand(ShuffleOptions::default().with_split_precision(precision));
        let err = deck.shuffle_with(&style, &mut rng).unwrap_err();
        assert!(matches!(err, ShuffleError::InvalidSplitPrecision(_)));
        assert_eq!(deck, Deck::new());
    }
}

#[test]
fn dealer_is_reproducible() {
    let mut first = Deck::new();
    let mut second = Deck::new();
    Dealer::new(2024).shuffle_times(&mut first, 1000).unwrap();
    Dealer::new(2024).shuffle_times(&mut second, 1000).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), DECK_SIZE);
    assert!(!first.has_duplicates());

    let mut other = Deck::new();
    Dealer::new(2025).shuffle_times(&mut other, 1000).unwrap();
    assert_ne!(first, other);
}

#[test]
fn dealer_reports_unimplemented_style() {
    let mut dealer = Dealer::new(1).with_style(ShuffleStyle::Riffle);
    assert_eq!(dealer.style(), ShuffleStyle::Riffle);

    let mut deck = Deck::new();
    assert_eq!(
        dealer.shuffle(&mut deck).unwrap_err(),
        ShuffleError::Unimplemented("riffle")
    );
    assert_eq!(dealer.shuffle_times(&mut deck, 0), Ok(()));
    assert_eq!(deck, Deck::new());

    deck.shuffle(dealer.rng()).unwrap();
    assert_ne!(deck, Deck::new());
}
