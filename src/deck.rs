//! An ordered deck of cards.

use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ShuffleError;
use crate::random::RandomSource;
use crate::shuffle::{Shuffle, ShuffleStyle};

/// An ordered, mutable sequence of cards.
///
/// A new deck holds every suit and rank once, suit by suit. Nothing stops a
/// caller from pushing duplicates afterwards. Two decks are equal when they
/// hold the same cards in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a full 52-card deck in suit-then-rank order.
    ///
    /// ```
    /// use handshuffle::{Card, DECK_SIZE, Deck, Rank, Suit};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// assert_eq!(deck[0], Card::new(Suit::Clubs, Rank::Ace));
    /// assert_eq!(deck[51], Card::new(Suit::Hearts, Rank::Two));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a deck with no cards.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Adds a card to the bottom of the deck.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Inserts a card at `index`, shifting later cards down.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, card: Card) {
        self.cards.insert(index, card);
    }

    /// Removes and returns the card at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Removes the first card equal to `card`. Returns whether one was found.
    pub fn remove_card(&mut self, card: &Card) -> bool {
        let Some(index) = self.cards.iter().position(|c| c == card) else {
            return false;
        };
        self.cards.remove(index);
        true
    }

    /// Returns `true` if the deck holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns an iterator over the cards, top first.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the cards as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// Consumes the deck and returns its cards.
    #[must_use]
    pub fn into_vec(self) -> Vec<Card> {
        self.cards
    }

    /// Sorts the deck by suit, then rank.
    pub fn sort(&mut self) {
        self.cards.sort_unstable();
    }

    /// Returns `true` if some suit and rank appear more than once.
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.cards.len());
        !self.cards.iter().all(|card| seen.insert(*card))
    }

    /// Shuffles the deck with [`ShuffleStyle::DEFAULT`].
    ///
    /// # Errors
    ///
    /// Never fails with the default style; the `Result` matches the other
    /// shuffle methods.
    ///
    /// # Example
    ///
    /// ```
    /// use handshuffle::Deck;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut deck = Deck::new();
    /// deck.shuffle(&mut ChaCha8Rng::seed_from_u64(7)).unwrap();
    /// assert_ne!(deck, Deck::new());
    /// assert!(!deck.has_duplicates());
    /// ```
    pub fn shuffle(&mut self, rng: &mut dyn RandomSource) -> Result<(), ShuffleError> {
        self.shuffle_with(&ShuffleStyle::DEFAULT, rng)
    }

    /// Shuffles the deck with the given style.
    ///
    /// # Errors
    ///
    /// Returns the style's error. The deck is unchanged in that case.
    pub fn shuffle_with<S: Shuffle + ?Sized>(
        &mut self,
        style: &S,
        rng: &mut dyn RandomSource,
    ) -> Result<(), ShuffleError> {
        style.shuffle(&mut self.cards, rng)
    }

    /// Applies each style in turn.
    ///
    /// Stops at the first error. Styles applied before the failing one keep
    /// their effect.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a style.
    ///
    /// # Example
    ///
    /// ```
    /// use handshuffle::{Deck, ShuffleStyle};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut deck = Deck::new();
    /// let styles = [ShuffleStyle::DEFAULT; 3];
    /// deck.shuffle_all(&styles, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn shuffle_all<I>(&mut self, styles: I, rng: &mut dyn RandomSource) -> Result<(), ShuffleError>
    where
        I: IntoIterator,
        I::Item: Shuffle,
    {
        for style in styles {
            style.shuffle(&mut self.cards, rng)?;
        }
        Ok(())
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
