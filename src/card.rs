//! Card types.

use core::fmt;

/// Card suit, ordered as declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
}

impl Suit {
    /// Every suit in declaration order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Spades, Self::Diamonds, Self::Hearts];

    /// Upper-case name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "CLUBS",
            Self::Spades => "SPADES",
            Self::Diamonds => "DIAMONDS",
            Self::Hearts => "HEARTS",
        }
    }
}

/// Card rank.
///
/// Ranks are ordered from Ace down to Two, so `Rank::Ace < Rank::King`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// King.
    King,
    /// Queen.
    Queen,
    /// Knave (jack).
    Knave,
    /// Ten.
    Ten,
    /// Nine.
    Nine,
    /// Eight.
    Eight,
    /// Seven.
    Seven,
    /// Six.
    Six,
    /// Five.
    Five,
    /// Four.
    Four,
    /// Three.
    Three,
    /// Two.
    Two,
}

impl Rank {
    /// Every rank in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::King,
        Self::Queen,
        Self::Knave,
        Self::Ten,
        Self::Nine,
        Self::Eight,
        Self::Seven,
        Self::Six,
        Self::Five,
        Self::Four,
        Self::Three,
        Self::Two,
    ];

    /// Upper-case name of the rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "ACE",
            Self::King => "KING",
            Self::Queen => "QUEEN",
            Self::Knave => "KNAVE",
            Self::Ten => "TEN",
            Self::Nine => "NINE",
            Self::Eight => "EIGHT",
            Self::Seven => "SEVEN",
            Self::Six => "SIX",
            Self::Five => "FIVE",
            Self::Four => "FOUR",
            Self::Three => "THREE",
            Self::Two => "TWO",
        }
    }
}

/// A playing card.
///
/// Cards compare by suit first and by rank on a tie. Two cards with the same
/// suit and rank are equal and hash identically.
///
/// ```
/// use handshuffle::{Card, Rank, Suit};
///
/// let card = Card::new(Suit::Clubs, Rank::Ace);
/// assert_eq!(card.to_string(), "ACE_OF_CLUBS");
/// assert!(card < Card::new(Suit::Spades, Rank::Ace));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_OF_{}", self.rank.name(), self.suit.name())
    }
}

/// Number of unique cards in a standard deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();
