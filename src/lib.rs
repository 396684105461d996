//! A playing-card deck with human-style shuffles and optional `no_std` support.
//!
//! The crate provides a [`Deck`] of [`Card`]s and shuffle styles that imitate
//! how people shuffle by hand instead of drawing a uniform permutation. The
//! [`Overhand`] shuffle splits the deck near the middle and lets the two hands
//! drop runs of cards in turn.
//!
//! Every shuffle takes a [`RandomSource`]; any seeded `rand` generator works.
//!
//! # Example
//!
//! ```
//! use handshuffle::{Deck, ShuffleOptions, ShuffleStyle};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut deck = Deck::new();
//! deck.shuffle(&mut rng).unwrap();
//!
//! let sloppy = ShuffleStyle::overhand(ShuffleOptions::dealer_fired());
//! deck.shuffle_with(&sloppy, &mut rng).unwrap();
//! assert_eq!(deck.len(), 52);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod options;
pub mod random;
pub mod shuffle;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use dealer::Dealer;
pub use deck::Deck;
pub use error::ShuffleError;
pub use options::{DEALER_FIRED_SPLIT_PRECISION, STANDARD_SPLIT_PRECISION, ShuffleOptions};
pub use random::RandomSource;
pub use shuffle::{
    HandSide, MIN_SPLIT_CARD_COUNT, Overhand, OverhandRecord, Shuffle, ShuffleStyle, Turn,
    split_index,
};
