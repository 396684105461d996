//! A dealer that owns a seeded random source.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::deck::Deck;
use crate::error::ShuffleError;
use crate::shuffle::ShuffleStyle;

/// Shuffles decks with a fixed style and its own seeded generator.
///
/// Two dealers built from the same seed and style shuffle identical decks
/// identically.
///
/// # Example
///
/// ```
/// use handshuffle::{Deck, Dealer};
///
/// let mut first = Deck::new();
/// let mut second = Deck::new();
/// Dealer::new(9).shuffle(&mut first).unwrap();
/// Dealer::new(9).shuffle(&mut second).unwrap();
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone)]
pub struct Dealer {
    style: ShuffleStyle,
    rng: ChaCha8Rng,
}

impl Dealer {
    /// Creates a dealer using [`ShuffleStyle::DEFAULT`] and the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            style: ShuffleStyle::DEFAULT,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Sets the style used by [`Dealer::shuffle`].
    #[must_use]
    pub const fn with_style(mut self, style: ShuffleStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the dealer's style.
    #[must_use]
    pub const fn style(&self) -> ShuffleStyle {
        self.style
    }

    /// Returns the dealer's random source, for shuffling with other styles.
    pub const fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Shuffles the deck once.
    ///
    /// # Errors
    ///
    /// Returns the style's error.
    pub fn shuffle(&mut self, deck: &mut Deck) -> Result<(), ShuffleError> {
        deck.shuffle_with(&self.style, &mut self.rng)
    }

    /// Shuffles the deck `times` times in a row.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the style.
    pub fn shuffle_times(&mut self, deck: &mut Deck, times: usize) -> Result<(), ShuffleError> {
        debug!(times, style = self.style.name(), "repeated shuffle");
        deck.shuffle_all(core::iter::repeat_n(&self.style, times), &mut self.rng)
    }
}
