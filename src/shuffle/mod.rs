//! Shuffle styles.
//!
//! A style rearranges a sequence of cards in place using a caller-supplied
//! [`RandomSource`]. [`ShuffleStyle`] lists the human techniques this crate
//! knows about; only the overhand shuffle is implemented so far.

use crate::card::Card;
use crate::error::ShuffleError;
use crate::options::ShuffleOptions;
use crate::random::RandomSource;

mod overhand;
mod split;

pub use overhand::{HandSide, Overhand, OverhandRecord, Turn};
pub use split::{MIN_SPLIT_CARD_COUNT, split_index};

/// A way of shuffling cards.
pub trait Shuffle {
    /// Shuffles `cards` in place. The length of `cards` never changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the style is not implemented or is misconfigured.
    fn shuffle(&self, cards: &mut [Card], rng: &mut dyn RandomSource) -> Result<(), ShuffleError>;
}

impl<T: Shuffle + ?Sized> Shuffle for &T {
    fn shuffle(&self, cards: &mut [Card], rng: &mut dyn RandomSource) -> Result<(), ShuffleError> {
        (**self).shuffle(cards, rng)
    }
}

/// The human shuffling techniques.
///
/// Every style except [`ShuffleStyle::Overhand`] returns
/// [`ShuffleError::Unimplemented`] and leaves the cards as they were.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum ShuffleStyle {
    /// The overhand shuffle.
    Overhand(Overhand),
    /// The Hindu shuffle.
    Hindu,
    /// The weave shuffle.
    Weave,
    /// The riffle shuffle.
    Riffle,
    /// The riffle shuffle performed on the table.
    TableRiffle,
    /// The strip shuffle (running cuts).
    Strip,
    /// The Portland Powerhouse shuffle.
    PortlandPowerhouse,
    /// The shift-wise freestyle show-off shuffle.
    ShiftwiseFreestyle,
}

impl Default for ShuffleStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ShuffleStyle {
    /// The style most people use: overhand with default options.
    pub const DEFAULT: Self = Self::Overhand(Overhand::new(ShuffleOptions::DEFAULT));

    /// An overhand shuffle with the given options.
    #[must_use]
    pub const fn overhand(options: ShuffleOptions) -> Self {
        Self::Overhand(Overhand::new(options))
    }

    /// Human-readable name of the style.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Overhand(_) => "overhand",
            Self::Hindu => "Hindu",
            Self::Weave => "weave",
            Self::Riffle => "riffle",
            Self::TableRiffle => "table riffle",
            Self::Strip => "strip",
            Self::PortlandPowerhouse => "Portland Powerhouse",
            Self::ShiftwiseFreestyle => "shift-wise freestyle",
        }
    }
}

impl Shuffle for ShuffleStyle {
    fn shuffle(&self, cards: &mut [Card], rng: &mut dyn RandomSource) -> Result<(), ShuffleError> {
        match self {
            Self::Overhand(overhand) => overhand.shuffle(cards, rng),
            other => Err(ShuffleError::Unimplemented(other.name())),
        }
    }
}
