//! Choosing where a human dealer splits the deck.

use crate::error::ShuffleError;
use crate::options::validate_split_precision;
use crate::random::RandomSource;

/// Decks this small are never split; the right hand holds every card.
pub const MIN_SPLIT_CARD_COUNT: usize = 6;

#[cfg(feature = "std")]
fn floor(value: f64) -> f64 {
    value.floor()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn floor(value: f64) -> f64 {
    libm::floor(value)
}

/// Returns the index that splits `card_count` cards into a left segment
/// `[0, index)` and a right segment `[index, card_count)`.
///
/// The split lands near the middle. `split_precision` is the fraction of the
/// deck, centred on the middle, that the split may fall in. A precision of 0
/// or a deck of fewer than [`MIN_SPLIT_CARD_COUNT`] cards yields 0.
///
/// # Errors
///
/// Returns an error if `split_precision` is not a finite value in `[0, 1]`.
///
/// # Example
///
/// ```
/// use handshuffle::split_index;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(3);
/// let index = split_index(52, 0.2, &mut rng).unwrap();
/// assert!((21..=30).contains(&index));
/// assert_eq!(split_index(5, 0.2, &mut rng).unwrap(), 0);
/// ```
pub fn split_index(
    card_count: usize,
    split_precision: f64,
    rng: &mut dyn RandomSource,
) -> Result<usize, ShuffleError> {
    validate_split_precision(split_precision)?;
    if split_precision <= 0.0 || card_count < MIN_SPLIT_CARD_COUNT {
        return Ok(0);
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    let count = card_count as f64;
    let max_spread = floor(count * split_precision) as usize;
    let offset = rng.next_below(max_spread);

    #[expect(
        clippy::cast_precision_loss,
        reason = "spread and offset never exceed the card count"
    )]
    let raw = floor(count / 2.0 - max_spread as f64 / 2.0 + offset as f64);
    debug_assert!(
        (0.0..=count).contains(&raw),
        "split index {raw} outside 0..={card_count}"
    );

    Ok(raw.clamp(0.0, count) as usize)
}
