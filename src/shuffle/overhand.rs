//! The overhand shuffle.
//!
//! The deck is split in two. The hands then take turns letting a run of cards
//! slip from their segment onto the new pile until both segments are empty.

use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::card::Card;
use crate::error::ShuffleError;
use crate::options::ShuffleOptions;
use crate::random::RandomSource;

use super::Shuffle;
use super::split::split_index;

/// Exclusive upper limit for the smallest run length of a shuffle.
const LOWER_BOUND_LIMIT: usize = 3;
/// Range of the gap between the smallest and largest run length.
const SPREAD_MIN: usize = 5;
const SPREAD_MAX: usize = 9;
/// Gap used when the drawn upper bound does not exceed the lower bound.
const FALLBACK_SPREAD: usize = 3;

/// The hand holding a segment of the split deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandSide {
    /// Holds the cards before the split index.
    Left,
    /// Holds the cards from the split index to the end.
    Right,
}

/// One hand's turn during an overhand shuffle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// The hand that moved.
    pub hand: HandSide,
    /// The drawn number of cards to let slip.
    pub run_length: usize,
    /// The number of cards actually moved. Smaller than `run_length` when
    /// the hand or the deck ran out.
    pub moved: usize,
}

/// What happened during one overhand shuffle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverhandRecord {
    /// Where the deck was split.
    pub split_index: usize,
    /// Smallest run length a turn may draw.
    pub lower_bound: usize,
    /// Exclusive upper limit of a turn's run length.
    pub upper_bound: usize,
    /// Every turn, in order.
    pub turns: Vec<Turn>,
}

/// The overhand shuffle: the one most people use, a simple and sloppy shuffle.
///
/// # Example
///
/// ```
/// use handshuffle::{Deck, Overhand, ShuffleOptions};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut deck = Deck::new();
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let overhand = Overhand::new(ShuffleOptions::default());
/// let record = overhand.shuffle_recorded(deck.as_mut_slice(), &mut rng).unwrap();
/// assert!(!record.turns.is_empty());
/// assert_eq!(deck.len(), 52);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Overhand {
    /// Options controlling the split and the first hand.
    pub options: ShuffleOptions,
}

impl Overhand {
    /// Creates an overhand shuffle with the given options.
    #[must_use]
    pub const fn new(options: ShuffleOptions) -> Self {
        Self { options }
    }

    /// Shuffles `cards` in place and returns a record of the turns taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid. The cards are untouched
    /// in that case.
    pub fn shuffle_recorded(
        &self,
        cards: &mut [Card],
        rng: &mut dyn RandomSource,
    ) -> Result<OverhandRecord, ShuffleError> {
        self.options.validate()?;
        trace!("starting overhand shuffle");

        let len = cards.len();
        let split = split_index(len, self.options.split_precision, rng)?;
        debug!(split, len, "deck split");

        let snapshot: Vec<Card> = cards.to_vec();
        let (lower_bound, upper_bound) = draw_run_bounds(rng);
        debug!(lower_bound, upper_bound, "run length bounds");

        let mut left = 0;
        let mut right = split;
        let mut right_turn = self.options.dealer_is_right_handed;
        let mut one_hand_finished = false;
        let mut last_was_zero = false;
        let mut turns = Vec::new();

        let mut i = 0;
        while i < len {
            // Never let two turns in a row drop nothing.
            let low = if last_was_zero { 1 } else { lower_bound };
            let run_length = rng.next_between(low, upper_bound);
            last_was_zero = run_length == 0;

            let (hand, cursor, end) = if right_turn {
                (HandSide::Right, &mut right, len)
            } else {
                (HandSide::Left, &mut left, split)
            };

            let mut moved = 0;
            while moved < run_length && i < len && *cursor < end {
                cards[i] = snapshot[*cursor];
                i += 1;
                *cursor += 1;
                moved += 1;
            }
            debug!(?hand, run_length, moved, "turn");
            turns.push(Turn {
                hand,
                run_length,
                moved,
            });

            if left >= split && !right_turn {
                right_turn = true;
                one_hand_finished = true;
            }
            if right >= len && right_turn {
                right_turn = false;
                one_hand_finished = true;
            }
            if !one_hand_finished {
                right_turn = !right_turn;
            }
        }

        debug_assert_eq!(left, split, "left hand kept cards");
        debug_assert_eq!(right, len, "right hand kept cards");

        Ok(OverhandRecord {
            split_index: split,
            lower_bound,
            upper_bound,
            turns,
        })
    }
}

impl Shuffle for Overhand {
    fn shuffle(&self, cards: &mut [Card], rng: &mut dyn RandomSource) -> Result<(), ShuffleError> {
        self.shuffle_recorded(cards, rng).map(|_| ())
    }
}

fn draw_run_bounds(rng: &mut dyn RandomSource) -> (usize, usize) {
    let lower = rng.next_between(0, LOWER_BOUND_LIMIT);
    let spread = rng.next_between(SPREAD_MIN, SPREAD_MAX);
    let upper = rng.next_between(lower, lower + spread);
    if upper <= lower {
        (lower, lower + FALLBACK_SPREAD)
    } else {
        (lower, upper)
    }
}
