//! Shuffle configuration options.

use crate::error::ShuffleError;

/// Split precision of a dealer who cuts close to the middle.
pub const STANDARD_SPLIT_PRECISION: f64 = 0.2;

/// Split precision of a dealer who has stopped caring where the deck is cut.
pub const DEALER_FIRED_SPLIT_PRECISION: f64 = 0.7;

/// Configuration options for human-style shuffles.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use handshuffle::ShuffleOptions;
///
/// let options = ShuffleOptions::default()
///     .with_split_precision(0.5)
///     .with_dealer_is_right_handed(false);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShuffleOptions {
    /// Fraction of the deck around the middle where the split may land.
    /// 0 disables splitting, so the whole deck is held by the right hand.
    pub split_precision: f64,
    /// Whether the right hand takes the first turn.
    pub dealer_is_right_handed: bool,
}

impl Default for ShuffleOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ShuffleOptions {
    /// Default options: standard precision, right-handed dealer.
    pub const DEFAULT: Self = Self {
        split_precision: STANDARD_SPLIT_PRECISION,
        dealer_is_right_handed: true,
    };

    /// Options for a sloppy dealer who splits far from the middle.
    ///
    /// # Example
    ///
    /// ```
    /// use handshuffle::{DEALER_FIRED_SPLIT_PRECISION, ShuffleOptions};
    ///
    /// let options = ShuffleOptions::dealer_fired();
    /// assert_eq!(options.split_precision, DEALER_FIRED_SPLIT_PRECISION);
    /// ```
    #[must_use]
    pub const fn dealer_fired() -> Self {
        Self::DEFAULT.with_split_precision(DEALER_FIRED_SPLIT_PRECISION)
    }

    /// Sets the split precision.
    ///
    /// # Example
    ///
    /// ```
    /// use handshuffle::ShuffleOptions;
    ///
    /// let options = ShuffleOptions::default().with_split_precision(0.0);
    /// assert_eq!(options.split_precision, 0.0);
    /// ```
    #[must_use]
    pub const fn with_split_precision(mut self, precision: f64) -> Self {
        self.split_precision = precision;
        self
    }

    /// Sets which hand moves first.
    ///
    /// # Example
    ///
    /// ```
    /// use handshuffle::ShuffleOptions;
    ///
    /// let options = ShuffleOptions::default().with_dealer_is_right_handed(false);
    /// assert_eq!(options.dealer_is_right_handed, false);
    /// ```
    #[must_use]
    pub const fn with_dealer_is_right_handed(mut self, right_handed: bool) -> Self {
        self.dealer_is_right_handed = right_handed;
        self
    }

    /// Checks that the options describe a shuffle that can be performed.
    ///
    /// # Errors
    ///
    /// Returns an error if the split precision is not a finite value in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ShuffleError> {
        validate_split_precision(self.split_precision)
    }
}

pub(crate) fn validate_split_precision(precision: f64) -> Result<(), ShuffleError> {
    if (0.0..=1.0).contains(&precision) {
        Ok(())
    } else {
        Err(ShuffleError::InvalidSplitPrecision(precision))
    }
}
