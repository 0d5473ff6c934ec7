//! Game configuration options.

use crate::error::OptionsError;

/// Smallest supported number of packs.
pub const MIN_PACKS: u8 = 1;

/// Largest supported number of packs.
pub const MAX_PACKS: u8 = 10;

/// Cards dealt to each player when none is configured.
pub const DEFAULT_HAND_SIZE: usize = 8;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use matchdeck::GameOptions;
///
/// let options = GameOptions::default()
///     .with_packs(3)
///     .with_hand_size(7)
///     .with_sort_hands(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of packs combined into the draw pile.
    pub packs: u8,
    /// Cards dealt to each player.
    pub hand_size: usize,
    /// Whether hands are sorted by rank after the deal.
    pub sort_hands: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            packs: MIN_PACKS,
            hand_size: DEFAULT_HAND_SIZE,
            sort_hands: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of packs.
    ///
    /// # Example
    ///
    /// ```
    /// use matchdeck::GameOptions;
    ///
    /// let options = GameOptions::default().with_packs(6);
    /// assert_eq!(options.packs, 6);
    /// ```
    #[must_use]
    pub const fn with_packs(mut self, packs: u8) -> Self {
        self.packs = packs;
        self
    }

    /// Sets the number of cards dealt to each player.
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets whether hands are sorted by rank after the deal.
    #[must_use]
    pub const fn with_sort_hands(mut self, sort_hands: bool) -> Self {
        self.sort_hands = sort_hands;
        self
    }

    /// Returns whether `packs` is within the supported range.
    #[must_use]
    pub const fn is_valid_pack_count(packs: u8) -> bool {
        packs >= MIN_PACKS && packs <= MAX_PACKS
    }

    /// Checks the options.
    ///
    /// # Errors
    ///
    /// Returns an error if the pack count is outside
    /// [`MIN_PACKS`]..=[`MAX_PACKS`] or the hand size is zero.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if !Self::is_valid_pack_count(self.packs) {
            return Err(OptionsError::PackCount);
        }
        if self.hand_size == 0 {
            return Err(OptionsError::HandSize);
        }
        Ok(())
    }
}
