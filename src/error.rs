//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when validating game options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Pack count outside the supported range.
    #[error("pack count must be between 1 and 10")]
    PackCount,
    /// Hand size of zero.
    #[error("hand size must be at least one")]
    HandSize,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Cards have already been dealt.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the draw pile to fill both hands.
    #[error("not enough cards in the draw pile")]
    NotEnoughCards,
}

/// Errors that can occur while taking a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The game is not in progress.
    #[error("invalid game state for taking a turn")]
    InvalidState,
    /// A draw was required but both the draw pile and the discard pile are empty.
    #[error("no cards left to draw")]
    NoCards,
}
