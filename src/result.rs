//! Turn reports and final game result.

use crate::card::Card;
use crate::game::Player;

/// The card a turn was matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    /// The top of the discard pile (the last card played).
    LastPlayed(Card),
    /// Drawn from the draw pile because the discard pile was empty.
    ///
    /// The card is retired: it is not placed on any pile.
    Drawn(Card),
}

impl Reference {
    /// Returns the reference card.
    #[must_use]
    pub const fn card(&self) -> Card {
        match self {
            Self::LastPlayed(card) | Self::Drawn(card) => *card,
        }
    }

    /// Returns whether the reference was drawn from the draw pile.
    #[must_use]
    pub const fn is_drawn(&self) -> bool {
        matches!(self, Self::Drawn(_))
    }
}

/// What the player did on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// Played a matching card onto the discard pile.
    Played(Card),
    /// Had no matching card and drew one into the hand.
    Drew(Card),
}

/// Outcome of a single turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// The player who took the turn.
    pub player: Player,
    /// The card the hand was matched against.
    pub reference: Reference,
    /// The card played or drawn.
    pub action: TurnAction,
    /// Number of cards moved from the discard pile into the draw pile, if the
    /// draw pile ran out during the turn.
    pub reshuffled: Option<usize>,
}

impl TurnReport {
    /// Returns the played card, if the player matched.
    #[must_use]
    pub const fn played(&self) -> Option<Card> {
        match self.action {
            TurnAction::Played(card) => Some(card),
            TurnAction::Drew(_) => None,
        }
    }

    /// Returns the drawn card, if the player could not match.
    #[must_use]
    pub const fn drawn(&self) -> Option<Card> {
        match self.action {
            TurnAction::Drew(card) => Some(card),
            TurnAction::Played(_) => None,
        }
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// The player whose hand is empty.
    pub winner: Player,
    /// Number of turns taken.
    pub turns: usize,
    /// Number of reference cards retired from play.
    pub retired: usize,
}
