//! Turn resolution: match, play or draw, and reshuffle.

use rand::Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::TurnError;
use crate::result::{Reference, TurnAction, TurnReport};

use super::{Game, GameState, Player, is_game_finished};

/// Returns whether `card` can be laid on `reference` (same rank or same suit).
#[must_use]
pub fn can_play(card: &Card, reference: &Card) -> bool {
    card.matches(reference)
}

/// Moves the whole discard pile into the draw pile and shuffles it.
///
/// Returns the number of cards moved.
pub fn reshuffle<R: Rng + ?Sized>(
    draw_pile: &mut Deck,
    discard_pile: &mut Deck,
    rng: &mut R,
) -> usize {
    let moved = discard_pile.len();
    draw_pile.append_from(discard_pile);
    draw_pile.shuffle(rng);
    log::info!("reshuffled {moved} cards into the draw pile");
    moved
}

/// Takes one turn for `player`, whose cards are `hand`.
///
/// The hand is matched against the top of `discard_pile`. When the discard
/// pile is empty, a reference card is drawn from `draw_pile` instead; that
/// card is retired and not placed on any pile. The first card in the hand
/// sharing the reference's rank or suit is played onto the discard pile.
/// Without a match, the player draws one card into the hand.
///
/// If the draw pile is empty once the card is played or drawn, the discard
/// pile (including the card just played) becomes the new draw pile and is
/// shuffled.
///
/// # Errors
///
/// Returns [`TurnError::NoCards`] if a draw is required and neither the draw
/// pile nor the discard pile can supply it. No pile is modified in that case.
pub fn take_turn<R: Rng + ?Sized>(
    draw_pile: &mut Deck,
    hand: &mut Deck,
    discard_pile: &mut Deck,
    player: Player,
    rng: &mut R,
) -> Result<TurnReport, TurnError> {
    let reference = match discard_pile.top() {
        Some(card) => Reference::LastPlayed(card),
        None => Reference::Drawn(draw_pile.top().ok_or(TurnError::NoCards)?),
    };
    let reference_card = reference.card();
    let matched = hand.iter().position(|card| can_play(card, &reference_card));

    // Cards still reachable for a draw once the reference is taken.
    let reserve = draw_pile.len() + discard_pile.len() - usize::from(reference.is_drawn());
    if matched.is_none() && reserve == 0 {
        return Err(TurnError::NoCards);
    }

    if reference.is_drawn() {
        draw_pile.draw_card();
        log::debug!("{player} turns up {reference_card} as the reference card");
    }

    let mut reshuffled = None;
    let played = matched.and_then(|index| hand.take_card(index));
    let action = if let Some(card) = played {
        discard_pile.add_card(card);
        log::debug!("{player} plays {card} on {reference_card}");
        TurnAction::Played(card)
    } else {
        if draw_pile.is_empty() {
            reshuffled = Some(reshuffle(draw_pile, discard_pile, rng));
        }
        let card = draw_pile.draw_card().ok_or(TurnError::NoCards)?;
        hand.add_card(card);
        log::debug!("{player} cannot match {reference_card} and draws {card}");
        TurnAction::Drew(card)
    };

    if draw_pile.is_empty() {
        let moved = reshuffle(draw_pile, discard_pile, rng);
        reshuffled = Some(reshuffled.unwrap_or(0) + moved);
    }

    Ok(TurnReport {
        player,
        reference,
        action,
        reshuffled,
    })
}

impl Game {
    /// Takes a turn for the current player.
    ///
    /// After the turn the game is finished if either hand is empty, and the
    /// turn passes to the other player.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress or no card can be
    /// drawn when one is required.
    pub fn take_turn(&mut self) -> Result<TurnReport, TurnError> {
        if self.state != GameState::InProgress {
            return Err(TurnError::InvalidState);
        }

        let player = self.current;
        let report = take_turn(
            &mut self.draw_pile,
            &mut self.hands[player.index()],
            &mut self.discard_pile,
            player,
            &mut self.rng,
        )?;

        self.turns += 1;
        if report.reference.is_drawn() {
            self.retired += 1;
        }

        let [first, second] = &self.hands;
        if is_game_finished(first, second) {
            log::info!("{player} has emptied their hand after {} turns", self.turns);
            self.state = GameState::Finished;
            self.winner = Some(player);
        }
        self.current = player.other();

        Ok(report)
    }
}
