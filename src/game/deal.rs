use crate::error::DealError;

use super::{Game, GameState, Player};

impl Game {
    /// Deals the opening hands.
    ///
    /// Cards are dealt one at a time, alternating between Player One and
    /// Player Two, until each holds `hand_size` cards. Hands are then sorted
    /// by rank if `sort_hands` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the hands have already been dealt or the draw pile
    /// cannot fill both hands.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        let needed = self.options.hand_size.checked_mul(2);
        if needed.is_none_or(|needed| self.draw_pile.len() < needed) {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..self.options.hand_size {
            for player in [Player::One, Player::Two] {
                let card = self.draw_pile.draw_card().ok_or(DealError::NotEnoughCards)?;
                self.hands[player.index()].add_card(card);
            }
        }

        if self.options.sort_hands {
            for hand in &mut self.hands {
                hand.sort_by_rank();
            }
        }

        self.state = GameState::InProgress;
        log::info!(
            "dealt {} cards to each player, {} left in the draw pile",
            self.options.hand_size,
            self.draw_pile.len()
        );

        Ok(())
    }
}
